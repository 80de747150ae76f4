use crate::domain::{
    errors::{DatasetError, DatasetResult},
    logging::{LogComponent, LogLevel, get_logger},
};
use gloo::net::http::Request;
use serde_json::Value;

/// HTTP client for the static geographic boundary file
#[derive(Debug, Clone)]
pub struct GeoDatasetClient {
    url: String,
}

impl GeoDatasetClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// GET the dataset. Anything but a 2xx response with a JSON body is an error.
    pub async fn fetch(self) -> DatasetResult<Value> {
        get_logger().info(
            LogComponent::Infrastructure("GeoDatasetClient"),
            &format!("📡 Fetching boundary dataset from {}", self.url),
        );

        let response = Request::get(&self.url)
            .send()
            .await
            .map_err(|e| DatasetError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(DatasetError::HttpStatus {
                status: response.status(),
                text: response.status_text(),
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| DatasetError::Malformed(e.to_string()))?;

        get_logger().log_with_metadata(
            LogLevel::Info,
            LogComponent::Infrastructure("GeoDatasetClient"),
            "✅ Boundary dataset received",
            &format!("features={}", feature_count(&body)),
        );
        Ok(body)
    }
}

/// Number of entries in a GeoJSON `FeatureCollection`, 0 for anything else
pub fn feature_count(geo_json: &Value) -> usize {
    geo_json
        .get("features")
        .and_then(Value::as_array)
        .map_or(0, Vec::len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn counts_features_of_collections_only() {
        let collection = json!({"type": "FeatureCollection", "features": [{}, {}, {}]});
        assert_eq!(feature_count(&collection), 3);
        assert_eq!(feature_count(&json!([1, 2])), 0);
    }
}
