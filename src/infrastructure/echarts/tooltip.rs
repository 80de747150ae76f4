use serde::Deserialize;

/// Subset of the params object ECharts hands to an item tooltip formatter
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TooltipParams {
    #[serde(default)]
    pub name: String,
    /// `NaN` for regions without data, which arrives here as `null`
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub data: Option<RegionDatum>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegionDatum {
    #[serde(default)]
    pub monitors: Option<u32>,
}

/// HTML body for the regional map tooltip.
///
/// Regions present in the sample catalog show score and monitor count;
/// any other hovered area shows only its name.
pub fn region_tooltip_html(params: &TooltipParams) -> String {
    let name = escape_html(&params.name);
    match (&params.data, params.value) {
        (Some(datum), Some(value)) => format!(
            concat!(
                r#"<div style="padding: 8px;">"#,
                r#"<div style="font-weight: bold; margin-bottom: 4px; font-size: 14px;">{}</div>"#,
                r#"<div style="margin-bottom: 2px;">水质评分: <span style="color: #00CCFF; font-weight: bold;">{}</span>分</div>"#,
                r#"<div>监测点数: <span style="color: #00CC66;">{}</span>个</div>"#,
                r#"</div>"#,
            ),
            name,
            value,
            datum.monitors.unwrap_or(0),
        ),
        _ => format!(r#"<div style="padding: 8px; font-weight: bold;">{}</div>"#, name),
    }
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_region_shows_score_and_monitors() {
        let params: TooltipParams = serde_json::from_str(
            r#"{"name":"浙江","value":94,"data":{"name":"浙江","value":94,"monitors":16}}"#,
        )
        .unwrap();
        let html = region_tooltip_html(&params);
        assert!(html.contains("浙江"));
        assert!(html.contains(">94<"));
        assert!(html.contains(">16<"));
    }

    #[test]
    fn unknown_region_shows_name_only() {
        let params: TooltipParams = serde_json::from_str(r#"{"name":"南海诸岛","value":null}"#).unwrap();
        let html = region_tooltip_html(&params);
        assert_eq!(html, r#"<div style="padding: 8px; font-weight: bold;">南海诸岛</div>"#);
    }

    #[test]
    fn names_are_escaped() {
        let params = TooltipParams { name: "<b>".to_string(), ..Default::default() };
        assert!(region_tooltip_html(&params).contains("&lt;b&gt;"));
    }
}
