use serde::Serialize;

/// Illustrative water-quality score for one administrative region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegionSample {
    pub name: &'static str,
    /// Score on a 0-100 scale
    pub value: u8,
    pub monitor_count: u32,
}

impl RegionSample {
    pub const fn new(name: &'static str, value: u8, monitor_count: u32) -> Self {
        Self { name, value, monitor_count }
    }
}

/// Static sample catalog, one entry per province-level region
pub static REGION_SAMPLES: [RegionSample; 34] = [
    RegionSample::new("台湾", 92, 5),
    RegionSample::new("河北", 81, 10),
    RegionSample::new("山西", 76, 5),
    RegionSample::new("内蒙古", 75, 5),
    RegionSample::new("辽宁", 79, 8),
    RegionSample::new("吉林", 78, 6),
    RegionSample::new("黑龙江", 80, 7),
    RegionSample::new("江苏", 91, 22),
    RegionSample::new("浙江", 94, 16),
    RegionSample::new("安徽", 84, 9),
    RegionSample::new("福建", 90, 14),
    RegionSample::new("江西", 85, 7),
    RegionSample::new("山东", 89, 19),
    RegionSample::new("河南", 83, 11),
    RegionSample::new("湖北", 87, 12),
    RegionSample::new("湖南", 86, 13),
    RegionSample::new("广东", 88, 25),
    RegionSample::new("广西", 84, 7),
    RegionSample::new("海南", 91, 4),
    RegionSample::new("四川", 85, 14),
    RegionSample::new("贵州", 87, 6),
    RegionSample::new("云南", 93, 10),
    RegionSample::new("西藏", 98, 3),
    RegionSample::new("陕西", 82, 8),
    RegionSample::new("甘肃", 73, 4),
    RegionSample::new("青海", 96, 3),
    RegionSample::new("宁夏", 74, 2),
    RegionSample::new("新疆", 77, 4),
    RegionSample::new("北京", 92, 15),
    RegionSample::new("天津", 86, 6),
    RegionSample::new("上海", 95, 18),
    RegionSample::new("重庆", 88, 6),
    RegionSample::new("香港", 93, 4),
    RegionSample::new("澳门", 92, 2),
];

pub fn find_region(name: &str) -> Option<&'static RegionSample> {
    REGION_SAMPLES.iter().find(|sample| sample.name == name)
}

/// Headline figure shown under the chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryMetric {
    pub label: &'static str,
    pub value: &'static str,
    pub unit: &'static str,
}

pub static SUMMARY_METRICS: [SummaryMetric; 4] = [
    SummaryMetric { label: "今日监测数据", value: "24,580", unit: "条" },
    SummaryMetric { label: "数据准确率", value: "99.8", unit: "%" },
    SummaryMetric { label: "异常预警", value: "3", unit: "条" },
    SummaryMetric { label: "系统运行时间", value: "99.9", unit: "%" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_names_are_unique() {
        let names: HashSet<_> = REGION_SAMPLES.iter().map(|s| s.name).collect();
        assert_eq!(names.len(), REGION_SAMPLES.len());
    }

    #[test]
    fn lookup_by_name() {
        let guangdong = find_region("广东").unwrap();
        assert_eq!((guangdong.value, guangdong.monitor_count), (88, 25));
        assert!(find_region("Atlantis").is_none());
    }
}
