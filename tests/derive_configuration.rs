use std::ptr;

use quickcheck_macros::quickcheck;
use strum::IntoEnumIterator;
use water_quality_viz::domain::visualization::{
    CHINA_MAP, ConfigurationVariant, DatasetLoadState, LOADING_TITLE, REGION_SAMPLES,
    REGION_SCORE_MAX, REGION_SCORE_MIN, SeriesData, SeriesKind, VisualizationMode,
    derive_configuration,
};

fn pick_mode(index: u8) -> VisualizationMode {
    let modes: Vec<_> = VisualizationMode::iter().collect();
    modes[index as usize % modes.len()]
}

#[quickcheck]
fn only_regional_depends_on_load_flag(index: u8) -> bool {
    let mode = pick_mode(index);
    let before = derive_configuration(mode, DatasetLoadState::NotLoaded);
    let after = derive_configuration(mode, DatasetLoadState::Loaded);
    mode.needs_dataset() != ptr::eq(before, after)
}

#[quickcheck]
fn derivation_is_stable(index: u8, loaded: bool) -> bool {
    let mode = pick_mode(index);
    let load_state = DatasetLoadState::from(loaded);
    ptr::eq(derive_configuration(mode, load_state), derive_configuration(mode, load_state))
}

#[test]
fn every_mode_has_its_own_variant() {
    let expected = [
        (VisualizationMode::Trend, ConfigurationVariant::Trend),
        (VisualizationMode::Comparison, ConfigurationVariant::Comparison),
        (VisualizationMode::Distribution, ConfigurationVariant::Distribution),
        (VisualizationMode::Regional, ConfigurationVariant::Regional),
    ];
    for (mode, variant) in expected {
        assert_eq!(derive_configuration(mode, DatasetLoadState::Loaded).variant, variant);
    }
}

#[test]
fn regional_without_dataset_is_placeholder() {
    let config = derive_configuration(VisualizationMode::Regional, DatasetLoadState::NotLoaded);
    assert!(config.is_placeholder());
    assert_eq!(config.title.as_ref().map(|t| t.text.as_str()), Some(LOADING_TITLE));
    assert!(config.series.is_empty());
    assert!(config.tooltip.is_none());
    assert!(config.visual_map.is_none());
}

#[test]
fn regional_map_covers_sample_catalog() {
    let config = derive_configuration(VisualizationMode::Regional, DatasetLoadState::Loaded);
    assert_eq!(config.series.len(), 1);

    let series = &config.series[0];
    assert!(matches!(&series.kind, SeriesKind::Map { map, roam: true, .. } if map == CHINA_MAP));

    let SeriesData::Regions(regions) = &series.data else {
        panic!("map series should carry region samples");
    };
    assert_eq!(regions.len(), 34);
    assert_eq!(regions.as_slice(), REGION_SAMPLES.as_slice());
    assert!(regions.iter().all(|r| {
        let score = f64::from(r.value);
        (REGION_SCORE_MIN..=REGION_SCORE_MAX).contains(&score)
    }));

    let visual_map = config.visual_map.as_ref().unwrap();
    assert_eq!((visual_map.min, visual_map.max), (REGION_SCORE_MIN, REGION_SCORE_MAX));
}

#[test]
fn cartesian_views_have_axes() {
    for mode in [VisualizationMode::Trend, VisualizationMode::Comparison] {
        let config = derive_configuration(mode, DatasetLoadState::NotLoaded);
        let axes = config.axes.as_ref().unwrap();
        assert!(config.series.iter().all(|s| s.data.len() == axes.categories.len()));
    }
    let comparison = derive_configuration(VisualizationMode::Comparison, DatasetLoadState::NotLoaded);
    assert!(comparison.series.iter().all(|s| s.style.corner_radius == Some([4, 4, 0, 0])));
}

#[test]
fn distribution_slices_sum_to_total() {
    let config = derive_configuration(VisualizationMode::Distribution, DatasetLoadState::NotLoaded);
    let SeriesData::Slices(slices) = &config.series[0].data else {
        panic!("pie series should carry slices");
    };
    let names: Vec<_> = slices.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["优良", "良好", "一般", "较差", "差"]);
    assert_eq!(slices.iter().map(|s| s.value).sum::<f64>(), 3147.0);
}
