use quickcheck_macros::quickcheck;
use strum::IntoEnumIterator;
use water_quality_viz::application::ViewSelector;
use water_quality_viz::domain::visualization::{DatasetLoadState, VisualizationMode};

#[test]
fn starts_on_trend_without_dataset() {
    let selector = ViewSelector::default();
    assert_eq!(selector.mode(), VisualizationMode::Trend);
    assert_eq!(selector.load_state(), DatasetLoadState::NotLoaded);
    assert!(!selector.is_waiting_for_dataset());
}

#[test]
fn selecting_active_mode_is_a_no_op() {
    let mut selector = ViewSelector::new(VisualizationMode::Comparison);
    let before = selector;
    assert!(!selector.select_mode(VisualizationMode::Comparison));
    assert_eq!(selector, before);
}

#[test]
fn dataset_flag_is_idempotent() {
    let mut selector = ViewSelector::default();
    assert!(selector.on_dataset_loaded());
    assert!(!selector.on_dataset_loaded());
    assert_eq!(selector.load_state(), DatasetLoadState::Loaded);
}

#[test]
fn waiting_hint_tracks_regional_mode() {
    let mut selector = ViewSelector::default();
    selector.select_mode(VisualizationMode::Regional);
    assert!(selector.is_waiting_for_dataset());
    assert!(selector.configuration().is_placeholder());

    selector.on_dataset_loaded();
    assert!(!selector.is_waiting_for_dataset());
    assert!(!selector.configuration().is_placeholder());
}

#[quickcheck]
fn mode_changes_never_reset_dataset_flag(picks: Vec<u8>) -> bool {
    let modes: Vec<_> = VisualizationMode::iter().collect();
    let mut selector = ViewSelector::default();
    selector.on_dataset_loaded();
    for pick in picks {
        selector.select_mode(modes[pick as usize % modes.len()]);
    }
    selector.load_state().is_loaded()
}

#[test]
fn tab_ids_are_stable() {
    let ids: Vec<_> = VisualizationMode::iter().map(|m| m.tab_id()).collect();
    assert_eq!(ids, ["line", "bar", "pie", "map"]);
    assert_eq!("map".parse::<VisualizationMode>(), Ok(VisualizationMode::Regional));
    assert_eq!(VisualizationMode::Distribution.to_string(), "分布占比");
}
