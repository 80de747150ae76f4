use crate::domain::{
    logging::LogComponent,
    visualization::{ChartConfiguration, DatasetLoadState, VisualizationMode, derive_configuration},
};

/// Active visualization mode plus the boundary dataset flag.
///
/// Plain `Copy` state; the presentation layer keeps a snapshot of it in a
/// signal and the coordinator owns the authoritative copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewSelector {
    mode: VisualizationMode,
    load_state: DatasetLoadState,
}

impl ViewSelector {
    pub fn new(mode: VisualizationMode) -> Self {
        Self { mode, load_state: DatasetLoadState::NotLoaded }
    }

    pub fn mode(&self) -> VisualizationMode {
        self.mode
    }

    pub fn load_state(&self) -> DatasetLoadState {
        self.load_state
    }

    /// Returns `false` when `mode` was already active.
    pub fn select_mode(&mut self, mode: VisualizationMode) -> bool {
        if self.mode == mode {
            return false;
        }
        crate::log_debug!(
            LogComponent::Application("ViewSelector"),
            "Mode {} -> {}",
            self.mode.tab_id(),
            mode.tab_id()
        );
        self.mode = mode;
        true
    }

    /// One-way transition to `Loaded`. Returns `false` if already loaded.
    pub fn on_dataset_loaded(&mut self) -> bool {
        if self.load_state.is_loaded() {
            return false;
        }
        self.load_state = DatasetLoadState::Loaded;
        true
    }

    /// Regional view selected while the map cannot be drawn yet
    pub fn is_waiting_for_dataset(&self) -> bool {
        self.mode.needs_dataset() && !self.load_state.is_loaded()
    }

    pub fn configuration(&self) -> &'static ChartConfiguration {
        derive_configuration(self.mode, self.load_state)
    }
}
