use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use futures::future::{AbortHandle, Abortable};
use serde_json::Value;

use crate::application::{chart_host::ChartHost, view_selector::ViewSelector};
use crate::domain::{
    errors::{DatasetResult, WidgetResult},
    logging::{LogComponent, get_logger},
    visualization::{CHINA_MAP, ChartConfiguration, VisualizationMode, WidgetEngine},
};

/// What happened to one boundary dataset request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetOutcome {
    /// Registered with the engine; the load flag is now set
    Loaded,
    /// A previous request already set the flag
    AlreadyLoaded,
    /// Fetch or registration failed; the flag stays unset for the session
    Unavailable,
    /// The requester went away before the result arrived
    Discarded,
}

/// Keeps the View Selector and the Chart Host in sync.
///
/// Every state change that alters the derived configuration is pushed to the
/// host immediately when a surface is mounted.
pub struct VisualizationCoordinator<E: WidgetEngine> {
    selector: ViewSelector,
    host: ChartHost<E>,
    pending_fetch: Option<AbortHandle>,
}

impl<E: WidgetEngine + 'static> VisualizationCoordinator<E> {
    pub fn new(engine: E, initial_mode: VisualizationMode) -> Self {
        get_logger().info(
            LogComponent::Application("VisualizationCoordinator"),
            &format!("Creating coordinator, initial mode {}", initial_mode.tab_id()),
        );

        Self {
            selector: ViewSelector::new(initial_mode),
            host: ChartHost::new(engine),
            pending_fetch: None,
        }
    }

    pub fn selector(&self) -> ViewSelector {
        self.selector
    }

    pub fn configuration(&self) -> &'static ChartConfiguration {
        self.selector.configuration()
    }

    pub fn host(&self) -> &ChartHost<E> {
        &self.host
    }

    /// Bind the widget to `surface` and draw the current configuration
    pub fn mount(&mut self, surface: &E::Surface) -> WidgetResult<()> {
        self.host.mount(surface)?;
        self.host.apply(self.selector.configuration())
    }

    /// Returns whether the mode changed. The widget is redrawn only then.
    pub fn select_mode(&mut self, mode: VisualizationMode) -> WidgetResult<bool> {
        if !self.selector.select_mode(mode) {
            return Ok(false);
        }
        self.refresh()?;
        Ok(true)
    }

    /// Register a fetched boundary dataset and flip the load flag.
    pub fn complete_dataset(&mut self, geo_json: &Value) -> DatasetOutcome {
        if !self.host.liveness().is_live() {
            get_logger().debug(
                LogComponent::Application("VisualizationCoordinator"),
                "Dataset arrived after unmount, dropping it",
            );
            return DatasetOutcome::Discarded;
        }
        if self.selector.load_state().is_loaded() {
            return DatasetOutcome::AlreadyLoaded;
        }

        if let Err(e) = self.host.engine().register_map(CHINA_MAP, geo_json) {
            get_logger().error(
                LogComponent::Application("VisualizationCoordinator"),
                &format!("❌ Error registering map: {}", e),
            );
            return DatasetOutcome::Unavailable;
        }

        self.selector.on_dataset_loaded();
        get_logger().info(
            LogComponent::Application("VisualizationCoordinator"),
            "🗺 Boundary dataset registered",
        );

        if let Err(e) = self.refresh() {
            get_logger().warn(
                LogComponent::Application("VisualizationCoordinator"),
                &format!("Redraw after dataset load failed: {}", e),
            );
        }
        DatasetOutcome::Loaded
    }

    /// Drive one dataset request to completion.
    ///
    /// The request is cancelled by [`unmount`](Self::unmount); a result that
    /// still slips through after teardown is dropped. Fetch errors are logged
    /// here and never propagated.
    pub fn load_dataset<F>(this: &Rc<RefCell<Self>>, fetch: F) -> impl Future<Output = DatasetOutcome> + 'static
    where
        F: Future<Output = DatasetResult<Value>> + 'static,
    {
        let (handle, registration) = AbortHandle::new_pair();
        let liveness = {
            let mut coordinator = this.borrow_mut();
            if let Some(previous) = coordinator.pending_fetch.replace(handle) {
                previous.abort();
            }
            coordinator.host.liveness()
        };
        let weak = Rc::downgrade(this);

        async move {
            let result = match Abortable::new(fetch, registration).await {
                Ok(result) => result,
                Err(_aborted) => return DatasetOutcome::Discarded,
            };

            let Some(this) = weak.upgrade().filter(|_| liveness.is_live()) else {
                return DatasetOutcome::Discarded;
            };
            let mut coordinator = this.borrow_mut();
            coordinator.pending_fetch = None;

            match result {
                Ok(geo_json) => coordinator.complete_dataset(&geo_json),
                Err(e) => {
                    get_logger().error(
                        LogComponent::Application("VisualizationCoordinator"),
                        &format!("❌ Error loading map: {}", e),
                    );
                    DatasetOutcome::Unavailable
                }
            }
        }
    }

    /// Cancel pending work and release the widget. Safe to call repeatedly.
    pub fn unmount(&mut self) {
        if let Some(pending) = self.pending_fetch.take() {
            pending.abort();
        }
        self.host.unmount();
    }

    fn refresh(&self) -> WidgetResult<()> {
        if self.host.is_mounted() {
            self.host.apply(self.selector.configuration())
        } else {
            Ok(())
        }
    }
}
