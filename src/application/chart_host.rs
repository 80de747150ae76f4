use std::cell::Cell;
use std::rc::Rc;

use crate::domain::{
    errors::{WidgetError, WidgetResult},
    logging::{LogComponent, get_logger},
    visualization::{ChartConfiguration, RenderingWidget, ResizeSubscription, WidgetEngine},
};

/// Shared flag telling async work whether its requester is still mounted.
#[derive(Debug, Clone)]
pub struct LivenessToken(Rc<Cell<bool>>);

impl LivenessToken {
    fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_live(&self) -> bool {
        self.0.get()
    }

    fn revoke(&self) {
        self.0.set(false);
    }
}

struct Mounted<E: WidgetEngine> {
    widget: Rc<E::Widget>,
    resize: E::Resize,
}

/// Owns the single widget instance of one display surface.
///
/// `mount` succeeds once per host; `unmount` runs at most once and is also
/// performed on drop, so every exit path releases the rendering context.
pub struct ChartHost<E: WidgetEngine> {
    engine: E,
    mounted: Option<Mounted<E>>,
    was_mounted: bool,
    liveness: LivenessToken,
}

impl<E: WidgetEngine> ChartHost<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            mounted: None,
            was_mounted: false,
            liveness: LivenessToken::new(),
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    /// Live until `unmount`, whether or not a surface was ever mounted
    pub fn liveness(&self) -> LivenessToken {
        self.liveness.clone()
    }

    pub fn mount(&mut self, surface: &E::Surface) -> WidgetResult<()> {
        if self.was_mounted {
            return Err(WidgetError::AlreadyMounted);
        }

        let widget = Rc::new(self.engine.init(surface)?);
        let resize_target = Rc::clone(&widget);
        let resize = self.engine.observe_resize(Box::new(move || resize_target.resize()));

        self.mounted = Some(Mounted { widget, resize });
        self.was_mounted = true;

        get_logger().info(LogComponent::Application("ChartHost"), "✅ Widget mounted");
        Ok(())
    }

    /// Full replace of the widget's visual state
    pub fn apply(&self, config: &ChartConfiguration) -> WidgetResult<()> {
        let mounted = self.mounted.as_ref().ok_or(WidgetError::NotMounted)?;
        mounted.widget.set_option(config)?;

        get_logger().debug(
            LogComponent::Application("ChartHost"),
            &format!("Applied {:?} configuration ({} series)", config.variant, config.series.len()),
        );
        Ok(())
    }

    pub fn unmount(&mut self) {
        self.liveness.revoke();

        if let Some(Mounted { widget, resize }) = self.mounted.take() {
            resize.remove();
            widget.dispose();
            get_logger().info(LogComponent::Application("ChartHost"), "🧹 Widget disposed");
        }
    }
}

impl<E: WidgetEngine> Drop for ChartHost<E> {
    fn drop(&mut self) {
        self.unmount();
    }
}
