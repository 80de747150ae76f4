use once_cell::sync::OnceCell;

/// Fire-once scroll trigger for the section's entrance transition.
///
/// Fires the first time the observed element's top edge is at or above
/// `threshold * viewport_height`, i.e. `0.7` reads as "top 70%".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntranceTrigger {
    threshold: f64,
    fired: bool,
}

impl EntranceTrigger {
    pub fn new(threshold: f64) -> Self {
        Self { threshold: threshold.clamp(0.0, 1.0), fired: false }
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Returns `true` exactly once, on the observation that crosses the line.
    pub fn observe(&mut self, element_top: f64, viewport_height: f64) -> bool {
        if self.fired || viewport_height <= 0.0 {
            return false;
        }
        if element_top <= viewport_height * self.threshold {
            self.fired = true;
            return true;
        }
        false
    }
}

/// Process-wide setup step that must run at most once.
pub struct OneTimeRegistration(OnceCell<()>);

impl OneTimeRegistration {
    pub const fn new() -> Self {
        Self(OnceCell::new())
    }

    pub fn is_registered(&self) -> bool {
        self.0.get().is_some()
    }

    /// Runs `setup` if nothing ran before. Returns whether it ran now.
    pub fn run(&self, setup: impl FnOnce()) -> bool {
        let mut ran = false;
        self.0.get_or_init(|| {
            setup();
            ran = true;
        });
        ran
    }
}

impl Default for OneTimeRegistration {
    fn default() -> Self {
        Self::new()
    }
}
