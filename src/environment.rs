//! Host signals the carousel consults before autoplaying.

/// Ambient signals owned by the host: the user's motion preference and
/// whether the page is currently visible.
pub trait Environment {
    fn prefers_reduced_motion(&self) -> bool;
    fn is_visible(&self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostSignals {
    pub reduced_motion: bool,
    pub visible: bool,
}

impl HostSignals {
    pub fn new() -> Self {
        Self { reduced_motion: false, visible: true }
    }

    pub fn with_reduced_motion(mut self, reduced_motion: bool) -> Self {
        self.reduced_motion = reduced_motion;
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }
}

impl Default for HostSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment for HostSignals {
    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    fn is_visible(&self) -> bool {
        self.visible
    }
}
