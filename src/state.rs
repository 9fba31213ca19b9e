//! Carousel lifecycle phase and state snapshot.

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CarouselPhase {
    Idle,        // No container or no slides, every call is a no-op
    Ready,       // Slides bound, autoplay stopped
    Autoplaying, // Slides bound, autoplay timer armed
}

/// Snapshot of the controller's observable state.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct CarouselState {
    pub current_index: usize,
    pub is_transitioning: bool,
    pub is_hovered: bool,
    pub has_focus: bool,
    pub is_suspended: bool,
    pub autoplay_active: bool,
}
