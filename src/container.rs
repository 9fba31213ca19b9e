//! The carousel's view of the element it is mounted on.
//!
//! Slides are opaque; the controller only flips their "active" marker. Optional
//! controls report whether they exist so the controller can ignore their events.

pub trait Container {
    fn slide_count(&self) -> usize;

    fn has_prev_control(&self) -> bool {
        false
    }

    fn has_next_control(&self) -> bool {
        false
    }

    fn has_dots(&self) -> bool {
        false
    }

    /// Replaces the dot indicator set with `count` dots, none active.
    fn build_dots(&mut self, _count: usize) {}

    fn set_slide_active(&mut self, index: usize, active: bool);

    fn set_dot_active(&mut self, _index: usize, _active: bool) {}
}

/// In-memory marker set, one boolean per slide and per dot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SlideMarkers {
    slides: Vec<bool>,
    dots: Option<Vec<bool>>,
    prev_control: bool,
    next_control: bool,
}

impl SlideMarkers {
    pub fn new(slide_count: usize) -> Self {
        Self {
            slides: vec![false; slide_count],
            dots: None,
            prev_control: false,
            next_control: false,
        }
    }

    pub fn with_dots(mut self) -> Self {
        self.dots = Some(Vec::new());
        self
    }

    pub fn with_arrows(mut self) -> Self {
        self.prev_control = true;
        self.next_control = true;
        self
    }

    pub fn slides(&self) -> &[bool] {
        &self.slides
    }

    pub fn dots(&self) -> Option<&[bool]> {
        self.dots.as_deref()
    }

    pub fn active_slide(&self) -> Option<usize> {
        self.slides.iter().position(|active| *active)
    }

    pub fn active_dot(&self) -> Option<usize> {
        self.dots.as_ref()?.iter().position(|active| *active)
    }
}

impl Container for SlideMarkers {
    fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn has_prev_control(&self) -> bool {
        self.prev_control
    }

    fn has_next_control(&self) -> bool {
        self.next_control
    }

    fn has_dots(&self) -> bool {
        self.dots.is_some()
    }

    fn build_dots(&mut self, count: usize) {
        if let Some(dots) = self.dots.as_mut() {
            dots.clear();
            dots.resize(count, false);
        }
    }

    fn set_slide_active(&mut self, index: usize, active: bool) {
        if let Some(slide) = self.slides.get_mut(index) {
            *slide = active;
        }
    }

    fn set_dot_active(&mut self, index: usize, active: bool) {
        if let Some(dot) = self.dots.as_mut().and_then(|d| d.get_mut(index)) {
            *dot = active;
        }
    }
}
