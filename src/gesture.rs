//! Horizontal swipe detection for touch input.

use crate::constants::{LIGHTBOX_SWIPE_THRESHOLD, SWIPE_THRESHOLD};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SwipeDirection {
    Forward,  // Finger moved left: show the next slide
    Backward, // Finger moved right: show the previous slide
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeRule {
    pub threshold: f32,
    pub inclusive: bool,
}

impl SwipeRule {
    pub const CAROUSEL: SwipeRule = SwipeRule { threshold: SWIPE_THRESHOLD, inclusive: true };
    pub const LIGHTBOX: SwipeRule = SwipeRule { threshold: LIGHTBOX_SWIPE_THRESHOLD, inclusive: false };

    /// `diff` is start minus end, so a positive value means the pointer travelled left.
    pub fn classify(&self, diff: f32) -> Option<SwipeDirection> {
        let distance = diff.abs();
        let far_enough = if self.inclusive {
            distance >= self.threshold
        } else {
            distance > self.threshold
        };
        if !far_enough {
            return None;
        }
        if diff > 0.0 {
            Some(SwipeDirection::Forward)
        } else {
            Some(SwipeDirection::Backward)
        }
    }
}

/// Remembers where a touch began. A touch end without a start measures from 0,
/// the same as a host that never reported the start.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SwipeTracker {
    start_x: f32,
}

impl SwipeTracker {
    pub fn begin(&mut self, x: f32) {
        self.start_x = x;
    }

    pub fn finish(&mut self, end_x: f32, rule: SwipeRule) -> Option<SwipeDirection> {
        rule.classify(self.start_x - end_x)
    }
}
