//! Timing and layout constants.

use std::time::Duration;

pub const AUTOPLAY_DELAY: Duration = Duration::from_millis(5500);      // Interval between automatic advances
pub const TRANSITION_COOLDOWN: Duration = Duration::from_millis(600);  // Navigation is ignored while a slide animates in
pub const SWIPE_THRESHOLD: f32 = 50.0;                                 // Minimum horizontal travel for a swipe (inclusive)
pub const LIGHTBOX_SWIPE_THRESHOLD: f32 = 50.0;                        // Lightbox swipes must travel strictly further than this

pub const RENDER_WIDTH: i32 = 1280;           // Default window width
pub const RENDER_HEIGHT: i32 = 720;           // Default window height
pub const FPS: u32 = 60;                      // Default frames per second

pub const FADE_DURATION: f32 = 0.6;           // Cross-fade between slides (seconds), matches the transition cooldown
pub const SLIDE_FILL: f32 = 0.9;              // Fraction of the viewport a slide may occupy
