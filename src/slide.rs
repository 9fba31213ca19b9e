use raylib::prelude::*;

use gallery_carousel::constants::{FADE_DURATION, SLIDE_FILL};

/// A carousel slide on screen. The controller decides which slide is active;
/// the slide only eases its opacity toward that marker.
pub struct Slide {
    image: Texture2D,
    opacity: f32,
}

impl Slide {
    pub fn new(image: Texture2D) -> Self {
        Self { image, opacity: 0.0 }
    }

    pub fn update(&mut self, dt: f32, active: bool) {
        let target = if active { 1.0 } else { 0.0 };
        let step = dt / FADE_DURATION;
        self.opacity = if self.opacity < target {
            (self.opacity + step).min(target)
        } else {
            (self.opacity - step).max(target)
        };
    }

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }

    /// Draws the slide scaled to fit inside `area`, centered.
    pub fn draw(&self, d: &mut RaylibDrawHandle, area: Rectangle) {
        self.draw_with_opacity(d, area, self.opacity);
    }

    pub fn draw_with_opacity(&self, d: &mut RaylibDrawHandle, area: Rectangle, opacity: f32) {
        if opacity <= 0.0 {
            return;
        }
        let tex_width = self.image.width() as f32;
        let tex_height = self.image.height() as f32;

        let scale = (area.width * SLIDE_FILL / tex_width).min(area.height * SLIDE_FILL / tex_height);
        let scaled_width = tex_width * scale;
        let scaled_height = tex_height * scale;

        let dest = Rectangle::new(
            area.x + (area.width - scaled_width) * 0.5,
            area.y + (area.height - scaled_height) * 0.5,
            scaled_width,
            scaled_height,
        );

        d.draw_texture_pro(
            &self.image,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            dest,
            Vector2::new(0.0, 0.0),
            0.0,
            Color::new(255, 255, 255, (opacity.clamp(0.0, 1.0) * 255.0) as u8),
        );
    }
}
