//! The hero carousel with a lightbox on top of it.
//!
//! Routes host input to whichever widget is in front. While the lightbox is
//! open the carousel is suspended: it keeps tracking hover, focus and
//! visibility but never advances behind the overlay. Closing the lightbox
//! releases it, and autoplay resumes only if the user is present.

use std::time::Duration;

use tracing::debug;

use crate::carousel::CarouselController;
use crate::container::SlideMarkers;
use crate::environment::Environment;
use crate::event::{HostEvent, Key};
use crate::lightbox::{Lightbox, LightboxControl};

pub struct Showcase<E> {
    carousel: CarouselController<SlideMarkers, E>,
    lightbox: Lightbox<usize>,
}

impl<E: Environment> Showcase<E> {
    pub fn new(slide_count: usize, env: E) -> Self {
        let mut carousel = CarouselController::new(env);
        carousel.attach(Some(SlideMarkers::new(slide_count).with_dots().with_arrows()));
        Self { carousel, lightbox: Lightbox::new() }
    }

    pub fn handle_event(&mut self, event: HostEvent) {
        if !self.lightbox.is_open() {
            match event {
                HostEvent::KeyDown(Key::Enter) => {
                    self.open_lightbox();
                }
                other => self.carousel.handle_event(other),
            }
            return;
        }

        match event {
            HostEvent::KeyDown(key) => self.lightbox.handle_key(key),
            HostEvent::TouchStart { x } => self.lightbox.touch_start(x),
            HostEvent::TouchEnd { x } => self.lightbox.touch_end(x),
            // The overlay covers the carousel's own controls
            HostEvent::PrevClicked | HostEvent::NextClicked | HostEvent::DotClicked(_) => {}
            other => self.carousel.handle_event(other),
        }
        self.sync_overlay();
    }

    /// Opens the lightbox on the carousel's current slide.
    pub fn open_lightbox(&mut self) -> bool {
        let images = (0..self.carousel.slide_count()).collect();
        if !self.lightbox.open(images, self.carousel.current_index()) {
            return false;
        }
        self.carousel.suspend();
        debug!(index = self.carousel.current_index(), "opened lightbox from carousel");
        true
    }

    pub fn activate_lightbox(&mut self, control: LightboxControl) {
        self.lightbox.activate(control);
        self.sync_overlay();
    }

    pub fn backdrop_clicked(&mut self) {
        self.lightbox.backdrop_clicked();
        self.sync_overlay();
    }

    pub fn advance(&mut self, dt: Duration) {
        self.carousel.advance(dt);
    }

    pub fn carousel(&self) -> &CarouselController<SlideMarkers, E> {
        &self.carousel
    }

    pub fn environment_mut(&mut self) -> &mut E {
        self.carousel.environment_mut()
    }

    pub fn lightbox(&self) -> &Lightbox<usize> {
        &self.lightbox
    }

    fn sync_overlay(&mut self) {
        if !self.lightbox.is_open() && self.carousel.is_suspended() {
            self.carousel.release();
        }
    }
}
