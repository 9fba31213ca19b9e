//! Full-screen image viewer with wrap-around navigation and a focus trap.

use tracing::debug;

use crate::event::Key;
use crate::gesture::{SwipeDirection, SwipeRule, SwipeTracker};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum LightboxControl {
    Close,
    Prev,
    Next,
}

#[derive(Debug, Clone)]
pub struct Lightbox<T> {
    images: Vec<T>,
    current_index: usize,
    is_open: bool,
    focused: LightboxControl,
    swipe: SwipeTracker,
}

impl<T> Lightbox<T> {
    pub fn new() -> Self {
        Self {
            images: Vec::new(),
            current_index: 0,
            is_open: false,
            focused: LightboxControl::Close,
            swipe: SwipeTracker::default(),
        }
    }

    /// Opens on `images[start]`, wrapping `start` into range. Nothing to show
    /// means nothing opens.
    pub fn open(&mut self, images: Vec<T>, start: usize) -> bool {
        if images.is_empty() {
            return false;
        }
        self.current_index = start % images.len();
        self.images = images;
        self.is_open = true;
        self.focused = LightboxControl::Close;
        debug!(index = self.current_index, total = self.images.len(), "lightbox opened");
        true
    }

    pub fn close(&mut self) {
        if self.is_open {
            self.is_open = false;
            debug!("lightbox closed");
        }
    }

    pub fn next(&mut self) {
        if self.images.len() <= 1 {
            return;
        }
        self.current_index = (self.current_index + 1) % self.images.len();
    }

    pub fn prev(&mut self) {
        if self.images.len() <= 1 {
            return;
        }
        self.current_index = (self.current_index + self.images.len() - 1) % self.images.len();
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current(&self) -> Option<&T> {
        if self.is_open {
            self.images.get(self.current_index)
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Prev/next buttons and the counter are hidden for a single image.
    pub fn nav_visible(&self) -> bool {
        self.images.len() > 1
    }

    pub fn counter(&self) -> Option<String> {
        self.nav_visible()
            .then(|| format!("{} / {}", self.current_index + 1, self.images.len()))
    }

    pub fn alt_text(&self) -> String {
        format!("Image {} of {}", self.current_index + 1, self.images.len())
    }

    pub fn focused(&self) -> LightboxControl {
        self.focused
    }

    pub fn handle_key(&mut self, key: Key) {
        if !self.is_open {
            return;
        }
        match key {
            Key::Escape => self.close(),
            Key::ArrowLeft => self.prev(),
            Key::ArrowRight => self.next(),
            Key::Tab { shift } => self.cycle_focus(shift),
            Key::Enter => self.activate(self.focused),
            Key::Space | Key::Other => {}
        }
    }

    pub fn activate(&mut self, control: LightboxControl) {
        match control {
            LightboxControl::Close => self.close(),
            LightboxControl::Prev => self.prev(),
            LightboxControl::Next => self.next(),
        }
    }

    pub fn backdrop_clicked(&mut self) {
        self.close();
    }

    pub fn touch_start(&mut self, x: f32) {
        self.swipe.begin(x);
    }

    pub fn touch_end(&mut self, x: f32) {
        if !self.is_open {
            return;
        }
        match self.swipe.finish(x, SwipeRule::LIGHTBOX) {
            Some(SwipeDirection::Forward) => self.next(),
            Some(SwipeDirection::Backward) => self.prev(),
            None => {}
        }
    }

    // Focus never leaves the overlay; hidden controls are skipped.
    fn cycle_focus(&mut self, backwards: bool) {
        let order: &[LightboxControl] = if self.nav_visible() {
            &[LightboxControl::Close, LightboxControl::Prev, LightboxControl::Next]
        } else {
            &[LightboxControl::Close]
        };
        let pos = order.iter().position(|c| *c == self.focused).unwrap_or(0);
        let next = if backwards {
            (pos + order.len() - 1) % order.len()
        } else {
            (pos + 1) % order.len()
        };
        self.focused = order[next];
    }
}

impl<T> Default for Lightbox<T> {
    fn default() -> Self {
        Self::new()
    }
}
