//! Raylib host: turns window and mouse state into widget events for the
//! showcase and draws the markers the widgets produce.

use std::time::Duration;

use raylib::prelude::*;
use gallery_carousel::{Container, HostEvent, HostSignals, Key, LightboxControl, Showcase};

use crate::slide::Slide;

const TAP_SLOP: f32 = 6.0;             // Pointer travel below this counts as a click
const ARROW_SIZE: f32 = 52.0;          // Prev/next button side
const CLOSE_SIZE: f32 = 48.0;          // Lightbox close button side
const DOT_RADIUS: f32 = 6.0;           // Indicator dot radius
const DOT_SPACING: f32 = 24.0;         // Distance between dot centers, also their hit box

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Hit {
    Prev,
    Next,
    Dot(usize),
    Stage,
}

#[derive(Debug, Clone)]
struct Layout {
    stage: Rectangle,
    prev: Rectangle,
    next: Rectangle,
    dots: Vec<Rectangle>,
    close: Rectangle,
    content: Rectangle,
}

impl Layout {
    fn compute(width: f32, height: f32, slide_count: usize) -> Self {
        let mid_y = (height - ARROW_SIZE) * 0.5;
        let dots_width = slide_count as f32 * DOT_SPACING;
        let dots_x = (width - dots_width) * 0.5;
        let dots = (0..slide_count)
            .map(|i| Rectangle::new(dots_x + i as f32 * DOT_SPACING, height - 40.0, DOT_SPACING, DOT_SPACING))
            .collect();

        Self {
            stage: Rectangle::new(0.0, 0.0, width, height),
            prev: Rectangle::new(16.0, mid_y, ARROW_SIZE, ARROW_SIZE),
            next: Rectangle::new(width - 16.0 - ARROW_SIZE, mid_y, ARROW_SIZE, ARROW_SIZE),
            dots,
            close: Rectangle::new(width - 20.0 - CLOSE_SIZE, 20.0, CLOSE_SIZE, CLOSE_SIZE),
            content: Rectangle::new(width * 0.05, height * 0.075, width * 0.9, height * 0.85),
        }
    }

    fn hit(&self, point: Vector2) -> Hit {
        if self.prev.check_collision_point_rec(point) {
            return Hit::Prev;
        }
        if self.next.check_collision_point_rec(point) {
            return Hit::Next;
        }
        if let Some(i) = self.dots.iter().position(|r| r.check_collision_point_rec(point)) {
            return Hit::Dot(i);
        }
        Hit::Stage
    }
}

#[derive(Debug, Clone, Copy)]
enum Press {
    Control(Hit),
    Drag(Vector2),
}

pub struct Viewer {
    slides: Vec<Slide>,
    showcase: Showcase<HostSignals>,
    layout: Layout,

    hovered: bool,
    focused: bool,
    visible: bool,
    press: Option<Press>,
}

impl Viewer {
    pub fn new(slides: Vec<Slide>, signals: HostSignals) -> Self {
        let count = slides.len();
        Self {
            slides,
            showcase: Showcase::new(count, signals),
            layout: Layout::compute(0.0, 0.0, count),
            hovered: false,
            focused: false,
            visible: signals.visible,
            press: None,
        }
    }

    pub fn update(&mut self, rl: &RaylibHandle) {
        let dt = rl.get_frame_time();
        self.layout = Layout::compute(
            rl.get_screen_width() as f32,
            rl.get_screen_height() as f32,
            self.slides.len(),
        );

        let visible = !(rl.is_window_minimized() || rl.is_window_hidden());
        if visible != self.visible {
            self.visible = visible;
            self.showcase.environment_mut().visible = visible;
            self.showcase.handle_event(HostEvent::VisibilityChange);
        }

        let focused = rl.is_window_focused();
        if focused != self.focused {
            self.focused = focused;
            let event = if focused { HostEvent::FocusIn } else { HostEvent::FocusOut };
            self.showcase.handle_event(event);
        }

        let hovered = rl.is_cursor_on_screen();
        if hovered != self.hovered {
            self.hovered = hovered;
            let event = if hovered { HostEvent::PointerEnter } else { HostEvent::PointerLeave };
            self.showcase.handle_event(event);
        }

        for key in pressed_keys(rl) {
            let was_open = self.showcase.lightbox().is_open();
            self.showcase.handle_event(HostEvent::KeyDown(key));
            if was_open != self.showcase.lightbox().is_open() {
                self.press = None;
            }
        }

        if self.showcase.lightbox().is_open() {
            self.update_lightbox_pointer(rl);
        } else {
            self.update_carousel_pointer(rl);
        }

        self.showcase.advance(Duration::from_secs_f32(dt));

        if let Some(markers) = self.showcase.carousel().container() {
            for (slide, active) in self.slides.iter_mut().zip(markers.slides()) {
                slide.update(dt, *active);
            }
        }
    }

    fn update_carousel_pointer(&mut self, rl: &RaylibHandle) {
        let mouse = rl.get_mouse_position();
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            self.press = match self.layout.hit(mouse) {
                Hit::Stage => {
                    self.showcase.handle_event(HostEvent::TouchStart { x: mouse.x });
                    Some(Press::Drag(mouse))
                }
                control => Some(Press::Control(control)),
            };
        }

        if rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
            match self.press.take() {
                Some(Press::Control(hit)) if self.layout.hit(mouse) == hit => {
                    let event = match hit {
                        Hit::Prev => HostEvent::PrevClicked,
                        Hit::Next => HostEvent::NextClicked,
                        Hit::Dot(i) => HostEvent::DotClicked(i),
                        Hit::Stage => return,
                    };
                    self.showcase.handle_event(event);
                }
                Some(Press::Drag(start)) => {
                    self.showcase.handle_event(HostEvent::TouchEnd { x: mouse.x });
                    if is_tap(start, mouse) {
                        self.showcase.open_lightbox();
                    }
                }
                _ => {}
            }
        }
    }

    fn update_lightbox_pointer(&mut self, rl: &RaylibHandle) {
        let mouse = rl.get_mouse_position();
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            self.showcase.handle_event(HostEvent::TouchStart { x: mouse.x });
            self.press = Some(Press::Drag(mouse));
        }

        if rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
            let Some(Press::Drag(start)) = self.press.take() else {
                return;
            };
            let nav_visible = self.showcase.lightbox().nav_visible();
            if !is_tap(start, mouse) {
                self.showcase.handle_event(HostEvent::TouchEnd { x: mouse.x });
            } else if self.layout.close.check_collision_point_rec(mouse) {
                self.showcase.activate_lightbox(LightboxControl::Close);
            } else if nav_visible && self.layout.prev.check_collision_point_rec(mouse) {
                self.showcase.activate_lightbox(LightboxControl::Prev);
            } else if nav_visible && self.layout.next.check_collision_point_rec(mouse) {
                self.showcase.activate_lightbox(LightboxControl::Next);
            } else if !self.layout.content.check_collision_point_rec(mouse) {
                self.showcase.backdrop_clicked();
            }
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        d.clear_background(Color::new(20, 18, 16, 255));

        for slide in self.slides.iter().filter(|s| s.is_visible()) {
            slide.draw(d, self.layout.stage);
        }

        if let Some(markers) = self.showcase.carousel().container() {
            if markers.has_prev_control() && markers.has_next_control() {
                draw_control(d, self.layout.prev, "<", false);
                draw_control(d, self.layout.next, ">", false);
            }
            for (rect, active) in self.layout.dots.iter().zip(markers.dots().unwrap_or_default()) {
                let color = if *active { Color::WHITE } else { Color::new(255, 253, 249, 90) };
                d.draw_circle(
                    (rect.x + rect.width * 0.5) as i32,
                    (rect.y + rect.height * 0.5) as i32,
                    DOT_RADIUS,
                    color,
                );
            }
        }

        if self.showcase.lightbox().is_open() {
            self.draw_lightbox(d);
        }
    }

    fn draw_lightbox(&self, d: &mut RaylibDrawHandle) {
        let lightbox = self.showcase.lightbox();
        d.draw_rectangle_rec(self.layout.stage, Color::new(20, 18, 16, 235));

        if let Some(slide) = lightbox.current().and_then(|i| self.slides.get(*i)) {
            slide.draw_with_opacity(d, self.layout.content, 1.0);
        }

        let focused = lightbox.focused();
        draw_control(d, self.layout.close, "X", focused == LightboxControl::Close);
        if lightbox.nav_visible() {
            draw_control(d, self.layout.prev, "<", focused == LightboxControl::Prev);
            draw_control(d, self.layout.next, ">", focused == LightboxControl::Next);
        }
        if let Some(counter) = lightbox.counter() {
            let x = (self.layout.stage.width * 0.5) as i32 - 20;
            let y = (self.layout.stage.height - 40.0) as i32;
            d.draw_text(&counter, x, y, 20, Color::new(255, 253, 249, 180));
        }
    }
}

fn draw_control(d: &mut RaylibDrawHandle, rect: Rectangle, label: &str, focused: bool) {
    d.draw_text(
        label,
        (rect.x + rect.width * 0.5) as i32 - 8,
        (rect.y + rect.height * 0.5) as i32 - 12,
        28,
        Color::new(255, 253, 249, 255),
    );
    if focused {
        d.draw_rectangle_lines_ex(rect, 2.0, Color::WHITE);
    }
}

fn is_tap(start: Vector2, end: Vector2) -> bool {
    (end.x - start.x).abs() < TAP_SLOP && (end.y - start.y).abs() < TAP_SLOP
}

fn pressed_keys(rl: &RaylibHandle) -> Vec<Key> {
    let shift = rl.is_key_down(KeyboardKey::KEY_LEFT_SHIFT) || rl.is_key_down(KeyboardKey::KEY_RIGHT_SHIFT);
    [
        (KeyboardKey::KEY_LEFT, Key::ArrowLeft),
        (KeyboardKey::KEY_RIGHT, Key::ArrowRight),
        (KeyboardKey::KEY_ESCAPE, Key::Escape),
        (KeyboardKey::KEY_ENTER, Key::Enter),
        (KeyboardKey::KEY_TAB, Key::Tab { shift }),
        (KeyboardKey::KEY_SPACE, Key::Space),
    ]
    .into_iter()
    .filter(|(raw, _)| rl.is_key_pressed(*raw))
    .map(|(_, key)| key)
    .collect()
}
