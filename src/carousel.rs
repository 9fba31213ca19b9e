//! Looping hero carousel: autoplay, manual controls, swipe and keyboard.
//!
//! Autoplay runs only while the pointer is outside the carousel, the host is
//! visible and the user has not asked for reduced motion. Reduced motion is
//! read when attaching and on every `start_autoplay`, never in between.

use std::time::Duration;

use tracing::{debug, trace};

use crate::constants::{AUTOPLAY_DELAY, TRANSITION_COOLDOWN};
use crate::container::Container;
use crate::environment::Environment;
use crate::event::{HostEvent, Key};
use crate::gesture::{SwipeDirection, SwipeRule, SwipeTracker};
use crate::state::{CarouselPhase, CarouselState};
use crate::timer::{TimerId, TimerQueue};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Task {
    Advance,
    EndTransition,
}

pub struct CarouselController<C, E> {
    container: Option<C>,
    env: E,

    current_index: usize,
    is_transitioning: bool,
    is_hovered: bool,
    has_focus: bool,
    is_suspended: bool,

    now: Duration,
    timers: TimerQueue<Task>,
    autoplay_timer: Option<TimerId>,
    swipe: SwipeTracker,
}

impl<C: Container, E: Environment> CarouselController<C, E> {
    pub fn new(env: E) -> Self {
        Self {
            container: None,
            env,
            current_index: 0,
            is_transitioning: false,
            is_hovered: false,
            has_focus: false,
            is_suspended: false,
            now: Duration::ZERO,
            timers: TimerQueue::new(),
            autoplay_timer: None,
            swipe: SwipeTracker::default(),
        }
    }

    /// Binds to `container`. A missing container or one without slides leaves
    /// the controller inert.
    pub fn attach(&mut self, container: Option<C>) {
        self.reset();

        let Some(mut container) = container else {
            debug!("carousel container missing, staying idle");
            return;
        };
        let count = container.slide_count();
        if count == 0 {
            debug!("carousel has no slides, staying idle");
            return;
        }

        if container.has_dots() {
            container.build_dots(count);
        }
        self.container = Some(container);
        debug!(slides = count, "carousel attached");

        if self.env.prefers_reduced_motion() {
            self.stop_autoplay();
        }
        self.go_to(0, false);
        self.resume_autoplay();
    }

    /// Cancels every timer and hands the container back.
    pub fn detach(&mut self) -> Option<C> {
        let container = self.container.take();
        self.reset();
        container
    }

    /// Selects slide `index` wrapped into range. Returns false when the call was
    /// dropped: no slides, or a transition still cooling down.
    pub fn go_to(&mut self, index: isize, animate: bool) -> bool {
        if self.is_transitioning {
            trace!(index, "navigation dropped during transition");
            return false;
        }
        let Some(container) = self.container.as_mut() else {
            return false;
        };

        let total = container.slide_count() as isize;
        let target = index.rem_euclid(total) as usize;
        self.current_index = target;

        if animate {
            self.is_transitioning = true;
            self.timers.schedule_timeout(self.now, TRANSITION_COOLDOWN, Task::EndTransition);
        }

        for i in 0..total as usize {
            container.set_slide_active(i, i == target);
        }
        if container.has_dots() {
            for i in 0..total as usize {
                container.set_dot_active(i, i == target);
            }
        }

        debug!(index = target, animate, "carousel slide changed");
        true
    }

    pub fn next(&mut self) {
        self.go_to(self.current_index as isize + 1, true);
        self.restart_autoplay();
    }

    pub fn prev(&mut self) {
        self.go_to(self.current_index as isize - 1, true);
        self.restart_autoplay();
    }

    /// Arms the autoplay interval unless one is running or reduced motion is on.
    pub fn start_autoplay(&mut self) {
        if self.container.is_none() || self.autoplay_timer.is_some() {
            return;
        }
        if self.env.prefers_reduced_motion() {
            trace!("autoplay suppressed by reduced motion");
            return;
        }
        let id = self.timers.schedule_interval(self.now, AUTOPLAY_DELAY, Task::Advance);
        self.autoplay_timer = Some(id);
        debug!(at = ?self.now, "autoplay started");
    }

    pub fn stop_autoplay(&mut self) {
        if let Some(id) = self.autoplay_timer.take() {
            self.timers.cancel(id);
            debug!(at = ?self.now, "autoplay stopped");
        }
    }

    /// Starts autoplay if the user is present: not hovering, the host visible,
    /// and nothing covering the carousel.
    pub fn resume_autoplay(&mut self) {
        if !self.is_suspended && !self.is_hovered && self.env.is_visible() {
            self.start_autoplay();
        }
    }

    /// Stops autoplay and keeps it stopped while something covers the carousel.
    /// Hover, focus and visibility are still tracked in the meantime.
    pub fn suspend(&mut self) {
        self.is_suspended = true;
        self.stop_autoplay();
    }

    /// Lifts a `suspend` and resumes autoplay if the user is present.
    pub fn release(&mut self) {
        if self.is_suspended {
            self.is_suspended = false;
            self.resume_autoplay();
        }
    }

    pub fn is_suspended(&self) -> bool {
        self.is_suspended
    }

    fn restart_autoplay(&mut self) {
        self.stop_autoplay();
        self.resume_autoplay();
    }

    /// Moves the clock forward by `dt`, running every timer that falls due.
    /// Each callback sees its own deadline as the current time.
    pub fn advance(&mut self, dt: Duration) {
        let target = self.now + dt;
        while let Some(fired) = self.timers.pop_due(target) {
            self.now = fired.deadline;
            trace!(task = ?fired.task, at = ?self.now, "timer fired");
            match fired.task {
                Task::EndTransition => self.is_transitioning = false,
                Task::Advance => self.next(),
            }
        }
        self.now = target;
    }

    pub fn handle_event(&mut self, event: HostEvent) {
        if self.container.is_none() {
            return;
        }
        match event {
            HostEvent::PointerEnter => {
                self.is_hovered = true;
                self.stop_autoplay();
            }
            HostEvent::PointerLeave => {
                self.is_hovered = false;
                self.resume_autoplay();
            }
            HostEvent::TouchStart { x } => {
                self.swipe.begin(x);
                self.stop_autoplay();
            }
            HostEvent::TouchEnd { x } => {
                match self.swipe.finish(x, SwipeRule::CAROUSEL) {
                    Some(SwipeDirection::Forward) => self.next(),
                    Some(SwipeDirection::Backward) => self.prev(),
                    None => {}
                }
                self.resume_autoplay();
            }
            HostEvent::KeyDown(key) if self.has_focus => match key {
                Key::ArrowLeft => self.prev(),
                Key::ArrowRight => self.next(),
                _ => {}
            },
            HostEvent::KeyDown(_) => {}
            HostEvent::FocusIn => self.has_focus = true,
            HostEvent::FocusOut => self.has_focus = false,
            HostEvent::VisibilityChange => {
                if self.env.is_visible() {
                    self.resume_autoplay();
                } else {
                    self.stop_autoplay();
                }
            }
            HostEvent::PrevClicked => {
                if self.container.as_ref().is_some_and(Container::has_prev_control) {
                    self.prev();
                }
            }
            HostEvent::NextClicked => {
                if self.container.as_ref().is_some_and(Container::has_next_control) {
                    self.next();
                }
            }
            HostEvent::DotClicked(i) => {
                let valid = self
                    .container
                    .as_ref()
                    .is_some_and(|c| c.has_dots() && i < c.slide_count());
                if valid {
                    self.go_to(i as isize, true);
                }
            }
        }
    }

    pub fn phase(&self) -> CarouselPhase {
        if self.container.is_none() {
            CarouselPhase::Idle
        } else if self.autoplay_timer.is_some() {
            CarouselPhase::Autoplaying
        } else {
            CarouselPhase::Ready
        }
    }

    pub fn state(&self) -> CarouselState {
        CarouselState {
            current_index: self.current_index,
            is_transitioning: self.is_transitioning,
            is_hovered: self.is_hovered,
            has_focus: self.has_focus,
            is_suspended: self.is_suspended,
            autoplay_active: self.autoplay_timer.is_some(),
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn slide_count(&self) -> usize {
        self.container.as_ref().map_or(0, Container::slide_count)
    }

    pub fn is_transitioning(&self) -> bool {
        self.is_transitioning
    }

    pub fn autoplay_active(&self) -> bool {
        self.autoplay_timer.is_some()
    }

    /// Number of timers currently scheduled, autoplay and cooldown alike.
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// When the autoplay timer will next advance the carousel.
    pub fn next_autoplay_at(&self) -> Option<Duration> {
        self.autoplay_timer.and_then(|id| self.timers.deadline(id))
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn container(&self) -> Option<&C> {
        self.container.as_ref()
    }

    pub fn environment(&self) -> &E {
        &self.env
    }

    pub fn environment_mut(&mut self) -> &mut E {
        &mut self.env
    }

    fn reset(&mut self) {
        self.timers.clear();
        self.autoplay_timer = None;
        self.container = None;
        self.current_index = 0;
        self.is_transitioning = false;
        self.is_hovered = false;
        self.has_focus = false;
        self.is_suspended = false;
        self.swipe = SwipeTracker::default();
    }
}
