//! Behaviour of the carousel controller against an in-memory container.

use std::time::Duration;

use gallery_carousel::constants::{AUTOPLAY_DELAY, TRANSITION_COOLDOWN};
use gallery_carousel::{
    CarouselController, CarouselPhase, Container, HostEvent, HostSignals, Key, SlideMarkers,
};
use proptest::prelude::*;

type Carousel = CarouselController<SlideMarkers, HostSignals>;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn attached(slides: usize) -> Carousel {
    attached_with(SlideMarkers::new(slides).with_dots().with_arrows(), HostSignals::new())
}

fn attached_with(markers: SlideMarkers, signals: HostSignals) -> Carousel {
    let mut carousel = CarouselController::new(signals);
    carousel.attach(Some(markers));
    carousel
}

fn markers(carousel: &Carousel) -> &SlideMarkers {
    carousel.container().expect("carousel should be attached")
}

#[test]
fn attach_activates_first_slide_and_starts_autoplay() {
    let carousel = attached(3);

    assert_eq!(carousel.phase(), CarouselPhase::Autoplaying);
    assert_eq!(carousel.current_index(), 0);
    assert!(!carousel.is_transitioning());
    assert_eq!(markers(&carousel).slides(), &[true, false, false]);
    assert_eq!(markers(&carousel).dots(), Some(&[true, false, false][..]));
    assert_eq!(carousel.next_autoplay_at(), Some(AUTOPLAY_DELAY));
}

#[test]
fn missing_container_or_slides_is_inert() {
    let mut missing: Carousel = CarouselController::new(HostSignals::new());
    missing.attach(None);
    assert_eq!(missing.phase(), CarouselPhase::Idle);
    assert!(!missing.go_to(2, true));
    missing.next();
    missing.start_autoplay();
    missing.handle_event(HostEvent::PointerLeave);
    assert_eq!(missing.pending_timers(), 0);

    let mut empty = attached(0);
    assert_eq!(empty.phase(), CarouselPhase::Idle);
    assert!(empty.container().is_none());
    empty.advance(ms(60_000));
    assert_eq!(empty.current_index(), 0);
}

#[test]
fn go_to_wraps_negative_and_large_indices() {
    let mut carousel = attached(5);

    assert!(carousel.go_to(-1, false));
    assert_eq!(carousel.current_index(), 4);
    assert!(carousel.go_to(7, false));
    assert_eq!(carousel.current_index(), 2);
    assert_eq!(markers(&carousel).active_slide(), Some(2));
    assert_eq!(markers(&carousel).active_dot(), Some(2));
}

#[test]
fn navigation_during_cooldown_is_dropped() {
    let mut carousel = attached(5);

    assert!(carousel.go_to(1, true));
    carousel.advance(ms(300));
    assert!(!carousel.go_to(3, true));
    assert_eq!(carousel.current_index(), 1);

    carousel.advance(TRANSITION_COOLDOWN - ms(300));
    assert!(!carousel.is_transitioning());
    assert!(carousel.go_to(3, true));
    assert_eq!(carousel.current_index(), 3);
}

#[test]
fn start_autoplay_twice_keeps_one_timer() {
    let mut carousel = attached_with(SlideMarkers::new(3), HostSignals::new());
    carousel.stop_autoplay();
    assert_eq!(carousel.pending_timers(), 0);

    carousel.start_autoplay();
    carousel.start_autoplay();
    assert_eq!(carousel.pending_timers(), 1);

    carousel.stop_autoplay();
    carousel.stop_autoplay();
    assert_eq!(carousel.phase(), CarouselPhase::Ready);
    assert_eq!(carousel.pending_timers(), 0);
}

#[test]
fn reduced_motion_keeps_autoplay_off() {
    let signals = HostSignals::new().with_reduced_motion(true);
    let mut carousel = attached_with(SlideMarkers::new(3), signals);
    assert_eq!(carousel.phase(), CarouselPhase::Ready);

    carousel.stop_autoplay();
    carousel.start_autoplay();
    assert!(!carousel.autoplay_active());

    carousel.advance(AUTOPLAY_DELAY * 3);
    assert_eq!(carousel.current_index(), 0);
}

#[test]
fn reduced_motion_is_read_when_starting() {
    let mut carousel = attached(3);
    carousel.stop_autoplay();
    carousel.environment_mut().reduced_motion = true;
    carousel.start_autoplay();
    assert!(!carousel.autoplay_active());

    carousel.environment_mut().reduced_motion = false;
    carousel.start_autoplay();
    assert!(carousel.autoplay_active());
}

#[test]
fn autoplay_advances_and_loops() {
    let mut carousel = attached(3);

    carousel.advance(AUTOPLAY_DELAY - ms(1));
    assert_eq!(carousel.current_index(), 0);
    carousel.advance(ms(1));
    assert_eq!(carousel.current_index(), 1);

    carousel.advance(AUTOPLAY_DELAY * 2);
    assert_eq!(carousel.current_index(), 0);
    assert_eq!(markers(&carousel).active_slide(), Some(0));
}

#[test]
fn manual_navigation_resets_the_autoplay_cadence() {
    let mut carousel = attached(5);

    carousel.advance(ms(4000));
    carousel.next();
    let t = carousel.now();
    assert_eq!(carousel.current_index(), 1);
    assert_eq!(carousel.next_autoplay_at(), Some(t + AUTOPLAY_DELAY));

    carousel.advance(ms(5000));
    assert_eq!(carousel.current_index(), 1);
    carousel.advance(ms(500));
    assert_eq!(carousel.current_index(), 2);

    carousel.advance(ms(1000));
    carousel.prev();
    let t = carousel.now();
    assert_eq!(carousel.current_index(), 1);
    assert_eq!(carousel.next_autoplay_at(), Some(t + AUTOPLAY_DELAY));
}

#[test]
fn swipe_direction_and_threshold() {
    let mut carousel = attached(5);

    carousel.handle_event(HostEvent::TouchStart { x: 200.0 });
    carousel.handle_event(HostEvent::TouchEnd { x: 140.0 });
    assert_eq!(carousel.current_index(), 1);

    carousel.advance(TRANSITION_COOLDOWN);
    carousel.handle_event(HostEvent::TouchStart { x: 140.0 });
    carousel.handle_event(HostEvent::TouchEnd { x: 200.0 });
    assert_eq!(carousel.current_index(), 0);

    carousel.advance(TRANSITION_COOLDOWN);
    carousel.handle_event(HostEvent::TouchStart { x: 100.0 });
    carousel.handle_event(HostEvent::TouchEnd { x: 70.0 });
    assert_eq!(carousel.current_index(), 0);
    assert!(!carousel.is_transitioning());
}

#[test]
fn touch_pauses_autoplay_until_release() {
    let mut carousel = attached(3);

    carousel.handle_event(HostEvent::TouchStart { x: 10.0 });
    assert!(!carousel.autoplay_active());
    carousel.handle_event(HostEvent::TouchEnd { x: 12.0 });
    assert!(carousel.autoplay_active());
}

#[test]
fn hover_suspends_and_leave_resumes_when_visible() {
    let mut carousel = attached(3);

    carousel.handle_event(HostEvent::PointerEnter);
    assert!(!carousel.autoplay_active());
    assert!(carousel.state().is_hovered);

    carousel.advance(AUTOPLAY_DELAY * 2);
    assert_eq!(carousel.current_index(), 0);

    carousel.handle_event(HostEvent::PointerLeave);
    assert!(carousel.autoplay_active());
}

#[test]
fn leaving_hover_while_hidden_does_not_resume() {
    let mut carousel = attached(3);

    carousel.handle_event(HostEvent::PointerEnter);
    carousel.environment_mut().visible = false;
    carousel.handle_event(HostEvent::VisibilityChange);
    carousel.handle_event(HostEvent::PointerLeave);
    assert!(!carousel.autoplay_active());

    carousel.environment_mut().visible = true;
    carousel.handle_event(HostEvent::VisibilityChange);
    assert!(carousel.autoplay_active());
}

#[test]
fn becoming_visible_while_hovered_stays_paused() {
    let mut carousel = attached(3);

    carousel.environment_mut().visible = false;
    carousel.handle_event(HostEvent::VisibilityChange);
    assert_eq!(carousel.phase(), CarouselPhase::Ready);

    carousel.handle_event(HostEvent::PointerEnter);
    carousel.environment_mut().visible = true;
    carousel.handle_event(HostEvent::VisibilityChange);
    assert!(!carousel.autoplay_active());
}

#[test]
fn manual_navigation_while_hovered_leaves_autoplay_off() {
    let mut carousel = attached(3);
    carousel.handle_event(HostEvent::PointerEnter);

    carousel.handle_event(HostEvent::NextClicked);
    assert_eq!(carousel.current_index(), 1);
    assert_eq!(carousel.phase(), CarouselPhase::Ready);
}

#[test]
fn arrow_keys_need_focus() {
    let mut carousel = attached(3);

    carousel.handle_event(HostEvent::KeyDown(Key::ArrowRight));
    assert_eq!(carousel.current_index(), 0);

    carousel.handle_event(HostEvent::FocusIn);
    carousel.handle_event(HostEvent::KeyDown(Key::ArrowRight));
    assert_eq!(carousel.current_index(), 1);

    carousel.advance(TRANSITION_COOLDOWN);
    carousel.handle_event(HostEvent::KeyDown(Key::ArrowLeft));
    carousel.advance(TRANSITION_COOLDOWN);
    carousel.handle_event(HostEvent::KeyDown(Key::ArrowLeft));
    assert_eq!(carousel.current_index(), 2);

    carousel.handle_event(HostEvent::FocusOut);
    carousel.advance(TRANSITION_COOLDOWN);
    carousel.handle_event(HostEvent::KeyDown(Key::ArrowLeft));
    assert_eq!(carousel.current_index(), 2);
}

#[test]
fn dot_clicks_jump_without_touching_autoplay() {
    let mut carousel = attached(4);
    carousel.advance(ms(2000));

    carousel.handle_event(HostEvent::DotClicked(3));
    assert_eq!(carousel.current_index(), 3);
    assert_eq!(markers(&carousel).active_dot(), Some(3));
    assert_eq!(carousel.next_autoplay_at(), Some(AUTOPLAY_DELAY));

    carousel.advance(TRANSITION_COOLDOWN);
    carousel.handle_event(HostEvent::DotClicked(9));
    assert_eq!(carousel.current_index(), 3);
}

#[test]
fn absent_controls_ignore_their_events() {
    let mut carousel = attached_with(SlideMarkers::new(3), HostSignals::new());
    assert!(!markers(&carousel).has_dots());

    carousel.handle_event(HostEvent::NextClicked);
    carousel.handle_event(HostEvent::PrevClicked);
    carousel.handle_event(HostEvent::DotClicked(1));
    assert_eq!(carousel.current_index(), 0);
    assert!(!carousel.is_transitioning());

    carousel.next();
    assert_eq!(carousel.current_index(), 1);
    assert_eq!(markers(&carousel).dots(), None);
}

#[test]
fn detach_cancels_timers_and_returns_container() {
    let mut carousel = attached(3);
    carousel.next();
    assert_eq!(carousel.pending_timers(), 2);

    let container = carousel.detach().expect("container returned");
    assert_eq!(container.active_slide(), Some(1));
    assert_eq!(carousel.phase(), CarouselPhase::Idle);
    assert_eq!(carousel.pending_timers(), 0);
}

#[test]
fn reattach_replaces_previous_container() {
    let mut carousel = attached(3);
    carousel.next();

    carousel.attach(Some(SlideMarkers::new(2)));
    assert_eq!(carousel.slide_count(), 2);
    assert_eq!(carousel.current_index(), 0);
    assert!(!carousel.is_transitioning());
    assert_eq!(carousel.pending_timers(), 1);
}

#[test]
fn long_frame_replays_timers_in_order() {
    let mut carousel = attached(4);

    carousel.advance(AUTOPLAY_DELAY * 3 + TRANSITION_COOLDOWN);
    assert_eq!(carousel.current_index(), 3);
    assert!(!carousel.is_transitioning());
    assert_eq!(carousel.next_autoplay_at(), Some(AUTOPLAY_DELAY * 4));
}

#[test]
fn suspended_carousel_ignores_visibility_resume() {
    let mut carousel = attached(3);
    carousel.suspend();

    carousel.environment_mut().visible = false;
    carousel.handle_event(HostEvent::VisibilityChange);
    carousel.environment_mut().visible = true;
    carousel.handle_event(HostEvent::VisibilityChange);
    carousel.advance(AUTOPLAY_DELAY);
    assert!(!carousel.autoplay_active());
    assert_eq!(carousel.current_index(), 0);
    assert!(carousel.state().is_suspended);

    carousel.release();
    assert!(!carousel.is_suspended());
    assert!(carousel.autoplay_active());
}

#[test]
fn suspended_carousel_does_not_restart_after_manual_navigation() {
    let mut carousel = attached(3);
    carousel.suspend();

    carousel.next();
    assert_eq!(carousel.current_index(), 1);
    assert!(!carousel.autoplay_active());
}

proptest! {
    #[test]
    fn go_to_selects_euclidean_remainder(index in -10_000isize..10_000, count in 1usize..20) {
        let mut carousel = attached(count);
        prop_assert!(carousel.go_to(index, false));

        let n = count as isize;
        let expected = (((index % n) + n) % n) as usize;
        prop_assert_eq!(carousel.current_index(), expected);
        prop_assert_eq!(markers(&carousel).active_slide(), Some(expected));
    }
}
