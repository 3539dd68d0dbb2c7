use crate::carousel::{
    Carousel, CarouselEvent, EventKind, Key, ListenerTarget, NavCommand, Point, SliderMarkup,
};
use crate::errors::CarouselError;
use crate::registry::CarouselRegistry;
use crate::settings::{CarouselSettings, KeyboardScope};
use std::time::{Duration, Instant};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn carousel(count: usize) -> (Carousel, Instant) {
    let t0 = Instant::now();
    let carousel = Carousel::new(SliderMarkup::for_slide_count(count), CarouselSettings::default(), t0);
    (carousel, t0)
}

fn active_dots(carousel: &Carousel) -> Vec<usize> {
    carousel.markup().active_indicators().collect()
}

fn swipe(carousel: &mut Carousel, from: Point, to: Point, now: Instant) -> Option<NavCommand> {
    carousel.handle_event(CarouselEvent::TouchStart(from), now);
    carousel.handle_event(CarouselEvent::TouchMove(to), now);
    carousel.handle_event(CarouselEvent::TouchEnd, now)
}

#[test]
fn test_mount_marks_first_indicator() {
    let (carousel, _) = carousel(4);
    assert!(carousel.is_mounted());
    assert_eq!(carousel.current_index(), 0);
    assert_eq!(active_dots(&carousel), vec![0]);
    assert!(carousel.is_auto_advance_active());
    assert_eq!(carousel.markup().track_offset_percent(), 0.0);
}

#[test]
fn test_go_to_every_index() {
    let (mut carousel, t0) = carousel(4);
    let mut now = t0;

    for index in [2, 1, 3, 0] {
        now += ms(700);
        carousel.tick(now);
        assert!(carousel.go_to_slide(index, now));
        assert_eq!(carousel.current_index(), index);
        assert_eq!(active_dots(&carousel), vec![index]);
        assert_eq!(
            carousel.markup().track_offset_percent(),
            -(index as f32 * 100.0 / 4.0)
        );
    }
    assert_eq!(carousel.stats().applied, 4);
}

#[test]
fn test_same_index_is_noop() {
    let (mut carousel, t0) = carousel(4);
    assert!(!carousel.go_to_slide(0, t0));
    assert!(!carousel.is_transitioning());
    assert_eq!(carousel.markup().track.as_ref().unwrap().transform, None);
    assert_eq!(carousel.stats().rejected_same_index, 1);
}

#[test]
fn test_out_of_range_is_noop() {
    let (mut carousel, t0) = carousel(4);
    assert!(!carousel.go_to_slide(4, t0));
    assert_eq!(carousel.current_index(), 0);
    assert_eq!(carousel.stats().rejected_out_of_range, 1);
}

#[test]
fn test_transition_lock_rejects_navigation() {
    let (mut carousel, t0) = carousel(4);
    assert!(carousel.go_to_slide(1, t0));
    assert!(carousel.is_transitioning());

    assert!(!carousel.go_to_slide(2, t0 + ms(100)));
    assert_eq!(carousel.current_index(), 1);
    assert_eq!(active_dots(&carousel), vec![1]);
    assert_eq!(carousel.stats().rejected_transitioning, 1);

    carousel.tick(t0 + ms(599));
    assert!(carousel.is_transitioning());
    carousel.tick(t0 + ms(600));
    assert!(!carousel.is_transitioning());
    assert!(carousel.go_to_slide(2, t0 + ms(600)));
}

#[test]
fn test_next_and_prev_wrap() {
    let (mut carousel, t0) = carousel(4);
    assert!(carousel.prev_slide(t0));
    assert_eq!(carousel.current_index(), 3);

    carousel.tick(t0 + ms(600));
    assert!(carousel.next_slide(t0 + ms(600)));
    assert_eq!(carousel.current_index(), 0);
    assert_eq!(active_dots(&carousel), vec![0]);
}

#[test]
fn test_horizontal_swipe_navigates_once() {
    let (mut carousel, t0) = carousel(4);
    let command = swipe(&mut carousel, Point::new(200.0, 100.0), Point::new(140.0, 110.0), t0);
    assert_eq!(command, Some(NavCommand::Next));
    assert_eq!(carousel.current_index(), 1);
    assert_eq!(carousel.stats().swipes, 1);
    assert_eq!(carousel.stats().requested, 1);
}

#[test]
fn test_vertical_swipe_does_not_navigate() {
    let (mut carousel, t0) = carousel(4);
    let command = swipe(&mut carousel, Point::new(200.0, 100.0), Point::new(140.0, 170.0), t0);
    assert_eq!(command, None);
    assert_eq!(carousel.current_index(), 0);
    assert_eq!(carousel.stats().requested, 0);
}

#[test]
fn test_rightward_swipe_goes_back() {
    let (mut carousel, t0) = carousel(4);
    let command = swipe(&mut carousel, Point::new(100.0, 100.0), Point::new(200.0, 100.0), t0);
    assert_eq!(command, Some(NavCommand::Prev));
    assert_eq!(carousel.current_index(), 3);
}

#[test]
fn test_touch_pauses_and_resumes_after_grace_period() {
    let (mut carousel, t0) = carousel(4);
    carousel.handle_event(CarouselEvent::TouchStart(Point::new(10.0, 10.0)), t0);
    assert!(!carousel.is_auto_advance_active());
    assert!(carousel.is_gesture_active());

    // A tap: no movement, no navigation
    assert_eq!(carousel.handle_event(CarouselEvent::TouchEnd, t0 + ms(100)), None);
    assert!(!carousel.is_gesture_active());
    assert!(carousel.is_resume_pending());
    assert!(!carousel.is_auto_advance_active());

    carousel.tick(t0 + ms(3099));
    assert!(!carousel.is_auto_advance_active());
    carousel.tick(t0 + ms(3100));
    assert!(carousel.is_auto_advance_active());
    assert!(!carousel.is_resume_pending());
    assert_eq!(carousel.current_index(), 0);
}

#[test]
fn test_new_touch_cancels_pending_resume() {
    let (mut carousel, t0) = carousel(4);
    carousel.handle_event(CarouselEvent::TouchStart(Point::new(10.0, 10.0)), t0);
    carousel.handle_event(CarouselEvent::TouchEnd, t0);
    assert!(carousel.is_resume_pending());

    // Finger goes down again before the grace period ends and stays down
    carousel.handle_event(CarouselEvent::TouchStart(Point::new(10.0, 10.0)), t0 + ms(2900));
    assert!(!carousel.is_resume_pending());

    carousel.tick(t0 + ms(3000));
    assert!(!carousel.is_auto_advance_active());
    carousel.tick(t0 + ms(8000));
    assert!(!carousel.is_auto_advance_active());
    assert!(carousel.is_gesture_active());
    assert_eq!(carousel.current_index(), 0);
    assert_eq!(carousel.pending_timers(), 0);
}

#[test]
fn test_touch_cancel_drops_gesture() {
    let (mut carousel, t0) = carousel(4);
    carousel.handle_event(CarouselEvent::TouchStart(Point::new(300.0, 10.0)), t0);
    carousel.handle_event(CarouselEvent::TouchMove(Point::new(100.0, 10.0)), t0);
    assert_eq!(carousel.handle_event(CarouselEvent::TouchCancel, t0), None);
    assert_eq!(carousel.handle_event(CarouselEvent::TouchEnd, t0), None);
    assert_eq!(carousel.current_index(), 0);
}

#[test]
fn test_reset_twice_leaves_one_timer() {
    let (mut carousel, t0) = carousel(4);
    carousel.reset_auto_advance(t0);
    carousel.reset_auto_advance(t0 + ms(10));
    assert_eq!(carousel.auto_advance_timer_count(), 1);

    carousel.start_auto_advance(t0 + ms(20));
    assert_eq!(carousel.auto_advance_timer_count(), 1);
}

#[test]
fn test_stop_without_timer_is_noop() {
    let (mut carousel, _) = carousel(4);
    carousel.stop_auto_advance();
    carousel.stop_auto_advance();
    assert!(!carousel.is_auto_advance_active());
    assert_eq!(carousel.auto_advance_timer_count(), 0);
}

#[test]
fn test_auto_advance_walks_through_slides() {
    let (mut carousel, t0) = carousel(3);
    carousel.tick(t0 + ms(4999));
    assert_eq!(carousel.current_index(), 0);

    carousel.tick(t0 + ms(5000));
    assert_eq!(carousel.current_index(), 1);
    assert!(carousel.is_transitioning());

    carousel.tick(t0 + ms(5600));
    assert!(!carousel.is_transitioning());

    // Two more beats, one of them wrapping
    carousel.tick(t0 + ms(10_000));
    carousel.tick(t0 + ms(15_000));
    assert_eq!(carousel.current_index(), 0);
    assert_eq!(carousel.stats().auto_advance_fires, 3);
}

#[test]
fn test_manual_navigation_restarts_countdown() {
    let (mut carousel, t0) = carousel(4);
    let now = t0 + ms(4000);
    carousel.handle_event(CarouselEvent::KeyDown(Key::ArrowRight), now);
    assert_eq!(carousel.current_index(), 1);

    // The original 5 s beat would have fired here
    carousel.tick(t0 + ms(5000));
    assert_eq!(carousel.current_index(), 1);
    assert_eq!(carousel.next_deadline(), Some(now + ms(5000)));
}

#[test]
fn test_hover_pauses_auto_advance() {
    let (mut carousel, t0) = carousel(4);
    carousel.handle_event(CarouselEvent::PointerEnter, t0 + ms(1000));
    assert!(carousel.is_hovered());
    assert!(!carousel.is_auto_advance_active());
    carousel.tick(t0 + ms(20_000));
    assert_eq!(carousel.current_index(), 0);

    let leave = t0 + ms(20_000);
    carousel.handle_event(CarouselEvent::PointerLeave, leave);
    assert!(!carousel.is_hovered());
    assert!(carousel.is_auto_advance_active());
    carousel.tick(leave + ms(5000));
    assert_eq!(carousel.current_index(), 1);
}

#[test]
fn test_mouse_drag_uses_document_listeners() {
    let (mut carousel, t0) = carousel(4);
    assert!(!carousel.listeners().is_attached(ListenerTarget::Document, EventKind::MouseMove));

    carousel.handle_event(CarouselEvent::MouseDown { x: 400.0 }, t0);
    assert!(carousel.listeners().is_attached(ListenerTarget::Document, EventKind::MouseMove));
    assert!(carousel.listeners().is_attached(ListenerTarget::Document, EventKind::MouseUp));

    carousel.handle_event(CarouselEvent::MouseMove { x: 320.0 }, t0);
    assert_eq!(carousel.handle_event(CarouselEvent::MouseUp, t0), Some(NavCommand::Next));
    assert_eq!(carousel.current_index(), 1);
    assert_eq!(carousel.stats().drags, 1);
    assert!(!carousel.listeners().is_attached(ListenerTarget::Document, EventKind::MouseMove));
    assert!(!carousel.listeners().is_attached(ListenerTarget::Document, EventKind::MouseUp));
}

#[test]
fn test_short_drag_still_removes_listeners() {
    let (mut carousel, t0) = carousel(4);
    carousel.handle_event(CarouselEvent::MouseDown { x: 400.0 }, t0);
    carousel.handle_event(CarouselEvent::MouseMove { x: 380.0 }, t0);
    assert_eq!(carousel.handle_event(CarouselEvent::MouseUp, t0), None);
    assert_eq!(carousel.current_index(), 0);
    assert!(!carousel.listeners().is_attached(ListenerTarget::Document, EventKind::MouseUp));

    // Without a drag in progress the document listeners are gone
    assert_eq!(carousel.handle_event(CarouselEvent::MouseMove { x: 0.0 }, t0), None);
    assert_eq!(carousel.handle_event(CarouselEvent::MouseUp, t0), None);
}

#[test]
fn test_click_without_movement_is_not_a_drag() {
    let (mut carousel, t0) = carousel(4);
    carousel.handle_event(CarouselEvent::MouseDown { x: 400.0 }, t0);
    assert_eq!(carousel.handle_event(CarouselEvent::MouseUp, t0), None);
    assert_eq!(carousel.stats().requested, 0);
}

#[test]
fn test_arrow_keys() {
    let (mut carousel, t0) = carousel(4);
    assert_eq!(
        carousel.handle_event(CarouselEvent::KeyDown(Key::ArrowLeft), t0),
        Some(NavCommand::Prev)
    );
    assert_eq!(carousel.current_index(), 3);

    // Still transitioning: asked for, but rejected
    assert_eq!(
        carousel.handle_event(CarouselEvent::KeyDown(Key::ArrowRight), t0 + ms(100)),
        Some(NavCommand::Next)
    );
    assert_eq!(carousel.current_index(), 3);

    assert_eq!(carousel.handle_event(CarouselEvent::KeyDown(Key::Other), t0), None);
}

#[test]
fn test_container_keyboard_scope_requires_hover() {
    let t0 = Instant::now();
    let settings = CarouselSettings { keyboard_scope: KeyboardScope::Container, ..Default::default() };
    let mut carousel = Carousel::new(SliderMarkup::for_slide_count(4), settings, t0);
    assert!(!carousel.listeners().is_attached(ListenerTarget::Document, EventKind::KeyDown));

    assert_eq!(carousel.handle_event(CarouselEvent::KeyDown(Key::ArrowRight), t0), None);
    carousel.handle_event(CarouselEvent::PointerEnter, t0);
    assert_eq!(
        carousel.handle_event(CarouselEvent::KeyDown(Key::ArrowRight), t0),
        Some(NavCommand::Next)
    );
    assert_eq!(carousel.current_index(), 1);
}

#[test]
fn test_indicator_clicks() {
    let t0 = Instant::now();
    let mut markup = SliderMarkup::for_slide_count(4);
    markup.indicators[1].data_slide = Some("abc".to_string());
    markup.indicators[2].data_slide = None;
    markup.indicators[3].data_slide = Some("-1".to_string());
    let mut carousel = Carousel::new(markup, CarouselSettings::default(), t0);

    assert_eq!(carousel.handle_event(CarouselEvent::IndicatorClick { indicator: 1 }, t0), None);
    assert_eq!(carousel.handle_event(CarouselEvent::IndicatorClick { indicator: 2 }, t0), None);
    assert_eq!(carousel.stats().malformed_indicators, 2);

    assert_eq!(carousel.handle_event(CarouselEvent::IndicatorClick { indicator: 3 }, t0), None);
    assert_eq!(carousel.stats().rejected_out_of_range, 1);

    // No listener on an indicator that does not exist
    assert_eq!(carousel.handle_event(CarouselEvent::IndicatorClick { indicator: 9 }, t0), None);
    assert_eq!(carousel.current_index(), 0);
}

#[test]
fn test_indicator_click_navigates_and_resets() {
    let (mut carousel, t0) = carousel(4);
    let now = t0 + ms(3000);
    assert_eq!(
        carousel.handle_event(CarouselEvent::IndicatorClick { indicator: 2 }, now),
        Some(NavCommand::GoTo(2))
    );
    assert_eq!(carousel.current_index(), 2);
    assert_eq!(active_dots(&carousel), vec![2]);
    assert_eq!(carousel.auto_advance_timer_count(), 1);
    assert_eq!(carousel.next_deadline(), Some(now + ms(600)));
}

#[test]
fn test_fewer_indicators_than_slides() {
    let t0 = Instant::now();
    let mut markup = SliderMarkup::for_slide_count(4);
    markup.indicators.truncate(2);
    let mut carousel = Carousel::new(markup, CarouselSettings::default(), t0);

    assert!(carousel.go_to_slide(3, t0));
    assert!(active_dots(&carousel).is_empty());
}

#[test]
fn test_zero_slides_stays_disabled() {
    let t0 = Instant::now();
    let mut carousel = Carousel::new(SliderMarkup::for_slide_count(0), CarouselSettings::default(), t0);

    assert!(!carousel.is_mounted());
    assert!(carousel.listeners().is_empty());
    assert_eq!(carousel.pending_timers(), 0);
    assert_eq!(carousel.current_index(), 0);

    assert_eq!(carousel.handle_event(CarouselEvent::KeyDown(Key::ArrowRight), t0), None);
    assert!(!carousel.next_slide(t0));
    carousel.start_auto_advance(t0);
    assert_eq!(carousel.tick(t0 + ms(60_000)), 0);
    assert_eq!(carousel.current_index(), 0);
}

#[test]
fn test_try_new_reports_missing_elements() {
    let t0 = Instant::now();

    let mut markup = SliderMarkup::for_slide_count(3);
    markup.track = None;
    let err = Carousel::try_new(markup, CarouselSettings::default(), t0).unwrap_err();
    assert!(matches!(err, CarouselError::MissingTrack));

    let err = Carousel::try_new(SliderMarkup::default(), CarouselSettings::default(), t0).unwrap_err();
    assert_eq!(err.error_code(), "MISSING_CONTAINER");

    let err = Carousel::try_new(SliderMarkup::for_slide_count(0), CarouselSettings::default(), t0)
        .unwrap_err();
    assert_eq!(err.error_code(), "NO_SLIDES");
}

#[test]
fn test_invalid_settings_fall_back_to_defaults() {
    let t0 = Instant::now();
    let settings = CarouselSettings { auto_advance_interval_ms: 0, ..Default::default() };
    assert!(Carousel::try_new(SliderMarkup::for_slide_count(2), settings.clone(), t0).is_err());

    let carousel = Carousel::new(SliderMarkup::for_slide_count(2), settings, t0);
    assert!(carousel.is_mounted());
    assert_eq!(carousel.settings(), &CarouselSettings::default());
}

#[test]
fn test_auto_advance_disabled_by_settings() {
    let t0 = Instant::now();
    let settings = CarouselSettings { auto_advance: false, ..Default::default() };
    let mut carousel = Carousel::new(SliderMarkup::for_slide_count(3), settings, t0);
    assert!(!carousel.is_auto_advance_active());

    carousel.handle_event(CarouselEvent::PointerLeave, t0);
    assert!(!carousel.is_auto_advance_active());

    carousel.set_auto_advance_enabled(true, t0);
    assert!(carousel.is_auto_advance_active());
}

#[test]
fn test_dispose_cancels_everything() {
    let (mut carousel, t0) = carousel(4);
    carousel.go_to_slide(1, t0);
    carousel.handle_event(CarouselEvent::MouseDown { x: 0.0 }, t0);
    assert!(carousel.pending_timers() > 0);

    carousel.dispose();
    assert!(!carousel.is_mounted());
    assert!(carousel.listeners().is_empty());
    assert_eq!(carousel.pending_timers(), 0);
    assert!(!carousel.is_gesture_active());
    assert_eq!(carousel.handle_event(CarouselEvent::KeyDown(Key::ArrowRight), t0), None);

    carousel.dispose();
    assert_eq!(carousel.current_index(), 1);
}

#[test]
fn test_registry_routes_keys_to_active_carousel() {
    let t0 = Instant::now();
    let mut registry = CarouselRegistry::new();
    let first = registry.register(Carousel::new(
        SliderMarkup::for_slide_count(3),
        CarouselSettings::default(),
        t0,
    ));
    let second = registry.register(Carousel::new(
        SliderMarkup::for_slide_count(3),
        CarouselSettings::default(),
        t0,
    ));
    assert_eq!(registry.active(), Some(first));

    registry.dispatch_key(Key::ArrowRight, t0);
    assert_eq!(registry.get(first).unwrap().current_index(), 1);
    assert_eq!(registry.get(second).unwrap().current_index(), 0);

    registry.dispatch(second, CarouselEvent::PointerEnter, t0);
    assert_eq!(registry.active(), Some(second));
    registry.dispatch(second, CarouselEvent::KeyDown(Key::ArrowLeft), t0);
    assert_eq!(registry.get(first).unwrap().current_index(), 1);
    assert_eq!(registry.get(second).unwrap().current_index(), 2);

    let removed = registry.remove(second).unwrap();
    assert!(!removed.is_mounted());
    assert_eq!(registry.active(), Some(first));
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_registry_ticks_every_carousel() {
    let t0 = Instant::now();
    let mut registry = CarouselRegistry::new();
    let a = registry.register(Carousel::new(
        SliderMarkup::for_slide_count(2),
        CarouselSettings::default(),
        t0,
    ));
    let slow = CarouselSettings { auto_advance_interval_ms: 8000, ..Default::default() };
    let b = registry.register(Carousel::new(SliderMarkup::for_slide_count(2), slow, t0));

    assert_eq!(registry.next_deadline(), Some(t0 + ms(5000)));
    registry.tick_all(t0 + ms(8000));
    assert_eq!(registry.get(a).unwrap().current_index(), 1);
    assert_eq!(registry.get(b).unwrap().current_index(), 1);
}

#[test]
fn test_error_messages() {
    let error = CarouselError::NoSlides;
    assert!(!error.is_recoverable());
    assert_eq!(error.error_code(), "NO_SLIDES");
    assert!(error.user_message().contains("at least one image"));
}
