use super::gesture::{MouseDrag, TouchGesture};
use super::listeners::{EventKind, ListenerTarget, Listeners};
use super::markup::SliderMarkup;
use super::scheduler::{Scheduler, TimerId, TimerKind};
use super::stats::NavigationStats;
use crate::errors::{CarouselError, Result};
use crate::settings::{CarouselSettings, KeyboardScope};

use std::time::Instant;

/// Interaction state of one slide carousel.
///
/// Every input (timer, indicator click, touch, mouse drag, keyboard, hover)
/// ends up in [`Carousel::go_to_slide`], so the transition lock guards all of
/// them the same way. Time is always passed in; the carousel never reads a
/// clock on its own.
#[derive(Debug)]
pub struct Carousel {
    pub(super) settings: CarouselSettings,
    pub(super) markup: SliderMarkup,

    pub(super) slide_count: usize,
    pub(super) current_index: usize,
    pub(super) transitioning: bool,
    pub(super) mounted: bool,
    pub(super) hovered: bool,
    /// Cleared by the toolbar pause; gates every automatic restart
    pub(super) auto_advance_enabled: bool,

    // Gesture origins, alive only between start and end events
    pub(super) touch: Option<TouchGesture>,
    pub(super) drag: Option<MouseDrag>,

    pub(super) scheduler: Scheduler,
    pub(super) listeners: Listeners,
    pub(super) transition_timer: Option<TimerId>,
    pub(super) auto_advance_timer: Option<TimerId>,
    pub(super) resume_timer: Option<TimerId>,

    pub(super) stats: NavigationStats,
}

impl Carousel {
    /// Mounts a carousel on `markup`.
    ///
    /// Incomplete markup does not fail: a warning is logged and the returned
    /// carousel stays disabled with no listeners and no timers. Invalid
    /// settings are replaced by the defaults.
    pub fn new(markup: SliderMarkup, settings: CarouselSettings, now: Instant) -> Self {
        let settings = match settings.validate() {
            Ok(()) => settings,
            Err(e) => {
                tracing::warn!(code = e.error_code(), "{}, using defaults", e);
                CarouselSettings::default()
            }
        };

        let mut carousel = Self::unmounted(markup, settings);
        match check_markup(&carousel.markup) {
            Ok(()) => carousel.mount(now),
            Err(e) => tracing::warn!(code = e.error_code(), "Slider elements not found: {}", e),
        }
        carousel
    }

    /// Like [`Carousel::new`] but reports incomplete markup and invalid settings.
    pub fn try_new(markup: SliderMarkup, settings: CarouselSettings, now: Instant) -> Result<Self> {
        settings.validate()?;
        check_markup(&markup)?;
        let mut carousel = Self::unmounted(markup, settings);
        carousel.mount(now);
        Ok(carousel)
    }

    fn unmounted(markup: SliderMarkup, settings: CarouselSettings) -> Self {
        Self {
            auto_advance_enabled: settings.auto_advance,
            slide_count: markup.slides.len(),
            settings,
            markup,
            current_index: 0,
            transitioning: false,
            mounted: false,
            hovered: false,
            touch: None,
            drag: None,
            scheduler: Scheduler::new(),
            listeners: Listeners::default(),
            transition_timer: None,
            auto_advance_timer: None,
            resume_timer: None,
            stats: NavigationStats::default(),
        }
    }

    fn mount(&mut self, now: Instant) {
        self.update_indicators();

        for i in 0..self.markup.indicators.len() {
            self.listeners.attach(ListenerTarget::Indicator(i), EventKind::Click);
        }
        for kind in [
            EventKind::TouchStart,
            EventKind::TouchMove,
            EventKind::TouchEnd,
            EventKind::TouchCancel,
            EventKind::MouseDown,
            EventKind::MouseEnter,
            EventKind::MouseLeave,
        ] {
            self.listeners.attach(ListenerTarget::Container, kind);
        }
        self.listeners.attach(self.keyboard_target(), EventKind::KeyDown);

        self.mounted = true;
        self.start_auto_advance(now);

        tracing::debug!(
            slides = self.slide_count,
            indicators = self.markup.indicators.len(),
            listeners = self.listeners.len(),
            "carousel mounted"
        );
    }

    fn keyboard_target(&self) -> ListenerTarget {
        match self.settings.keyboard_scope {
            KeyboardScope::Document => ListenerTarget::Document,
            KeyboardScope::Container => ListenerTarget::Container,
        }
    }

    /// Cancels every timer and detaches every listener. Idempotent.
    pub fn dispose(&mut self) {
        if !self.mounted && self.scheduler.is_empty() && self.listeners.is_empty() {
            return;
        }
        self.scheduler.clear();
        self.listeners.clear();
        self.transition_timer = None;
        self.auto_advance_timer = None;
        self.resume_timer = None;
        self.transitioning = false;
        self.touch = None;
        self.drag = None;
        self.hovered = false;
        self.mounted = false;
        tracing::debug!("carousel disposed");
    }

    /// Runs every timer that is due at `now`, earliest first.
    ///
    /// Callbacks see the timer's deadline as the current time, so follow-up
    /// timers are scheduled exactly as if each had fired on time.
    pub fn tick(&mut self, now: Instant) -> usize {
        if !self.mounted {
            return 0;
        }

        let mut fired = 0;
        while let Some(timer) = self.scheduler.pop_due(now) {
            fired += 1;
            match timer.kind {
                TimerKind::TransitionEnd => {
                    if self.transition_timer == Some(timer.id) {
                        self.transition_timer = None;
                        self.transitioning = false;
                    }
                }
                TimerKind::AutoAdvance => {
                    self.stats.auto_advance_fires += 1;
                    self.next_slide(timer.at);
                }
                TimerKind::ResumeAutoAdvance => {
                    self.resume_timer = None;
                    self.start_auto_advance(timer.at);
                }
            }
        }
        fired
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_auto_advance_active(&self) -> bool {
        self.auto_advance_timer.is_some()
    }

    pub fn is_auto_advance_enabled(&self) -> bool {
        self.auto_advance_enabled
    }

    pub fn is_resume_pending(&self) -> bool {
        self.resume_timer.is_some()
    }

    pub fn is_gesture_active(&self) -> bool {
        self.touch.is_some() || self.drag.is_some()
    }

    /// Number of scheduled auto-advance timers; never more than one.
    pub fn auto_advance_timer_count(&self) -> usize {
        self.scheduler.count(TimerKind::AutoAdvance)
    }

    pub fn pending_timers(&self) -> usize {
        self.scheduler.len()
    }

    pub fn markup(&self) -> &SliderMarkup {
        &self.markup
    }

    pub fn listeners(&self) -> &Listeners {
        &self.listeners
    }

    pub fn settings(&self) -> &CarouselSettings {
        &self.settings
    }

    pub fn stats(&self) -> &NavigationStats {
        &self.stats
    }
}

fn check_markup(markup: &SliderMarkup) -> Result<()> {
    if !markup.container {
        return Err(CarouselError::MissingContainer);
    }
    if markup.track.is_none() {
        return Err(CarouselError::MissingTrack);
    }
    if markup.slides.is_empty() {
        return Err(CarouselError::NoSlides);
    }
    Ok(())
}
