use super::gesture::{MouseDrag, Point, SwipeDirection, TouchGesture};
use super::listeners::{EventKind, ListenerTarget};
use super::markup::parse_slide_index;
use super::Carousel;
use crate::settings::KeyboardScope;

use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Other,
}

/// Everything the page can deliver to a carousel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselEvent {
    IndicatorClick { indicator: usize },
    TouchStart(Point),
    TouchMove(Point),
    TouchEnd,
    TouchCancel,
    MouseDown { x: f32 },
    MouseMove { x: f32 },
    MouseUp,
    PointerEnter,
    PointerLeave,
    KeyDown(Key),
}

/// Navigation an input asked for. It may still be rejected by the
/// transition lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Next,
    Prev,
    GoTo(usize),
}

impl From<SwipeDirection> for NavCommand {
    fn from(direction: SwipeDirection) -> Self {
        match direction {
            SwipeDirection::Left => NavCommand::Next,
            SwipeDirection::Right => NavCommand::Prev,
        }
    }
}

impl CarouselEvent {
    /// The listener that has to be attached for this event to be delivered.
    pub fn listener(&self, scope: KeyboardScope) -> (ListenerTarget, EventKind) {
        match self {
            CarouselEvent::IndicatorClick { indicator } => {
                (ListenerTarget::Indicator(*indicator), EventKind::Click)
            }
            CarouselEvent::TouchStart(_) => (ListenerTarget::Container, EventKind::TouchStart),
            CarouselEvent::TouchMove(_) => (ListenerTarget::Container, EventKind::TouchMove),
            CarouselEvent::TouchEnd => (ListenerTarget::Container, EventKind::TouchEnd),
            CarouselEvent::TouchCancel => (ListenerTarget::Container, EventKind::TouchCancel),
            CarouselEvent::MouseDown { .. } => (ListenerTarget::Container, EventKind::MouseDown),
            // Drag listeners live on the document so the drag survives leaving the container
            CarouselEvent::MouseMove { .. } => (ListenerTarget::Document, EventKind::MouseMove),
            CarouselEvent::MouseUp => (ListenerTarget::Document, EventKind::MouseUp),
            CarouselEvent::PointerEnter => (ListenerTarget::Container, EventKind::MouseEnter),
            CarouselEvent::PointerLeave => (ListenerTarget::Container, EventKind::MouseLeave),
            CarouselEvent::KeyDown(_) => match scope {
                KeyboardScope::Document => (ListenerTarget::Document, EventKind::KeyDown),
                KeyboardScope::Container => (ListenerTarget::Container, EventKind::KeyDown),
            },
        }
    }
}

impl Carousel {
    /// Delivers one input event. Returns the navigation the event asked for,
    /// or `None` if it asked for none or no listener was attached for it.
    pub fn handle_event(&mut self, event: CarouselEvent, now: Instant) -> Option<NavCommand> {
        if !self.mounted {
            return None;
        }
        let (target, kind) = event.listener(self.settings.keyboard_scope);
        if !self.listeners.is_attached(target, kind) {
            tracing::trace!(?event, "no listener attached");
            return None;
        }

        match event {
            CarouselEvent::IndicatorClick { indicator } => self.on_indicator_click(indicator, now),

            CarouselEvent::TouchStart(pos) => {
                self.touch = Some(TouchGesture::begin(pos));
                self.cancel_resume();
                self.stop_auto_advance();
                None
            }
            CarouselEvent::TouchMove(pos) => {
                if let Some(touch) = self.touch.as_mut() {
                    touch.update(pos);
                }
                None
            }
            CarouselEvent::TouchEnd => {
                let min_distance = self.settings.min_swipe_distance;
                let command = self
                    .touch
                    .take()
                    .and_then(|touch| touch.finish(min_distance))
                    .map(NavCommand::from);
                if let Some(command) = command {
                    self.stats.swipes += 1;
                    self.navigate(command, now);
                }
                self.schedule_resume(now);
                command
            }
            CarouselEvent::TouchCancel => {
                self.touch = None;
                self.schedule_resume(now);
                None
            }

            CarouselEvent::MouseDown { x } => {
                self.drag = Some(MouseDrag::begin(x));
                self.listeners.attach(ListenerTarget::Document, EventKind::MouseMove);
                self.listeners.attach(ListenerTarget::Document, EventKind::MouseUp);
                None
            }
            CarouselEvent::MouseMove { x } => {
                if let Some(drag) = self.drag.as_mut() {
                    drag.update(x);
                }
                None
            }
            CarouselEvent::MouseUp => {
                let min_distance = self.settings.min_swipe_distance;
                let command = self
                    .drag
                    .take()
                    .and_then(|drag| drag.finish(min_distance))
                    .map(NavCommand::from);
                if let Some(command) = command {
                    self.stats.drags += 1;
                    self.navigate(command, now);
                }
                self.listeners.detach(ListenerTarget::Document, EventKind::MouseMove);
                self.listeners.detach(ListenerTarget::Document, EventKind::MouseUp);
                command
            }

            CarouselEvent::PointerEnter => {
                self.hovered = true;
                self.stop_auto_advance();
                None
            }
            CarouselEvent::PointerLeave => {
                self.hovered = false;
                self.start_auto_advance(now);
                None
            }

            CarouselEvent::KeyDown(key) => {
                if self.settings.keyboard_scope == KeyboardScope::Container && !self.hovered {
                    return None;
                }
                let command = match key {
                    Key::ArrowLeft => NavCommand::Prev,
                    Key::ArrowRight => NavCommand::Next,
                    Key::Other => return None,
                };
                self.navigate(command, now);
                Some(command)
            }
        }
    }

    /// Runs a user-driven navigation and restarts the auto-advance countdown.
    pub fn navigate(&mut self, command: NavCommand, now: Instant) -> bool {
        let applied = match command {
            NavCommand::Next => self.next_slide(now),
            NavCommand::Prev => self.prev_slide(now),
            NavCommand::GoTo(index) => self.go_to_slide(index, now),
        };
        self.reset_auto_advance(now);
        applied
    }

    fn on_indicator_click(&mut self, indicator: usize, now: Instant) -> Option<NavCommand> {
        let raw = self
            .markup
            .indicators
            .get(indicator)
            .and_then(|dot| dot.data_slide.as_deref());

        let Some(value) = raw.and_then(parse_slide_index) else {
            self.stats.malformed_indicators += 1;
            tracing::debug!(indicator, ?raw, "ignoring indicator without a slide index");
            return None;
        };

        match usize::try_from(value) {
            Ok(index) => {
                let command = NavCommand::GoTo(index);
                self.navigate(command, now);
                Some(command)
            }
            Err(_) => {
                // Negative index: counts as an out-of-range request
                self.stats.requested += 1;
                self.stats.rejected_out_of_range += 1;
                self.reset_auto_advance(now);
                None
            }
        }
    }
}
