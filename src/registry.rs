//! Page-wide set of carousels.
//!
//! Arrow keys have no natural target when several carousels share a page.
//! The registry keeps one explicit active carousel and sends keyboard input
//! to it alone. Pointer, touch and indicator input make their carousel active.

use crate::carousel::{Carousel, CarouselEvent, Key, NavCommand};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Instant;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CarouselId(Uuid);

impl CarouselId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for CarouselId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Default)]
pub struct CarouselRegistry {
    carousels: Vec<(CarouselId, Carousel)>,
    active: Option<CarouselId>,
}

impl CarouselRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a carousel. The first one registered becomes active.
    pub fn register(&mut self, carousel: Carousel) -> CarouselId {
        let id = CarouselId::new();
        self.carousels.push((id, carousel));
        if self.active.is_none() {
            self.active = Some(id);
        }
        tracing::debug!(%id, total = self.carousels.len(), "carousel registered");
        id
    }

    /// Disposes and removes a carousel. If it was active, the first remaining
    /// carousel takes over.
    pub fn remove(&mut self, id: CarouselId) -> Option<Carousel> {
        let pos = self.carousels.iter().position(|(cid, _)| *cid == id)?;
        let (_, mut carousel) = self.carousels.remove(pos);
        carousel.dispose();
        if self.active == Some(id) {
            self.active = self.carousels.first().map(|(cid, _)| *cid);
        }
        Some(carousel)
    }

    pub fn get(&self, id: CarouselId) -> Option<&Carousel> {
        self.carousels.iter().find(|(cid, _)| *cid == id).map(|(_, c)| c)
    }

    pub fn get_mut(&mut self, id: CarouselId) -> Option<&mut Carousel> {
        self.carousels.iter_mut().find(|(cid, _)| *cid == id).map(|(_, c)| c)
    }

    pub fn active(&self) -> Option<CarouselId> {
        self.active
    }

    pub fn activate(&mut self, id: CarouselId) -> bool {
        if self.get(id).is_some() {
            self.active = Some(id);
            true
        } else {
            false
        }
    }

    /// Delivers an event to one carousel. Keyboard events are rerouted
    /// through [`CarouselRegistry::dispatch_key`].
    pub fn dispatch(&mut self, id: CarouselId, event: CarouselEvent, now: Instant) -> Option<NavCommand> {
        if let CarouselEvent::KeyDown(key) = event {
            return self.dispatch_key(key, now);
        }
        if takes_focus(&event) {
            self.activate(id);
        }
        self.get_mut(id)?.handle_event(event, now)
    }

    /// Sends a key press to the active carousel only.
    pub fn dispatch_key(&mut self, key: Key, now: Instant) -> Option<NavCommand> {
        let id = self.active?;
        self.get_mut(id)?.handle_event(CarouselEvent::KeyDown(key), now)
    }

    pub fn tick_all(&mut self, now: Instant) -> usize {
        self.carousels.iter_mut().map(|(_, c)| c.tick(now)).sum()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.carousels.iter().filter_map(|(_, c)| c.next_deadline()).min()
    }

    pub fn dispose_all(&mut self) {
        for (_, carousel) in &mut self.carousels {
            carousel.dispose();
        }
    }

    pub fn len(&self) -> usize {
        self.carousels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.carousels.is_empty()
    }
}

fn takes_focus(event: &CarouselEvent) -> bool {
    matches!(
        event,
        CarouselEvent::IndicatorClick { .. }
            | CarouselEvent::TouchStart(_)
            | CarouselEvent::MouseDown { .. }
            | CarouselEvent::PointerEnter
    )
}
