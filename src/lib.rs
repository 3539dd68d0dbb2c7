//! Slide carousel controller and its egui front end.
//!
//! [`carousel::Carousel`] is the controller: it owns the current index, the
//! transition lock, the auto-advance timer and gesture recognition, and it
//! writes its state back into a [`carousel::SliderMarkup`]. Everything under
//! [`app`] and [`ui`] is the desktop shell around it.

pub mod app;
pub mod carousel;
pub mod errors;
pub mod logging;
pub mod registry;
pub mod settings;
pub mod slides;
pub mod ui;

pub use carousel::{Carousel, CarouselEvent, Key, NavCommand, SliderMarkup};
pub use errors::{CarouselError, Result};
pub use registry::{CarouselId, CarouselRegistry};
pub use settings::{CarouselSettings, KeyboardScope, Settings};

#[cfg(test)]
mod tests;
