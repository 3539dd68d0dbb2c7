pub mod carousel_view;
pub mod main;

pub use carousel_view::{show_carousel, CarouselStyle, CarouselViewState};
