pub mod auto_advance;
pub mod gesture;
pub mod input;
pub mod listeners;
pub mod markup;
pub mod navigation;
pub mod scheduler;
pub mod state;
pub mod stats;

pub use gesture::{Point, SwipeDirection};
pub use input::{CarouselEvent, Key, NavCommand};
pub use listeners::{EventKind, ListenerTarget, Listeners};
pub use markup::{Indicator, Slide, SliderMarkup, Track, TrackTransform};
pub use state::*;
pub use stats::NavigationStats;
