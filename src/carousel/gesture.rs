//! Swipe and drag recognition.
//!
//! Coordinates are logical pixels. A positive horizontal delta means the
//! pointer travelled left, which reveals the next slide.

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger or cursor moved left
    Left,
    /// Finger or cursor moved right
    Right,
}

/// Classifies a horizontal gesture. `dx` is `start - end` and `dy` the
/// absolute vertical travel. Vertical-dominant gestures are left to scrolling.
pub fn classify_swipe(dx: f32, dy: f32, min_distance: f32) -> Option<SwipeDirection> {
    if dx.abs() > min_distance && dx.abs() > dy {
        Some(if dx > 0.0 { SwipeDirection::Left } else { SwipeDirection::Right })
    } else {
        None
    }
}

/// Touch origin and latest position, alive from touch start to touch end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchGesture {
    start: Point,
    last: Point,
}

impl TouchGesture {
    pub fn begin(start: Point) -> Self {
        Self { start, last: start }
    }

    pub fn update(&mut self, pos: Point) {
        self.last = pos;
    }

    pub fn finish(self, min_distance: f32) -> Option<SwipeDirection> {
        let dx = self.start.x - self.last.x;
        let dy = (self.start.y - self.last.y).abs();
        classify_swipe(dx, dy, min_distance)
    }
}

/// Desktop drag. Only horizontal travel is considered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseDrag {
    start_x: f32,
    last_x: f32,
    moved: bool,
}

impl MouseDrag {
    pub fn begin(start_x: f32) -> Self {
        Self { start_x, last_x: start_x, moved: false }
    }

    pub fn update(&mut self, x: f32) {
        self.moved = true;
        self.last_x = x;
    }

    pub fn moved(&self) -> bool {
        self.moved
    }

    pub fn finish(self, min_distance: f32) -> Option<SwipeDirection> {
        if !self.moved {
            return None;
        }
        let dx = self.start_x - self.last_x;
        classify_swipe(dx, 0.0, min_distance)
    }
}
