/// Navigation counters of one carousel.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NavigationStats {
    pub requested: u64,
    pub applied: u64,
    pub rejected_transitioning: u64,
    pub rejected_same_index: u64,
    pub rejected_out_of_range: u64,
    pub auto_advance_fires: u64,
    pub swipes: u64,
    pub drags: u64,
    pub malformed_indicators: u64,
}

impl NavigationStats {
    pub fn rejected(&self) -> u64 {
        self.rejected_transitioning + self.rejected_same_index + self.rejected_out_of_range
    }

    /// Share of navigation requests that changed the slide.
    pub fn apply_rate(&self) -> f64 {
        if self.requested == 0 {
            0.0
        } else {
            self.applied as f64 / self.requested as f64
        }
    }
}
