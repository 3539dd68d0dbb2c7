use super::markup::TrackTransform;
use super::scheduler::TimerKind;
use super::Carousel;

use std::time::Instant;

impl Carousel {
    /// Moves to `index`. Returns false when the request was ignored: the
    /// carousel is disabled, a transition is in flight, `index` is already
    /// current, or `index` is out of range.
    pub fn go_to_slide(&mut self, index: usize, now: Instant) -> bool {
        if !self.mounted {
            return false;
        }
        self.stats.requested += 1;

        if self.transitioning {
            self.stats.rejected_transitioning += 1;
            tracing::trace!(index, "navigation rejected: transition in flight");
            return false;
        }
        if index == self.current_index {
            self.stats.rejected_same_index += 1;
            return false;
        }
        if index >= self.slide_count {
            self.stats.rejected_out_of_range += 1;
            tracing::debug!(index, slide_count = self.slide_count, "navigation rejected: out of range");
            return false;
        }

        self.transitioning = true;
        self.current_index = index;
        self.apply_transform();
        self.update_indicators();

        let id = self
            .scheduler
            .schedule_once(TimerKind::TransitionEnd, now, self.settings.transition_duration());
        self.transition_timer = Some(id);

        self.stats.applied += 1;
        tracing::debug!(index, "slide changed");
        true
    }

    pub fn next_slide(&mut self, now: Instant) -> bool {
        if self.slide_count == 0 {
            return false;
        }
        let next = (self.current_index + 1) % self.slide_count;
        self.go_to_slide(next, now)
    }

    pub fn prev_slide(&mut self, now: Instant) -> bool {
        if self.slide_count == 0 {
            return false;
        }
        let prev = (self.current_index + self.slide_count - 1) % self.slide_count;
        self.go_to_slide(prev, now)
    }

    fn apply_transform(&mut self) {
        let transform = TrackTransform::for_index(self.current_index, self.slide_count);
        if let Some(track) = self.markup.track.as_mut() {
            track.transform = Some(transform);
        }
    }

    /// Marks exactly the indicator at `current_index` active.
    pub(super) fn update_indicators(&mut self) {
        let current = self.current_index;
        for (i, dot) in self.markup.indicators.iter_mut().enumerate() {
            dot.active = i == current;
        }
    }
}
