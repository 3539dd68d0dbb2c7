use super::scheduler::TimerKind;
use super::Carousel;

use std::time::Instant;

impl Carousel {
    /// (Re)schedules the repeating advance. Any previous timer is cancelled
    /// first, so repeated calls never stack timers.
    pub fn start_auto_advance(&mut self, now: Instant) {
        self.stop_auto_advance();
        if !self.mounted || !self.auto_advance_enabled {
            return;
        }
        let id = self.scheduler.schedule_repeating(
            TimerKind::AutoAdvance,
            now,
            self.settings.auto_advance_interval(),
        );
        self.auto_advance_timer = Some(id);
    }

    pub fn stop_auto_advance(&mut self) {
        if let Some(id) = self.auto_advance_timer.take() {
            self.scheduler.cancel(id);
        }
    }

    /// Restarts the countdown after a manual navigation.
    pub fn reset_auto_advance(&mut self, now: Instant) {
        self.stop_auto_advance();
        self.start_auto_advance(now);
    }

    /// Pauses or resumes auto-advance for good, e.g. from a play/pause button.
    pub fn set_auto_advance_enabled(&mut self, enabled: bool, now: Instant) {
        self.auto_advance_enabled = enabled;
        if enabled {
            self.start_auto_advance(now);
        } else {
            self.cancel_resume();
            self.stop_auto_advance();
        }
    }

    /// Restarts auto-advance once the touch grace period has passed.
    pub(super) fn schedule_resume(&mut self, now: Instant) {
        self.cancel_resume();
        let id = self
            .scheduler
            .schedule_once(TimerKind::ResumeAutoAdvance, now, self.settings.resume_delay());
        self.resume_timer = Some(id);
    }

    pub(super) fn cancel_resume(&mut self) {
        if let Some(id) = self.resume_timer.take() {
            self.scheduler.cancel(id);
        }
    }
}
