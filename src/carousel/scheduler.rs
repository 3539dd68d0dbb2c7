//! Cooperative timer queue.
//!
//! Nothing here sleeps. The owner asks for due timers with [`Scheduler::pop_due`]
//! and runs their callbacks itself, one at a time.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Releases the transition lock
    TransitionEnd,
    /// Repeating advance to the next slide
    AutoAdvance,
    /// Restarts auto-advance after a touch interaction
    ResumeAutoAdvance,
}

#[derive(Debug, Clone)]
struct Timer {
    id: TimerId,
    kind: TimerKind,
    deadline: Instant,
    repeat: Option<Duration>,
}

/// A timer that became due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fired {
    pub id: TimerId,
    pub kind: TimerKind,
    /// The deadline the timer was scheduled for
    pub at: Instant,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    next_id: u64,
    timers: Vec<Timer>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule_once(&mut self, kind: TimerKind, now: Instant, delay: Duration) -> TimerId {
        self.push(kind, now + delay, None)
    }

    pub fn schedule_repeating(&mut self, kind: TimerKind, now: Instant, interval: Duration) -> TimerId {
        self.push(kind, now + interval, Some(interval))
    }

    fn push(&mut self, kind: TimerKind, deadline: Instant, repeat: Option<Duration>) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.push(Timer { id, kind, deadline, repeat });
        id
    }

    /// Returns false if the timer already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.id != id);
        self.timers.len() != before
    }

    pub fn is_scheduled(&self, id: TimerId) -> bool {
        self.timers.iter().any(|t| t.id == id)
    }

    pub fn count(&self, kind: TimerKind) -> usize {
        self.timers.iter().filter(|t| t.kind == kind).count()
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    pub fn clear(&mut self) {
        self.timers.clear();
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.iter().map(|t| t.deadline).min()
    }

    /// Removes and returns the earliest timer due at `now`.
    ///
    /// Ties fire in scheduling order. A repeating timer stays queued with its
    /// next beat; beats that are already in the past collapse into one.
    pub fn pop_due(&mut self, now: Instant) -> Option<Fired> {
        let (pos, _) = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.deadline <= now)
            .min_by_key(|(_, t)| (t.deadline, t.id.0))?;

        let timer = &mut self.timers[pos];
        let fired = Fired { id: timer.id, kind: timer.kind, at: timer.deadline };

        match timer.repeat {
            Some(interval) => {
                let mut next = timer.deadline + interval;
                if next <= now {
                    next = now + interval;
                }
                timer.deadline = next;
            }
            None => {
                self.timers.remove(pos);
            }
        }

        Some(fired)
    }
}
