//! Deterministic stand-in for the host's `setTimeout` / `setInterval`.
//!
//! The queue never reads a wall clock. Callers pass `now` in, which lets the
//! controller replay a long frame as a sequence of timer callbacks, each one
//! observing its own deadline.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FiredTimer<T> {
    pub id: TimerId,
    pub deadline: Duration,
    pub task: T,
}

#[derive(Debug, Clone)]
struct Timer<T> {
    id: TimerId,
    deadline: Duration,
    period: Option<Duration>,
    seq: u64,
    task: T,
}

#[derive(Debug, Clone)]
pub struct TimerQueue<T> {
    timers: Vec<Timer<T>>,
    next_id: u64,
    next_seq: u64,
}

impl<T: Copy> TimerQueue<T> {
    pub fn new() -> Self {
        Self { timers: Vec::new(), next_id: 0, next_seq: 0 }
    }

    pub fn schedule_timeout(&mut self, now: Duration, delay: Duration, task: T) -> TimerId {
        self.push(now + delay, None, task)
    }

    pub fn schedule_interval(&mut self, now: Duration, period: Duration, task: T) -> TimerId {
        // A zero period would re-fire forever inside a single `pop_due` loop.
        let period = period.max(Duration::from_millis(1));
        self.push(now + period, Some(period), task)
    }

    /// Cancels exactly the timer behind `id`. Returns false if it was not pending.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.id != id);
        self.timers.len() != before
    }

    pub fn clear(&mut self) {
        self.timers.clear();
    }

    pub fn deadline(&self, id: TimerId) -> Option<Duration> {
        self.timers.iter().find(|t| t.id == id).map(|t| t.deadline)
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Pops the earliest timer due at `now`. Ties go to the one scheduled first.
    /// Intervals stay queued, re-armed one period after the deadline that fired.
    pub fn pop_due(&mut self, now: Duration) -> Option<FiredTimer<T>> {
        let pos = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.deadline <= now)
            .min_by_key(|(_, t)| (t.deadline, t.seq))
            .map(|(i, _)| i)?;

        let fired = FiredTimer {
            id: self.timers[pos].id,
            deadline: self.timers[pos].deadline,
            task: self.timers[pos].task,
        };

        match self.timers[pos].period {
            Some(period) => {
                let seq = self.bump_seq();
                let timer = &mut self.timers[pos];
                timer.deadline += period;
                timer.seq = seq;
            }
            None => {
                self.timers.remove(pos);
            }
        }

        Some(fired)
    }

    fn push(&mut self, deadline: Duration, period: Option<Duration>, task: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let seq = self.bump_seq();
        self.timers.push(Timer { id, deadline, period, seq, task });
        id
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }
}

impl<T: Copy> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
