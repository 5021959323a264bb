//! Cancelable deferred events on a caller-driven logical clock.
//!
//! Nothing here sleeps or spawns. The owner advances the clock (from a UI
//! frame, a real timer, or a test) and receives the events that fell due.
//! Dropping or clearing the timeline discards everything still pending.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug, Clone)]
struct Scheduled<E> {
    id: TimerId,
    due: Duration,
    event: E,
}

#[derive(Debug, Clone)]
pub struct Timeline<E> {
    now: Duration,
    next_id: u64,
    pending: Vec<Scheduled<E>>,
}

impl<E> Default for Timeline<E> {
    fn default() -> Self {
        Timeline { now: Duration::ZERO, next_id: 0, pending: Vec::new() }
    }
}

impl<E> Timeline<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire `event` once `delay` has elapsed from the current clock.
    pub fn schedule(&mut self, delay: Duration, event: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(Scheduled { id, due: self.now + delay, event });
        id
    }

    /// Returns false if the timer already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|s| s.id != id);
        self.pending.len() != before
    }

    pub fn cancel_all(&mut self) {
        if !self.pending.is_empty() {
            log::debug!("cancelling {} pending timers", self.pending.len());
        }
        self.pending.clear();
    }

    /// Move the clock forward by `dt` and return due events, earliest first.
    /// Events due at the same instant come out in scheduling order.
    pub fn advance(&mut self, dt: Duration) -> Vec<E> {
        self.now += dt;
        let now = self.now;
        let (mut due, rest): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|s| s.due <= now);
        self.pending = rest;
        due.sort_by_key(|s| (s.due, s.id.0));
        due.into_iter().map(|s| s.event).collect()
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.iter().any(|s| s.id == id)
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    /// Time left until the next event, if any.
    pub fn until_next(&self) -> Option<Duration> {
        self.pending.iter().map(|s| s.due.saturating_sub(self.now)).min()
    }
}
