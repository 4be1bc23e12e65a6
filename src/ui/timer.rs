//! Cancellable one-shot timers driven by the UI tick.
//!
//! Nothing here spawns threads or sleeps. Drivers schedule keys against a
//! [`Clock`], and the event loop calls [`TimerQueue::drain_due`] on every
//! tick to collect the keys whose deadlines have passed.

use parking_lot::Mutex;
use std::fmt::Debug;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

pub type SharedClock = Arc<dyn Clock>;

/// Wall clock backed by [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<Instant>>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Arc::new(Mutex::new(Instant::now())),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock();
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock()
    }
}

#[derive(Debug)]
struct TimerEntry<K> {
    key: K,
    deadline: Instant,
    seq: u64,
}

/// Pending one-shot timers identified by key.
///
/// A key is scheduled at most once; rescheduling replaces the previous
/// deadline. Due keys are returned in deadline order, ties broken by the
/// order they were scheduled in.
#[derive(Debug)]
pub struct TimerQueue<K> {
    entries: Vec<TimerEntry<K>>,
    next_seq: u64,
}

impl<K> Default for TimerQueue<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_seq: 0,
        }
    }
}

impl<K: Copy + PartialEq + Debug> TimerQueue<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, key: K, now: Instant, delay: Duration) {
        self.entries.retain(|entry| entry.key != key);
        let seq = self.next_seq;
        self.next_seq += 1;
        tracing::trace!(?key, delay_ms = delay.as_millis() as u64, "Timer scheduled");
        self.entries.push(TimerEntry {
            key,
            deadline: now + delay,
            seq,
        });
    }

    /// Cancel one key. Returns whether it was pending.
    pub fn cancel(&mut self, key: K) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.key != key);
        before != self.entries.len()
    }

    /// Cancel everything. Returns how many timers were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let dropped = self.entries.len();
        self.entries.clear();
        dropped
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Remove and return every key whose deadline is at or before `now`.
    pub fn drain_due(&mut self, now: Instant) -> Vec<K> {
        let (mut due, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.entries)
            .into_iter()
            .partition(|entry| entry.deadline <= now);
        self.entries = pending;
        due.sort_by_key(|entry| (entry.deadline, entry.seq));
        due.into_iter()
            .map(|entry| {
                tracing::trace!(key = ?entry.key, "Timer fired");
                entry.key
            })
            .collect()
    }
}
