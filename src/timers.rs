//! Deterministic timer queue. Every pending callback of a session (spawn
//! cadence, spawn expiry, combo decay) is an entry here with a handle that can
//! be cancelled, so a reset or game over can never be hit by a stale timer.

use std::collections::BTreeMap;

use crate::model::{Millis, SlotId};

/// Handle to a scheduled timer. Orders by deadline, then by scheduling order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle {
    at: Millis,
    id: u64,
}

impl TimerHandle {
    pub fn deadline(&self) -> Millis {
        self.at
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerKind {
    Cadence,
    SpawnExpiry(SlotId),
    ComboDecay,
}

#[derive(Debug, Default)]
pub struct TimerQueue {
    pending: BTreeMap<TimerHandle, TimerKind>,
    next_id: u64,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, at: Millis, kind: TimerKind) -> TimerHandle {
        let handle = TimerHandle { at, id: self.next_id };
        self.next_id += 1;
        self.pending.insert(handle, kind);
        handle
    }

    /// Returns false when the timer already fired or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        self.pending.remove(&handle).is_some()
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.pending.contains_key(&handle)
    }

    /// Removes and returns the earliest timer due at or before `now`.
    pub fn pop_due(&mut self, now: Millis) -> Option<(TimerHandle, TimerKind)> {
        let (&handle, _) = self.pending.first_key_value()?;
        if handle.at > now {
            return None;
        }
        self.pending.remove(&handle).map(|kind| (handle, kind))
    }

    pub fn next_deadline(&self) -> Option<Millis> {
        self.pending.keys().next().map(|h| h.at)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_in_deadline_order_then_fifo() {
        let mut q = TimerQueue::new();
        q.schedule(300, TimerKind::ComboDecay);
        q.schedule(100, TimerKind::SpawnExpiry(4));
        q.schedule(100, TimerKind::Cadence);
        assert_eq!(q.pop_due(99), None);
        assert_eq!(q.pop_due(500).map(|(_, k)| k), Some(TimerKind::SpawnExpiry(4)));
        assert_eq!(q.pop_due(500).map(|(_, k)| k), Some(TimerKind::Cadence));
        assert_eq!(q.pop_due(299), None);
        assert_eq!(q.pop_due(300).map(|(_, k)| k), Some(TimerKind::ComboDecay));
        assert!(q.is_empty());
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut q = TimerQueue::new();
        let h = q.schedule(50, TimerKind::ComboDecay);
        assert!(q.is_pending(h));
        assert!(q.cancel(h));
        assert!(!q.cancel(h));
        assert_eq!(q.pop_due(1_000), None);
        assert_eq!(q.next_deadline(), None);
    }
}
