//! Slot occupancy for one board.

use crate::error::SlotError;
use crate::model::{ActiveSpawn, SlotId};
use crate::timers::TimerHandle;

#[derive(Clone, Debug)]
struct Occupant {
    spawn: ActiveSpawn,
    expiry: TimerHandle,
}

/// Tracks which slot hosts which spawn, together with the handle of the timer
/// that will expire it. At most one spawn per slot.
#[derive(Clone, Debug)]
pub struct SlotRegistry {
    slots: Vec<Option<Occupant>>,
}

impl SlotRegistry {
    pub fn new(size: usize) -> Self {
        Self { slots: vec![None; size] }
    }

    pub fn size(&self) -> usize {
        self.slots.len()
    }

    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn free_slots(&self) -> Vec<SlotId> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_none())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn place(&mut self, slot: SlotId, spawn: ActiveSpawn, expiry: TimerHandle) -> Result<(), SlotError> {
        let size = self.slots.len();
        let cell = self.slots.get_mut(slot).ok_or(SlotError::OutOfRange { slot, size })?;
        if cell.is_some() {
            return Err(SlotError::Occupied { slot });
        }
        debug_assert_eq!(spawn.slot, slot);
        *cell = Some(Occupant { spawn, expiry });
        Ok(())
    }

    /// Takes the spawn out of the slot. The caller owns cancelling the returned timer.
    pub fn remove(&mut self, slot: SlotId) -> Option<(ActiveSpawn, TimerHandle)> {
        self.slots
            .get_mut(slot)
            .and_then(Option::take)
            .map(|o| (o.spawn, o.expiry))
    }

    pub fn peek(&self, slot: SlotId) -> Option<&ActiveSpawn> {
        self.slots.get(slot).and_then(|s| s.as_ref()).map(|o| &o.spawn)
    }

    pub fn expiry_handle(&self, slot: SlotId) -> Option<TimerHandle> {
        self.slots.get(slot).and_then(|s| s.as_ref()).map(|o| o.expiry)
    }

    pub fn active(&self) -> impl Iterator<Item = &ActiveSpawn> + '_ {
        self.slots.iter().flatten().map(|o| &o.spawn)
    }

    /// Empties the board, returning every spawn and its expiry handle.
    pub fn drain(&mut self) -> Vec<(ActiveSpawn, TimerHandle)> {
        self.slots
            .iter_mut()
            .filter_map(Option::take)
            .map(|o| (o.spawn, o.expiry))
            .collect()
    }
}
