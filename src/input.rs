//! Turns a raw "slot activated" event into an [`Outcome`].

use crate::model::{Outcome, SlotId};
use crate::registry::SlotRegistry;
use crate::timers::TimerQueue;

/// Consumes the spawn in `slot`, if any. A consumed spawn's expiry timer is
/// cancelled, so a second activation of the same slot resolves to `Ignored`.
pub fn resolve(slot: SlotId, running: bool, registry: &mut SlotRegistry, timers: &mut TimerQueue) -> Outcome {
    if !running {
        return Outcome::Ignored;
    }
    let Some((spawn, expiry)) = registry.remove(slot) else {
        return Outcome::Ignored;
    };
    timers.cancel(expiry);
    if spawn.variant.is_hazard() {
        Outcome::HazardHit
    } else {
        Outcome::Catch { creature: spawn.creature, variant: spawn.variant, slot }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::model::{ActiveSpawn, Variant};
    use crate::timers::TimerKind;

    fn board_with(variant: Variant) -> (SlotRegistry, TimerQueue) {
        let cat = Catalog::standard();
        let creature = if variant.is_hazard() { cat.hazard().clone() } else { cat.regular_pool()[2].clone() };
        let mut reg = SlotRegistry::new(9);
        let mut timers = TimerQueue::new();
        let h = timers.schedule(1200, TimerKind::SpawnExpiry(6));
        let spawn = ActiveSpawn { creature, slot: 6, variant, spawned_at: 0, expires_at: 1200 };
        reg.place(6, spawn, h).unwrap();
        (reg, timers)
    }

    #[test]
    fn catch_consumes_once() {
        let (mut reg, mut timers) = board_with(Variant::Normal);
        match resolve(6, true, &mut reg, &mut timers) {
            Outcome::Catch { creature, variant, slot } => {
                assert_eq!(creature.name, "Charmander");
                assert_eq!(variant, Variant::Normal);
                assert_eq!(slot, 6);
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(timers.is_empty());
        assert_eq!(resolve(6, true, &mut reg, &mut timers), Outcome::Ignored);
    }

    #[test]
    fn hazard_and_ignored_cases() {
        let (mut reg, mut timers) = board_with(Variant::Hazard);
        assert_eq!(resolve(6, false, &mut reg, &mut timers), Outcome::Ignored);
        assert_eq!(reg.occupied_count(), 1);
        assert_eq!(resolve(0, true, &mut reg, &mut timers), Outcome::Ignored);
        assert_eq!(resolve(99, true, &mut reg, &mut timers), Outcome::Ignored);
        assert_eq!(resolve(6, true, &mut reg, &mut timers), Outcome::HazardHit);
        assert_eq!(reg.occupied_count(), 0);
    }
}
