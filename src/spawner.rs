//! Picks which creature pops out of which hole, and for how long.

use log::{debug, warn};
use rand::Rng;
use rand::distributions::{Distribution, Standard};

use crate::catalog::Catalog;
use crate::config::SpawnTuning;
use crate::model::{ActiveSpawn, CreatureDef, Millis, Variant};
use crate::registry::SlotRegistry;
use crate::timers::{TimerKind, TimerQueue};

/// Rarity band selected by a single uniform draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Band {
    Legendary,
    Hazard,
    Shiny,
    Normal,
}

/// First matching threshold wins.
pub fn band_for(r: f64, tuning: &SpawnTuning) -> Band {
    if r < tuning.legendary_below {
        Band::Legendary
    } else if r < tuning.hazard_below {
        Band::Hazard
    } else if r < tuning.shiny_below {
        Band::Shiny
    } else {
        Band::Normal
    }
}

/// Uniform draw in `[0, 1)`.
pub(crate) fn unit<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    Standard.sample(rng)
}

fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    let idx = (unit(rng) * items.len() as f64) as usize;
    items.get(idx.min(items.len() - 1))
}

#[derive(Clone, Debug)]
pub struct Spawner {
    tuning: SpawnTuning,
}

impl Spawner {
    pub fn new(tuning: SpawnTuning) -> Self {
        Self { tuning }
    }

    pub fn tuning(&self) -> &SpawnTuning {
        &self.tuning
    }

    /// Places a new spawn on a random free slot and schedules its expiry.
    /// Returns `None` when the board is at its cap or full.
    pub fn try_spawn<R: Rng + ?Sized>(
        &self,
        now: Millis,
        catalog: &Catalog,
        registry: &mut SlotRegistry,
        timers: &mut TimerQueue,
        rng: &mut R,
    ) -> Option<ActiveSpawn> {
        if registry.occupied_count() >= self.tuning.max_active {
            return None;
        }
        let free = registry.free_slots();
        let slot = *pick(rng, &free)?;

        let (creature, variant) = self.choose(catalog, rng);
        let span = self.tuning.max_visible_ms.saturating_sub(self.tuning.min_visible_ms);
        let expires_at = now + self.tuning.min_visible_ms + (unit(rng) * span as f64) as Millis;

        let spawn = ActiveSpawn { creature, slot, variant, spawned_at: now, expires_at };
        let expiry = timers.schedule(expires_at, TimerKind::SpawnExpiry(slot));
        if let Err(e) = registry.place(slot, spawn.clone(), expiry) {
            warn!("spawn dropped: {e}");
            timers.cancel(expiry);
            return None;
        }
        debug!(
            "spawned {} ({:?}, {} pts) at slot {} until {}",
            spawn.creature.name, spawn.variant, spawn.creature.points, slot, expires_at
        );
        Some(spawn)
    }

    fn choose<R: Rng + ?Sized>(&self, catalog: &Catalog, rng: &mut R) -> (CreatureDef, Variant) {
        match band_for(unit(rng), &self.tuning) {
            Band::Legendary => match pick(rng, &catalog.legendary_pool()) {
                Some(c) => ((*c).clone(), Variant::LegendaryGlow),
                // Keeps the legendary glow and the regular creature's points.
                None => (regular(catalog, rng), Variant::LegendaryGlow),
            },
            Band::Hazard => (catalog.hazard().clone(), Variant::Hazard),
            Band::Shiny => {
                let mut c = regular(catalog, rng);
                if !c.shiny_eligible {
                    return (c, Variant::Normal);
                }
                c.points *= 2;
                (c, Variant::Shiny)
            }
            Band::Normal => (regular(catalog, rng), Variant::Normal),
        }
    }
}

fn regular<R: Rng + ?Sized>(catalog: &Catalog, rng: &mut R) -> CreatureDef {
    let pool = catalog.regular_pool();
    match pick(rng, &pool) {
        Some(c) => (*c).clone(),
        // Catalog::new guarantees a non-empty regular pool.
        None => catalog.hazard().clone(),
    }
}
