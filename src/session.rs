//! Session controller: lifecycle, timers and the glue between the systems and
//! the host ports.

use log::{debug, info, warn};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

use crate::catalog::Catalog;
use crate::config::{BANNER_MS, Difficulty, GameConfig};
use crate::input;
use crate::model::{ActiveSpawn, Millis, Outcome, SessionState, SlotId, Variant};
use crate::registry::SlotRegistry;
use crate::scoring::{ScoreEngine, ScoreEvent, ScoreRules};
use crate::sinks::{AudioCue, Host};
use crate::spawner::Spawner;
use crate::timers::{TimerHandle, TimerKind, TimerQueue};

/// One game board and its running session. All mutation happens through
/// [`Game::start`], [`Game::set_difficulty`], [`Game::advance`] and
/// [`Game::activate`]; each runs to completion before the next.
pub struct Game<H: Host, R: Rng = Pcg64Mcg> {
    config: GameConfig,
    catalog: Catalog,
    spawner: Spawner,
    scoring: ScoreEngine,
    registry: SlotRegistry,
    timers: TimerQueue,
    state: SessionState,
    difficulty: Difficulty,
    high_score: u64,
    clock: Millis,
    cadence: Option<TimerHandle>,
    combo_decay: Option<TimerHandle>,
    host: H,
    rng: R,
}

impl<H: Host> Game<H, Pcg64Mcg> {
    pub fn with_seed(config: GameConfig, catalog: Catalog, host: H, seed: u64) -> Self {
        Self::new(config, catalog, host, Pcg64Mcg::seed_from_u64(seed))
    }
}

impl<H: Host, R: Rng> Game<H, R> {
    /// Reads the stored high score and paints the idle board.
    pub fn new(config: GameConfig, catalog: Catalog, mut host: H, rng: R) -> Self {
        let high_score = host.load_high_score().unwrap_or_else(|e| {
            warn!("high score unavailable, starting from 0: {e}");
            0
        });
        let difficulty = config.difficulty;
        host.show_high_score(high_score);
        host.show_score(0);
        host.show_combo(1);
        Self {
            spawner: Spawner::new(config.spawn),
            scoring: ScoreEngine::new(ScoreRules::from(&config)),
            registry: SlotRegistry::new(config.board_slots),
            timers: TimerQueue::new(),
            state: SessionState::new(difficulty.cadence_ms()),
            difficulty,
            high_score,
            clock: 0,
            cadence: None,
            combo_decay: None,
            config,
            catalog,
            host,
            rng,
        }
    }

    pub fn start(&mut self, now: Millis) {
        if self.state.is_running {
            return;
        }
        self.clock = self.clock.max(now);
        self.clear_board();
        self.timers.clear();
        self.cadence = None;
        self.combo_decay = None;

        self.state.reset();
        self.state.is_running = true;
        self.host.hide_game_over();
        self.host.show_score(0);
        self.host.show_combo(1);
        self.play(AudioCue::Music);

        let at = self.clock + self.state.cadence_ms;
        self.cadence = Some(self.timers.schedule(at, TimerKind::Cadence));
        info!("session started ({}, every {} ms)", self.difficulty, self.state.cadence_ms);
    }

    /// Changes spawn cadence. A running session swaps its cadence timer; spawns
    /// already on the board keep their own expiry.
    pub fn set_difficulty(&mut self, level: Difficulty, now: Millis) {
        self.clock = self.clock.max(now);
        self.difficulty = level;
        self.state.cadence_ms = level.cadence_ms();
        if self.state.is_running {
            if let Some(old) = self.cadence.take() {
                self.timers.cancel(old);
            }
            let at = self.clock + self.state.cadence_ms;
            self.cadence = Some(self.timers.schedule(at, TimerKind::Cadence));
        }
        info!("difficulty set to {level} ({} ms)", self.state.cadence_ms);
    }

    /// Fires every timer due at or before `now`, in deadline order.
    pub fn advance(&mut self, now: Millis) {
        while let Some((handle, kind)) = self.timers.pop_due(now) {
            self.clock = self.clock.max(handle.deadline());
            match kind {
                TimerKind::Cadence => self.on_cadence(handle),
                TimerKind::SpawnExpiry(slot) => self.on_expiry(slot, handle),
                TimerKind::ComboDecay => self.on_combo_decay(handle),
            }
        }
        self.clock = self.clock.max(now);
    }

    /// Handles a click or tap on `slot`. Timers due by `now` fire first, so a
    /// spawn that has already timed out cannot be caught.
    pub fn activate(&mut self, slot: SlotId, now: Millis) -> Outcome {
        self.advance(now);
        let outcome = input::resolve(slot, self.state.is_running, &mut self.registry, &mut self.timers);
        match &outcome {
            Outcome::Ignored => {}
            Outcome::HazardHit => {
                self.play(AudioCue::Throw);
                self.host.hide_spawn(slot);
                self.on_hazard_hit();
            }
            Outcome::Catch { creature, variant, slot } => {
                self.play(AudioCue::Throw);
                self.host.hide_spawn(*slot);
                self.play(AudioCue::Catch);
                let events = self.scoring.apply_catch(&mut self.state, creature, *variant, *slot);
                self.emit(events);
                self.restart_combo_decay();
            }
        }
        outcome
    }

    /// Ends the session: every timer is cancelled and the board is cleared
    /// before the final score is published.
    pub fn on_hazard_hit(&mut self) {
        if let Some(h) = self.cadence.take() {
            self.timers.cancel(h);
        }
        if let Some(h) = self.combo_decay.take() {
            self.timers.cancel(h);
        }
        self.state.is_running = false;
        self.host.stop(&AudioCue::Music);
        self.play(AudioCue::GameOver);
        self.clear_board();

        let score = self.state.score;
        if score > self.high_score {
            self.high_score = score;
            if let Err(e) = self.host.save_high_score(score) {
                warn!("could not persist high score {score}: {e}");
            }
            self.host.show_high_score(score);
        }
        self.host.show_game_over(score);
        info!("game over with {score} (best {})", self.high_score);
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running
    }

    pub fn high_score(&self) -> u64 {
        self.high_score
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn clock(&self) -> Millis {
        self.clock
    }

    pub fn active_spawns(&self) -> impl Iterator<Item = &ActiveSpawn> + '_ {
        self.registry.active()
    }

    pub fn spawn_at(&self, slot: SlotId) -> Option<&ActiveSpawn> {
        self.registry.peek(slot)
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    fn on_cadence(&mut self, handle: TimerHandle) {
        if self.cadence != Some(handle) || !self.state.is_running {
            return;
        }
        let next = handle.deadline() + self.state.cadence_ms;
        self.cadence = Some(self.timers.schedule(next, TimerKind::Cadence));

        let Some(spawn) = self.spawner.try_spawn(
            self.clock,
            &self.catalog,
            &mut self.registry,
            &mut self.timers,
            &mut self.rng,
        ) else {
            return;
        };
        self.host.show_spawn(spawn.slot, &spawn.creature.image, spawn.variant.visual_tag());
        if !spawn.creature.cry.is_empty() {
            self.play(AudioCue::Cry(spawn.creature.cry.clone()));
        }
        match spawn.variant {
            Variant::Shiny => self.host.show_notification("Shiny Pokémon!", BANNER_MS),
            Variant::LegendaryGlow => self.host.show_notification("Legendary Pokémon!", BANNER_MS),
            Variant::Normal | Variant::Hazard => {}
        }
    }

    fn on_expiry(&mut self, slot: SlotId, handle: TimerHandle) {
        if self.registry.expiry_handle(slot) != Some(handle) {
            return;
        }
        let Some((spawn, _)) = self.registry.remove(slot) else {
            return;
        };
        self.host.hide_spawn(slot);
        debug!("{} escaped from slot {slot}", spawn.creature.name);
        if !spawn.variant.is_hazard() {
            self.reset_combo();
        }
    }

    fn on_combo_decay(&mut self, handle: TimerHandle) {
        if self.combo_decay != Some(handle) {
            return;
        }
        self.combo_decay = None;
        self.reset_combo();
    }

    fn reset_combo(&mut self) {
        if let Some(h) = self.combo_decay.take() {
            self.timers.cancel(h);
        }
        let event = self.scoring.reset_combo(&mut self.state);
        self.emit(vec![event]);
    }

    fn restart_combo_decay(&mut self) {
        if let Some(h) = self.combo_decay.take() {
            self.timers.cancel(h);
        }
        let at = self.clock + self.config.combo_decay_ms;
        self.combo_decay = Some(self.timers.schedule(at, TimerKind::ComboDecay));
    }

    fn clear_board(&mut self) {
        for (spawn, expiry) in self.registry.drain() {
            self.timers.cancel(expiry);
            self.host.hide_spawn(spawn.slot);
        }
    }

    fn emit(&mut self, events: Vec<ScoreEvent>) {
        for event in events {
            match event {
                ScoreEvent::ScoreChanged(score) => self.host.show_score(score),
                ScoreEvent::ComboChanged(combo) => self.host.show_combo(combo),
                ScoreEvent::CatchMessage { slot, text, duration_ms } => {
                    self.host.show_catch_message(slot, &text, duration_ms)
                }
                ScoreEvent::Notification { text, duration_ms } => {
                    self.host.show_notification(&text, duration_ms)
                }
            }
        }
    }

    fn play(&mut self, cue: AudioCue) {
        if let Err(e) = self.host.play(&cue) {
            warn!("audio {cue:?} failed: {e}");
        }
    }
}
