//! Run state and core simulation types
//!
//! All state that must be replayed for determinism lives here.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Current phase of the run lifecycle
///
/// Linear and resettable: [`RunState::begin_warmup`] re-enters `WarmingUp`
/// from any phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunPhase {
    /// Waiting for the start trigger
    Idle,
    /// Ground ramp growing; controls still locked
    WarmingUp,
    /// Active gameplay; the spawn timer accumulates
    Running,
    /// Run ended by an obstacle hit, awaiting restart
    Failed,
}

/// What a spawned entity is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    /// Collectible barrel; converts to a rescue on touch
    SmallBarrel,
    /// Ground obstacle
    TntBarrel,
    /// Airborne obstacle, flies leftward
    Missile,
    /// Rare airborne decoration
    Secret,
    /// Decorative sprite left behind by a collected barrel
    Rescue,
}

/// How the host treats an entity on contact and when it leaves the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityCategory {
    /// Contact ends the run
    Obstacle,
    /// Contact scores a point
    Collectible,
    /// No gameplay contact; recycled instead of destroyed off-screen
    Decoration,
}

impl EntityKind {
    pub fn category(self) -> EntityCategory {
        match self {
            EntityKind::SmallBarrel => EntityCategory::Collectible,
            EntityKind::TntBarrel | EntityKind::Missile => EntityCategory::Obstacle,
            EntityKind::Secret | EntityKind::Rescue => EntityCategory::Decoration,
        }
    }
}

/// Host-side entity snapshot, handed back for the recycle pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedEntity {
    pub id: u32,
    pub kind: EntityKind,
    pub pos: Vec2,
    /// Sprite width in world units; the off-screen test needs the right edge
    pub width: f32,
}

impl TrackedEntity {
    #[inline]
    pub fn right_edge(&self) -> f32 {
        self.pos.x + self.width
    }
}

/// Complete run state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Current phase
    pub phase: RunPhase,
    /// World scroll speed; monotonically non-decreasing while running
    pub speed: f32,
    /// Warm-up ramp progress toward [`Tuning::warmup_target`]
    pub warmup_width: f32,
    /// Accumulator gating the next spawn
    pub spawn_timer: f32,
    /// Score for the current run
    pub score: u32,
    /// Session-best score, folded in on failure
    pub high_score: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Balance values for this session
    pub tuning: Tuning,
    /// Next entity ID
    next_id: u32,
}

impl RunState {
    /// Create a run state with the given seed and shipped balance values
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            phase: RunPhase::Idle,
            speed: tuning.base_speed,
            warmup_width: 0.0,
            spawn_timer: 0.0,
            score: 0,
            high_score: 0,
            time_ticks: 0,
            tuning,
            next_id: 1,
        }
    }

    /// Seeded RNG for this run's spawn draws
    pub fn rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Enter the warm-up ramp. Resettable from any phase; clears the previous
    /// run's score and pins the speed floor.
    pub fn begin_warmup(&mut self) {
        self.phase = RunPhase::WarmingUp;
        self.warmup_width = 0.0;
        self.spawn_timer = 0.0;
        self.score = 0;
        self.speed = self.speed.max(self.tuning.base_speed);
        log::info!("warm-up started (seed {})", self.seed);
    }

    /// Grow the ground ramp by `step`. Pins at the target without overshoot
    /// and unlocks the run; returns true on the tick the ramp completes.
    pub fn advance_warmup(&mut self, step: f32) -> bool {
        if self.phase != RunPhase::WarmingUp {
            return false;
        }
        self.warmup_width += step;
        let target = self.tuning.warmup_target();
        if self.warmup_width >= target {
            self.warmup_width = target;
            self.phase = RunPhase::Running;
            log::info!("warm-up complete, run unlocked");
            return true;
        }
        false
    }

    /// Obstacle hit: fatal to the run, never to the process. Resets speed to
    /// the base floor, folds the score into the session high, and returns
    /// the new high.
    pub fn fail_run(&mut self) -> u32 {
        self.phase = RunPhase::Failed;
        self.speed = self.tuning.base_speed;
        self.spawn_timer = 0.0;
        self.high_score = self.high_score.max(self.score);
        log::info!(
            "run failed at score {} (high {})",
            self.score,
            self.high_score
        );
        self.high_score
    }

    /// Collectible touched: one point. Returns the new score.
    pub fn collect(&mut self) -> u32 {
        self.score += 1;
        self.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle_at_base_speed() {
        let state = RunState::new(7);
        assert_eq!(state.phase, RunPhase::Idle);
        assert_eq!(state.speed, state.tuning.base_speed);
        assert_eq!(state.spawn_timer, 0.0);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_warmup_is_monotonic_and_idempotent_at_cap() {
        let mut state = RunState::new(7);
        state.begin_warmup();

        let mut last = state.warmup_width;
        while state.phase == RunPhase::WarmingUp {
            state.advance_warmup(34.0);
            assert!(state.warmup_width >= last);
            last = state.warmup_width;
        }

        let target = state.tuning.warmup_target();
        assert_eq!(state.warmup_width, target);
        assert_eq!(state.phase, RunPhase::Running);

        // Further calls leave the ramp untouched and the run unlocked
        assert!(!state.advance_warmup(34.0));
        assert_eq!(state.warmup_width, target);
        assert_eq!(state.phase, RunPhase::Running);
    }

    #[test]
    fn test_warmup_completion_signals_once() {
        let mut state = RunState::new(7);
        state.begin_warmup();

        let mut completions = 0;
        for _ in 0..100 {
            if state.advance_warmup(34.0) {
                completions += 1;
            }
        }
        assert_eq!(completions, 1);
    }

    #[test]
    fn test_fail_run_resets_and_merges_high() {
        let mut state = RunState::new(7);
        state.begin_warmup();
        while state.phase == RunPhase::WarmingUp {
            state.advance_warmup(34.0);
        }

        state.speed = 14.0;
        state.spawn_timer = 800.0;
        for _ in 0..42 {
            state.collect();
        }
        state.high_score = 10;

        let high = state.fail_run();
        assert_eq!(high, 42);
        assert_eq!(state.phase, RunPhase::Failed);
        assert_eq!(state.speed, state.tuning.base_speed);
        assert_eq!(state.spawn_timer, 0.0);
        // Failure overlay still shows the finished run's score
        assert_eq!(state.score, 42);

        // A worse follow-up run keeps the session high
        state.begin_warmup();
        assert_eq!(state.score, 0);
        state.collect();
        assert_eq!(state.fail_run(), 42);
    }

    #[test]
    fn test_begin_warmup_resets_from_any_phase() {
        let mut state = RunState::new(7);
        state.begin_warmup();
        while state.phase == RunPhase::WarmingUp {
            state.advance_warmup(34.0);
        }
        state.fail_run();

        state.begin_warmup();
        assert_eq!(state.phase, RunPhase::WarmingUp);
        assert_eq!(state.warmup_width, 0.0);
        assert!(state.speed >= state.tuning.base_speed);
    }

    #[test]
    fn test_entity_categories() {
        assert_eq!(
            EntityKind::SmallBarrel.category(),
            EntityCategory::Collectible
        );
        assert_eq!(EntityKind::TntBarrel.category(), EntityCategory::Obstacle);
        assert_eq!(EntityKind::Missile.category(), EntityCategory::Obstacle);
        assert_eq!(EntityKind::Secret.category(), EntityCategory::Decoration);
        assert_eq!(EntityKind::Rescue.category(), EntityCategory::Decoration);
    }
}
