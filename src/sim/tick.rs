//! Per-frame simulation step
//!
//! The host calls [`tick`] once per rendered frame. The simulator mutates its
//! own counters and returns the decisions the host must apply; it never
//! touches the host's entity collection directly.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::spawn::{SpawnDecision, SpawnDraw, decide_spawn};
use super::state::{EntityKind, RunPhase, RunState};
use crate::consts::REFERENCE_TICK_MS;
use crate::score;

/// Host events for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Wall-clock time since the previous frame, milliseconds
    pub delta_ms: f32,
    pub viewport_width: f32,
    pub viewport_height: f32,
    /// Start trigger engaged; begins (or restarts) the warm-up
    pub start: bool,
    /// The player body intersected an obstacle this frame
    pub obstacle_hit: bool,
    /// A collectible was touched this frame
    pub collectible_hit: Option<CollectibleHit>,
}

/// Collectible contact reported by the host's collision layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollectibleHit {
    pub id: u32,
    /// Last world x of the collectible body; the rescue sprite lands here
    pub x: f32,
}

/// Command for the host to apply after a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Decision {
    /// Materialize a new entity
    Spawn(SpawnDecision),
    /// Destroy a tracked entity
    Remove { id: u32 },
    /// Teleport a decoration back past the right viewport edge
    Reposition { id: u32, new_x: f32 },
    /// Score changed; refresh the display
    ScoreUpdate { value: u32 },
    /// Warm-up ramp finished: zero the forward velocity, unlock controls
    WarmupComplete,
    /// Run over: freeze physics, show the failure overlay
    RunFailed { high_label: String },
}

/// Advance the simulation by one frame
pub fn tick(state: &mut RunState, input: &TickInput, rng: &mut impl Rng) -> Vec<Decision> {
    assert!(
        input.delta_ms >= 0.0,
        "negative frame delta: {}",
        input.delta_ms
    );

    let mut decisions = Vec::new();
    state.time_ticks += 1;

    if input.start {
        state.begin_warmup();
    }

    // Host collision callbacks, translated onto the owned record. A failure
    // moves the phase off Running, so a collectible reported on the same
    // frame no longer scores.
    if input.obstacle_hit && state.phase == RunPhase::Running {
        let high = state.fail_run();
        decisions.push(Decision::RunFailed {
            high_label: score::high_label(high),
        });
    }

    if let Some(hit) = input.collectible_hit {
        if state.phase == RunPhase::Running {
            let value = state.collect();
            decisions.push(Decision::Remove { id: hit.id });
            let id = state.next_entity_id();
            decisions.push(Decision::Spawn(SpawnDecision {
                id,
                kind: EntityKind::Rescue,
                pos: Vec2::new(hit.x, state.tuning.ground_y(input.viewport_height)),
                scale: 1.0,
                flip_x: false,
            }));
            decisions.push(Decision::ScoreUpdate { value });
        }
    }

    match state.phase {
        RunPhase::WarmingUp => {
            // Ramp step is calibrated per 60 Hz tick; rescale to this frame
            let step = state.tuning.warmup_step * (input.delta_ms / REFERENCE_TICK_MS);
            if state.advance_warmup(step) {
                decisions.push(Decision::WarmupComplete);
            }
        }
        RunPhase::Running => {
            // Difficulty ramp: monotonic, clamped, reset only by failure
            state.speed = (state.speed + state.tuning.speed_ramp * input.delta_ms)
                .min(state.tuning.max_speed);

            state.spawn_timer += input.delta_ms * state.speed * state.tuning.spawn_scale;
            if state.spawn_timer >= state.tuning.spawn_threshold {
                let draw = SpawnDraw::sample(rng, &state.tuning);
                let id = state.next_entity_id();
                let ground_y = state.tuning.ground_y(input.viewport_height);
                let spawn = decide_spawn(id, draw, input.viewport_width, ground_y, &state.tuning);
                log::debug!("tick {}: spawn {:?} at {}", state.time_ticks, spawn.kind, spawn.pos);
                decisions.push(Decision::Spawn(spawn));
                // At most one spawn per tick; the timer restarts from zero
                state.spawn_timer = 0.0;
            }
        }
        RunPhase::Idle | RunPhase::Failed => {}
    }

    decisions
}
