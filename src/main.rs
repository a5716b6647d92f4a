//! Monke Run demo driver
//!
//! Stands in for the rendering/physics host: owns the entity collection,
//! steps the simulator at a 60 Hz cadence, applies the decisions it gets
//! back, and logs the run. Collisions are scripted (every barrel that drifts
//! into the player column counts as touched, and a crash is injected near
//! the end) so both the scoring and the failure paths show up in the log.

use glam::Vec2;
use monke_run::consts::REFERENCE_TICK_MS;
use monke_run::sim::{
    CollectibleHit, Decision, EntityKind, RunState, TickInput, TrackedEntity, recycle, tick,
};
use monke_run::{format_score, high_label};

const VIEWPORT_W: f32 = 800.0;
const VIEWPORT_H: f32 = 600.0;
/// Player column; anything crossing it is "touched" in this scripted host
const PLAYER_X: f32 = 120.0;
/// Simulated frames before the scripted crash (30 s at 60 Hz)
const CRASH_AT_TICK: u64 = 1800;

/// Frame widths the real host would read from its sprite sheets
fn sprite_width(kind: EntityKind, scale: f32) -> f32 {
    let base = match kind {
        EntityKind::Missile => 48.0,
        EntityKind::Secret => 64.0,
        EntityKind::SmallBarrel | EntityKind::TntBarrel | EntityKind::Rescue => 32.0,
    };
    base * scale
}

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(42);
    log::info!("Monke Run demo host starting (seed {seed})");

    let mut state = RunState::new(seed);
    let mut rng = state.rng();
    let mut entities: Vec<TrackedEntity> = Vec::new();

    for tick_index in 0u64.. {
        // World scroll: the host moves its bodies by the simulator's speed
        for entity in &mut entities {
            entity.pos.x -= state.speed;
        }

        // Scripted collision layer: report the first collectible that
        // reaches the player column; obstacles "hit" only at the crash tick
        let collectible_hit = entities
            .iter()
            .find(|e| e.kind == EntityKind::SmallBarrel && e.pos.x <= PLAYER_X)
            .map(|e| CollectibleHit { id: e.id, x: e.pos.x });

        let input = TickInput {
            delta_ms: REFERENCE_TICK_MS,
            viewport_width: VIEWPORT_W,
            viewport_height: VIEWPORT_H,
            start: tick_index == 0,
            obstacle_hit: tick_index == CRASH_AT_TICK,
            collectible_hit,
        };

        let mut decisions = tick(&mut state, &input, &mut rng);
        decisions.extend(recycle(&entities, VIEWPORT_W, state.tuning.reposition_gap));

        let mut failed = false;
        for decision in decisions {
            match decision {
                Decision::Spawn(spawn) => {
                    log::info!(
                        "spawn {:?} at ({:.0}, {:.0}) scale {}",
                        spawn.kind,
                        spawn.pos.x,
                        spawn.pos.y,
                        spawn.scale
                    );
                    entities.push(TrackedEntity {
                        id: spawn.id,
                        kind: spawn.kind,
                        pos: spawn.pos,
                        width: sprite_width(spawn.kind, spawn.scale),
                    });
                }
                Decision::Remove { id } => {
                    entities.retain(|e| e.id != id);
                }
                Decision::Reposition { id, new_x } => {
                    if let Some(entity) = entities.iter_mut().find(|e| e.id == id) {
                        entity.pos = Vec2::new(new_x, entity.pos.y);
                    }
                }
                Decision::ScoreUpdate { value } => {
                    log::info!("score {}", format_score(value));
                }
                Decision::WarmupComplete => {
                    log::info!("warm-up done, controls unlocked");
                }
                Decision::RunFailed { high_label } => {
                    log::info!("run over: {high_label}");
                    failed = true;
                }
            }
        }

        if failed {
            break;
        }
    }

    log::info!(
        "final score {} / {}",
        format_score(state.score),
        high_label(state.high_score)
    );
}
