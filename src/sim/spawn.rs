//! Spawn table for the obstacle/collectible stream
//!
//! One uniform draw from [1,100] picks the kind; the ranges partition the
//! interval with no gaps or overlaps. Horizontal placement lands a bounded
//! random distance past the right viewport edge so consecutive spawns never
//! overlap and never appear adjacent to the visible edge.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::EntityKind;
use crate::tuning::Tuning;

/// Instruction to materialize one entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnDecision {
    pub id: u32,
    pub kind: EntityKind,
    pub pos: Vec2,
    pub scale: f32,
    pub flip_x: bool,
}

/// Uniform draws backing one spawn decision
///
/// Kept separate from the RNG so a scripted draw sequence reproduces an
/// exact spawn sequence in tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnDraw {
    /// Category roll, 1..=100 inclusive
    pub roll: u8,
    /// Horizontal offset beyond the right viewport edge
    pub distance: f32,
    /// Index into the airborne lane heights
    pub lane: usize,
}

impl SpawnDraw {
    /// Sample a draw from the injected source
    pub fn sample(rng: &mut impl Rng, tuning: &Tuning) -> Self {
        Self {
            roll: rng.random_range(1..=100),
            distance: rng.random_range(tuning.distance_min..=tuning.distance_max) as f32,
            lane: rng.random_range(0..tuning.lane_heights.len()),
        }
    }
}

/// Map a draw to a concrete spawn. Pure: same draw, same decision.
///
/// An out-of-range roll is a programming error, not data, and fails fast.
pub fn decide_spawn(
    id: u32,
    draw: SpawnDraw,
    viewport_width: f32,
    ground_y: f32,
    tuning: &Tuning,
) -> SpawnDecision {
    assert!(
        (1..=100).contains(&draw.roll),
        "category roll out of range: {}",
        draw.roll
    );

    let x = viewport_width + draw.distance;
    let lane_y = ground_y - tuning.lane_heights[draw.lane];

    let (kind, scale, y, flip_x) = match draw.roll {
        100 => (EntityKind::Secret, 0.1, lane_y, false),
        91..=99 => (EntityKind::Missile, 1.0, lane_y, true),
        51..=90 => (EntityKind::TntBarrel, 2.0, ground_y, false),
        _ => (EntityKind::SmallBarrel, 2.0, ground_y, false),
    };

    SpawnDecision {
        id,
        kind,
        pos: Vec2::new(x, y),
        scale,
        flip_x,
    }
}
