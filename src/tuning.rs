//! Data-driven game balance
//!
//! Every gameplay constant lives in one serializable record so the host can
//! rebalance from JSON without a rebuild. `Default` carries the shipped
//! values.

use serde::{Deserialize, Serialize};

/// Gameplay balance values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// World scroll speed at run start; also the floor after any reset
    pub base_speed: f32,
    /// Ceiling for the difficulty ramp
    pub max_speed: f32,
    /// Speed gained per millisecond while running (0 = flat difficulty)
    pub speed_ramp: f32,

    /// Multiplier on `delta_ms * speed` when feeding the spawn timer
    pub spawn_scale: f32,
    /// Spawn-timer level that triggers the next spawn
    pub spawn_threshold: f32,

    /// Warm-up width gained per reference tick (60 Hz)
    pub warmup_step: f32,
    /// Visible ground width the warm-up ramp grows toward
    pub ground_width: f32,
    /// Hard cap on the warm-up target
    pub warmup_cap: f32,

    /// Minimum horizontal spawn offset beyond the right viewport edge
    pub distance_min: u32,
    /// Maximum horizontal spawn offset (inclusive)
    pub distance_max: u32,
    /// Heights above ground for airborne spawns
    pub lane_heights: [f32; 3],
    /// Ground baseline, measured up from the bottom viewport edge
    pub ground_margin: f32,
    /// Where recycled decorations reappear beyond the right viewport edge
    pub reposition_gap: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            base_speed: 10.0,
            max_speed: 16.0,
            speed_ramp: 0.00005,

            spawn_scale: 0.08,
            spawn_threshold: 1500.0,

            warmup_step: 34.0,
            ground_width: 1000.0,
            warmup_cap: 1000.0,

            distance_min: 600,
            distance_max: 900,
            lane_heights: [20.0, 50.0, 80.0],
            ground_margin: 64.0,
            reposition_gap: 30.0,
        }
    }
}

impl Tuning {
    /// Width the warm-up ramp completes at
    #[inline]
    pub fn warmup_target(&self) -> f32 {
        self.ground_width.min(self.warmup_cap)
    }

    /// Ground baseline in world coordinates (y grows downward)
    #[inline]
    pub fn ground_y(&self, viewport_height: f32) -> f32 {
        viewport_height - self.ground_margin
    }

    /// Load a balance record from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warmup_target_caps_ground_width() {
        let mut tuning = Tuning::default();
        assert_eq!(tuning.warmup_target(), 1000.0);

        tuning.ground_width = 1400.0;
        assert_eq!(tuning.warmup_target(), tuning.warmup_cap);

        tuning.ground_width = 700.0;
        assert_eq!(tuning.warmup_target(), 700.0);
    }

    #[test]
    fn test_from_json_partial_overrides() {
        let tuning = Tuning::from_json(r#"{ "spawn_threshold": 900.0 }"#).unwrap();
        assert_eq!(tuning.spawn_threshold, 900.0);
        // Everything not named keeps the shipped value
        assert_eq!(tuning.spawn_scale, Tuning::default().spawn_scale);
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        assert!(Tuning::from_json("not json").is_err());
    }
}
