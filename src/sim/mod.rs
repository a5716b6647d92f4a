//! Deterministic simulation module
//!
//! All gameplay decisions come from here. This module must be pure and
//! deterministic:
//! - One entry point per frame
//! - Seeded RNG only, injected by the caller
//! - No rendering or platform dependencies
//!
//! The host owns the entity collection; the simulator owns the counters and
//! hands back decisions for the host to apply.

pub mod recycle;
pub mod spawn;
pub mod state;
pub mod tick;

pub use recycle::recycle;
pub use spawn::{SpawnDecision, SpawnDraw, decide_spawn};
pub use state::{EntityCategory, EntityKind, RunPhase, RunState, TrackedEntity};
pub use tick::{CollectibleHit, Decision, TickInput, tick};
