//! Off-screen entity recycling
//!
//! Pure filter over host-owned entity snapshots. Obstacles and collectibles
//! that scroll past the left edge are destroyed; decorations are teleported
//! back past the right edge so the background stays continuous.

use super::state::{EntityCategory, TrackedEntity};
use super::tick::Decision;

/// Decide what to do with entities whose right edge crossed the left
/// visibility boundary. Entities still partly visible are never touched.
pub fn recycle(entities: &[TrackedEntity], viewport_width: f32, gap: f32) -> Vec<Decision> {
    entities
        .iter()
        .filter(|entity| entity.right_edge() < 0.0)
        .map(|entity| match entity.kind.category() {
            EntityCategory::Decoration => Decision::Reposition {
                id: entity.id,
                new_x: viewport_width + gap,
            },
            _ => Decision::Remove { id: entity.id },
        })
        .collect()
}
