//! Per-slot formation fit report.

use crate::catalog::formations::Formation;
use crate::fit::resolution::resolve_slot;
use crate::models::player::{PositionTier, RatedPosition};
use crate::models::position::Position;
use serde::{Deserialize, Serialize};

/// Fit of one player at one formation slot. Ephemeral: recomputed on
/// every evaluation, never persisted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SlotFit {
    #[serde(rename = "name")]
    pub position: Position,
    /// 0-10, copied verbatim from the resolved rating; 0 when unsuited.
    pub rating: u8,
    pub tier: PositionTier,
    pub x: f32,
    pub y: f32,
}

/// Evaluate a player's rated positions against every slot of a formation.
///
/// Output is one `SlotFit` per formation slot, in formation order. Tier
/// and rating come verbatim from the resolved rated position (no
/// re-derivation); an unresolvable slot scores unsuited/0. Coordinates
/// are copied from the slot definition.
pub fn formation_fit(positions: &[RatedPosition], formation: &Formation) -> Vec<SlotFit> {
    formation
        .positions
        .iter()
        .map(|slot| match resolve_slot(positions, slot.position) {
            Some(rated) => SlotFit {
                position: slot.position,
                rating: rated.rating,
                tier: rated.tier,
                x: slot.x,
                y: slot.y,
            },
            None => SlotFit {
                position: slot.position,
                rating: 0,
                tier: PositionTier::Unsuited,
                x: slot.x,
                y: slot.y,
            },
        })
        .collect()
}
