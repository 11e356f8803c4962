//! Slot-to-rated-position resolution.

use crate::models::player::RatedPosition;
use crate::models::position::Position;

/// Find the rated position covering a formation slot.
///
/// Exact code match wins; otherwise one fallback hop collapses the slot
/// to the general vocabulary (LCB -> CB, LDM -> DM, ...). No fuzzy
/// matching. `None` means the caller scores the slot as unsuited.
pub fn resolve_slot(positions: &[RatedPosition], slot: Position) -> Option<&RatedPosition> {
    if let Some(exact) = positions.iter().find(|p| p.position == slot) {
        return Some(exact);
    }
    let fallback = slot.fallback()?;
    positions.iter().find(|p| p.position == fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::player::PositionTier;

    #[test]
    fn test_exact_match_wins_over_fallback() {
        let positions = vec![
            RatedPosition::new(Position::CB, PositionTier::Natural, 9),
            RatedPosition::new(Position::LCB, PositionTier::Alternative, 6),
        ];
        let resolved = resolve_slot(&positions, Position::LCB).unwrap();
        assert_eq!(resolved.position, Position::LCB);
        assert_eq!(resolved.rating, 6);
    }

    #[test]
    fn test_fallback_to_general_rating() {
        // DM 7/alternative covers an LDM slot via the fallback table
        let positions = vec![RatedPosition::new(Position::DM, PositionTier::Alternative, 7)];
        let resolved = resolve_slot(&positions, Position::LDM).unwrap();
        assert_eq!(resolved.position, Position::DM);
        assert_eq!(resolved.tier, PositionTier::Alternative);
        assert_eq!(resolved.rating, 7);
    }

    #[test]
    fn test_no_match_is_none() {
        let positions = vec![RatedPosition::new(Position::GK, PositionTier::Natural, 8)];
        assert!(resolve_slot(&positions, Position::CFCentral).is_none());
        assert!(resolve_slot(&[], Position::CB).is_none());
    }

    #[test]
    fn test_single_hop_only() {
        // LM falls back to LW, not further to any forward rating
        let positions = vec![RatedPosition::new(Position::CF, PositionTier::Natural, 9)];
        assert!(resolve_slot(&positions, Position::LM).is_none());
    }
}
