//! Overall formation fit: weighted aggregation, star banding, ranking.

use crate::catalog::formations::{Formation, FormationCatalog};
use crate::fit::formation::{formation_fit, SlotFit};
use crate::models::player::RatedPosition;
use serde::{Deserialize, Serialize};

/// Aggregate a per-slot fit report into a 0-100 percentage.
///
/// Each slot contributes `rating x tier_weight` against a ceiling of
/// `10 x tier_weight`; the ratio is rounded to the nearest whole
/// percent. An empty report scores 0.
pub fn overall_fit_from_slots(slots: &[SlotFit]) -> u8 {
    let mut achieved: u32 = 0;
    let mut ceiling: u32 = 0;
    for slot in slots {
        let weight = slot.tier.weight();
        achieved += u32::from(slot.rating) * weight;
        ceiling += 10 * weight;
    }
    if ceiling == 0 {
        return 0;
    }
    ((achieved as f64 / ceiling as f64) * 100.0).round() as u8
}

/// Overall fit of a player's rated positions in one formation.
pub fn formation_overall_fit(positions: &[RatedPosition], formation: &Formation) -> u8 {
    overall_fit_from_slots(&formation_fit(positions, formation))
}

/// Star banding of an overall-fit percentage: 0.5 stars below 10%, half
/// a star per further 10-point band, capped at 3.0 from 50% up. Pure
/// step function, no interpolation.
pub fn stars_for_fit(percent: u8) -> f32 {
    let stars = 0.5 + 0.5 * f32::from(percent / 10);
    stars.min(3.0)
}

/// One row of a formation ranking report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormationScore {
    pub formation_id: String,
    pub formation_name: String,
    pub percent: u8,
    pub stars: f32,
}

/// Score every catalog formation for a player, highest first. Ties keep
/// catalog order (stable sort), matching `best_formation`.
pub fn rank_formations(
    positions: &[RatedPosition],
    catalog: &FormationCatalog,
) -> Vec<FormationScore> {
    let mut scores: Vec<FormationScore> = catalog
        .iter()
        .map(|formation| {
            let percent = formation_overall_fit(positions, formation);
            FormationScore {
                formation_id: formation.id.clone(),
                formation_name: formation.name.clone(),
                percent,
                stars: stars_for_fit(percent),
            }
        })
        .collect();
    scores.sort_by(|a, b| b.percent.cmp(&a.percent));
    scores
}

/// The default formation to display for a player: linear scan keeping
/// the first strict improvement, so catalog order breaks ties.
pub fn best_formation<'a>(
    positions: &[RatedPosition],
    catalog: &'a FormationCatalog,
) -> Option<(&'a Formation, u8)> {
    let mut best: Option<(&Formation, u8)> = None;
    for formation in catalog.iter() {
        let percent = formation_overall_fit(positions, formation);
        match best {
            Some((_, top)) if percent <= top => {}
            _ => {
                tracing::debug!(formation = %formation.id, percent, "new best formation");
                best = Some((formation, percent));
            }
        }
    }
    best
}
