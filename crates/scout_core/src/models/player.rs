//! Scouted player records: rated positions plus the six attribute groups.
//!
//! The fit engine consumes these as pure input; nothing here is mutated
//! by scoring. Tier and rating are stored independently (see
//! `PositionTier::from_rating` for the data-entry banding helper).

use crate::error::Result;
use crate::models::attributes::{AttributeCategory, AttributeGroups, AttributeRating};
use crate::models::position::Position;
use chrono::{DateTime, Utc};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Familiarity tier of a rated position.
///
/// `Unsuited` never appears on a stored player record; it is the derived
/// tier the fit calculator emits for slots the player cannot cover.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PositionTier {
    Natural,
    Alternative,
    Tertiary,
    Unsuited,
}

impl PositionTier {
    /// Data-entry banding: tier derived from a 0-10 rating. Ratings below
    /// 4 are not worth recording and yield `None`.
    ///
    /// The fit engine does NOT call this; it trusts the tier stored on
    /// the record so manual overrides survive scoring.
    pub fn from_rating(rating: u8) -> Option<PositionTier> {
        match rating {
            8..=10 => Some(Self::Natural),
            6..=7 => Some(Self::Alternative),
            4..=5 => Some(Self::Tertiary),
            _ => None,
        }
    }

    /// Slot weight in the overall-fit aggregation.
    /// Tertiary and unsuited share the lowest weight (observed scheme).
    pub fn weight(&self) -> u32 {
        match self {
            Self::Natural => 3,
            Self::Alternative => 2,
            Self::Tertiary | Self::Unsuited => 1,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Natural => "natural",
            Self::Alternative => "alternative",
            Self::Tertiary => "tertiary",
            Self::Unsuited => "unsuited",
        }
    }
}

/// One position a scout has rated a player at.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RatedPosition {
    #[serde(rename = "name")]
    pub position: Position,
    pub tier: PositionTier,
    /// 0-10 scouting scale.
    pub rating: u8,
}

impl RatedPosition {
    pub fn new(position: Position, tier: PositionTier, rating: u8) -> Self {
        Self { position, tier, rating: rating.min(10) }
    }

    /// Convenience constructor that bands the tier from the rating.
    /// Returns `None` for ratings below the recordable threshold.
    pub fn banded(position: Position, rating: u8) -> Option<Self> {
        PositionTier::from_rating(rating).map(|tier| Self::new(position, tier, rating))
    }
}

/// A player record as the scouting desk stores it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoutedPlayer {
    pub id: String,
    pub name: String,
    /// Positions the player is rated at, general vocabulary.
    #[serde(default)]
    pub positions_data: Vec<RatedPosition>,
    #[serde(default)]
    pub attributes: AttributeGroups,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ScoutedPlayer {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            positions_data: Vec::new(),
            attributes: AttributeGroups::default(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Record (or replace) a rated position. Uniqueness by position code
    /// is enforced here even though stored data is only expected to hold
    /// it by convention.
    pub fn rate_position(&mut self, rated: RatedPosition) {
        if let Some(existing) =
            self.positions_data.iter_mut().find(|p| p.position == rated.position)
        {
            *existing = rated;
        } else {
            self.positions_data.push(rated);
        }
        self.touch();
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check that every stored rating sits on the 0-10 scouting scale.
    /// Records built through the constructors are always valid; this is
    /// for data deserialized from external files.
    pub fn validate(&self) -> Result<()> {
        for rated in &self.positions_data {
            if rated.rating > 10 {
                return Err(crate::error::ScoutError::RatingOutOfRange {
                    found: rated.rating,
                    max: 10,
                });
            }
        }
        for category in AttributeCategory::all() {
            for attr in self.attributes.group(category) {
                if attr.rating > 10 {
                    return Err(crate::error::ScoutError::RatingOutOfRange {
                        found: attr.rating,
                        max: 10,
                    });
                }
            }
        }
        Ok(())
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Generate a plausible scouted player, deterministically from a seed.
    /// Same seed, same player. Used by the CLI demo mode and tests.
    pub fn generate(name: impl Into<String>, primary: Position, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut player = Self::new(name);

        let primary = primary.generalize();
        let primary_rating = rng.gen_range(8..=10);
        player.rate_position(RatedPosition::new(
            primary,
            PositionTier::Natural,
            primary_rating,
        ));

        // One or two neighbouring positions at a lower band.
        for neighbour in neighbours_of(primary).iter().take(rng.gen_range(1..=2)) {
            let rating = rng.gen_range(4..=7);
            if let Some(rated) = RatedPosition::banded(*neighbour, rating) {
                player.rate_position(rated);
            }
        }

        // Fill every category with the standard vocabulary around a base
        // level, keepers biased low on outfield technicals.
        let base: i32 = rng.gen_range(5..=7);
        for category in AttributeCategory::all() {
            let group = player.attributes.group_mut(category);
            for name in category.standard_names() {
                let spread: i32 = rng.gen_range(-2..=2);
                let mut rating = (base + spread).clamp(0, 10) as u8;
                if primary.is_goalkeeper() && category == AttributeCategory::Technical {
                    rating = rating.saturating_sub(3);
                }
                group.push(AttributeRating::new(*name, rating));
            }
        }

        player.touch();
        player
    }
}

/// Adjacent general positions a generated player may also be rated at.
fn neighbours_of(primary: Position) -> &'static [Position] {
    match primary.generalize() {
        Position::GK => &[],
        Position::LB => &[Position::CB, Position::LW],
        Position::RB => &[Position::CB, Position::RW],
        Position::CB => &[Position::DM],
        Position::DM => &[Position::CB, Position::CM],
        Position::CM => &[Position::DM, Position::AM],
        Position::AM => &[Position::CM, Position::CF],
        Position::LW => &[Position::AM, Position::CF],
        Position::RW => &[Position::AM, Position::CF],
        Position::CF => &[Position::AM],
        _ => &[],
    }
}
