//! Data model: position codes, attribute groups, scouted player records.

pub mod attributes;
pub mod player;
pub mod position;

pub use attributes::{AttributeCategory, AttributeGroups, AttributeRating};
pub use player::{PositionTier, RatedPosition, ScoutedPlayer};
pub use position::Position;
