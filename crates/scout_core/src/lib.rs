//! # scout_core - Formation Fit & Role Compatibility Engine
//!
//! Scoring core of a football scouting desk: maps a player's rated
//! positions onto formation slots, aggregates per-slot fit into an
//! overall percentage and star rating, and scores attribute profiles
//! against role definitions.
//!
//! ## Properties
//! - Pure and deterministic: same inputs, same outputs, no hidden state
//! - Total: missing data degrades to unsuited/zero, never an error
//! - Catalogs are immutable and passed by reference into every scorer

pub mod catalog;
pub mod error;
pub mod fit;
pub mod models;

pub use catalog::{Formation, FormationCatalog, FormationSlot, Role, RoleAttribute, RoleCatalog};
pub use error::{Result, ScoutError};
pub use fit::{
    best_formation, formation_fit, formation_overall_fit, overall_fit_from_slots,
    rank_formations, resolve_slot, role_compatibility, stars_for_fit, FormationScore, SlotFit,
};
pub use models::{
    AttributeCategory, AttributeGroups, AttributeRating, Position, PositionTier, RatedPosition,
    ScoutedPlayer,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
