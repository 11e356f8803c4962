//! The fit engine: pure, synchronous, deterministic scoring.
//!
//! Four operations, all total:
//! - slot resolution (exact match, then one fallback hop)
//! - per-slot formation fit
//! - overall fit percentage, star banding and formation ranking
//! - role compatibility
//!
//! Missing data never errors; it degrades to an unsuited/zero score.

pub mod formation;
pub mod overall;
pub mod resolution;
pub mod role_compat;

pub use formation::{formation_fit, SlotFit};
pub use overall::{
    best_formation, formation_overall_fit, overall_fit_from_slots, rank_formations,
    stars_for_fit, FormationScore,
};
pub use resolution::resolve_slot;
pub use role_compat::role_compatibility;
