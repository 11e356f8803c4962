//! Static catalogs: formations and roles.
//!
//! Catalogs are immutable at runtime. The built-in sets live behind lazy
//! statics; customized catalogs load from JSON and feed the same scoring
//! functions by reference.

pub mod formations;
pub mod roles;

pub use formations::{Formation, FormationCatalog, FormationSlot};
pub use roles::{Role, RoleAttribute, RoleCatalog};
