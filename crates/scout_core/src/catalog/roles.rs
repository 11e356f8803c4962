//! Static role catalog.
//!
//! A role is a named, weighted list of required attributes tied to one
//! general position type. Role lookup for a formation slot goes through
//! the same generalization table the fit engine uses, so "CDM" and "DM"
//! see the same roles.

use crate::error::Result;
use crate::models::attributes::AttributeCategory;
use crate::models::position::Position;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// One required attribute of a role, weighted 1-3.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoleAttribute {
    pub name: String,
    pub category: AttributeCategory,
    /// 1 = useful, 2 = important, 3 = essential.
    pub weight: u8,
}

impl RoleAttribute {
    pub fn new(name: impl Into<String>, category: AttributeCategory, weight: u8) -> Self {
        Self { name: name.into(), category, weight: weight.clamp(1, 3) }
    }
}

/// A role definition from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Role {
    pub name: String,
    pub description: String,
    pub position_type: Position,
    pub attributes: Vec<RoleAttribute>,
}

impl Role {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        position_type: Position,
        attributes: Vec<RoleAttribute>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            position_type,
            attributes,
        }
    }
}

/// The role catalog, keyed by general position type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoleCatalog {
    pub roles: Vec<Role>,
}

static BUILTIN_ROLES: Lazy<RoleCatalog> = Lazy::new(RoleCatalog::create_builtin);

impl RoleCatalog {
    pub fn builtin() -> &'static RoleCatalog {
        &BUILTIN_ROLES
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let catalog: RoleCatalog = serde_json::from_str(json)?;
        tracing::debug!(roles = catalog.roles.len(), "role catalog loaded");
        Ok(catalog)
    }

    /// Every role whose position type matches the generalized slot code.
    /// Unknown mappings simply yield an empty list; the caller renders an
    /// empty state rather than erroring.
    pub fn roles_for_position(&self, slot: Position) -> Vec<&Role> {
        let general = slot.generalize();
        let matches: Vec<&Role> =
            self.roles.iter().filter(|r| r.position_type == general).collect();
        if matches.is_empty() {
            tracing::warn!(slot = %slot, "no roles defined for position");
        }
        matches
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    fn create_builtin() -> RoleCatalog {
        use AttributeCategory::*;
        let attr = RoleAttribute::new;

        RoleCatalog {
            roles: vec![
                Role::new(
                    "Sweeper Keeper",
                    "Keeper comfortable outside the box, starting attacks with his feet.",
                    Position::GK,
                    vec![
                        attr("positioning", Tactical, 3),
                        attr("anticipation", Tactical, 3),
                        attr("decisions", Tactical, 2),
                        attr("concentration", Tactical, 2),
                        attr("composure", MentalPsychology, 2),
                        attr("first_touch", Technical, 2),
                        attr("passing", Technical, 2),
                    ],
                ),
                Role::new(
                    "Ball-Playing Defender",
                    "Centre-back who steps out of defence and distributes.",
                    Position::CB,
                    vec![
                        attr("passing", Technical, 3),
                        attr("tackling", Technical, 3),
                        attr("positioning", Tactical, 3),
                        attr("marking", Technical, 2),
                        attr("heading", Technical, 2),
                        attr("composure", MentalPsychology, 2),
                        attr("strength", Physical, 1),
                    ],
                ),
                Role::new(
                    "No-Nonsense Centre-Back",
                    "Clears the lines first, plays the ball second.",
                    Position::CB,
                    vec![
                        attr("tackling", Technical, 3),
                        attr("marking", Technical, 3),
                        attr("heading", Technical, 3),
                        attr("positioning", Tactical, 2),
                        attr("strength", Physical, 2),
                        attr("bravery", MentalPsychology, 2),
                        attr("jumping", Physical, 1),
                    ],
                ),
                Role::new(
                    "Attacking Full-Back",
                    "Left back who overlaps and delivers from wide.",
                    Position::LB,
                    vec![
                        attr("crossing", Technical, 3),
                        attr("stamina", Physical, 3),
                        attr("pace", Physical, 2),
                        attr("tackling", Technical, 2),
                        attr("work_rate", Tactical, 2),
                        attr("off_the_ball", Tactical, 1),
                    ],
                ),
                Role::new(
                    "Defensive Full-Back",
                    "Right back who stays home and defends the channel.",
                    Position::RB,
                    vec![
                        attr("tackling", Technical, 3),
                        attr("marking", Technical, 3),
                        attr("positioning", Tactical, 2),
                        attr("concentration", Tactical, 2),
                        attr("strength", Physical, 1),
                        attr("pace", Physical, 1),
                    ],
                ),
                Role::new(
                    "Anchor",
                    "Holding midfielder screening the back line.",
                    Position::DM,
                    vec![
                        attr("positioning", Tactical, 3),
                        attr("tackling", Technical, 3),
                        attr("anticipation", Tactical, 2),
                        attr("marking", Technical, 2),
                        attr("concentration", Tactical, 2),
                        attr("strength", Physical, 2),
                    ],
                ),
                Role::new(
                    "Deep-Lying Playmaker",
                    "Dictates tempo from in front of the defence.",
                    Position::DM,
                    vec![
                        attr("passing", Technical, 3),
                        attr("vision", Tactical, 3),
                        attr("first_touch", Technical, 2),
                        attr("technique", Technical, 2),
                        attr("composure", MentalPsychology, 2),
                        attr("decisions", Tactical, 2),
                    ],
                ),
                Role::new(
                    "Box-to-Box Midfielder",
                    "Covers ground between both boxes for ninety minutes.",
                    Position::CM,
                    vec![
                        attr("stamina", Physical, 3),
                        attr("work_rate", Tactical, 3),
                        attr("passing", Technical, 2),
                        attr("tackling", Technical, 2),
                        attr("determination", MentalPsychology, 2),
                        attr("long_shots", Technical, 1),
                    ],
                ),
                Role::new(
                    "Advanced Playmaker",
                    "Finds space between the lines and creates.",
                    Position::AM,
                    vec![
                        attr("passing", Technical, 3),
                        attr("vision", Tactical, 3),
                        attr("technique", Technical, 3),
                        attr("flair", MentalPsychology, 2),
                        attr("off_the_ball", Tactical, 2),
                        attr("composure", MentalPsychology, 1),
                    ],
                ),
                Role::new(
                    "Inside Forward",
                    "Wide player cutting in to shoot on the stronger foot.",
                    Position::LW,
                    vec![
                        attr("dribbling", Technical, 3),
                        attr("acceleration", Physical, 3),
                        attr("finishing", Technical, 2),
                        attr("technique", Technical, 2),
                        attr("flair", MentalPsychology, 2),
                        attr("off_the_ball", Tactical, 2),
                    ],
                ),
                Role::new(
                    "Winger",
                    "Hugs the touchline, beats his man and crosses.",
                    Position::RW,
                    vec![
                        attr("dribbling", Technical, 3),
                        attr("crossing", Technical, 3),
                        attr("pace", Physical, 3),
                        attr("acceleration", Physical, 2),
                        attr("work_rate", Tactical, 1),
                    ],
                ),
                Role::new(
                    "Advanced Forward",
                    "Leads the line, runs the channels, finishes moves.",
                    Position::CF,
                    vec![
                        attr("finishing", Technical, 3),
                        attr("off_the_ball", Tactical, 3),
                        attr("pace", Physical, 2),
                        attr("dribbling", Technical, 2),
                        attr("composure", MentalPsychology, 2),
                        attr("first_touch", Technical, 2),
                    ],
                ),
                Role::new(
                    "Target Man",
                    "Focal point for direct play, wins everything in the air.",
                    Position::CF,
                    vec![
                        attr("heading", Technical, 3),
                        attr("strength", Physical, 3),
                        attr("jumping", Physical, 2),
                        attr("bravery", MentalPsychology, 2),
                        attr("teamwork", Tactical, 2),
                        attr("first_touch", Technical, 1),
                    ],
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_general_type_has_a_role() {
        let catalog = RoleCatalog::builtin();
        for general in Position::general_types() {
            assert!(
                !catalog.roles_for_position(general).is_empty(),
                "no role defined for {}",
                general
            );
        }
    }

    #[test]
    fn test_cdm_sees_same_roles_as_dm() {
        let catalog = RoleCatalog::builtin();
        let via_cdm: Vec<&str> =
            catalog.roles_for_position(Position::CDM).iter().map(|r| r.name.as_str()).collect();
        let via_dm: Vec<&str> =
            catalog.roles_for_position(Position::DM).iter().map(|r| r.name.as_str()).collect();
        assert_eq!(via_cdm, via_dm);
        assert!(via_dm.contains(&"Anchor"));
    }

    #[test]
    fn test_specific_slot_codes_resolve() {
        let catalog = RoleCatalog::builtin();
        let for_lcb = catalog.roles_for_position(Position::LCB);
        assert!(for_lcb.iter().all(|r| r.position_type == Position::CB));
        assert!(!for_lcb.is_empty());

        let for_st = catalog.roles_for_position(Position::ST);
        assert!(for_st.iter().any(|r| r.name == "Target Man"));
    }

    #[test]
    fn test_missing_mapping_yields_empty_list() {
        // A trimmed-down custom catalog with no keeper roles: lookup
        // returns an empty list, never an error.
        let catalog = RoleCatalog { roles: vec![] };
        assert!(catalog.roles_for_position(Position::GK).is_empty());
    }

    #[test]
    fn test_weights_clamped() {
        let attr = RoleAttribute::new("passing", AttributeCategory::Technical, 9);
        assert_eq!(attr.weight, 3);
        let attr = RoleAttribute::new("passing", AttributeCategory::Technical, 0);
        assert_eq!(attr.weight, 1);
    }

    #[test]
    fn test_catalog_json_roundtrip() {
        let catalog = RoleCatalog::builtin();
        let json = serde_json::to_string(catalog).unwrap();
        let back = RoleCatalog::from_json_str(&json).unwrap();
        assert_eq!(&back, catalog);
    }
}
