//! Static formation catalog.
//!
//! Formations are immutable catalog entries: an id, a display name and an
//! ordered list of slots with pitch coordinates. Coordinates are purely
//! presentational; scoring copies them through untouched.

use crate::error::{Result, ScoutError};
use crate::models::position::Position;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// One slot of a formation, with visualization coordinates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FormationSlot {
    #[serde(rename = "name")]
    pub position: Position,
    /// 0.0 = left touchline, 1.0 = right touchline.
    pub x: f32,
    /// 0.0 = own goal, 1.0 = opponent goal.
    pub y: f32,
}

impl FormationSlot {
    pub fn new(position: Position, x: f32, y: f32) -> Self {
        Self { position, x: x.clamp(0.0, 1.0), y: y.clamp(0.0, 1.0) }
    }
}

/// A named formation: ordered slots, catalog order significant (it is the
/// tie-break order when ranking formations for a player).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Formation {
    pub id: String,
    pub name: String,
    pub positions: Vec<FormationSlot>,
}

impl Formation {
    pub fn new(id: impl Into<String>, name: impl Into<String>, positions: Vec<FormationSlot>) -> Self {
        Self { id: id.into(), name: name.into(), positions }
    }

    pub fn slot_count(&self) -> usize {
        self.positions.len()
    }
}

/// The formation catalog, loaded once and passed by reference into the
/// scoring functions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormationCatalog {
    pub formations: Vec<Formation>,
}

static BUILTIN_FORMATIONS: Lazy<FormationCatalog> = Lazy::new(FormationCatalog::create_builtin);

impl FormationCatalog {
    /// The built-in catalog. Loaded lazily, shared, immutable.
    pub fn builtin() -> &'static FormationCatalog {
        &BUILTIN_FORMATIONS
    }

    /// Load a customized catalog from JSON (same shape `builtin()`
    /// serializes to). Slot coordinates are clamped to [0,1] on load,
    /// the same invariant `FormationSlot::new` enforces.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let mut catalog: FormationCatalog = serde_json::from_str(json)?;
        for formation in &mut catalog.formations {
            for slot in &mut formation.positions {
                slot.x = slot.x.clamp(0.0, 1.0);
                slot.y = slot.y.clamp(0.0, 1.0);
            }
        }
        tracing::debug!(formations = catalog.formations.len(), "formation catalog loaded");
        Ok(catalog)
    }

    pub fn get(&self, id: &str) -> Option<&Formation> {
        self.formations.iter().find(|f| f.id == id)
    }

    /// `get` that errors with the offending id, for callers that treat an
    /// unknown formation as a hard failure.
    pub fn require(&self, id: &str) -> Result<&Formation> {
        self.get(id).ok_or_else(|| ScoutError::UnknownFormation(id.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Formation> {
        self.formations.iter()
    }

    pub fn len(&self) -> usize {
        self.formations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formations.is_empty()
    }

    fn create_builtin() -> FormationCatalog {
        FormationCatalog {
            formations: vec![
                Self::create_433(),
                Self::create_442(),
                Self::create_4231(),
                Self::create_352(),
                Self::create_4141(),
                Self::create_343(),
            ],
        }
    }

    /// 4-3-3: single pivot, wide forwards.
    fn create_433() -> Formation {
        Formation::new(
            "4-3-3",
            "4-3-3",
            vec![
                FormationSlot::new(Position::GK, 0.5, 0.05),
                FormationSlot::new(Position::LB, 0.2, 0.2),
                FormationSlot::new(Position::LCB, 0.4, 0.2),
                FormationSlot::new(Position::RCB, 0.6, 0.2),
                FormationSlot::new(Position::RB, 0.8, 0.2),
                FormationSlot::new(Position::DM, 0.5, 0.35),
                FormationSlot::new(Position::LCM, 0.35, 0.5),
                FormationSlot::new(Position::RCM, 0.65, 0.5),
                FormationSlot::new(Position::LW, 0.15, 0.75),
                FormationSlot::new(Position::RW, 0.85, 0.75),
                FormationSlot::new(Position::CFCentral, 0.5, 0.85),
            ],
        )
    }

    /// 4-4-2: flat midfield, front two.
    fn create_442() -> Formation {
        Formation::new(
            "4-4-2",
            "4-4-2",
            vec![
                FormationSlot::new(Position::GK, 0.5, 0.05),
                FormationSlot::new(Position::LB, 0.2, 0.2),
                FormationSlot::new(Position::LCB, 0.4, 0.2),
                FormationSlot::new(Position::RCB, 0.6, 0.2),
                FormationSlot::new(Position::RB, 0.8, 0.2),
                FormationSlot::new(Position::LM, 0.15, 0.5),
                FormationSlot::new(Position::LCM, 0.4, 0.5),
                FormationSlot::new(Position::RCM, 0.6, 0.5),
                FormationSlot::new(Position::RM, 0.85, 0.5),
                FormationSlot::new(Position::CFLeft, 0.4, 0.82),
                FormationSlot::new(Position::CFRight, 0.6, 0.82),
            ],
        )
    }

    /// 4-2-3-1: double pivot behind an attacking band.
    fn create_4231() -> Formation {
        Formation::new(
            "4-2-3-1",
            "4-2-3-1",
            vec![
                FormationSlot::new(Position::GK, 0.5, 0.05),
                FormationSlot::new(Position::LB, 0.2, 0.2),
                FormationSlot::new(Position::LCB, 0.4, 0.2),
                FormationSlot::new(Position::RCB, 0.6, 0.2),
                FormationSlot::new(Position::RB, 0.8, 0.2),
                FormationSlot::new(Position::LDM, 0.4, 0.38),
                FormationSlot::new(Position::RDM, 0.6, 0.38),
                FormationSlot::new(Position::LW, 0.2, 0.62),
                FormationSlot::new(Position::AM, 0.5, 0.6),
                FormationSlot::new(Position::RW, 0.8, 0.62),
                FormationSlot::new(Position::CFCentral, 0.5, 0.85),
            ],
        )
    }

    /// 3-5-2: back three with wing-backs.
    fn create_352() -> Formation {
        Formation::new(
            "3-5-2",
            "3-5-2",
            vec![
                FormationSlot::new(Position::GK, 0.5, 0.05),
                FormationSlot::new(Position::LCB, 0.35, 0.2),
                FormationSlot::new(Position::CB, 0.5, 0.2),
                FormationSlot::new(Position::RCB, 0.65, 0.2),
                FormationSlot::new(Position::LWB, 0.1, 0.45),
                FormationSlot::new(Position::LCM, 0.35, 0.5),
                FormationSlot::new(Position::DM, 0.5, 0.4),
                FormationSlot::new(Position::RCM, 0.65, 0.5),
                FormationSlot::new(Position::RWB, 0.9, 0.45),
                FormationSlot::new(Position::CFLeft, 0.4, 0.82),
                FormationSlot::new(Position::CFRight, 0.6, 0.82),
            ],
        )
    }

    /// 4-1-4-1: holding midfielder screening a midfield four.
    fn create_4141() -> Formation {
        Formation::new(
            "4-1-4-1",
            "4-1-4-1",
            vec![
                FormationSlot::new(Position::GK, 0.5, 0.05),
                FormationSlot::new(Position::LB, 0.2, 0.2),
                FormationSlot::new(Position::LCB, 0.4, 0.2),
                FormationSlot::new(Position::RCB, 0.6, 0.2),
                FormationSlot::new(Position::RB, 0.8, 0.2),
                FormationSlot::new(Position::DM, 0.5, 0.35),
                FormationSlot::new(Position::LM, 0.15, 0.55),
                FormationSlot::new(Position::LCM, 0.4, 0.55),
                FormationSlot::new(Position::RCM, 0.6, 0.55),
                FormationSlot::new(Position::RM, 0.85, 0.55),
                FormationSlot::new(Position::CFCentral, 0.5, 0.85),
            ],
        )
    }

    /// 3-4-3: aggressive back three with a wide front line.
    fn create_343() -> Formation {
        Formation::new(
            "3-4-3",
            "3-4-3",
            vec![
                FormationSlot::new(Position::GK, 0.5, 0.05),
                FormationSlot::new(Position::LCB, 0.35, 0.2),
                FormationSlot::new(Position::CB, 0.5, 0.2),
                FormationSlot::new(Position::RCB, 0.65, 0.2),
                FormationSlot::new(Position::LWB, 0.15, 0.5),
                FormationSlot::new(Position::LCM, 0.4, 0.5),
                FormationSlot::new(Position::RCM, 0.6, 0.5),
                FormationSlot::new(Position::RWB, 0.85, 0.5),
                FormationSlot::new(Position::LW, 0.2, 0.78),
                FormationSlot::new(Position::CFCentral, 0.5, 0.85),
                FormationSlot::new(Position::RW, 0.8, 0.78),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_builtin_formations_have_11_slots() {
        let catalog = FormationCatalog::builtin();
        assert_eq!(catalog.len(), 6);
        for formation in catalog.iter() {
            assert_eq!(
                formation.slot_count(),
                11,
                "formation {} should field eleven",
                formation.id
            );
        }
    }

    #[test]
    fn test_slot_coordinates_in_range() {
        for formation in FormationCatalog::builtin().iter() {
            for slot in &formation.positions {
                assert!((0.0..=1.0).contains(&slot.x), "{} x out of range", formation.id);
                assert!((0.0..=1.0).contains(&slot.y), "{} y out of range", formation.id);
            }
        }
    }

    #[test]
    fn test_433_slot_vocabulary() {
        let formation = FormationCatalog::builtin().get("4-3-3").unwrap();
        let slots: Vec<Position> = formation.positions.iter().map(|s| s.position).collect();
        assert_eq!(
            slots,
            vec![
                Position::GK,
                Position::LB,
                Position::LCB,
                Position::RCB,
                Position::RB,
                Position::DM,
                Position::LCM,
                Position::RCM,
                Position::LW,
                Position::RW,
                Position::CFCentral,
            ]
        );
    }

    #[test]
    fn test_slot_clamps_coordinates() {
        let slot = FormationSlot::new(Position::GK, -0.5, 1.5);
        assert_eq!(slot.x, 0.0);
        assert_eq!(slot.y, 1.0);
    }

    #[test]
    fn test_catalog_json_roundtrip() {
        let catalog = FormationCatalog::builtin();
        let json = serde_json::to_string(catalog).unwrap();
        let back = FormationCatalog::from_json_str(&json).unwrap();
        assert_eq!(&back, catalog);
    }

    #[test]
    fn test_loaded_catalog_clamps_coordinates() {
        let json = r#"{
            "formations": [{
                "id": "wide",
                "name": "Wide",
                "positions": [{"name": "GK", "x": -2.0, "y": 3.5}]
            }]
        }"#;
        let catalog = FormationCatalog::from_json_str(json).unwrap();
        let slot = catalog.get("wide").unwrap().positions[0];
        assert_eq!(slot.x, 0.0);
        assert_eq!(slot.y, 1.0);
    }

    #[test]
    fn test_unknown_id_is_none() {
        assert!(FormationCatalog::builtin().get("9-0-1").is_none());
        assert!(matches!(
            FormationCatalog::builtin().require("9-0-1"),
            Err(ScoutError::UnknownFormation(id)) if id == "9-0-1"
        ));
    }
}
