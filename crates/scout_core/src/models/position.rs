use crate::error::ScoutError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every position code the catalogs use, both the specific formation-slot
/// vocabulary (LCB, RDM, CF_LEFT, ...) and the general vocabulary scouts
/// rate players in (CB, DM, CF, ...).
///
/// The set is closed on purpose: slot/player matching is done on enum
/// equality, and the fallback table below is a total function over the
/// enum instead of a string lookup that can silently miss.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Position {
    GK,
    LB,
    LCB,
    CB,
    RCB,
    RB,
    LWB,
    RWB,
    DM,
    LDM,
    RDM,
    CDM,
    CM,
    LCM,
    RCM,
    AM,
    LM,
    RM,
    LW,
    RW,
    CF,
    #[serde(rename = "CF_LEFT")]
    CFLeft,
    #[serde(rename = "CF_CENTRAL")]
    CFCentral,
    #[serde(rename = "CF_RIGHT")]
    CFRight,
    ST,
}

impl Position {
    /// Canonical string code, matching the serde representation.
    pub fn code(&self) -> &'static str {
        match self {
            Self::GK => "GK",
            Self::LB => "LB",
            Self::LCB => "LCB",
            Self::CB => "CB",
            Self::RCB => "RCB",
            Self::RB => "RB",
            Self::LWB => "LWB",
            Self::RWB => "RWB",
            Self::DM => "DM",
            Self::LDM => "LDM",
            Self::RDM => "RDM",
            Self::CDM => "CDM",
            Self::CM => "CM",
            Self::LCM => "LCM",
            Self::RCM => "RCM",
            Self::AM => "AM",
            Self::LM => "LM",
            Self::RM => "RM",
            Self::LW => "LW",
            Self::RW => "RW",
            Self::CF => "CF",
            Self::CFLeft => "CF_LEFT",
            Self::CFCentral => "CF_CENTRAL",
            Self::CFRight => "CF_RIGHT",
            Self::ST => "ST",
        }
    }

    /// Fallback used by slot resolution when a player has no rating under
    /// the exact slot code: collapse the formation-specific code to the
    /// general code scouts rate players in. General codes have no further
    /// fallback.
    pub fn fallback(&self) -> Option<Position> {
        match self {
            Self::LCB | Self::RCB => Some(Self::CB),
            Self::LDM | Self::RDM | Self::CDM => Some(Self::DM),
            Self::LCM | Self::RCM => Some(Self::CM),
            Self::CFLeft | Self::CFCentral | Self::CFRight | Self::ST => Some(Self::CF),
            Self::LWB => Some(Self::LB),
            Self::RWB => Some(Self::RB),
            Self::LM => Some(Self::LW),
            Self::RM => Some(Self::RW),
            Self::GK
            | Self::LB
            | Self::CB
            | Self::RB
            | Self::DM
            | Self::CM
            | Self::AM
            | Self::LW
            | Self::RW
            | Self::CF => None,
        }
    }

    /// General position type used for role lookup. Total: codes that are
    /// already general map to themselves.
    pub fn generalize(&self) -> Position {
        self.fallback().unwrap_or(*self)
    }

    pub fn is_goalkeeper(&self) -> bool {
        matches!(self, Self::GK)
    }

    pub fn is_defender(&self) -> bool {
        matches!(
            self.generalize(),
            Self::LB | Self::CB | Self::RB
        )
    }

    pub fn is_midfielder(&self) -> bool {
        matches!(self.generalize(), Self::DM | Self::CM | Self::AM)
    }

    pub fn is_forward(&self) -> bool {
        matches!(self.generalize(), Self::LW | Self::RW | Self::CF)
    }

    /// The ten general codes, in pitch order. This is the vocabulary role
    /// catalogs are keyed by.
    pub fn general_types() -> [Position; 10] {
        [
            Self::GK,
            Self::LB,
            Self::CB,
            Self::RB,
            Self::DM,
            Self::CM,
            Self::AM,
            Self::LW,
            Self::RW,
            Self::CF,
        ]
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Position {
    type Err = ScoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GK" => Ok(Self::GK),
            "LB" => Ok(Self::LB),
            "LCB" => Ok(Self::LCB),
            "CB" => Ok(Self::CB),
            "RCB" => Ok(Self::RCB),
            "RB" => Ok(Self::RB),
            "LWB" => Ok(Self::LWB),
            "RWB" => Ok(Self::RWB),
            "DM" => Ok(Self::DM),
            "LDM" => Ok(Self::LDM),
            "RDM" => Ok(Self::RDM),
            "CDM" => Ok(Self::CDM),
            "CM" => Ok(Self::CM),
            "LCM" => Ok(Self::LCM),
            "RCM" => Ok(Self::RCM),
            "AM" => Ok(Self::AM),
            "LM" => Ok(Self::LM),
            "RM" => Ok(Self::RM),
            "LW" => Ok(Self::LW),
            "RW" => Ok(Self::RW),
            "CF" => Ok(Self::CF),
            "CF_LEFT" => Ok(Self::CFLeft),
            "CF_CENTRAL" => Ok(Self::CFCentral),
            "CF_RIGHT" => Ok(Self::CFRight),
            "ST" => Ok(Self::ST),
            other => Err(ScoutError::UnknownPosition(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_table() {
        assert_eq!(Position::LCB.fallback(), Some(Position::CB));
        assert_eq!(Position::RCB.fallback(), Some(Position::CB));
        assert_eq!(Position::LDM.fallback(), Some(Position::DM));
        assert_eq!(Position::RDM.fallback(), Some(Position::DM));
        assert_eq!(Position::CDM.fallback(), Some(Position::DM));
        assert_eq!(Position::LCM.fallback(), Some(Position::CM));
        assert_eq!(Position::RCM.fallback(), Some(Position::CM));
        assert_eq!(Position::CFLeft.fallback(), Some(Position::CF));
        assert_eq!(Position::CFCentral.fallback(), Some(Position::CF));
        assert_eq!(Position::CFRight.fallback(), Some(Position::CF));
        assert_eq!(Position::LWB.fallback(), Some(Position::LB));
        assert_eq!(Position::RWB.fallback(), Some(Position::RB));
        assert_eq!(Position::LM.fallback(), Some(Position::LW));
        assert_eq!(Position::RM.fallback(), Some(Position::RW));
    }

    #[test]
    fn test_general_codes_have_no_fallback() {
        for pos in Position::general_types() {
            assert_eq!(pos.fallback(), None, "{} should be terminal", pos);
            assert_eq!(pos.generalize(), pos);
        }
    }

    #[test]
    fn test_code_roundtrip() {
        let all = [
            Position::GK,
            Position::LB,
            Position::LCB,
            Position::CB,
            Position::RCB,
            Position::RB,
            Position::LWB,
            Position::RWB,
            Position::DM,
            Position::LDM,
            Position::RDM,
            Position::CDM,
            Position::CM,
            Position::LCM,
            Position::RCM,
            Position::AM,
            Position::LM,
            Position::RM,
            Position::LW,
            Position::RW,
            Position::CF,
            Position::CFLeft,
            Position::CFCentral,
            Position::CFRight,
            Position::ST,
        ];
        for pos in all {
            assert_eq!(pos.code().parse::<Position>().unwrap(), pos);
        }
    }

    #[test]
    fn test_unknown_code_is_an_error() {
        assert!("SWEEPER_KEEPER".parse::<Position>().is_err());
    }

    #[test]
    fn test_serde_matches_code() {
        let json = serde_json::to_string(&Position::CFCentral).unwrap();
        assert_eq!(json, "\"CF_CENTRAL\"");
        let back: Position = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Position::CFCentral);
    }

    #[test]
    fn test_category_predicates() {
        assert!(Position::GK.is_goalkeeper());
        assert!(Position::LWB.is_defender());
        assert!(Position::RCM.is_midfielder());
        assert!(Position::CFRight.is_forward());
        assert!(Position::LM.is_forward(), "LM generalizes to the wing");
    }
}
