//! Attribute categories and per-category rating lists.
//!
//! A scouted player carries six fixed category groups, each an ordered
//! list of named 0-10 ratings. Role definitions reference attributes by
//! (category, name); a miss scores 0 instead of erroring.

use serde::{Deserialize, Serialize};

/// The six fixed attribute categories on a scouting report.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum AttributeCategory {
    Technical,
    Tactical,
    Physical,
    MentalPsychology,
    SetPieces,
    Hidden,
}

impl AttributeCategory {
    pub fn all() -> [AttributeCategory; 6] {
        [
            Self::Technical,
            Self::Tactical,
            Self::Physical,
            Self::MentalPsychology,
            Self::SetPieces,
            Self::Hidden,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Technical => "Technical",
            Self::Tactical => "Tactical",
            Self::Physical => "Physical",
            Self::MentalPsychology => "Mental / Psychology",
            Self::SetPieces => "Set Pieces",
            Self::Hidden => "Hidden",
        }
    }

    /// Standard attribute vocabulary per category. Used by the sample
    /// generator; custom reports may carry any names.
    pub fn standard_names(&self) -> &'static [&'static str] {
        match self {
            Self::Technical => &[
                "dribbling",
                "finishing",
                "first_touch",
                "passing",
                "crossing",
                "heading",
                "tackling",
                "technique",
                "long_shots",
                "marking",
            ],
            Self::Tactical => &[
                "positioning",
                "anticipation",
                "decisions",
                "off_the_ball",
                "teamwork",
                "vision",
                "work_rate",
                "concentration",
            ],
            Self::Physical => &[
                "acceleration",
                "pace",
                "stamina",
                "strength",
                "agility",
                "balance",
                "jumping",
                "natural_fitness",
            ],
            Self::MentalPsychology => &[
                "composure",
                "determination",
                "leadership",
                "bravery",
                "flair",
                "aggression",
            ],
            Self::SetPieces => &["corners", "free_kicks", "penalty_taking", "long_throws"],
            Self::Hidden => &[
                "consistency",
                "important_matches",
                "injury_proneness",
                "versatility",
                "professionalism",
            ],
        }
    }
}

/// One named rating inside a category group.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttributeRating {
    pub name: String,
    /// 0-10 scouting scale.
    pub rating: u8,
}

impl AttributeRating {
    pub fn new(name: impl Into<String>, rating: u8) -> Self {
        Self { name: name.into(), rating: rating.min(10) }
    }
}

/// The six category groups of a scouting report, in report order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AttributeGroups {
    #[serde(default)]
    pub technical: Vec<AttributeRating>,
    #[serde(default)]
    pub tactical: Vec<AttributeRating>,
    #[serde(default)]
    pub physical: Vec<AttributeRating>,
    #[serde(default)]
    pub mental_psychology: Vec<AttributeRating>,
    #[serde(default)]
    pub set_pieces: Vec<AttributeRating>,
    #[serde(default)]
    pub hidden: Vec<AttributeRating>,
}

impl AttributeGroups {
    pub fn group(&self, category: AttributeCategory) -> &[AttributeRating] {
        match category {
            AttributeCategory::Technical => &self.technical,
            AttributeCategory::Tactical => &self.tactical,
            AttributeCategory::Physical => &self.physical,
            AttributeCategory::MentalPsychology => &self.mental_psychology,
            AttributeCategory::SetPieces => &self.set_pieces,
            AttributeCategory::Hidden => &self.hidden,
        }
    }

    pub fn group_mut(&mut self, category: AttributeCategory) -> &mut Vec<AttributeRating> {
        match category {
            AttributeCategory::Technical => &mut self.technical,
            AttributeCategory::Tactical => &mut self.tactical,
            AttributeCategory::Physical => &mut self.physical,
            AttributeCategory::MentalPsychology => &mut self.mental_psychology,
            AttributeCategory::SetPieces => &mut self.set_pieces,
            AttributeCategory::Hidden => &mut self.hidden,
        }
    }

    /// Exact name match inside the given category. A miss is not an
    /// error; role scoring treats it as a 0 rating.
    pub fn rating_of(&self, category: AttributeCategory, name: &str) -> Option<u8> {
        self.group(category).iter().find(|a| a.name == name).map(|a| a.rating)
    }

    /// Total number of rated attributes across all six groups.
    pub fn len(&self) -> usize {
        AttributeCategory::all().iter().map(|c| self.group(*c).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_groups() -> AttributeGroups {
        let mut groups = AttributeGroups::default();
        groups.technical.push(AttributeRating::new("passing", 8));
        groups.technical.push(AttributeRating::new("tackling", 5));
        groups.tactical.push(AttributeRating::new("vision", 9));
        groups
    }

    #[test]
    fn test_rating_lookup_exact_match() {
        let groups = sample_groups();
        assert_eq!(groups.rating_of(AttributeCategory::Technical, "passing"), Some(8));
        assert_eq!(groups.rating_of(AttributeCategory::Tactical, "vision"), Some(9));
    }

    #[test]
    fn test_rating_lookup_wrong_category_misses() {
        let groups = sample_groups();
        // "passing" lives under Technical, not Tactical
        assert_eq!(groups.rating_of(AttributeCategory::Tactical, "passing"), None);
        assert_eq!(groups.rating_of(AttributeCategory::Hidden, "passing"), None);
    }

    #[test]
    fn test_rating_clamped_to_scale() {
        let attr = AttributeRating::new("finishing", 14);
        assert_eq!(attr.rating, 10);
    }

    #[test]
    fn test_group_serde_field_names() {
        let groups = sample_groups();
        let json = serde_json::to_value(&groups).unwrap();
        assert!(json.get("mentalPsychology").is_some());
        assert!(json.get("setPieces").is_some());
    }

    #[test]
    fn test_len_counts_all_groups() {
        assert_eq!(sample_groups().len(), 3);
        assert!(AttributeGroups::default().is_empty());
    }
}
