//! Role compatibility: weighted attribute match against a role profile.

use crate::catalog::roles::Role;
use crate::models::attributes::AttributeGroups;

/// Score a player's attributes against a role definition, 0-100.
///
/// Every required attribute is looked up by exact name inside its
/// category; a missing attribute contributes nothing to the achieved
/// total but its full weight stays in the ceiling, silently dragging the
/// score down. A role with no required attributes scores 0.
pub fn role_compatibility(attributes: &AttributeGroups, role: &Role) -> u8 {
    let mut achieved: u32 = 0;
    let mut ceiling: u32 = 0;
    for required in &role.attributes {
        let weight = u32::from(required.weight);
        let rating = attributes.rating_of(required.category, &required.name).unwrap_or(0);
        achieved += u32::from(rating) * weight;
        ceiling += 10 * weight;
    }
    if ceiling == 0 {
        return 0;
    }
    ((achieved as f64 / ceiling as f64) * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::roles::{RoleAttribute, RoleCatalog};
    use crate::models::attributes::{AttributeCategory, AttributeRating};
    use crate::models::position::Position;

    fn role_with(attrs: Vec<RoleAttribute>) -> Role {
        Role::new("Test Role", "", Position::CM, attrs)
    }

    #[test]
    fn test_full_match_scores_hundred() {
        let mut groups = AttributeGroups::default();
        groups.technical.push(AttributeRating::new("passing", 10));
        groups.tactical.push(AttributeRating::new("vision", 10));
        let role = role_with(vec![
            RoleAttribute::new("passing", AttributeCategory::Technical, 3),
            RoleAttribute::new("vision", AttributeCategory::Tactical, 2),
        ]);
        assert_eq!(role_compatibility(&groups, &role), 100);
    }

    #[test]
    fn test_weighted_average() {
        let mut groups = AttributeGroups::default();
        groups.technical.push(AttributeRating::new("passing", 8));
        groups.tactical.push(AttributeRating::new("vision", 4));
        let role = role_with(vec![
            RoleAttribute::new("passing", AttributeCategory::Technical, 3),
            RoleAttribute::new("vision", AttributeCategory::Tactical, 1),
        ]);
        // (8*3 + 4*1) / (10*4) = 28/40 = 70%
        assert_eq!(role_compatibility(&groups, &role), 70);
    }

    #[test]
    fn test_missing_attribute_scores_worst_case() {
        let mut groups = AttributeGroups::default();
        groups.technical.push(AttributeRating::new("passing", 10));
        let role = role_with(vec![
            RoleAttribute::new("passing", AttributeCategory::Technical, 1),
            RoleAttribute::new("vision", AttributeCategory::Tactical, 1),
        ]);
        // vision missing: 10/20 = 50%, not an error
        assert_eq!(role_compatibility(&groups, &role), 50);
    }

    #[test]
    fn test_category_mismatch_counts_as_missing() {
        let mut groups = AttributeGroups::default();
        // right name, wrong category
        groups.hidden.push(AttributeRating::new("passing", 10));
        let role =
            role_with(vec![RoleAttribute::new("passing", AttributeCategory::Technical, 2)]);
        assert_eq!(role_compatibility(&groups, &role), 0);
    }

    #[test]
    fn test_empty_role_scores_zero() {
        let groups = AttributeGroups::default();
        assert_eq!(role_compatibility(&groups, &role_with(vec![])), 0);
    }

    #[test]
    fn test_builtin_roles_bounded() {
        let groups = AttributeGroups::default();
        for role in &RoleCatalog::builtin().roles {
            assert_eq!(role_compatibility(&groups, role), 0);
        }
    }
}
