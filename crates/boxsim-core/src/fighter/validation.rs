//! Config-loader validation: the rules a `Fighter` built from an on-disk
//! `FighterConfig` must satisfy before entering the universe, beyond the
//! per-attribute-group checks already on `Fighter` itself.

use crate::models::fighter::Fighter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
}

pub fn validate_fighter(fighter: &Fighter) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if let Err(message) = fighter.validate_attributes() {
        issues.push(ValidationIssue { field: "attributes".into(), message });
    }

    if fighter.reach_cm < fighter.height_cm.saturating_sub(15)
        || fighter.reach_cm > fighter.height_cm + 25
    {
        issues.push(ValidationIssue {
            field: "reach_cm".into(),
            message: format!(
                "reach {} is implausible for height {}",
                fighter.reach_cm, fighter.height_cm
            ),
        });
    }

    let age = fighter.age_years(chrono::Utc::now());
    if !(16.0..=55.0).contains(&age) {
        issues.push(ValidationIssue {
            field: "date_of_birth".into(),
            message: format!("computed age {age:.1} is out of plausible range [16,55]"),
        });
    }

    issues
}

pub fn is_valid(fighter: &Fighter) -> bool {
    validate_fighter(fighter).is_empty()
}
