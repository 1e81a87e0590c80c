use serde::{Deserialize, Serialize};

use crate::models::resume::UNSPECIFIED_EDUCATION;

/// Degree keywords that count as the same tier when both sides mention them.
const DEGREE_TIERS: &[&str] = &["bachelor", "master"];

/// Outcome of the tiered education match. First matching tier wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationMatch {
    /// Résumé education appears verbatim inside the requirement.
    Exact,
    /// Both mention the same degree keyword.
    SameTier,
    #[serde(rename = "none")]
    NoMatch,
}

impl EducationMatch {
    /// Component score for this tier: full weight, partial weight, or 0.
    pub fn component(self, full_weight: f64, partial_weight: f64) -> f64 {
        match self {
            EducationMatch::Exact => full_weight,
            EducationMatch::SameTier => partial_weight,
            EducationMatch::NoMatch => 0.0,
        }
    }
}

/// Compares a résumé education level with a job's requirement, case-insensitively.
pub fn match_education(resume_level: &str, requirement: &str) -> EducationMatch {
    let resume_level = resume_level.trim().to_lowercase();
    let requirement = requirement.trim().to_lowercase();

    if resume_level.is_empty() || resume_level == UNSPECIFIED_EDUCATION || requirement.is_empty() {
        return EducationMatch::NoMatch;
    }

    if requirement.contains(&resume_level) {
        return EducationMatch::Exact;
    }

    let same_tier = DEGREE_TIERS
        .iter()
        .any(|tier| resume_level.contains(tier) && requirement.contains(tier));
    if same_tier {
        EducationMatch::SameTier
    } else {
        EducationMatch::NoMatch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_containment() {
        assert_eq!(
            match_education("Bachelor", "Bachelor's in Computer Science"),
            EducationMatch::Exact
        );
    }

    #[test]
    fn test_same_tier_bachelor() {
        assert_eq!(
            match_education("bachelor of engineering", "Bachelor's in Computer Science"),
            EducationMatch::SameTier
        );
    }

    #[test]
    fn test_same_tier_master() {
        assert_eq!(
            match_education("masters in data science", "Master's degree preferred"),
            EducationMatch::SameTier
        );
    }

    #[test]
    fn test_btech_does_not_match_bachelors() {
        assert_eq!(match_education("b.tech", "bachelor's"), EducationMatch::NoMatch);
    }

    #[test]
    fn test_mixed_tiers_do_not_match() {
        assert_eq!(
            match_education("master of science", "Bachelor's in Design"),
            EducationMatch::NoMatch
        );
    }

    #[test]
    fn test_unspecified_never_matches() {
        assert_eq!(
            match_education(UNSPECIFIED_EDUCATION, "unspecified"),
            EducationMatch::NoMatch
        );
    }

    #[test]
    fn test_empty_requirement_never_matches() {
        assert_eq!(match_education("phd", ""), EducationMatch::NoMatch);
    }

    #[test]
    fn test_component_values() {
        assert_eq!(EducationMatch::Exact.component(20.0, 15.0), 20.0);
        assert_eq!(EducationMatch::SameTier.component(20.0, 15.0), 15.0);
        assert_eq!(EducationMatch::NoMatch.component(20.0, 15.0), 0.0);
    }

    #[test]
    fn test_serde_labels() {
        assert_eq!(serde_json::to_string(&EducationMatch::SameTier).unwrap(), r#""same_tier""#);
        assert_eq!(serde_json::to_string(&EducationMatch::NoMatch).unwrap(), r#""none""#);
    }
}
