use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::resume::normalize_skills;

/// A target role's requirements.
///
/// `min_experience_years` is always ≥ 1 so the experience ratio never divides by zero.
#[derive(Debug, Clone, PartialEq)]
pub struct JobRequirement {
    title: String,
    skills: BTreeSet<String>,
    min_experience_years: u32,
    education_requirement: String,
    description: String,
}

impl JobRequirement {
    pub fn new<I, S>(
        title: impl Into<String>,
        skills: I,
        min_experience_years: u32,
        education_requirement: impl Into<String>,
        description: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            title: title.into(),
            skills: normalize_skills(skills),
            min_experience_years: min_experience_years.max(1),
            education_requirement: education_requirement.into().trim().to_string(),
            description: description.into().trim().to_string(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn skills(&self) -> &BTreeSet<String> {
        &self.skills
    }

    pub fn min_experience_years(&self) -> u32 {
        self.min_experience_years
    }

    pub fn education_requirement(&self) -> &str {
        &self.education_requirement
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Fails when there is nothing to compare a résumé against.
    pub fn ensure_comparable(&self) -> Result<(), AppError> {
        if self.skills.is_empty() && self.description.is_empty() {
            return Err(AppError::InvalidInput(format!(
                "job '{}' has neither skills nor a description",
                self.title
            )));
        }
        Ok(())
    }
}

/// Catalog/wire shape of a job requirement.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobRequirementRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default, alias = "min_experience_years")]
    pub min_experience: u32,
    #[serde(default, alias = "education_requirement")]
    pub education: String,
}

impl From<JobRequirementRecord> for JobRequirement {
    fn from(record: JobRequirementRecord) -> Self {
        JobRequirement::new(
            record.title,
            record.skills,
            record.min_experience,
            record.education,
            record.description,
        )
    }
}
