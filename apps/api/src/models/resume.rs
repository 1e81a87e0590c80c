use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Sentinel education level for résumés that do not state one. Never matches a requirement.
pub const UNSPECIFIED_EDUCATION: &str = "unspecified";

/// A parsed résumé, ready for scoring.
///
/// Skills are trimmed, lower-cased and deduplicated on construction, so every
/// set operation downstream is a plain exact-token comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeProfile {
    skills: BTreeSet<String>,
    experience_years: u32,
    education_level: String,
    raw_text: String,
}

impl ResumeProfile {
    pub fn new<I, S>(
        skills: I,
        experience_years: u32,
        education_level: Option<&str>,
        raw_text: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let education_level = education_level
            .map(|e| e.trim().to_lowercase())
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| UNSPECIFIED_EDUCATION.to_string());

        Self {
            skills: normalize_skills(skills),
            experience_years,
            education_level,
            raw_text: raw_text.into(),
        }
    }

    pub fn skills(&self) -> &BTreeSet<String> {
        &self.skills
    }

    pub fn experience_years(&self) -> u32 {
        self.experience_years
    }

    pub fn education_level(&self) -> &str {
        &self.education_level
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }
}

/// Wire shape of a résumé as produced by the upstream extractor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResumeProfileInput {
    #[serde(default)]
    pub skills: Vec<String>,
    /// Unknown experience is sent as 0 or omitted.
    #[serde(default)]
    pub experience_years: i64,
    #[serde(default)]
    pub education: Option<String>,
    #[serde(default)]
    pub raw_text: Option<String>,
}

impl TryFrom<ResumeProfileInput> for ResumeProfile {
    type Error = AppError;

    fn try_from(input: ResumeProfileInput) -> Result<Self, Self::Error> {
        let experience_years = u32::try_from(input.experience_years).map_err(|_| {
            AppError::InvalidInput(format!(
                "experience_years must be between 0 and {}, got {}",
                u32::MAX,
                input.experience_years
            ))
        })?;

        Ok(ResumeProfile::new(
            input.skills,
            experience_years,
            input.education.as_deref(),
            input.raw_text.unwrap_or_default(),
        ))
    }
}

/// Trims, lower-cases and deduplicates skill strings, dropping blanks.
pub fn normalize_skills<I, S>(skills: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    skills
        .into_iter()
        .map(|s| s.as_ref().trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}
