//! Job catalog: role identifiers mapped to job requirements.
//!
//! Loaded once at startup, either from the built-in role set or a JSON file of
//! the same shape, and shared read-only afterwards.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::models::{JobRequirement, JobRequirementRecord};

pub type JobCatalog = BTreeMap<String, JobRequirement>;

/// Supplies the role catalog. Carried in `AppState` as `Arc<dyn JobCatalogSource>`.
pub trait JobCatalogSource: Send + Sync {
    fn roles(&self) -> &JobCatalog;
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    roles: JobCatalog,
}

impl InMemoryCatalog {
    pub fn new(roles: JobCatalog) -> Self {
        Self { roles }
    }

    /// The default IT roles shipped with the service.
    pub fn builtin() -> Self {
        let roles = [
            (
                "frontend",
                JobRequirement::new(
                    "Frontend Developer",
                    ["React", "JavaScript", "HTML", "CSS", "Redux", "TypeScript"],
                    1,
                    "Bachelor's in Computer Science or related field",
                    "Looking for a skilled frontend developer with experience in React, JavaScript, HTML, and CSS.",
                ),
            ),
            (
                "backend",
                JobRequirement::new(
                    "Backend Developer",
                    ["Python", "Flask", "Django", "SQL", "MongoDB", "REST APIs"],
                    2,
                    "Bachelor's in Computer Science or related field",
                    "Seeking a backend developer proficient in Python, Flask, Django, and databases.",
                ),
            ),
            (
                "fullstack",
                JobRequirement::new(
                    "Full Stack Developer",
                    ["React", "Node.js", "Express", "MongoDB", "JavaScript", "TypeScript"],
                    2,
                    "Bachelor's in Computer Science or related field",
                    "Need a full-stack developer with expertise in both frontend and backend technologies.",
                ),
            ),
            (
                "uiux",
                JobRequirement::new(
                    "UI/UX Designer",
                    ["Figma", "Adobe XD", "User Research", "Wireframing", "Prototyping"],
                    1,
                    "Bachelor's in Design or related field",
                    "Hiring a creative UI/UX designer with experience in Figma, Adobe XD, and user research.",
                ),
            ),
        ];

        Self::new(
            roles
                .into_iter()
                .map(|(id, job)| (id.to_string(), job))
                .collect(),
        )
    }

    /// Parses `{"<role_id>": {title, description, skills, min_experience, education}}`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: BTreeMap<String, JobRequirementRecord> =
            serde_json::from_str(json).context("Job catalog is not valid JSON")?;
        let roles = records
            .into_iter()
            .map(|(id, record)| (id.trim().to_string(), JobRequirement::from(record)))
            .collect();
        Ok(Self::new(roles))
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read job catalog at {}", path.display()))?;
        let catalog = Self::from_json_str(&json)
            .with_context(|| format!("Failed to parse job catalog at {}", path.display()))?;
        info!(
            "Loaded {} job roles from {}",
            catalog.roles.len(),
            path.display()
        );
        Ok(catalog)
    }
}

impl JobCatalogSource for InMemoryCatalog {
    fn roles(&self) -> &JobCatalog {
        &self.roles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_has_four_roles() {
        let catalog = InMemoryCatalog::builtin();
        let ids: Vec<&str> = catalog.roles().keys().map(String::as_str).collect();
        assert_eq!(ids, vec!["backend", "frontend", "fullstack", "uiux"]);
    }

    #[test]
    fn test_builtin_skills_are_normalized() {
        let catalog = InMemoryCatalog::builtin();
        let backend = &catalog.roles()["backend"];
        assert!(backend.skills().contains("rest apis"));
        assert_eq!(backend.min_experience_years(), 2);
    }

    #[test]
    fn test_from_json_applies_normalization() {
        let json = r#"{
            "data": {
                "title": "Data Engineer",
                "skills": ["Spark", "SQL"],
                "min_experience": 0,
                "education": "Master's"
            }
        }"#;
        let catalog = InMemoryCatalog::from_json_str(json).unwrap();
        let job = &catalog.roles()["data"];
        assert_eq!(job.min_experience_years(), 1);
        assert!(job.skills().contains("spark"));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(InMemoryCatalog::from_json_str("[1, 2, 3]").is_err());
    }

    #[test]
    fn test_empty_json_object_is_empty_catalog() {
        let catalog = InMemoryCatalog::from_json_str("{}").unwrap();
        assert!(catalog.roles().is_empty());
    }

    #[test]
    fn test_from_path_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"qa": {{"title": "QA Engineer", "skills": ["Selenium"], "min_experience": 1}}}}"#
        )
        .unwrap();
        let catalog = InMemoryCatalog::from_path(file.path()).unwrap();
        assert_eq!(catalog.roles()["qa"].title(), "QA Engineer");
    }

    #[test]
    fn test_from_missing_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(InMemoryCatalog::from_path(&dir.path().join("missing.json")).is_err());
    }
}
