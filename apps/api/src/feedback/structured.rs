use crate::feedback::{FeedbackReport, FeedbackStrategy, Verdict};
use crate::models::resume::normalize_skills;
use crate::scoring::{EducationMatch, MatchResult};

const NEEDS_IMPROVEMENT_CHECKLIST: &[&str] = &[
    "Add the required skills listed in the job description",
    "Describe your experience with measurable results",
    "State your education and certifications clearly",
];

const GOOD_CHECKLIST: &[&str] = &[
    "Close the remaining skill gaps",
    "Tailor your summary to this role",
    "Highlight projects that use the role's core skills",
];

const EXCELLENT_CHECKLIST: &[&str] = &[
    "Keep your résumé concise and up to date",
    "Quantify your key achievements",
    "Proofread before applying",
];

/// Builds feedback from a scored match.
///
/// Item order: missing skills, experience gap, education alignment. If none
/// apply, a single affirmative item.
///
/// Missing skills are re-normalized since the result may come from a client.
pub fn structured_feedback(result: &MatchResult) -> FeedbackReport {
    let mut items = Vec::new();

    let missing: Vec<String> = normalize_skills(&result.missing_skills).into_iter().collect();
    if !missing.is_empty() {
        items.push(format!(
            "Consider adding these missing skills: {}.",
            missing.join(", ")
        ));
    }

    if result.resume_experience_years < result.required_experience_years {
        items.push(format!(
            "This role asks for at least {} of experience; your résumé shows {}.",
            years(result.required_experience_years),
            years(result.resume_experience_years)
        ));
    }

    if result.education_match == EducationMatch::NoMatch {
        if result.required_education.is_empty() {
            items.push("State your education level clearly so it can be matched.".to_string());
        } else {
            items.push(format!(
                "Align your education section with the requirement: {}.",
                result.required_education
            ));
        }
    }

    if items.is_empty() {
        items.push("Your résumé covers the key requirements for this role.".to_string());
    }

    let verdict = Verdict::from_score(result.score);

    FeedbackReport {
        strategy: FeedbackStrategy::Structured,
        summary: Some(format!(
            "Your résumé scores {:.2}/100 for {}: {}.",
            result.score,
            result.job_title,
            verdict.label()
        )),
        verdict: Some(verdict),
        items,
        checklist: checklist(verdict),
        keywords: Vec::new(),
    }
}

/// Fixed checklist for a verdict band.
pub fn checklist(verdict: Verdict) -> Vec<String> {
    let items = match verdict {
        Verdict::NeedsImprovement => NEEDS_IMPROVEMENT_CHECKLIST,
        Verdict::Good => GOOD_CHECKLIST,
        Verdict::Excellent => EXCELLENT_CHECKLIST,
    };
    items.iter().map(|s| s.to_string()).collect()
}

fn years(n: u32) -> String {
    if n == 1 {
        "1 year".to_string()
    } else {
        format!("{n} years")
    }
}
