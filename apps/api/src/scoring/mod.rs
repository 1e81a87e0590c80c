// Scoring engine: résumé vs job requirement compatibility.
// Leaf matchers (lexical, semantic, experience, education) feed the aggregator,
// which owns weighting, bounding and rounding.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub mod aggregator;
pub mod education;
pub mod experience;
pub mod handlers;
pub mod lexical;
pub mod semantic;

pub use aggregator::{MatchResult, Scorer};
pub use education::EducationMatch;

/// Which skill matcher produced a result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    #[default]
    Lexical,
    Semantic,
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchMode::Lexical => write!(f, "lexical"),
            MatchMode::Semantic => write!(f, "semantic"),
        }
    }
}

impl FromStr for MatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lexical" => Ok(MatchMode::Lexical),
            "semantic" => Ok(MatchMode::Semantic),
            other => Err(format!("unknown scoring mode '{other}' (expected lexical or semantic)")),
        }
    }
}

/// Absorbs binary representation error so exact decimal halves round up.
const ROUNDING_NUDGE: f64 = 1e-7;

/// Rounds to two decimals, halves away from zero.
///
/// Scores are ratios of small integers scaled by the weights, so a value such as
/// 30.625 may arrive as 30.624999999999996. The nudge is far below a hundredth
/// and only tips such values over the half-way mark.
pub fn round2(value: f64) -> f64 {
    let scaled = value * 100.0;
    (scaled + ROUNDING_NUDGE.copysign(scaled)).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2_half_away_from_zero() {
        assert_eq!(round2(63.333_333), 63.33);
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(-0.125), -0.13);
    }

    #[test]
    fn test_round2_exact_half_with_binary_error() {
        let skills = 23.0 / 40.0 * 50.0;
        let experience = 1.0 / 16.0 * 30.0;
        assert_eq!(round2(skills + experience), 30.63);
        assert_eq!(round2(1.875), 1.88);
        assert_eq!(round2(0.0), 0.0);
        assert_eq!(round2(100.0), 100.0);
    }

    #[test]
    fn test_mode_parses_case_insensitively() {
        assert_eq!("SEMANTIC".parse::<MatchMode>().unwrap(), MatchMode::Semantic);
        assert_eq!(" lexical ".parse::<MatchMode>().unwrap(), MatchMode::Lexical);
        assert!("fuzzy".parse::<MatchMode>().is_err());
    }

    #[test]
    fn test_mode_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&MatchMode::Semantic).unwrap(), r#""semantic""#);
    }
}
