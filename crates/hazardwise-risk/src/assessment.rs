//! Clinical risk assessment using the DCB0129/DCB0160 5x5 risk matrix.
//!
//! The matrix maps a (likelihood, severity) pair to a score from 1 to 5.
//! The score then selects a rating label and a policy definition.
//!
//! # Example
//!
//! ```
//! use hazardwise_risk::assessment::{assess, RiskRating};
//!
//! let result = assess(4, 4).unwrap();
//! assert_eq!(result.score, 4);
//! assert_eq!(result.rating, RiskRating::UnacceptableWithoutFurtherMitigation);
//! ```

use std::fmt;

use hazardwise_core::Result;
use serde::{Deserialize, Serialize};

use crate::level::{level_index, numeric_level, Likelihood, Severity};

/// Risk matrix indexed `[likelihood - 1][severity - 1]`.
///
/// Rows are likelihood Very Low..Very High, columns severity
/// Minor..Catastrophic. Non-decreasing along both axes.
pub const RISK_MATRIX: [[u8; 5]; 5] = [
    [1, 1, 2, 2, 3],
    [1, 2, 2, 3, 4],
    [2, 2, 3, 3, 4],
    [2, 3, 3, 4, 5],
    [3, 4, 4, 5, 5],
];

/// Policy definitions indexed by `score - 1`.
const DEFINITIONS: [&str; 5] = [
    "Acceptable, no further action required.",
    "Acceptable where cost of further reduction outweighs benefits gained.",
    "Undesirable level of risk: attempts should be made to eliminate or control to reduce risk to an acceptable level; shall only be acceptable when further risk reduction is impractical.",
    "Mandatory elimination or control to reduce risk to an acceptable level.",
    "Unacceptable level of risk.",
];

/// Ratings indexed by `score - 1`.
const RATINGS: [RiskRating; 5] = [
    RiskRating::Acceptable,
    RiskRating::Acceptable,
    RiskRating::Undesirable,
    RiskRating::UnacceptableWithoutFurtherMitigation,
    RiskRating::Unacceptable,
];

/// Fallback colour for anything that is not a known rating.
pub const UNRATED_COLOR: &str = "#6c757d";

/// Categorical label derived from a risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskRating {
    /// Scores 1 and 2.
    #[serde(rename = "Acceptable")]
    Acceptable,
    /// Score 3.
    #[serde(rename = "Undesirable")]
    Undesirable,
    /// Score 4.
    #[serde(rename = "Unacceptable Without Further Mitigation")]
    UnacceptableWithoutFurtherMitigation,
    /// Score 5.
    #[serde(rename = "Unacceptable")]
    Unacceptable,
}

impl RiskRating {
    /// Rating for a score in 1..=5. Scores outside the range have no rating.
    #[must_use]
    pub fn from_score(score: u8) -> Option<Self> {
        let index = usize::from(score).checked_sub(1)?;
        RATINGS.get(index).copied()
    }

    /// Human readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Acceptable => "Acceptable",
            Self::Undesirable => "Undesirable",
            Self::UnacceptableWithoutFurtherMitigation => {
                "Unacceptable Without Further Mitigation"
            }
            Self::Unacceptable => "Unacceptable",
        }
    }

    /// Parse a rating label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Acceptable" => Some(Self::Acceptable),
            "Undesirable" => Some(Self::Undesirable),
            "Unacceptable Without Further Mitigation" => {
                Some(Self::UnacceptableWithoutFurtherMitigation)
            }
            "Unacceptable" => Some(Self::Unacceptable),
            _ => None,
        }
    }

    /// Traffic-light colour: green, yellow or red.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Acceptable => "#28a745",
            Self::Undesirable => "#ffc107",
            Self::UnacceptableWithoutFurtherMitigation | Self::Unacceptable => "#dc3545",
        }
    }
}

impl fmt::Display for RiskRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Colour for a free-text rating label; grey for anything unrecognised.
#[must_use]
pub fn rating_color(label: &str) -> &'static str {
    RiskRating::from_label(label).map_or(UNRATED_COLOR, RiskRating::color)
}

/// Result of a single assessment. Created fresh on every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskResult {
    /// Matrix score (1..=5).
    pub score: u8,
    /// Rating derived from the score.
    pub rating: RiskRating,
    /// Policy definition derived from the score.
    pub definition: &'static str,
}

impl RiskResult {
    // Only called with scores read from RISK_MATRIX.
    fn from_score(score: u8) -> Self {
        let index = usize::from(score - 1);
        Self {
            score,
            rating: RATINGS[index],
            definition: DEFINITIONS[index],
        }
    }
}

/// Assess a likelihood/severity pair given as integers 1..=5.
///
/// # Errors
///
/// Returns `InvalidInput` when either level is outside 1..=5.
pub fn assess(likelihood: u8, severity: u8) -> Result<RiskResult> {
    let row = level_index("likelihood", likelihood)?;
    let col = level_index("severity", severity)?;
    Ok(RiskResult::from_score(RISK_MATRIX[row][col]))
}

/// Assess untyped numeric levels, e.g. numbers decoded from JSON.
///
/// # Errors
///
/// Returns `InvalidInput` for non-integers, non-finite values and values
/// outside 1..=5.
pub fn assess_numeric(likelihood: f64, severity: f64) -> Result<RiskResult> {
    let likelihood = numeric_level("likelihood", likelihood)?;
    let severity = numeric_level("severity", severity)?;
    assess(likelihood, severity)
}

/// Assess already validated levels. Infallible.
#[must_use]
pub fn assess_levels(likelihood: Likelihood, severity: Severity) -> RiskResult {
    let row = usize::from(likelihood.level() - 1);
    let col = usize::from(severity.level() - 1);
    RiskResult::from_score(RISK_MATRIX[row][col])
}

/// Assess free-text labels from a partially filled form.
///
/// Returns `None` when either label is missing or unrecognised.
#[must_use]
pub fn assess_by_label(severity: Option<&str>, likelihood: Option<&str>) -> Option<RiskResult> {
    let severity = Severity::from_label(severity?)?;
    let likelihood = Likelihood::from_label(likelihood?)?;
    Some(assess_levels(likelihood, severity))
}

/// One cell of the printable matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatrixCell {
    pub likelihood: Likelihood,
    pub severity: Severity,
    pub score: u8,
    pub rating: RiskRating,
}

/// The whole matrix as rows ordered from the highest likelihood down,
/// which is how it is printed on a safety case.
#[must_use]
pub fn risk_matrix() -> Vec<Vec<MatrixCell>> {
    Likelihood::ALL
        .iter()
        .rev()
        .map(|&likelihood| {
            Severity::ALL
                .iter()
                .map(|&severity| {
                    let result = assess_levels(likelihood, severity);
                    MatrixCell {
                        likelihood,
                        severity,
                        score: result.score,
                        rating: result.rating,
                    }
                })
                .collect()
        })
        .collect()
}
