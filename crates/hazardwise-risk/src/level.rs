//! Likelihood and severity scales.
//!
//! Both are ordinal 1..=5 scales. Forms store the human readable label, so
//! each scale parses the labels the application has used over time:
//!
//! | Level | Likelihood                | Severity                  |
//! |-------|---------------------------|---------------------------|
//! | 1     | Rare / Very Low           | Minor / Negligible        |
//! | 2     | Unlikely / Low            | Significant               |
//! | 3     | Possible / Medium         | Considerable / Moderate   |
//! | 4     | Likely / High             | Major                     |
//! | 5     | Almost Certain / Very High| Catastrophic              |

use std::fmt;
use std::str::FromStr;

use hazardwise_core::HazardwiseError;
use serde::{Deserialize, Serialize};

/// Validate a raw level and convert it to a 0-based matrix index.
pub(crate) fn level_index(field: &str, level: u8) -> Result<usize, HazardwiseError> {
    if (1..=5).contains(&level) {
        Ok(usize::from(level - 1))
    } else {
        Err(HazardwiseError::invalid_input(
            field,
            format!("must be an integer from 1 to 5, got {level}"),
        ))
    }
}

/// Validate an untyped numeric level (e.g. a JSON number from a form).
pub(crate) fn numeric_level(field: &str, value: f64) -> Result<u8, HazardwiseError> {
    if value.is_finite() && value.fract() == 0.0 && (1.0..=5.0).contains(&value) {
        // Range checked above, so the cast is exact.
        Ok(value as u8)
    } else {
        Err(HazardwiseError::invalid_input(
            field,
            format!("must be an integer from 1 to 5, got {value}"),
        ))
    }
}

fn normalize_label(label: &str) -> String {
    label
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_ascii_lowercase()
}

/// How likely a hazard is to lead to the impact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Likelihood {
    /// Exceptional circumstances only.
    #[serde(rename = "Rare")]
    Rare = 1,
    /// Rare but possible.
    #[serde(rename = "Unlikely")]
    Unlikely = 2,
    /// Could occur but uncommon.
    #[serde(rename = "Possible")]
    Possible = 3,
    /// Will probably occur occasionally.
    #[serde(rename = "Likely")]
    Likely = 4,
    /// Expected to occur frequently.
    #[serde(rename = "Almost Certain")]
    AlmostCertain = 5,
}

impl Likelihood {
    /// All likelihoods in ascending order.
    pub const ALL: [Likelihood; 5] = [
        Self::Rare,
        Self::Unlikely,
        Self::Possible,
        Self::Likely,
        Self::AlmostCertain,
    ];

    /// Numeric level (1..=5).
    #[must_use]
    pub fn level(self) -> u8 {
        self as u8
    }

    /// Label stored in hazard log records.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Rare => "Rare",
            Self::Unlikely => "Unlikely",
            Self::Possible => "Possible",
            Self::Likely => "Likely",
            Self::AlmostCertain => "Almost Certain",
        }
    }

    /// Matrix axis label (Very Low..Very High).
    #[must_use]
    pub fn axis_label(self) -> &'static str {
        match self {
            Self::Rare => "Very Low",
            Self::Unlikely => "Low",
            Self::Possible => "Medium",
            Self::Likely => "High",
            Self::AlmostCertain => "Very High",
        }
    }

    /// Guidance text shown next to the option.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Rare => "Exceptional circumstances only",
            Self::Unlikely => "Rare but possible",
            Self::Possible => "Could occur but uncommon",
            Self::Likely => "Will probably occur occasionally",
            Self::AlmostCertain => "Expected to occur frequently",
        }
    }

    /// Parse a label; `None` for unknown labels.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match normalize_label(label).as_str() {
            "rare" | "very low" => Some(Self::Rare),
            "unlikely" | "low" => Some(Self::Unlikely),
            "possible" | "medium" => Some(Self::Possible),
            "likely" | "high" => Some(Self::Likely),
            "almost certain" | "very high" => Some(Self::AlmostCertain),
            _ => None,
        }
    }
}

impl TryFrom<u8> for Likelihood {
    type Error = HazardwiseError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        level_index("likelihood", level).map(|i| Self::ALL[i])
    }
}

impl FromStr for Likelihood {
    type Err = HazardwiseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| {
            HazardwiseError::invalid_input("likelihood", format!("unknown likelihood '{s}'"))
        })
    }
}

impl fmt::Display for Likelihood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How much harm the impact causes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    /// No significant harm.
    #[serde(rename = "Minor")]
    Minor = 1,
    /// Minimal harm, may require monitoring.
    #[serde(rename = "Significant")]
    Significant = 2,
    /// Short-term harm requiring intervention.
    #[serde(rename = "Considerable")]
    Considerable = 3,
    /// Temporary major harm or permanent minor harm.
    #[serde(rename = "Major")]
    Major = 4,
    /// Death or permanent major harm.
    #[serde(rename = "Catastrophic")]
    Catastrophic = 5,
}

impl Severity {
    /// All severities in ascending order.
    pub const ALL: [Severity; 5] = [
        Self::Minor,
        Self::Significant,
        Self::Considerable,
        Self::Major,
        Self::Catastrophic,
    ];

    /// Numeric level (1..=5).
    #[must_use]
    pub fn level(self) -> u8 {
        self as u8
    }

    /// Label stored in hazard log records and used on the matrix axis.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Minor => "Minor",
            Self::Significant => "Significant",
            Self::Considerable => "Considerable",
            Self::Major => "Major",
            Self::Catastrophic => "Catastrophic",
        }
    }

    /// Guidance text shown next to the option.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Minor => "No significant harm",
            Self::Significant => "Minimal harm, may require monitoring",
            Self::Considerable => "Short-term harm requiring intervention",
            Self::Major => "Temporary major harm or permanent minor harm",
            Self::Catastrophic => "Death or permanent major harm",
        }
    }

    /// Parse a label; `None` for unknown labels.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match normalize_label(label).as_str() {
            "minor" | "negligible" => Some(Self::Minor),
            "significant" => Some(Self::Significant),
            "considerable" | "moderate" => Some(Self::Considerable),
            "major" => Some(Self::Major),
            "catastrophic" => Some(Self::Catastrophic),
            _ => None,
        }
    }
}

impl TryFrom<u8> for Severity {
    type Error = HazardwiseError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        level_index("severity", level).map(|i| Self::ALL[i])
    }
}

impl FromStr for Severity {
    type Err = HazardwiseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| {
            HazardwiseError::invalid_input("severity", format!("unknown severity '{s}'"))
        })
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_ascend() {
        for (i, l) in Likelihood::ALL.iter().enumerate() {
            assert_eq!(usize::from(l.level()), i + 1);
        }
        for (i, s) in Severity::ALL.iter().enumerate() {
            assert_eq!(usize::from(s.level()), i + 1);
        }
    }

    #[test]
    fn test_likelihood_label_sets() {
        assert_eq!(Likelihood::from_label("Almost Certain"), Some(Likelihood::AlmostCertain));
        assert_eq!(Likelihood::from_label("Very High"), Some(Likelihood::AlmostCertain));
        assert_eq!(Likelihood::from_label("rare"), Some(Likelihood::Rare));
        assert_eq!(Likelihood::from_label("  very   low "), Some(Likelihood::Rare));
        assert_eq!(Likelihood::from_label("Medium"), Some(Likelihood::Possible));
        assert_eq!(Likelihood::from_label("Sometimes"), None);
        assert_eq!(Likelihood::from_label(""), None);
    }

    #[test]
    fn test_severity_label_sets() {
        assert_eq!(Severity::from_label("Catastrophic"), Some(Severity::Catastrophic));
        assert_eq!(Severity::from_label("Significant"), Some(Severity::Significant));
        assert_eq!(Severity::from_label("Considerable"), Some(Severity::Considerable));
        assert_eq!(Severity::from_label("Moderate"), Some(Severity::Considerable));
        assert_eq!(Severity::from_label("Negligible"), Some(Severity::Minor));
        assert_eq!(Severity::from_label("MAJOR"), Some(Severity::Major));
        assert_eq!(Severity::from_label("Fatal"), None);
    }

    #[test]
    fn test_from_str_errors_are_invalid_input() {
        let err = "Fatal".parse::<Severity>().unwrap_err();
        assert!(err.is_invalid_input());
        let err = "Never".parse::<Likelihood>().unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!("Likely".parse::<Likelihood>().unwrap(), Likelihood::Likely);
    }

    #[test]
    fn test_try_from_u8_bounds() {
        assert_eq!(Likelihood::try_from(1).unwrap(), Likelihood::Rare);
        assert_eq!(Severity::try_from(5).unwrap(), Severity::Catastrophic);
        assert!(Likelihood::try_from(0).is_err());
        assert!(Severity::try_from(6).is_err());
    }

    #[test]
    fn test_numeric_level_rejects_fractions() {
        assert_eq!(numeric_level("likelihood", 3.0).unwrap(), 3);
        assert!(numeric_level("likelihood", 2.5).is_err());
        assert!(numeric_level("likelihood", f64::NAN).is_err());
        assert!(numeric_level("severity", 0.0).is_err());
        assert!(numeric_level("severity", 6.0).is_err());
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&Likelihood::AlmostCertain).unwrap();
        assert_eq!(json, "\"Almost Certain\"");
        let back: Severity = serde_json::from_str("\"Major\"").unwrap();
        assert_eq!(back, Severity::Major);
    }
}
