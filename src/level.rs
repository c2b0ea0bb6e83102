//! Ordinal wellness tiers produced by the classifier
//!
//! Level 0 is the healthiest group, level 3 the most at risk. The
//! ordering matters: the advice layer and report copy key off it.

use serde::{Deserialize, Serialize};

/// One of the four wellness tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WellnessLevel {
    /// Top shape, minimal health worries
    Thriving = 0,
    /// Pretty good, minor tweaks needed
    Steady = 1,
    /// Managing challenges, room to improve
    Strained = 2,
    /// Bigger hurdles, needs active support
    Struggling = 3,
}

impl WellnessLevel {
    /// All levels in ascending-risk order
    pub const ALL: [WellnessLevel; 4] = [
        WellnessLevel::Thriving,
        WellnessLevel::Steady,
        WellnessLevel::Strained,
        WellnessLevel::Struggling,
    ];

    /// Numeric group index (0 = healthiest)
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Short human label
    pub fn label(&self) -> &'static str {
        match self {
            WellnessLevel::Thriving => "Thriving",
            WellnessLevel::Steady => "Steady",
            WellnessLevel::Strained => "Strained",
            WellnessLevel::Struggling => "Struggling",
        }
    }

    /// One-line description shown in the report
    pub fn blurb(&self) -> &'static str {
        match self {
            WellnessLevel::Thriving => "Top shape with minimal health worries.",
            WellnessLevel::Steady => "Doing well overall, with minor tweaks needed.",
            WellnessLevel::Strained => "Managing some challenges, with room to improve.",
            WellnessLevel::Struggling => "Facing bigger hurdles that deserve active support.",
        }
    }
}

impl TryFrom<usize> for WellnessLevel {
    type Error = crate::errors::HealthPathError;

    fn try_from(value: usize) -> std::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(WellnessLevel::Thriving),
            1 => Ok(WellnessLevel::Steady),
            2 => Ok(WellnessLevel::Strained),
            3 => Ok(WellnessLevel::Struggling),
            other => Err(crate::errors::HealthPathError::Generic(format!(
                "wellness level out of range: {}",
                other
            ))),
        }
    }
}

impl std::fmt::Display for WellnessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Group {} ({})", self.index(), self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinal_ordering() {
        assert!(WellnessLevel::Thriving < WellnessLevel::Struggling);
        assert_eq!(WellnessLevel::Steady.index(), 1);
    }

    #[test]
    fn test_try_from_round_trip() {
        for level in WellnessLevel::ALL {
            assert_eq!(WellnessLevel::try_from(level.index()).unwrap(), level);
        }
        assert!(WellnessLevel::try_from(4).is_err());
    }

    #[test]
    fn test_blurbs_non_empty() {
        for level in WellnessLevel::ALL {
            assert!(!level.blurb().is_empty());
            assert!(!level.label().is_empty());
        }
    }
}
