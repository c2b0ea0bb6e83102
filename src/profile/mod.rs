//! User health profile types and validation
//!
//! A `HealthProfile` is immutable once submitted for classification.
//! Numeric fields are validated hard (finite, non-negative where it
//! matters); soft range oddities become warnings and the profile is
//! still classified, matching the assistant's forgiving intake.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::errors::{HealthPathError, Result};

/// Chronic condition reported by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ChronicCondition {
    #[default]
    None,
    Diabetes,
    HeartDisease,
    Hypertension,
    Other,
}

/// Typical diet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DietType {
    #[default]
    Balanced,
    Vegan,
    Vegetarian,
    HighProtein,
    FastFood,
}

/// Smoking habit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SmokingHabit {
    #[default]
    NonSmoker,
    Occasional,
    Regular,
}

/// Menstrual cycle regularity ("none" when not applicable)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "kebab-case")]
pub enum MenstrualRegularity {
    #[default]
    Regular,
    Irregular,
    None,
}

/// Self-reported daily stress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StressLevel {
    Low,
    #[default]
    Medium,
    High,
}

/// Screen/technology engagement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TechEngagement {
    Low,
    #[default]
    Medium,
    High,
}

impl ChronicCondition {
    /// String form used in the dataset CSV
    pub fn dataset_value(&self) -> &'static str {
        match self {
            ChronicCondition::None => "None",
            ChronicCondition::Diabetes => "Diabetes",
            ChronicCondition::HeartDisease => "Heart Disease",
            ChronicCondition::Hypertension => "Hypertension",
            ChronicCondition::Other => "Other",
        }
    }
}

impl DietType {
    pub fn dataset_value(&self) -> &'static str {
        match self {
            DietType::Balanced => "Balanced",
            DietType::Vegan => "Vegan",
            DietType::Vegetarian => "Vegetarian",
            DietType::HighProtein => "High-Protein",
            DietType::FastFood => "Fast-Food",
        }
    }
}

impl SmokingHabit {
    pub fn dataset_value(&self) -> &'static str {
        match self {
            SmokingHabit::NonSmoker => "Non-Smoker",
            SmokingHabit::Occasional => "Occasional",
            SmokingHabit::Regular => "Regular",
        }
    }
}

impl MenstrualRegularity {
    pub fn dataset_value(&self) -> &'static str {
        match self {
            MenstrualRegularity::Regular => "Regular",
            MenstrualRegularity::Irregular => "Irregular",
            MenstrualRegularity::None => "None",
        }
    }
}

impl StressLevel {
    pub fn dataset_value(&self) -> &'static str {
        match self {
            StressLevel::Low => "Low",
            StressLevel::Medium => "Medium",
            StressLevel::High => "High",
        }
    }

    /// High or medium stress triggers the stress-management tips
    pub fn is_elevated(&self) -> bool {
        matches!(self, StressLevel::Medium | StressLevel::High)
    }
}

impl TechEngagement {
    pub fn dataset_value(&self) -> &'static str {
        match self {
            TechEngagement::Low => "Low",
            TechEngagement::Medium => "Medium",
            TechEngagement::High => "High",
        }
    }
}

/// One user's health metrics, immutable once submitted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthProfile {
    pub name: Option<String>,
    pub age: f64,
    pub bmi: f64,
    pub physical_activity_hours: f64,
    pub mental_health_score: f64,
    pub sleep_hours: f64,
    pub alcohol_per_week: f64,
    pub chronic_condition: ChronicCondition,
    pub diet_type: DietType,
    pub smoking_habit: SmokingHabit,
    pub menstrual_regularity: MenstrualRegularity,
    pub stress_level: StressLevel,
    pub tech_engagement: TechEngagement,
}

impl Default for HealthProfile {
    fn default() -> Self {
        HealthProfile {
            name: None,
            age: 30.0,
            bmi: 24.0,
            physical_activity_hours: 3.0,
            mental_health_score: 6.0,
            sleep_hours: 7.0,
            alcohol_per_week: 0.0,
            chronic_condition: ChronicCondition::default(),
            diet_type: DietType::default(),
            smoking_habit: SmokingHabit::default(),
            menstrual_regularity: MenstrualRegularity::default(),
            stress_level: StressLevel::default(),
            tech_engagement: TechEngagement::default(),
        }
    }
}

impl HealthProfile {
    /// Display name, falling back to a generic greeting target
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("there")
    }

    /// Numeric features in dataset column order
    pub fn numeric_features(&self) -> [f64; 6] {
        [
            self.age,
            self.bmi,
            self.physical_activity_hours,
            self.mental_health_score,
            self.sleep_hours,
            self.alcohol_per_week,
        ]
    }

    /// Hard validation: rejects non-finite or structurally impossible
    /// values. Returns soft warnings for values that look off but can
    /// still be classified.
    pub fn validate(&self) -> Result<Vec<String>> {
        let numeric = [
            ("age", self.age),
            ("bmi", self.bmi),
            ("physical_activity_hours", self.physical_activity_hours),
            ("mental_health_score", self.mental_health_score),
            ("sleep_hours", self.sleep_hours),
            ("alcohol_per_week", self.alcohol_per_week),
        ];

        for (field, value) in numeric {
            if !value.is_finite() {
                return Err(HealthPathError::invalid_input(field, "must be a finite number"));
            }
        }
        if self.bmi <= 0.0 {
            return Err(HealthPathError::invalid_input("bmi", "must be positive"));
        }
        if self.age < 0.0 {
            return Err(HealthPathError::invalid_input("age", "cannot be negative"));
        }

        let mut warnings = Vec::new();
        if self.age > 120.0 {
            warnings.push("Age seems off (0-120 is typical). Still processing!".to_string());
        }
        if self.bmi > 60.0 {
            warnings.push("BMI looks unusual (0-60 is typical). Proceeding anyway!".to_string());
        }
        if self.sleep_hours < 0.0 || self.sleep_hours > 24.0 {
            warnings.push("Sleep hours seem odd (0-24 is typical). Moving forward!".to_string());
        }
        if self.physical_activity_hours < 0.0 {
            warnings.push("Physical activity hours look negative. Still processing!".to_string());
        }
        if self.mental_health_score < 1.0 || self.mental_health_score > 10.0 {
            warnings.push("Mental health score should be 1-10. Proceeding anyway!".to_string());
        }

        Ok(warnings)
    }

    /// Compact single-line summary used in prompts and chat replies
    pub fn summary(&self) -> String {
        format!(
            "User: {}, Age: {:.0}, BMI: {:.1}, Sleep: {:.1} hours, Condition: {}, \
             Exercise: {:.1} hours/week, Stress: {}, Mental Health Score: {:.0}/10, Diet: {}",
            self.display_name(),
            self.age,
            self.bmi,
            self.sleep_hours,
            self.chronic_condition.dataset_value(),
            self.physical_activity_hours,
            self.stress_level.dataset_value(),
            self.mental_health_score,
            self.diet_type.dataset_value(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_is_valid() {
        let profile = HealthProfile::default();
        let warnings = profile.validate().unwrap();
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_non_finite_rejected() {
        let profile = HealthProfile {
            bmi: f64::NAN,
            ..HealthProfile::default()
        };
        let err = profile.validate().unwrap_err();
        assert!(err.to_string().contains("bmi"));
    }

    #[test]
    fn test_soft_ranges_warn_but_pass() {
        let profile = HealthProfile {
            age: 130.0,
            sleep_hours: 30.0,
            ..HealthProfile::default()
        };
        let warnings = profile.validate().unwrap();
        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn test_negative_age_rejected() {
        let profile = HealthProfile {
            age: -1.0,
            ..HealthProfile::default()
        };
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_summary_mentions_key_fields() {
        let profile = HealthProfile {
            name: Some("Avery".to_string()),
            ..HealthProfile::default()
        };
        let summary = profile.summary();
        assert!(summary.contains("Avery"));
        assert!(summary.contains("BMI"));
    }
}
