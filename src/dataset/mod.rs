//! Synthetic health dataset loading and preprocessing
//!
//! Mirrors the assistant's training data layout: six numeric columns
//! standardized to zero mean / unit variance, six categorical columns
//! label-encoded. The fitted `Preprocessor` is reused verbatim for user
//! profiles so a profile row is always comparable to the dataset rows.

pub mod synthetic;

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{HealthPathError, Result};
use crate::profile::HealthProfile;

/// Feature-vector column indices, fixed across the crate
pub const IDX_AGE: usize = 0;
pub const IDX_BMI: usize = 1;
pub const IDX_ACTIVITY: usize = 2;
pub const IDX_CHRONIC: usize = 3;
pub const IDX_MENTAL: usize = 4;
pub const IDX_SLEEP: usize = 5;
pub const IDX_DIET: usize = 6;
pub const IDX_SMOKING: usize = 7;
pub const IDX_ALCOHOL: usize = 8;
pub const IDX_MENSTRUAL: usize = 9;
pub const IDX_STRESS: usize = 10;
pub const IDX_TECH: usize = 11;

/// Width of one encoded feature row
pub const FEATURE_WIDTH: usize = 12;

/// One row of the synthetic health dataset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthRecord {
    #[serde(rename = "Age")]
    pub age: f64,
    #[serde(rename = "BMI")]
    pub bmi: f64,
    #[serde(rename = "Physical_Activity_Hours_Per_Week")]
    pub physical_activity_hours: f64,
    #[serde(rename = "Chronic_Condition")]
    pub chronic_condition: String,
    #[serde(rename = "Mental_Health_Score")]
    pub mental_health_score: f64,
    #[serde(rename = "Sleep_Hours_Per_Night")]
    pub sleep_hours: f64,
    #[serde(rename = "Diet_Type")]
    pub diet_type: String,
    #[serde(rename = "Smoking_Habit")]
    pub smoking_habit: String,
    #[serde(rename = "Alcohol_Consumption_Per_Week")]
    pub alcohol_per_week: f64,
    #[serde(rename = "Menstrual_Cycle_Regularity")]
    pub menstrual_regularity: String,
    #[serde(rename = "Stress_Level")]
    pub stress_level: String,
    #[serde(rename = "Tech_Engagement")]
    pub tech_engagement: String,
}

/// In-memory dataset, loaded once at startup
#[derive(Debug, Clone)]
pub struct HealthDataset {
    records: Vec<HealthRecord>,
}

impl HealthDataset {
    /// Load records from a CSV file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(HealthPathError::Dataset {
                path: path.display().to_string(),
                reason: "file not found; run `healthpath generate-data` to create one".to_string(),
            });
        }

        let mut reader = csv::Reader::from_path(path)?;
        let mut records = Vec::new();
        for row in reader.deserialize() {
            let record: HealthRecord = row?;
            records.push(record);
        }

        if records.is_empty() {
            return Err(HealthPathError::Dataset {
                path: path.display().to_string(),
                reason: "dataset contains no rows".to_string(),
            });
        }

        Ok(HealthDataset { records })
    }

    /// Build a dataset from already-parsed records (tests, fixtures)
    pub fn from_records(records: Vec<HealthRecord>) -> Self {
        HealthDataset { records }
    }

    pub fn records(&self) -> &[HealthRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Categorical string → f64 code, classes held sorted
///
/// Unknown values encode to 0, the same forgiving behavior the intake
/// form applies to free-text categoricals.
#[derive(Debug, Clone)]
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    /// Fit on observed values; "None" is always a known class
    pub fn fit<'a>(values: impl IntoIterator<Item = &'a str>) -> Self {
        let mut unique: BTreeSet<String> = values.into_iter().map(str::to_string).collect();
        unique.insert("None".to_string());
        LabelEncoder {
            classes: unique.into_iter().collect(),
        }
    }

    /// Build with a fixed class order (used for ordinal categories)
    pub fn with_classes(classes: &[&str]) -> Self {
        LabelEncoder {
            classes: classes.iter().map(|c| c.to_string()).collect(),
        }
    }

    pub fn transform(&self, value: &str) -> f64 {
        self.classes
            .iter()
            .position(|c| c == value)
            .map(|p| p as f64)
            .unwrap_or(0.0)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}

/// Per-column standardization fitted on the dataset numerics
#[derive(Debug, Clone)]
pub struct StandardScaler {
    means: Vec<f64>,
    stds: Vec<f64>,
}

impl StandardScaler {
    /// Fit mean and population std per column
    pub fn fit(columns: &[Vec<f64>]) -> Self {
        let mut means = Vec::with_capacity(columns.len());
        let mut stds = Vec::with_capacity(columns.len());

        for column in columns {
            let n = column.len().max(1) as f64;
            let mean = column.iter().sum::<f64>() / n;
            let variance = column.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
            means.push(mean);
            stds.push(variance.sqrt());
        }

        StandardScaler { means, stds }
    }

    /// Scale one value with the fitted column statistics.
    ///
    /// A zero-variance column carries no information, so every value in
    /// it scales to 0.0. Dividing by a stand-in std instead would let an
    /// off-mean user value dominate the distance computation.
    pub fn transform(&self, column: usize, value: f64) -> f64 {
        let std = self.stds[column];
        if std <= f64::EPSILON {
            return 0.0;
        }
        (value - self.means[column]) / std
    }
}

/// Fitted encoders + scaler; the bridge between raw rows and the
/// clustering feature space
#[derive(Debug, Clone)]
pub struct Preprocessor {
    scaler: StandardScaler,
    chronic: LabelEncoder,
    diet: LabelEncoder,
    smoking: LabelEncoder,
    menstrual: LabelEncoder,
    stress: LabelEncoder,
    tech: LabelEncoder,
}

impl Preprocessor {
    /// Fit scaler and encoders on the dataset
    ///
    /// Stress and tech engagement are naturally ordered, so they get a
    /// fixed Low < Medium < High encoding instead of alphabetical codes.
    pub fn fit(dataset: &HealthDataset) -> Self {
        let records = dataset.records();
        let numeric_columns: Vec<Vec<f64>> = vec![
            records.iter().map(|r| r.age).collect(),
            records.iter().map(|r| r.bmi).collect(),
            records.iter().map(|r| r.physical_activity_hours).collect(),
            records.iter().map(|r| r.mental_health_score).collect(),
            records.iter().map(|r| r.sleep_hours).collect(),
            records.iter().map(|r| r.alcohol_per_week).collect(),
        ];

        Preprocessor {
            scaler: StandardScaler::fit(&numeric_columns),
            chronic: LabelEncoder::fit(records.iter().map(|r| r.chronic_condition.as_str())),
            diet: LabelEncoder::fit(records.iter().map(|r| r.diet_type.as_str())),
            smoking: LabelEncoder::fit(records.iter().map(|r| r.smoking_habit.as_str())),
            menstrual: LabelEncoder::fit(records.iter().map(|r| r.menstrual_regularity.as_str())),
            stress: LabelEncoder::with_classes(&["Low", "Medium", "High"]),
            tech: LabelEncoder::with_classes(&["Low", "Medium", "High"]),
        }
    }

    /// Encode one dataset record into the fixed feature layout
    pub fn encode_record(&self, record: &HealthRecord) -> [f64; FEATURE_WIDTH] {
        let mut row = [0.0; FEATURE_WIDTH];
        row[IDX_AGE] = self.scaler.transform(0, record.age);
        row[IDX_BMI] = self.scaler.transform(1, record.bmi);
        row[IDX_ACTIVITY] = self.scaler.transform(2, record.physical_activity_hours);
        row[IDX_CHRONIC] = self.chronic.transform(&record.chronic_condition);
        row[IDX_MENTAL] = self.scaler.transform(3, record.mental_health_score);
        row[IDX_SLEEP] = self.scaler.transform(4, record.sleep_hours);
        row[IDX_DIET] = self.diet.transform(&record.diet_type);
        row[IDX_SMOKING] = self.smoking.transform(&record.smoking_habit);
        row[IDX_ALCOHOL] = self.scaler.transform(5, record.alcohol_per_week);
        row[IDX_MENSTRUAL] = self.menstrual.transform(&record.menstrual_regularity);
        row[IDX_STRESS] = self.stress.transform(&record.stress_level);
        row[IDX_TECH] = self.tech.transform(&record.tech_engagement);
        row
    }

    /// Encode a user profile with the dataset-fitted scaler/encoders
    pub fn encode_profile(&self, profile: &HealthProfile) -> [f64; FEATURE_WIDTH] {
        let mut row = [0.0; FEATURE_WIDTH];
        row[IDX_AGE] = self.scaler.transform(0, profile.age);
        row[IDX_BMI] = self.scaler.transform(1, profile.bmi);
        row[IDX_ACTIVITY] = self.scaler.transform(2, profile.physical_activity_hours);
        row[IDX_CHRONIC] = self
            .chronic
            .transform(profile.chronic_condition.dataset_value());
        row[IDX_MENTAL] = self.scaler.transform(3, profile.mental_health_score);
        row[IDX_SLEEP] = self.scaler.transform(4, profile.sleep_hours);
        row[IDX_DIET] = self.diet.transform(profile.diet_type.dataset_value());
        row[IDX_SMOKING] = self.smoking.transform(profile.smoking_habit.dataset_value());
        row[IDX_ALCOHOL] = self.scaler.transform(5, profile.alcohol_per_week);
        row[IDX_MENSTRUAL] = self
            .menstrual
            .transform(profile.menstrual_regularity.dataset_value());
        row[IDX_STRESS] = self.stress.transform(profile.stress_level.dataset_value());
        row[IDX_TECH] = self.tech.transform(profile.tech_engagement.dataset_value());
        row
    }

    /// Encode the whole dataset
    pub fn encode_dataset(&self, dataset: &HealthDataset) -> Vec<[f64; FEATURE_WIDTH]> {
        dataset
            .records()
            .iter()
            .map(|r| self.encode_record(r))
            .collect()
    }
}
