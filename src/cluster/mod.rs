//! Wellness classifier: clustering plus ordinal tier mapping
//!
//! Fits Ward clustering over the preprocessed dataset, ranks the
//! resulting clusters by a centroid risk score, and classifies a user
//! by re-clustering the dataset with the user's row appended. The risk
//! ranking is recomputed on the combined clustering each time, so the
//! cluster-to-level mapping always matches the labels it is applied to.

pub mod ward;

use crate::dataset::{
    HealthDataset, Preprocessor, FEATURE_WIDTH, IDX_BMI, IDX_MENTAL, IDX_SLEEP, IDX_STRESS,
};
use crate::errors::Result;
use crate::level::WellnessLevel;
use crate::profile::HealthProfile;

/// Number of wellness tiers
pub const N_CLUSTERS: usize = 4;

/// Fitted classifier state
#[derive(Debug, Clone)]
pub struct WellnessModel {
    preprocessor: Preprocessor,
    base_rows: Vec<Vec<f64>>,
    base_levels: Vec<WellnessLevel>,
}

impl WellnessModel {
    /// Fit the model on a dataset: preprocess, cluster, rank clusters
    pub fn fit(dataset: &HealthDataset) -> Result<Self> {
        let preprocessor = Preprocessor::fit(dataset);
        let base_rows: Vec<Vec<f64>> = preprocessor
            .encode_dataset(dataset)
            .into_iter()
            .map(|row| row.to_vec())
            .collect();

        let labels = ward::ward_labels(&base_rows, N_CLUSTERS)?;
        let mapping = rank_clusters(&base_rows, &labels)?;
        let base_levels = labels.iter().map(|&l| mapping[l]).collect();

        Ok(WellnessModel {
            preprocessor,
            base_rows,
            base_levels,
        })
    }

    /// Classify one profile into a wellness tier
    ///
    /// Hard-invalid profiles fail before any clustering happens.
    /// Deterministic: the same model state and profile always produce
    /// the same level.
    pub fn classify(&self, profile: &HealthProfile) -> Result<WellnessLevel> {
        profile.validate()?;

        let user_row = self.preprocessor.encode_profile(profile).to_vec();
        let mut combined = self.base_rows.clone();
        combined.push(user_row);

        let labels = ward::ward_labels(&combined, N_CLUSTERS)?;
        let mapping = rank_clusters(&combined, &labels)?;
        let user_label = labels[labels.len() - 1];
        Ok(mapping[user_label])
    }

    /// Tier assigned to each dataset row during fitting
    pub fn base_levels(&self) -> &[WellnessLevel] {
        &self.base_levels
    }

    /// Dataset rows per tier, for the report footer
    pub fn level_counts(&self) -> [usize; N_CLUSTERS] {
        let mut counts = [0usize; N_CLUSTERS];
        for level in &self.base_levels {
            counts[level.index()] += 1;
        }
        counts
    }
}

/// Rank clusters by centroid risk and map each label to a tier.
///
/// Risk per centroid: bmi - sleep + stress - mental_health, all in the
/// scaled/encoded feature space. Lowest risk becomes level 0.
fn rank_clusters(points: &[Vec<f64>], labels: &[usize]) -> Result<Vec<WellnessLevel>> {
    let mut sums = vec![[0.0f64; FEATURE_WIDTH]; N_CLUSTERS];
    let mut counts = vec![0usize; N_CLUSTERS];

    for (point, &label) in points.iter().zip(labels.iter()) {
        counts[label] += 1;
        for (col, value) in point.iter().enumerate() {
            sums[label][col] += value;
        }
    }

    let mut risks: Vec<(usize, f64)> = (0..N_CLUSTERS)
        .map(|cluster| {
            let n = counts[cluster].max(1) as f64;
            let centroid = &sums[cluster];
            let risk = centroid[IDX_BMI] / n - centroid[IDX_SLEEP] / n
                + centroid[IDX_STRESS] / n
                - centroid[IDX_MENTAL] / n;
            (cluster, risk)
        })
        .collect();

    risks.sort_by(|a, b| {
        a.1.partial_cmp(&b.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.0.cmp(&b.0))
    });

    let mut mapping = vec![WellnessLevel::Thriving; N_CLUSTERS];
    for (rank, (cluster, _)) in risks.into_iter().enumerate() {
        mapping[cluster] = WellnessLevel::try_from(rank)?;
    }
    Ok(mapping)
}
