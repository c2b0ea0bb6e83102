//! Ward-linkage agglomerative clustering
//!
//! Bottom-up merging with the Lance-Williams recurrence applied to
//! squared Euclidean distances. Ties break toward the smallest pair of
//! cluster indices, so the result is fully deterministic for a given
//! input ordering.

use crate::errors::{HealthPathError, Result};

/// Cluster `points` down to `k` groups, returning one label per point.
///
/// Labels are compacted to 0..k in order of each cluster's smallest
/// member index.
pub fn ward_labels(points: &[Vec<f64>], k: usize) -> Result<Vec<usize>> {
    let n = points.len();
    if k == 0 {
        return Err(HealthPathError::Generic("k must be at least 1".to_string()));
    }
    if n < k {
        return Err(HealthPathError::TooFewRows {
            requested: k,
            rows: n,
        });
    }

    // Squared Euclidean distance matrix between singleton clusters
    let mut dist = vec![vec![0.0f64; n]; n];
    for i in 0..n {
        for j in (i + 1)..n {
            let d2 = squared_distance(&points[i], &points[j]);
            dist[i][j] = d2;
            dist[j][i] = d2;
        }
    }

    let mut active: Vec<bool> = vec![true; n];
    let mut sizes: Vec<f64> = vec![1.0; n];
    let mut members: Vec<Vec<usize>> = (0..n).map(|i| vec![i]).collect();
    let mut remaining = n;

    while remaining > k {
        // Closest active pair, smallest indices on ties
        let mut best: Option<(usize, usize, f64)> = None;
        for i in 0..n {
            if !active[i] {
                continue;
            }
            for j in (i + 1)..n {
                if !active[j] {
                    continue;
                }
                let d = dist[i][j];
                if best.map_or(true, |(_, _, bd)| d < bd) {
                    best = Some((i, j, d));
                }
            }
        }

        let (i, j, dij) = best.ok_or_else(|| {
            HealthPathError::Generic("no mergeable clusters left".to_string())
        })?;

        let (ni, nj) = (sizes[i], sizes[j]);

        // Lance-Williams update for Ward on squared distances
        for h in 0..n {
            if !active[h] || h == i || h == j {
                continue;
            }
            let nh = sizes[h];
            let updated = ((ni + nh) * dist[i][h] + (nj + nh) * dist[j][h] - nh * dij)
                / (ni + nj + nh);
            dist[i][h] = updated;
            dist[h][i] = updated;
        }

        sizes[i] += sizes[j];
        active[j] = false;
        let absorbed = std::mem::take(&mut members[j]);
        members[i].extend(absorbed);
        remaining -= 1;
    }

    // Compact labels in order of smallest member index
    let mut clusters: Vec<&Vec<usize>> = (0..n)
        .filter(|&i| active[i])
        .map(|i| &members[i])
        .collect();
    clusters.sort_by_key(|m| m.iter().copied().min().unwrap_or(usize::MAX));

    let mut labels = vec![0usize; n];
    for (label, cluster) in clusters.iter().enumerate() {
        for &point in cluster.iter() {
            labels[point] = label;
        }
    }

    Ok(labels)
}

fn squared_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blob(center: (f64, f64), offsets: &[(f64, f64)]) -> Vec<Vec<f64>> {
        offsets
            .iter()
            .map(|(dx, dy)| vec![center.0 + dx, center.1 + dy])
            .collect()
    }

    #[test]
    fn test_two_blobs_separate() {
        let offsets = [(0.0, 0.0), (0.1, 0.0), (0.0, 0.1), (-0.1, -0.1)];
        let mut points = blob((0.0, 0.0), &offsets);
        points.extend(blob((10.0, 10.0), &offsets));

        let labels = ward_labels(&points, 2).unwrap();
        assert_eq!(labels[..4], [0, 0, 0, 0]);
        assert_eq!(labels[4..], [1, 1, 1, 1]);
    }

    #[test]
    fn test_four_blobs_separate() {
        let offsets = [(0.0, 0.0), (0.2, -0.1), (-0.1, 0.2)];
        let centers = [(0.0, 0.0), (8.0, 0.0), (0.0, 8.0), (8.0, 8.0)];
        let mut points = Vec::new();
        for center in centers {
            points.extend(blob(center, &offsets));
        }

        let labels = ward_labels(&points, 4).unwrap();
        for group in 0..4 {
            let slice = &labels[group * 3..group * 3 + 3];
            assert!(slice.iter().all(|&l| l == slice[0]));
        }
        // All four labels used
        let mut seen = labels.clone();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_deterministic() {
        let points: Vec<Vec<f64>> = (0..20)
            .map(|i| vec![(i % 5) as f64 * 3.0, (i / 5) as f64 * 2.0])
            .collect();
        let a = ward_labels(&points, 4).unwrap();
        let b = ward_labels(&points, 4).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_k_equals_n() {
        let points = vec![vec![0.0], vec![1.0], vec![2.0]];
        let labels = ward_labels(&points, 3).unwrap();
        assert_eq!(labels, vec![0, 1, 2]);
    }

    #[test]
    fn test_too_few_rows() {
        let points = vec![vec![0.0], vec![1.0]];
        assert!(matches!(
            ward_labels(&points, 4),
            Err(crate::errors::HealthPathError::TooFewRows { .. })
        ));
    }
}
