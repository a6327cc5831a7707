use super::eigen_pair::{FilteredEigenPairs, SortedEigenPairs};
use super::filter::{EigenFilterError, EigenPairFilter};

pub const DEFAULT_WALPHA: f64 = 1.1;

/// Splits the spectrum at its sharpest drop.
///
/// For every split point `i` the contrast is `λ_i` divided by the mean of the
/// eigenvalues after it. The split with the largest contrast wins (earliest on
/// ties) as long as that contrast reaches `walpha`; otherwise all eigenpairs
/// are strong. A positive eigenvalue over a tail mean that is not positive has
/// infinite contrast.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SignificantEigenPairFilter {
    walpha: f64,
}

impl SignificantEigenPairFilter {
    pub fn new(walpha: f64) -> Result<Self, EigenFilterError> {
        if !(walpha.is_finite() && walpha > 0.0) {
            return Err(EigenFilterError::InvalidParameter {
                name: "walpha",
                value: walpha,
                reason: "must be finite and positive",
            });
        }
        Ok(Self { walpha })
    }

    pub fn walpha(&self) -> f64 {
        self.walpha
    }
}

impl Default for SignificantEigenPairFilter {
    fn default() -> Self {
        Self {
            walpha: DEFAULT_WALPHA,
        }
    }
}

fn contrast(eigenvalue: f64, tail_mean: f64) -> Option<f64> {
    if tail_mean > 0.0 {
        Some(eigenvalue / tail_mean)
    } else if eigenvalue > 0.0 {
        Some(f64::INFINITY)
    } else {
        None
    }
}

impl EigenPairFilter for SignificantEigenPairFilter {
    fn filter(
        &self,
        eigen_pairs: &SortedEigenPairs,
    ) -> Result<FilteredEigenPairs, EigenFilterError> {
        if eigen_pairs.is_empty() {
            return Err(EigenFilterError::EmptySpectrum);
        }

        let eigenvalues = eigen_pairs.eigenvalues();
        let n = eigenvalues.len();

        // tail_sums[i] = λ_i + ... + λ_{n-1}
        let mut tail_sums = vec![0.0; n + 1];
        for i in (0..n).rev() {
            tail_sums[i] = tail_sums[i + 1] + eigenvalues[i];
        }

        let mut best: Option<(usize, f64)> = None;
        for i in 0..n.saturating_sub(1) {
            let tail_mean = tail_sums[i + 1] / (n - 1 - i) as f64;
            let Some(c) = contrast(eigenvalues[i], tail_mean) else {
                continue;
            };
            if best.is_none_or(|(_, max)| c > max) {
                best = Some((i, c));
            }
        }

        let strong_count = match best {
            Some((i, c)) if c >= self.walpha => i + 1,
            _ => n,
        };

        tracing::debug!(
            walpha = self.walpha,
            contrast = best.map(|(_, c)| c),
            strong = strong_count,
            "significant eigenpair filter"
        );

        Ok(FilteredEigenPairs::split_at(eigen_pairs, strong_count))
    }
}
