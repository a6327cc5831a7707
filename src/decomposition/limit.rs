use super::eigen_pair::{FilteredEigenPairs, SortedEigenPairs};
use super::filter::{EigenFilterError, EigenPairFilter};

pub const DEFAULT_DELTA: f64 = 0.01;

/// Keeps eigenpairs whose eigenvalue reaches a limit.
///
/// The limit is `delta` itself when `absolute`, otherwise `delta` times the
/// largest eigenvalue. The first eigenpair below the limit and all that follow
/// are weak.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LimitEigenPairFilter {
    delta: f64,
    absolute: bool,
}

impl LimitEigenPairFilter {
    pub fn new(delta: f64, absolute: bool) -> Result<Self, EigenFilterError> {
        if !delta.is_finite() || delta < 0.0 {
            return Err(EigenFilterError::InvalidParameter {
                name: "delta",
                value: delta,
                reason: "must be finite and non-negative",
            });
        }
        if !absolute && delta > 1.0 {
            return Err(EigenFilterError::InvalidParameter {
                name: "delta",
                value: delta,
                reason: "relative limit must not exceed 1",
            });
        }
        Ok(Self { delta, absolute })
    }

    pub fn delta(&self) -> f64 {
        self.delta
    }

    pub fn is_absolute(&self) -> bool {
        self.absolute
    }

    fn limit(&self, eigen_pairs: &SortedEigenPairs) -> f64 {
        if self.absolute {
            self.delta
        } else {
            self.delta * eigen_pairs.as_slice()[0].eigenvalue
        }
    }
}

impl Default for LimitEigenPairFilter {
    fn default() -> Self {
        Self {
            delta: DEFAULT_DELTA,
            absolute: false,
        }
    }
}

impl EigenPairFilter for LimitEigenPairFilter {
    fn filter(
        &self,
        eigen_pairs: &SortedEigenPairs,
    ) -> Result<FilteredEigenPairs, EigenFilterError> {
        if eigen_pairs.is_empty() {
            return Err(EigenFilterError::EmptySpectrum);
        }

        let limit = self.limit(eigen_pairs);
        let strong_count = eigen_pairs
            .iter()
            .position(|p| !(p.eigenvalue >= limit))
            .unwrap_or(eigen_pairs.len());

        tracing::debug!(limit, strong = strong_count, "limit eigenpair filter");

        Ok(FilteredEigenPairs::split_at(eigen_pairs, strong_count))
    }
}
