use super::eigen_pair::{FilteredEigenPairs, SortedEigenPairs};
use super::filter::{EigenFilterError, EigenPairFilter};

/// Share of the total variance the strong eigenpairs explain by default.
pub const DEFAULT_ALPHA: f64 = 0.85;

/// Marks as strong the leading eigenpairs that together explain at least
/// `alpha` of the total variance.
///
/// The eigenpair whose eigenvalue first lifts the running sum to
/// `alpha · total` is strong; everything after it is weak. If rounding keeps
/// the final running sum below that mark, every eigenpair is strong.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PercentageEigenPairFilter {
    alpha: f64,
}

impl PercentageEigenPairFilter {
    pub fn new(alpha: f64) -> Result<Self, EigenFilterError> {
        if !(alpha > 0.0 && alpha < 1.0) {
            return Err(EigenFilterError::InvalidParameter {
                name: "alpha",
                value: alpha,
                reason: "must lie strictly between 0 and 1",
            });
        }
        Ok(Self { alpha })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl Default for PercentageEigenPairFilter {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
        }
    }
}

impl EigenPairFilter for PercentageEigenPairFilter {
    fn filter(
        &self,
        eigen_pairs: &SortedEigenPairs,
    ) -> Result<FilteredEigenPairs, EigenFilterError> {
        let pairs = eigen_pairs.as_slice();
        if pairs.is_empty() {
            return Err(EigenFilterError::EmptySpectrum);
        }

        let total_sum: f64 = pairs.iter().map(|p| p.eigenvalue).sum();
        if !(total_sum > 0.0 && total_sum.is_finite()) {
            return Err(EigenFilterError::DegenerateSpectrum { total: total_sum });
        }

        let mut strong = Vec::new();
        let mut weak = Vec::new();
        let mut curr_sum = 0.0;
        let mut found = false;

        for pair in pairs {
            curr_sum += pair.eigenvalue;
            if curr_sum / total_sum >= self.alpha {
                if !found {
                    found = true;
                    strong.push(pair.clone());
                } else {
                    weak.push(pair.clone());
                }
            } else {
                strong.push(pair.clone());
            }
        }

        tracing::debug!(
            alpha = self.alpha,
            total_sum,
            strong = strong.len(),
            weak = weak.len(),
            "percentage eigenpair filter"
        );

        Ok(FilteredEigenPairs::new(strong, weak))
    }
}

/// Percentage filter with an explicit `alpha` in `(0, 1)`.
pub fn filter_by_percentage(
    eigen_pairs: &SortedEigenPairs,
    alpha: f64,
) -> Result<FilteredEigenPairs, EigenFilterError> {
    PercentageEigenPairFilter::new(alpha)?.filter(eigen_pairs)
}
