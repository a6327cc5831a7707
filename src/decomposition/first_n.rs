use super::eigen_pair::{FilteredEigenPairs, SortedEigenPairs};
use super::filter::{EigenFilterError, EigenPairFilter};

/// Keeps a fixed number of leading eigenpairs as strong.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FirstNEigenPairFilter {
    n: usize,
}

impl FirstNEigenPairFilter {
    pub fn new(n: usize) -> Self {
        Self { n }
    }

    pub fn n(&self) -> usize {
        self.n
    }
}

impl EigenPairFilter for FirstNEigenPairFilter {
    fn filter(
        &self,
        eigen_pairs: &SortedEigenPairs,
    ) -> Result<FilteredEigenPairs, EigenFilterError> {
        if eigen_pairs.is_empty() {
            return Err(EigenFilterError::EmptySpectrum);
        }
        let filtered = FilteredEigenPairs::split_at(eigen_pairs, self.n);
        tracing::debug!(
            n = self.n,
            strong = filtered.strong_count(),
            weak = filtered.weak_count(),
            "first-n eigenpair filter"
        );
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decomposition::EigenPair;
    use ndarray::array;

    fn spectrum() -> SortedEigenPairs {
        SortedEigenPairs::new(vec![
            EigenPair::new(4.0, array![1.0, 0.0, 0.0]),
            EigenPair::new(2.0, array![0.0, 1.0, 0.0]),
            EigenPair::new(1.0, array![0.0, 0.0, 1.0]),
        ])
        .unwrap()
    }

    #[test]
    fn test_first_n() {
        let filtered = FirstNEigenPairFilter::new(2).filter(&spectrum()).unwrap();
        assert_eq!(filtered.strong_eigenvalues(), array![4.0, 2.0]);
        assert_eq!(filtered.weak_eigenvalues(), array![1.0]);
    }

    #[test]
    fn test_zero_makes_all_weak() {
        let filtered = FirstNEigenPairFilter::new(0).filter(&spectrum()).unwrap();
        assert_eq!(filtered.strong_count(), 0);
        assert_eq!(filtered.weak_count(), 3);
    }

    #[test]
    fn test_n_larger_than_spectrum() {
        let filtered = FirstNEigenPairFilter::new(10).filter(&spectrum()).unwrap();
        assert_eq!(filtered.strong_count(), 3);
        assert!(filtered.weak.is_empty());
    }
}
