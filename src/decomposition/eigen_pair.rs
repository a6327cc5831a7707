use std::cmp::Ordering;
use std::fmt;

use crate::{Matrix, Vector};

use super::filter::EigenFilterError;

/// An eigenvalue together with its eigenvector.
#[derive(Clone, Debug, PartialEq)]
pub struct EigenPair {
    pub eigenvalue: f64,
    pub eigenvector: Vector,
}

impl EigenPair {
    pub fn new(eigenvalue: f64, eigenvector: Vector) -> Self {
        Self {
            eigenvalue,
            eigenvector,
        }
    }
}

impl fmt::Display for EigenPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.eigenvalue, self.eigenvector)
    }
}

/// A non-empty spectrum whose eigenvalues never increase.
///
/// All eigenvectors have the same length. Equal eigenvalues keep the order
/// they were given in.
#[derive(Clone, Debug, PartialEq)]
pub struct SortedEigenPairs {
    pairs: Vec<EigenPair>,
}

impl SortedEigenPairs {
    /// Wraps eigenpairs that are already sorted by descending eigenvalue.
    ///
    /// The order is checked, not fixed: the first pair that is larger than its
    /// predecessor, or NaN, is reported as `NotDescending`. A NaN in the first
    /// position is reported at index 0 with an infinite predecessor.
    pub fn new(pairs: Vec<EigenPair>) -> Result<Self, EigenFilterError> {
        let first = pairs.first().ok_or(EigenFilterError::EmptySpectrum)?;
        let dim = first.eigenvector.len();
        if first.eigenvalue.is_nan() {
            return Err(EigenFilterError::NotDescending {
                index: 0,
                previous: f64::INFINITY,
                current: first.eigenvalue,
            });
        }

        for (index, pair) in pairs.iter().enumerate().skip(1) {
            let previous = pairs[index - 1].eigenvalue;
            let current = pair.eigenvalue;
            if current.is_nan() || previous.is_nan() || current > previous {
                return Err(EigenFilterError::NotDescending {
                    index,
                    previous,
                    current,
                });
            }
            if pair.eigenvector.len() != dim {
                return Err(EigenFilterError::EigenvectorLength {
                    index,
                    expected: dim,
                    found: pair.eigenvector.len(),
                });
            }
        }

        Ok(Self { pairs })
    }

    /// Sorts eigenpairs by descending eigenvalue, then wraps them.
    pub fn from_unsorted(mut pairs: Vec<EigenPair>) -> Result<Self, EigenFilterError> {
        pairs.sort_by(|a, b| {
            b.eigenvalue
                .partial_cmp(&a.eigenvalue)
                .unwrap_or(Ordering::Equal)
        });
        Self::new(pairs)
    }

    /// Builds the spectrum from an eigensolver's output, where column `i` of
    /// `eigenvectors` belongs to `eigenvalues[i]`.
    pub fn from_decomposition(
        eigenvalues: &Vector,
        eigenvectors: &Matrix,
    ) -> Result<Self, EigenFilterError> {
        if eigenvalues.len() != eigenvectors.ncols() {
            return Err(EigenFilterError::DimensionMismatch {
                eigenvalues: eigenvalues.len(),
                eigenvectors: eigenvectors.ncols(),
            });
        }

        let pairs = eigenvalues
            .iter()
            .zip(eigenvectors.axis_iter(ndarray::Axis(1)))
            .map(|(&val, vec)| EigenPair::new(val, vec.to_owned()))
            .collect();

        Self::from_unsorted(pairs)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Always false; kept for symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&EigenPair> {
        self.pairs.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EigenPair> {
        self.pairs.iter()
    }

    pub fn as_slice(&self) -> &[EigenPair] {
        &self.pairs
    }

    pub fn eigenvalues(&self) -> Vector {
        self.pairs.iter().map(|p| p.eigenvalue).collect()
    }

    /// Length of every eigenvector.
    pub fn dimensionality(&self) -> usize {
        self.pairs[0].eigenvector.len()
    }

    pub fn into_vec(self) -> Vec<EigenPair> {
        self.pairs
    }
}

impl<'a> IntoIterator for &'a SortedEigenPairs {
    type Item = &'a EigenPair;
    type IntoIter = std::slice::Iter<'a, EigenPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

/// The outcome of an eigenpair filter.
///
/// `strong` followed by `weak` is the filtered spectrum, each pair exactly
/// once and in its original order.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct FilteredEigenPairs {
    pub strong: Vec<EigenPair>,
    pub weak: Vec<EigenPair>,
}

impl FilteredEigenPairs {
    pub fn new(strong: Vec<EigenPair>, weak: Vec<EigenPair>) -> Self {
        Self { strong, weak }
    }

    /// Strong prefix of `strong_count` pairs, weak remainder.
    pub(crate) fn split_at(pairs: &SortedEigenPairs, strong_count: usize) -> Self {
        let (strong, weak) = pairs.as_slice().split_at(strong_count.min(pairs.len()));
        Self::new(strong.to_vec(), weak.to_vec())
    }

    pub fn strong_count(&self) -> usize {
        self.strong.len()
    }

    pub fn weak_count(&self) -> usize {
        self.weak.len()
    }

    pub fn strong_eigenvalues(&self) -> Vector {
        self.strong.iter().map(|p| p.eigenvalue).collect()
    }

    pub fn weak_eigenvalues(&self) -> Vector {
        self.weak.iter().map(|p| p.eigenvalue).collect()
    }

    /// Strong eigenvectors as the rows of a matrix, `0 × 0` if there are none.
    pub fn strong_basis(&self) -> Matrix {
        stack_rows(&self.strong)
    }

    /// Weak eigenvectors as the rows of a matrix, `0 × 0` if there are none.
    pub fn weak_basis(&self) -> Matrix {
        stack_rows(&self.weak)
    }

    pub fn into_parts(self) -> (Vec<EigenPair>, Vec<EigenPair>) {
        (self.strong, self.weak)
    }
}

fn stack_rows(pairs: &[EigenPair]) -> Matrix {
    let dim = pairs.first().map_or(0, |p| p.eigenvector.len());
    Matrix::from_shape_fn((pairs.len(), dim), |(i, j)| pairs[i].eigenvector[j])
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn pair(eigenvalue: f64) -> EigenPair {
        EigenPair::new(eigenvalue, array![eigenvalue, 1.0])
    }

    #[test]
    fn test_sorted_accepts_descending_with_ties() {
        let pairs = SortedEigenPairs::new(vec![pair(5.0), pair(5.0), pair(2.0)]).unwrap();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs.eigenvalues(), array![5.0, 5.0, 2.0]);
        assert_eq!(pairs.dimensionality(), 2);
    }

    #[test]
    fn test_sorted_rejects_empty() {
        assert_eq!(
            SortedEigenPairs::new(Vec::new()),
            Err(EigenFilterError::EmptySpectrum)
        );
    }

    #[test]
    fn test_sorted_rejects_ascending() {
        let err = SortedEigenPairs::new(vec![pair(3.0), pair(1.0), pair(2.0)]).unwrap_err();
        assert_eq!(
            err,
            EigenFilterError::NotDescending {
                index: 2,
                previous: 1.0,
                current: 2.0
            }
        );
    }

    #[test]
    fn test_sorted_rejects_nan() {
        let err = SortedEigenPairs::new(vec![pair(3.0), pair(f64::NAN)]).unwrap_err();
        assert!(matches!(err, EigenFilterError::NotDescending { index: 1, .. }));
    }

    #[test]
    fn test_sorted_rejects_leading_nan() {
        let err = SortedEigenPairs::new(vec![pair(f64::NAN)]).unwrap_err();
        assert!(matches!(err, EigenFilterError::NotDescending { index: 0, .. }));

        let err = SortedEigenPairs::new(vec![pair(f64::NAN), pair(1.0)]).unwrap_err();
        assert!(matches!(err, EigenFilterError::NotDescending { index: 0, .. }));
    }

    #[test]
    fn test_sorted_rejects_ragged_eigenvectors() {
        let pairs = vec![
            EigenPair::new(2.0, array![1.0, 0.0]),
            EigenPair::new(1.0, array![0.0, 1.0, 0.0]),
        ];
        assert_eq!(
            SortedEigenPairs::new(pairs),
            Err(EigenFilterError::EigenvectorLength {
                index: 1,
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn test_from_unsorted_is_stable() {
        let pairs = vec![
            EigenPair::new(1.0, array![1.0]),
            EigenPair::new(4.0, array![2.0]),
            EigenPair::new(1.0, array![3.0]),
        ];
        let sorted = SortedEigenPairs::from_unsorted(pairs).unwrap();
        let vectors: Vec<f64> = sorted.iter().map(|p| p.eigenvector[0]).collect();
        assert_eq!(vectors, vec![2.0, 1.0, 3.0]);
    }

    #[test]
    fn test_from_decomposition_pairs_columns() {
        let eigenvalues = array![1.0, 3.0];
        let eigenvectors = array![[1.0, 0.0], [0.0, 1.0]];

        let sorted = SortedEigenPairs::from_decomposition(&eigenvalues, &eigenvectors).unwrap();
        assert_eq!(sorted.get(0).unwrap().eigenvalue, 3.0);
        assert_eq!(sorted.get(0).unwrap().eigenvector, array![0.0, 1.0]);
        assert_eq!(sorted.get(1).unwrap().eigenvector, array![1.0, 0.0]);
    }

    #[test]
    fn test_from_decomposition_dimension_mismatch() {
        let eigenvalues = array![1.0, 3.0, 2.0];
        let eigenvectors = array![[1.0, 0.0], [0.0, 1.0]];

        assert_eq!(
            SortedEigenPairs::from_decomposition(&eigenvalues, &eigenvectors),
            Err(EigenFilterError::DimensionMismatch {
                eigenvalues: 3,
                eigenvectors: 2
            })
        );
    }

    #[test]
    fn test_split_and_bases() {
        let sorted = SortedEigenPairs::new(vec![pair(6.0), pair(3.0), pair(1.0)]).unwrap();
        let filtered = FilteredEigenPairs::split_at(&sorted, 2);

        assert_eq!(filtered.strong_count(), 2);
        assert_eq!(filtered.weak_count(), 1);
        assert_eq!(filtered.strong_eigenvalues(), array![6.0, 3.0]);
        assert_eq!(filtered.strong_basis(), array![[6.0, 1.0], [3.0, 1.0]]);
        assert_eq!(filtered.weak_basis(), array![[1.0, 1.0]]);
    }

    #[test]
    fn test_empty_basis() {
        let sorted = SortedEigenPairs::new(vec![pair(1.0)]).unwrap();
        let filtered = FilteredEigenPairs::split_at(&sorted, 5);
        assert_eq!(filtered.weak_basis().shape(), &[0, 0]);
        assert_eq!(filtered.strong_basis().shape(), &[1, 2]);
    }
}
