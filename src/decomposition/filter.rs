use super::eigen_pair::{FilteredEigenPairs, SortedEigenPairs};

/// Splits a descending spectrum into strong and weak eigenpairs.
///
/// Implementations never reorder: `strong` followed by `weak` is the input.
pub trait EigenPairFilter: Send + Sync {
    fn filter(
        &self,
        eigen_pairs: &SortedEigenPairs,
    ) -> Result<FilteredEigenPairs, EigenFilterError>;
}

impl<F: EigenPairFilter + ?Sized> EigenPairFilter for Box<F> {
    fn filter(
        &self,
        eigen_pairs: &SortedEigenPairs,
    ) -> Result<FilteredEigenPairs, EigenFilterError> {
        (**self).filter(eigen_pairs)
    }
}

/// Broad category of an [`EigenFilterError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// A filter parameter is out of range.
    Configuration,
    /// The caller broke an input contract (empty, unsorted or ragged spectrum).
    Precondition,
    /// The spectrum carries no variance to split.
    Degenerate,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EigenFilterError {
    #[error("Invalid value {value} for parameter {name}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Eigenpair sequence is empty")]
    EmptySpectrum,

    #[error("Eigenvalues not in descending order at index {index}: {current} follows {previous}")]
    NotDescending {
        index: usize,
        previous: f64,
        current: f64,
    },

    #[error("Got {eigenvalues} eigenvalues but {eigenvectors} eigenvectors")]
    DimensionMismatch { eigenvalues: usize, eigenvectors: usize },

    #[error("Eigenvector {index} has length {found}, expected {expected}")]
    EigenvectorLength {
        index: usize,
        expected: usize,
        found: usize,
    },

    #[error("Total eigenvalue sum {total} is not positive and finite")]
    DegenerateSpectrum { total: f64 },
}

impl EigenFilterError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EigenFilterError::InvalidParameter { .. } => ErrorKind::Configuration,
            EigenFilterError::EmptySpectrum
            | EigenFilterError::NotDescending { .. }
            | EigenFilterError::DimensionMismatch { .. }
            | EigenFilterError::EigenvectorLength { .. } => ErrorKind::Precondition,
            EigenFilterError::DegenerateSpectrum { .. } => ErrorKind::Degenerate,
        }
    }
}
