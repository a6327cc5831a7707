//! Pluggable numeric policies for hierarchical clustering and subspace analysis.
//!
//! - [`cluster`]: Lance–Williams linkage updates used by an agglomerative
//!   clustering loop when two clusters merge.
//! - [`decomposition`]: eigenpair filters that split a descending spectrum into
//!   strong (signal) and weak (noise) eigenpairs.
//!
//! Both families are pure functions over borrowed input, safe to call from any
//! number of threads at once.

pub use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

pub mod cluster;
pub mod decomposition;

pub use cluster::{LanceWilliams, Linkage, LinkageError, LinkageMethod};
pub use decomposition::{
    filter_by_percentage, EigenFilterConfig, EigenFilterError, EigenPair, EigenPairFilter,
    ErrorKind, FilteredEigenPairs, FirstNEigenPairFilter, LimitEigenPairFilter,
    PercentageEigenPairFilter, SignificantEigenPairFilter, SortedEigenPairs,
};

pub type Vector = Array1<f64>;
pub type Matrix = Array2<f64>;
