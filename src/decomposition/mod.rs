//! Eigenpair significance filters for PCA and subspace analysis.
//!
//! This module splits a spectrum, sorted by descending eigenvalue, into strong
//! eigenpairs (signal) and weak eigenpairs (noise):
//! - `PercentageEigenPairFilter`: strong pairs explain at least `alpha` of the total variance
//! - `FirstNEigenPairFilter`: a fixed number of leading pairs are strong
//! - `LimitEigenPairFilter`: pairs above an absolute or relative eigenvalue limit are strong
//! - `SignificantEigenPairFilter`: split at the sharpest drop in the spectrum
//!
//! # Examples
//!
//! ## Percentage filter
//! ```rust
//! use clusterkit::{filter_by_percentage, EigenPair, SortedEigenPairs};
//! use ndarray::array;
//!
//! let pairs = SortedEigenPairs::new(vec![
//!     EigenPair::new(6.0, array![1.0, 0.0, 0.0]),
//!     EigenPair::new(3.0, array![0.0, 1.0, 0.0]),
//!     EigenPair::new(1.0, array![0.0, 0.0, 1.0]),
//! ])
//! .unwrap();
//!
//! let filtered = filter_by_percentage(&pairs, 0.85).unwrap();
//! assert_eq!(filtered.strong_count(), 2);
//! assert_eq!(filtered.weak_count(), 1);
//!
//! // Rows of the basis are the strong eigenvectors.
//! let basis = filtered.strong_basis();
//! assert_eq!(basis.shape(), &[2, 3]);
//! ```
//!
//! ## Filter chosen by configuration
//! ```rust
//! use clusterkit::{EigenFilterConfig, EigenPairFilter, SortedEigenPairs};
//! use ndarray::array;
//!
//! let eigenvalues = array![0.5, 4.0, 3.5];
//! let eigenvectors = array![
//!     [1.0, 0.0, 0.0],
//!     [0.0, 1.0, 0.0],
//!     [0.0, 0.0, 1.0]
//! ];
//! let pairs = SortedEigenPairs::from_decomposition(&eigenvalues, &eigenvectors).unwrap();
//!
//! let filter = EigenFilterConfig::Significant { walpha: 1.1 }.build().unwrap();
//! let filtered = filter.filter(&pairs).unwrap();
//! assert_eq!(filtered.strong_eigenvalues(), array![4.0, 3.5]);
//! ```

mod config;
mod eigen_pair;
mod filter;
mod first_n;
mod limit;
mod percentage;
mod significant;

pub use config::EigenFilterConfig;
pub use eigen_pair::{EigenPair, FilteredEigenPairs, SortedEigenPairs};
pub use filter::{EigenFilterError, EigenPairFilter, ErrorKind};
pub use first_n::FirstNEigenPairFilter;
pub use limit::{LimitEigenPairFilter, DEFAULT_DELTA};
pub use percentage::{filter_by_percentage, PercentageEigenPairFilter, DEFAULT_ALPHA};
pub use significant::{SignificantEigenPairFilter, DEFAULT_WALPHA};
