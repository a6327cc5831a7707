//! Linkage criteria for agglomerative hierarchical clustering.
//!
//! This module provides the distance update applied when two clusters merge,
//! expressed in the generalized Lance–Williams framework:
//! - `Linkage`: the contract an agglomeration loop calls for every remaining cluster
//! - `LinkageMethod`: single, complete, group average (UPGMA), weighted average
//!   (WPGMA), centroid (UPGMC), median (WPGMC), Ward and flexible beta
//! - `LanceWilliams`: the recurrence coefficients behind each method
//!
//! # Examples
//!
//! ## Updating a distance after a merge
//! ```rust
//! use clusterkit::{Linkage, LinkageMethod};
//!
//! // X has 2 points, Y has 3, Z has 1. Distances are squared Euclidean.
//! let d = LinkageMethod::Centroid.combine(2, 4.0, 3, 9.0, 1, 5.0);
//! assert!((d - 5.8).abs() < 1e-12);
//! ```
//!
//! ## Selecting a method by name
//! ```rust
//! use clusterkit::{Linkage, LinkageMethod};
//!
//! let method: LinkageMethod = "upgmc".parse().unwrap();
//! assert_eq!(method, LinkageMethod::Centroid);
//!
//! // Centroid linkage works on squared distances.
//! let d = method.initial(3.0, false);
//! assert_eq!(d, 9.0);
//! assert_eq!(method.restore(d, false), 3.0);
//! ```

mod linkage;
mod method;

pub use linkage::{LanceWilliams, Linkage};
pub use method::{LinkageError, LinkageMethod, DEFAULT_FLEXIBLE_BETA};
