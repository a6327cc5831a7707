use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::linkage::{LanceWilliams, Linkage};

/// Beta used by `flexible-beta` when no value is given.
pub const DEFAULT_FLEXIBLE_BETA: f64 = -0.25;

/// The linkage criteria understood by the clustering driver.
///
/// Parsed from and serialized to a name such as `"upgmc"` or
/// `"flexible-beta(-0.25)"`, so a config file can pick one by string.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LinkageMethod {
    /// Nearest neighbour: minimum of the two distances.
    Single,
    /// Farthest neighbour: maximum of the two distances.
    Complete,
    /// UPGMA, size-weighted mean of the two distances.
    #[default]
    GroupAverage,
    /// WPGMA (McQuitty), unweighted mean of the two distances.
    WeightedAverage,
    /// UPGMC, distance between size-weighted centroids. Expects squared
    /// Euclidean distances.
    Centroid,
    /// WPGMC (Gower), distance between unweighted centroids. Expects squared
    /// Euclidean distances.
    Median,
    /// Minimum increase of the error sum of squares. Expects squared
    /// Euclidean distances.
    Ward,
    /// Lance and Williams' one-parameter family, `α = (1 − β)/2`, `γ = 0`.
    ///
    /// Building the variant directly skips the `[-1, 1)` check done by
    /// [`LinkageMethod::flexible_beta`] and by parsing; `combine` uses whatever
    /// beta it holds and `is_monotone` judges it from the coefficients.
    FlexibleBeta { beta: f64 },
}

impl LinkageMethod {
    /// Every variant that takes no parameter.
    pub const ALL: [LinkageMethod; 7] = [
        LinkageMethod::Single,
        LinkageMethod::Complete,
        LinkageMethod::GroupAverage,
        LinkageMethod::WeightedAverage,
        LinkageMethod::Centroid,
        LinkageMethod::Median,
        LinkageMethod::Ward,
    ];

    pub fn flexible_beta(beta: f64) -> Result<Self, LinkageError> {
        if !(-1.0..1.0).contains(&beta) {
            return Err(LinkageError::InvalidBeta(beta));
        }
        Ok(LinkageMethod::FlexibleBeta { beta })
    }

    pub fn name(&self) -> &'static str {
        match self {
            LinkageMethod::Single => "single",
            LinkageMethod::Complete => "complete",
            LinkageMethod::GroupAverage => "group-average",
            LinkageMethod::WeightedAverage => "weighted-average",
            LinkageMethod::Centroid => "centroid",
            LinkageMethod::Median => "median",
            LinkageMethod::Ward => "ward",
            LinkageMethod::FlexibleBeta { .. } => "flexible-beta",
        }
    }

    /// Whether the recurrence is defined on squared Euclidean distances.
    pub fn uses_squared_distances(&self) -> bool {
        matches!(
            self,
            LinkageMethod::Centroid | LinkageMethod::Median | LinkageMethod::Ward
        )
    }

    /// Lance–Williams coefficients for merging `X` and `Y`, as seen from `Z`.
    pub fn coefficients(&self, size_x: usize, size_y: usize, size_z: usize) -> LanceWilliams {
        let nx = size_x as f64;
        let ny = size_y as f64;
        match *self {
            LinkageMethod::Single => LanceWilliams::new(0.5, 0.5, 0.0, -0.5),
            LinkageMethod::Complete => LanceWilliams::new(0.5, 0.5, 0.0, 0.5),
            LinkageMethod::GroupAverage => {
                let f = 1. / (size_x + size_y) as f64;
                LanceWilliams::new(nx * f, ny * f, 0.0, 0.0)
            }
            LinkageMethod::WeightedAverage => LanceWilliams::new(0.5, 0.5, 0.0, 0.0),
            LinkageMethod::Centroid => {
                let f = 1. / (size_x + size_y) as f64;
                LanceWilliams::new(nx * f, ny * f, -(nx * ny) * f * f, 0.0)
            }
            LinkageMethod::Median => LanceWilliams::new(0.5, 0.5, -0.25, 0.0),
            LinkageMethod::Ward => {
                let nz = size_z as f64;
                let f = 1. / (size_x + size_y + size_z) as f64;
                LanceWilliams::new((nx + nz) * f, (ny + nz) * f, -nz * f, 0.0)
            }
            LinkageMethod::FlexibleBeta { beta } => {
                let a = 0.5 * (1. - beta);
                LanceWilliams::new(a, a, beta, 0.0)
            }
        }
    }

    /// Whether merge heights produced by this method never decrease.
    ///
    /// Centroid and median linkage can produce reversals; they are kept as is.
    pub fn is_monotone(&self) -> bool {
        match self {
            LinkageMethod::Centroid | LinkageMethod::Median => false,
            other => other.coefficients(1, 1, 1).is_monotone(),
        }
    }
}

impl Linkage for LinkageMethod {
    #[inline]
    fn combine(
        &self,
        size_x: usize,
        dist_x: f64,
        size_y: usize,
        dist_y: f64,
        size_z: usize,
        dist_xy: f64,
    ) -> f64 {
        let nx = size_x as f64;
        let ny = size_y as f64;
        match *self {
            LinkageMethod::Single => dist_x.min(dist_y),
            LinkageMethod::Complete => dist_x.max(dist_y),
            LinkageMethod::GroupAverage => (nx * dist_x + ny * dist_y) / (size_x + size_y) as f64,
            LinkageMethod::WeightedAverage => 0.5 * (dist_x + dist_y),
            LinkageMethod::Centroid => {
                let f = 1. / (size_x + size_y) as f64;
                (nx * dist_x + ny * dist_y - (nx * ny) * f * dist_xy) * f
            }
            LinkageMethod::Median => 0.5 * dist_x + 0.5 * dist_y - 0.25 * dist_xy,
            LinkageMethod::Ward => {
                let nz = size_z as f64;
                ((nx + nz) * dist_x + (ny + nz) * dist_y - nz * dist_xy)
                    / (size_x + size_y + size_z) as f64
            }
            LinkageMethod::FlexibleBeta { beta } => {
                0.5 * (1. - beta) * (dist_x + dist_y) + beta * dist_xy
            }
        }
    }

    fn initial(&self, distance: f64, is_squared: bool) -> f64 {
        if self.uses_squared_distances() && !is_squared {
            distance * distance
        } else {
            distance
        }
    }

    fn restore(&self, value: f64, is_squared: bool) -> f64 {
        if self.uses_squared_distances() && !is_squared {
            value.sqrt()
        } else {
            value
        }
    }
}

impl fmt::Display for LinkageMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkageMethod::FlexibleBeta { beta } => write!(f, "flexible-beta({})", beta),
            other => f.write_str(other.name()),
        }
    }
}

impl FromStr for LinkageMethod {
    type Err = LinkageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase().replace('_', "-");

        if let Some(rest) = name.strip_prefix("flexible-beta") {
            let rest = rest.trim();
            if rest.is_empty() {
                return LinkageMethod::flexible_beta(DEFAULT_FLEXIBLE_BETA);
            }
            let beta = rest
                .strip_prefix('(')
                .and_then(|r| r.strip_suffix(')'))
                .and_then(|r| r.trim().parse::<f64>().ok())
                .ok_or_else(|| LinkageError::UnknownMethod(s.to_string()))?;
            return LinkageMethod::flexible_beta(beta);
        }

        match name.as_str() {
            "single" | "slink" | "min" => Ok(LinkageMethod::Single),
            "complete" | "clink" | "max" => Ok(LinkageMethod::Complete),
            "average" | "group-average" | "upgma" => Ok(LinkageMethod::GroupAverage),
            "weighted" | "weighted-average" | "wpgma" | "mcquitty" => {
                Ok(LinkageMethod::WeightedAverage)
            }
            "centroid" | "upgmc" => Ok(LinkageMethod::Centroid),
            "median" | "wpgmc" | "gower" => Ok(LinkageMethod::Median),
            "ward" | "minimum-variance" => Ok(LinkageMethod::Ward),
            _ => Err(LinkageError::UnknownMethod(s.to_string())),
        }
    }
}

impl TryFrom<String> for LinkageMethod {
    type Error = LinkageError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LinkageMethod> for String {
    fn from(method: LinkageMethod) -> Self {
        method.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LinkageError {
    #[error("Unknown linkage method: {0}")]
    UnknownMethod(String),

    #[error("Flexible beta must lie in [-1, 1), got {0}")]
    InvalidBeta(f64),
}
