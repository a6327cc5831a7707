/// Distance update applied by an agglomerative clustering loop when two
/// clusters `X` and `Y` merge.
///
/// For every remaining cluster `Z` the driver calls [`Linkage::combine`] with
/// the sizes of `X` and `Y`, their distances to `Z`, the size of `Z` and the
/// distance between `X` and `Y`. The return value is the distance from the
/// merged cluster to `Z`.
///
/// # Preconditions
///
/// Sizes are at least 1 and distances are finite and nonnegative. Nothing is
/// checked: negative or NaN input yields an unspecified value, which the
/// caller will see downstream.
pub trait Linkage: Send + Sync {
    fn combine(
        &self,
        size_x: usize,
        dist_x: f64,
        size_y: usize,
        dist_y: f64,
        size_z: usize,
        dist_xy: f64,
    ) -> f64;

    /// Maps an input distance into the space the recurrence operates in.
    fn initial(&self, distance: f64, _is_squared: bool) -> f64 {
        distance
    }

    /// Maps a combined value back to the scale of the input distances.
    fn restore(&self, value: f64, _is_squared: bool) -> f64 {
        value
    }
}

/// Coefficients of the generalized Lance–Williams recurrence
///
/// `d(XY, Z) = α_x·d(X, Z) + α_y·d(Y, Z) + β·d(X, Y) + γ·|d(X, Z) − d(Y, Z)|`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LanceWilliams {
    pub alpha_x: f64,
    pub alpha_y: f64,
    pub beta: f64,
    pub gamma: f64,
}

impl LanceWilliams {
    pub fn new(alpha_x: f64, alpha_y: f64, beta: f64, gamma: f64) -> Self {
        Self {
            alpha_x,
            alpha_y,
            beta,
            gamma,
        }
    }

    pub fn apply(&self, dist_x: f64, dist_y: f64, dist_xy: f64) -> f64 {
        self.alpha_x * dist_x
            + self.alpha_y * dist_y
            + self.beta * dist_xy
            + self.gamma * (dist_x - dist_y).abs()
    }

    /// Milligan's sufficient condition for merge heights that never decrease:
    /// `α_x, α_y ≥ 0`, `α_x + α_y + β ≥ 1` and `γ ≥ -min(α_x, α_y)`.
    pub fn is_monotone(&self) -> bool {
        self.alpha_x >= 0.0
            && self.alpha_y >= 0.0
            && self.alpha_x + self.alpha_y + self.beta >= 1.0 - 1e-12
            && self.gamma >= -self.alpha_x.min(self.alpha_y)
    }
}
