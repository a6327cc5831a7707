use serde::{Deserialize, Serialize};

use super::filter::{EigenFilterError, EigenPairFilter};
use super::first_n::FirstNEigenPairFilter;
use super::limit::{LimitEigenPairFilter, DEFAULT_DELTA};
use super::percentage::{PercentageEigenPairFilter, DEFAULT_ALPHA};
use super::significant::{SignificantEigenPairFilter, DEFAULT_WALPHA};

/// Choice of eigenpair filter and its parameters, as read from configuration.
///
/// ```json
/// { "method": "percentage", "alpha": 0.9 }
/// ```
///
/// Values are not checked until [`EigenFilterConfig::build`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum EigenFilterConfig {
    Percentage {
        #[serde(default = "default_alpha")]
        alpha: f64,
    },
    FirstN {
        n: usize,
    },
    Limit {
        #[serde(default = "default_delta")]
        delta: f64,
        #[serde(default)]
        absolute: bool,
    },
    Significant {
        #[serde(default = "default_walpha")]
        walpha: f64,
    },
}

fn default_alpha() -> f64 {
    DEFAULT_ALPHA
}

fn default_delta() -> f64 {
    DEFAULT_DELTA
}

fn default_walpha() -> f64 {
    DEFAULT_WALPHA
}

impl Default for EigenFilterConfig {
    fn default() -> Self {
        EigenFilterConfig::Percentage {
            alpha: DEFAULT_ALPHA,
        }
    }
}

impl EigenFilterConfig {
    /// Validates the parameters and constructs the filter.
    pub fn build(&self) -> Result<Box<dyn EigenPairFilter>, EigenFilterError> {
        let filter: Box<dyn EigenPairFilter> = match *self {
            EigenFilterConfig::Percentage { alpha } => {
                Box::new(PercentageEigenPairFilter::new(alpha)?)
            }
            EigenFilterConfig::FirstN { n } => Box::new(FirstNEigenPairFilter::new(n)),
            EigenFilterConfig::Limit { delta, absolute } => {
                Box::new(LimitEigenPairFilter::new(delta, absolute)?)
            }
            EigenFilterConfig::Significant { walpha } => {
                Box::new(SignificantEigenPairFilter::new(walpha)?)
            }
        };
        Ok(filter)
    }
}
