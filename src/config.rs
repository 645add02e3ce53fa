//! Tunable tolerances for containment and ray casting.
//!
//! ```
//! use polycollide::CollisionConfig;
//!
//! let config = CollisionConfig::from_toml_str("ray_precision = 0.1").unwrap();
//! assert_eq!(config.ray_precision, 0.1);
//! assert_eq!(config.containment_epsilon, 1e-6);
//! ```

use crate::error::GeomError;
use num_traits::Float;
use serde::{Deserialize, Serialize};

/// Default threshold on the winding angle sum used by point containment.
pub const DEFAULT_CONTAINMENT_EPSILON: f64 = 0.000001;

/// Default bisection stopping interval for ray casting.
pub const DEFAULT_RAY_PRECISION: f64 = 0.5;

/// Tolerances shared by polygon queries.
///
/// Missing keys in a TOML document fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionConfig {
    /// A point is inside a convex shape when the absolute winding angle sum
    /// exceeds this value.
    pub containment_epsilon: f64,
    /// Ray casting stops bisecting once the search interval is this short.
    pub ray_precision: f64,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            containment_epsilon: DEFAULT_CONTAINMENT_EPSILON,
            ray_precision: DEFAULT_RAY_PRECISION,
        }
    }
}

impl CollisionConfig {
    /// Parses and validates a configuration from TOML.
    pub fn from_toml_str(source: &str) -> Result<Self, GeomError> {
        let config: Self =
            toml::from_str(source).map_err(|e| GeomError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration to TOML.
    pub fn to_toml_string(&self) -> Result<String, GeomError> {
        toml::to_string(self).map_err(|e| GeomError::ConfigParse(e.to_string()))
    }

    /// Checks that every tolerance is in range.
    pub fn validate(&self) -> Result<(), GeomError> {
        if !(self.ray_precision > 0.0 && self.ray_precision.is_finite()) {
            return Err(GeomError::InvalidConfig(format!(
                "ray_precision must be positive and finite, got {}",
                self.ray_precision
            )));
        }
        if !(self.containment_epsilon >= 0.0 && self.containment_epsilon.is_finite()) {
            return Err(GeomError::InvalidConfig(format!(
                "containment_epsilon must be non-negative and finite, got {}",
                self.containment_epsilon
            )));
        }
        Ok(())
    }

    #[inline]
    pub(crate) fn containment_epsilon<F: Float>(&self) -> F {
        F::from(self.containment_epsilon).unwrap_or_else(F::epsilon)
    }

    #[inline]
    pub(crate) fn ray_precision<F: Float>(&self) -> F {
        F::from(self.ray_precision).unwrap_or_else(|| F::from(DEFAULT_RAY_PRECISION).unwrap())
    }
}
