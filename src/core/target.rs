use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{error::ValidationError, Float};

/// What an optimization looks for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum Target {
    /// Find the input with the smallest value.
    #[default]
    Minimize,
    /// Find the input with the largest value.
    Maximize,
    /// Find the input whose value is closest to the given number.
    Match(Float),
}

impl Target {
    /// Returns `true` if `candidate` is strictly better than `incumbent` under this target.
    ///
    /// `NaN` is never better than anything, and any other value is better than `NaN`.
    pub fn prefers(&self, candidate: Float, incumbent: Float) -> bool {
        if incumbent.is_nan() {
            return !candidate.is_nan();
        }
        match self {
            Self::Minimize => candidate < incumbent,
            Self::Maximize => candidate > incumbent,
            Self::Match(value) => (candidate - value).abs() < (incumbent - value).abs(),
        }
    }

    /// Check that a [`Target::Match`] value is finite.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidTarget`] otherwise.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::Match(value) if !value.is_finite() => {
                Err(ValidationError::InvalidTarget(value.to_string()))
            }
            _ => Ok(()),
        }
    }
}

impl FromStr for Target {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "min" | "minimum" | "minimize" => Ok(Self::Minimize),
            "max" | "maximum" | "maximize" => Ok(Self::Maximize),
            other => match other.parse::<Float>() {
                Ok(value) if value.is_finite() => Ok(Self::Match(value)),
                _ => Err(ValidationError::InvalidTarget(s.to_string())),
            },
        }
    }
}

impl From<Float> for Target {
    fn from(value: Float) -> Self {
        Self::Match(value)
    }
}

impl Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Minimize => write!(f, "minimize"),
            Self::Maximize => write!(f, "maximize"),
            Self::Match(value) => write!(f, "match {}", value),
        }
    }
}
