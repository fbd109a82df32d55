use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{error::ValidationError, Float};

/// The search space of an optimization: a closed interval `[low, high]` applied identically to
/// every dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    /// The lower bound of every coordinate.
    pub low: Float,
    /// The upper bound of every coordinate.
    pub high: Float,
}

impl Domain {
    /// Create a new [`Domain`]. The bounds are checked by [`Domain::validate`] when a run starts.
    pub const fn new(low: Float, high: Float) -> Self {
        Self { low, high }
    }

    /// Check that both bounds are finite, `low < high`, and the width `high - low` is finite.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidDomain`] otherwise.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.low.is_finite()
            && self.high.is_finite()
            && self.low < self.high
            && self.width().is_finite()
        {
            Ok(())
        } else {
            Err(ValidationError::InvalidDomain {
                low: self.low,
                high: self.high,
            })
        }
    }

    /// The width `high - low` of the domain.
    pub fn width(&self) -> Float {
        self.high - self.low
    }

    /// Checks whether `value` lies in the closed interval `[low, high]`.
    pub fn contains(&self, value: Float) -> bool {
        self.low <= value && value <= self.high
    }

    /// Checks whether `value` lies in the open interval `(low, high)`.
    pub fn contains_strictly(&self, value: Float) -> bool {
        self.low < value && value < self.high
    }
}

impl Default for Domain {
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

impl From<(Float, Float)> for Domain {
    fn from(value: (Float, Float)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl From<[Float; 2]> for Domain {
    fn from(value: [Float; 2]) -> Self {
        Self::new(value[0], value[1])
    }
}

impl Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        assert!(Domain::new(-1.0, 1.0).validate().is_ok());
        assert_eq!(
            Domain::new(1.0, 1.0).validate(),
            Err(ValidationError::InvalidDomain {
                low: 1.0,
                high: 1.0
            })
        );
        assert!(Domain::new(2.0, 1.0).validate().is_err());
        assert!(Domain::new(Float::NEG_INFINITY, 1.0).validate().is_err());
        assert!(Domain::new(0.0, Float::NAN).validate().is_err());
    }

    #[test]
    fn test_validate_overflowing_width() {
        let domain = Domain::new(Float::MIN, Float::MAX);
        assert!(domain.low.is_finite() && domain.high.is_finite());
        assert_eq!(
            domain.validate(),
            Err(ValidationError::InvalidDomain {
                low: Float::MIN,
                high: Float::MAX
            })
        );
        assert!(Domain::new(Float::MIN / 4.0, Float::MAX / 4.0)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_contains() {
        let domain = Domain::from((0.0, 2.0));
        assert_eq!(domain.width(), 2.0);
        assert!(domain.contains(0.0));
        assert!(domain.contains(2.0));
        assert!(!domain.contains(2.5));
        assert!(!domain.contains_strictly(0.0));
        assert!(domain.contains_strictly(1.0));
        assert!(!domain.contains_strictly(Float::NAN));
    }

    #[test]
    fn test_from_and_display() {
        let domain = Domain::from([-2.0, 4.0]);
        assert_eq!(domain, Domain::new(-2.0, 4.0));
        assert_eq!(domain.to_string(), "[-2, 4]");
        assert_eq!(Domain::default(), Domain::new(0.0, 1.0));
    }
}
