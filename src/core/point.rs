use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{core::Target, traits::CostFunction, DVector, Float};

/// Describes a point in parameter space together with its cached evaluation.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// the point's position
    pub x: DVector<Float>,
    /// the point's evaluation (`None` if the point has not yet been evaluated)
    pub fx: Option<Float>,
}

impl Point {
    /// Move the point to a new position, resetting the evaluation of the point
    pub fn set_position(&mut self, x: DVector<Float>) {
        self.x = x;
        self.fx = None;
    }

    /// The number of coordinates of the point.
    pub fn dimension(&self) -> usize {
        self.x.len()
    }

    /// Evaluate the given function at the point's coordinate and set the `fx` value to the result.
    /// A point which already holds a value is not evaluated again.
    ///
    /// # Errors
    ///
    /// Returns an `Err(E)` if the evaluation fails. See [`CostFunction::evaluate`] for more
    /// information.
    pub fn evaluate<U, E>(
        &mut self,
        func: &dyn CostFunction<U, E>,
        user_data: &mut U,
    ) -> Result<Float, E> {
        match self.fx {
            Some(fx) => Ok(fx),
            None => {
                let fx = func.evaluate(self.x.as_slice(), user_data)?;
                self.fx = Some(fx);
                Ok(fx)
            }
        }
    }

    /// Returns `true` if this point is strictly better than `other` under the given [`Target`].
    ///
    /// An evaluated point is always better than an unevaluated one, and any value is better than
    /// `NaN`.
    pub fn is_better_than(&self, other: &Self, target: &Target) -> bool {
        match (self.fx, other.fx) {
            (Some(candidate), Some(incumbent)) => target.prefers(candidate, incumbent),
            (Some(_), None) => true,
            (None, _) => false,
        }
    }

    /// Convert the [`Point`] into a `Vec`-`Float` tuple (`NaN` if unevaluated).
    pub fn destructure(self) -> (Vec<Float>, Float) {
        (
            self.x.iter().copied().collect(),
            self.fx.unwrap_or(Float::NAN),
        )
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x: {:?}, f(x): {:?}", self.x.as_slice(), self.fx)
    }
}

impl From<&[Float]> for Point {
    fn from(value: &[Float]) -> Self {
        Self {
            x: DVector::from_column_slice(value),
            fx: None,
        }
    }
}

impl From<Vec<Float>> for Point {
    fn from(value: Vec<Float>) -> Self {
        Self {
            x: DVector::from_vec(value),
            fx: None,
        }
    }
}

impl From<DVector<Float>> for Point {
    fn from(value: DVector<Float>) -> Self {
        Self { x: value, fx: None }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use nalgebra::dvector;

    use super::*;
    use crate::traits::FnCost;

    #[test]
    fn test_evaluate_sets_fx_once() {
        let calls = Cell::new(0);
        let f = FnCost::new(|x: &[Float]| {
            calls.set(calls.get() + 1);
            x[0] + x[1]
        });
        let mut p = Point::from(vec![1.0, 2.0]);
        assert!(p.fx.is_none());
        assert_eq!(p.evaluate(&f, &mut ()), Ok(3.0));
        assert_eq!(p.fx, Some(3.0));
        assert_eq!(p.evaluate(&f, &mut ()), Ok(3.0));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_set_position_resets_fx() {
        let mut p = Point {
            x: dvector![1.0],
            fx: Some(5.0),
        };
        p.set_position(dvector![2.0]);
        assert_eq!(p.x, dvector![2.0]);
        assert!(p.fx.is_none());
        assert_eq!(p.dimension(), 1);
    }

    #[test]
    fn test_is_better_than() {
        let low = Point {
            x: dvector![0.0],
            fx: Some(1.0),
        };
        let high = Point {
            x: dvector![1.0],
            fx: Some(2.0),
        };
        let unevaluated = Point::from(vec![0.5]);
        assert!(low.is_better_than(&high, &Target::Minimize));
        assert!(high.is_better_than(&low, &Target::Maximize));
        assert!(high.is_better_than(&low, &Target::Match(1.8)));
        assert!(!low.is_better_than(&low, &Target::Minimize));
        assert!(low.is_better_than(&unevaluated, &Target::Minimize));
        assert!(!unevaluated.is_better_than(&low, &Target::Maximize));
        let undefined = Point {
            x: dvector![-1.0],
            fx: Some(Float::NAN),
        };
        assert!(high.is_better_than(&undefined, &Target::Minimize));
        assert!(!undefined.is_better_than(&high, &Target::Minimize));
    }

    #[test]
    fn test_destructure_and_display() {
        let p = Point {
            x: dvector![1.0, 2.0],
            fx: Some(5.0),
        };
        assert_eq!(p.to_string(), "x: [1.0, 2.0], f(x): Some(5.0)");
        assert_eq!(p.destructure(), (vec![1.0, 2.0], 5.0));
        assert!(Point::default().destructure().1.is_nan());
    }
}
