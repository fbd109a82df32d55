use std::convert::Infallible;

use crate::Float;

/// A trait which describes a function $`f(\mathbb{R}^n) \to \mathbb{R}`$
///
/// Such a function may also take a `user_data: &mut U` field which can be used to pass external
/// arguments to the function during optimization, or can be modified by the function itself.
///
/// The `CostFunction` trait takes a generic `U` representing the type of user data/arguments
/// and a generic `E` representing any possible errors that might be returned during function
/// execution.
///
/// Functions are assumed to be pure: evaluating the same point twice must give the same value.
pub trait CostFunction<U = (), E = Infallible> {
    /// The evaluation of the function at a point `x` with the given arguments/user data.
    ///
    /// # Errors
    ///
    /// Returns an `Err(E)` if the evaluation fails. Users should implement this trait to return a
    /// [`std::convert::Infallible`] if the function evaluation never fails.
    fn evaluate(&self, x: &[Float], user_data: &mut U) -> Result<Float, E>;

    /// The number of parameters the function takes, if it is known.
    ///
    /// Optimizers use this when no dimension is configured explicitly and reject runs where both
    /// are given and disagree.
    fn dimension(&self) -> Option<usize> {
        None
    }
}

/// Adapter which turns a closure `Fn(&[Float]) -> Float` into a [`CostFunction`].
///
/// ```rust
/// use omnipso::prelude::*;
///
/// let f = FnCost::new(|x: &[Float]| x[0] * x[1]).with_dimension(2);
/// assert_eq!(f.evaluate(&[2.0, 3.0], &mut ()).unwrap(), 6.0);
/// assert_eq!(f.dimension(), Some(2));
/// ```
#[derive(Clone, Copy)]
pub struct FnCost<F> {
    func: F,
    dimension: Option<usize>,
}

impl<F> FnCost<F>
where
    F: Fn(&[Float]) -> Float,
{
    /// Wrap a closure. The dimension is unknown until [`FnCost::with_dimension`] is called.
    pub const fn new(func: F) -> Self {
        Self {
            func,
            dimension: None,
        }
    }

    /// Declare the number of parameters the closure expects.
    pub const fn with_dimension(mut self, dimension: usize) -> Self {
        self.dimension = Some(dimension);
        self
    }
}

impl<F> CostFunction for FnCost<F>
where
    F: Fn(&[Float]) -> Float,
{
    fn evaluate(&self, x: &[Float], _user_data: &mut ()) -> Result<Float, Infallible> {
        Ok((self.func)(x))
    }

    fn dimension(&self) -> Option<usize> {
        self.dimension
    }
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use super::*;

    struct TestFunction;
    impl CostFunction for TestFunction {
        fn evaluate(&self, x: &[Float], _: &mut ()) -> Result<Float, Infallible> {
            Ok(x[0].powi(2) + x[1].powi(2) + 1.0)
        }
    }

    struct Counting;
    impl CostFunction<usize> for Counting {
        fn evaluate(&self, x: &[Float], calls: &mut usize) -> Result<Float, Infallible> {
            *calls += 1;
            Ok(x.iter().sum())
        }
        fn dimension(&self) -> Option<usize> {
            Some(3)
        }
    }

    #[test]
    fn test_cost_function() {
        let y = TestFunction.evaluate(&[1.0, 2.0], &mut ()).unwrap();
        assert_eq!(y, 6.0);
        assert_eq!(TestFunction.dimension(), None);
    }

    #[test]
    fn test_cost_function_user_data() {
        let mut calls = 0;
        Counting.evaluate(&[1.0, 2.0, 3.0], &mut calls).unwrap();
        Counting.evaluate(&[1.0, 2.0, 3.0], &mut calls).unwrap();
        assert_eq!(calls, 2);
        assert_eq!(Counting.dimension(), Some(3));
    }

    #[test]
    fn test_fn_cost() {
        let f = FnCost::new(|x: &[Float]| x.iter().product());
        assert_eq!(f.dimension(), None);
        assert_eq!(f.evaluate(&[2.0, 3.0, 4.0], &mut ()).unwrap(), 24.0);
        let f = f.with_dimension(3);
        assert_eq!(f.dimension(), Some(3));
    }
}
