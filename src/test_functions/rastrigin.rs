use std::convert::Infallible;

use crate::{traits::CostFunction, Float, PI};

/// The Rastrigin function, a non-convex function with a single minimum but many local minima.
///
/// ```math
/// f(\vec{x}) = 10n + \sum_{i=1}^n (x_i^2 - 10cos(2\pi x_i))
/// ```
/// This function has a minimum at $`f(\vec{0}) = 0`$.
pub struct Rastrigin {
    /// The number of dimensions of the function.
    pub n: usize,
}
impl CostFunction for Rastrigin {
    fn evaluate(&self, x: &[Float], _user_data: &mut ()) -> Result<Float, Infallible> {
        #[allow(clippy::suboptimal_flops)]
        Ok(10.0 * self.n as Float
            + x.iter()
                .map(|xi| xi.powi(2) - 10.0 * Float::cos(2.0 * PI * xi))
                .sum::<Float>())
    }
    fn dimension(&self) -> Option<usize> {
        Some(self.n)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_rastrigin() {
        let f = Rastrigin { n: 2 };
        assert_relative_eq!(f.evaluate(&[0.0, 0.0], &mut ()).unwrap(), 0.0);
        // integer coordinates sit on the local minima
        assert_relative_eq!(f.evaluate(&[1.0, -2.0], &mut ()).unwrap(), 5.0, epsilon = 1e-9);
        assert!(f.evaluate(&[0.5, 0.5], &mut ()).unwrap() > 40.0);
    }
}
