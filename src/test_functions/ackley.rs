use std::convert::Infallible;

use crate::{traits::CostFunction, Float, E, PI};

/// The Ackley function, a nearly flat outer region with a deep hole at the origin.
///
/// ```math
/// f(\vec{x}) = -a \exp\left(-b\sqrt{\frac{1}{n}\sum_{i=1}^n x_i^2}\right) - \exp\left(\frac{1}{n}\sum_{i=1}^n \cos(c x_i)\right) + a + e
/// ```
/// with $`a = 20`$, $`b = 0.2`$ and $`c = 2\pi`$. This function has a minimum at
/// $`f(\vec{0}) = 0`$.
pub struct Ackley {
    /// The number of dimensions of the function.
    pub n: usize,
}
impl CostFunction for Ackley {
    fn evaluate(&self, x: &[Float], _user_data: &mut ()) -> Result<Float, Infallible> {
        let n = x.len() as Float;
        let squares = x.iter().map(|xi| xi.powi(2)).sum::<Float>() / n;
        let cosines = x.iter().map(|xi| Float::cos(2.0 * PI * xi)).sum::<Float>() / n;
        Ok(-20.0 * Float::exp(-0.2 * squares.sqrt()) - cosines.exp() + 20.0 + E)
    }
    fn dimension(&self) -> Option<usize> {
        Some(self.n)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::{algorithms::particles::PSOConfig, core::Target, optimize};

    #[test]
    fn test_ackley() {
        let f = Ackley { n: 2 };
        assert_relative_eq!(f.evaluate(&[0.0, 0.0], &mut ()).unwrap(), 0.0, epsilon = 1e-12);
        assert!(f.evaluate(&[1.0, 1.0], &mut ()).unwrap() > 3.0);
        assert!(f.evaluate(&[-4.0, 3.0], &mut ()).unwrap() > 10.0);
    }

    #[test]
    fn test_swarm_improves_on_ackley() {
        let f = Ackley { n: 2 };
        let config = PSOConfig::new((-5.0, 5.0), Target::Minimize).with_convergence(0.0);
        let summary = optimize(&f, config).unwrap();
        assert!(summary.fx < 0.5);
        assert!(summary.best_history.windows(2).all(|w| w[1] <= w[0]));
    }
}
