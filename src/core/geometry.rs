use serde::{Deserialize, Serialize};

use crate::{core::Domain, error::ValidationError, traits::RandomSource, Float, E};

/// Calculate the Euclidean distance between two points in $`N`$-dimensional space.
///
/// # Errors
///
/// Returns [`ValidationError::DimensionMismatch`] if the points have different lengths.
pub fn euclidean_distance(p1: &[Float], p2: &[Float]) -> Result<Float, ValidationError> {
    if p1.len() != p2.len() {
        return Err(ValidationError::DimensionMismatch {
            expected: p1.len(),
            found: p2.len(),
        });
    }
    Ok(p1
        .iter()
        .zip(p2)
        .map(|(a, b)| (a - b).powi(2))
        .sum::<Float>()
        .sqrt())
}

/// The mean Euclidean distance of a set of points from `center` (`0` for an empty set).
///
/// # Errors
///
/// Returns [`ValidationError::DimensionMismatch`] if any point has a different length than
/// `center`.
pub fn mean_distance<'a, I>(points: I, center: &[Float]) -> Result<Float, ValidationError>
where
    I: IntoIterator<Item = &'a [Float]>,
{
    let mut total = 0.0;
    let mut count = 0usize;
    for point in points {
        total += euclidean_distance(point, center)?;
        count += 1;
    }
    if count == 0 {
        return Ok(0.0);
    }
    Ok(total / count as Float)
}

/// Nonlinear rectifier which squashes `x` into the open interval `(x0, x1)`:
///
/// ```math
/// r(x) = \frac{x_1 - x_0}{1 + e^{-e\frac{2x - (x_1 + x_0)}{x_1 - x_0}}} + x_0
/// ```
///
/// This is a logistic curve stretched over the interval. The midpoint is a fixed point, values
/// near it move only slightly, and values far outside the interval approach the nearest bound
/// without reaching it. Where floating-point saturation would land exactly on a bound, the
/// result is moved one representable value inward. Requires `x0 < x1`; `NaN` is passed through.
pub fn rectify(x: Float, x0: Float, x1: Float) -> Float {
    let width = x1 - x0;
    let squashed = width / (1.0 + Float::exp(-E * (2.0 * x - (x1 + x0)) / width)) + x0;
    if squashed <= x0 {
        next_toward(x0, x1)
    } else if squashed >= x1 {
        next_toward(x1, x0)
    } else {
        squashed
    }
}

/// The representable value adjacent to `x` in the direction of `target`.
fn next_toward(x: Float, target: Float) -> Float {
    if x.is_nan() || target.is_nan() || x == target {
        return x;
    }
    if x == 0.0 {
        let tiny = Float::from_bits(1);
        return if target > 0.0 { tiny } else { -tiny };
    }
    let bits = x.to_bits();
    if (target > x) == (x > 0.0) {
        Float::from_bits(bits + 1)
    } else {
        Float::from_bits(bits - 1)
    }
}

/// Methods for keeping particle velocities and positions inside their limits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundaryMethod {
    /// Squash velocities into `(-vmax, vmax)` and positions into `(low, high)` with [`rectify`].
    #[default]
    Rectify,
    /// Clamp velocities into `[-vmax, vmax]` and positions into `[low, high]`.
    Clip,
    /// Clamp velocities into `[-vmax, vmax]` and redraw any position coordinate that is not
    /// strictly inside the domain uniformly within it.
    Resample,
}

impl BoundaryMethod {
    /// Confine a velocity component to the velocity cap `v_max > 0`.
    pub fn confine_velocity(&self, velocity: Float, v_max: Float) -> Float {
        match self {
            Self::Rectify => rectify(velocity, -v_max, v_max),
            Self::Clip | Self::Resample => velocity.clamp(-v_max, v_max),
        }
    }

    /// Confine a position component to the domain. Only [`BoundaryMethod::Resample`] consumes
    /// draws from `rng`, and only when the coordinate has left the domain.
    pub fn confine_position<R: RandomSource + ?Sized>(
        &self,
        position: Float,
        domain: &Domain,
        rng: &mut R,
    ) -> Float {
        match self {
            Self::Rectify => rectify(position, domain.low, domain.high),
            Self::Clip => position.clamp(domain.low, domain.high),
            Self::Resample => {
                if domain.contains_strictly(position) {
                    position
                } else {
                    rng.uniform(domain.low, domain.high)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::core::Lcg;

    #[test]
    fn test_distance() {
        assert_eq!(euclidean_distance(&[0.0, 0.0], &[3.0, 4.0]), Ok(5.0));
        let p = [1.5, -2.0, 7.25];
        assert_eq!(euclidean_distance(&p, &p), Ok(0.0));
        let q = [-3.0, 0.5, 2.0];
        assert_eq!(euclidean_distance(&p, &q), euclidean_distance(&q, &p));
        assert_eq!(euclidean_distance(&[], &[]), Ok(0.0));
    }

    #[test]
    fn test_distance_dimension_mismatch() {
        assert_eq!(
            euclidean_distance(&[1.0, 2.0], &[1.0, 2.0, 3.0]),
            Err(ValidationError::DimensionMismatch {
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn test_mean_distance() {
        let points: Vec<Vec<Float>> = vec![vec![3.0, 4.0], vec![0.0, 1.0], vec![0.0, 0.0]];
        let mean = mean_distance(points.iter().map(Vec::as_slice), &[0.0, 0.0]).unwrap();
        assert_relative_eq!(mean, 2.0);
        let empty: Vec<&[Float]> = vec![];
        assert_eq!(mean_distance(empty, &[0.0]), Ok(0.0));
        assert!(mean_distance(points.iter().map(Vec::as_slice), &[0.0]).is_err());
    }

    #[test]
    fn test_rectify_midpoint_is_fixed() {
        assert_eq!(rectify(0.0, -1.0, 1.0), 0.0);
        assert_relative_eq!(rectify(3.0, 2.0, 4.0), 3.0);
    }

    #[test]
    fn test_rectify_formula() {
        let x: Float = 0.25;
        let expected = 2.0 / (1.0 + Float::exp(-E * (2.0 * x) / 2.0)) - 1.0;
        assert_relative_eq!(rectify(x, -1.0, 1.0), expected);
        // monotone increasing
        assert!(rectify(0.1, -1.0, 1.0) < rectify(0.2, -1.0, 1.0));
    }

    #[test]
    fn test_rectify_stays_in_open_interval() {
        let bounds: [(Float, Float); 4] = [
            (-1.0, 1.0),
            (0.0, 2.0 * crate::PI),
            (3.0, 3.5),
            (-0.5, 0.0),
        ];
        let xs: [Float; 10] = [
            Float::MIN,
            -1e6,
            -50.0,
            -1.0,
            0.0,
            0.49,
            1.0,
            50.0,
            1e6,
            Float::MAX,
        ];
        for (x0, x1) in bounds {
            for x in xs {
                let r = rectify(x, x0, x1);
                assert!(x0 < r && r < x1, "rectify({x}, {x0}, {x1}) = {r}");
            }
            assert!(x0 < rectify(Float::INFINITY, x0, x1));
            assert!(rectify(Float::INFINITY, x0, x1) < x1);
            assert!(x0 < rectify(Float::NEG_INFINITY, x0, x1));
        }
        assert!(rectify(Float::NAN, 0.0, 1.0).is_nan());
    }

    #[test]
    fn test_next_toward() {
        assert!(next_toward(1.0, 2.0) > 1.0);
        assert!(next_toward(1.0, 0.0) < 1.0);
        assert!(next_toward(-1.0, 0.0) > -1.0);
        assert!(next_toward(-1.0, -2.0) < -1.0);
        assert!(next_toward(0.0, 1.0) > 0.0);
        assert!(next_toward(0.0, -1.0) < 0.0);
        assert_eq!(next_toward(1.0, 1.0), 1.0);
    }

    #[test]
    fn test_boundary_methods() {
        let domain = Domain::new(0.0, 1.0);
        let mut rng = Lcg::new(3);

        let clip = BoundaryMethod::Clip;
        assert_eq!(clip.confine_velocity(0.5, 0.2), 0.2);
        assert_eq!(clip.confine_velocity(-0.5, 0.2), -0.2);
        assert_eq!(clip.confine_position(1.7, &domain, &mut rng), 1.0);
        assert_eq!(clip.confine_position(0.3, &domain, &mut rng), 0.3);

        let rectify = BoundaryMethod::Rectify;
        let v = rectify.confine_velocity(5.0, 0.2);
        assert!(v > 0.0 && v < 0.2);
        let x = rectify.confine_position(-5.0, &domain, &mut rng);
        assert!(x > 0.0 && x < 1.0);

        let resample = BoundaryMethod::Resample;
        assert_eq!(resample.confine_velocity(0.5, 0.2), 0.2);
        let before = rng.state();
        assert_eq!(resample.confine_position(0.3, &domain, &mut rng), 0.3);
        assert_eq!(rng.state(), before);
        let x = resample.confine_position(1.0, &domain, &mut rng);
        assert!(domain.contains(x));
        assert_ne!(rng.state(), before);
    }
}
