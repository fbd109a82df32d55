use fastrand::Rng;

use crate::Float;

/// A source of uniformly distributed random values which drives every stochastic decision of an
/// optimizer.
///
/// Draws are consumed strictly sequentially, so two sources in the same state produce the same
/// run.
pub trait RandomSource {
    /// Draw a value in `[0, 1)` and advance the internal state.
    fn draw(&mut self) -> Float;

    /// Draw a value uniformly between `low` and `high`.
    ///
    /// The result is `low + draw() * (high - low)`, which always lies in
    /// `[min(low, high), max(low, high)]`. Note that it is offset by `low`; adding the width of
    /// the interval instead would shift every value outside of it.
    fn uniform(&mut self, low: Float, high: Float) -> Float {
        low + self.draw() * (high - low)
    }

    /// Advance the state by `n` draws, discarding the values.
    fn discard(&mut self, n: usize) {
        for _ in 0..n {
            self.draw();
        }
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn draw(&mut self) -> Float {
        (**self).draw()
    }
}

impl RandomSource for Rng {
    #[cfg(not(feature = "f32"))]
    fn draw(&mut self) -> Float {
        self.f64()
    }
    #[cfg(feature = "f32")]
    fn draw(&mut self) -> Float {
        self.f32()
    }
}
