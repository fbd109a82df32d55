use serde::{Deserialize, Serialize};

use crate::{error::ValidationError, traits::RandomSource, Float};

/// A linear congruential generator (LCG).
///
/// Each draw advances the state with the recurrence
/// ```math
/// X_{n+1} = (a X_n + c) \bmod m
/// ```
/// and returns $`X_{n+1} / m \in [0, 1)`$. The generator has no hidden entropy: two generators
/// with the same seed and parameters produce identical streams. It is not suitable for anything
/// that needs unpredictable values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lcg {
    state: u64,
    multiplier: u64,
    increment: u64,
    modulus: u64,
}

impl Lcg {
    /// The seed used when none is given (the leading digits of $`e`$).
    pub const DEFAULT_SEED: u64 = 2_718_281_828;
    /// The default multiplier $`a`$.
    pub const DEFAULT_MULTIPLIER: u64 = 69069;
    /// The default increment $`c`$.
    pub const DEFAULT_INCREMENT: u64 = 1;
    /// The default modulus $`m`$.
    pub const DEFAULT_MODULUS: u64 = 1 << 16;

    /// Create a generator with the default parameters and the given seed.
    pub const fn new(seed: u64) -> Self {
        Self {
            state: seed,
            multiplier: Self::DEFAULT_MULTIPLIER,
            increment: Self::DEFAULT_INCREMENT,
            modulus: Self::DEFAULT_MODULUS,
        }
    }

    /// Create a generator with custom parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidConfig`] if the multiplier or the modulus is zero.
    pub fn with_parameters(
        seed: u64,
        multiplier: u64,
        increment: u64,
        modulus: u64,
    ) -> Result<Self, ValidationError> {
        if modulus == 0 {
            return Err(ValidationError::config("modulus", "must be positive"));
        }
        if multiplier == 0 {
            return Err(ValidationError::config("multiplier", "must be positive"));
        }
        Ok(Self {
            state: seed,
            multiplier,
            increment,
            modulus,
        })
    }

    /// The current state of the generator.
    pub const fn state(&self) -> u64 {
        self.state
    }

    fn next_state(&mut self) -> u64 {
        let next = (u128::from(self.multiplier) * u128::from(self.state)
            + u128::from(self.increment))
            % u128::from(self.modulus);
        // next < modulus, so it fits back into a u64
        self.state = next as u64;
        self.state
    }
}

impl Default for Lcg {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}

impl RandomSource for Lcg {
    fn draw(&mut self) -> Float {
        let state = self.next_state();
        state as Float / self.modulus as Float
    }
}
