//! `omnipso` provides an omni-dimensional particle swarm optimizer (PSO). Given a scalar-valued
//! objective over an $`N`$-dimensional box, a swarm of particles searches for the input which
//! minimizes it, maximizes it, or brings it as close as possible to a target value
//! ($`f(\mathbb{R}^n) \to \mathbb{R}`$).
//!
//! Every stochastic decision is driven by a seeded [`RandomSource`](crate::traits::RandomSource)
//! (a linear congruential generator by default), so a run is reproducible bit-for-bit from its
//! seed and configuration.
//!
//! # Table of Contents
//! - [Key Features](#key-features)
//! - [Quick Start](#quick-start)
//! - [Boundaries](#boundaries)
//! - [Convergence](#convergence)
//!
//! # Key Features
//! * Minimization, maximization, or matching a target value with the same swarm.
//! * A deterministic random source with overridable parameters and an explicit seed.
//! * Soft (nonlinear) boundary handling which keeps particles strictly inside the domain.
//! * Trait-based extension points for cost functions, random sources, observers and abort
//!   signals.
//!
//! # Quick Start
//!
//! Any closure `Fn(&[Float]) -> Float` can be wrapped in a [`FnCost`](crate::traits::FnCost):
//!
//! ```rust
//! use omnipso::prelude::*;
//!
//! let sine = FnCost::new(|x: &[Float]| x[0].sin()).with_dimension(1);
//! let config = PSOConfig::new((0.0, 2.0 * PI), Target::Minimize)
//!     .with_n_particles(30)
//!     .with_seed(7);
//! let summary = optimize(&sine, config).unwrap();
//! let (x, fx) = summary.best();
//! assert!((x[0] - 1.5 * PI).abs() < 0.1);
//! assert!(fx < -0.99);
//! ```
//!
//! Structs can implement [`CostFunction`](crate::traits::CostFunction) directly, which also
//! allows fallible evaluation and user data:
//!
//! ```rust
//! use std::convert::Infallible;
//! use omnipso::prelude::*;
//!
//! pub struct Paraboloid {
//!     pub n: usize,
//! }
//! impl CostFunction for Paraboloid {
//!     fn evaluate(&self, x: &[Float], _user_data: &mut ()) -> Result<Float, Infallible> {
//!         Ok(x.iter().map(|xi| (xi - 1.0).powi(2)).sum())
//!     }
//!     fn dimension(&self) -> Option<usize> {
//!         Some(self.n)
//!     }
//! }
//!
//! let config = PSOConfig::new((-5.0, 5.0), Target::Minimize).with_convergence(0.0);
//! let mut engine: Engine<PSO, SwarmStatus> = Engine::new(PSO::new(config));
//! engine.process(&Paraboloid { n: 2 }, &mut ()).unwrap();
//! assert!(engine.result.fx < 0.01);
//! println!("{}", engine.result);
//! ```
//!
//! # Boundaries
//! After every update each velocity component is squashed into `[-vmax, vmax]` and each position
//! component into the domain `[low, high]` with the nonlinear rectifier
//! ```math
//! r(x) = \frac{x_1 - x_0}{1 + e^{-e\frac{2x - (x_1 + x_0)}{x_1 - x_0}}} + x_0
//! ```
//! which never returns a value on or outside the boundary. Hard clipping and uniform resampling
//! are available through [`BoundaryMethod`](crate::core::BoundaryMethod).
//!
//! # Convergence
//! A run ends after `max_steps` steps or earlier if the
//! [`ConvergenceCriterion`](crate::algorithms::particles::ConvergenceCriterion) is satisfied. By
//! default this happens when the best value changes by less than the threshold over one step or
//! when the swarm's mean distance from the global best falls below it.
#![warn(
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::doc_markdown,
    clippy::doc_link_with_quotes,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::perf,
    clippy::style,
    missing_docs
)]

/// Module containing optimization algorithms
pub mod algorithms;
/// Module containing the core types used by the algorithms
pub mod core;
/// Module containing the error types of the crate
pub mod error;
/// Module containing standard functions for testing algorithms
pub mod test_functions;
/// Module containing the extension traits of the crate
pub mod traits;

pub use nalgebra::DVector;

use crate::{
    algorithms::particles::{PSOConfig, SwarmStatus, PSO},
    core::{Engine, SwarmSummary},
    error::PsoError,
    traits::CostFunction,
};

/// The floating-point type used throughout the crate (`f64`, or `f32` with the `f32` feature).
#[cfg(not(feature = "f32"))]
pub type Float = f64;
/// The floating-point type used throughout the crate (`f64`, or `f32` with the `f32` feature).
#[cfg(feature = "f32")]
pub type Float = f32;

/// Archimedes' constant at the crate's [`Float`] precision.
#[cfg(not(feature = "f32"))]
pub const PI: Float = std::f64::consts::PI;
/// Archimedes' constant at the crate's [`Float`] precision.
#[cfg(feature = "f32")]
pub const PI: Float = std::f32::consts::PI;

/// Euler's number at the crate's [`Float`] precision.
#[cfg(not(feature = "f32"))]
pub const E: Float = std::f64::consts::E;
/// Euler's number at the crate's [`Float`] precision.
#[cfg(feature = "f32")]
pub const E: Float = std::f32::consts::E;

/// Prelude module containing everything someone should need to use this crate for non-development
/// purposes
pub mod prelude {
    pub use crate::{
        algorithms::particles::{
            ConvergenceCriterion, InertiaWeight, PSOConfig, SwarmPositionInitializer,
            SwarmStatus, PSO,
        },
        core::{
            AtomicAbortSignal, BoundaryMethod, CtrlCAbortSignal, Domain, Engine, Lcg, Point,
            SwarmSummary, Target,
        },
        error::{PsoError, ValidationError},
        optimize,
        traits::{AbortSignal, CostFunction, FnCost, Observer, RandomSource},
        Float, PI,
    };
}

/// Run a particle swarm optimization of `func` with the given [`PSOConfig`] and return the
/// resulting [`SwarmSummary`].
///
/// This is a shorthand for building an [`Engine`] around a freshly seeded [`PSO`] and processing
/// `func` without user data. The best position and value are available through
/// [`SwarmSummary::best`].
///
/// # Errors
///
/// Returns [`PsoError::Validation`] if the configuration is invalid (checked before any particle
/// is created) and [`PsoError::Evaluation`] if `func` fails.
pub fn optimize<E>(
    func: &dyn CostFunction<(), E>,
    config: PSOConfig,
) -> Result<SwarmSummary, PsoError<E>> {
    let mut engine: Engine<PSO, SwarmStatus, (), E> = Engine::new(PSO::new(config));
    engine.process(func, &mut ())?;
    Ok(engine.result)
}

