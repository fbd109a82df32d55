use std::convert::Infallible;

use crate::{
    error::PsoError,
    traits::{CostFunction, Status},
};

/// The number of steps an [`Algorithm`] may take if it does not say otherwise.
pub const DEFAULT_MAX_STEPS: usize = 4000;

/// A trait representing an iterative optimization algorithm.
///
/// This trait is implemented for the algorithms found in the [`algorithms`](crate::algorithms)
/// module, and contains all the methods needed to be run by an [`Engine`](crate::core::Engine).
pub trait Algorithm<S: Status, U = (), E = Infallible> {
    /// A type which holds a summary of the algorithm's ending state.
    type Summary;

    /// The maximum number of steps the [`Engine`](crate::core::Engine) will run before giving up.
    fn max_steps(&self) -> usize {
        DEFAULT_MAX_STEPS
    }

    /// Any setup work done before the main steps of the algorithm should be done here. Invalid
    /// input must be rejected here, before any state is built.
    ///
    /// # Errors
    ///
    /// Returns a [`PsoError::Validation`] if the algorithm is misconfigured, or a
    /// [`PsoError::Evaluation`] if the cost function fails.
    fn initialize(
        &mut self,
        func: &dyn CostFunction<U, E>,
        status: &mut S,
        user_data: &mut U,
    ) -> Result<(), PsoError<E>>;

    /// The main "step" of an algorithm, which is repeated until termination conditions are met or
    /// the max number of steps have been taken.
    ///
    /// # Errors
    ///
    /// Returns a [`PsoError::Evaluation`] if the cost function fails.
    fn step(
        &mut self,
        current_step: usize,
        func: &dyn CostFunction<U, E>,
        status: &mut S,
        user_data: &mut U,
    ) -> Result<(), PsoError<E>>;

    /// Runs any termination/convergence checks and returns true if the algorithm has converged.
    /// Developers should also update the [`Status`] of the algorithm here if converged.
    ///
    /// # Errors
    ///
    /// Returns a [`PsoError::Evaluation`] if the cost function fails.
    fn check_for_termination(
        &mut self,
        func: &dyn CostFunction<U, E>,
        status: &mut S,
        user_data: &mut U,
    ) -> Result<bool, PsoError<E>>;

    /// Runs any steps needed by the [`Algorithm`] after termination or convergence. This will run
    /// regardless of whether the [`Algorithm`] converged.
    ///
    /// # Errors
    ///
    /// Returns a [`PsoError::Evaluation`] if the cost function fails.
    #[allow(unused_variables)]
    fn postprocessing(
        &mut self,
        func: &dyn CostFunction<U, E>,
        status: &mut S,
        user_data: &mut U,
    ) -> Result<(), PsoError<E>> {
        Ok(())
    }

    /// Generates a new [`Algorithm::Summary`] from the current state of the [`Algorithm`], which
    /// can be displayed or used elsewhere.
    fn summarize(&self, current_step: usize, status: &S) -> Self::Summary;
}
