use std::{convert::Infallible, marker::PhantomData, ops::ControlFlow};

use crate::{
    core::NopAbortSignal,
    error::PsoError,
    traits::{AbortSignal, Algorithm, CostFunction, Observer, Status},
};

/// The main struct used for running [`Algorithm`]s on [`CostFunction`]s.
///
/// The [`Engine`] owns the algorithm and its [`Status`]. After
/// [`process`](Engine::process) returns, the final status and the [`Algorithm::Summary`] can be
/// read from the public fields.
pub struct Engine<A, S, U = (), E = Infallible>
where
    A: Algorithm<S, U, E>,
    S: Status,
{
    /// The [`Status`] of the [`Algorithm`], usually read after a run.
    pub status: S,
    /// The [`Algorithm::Summary`], usually read after a run.
    pub result: A::Summary,

    algorithm: A,
    observers: Vec<Box<dyn Observer<S>>>,
    abort_signal: Box<dyn AbortSignal>,
    _marker: PhantomData<(U, E)>,
}

impl<A, S, U, E> Engine<A, S, U, E>
where
    A: Algorithm<S, U, E>,
    A::Summary: Default,
    S: Status,
{
    /// Creates a new [`Engine`] with the given [`Algorithm`].
    pub fn new(algorithm: A) -> Self {
        Self {
            status: S::default(),
            result: A::Summary::default(),
            algorithm,
            observers: Vec::default(),
            abort_signal: Box::new(NopAbortSignal),
            _marker: PhantomData,
        }
    }

    /// Adds an [`Observer`] which is called after every step. Observers are called in the order
    /// they were added.
    pub fn with_observer<O: Observer<S> + 'static>(mut self, observer: O) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    /// Set the [`AbortSignal`] of the [`Engine`] (default = never abort).
    pub fn with_abort_signal<Sig: AbortSignal + 'static>(mut self, abort_signal: Sig) -> Self {
        self.abort_signal = Box::new(abort_signal);
        self
    }

    /// A reference to the [`Algorithm`] run by this [`Engine`].
    pub const fn algorithm(&self) -> &A {
        &self.algorithm
    }

    /// Run the [`Algorithm`] on the given [`CostFunction`].
    ///
    /// This method first runs [`Algorithm::initialize`], then runs [`Algorithm::step`] in a loop,
    /// terminating if [`Algorithm::check_for_termination`] returns `true`, if an [`Observer`]
    /// breaks, if the [`AbortSignal`] is triggered, or once [`Algorithm::max_steps`] steps have
    /// been taken. Each step is followed by a sequential call to all [`Observer`]s' callback
    /// functions. Finally, regardless of convergence, [`Algorithm::postprocessing`] and
    /// [`Algorithm::summarize`] are called.
    ///
    /// # Errors
    ///
    /// Returns a [`PsoError::Validation`] if the algorithm rejects its configuration, or a
    /// [`PsoError::Evaluation`] if the cost function fails. See [`CostFunction::evaluate`] for
    /// more information.
    pub fn process(
        &mut self,
        func: &dyn CostFunction<U, E>,
        user_data: &mut U,
    ) -> Result<(), PsoError<E>> {
        self.status.reset();
        self.abort_signal.reset();
        self.algorithm
            .initialize(func, &mut self.status, user_data)?;
        let max_steps = self.algorithm.max_steps();
        let mut current_step = 0;
        let mut observer_termination = false;
        let mut converged = false;
        while current_step < max_steps && !self.abort_signal.is_aborted() {
            self.algorithm
                .step(current_step, func, &mut self.status, user_data)?;
            current_step += 1;
            for observer in &mut self.observers {
                if let ControlFlow::Break(()) = observer.callback(current_step, &self.status) {
                    observer_termination = true;
                }
            }
            if observer_termination {
                self.status.update_message("Terminated by observer");
                break;
            }
            if self
                .algorithm
                .check_for_termination(func, &mut self.status, user_data)?
            {
                converged = true;
                break;
            }
        }
        self.algorithm
            .postprocessing(func, &mut self.status, user_data)?;
        if !observer_termination && !converged && current_step >= max_steps {
            self.status
                .update_message(&format!("Maximum number of steps reached ({max_steps})!"));
        }
        if self.abort_signal.is_aborted() {
            self.status.update_message("Abort signal received");
        }
        self.result = self.algorithm.summarize(current_step, &self.status);
        Ok(())
    }
}
