use std::{fmt::Debug, ops::ControlFlow};

use crate::traits::Observer;

/// A debugging observer which logs the step and status at the current step of an algorithm at
/// the `debug` level through [`tracing`].
///
/// # Usage:
///
/// ```rust
/// use omnipso::prelude::*;
/// use omnipso::core::DebugObserver;
///
/// let f = FnCost::new(|x: &[Float]| x[0].powi(2)).with_dimension(1);
/// let config = PSOConfig::new((-1.0, 1.0), Target::Minimize).with_max_steps(3);
/// let mut engine: Engine<PSO, SwarmStatus> = Engine::new(PSO::new(config)).with_observer(DebugObserver);
/// engine.process(&f, &mut ()).unwrap();
/// // ^ This will log the status after each step
/// ```
#[derive(Default, Clone, Copy)]
pub struct DebugObserver;

impl<S: Debug> Observer<S> for DebugObserver {
    fn callback(&mut self, step: usize, status: &S) -> ControlFlow<()> {
        tracing::debug!(step, ?status, "observer");
        ControlFlow::Continue(())
    }
}
