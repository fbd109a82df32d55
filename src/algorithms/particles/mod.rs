/// Implementation of the Particle Swarm Optimization (PSO) algorithm
pub mod pso;
pub use pso::{ConvergenceCriterion, InertiaWeight, PSOConfig, PSO};

/// [`Swarm`] type for swarm-based optimizers.
pub mod swarm;
pub use swarm::{Swarm, SwarmParticle, SwarmPositionInitializer};

/// [`SwarmStatus`] type for swarm-based optimizers.
pub mod swarm_status;
pub use swarm_status::SwarmStatus;

use std::{ops::ControlFlow, sync::Arc};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::{core::Point, traits::Observer};

/// An [`Observer`] which stores the swarm particles' history as well as the
/// history of global best positions.
#[derive(Debug, Serialize, Deserialize, Default, Clone)]
pub struct TrackingSwarmObserver {
    /// The history of the swarm particles
    pub history: Vec<Vec<SwarmParticle>>,
    /// The history of the best position in the swarm
    pub best_history: Vec<Point>,
}

impl TrackingSwarmObserver {
    /// Finalize the [`TrackingSwarmObserver`] by wrapping it in an [`Arc`] and [`RwLock`] so it
    /// can be read after the run.
    pub fn build() -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(Self::default()))
    }
}

impl Observer<SwarmStatus> for TrackingSwarmObserver {
    fn callback(&mut self, _step: usize, status: &SwarmStatus) -> ControlFlow<()> {
        self.history.push(status.swarm.particles.clone());
        self.best_history.push(status.get_best());
        ControlFlow::Continue(())
    }
}
