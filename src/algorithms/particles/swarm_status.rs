use serde::{Deserialize, Serialize};

use crate::{algorithms::particles::Swarm, core::Point, traits::Status, Float};

/// A status for particle swarm optimization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SwarmStatus {
    /// The global best position found by all particles
    pub gbest: Point,
    /// The global best value before the most recent step
    pub previous_best: Option<Float>,
    /// An indicator of whether the swarm has converged
    pub converged: bool,
    /// A message containing information about the condition of the swarm or convergence
    pub message: String,
    /// The swarm
    pub swarm: Swarm,
    /// The number of function evaluations
    pub n_f_evals: usize,
    /// The mean distance of the particles from the global best after the most recent step
    pub mean_distance: Float,
    /// The global best value after each step
    pub best_history: Vec<Float>,
    /// The mean distance from the global best after each step
    pub distance_history: Vec<Float>,
}

impl SwarmStatus {
    /// Get the global best position found by the swarm.
    pub fn get_best(&self) -> Point {
        self.gbest.clone()
    }
}

impl Status for SwarmStatus {
    fn reset(&mut self) {
        *self = Self::default();
    }
    fn converged(&self) -> bool {
        self.converged
    }
    fn message(&self) -> &str {
        &self.message
    }
    fn update_message(&mut self, message: &str) {
        self.message = message.to_string();
    }
}
