use serde::{Deserialize, Serialize};

use crate::{
    core::{mean_distance, BoundaryMethod, Domain, Point, Target},
    error::ValidationError,
    traits::{CostFunction, RandomSource},
    DVector, Float,
};

/// A swarm of particles used in particle swarm optimization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Swarm {
    /// The number of particles
    pub n_particles: usize,
    /// A list of the particles in the swarm
    pub particles: Vec<SwarmParticle>,
    /// The boundary method used by the swarm
    pub boundary_method: BoundaryMethod,
    /// The position initializer used by the swarm
    pub position_initializer: SwarmPositionInitializer,
}

impl Swarm {
    /// Create an empty swarm. Particles are created by [`Swarm::initialize`].
    pub const fn new(
        n_particles: usize,
        boundary_method: BoundaryMethod,
        position_initializer: SwarmPositionInitializer,
    ) -> Self {
        Self {
            n_particles,
            particles: Vec::new(),
            boundary_method,
            position_initializer,
        }
    }

    /// Create and evaluate the particles of the swarm.
    ///
    /// Particles are created in order. For each one the velocity is drawn first (in
    /// `[0, vmax)`) and then the position (uniformly in the domain), following the configured
    /// [`SwarmPositionInitializer`]. Every particle is evaluated once and starts with its
    /// personal best equal to its position. Returns the number of evaluations.
    ///
    /// # Errors
    ///
    /// Returns an `Err(E)` if the evaluation fails. See [`CostFunction::evaluate`] for more
    /// information.
    pub(crate) fn initialize<U, E, R: RandomSource + ?Sized>(
        &mut self,
        rng: &mut R,
        dimension: usize,
        motion: &Motion,
        func: &dyn CostFunction<U, E>,
        user_data: &mut U,
    ) -> Result<usize, E> {
        self.particles = Vec::with_capacity(self.n_particles);
        for i in 0..self.n_particles {
            let (velocity, position) = match &self.position_initializer {
                SwarmPositionInitializer::Diagonal => {
                    let v = rng.draw() * motion.v_max;
                    let x = rng.uniform(motion.domain.low, motion.domain.high);
                    (
                        DVector::from_element(dimension, v),
                        DVector::from_element(dimension, x),
                    )
                }
                SwarmPositionInitializer::Independent => {
                    let velocity = DVector::from_fn(dimension, |_, _| rng.draw() * motion.v_max);
                    let position = DVector::from_fn(dimension, |_, _| {
                        rng.uniform(motion.domain.low, motion.domain.high)
                    });
                    (velocity, position)
                }
                SwarmPositionInitializer::Custom(positions) => {
                    let velocity = DVector::from_fn(dimension, |_, _| rng.draw() * motion.v_max);
                    (velocity, positions[i].clone())
                }
            };
            self.particles
                .push(SwarmParticle::new(position.into(), velocity, func, user_data)?);
        }
        Ok(self.particles.len())
    }

    /// The particle with the best personal value under the given [`Target`]. The first of several
    /// equally good particles is returned.
    pub fn best_particle(&self, target: &Target) -> Option<&SwarmParticle> {
        self.particles.iter().fold(None, |best, particle| match best {
            Some(incumbent) if !particle.best.is_better_than(&incumbent.best, target) => {
                Some(incumbent)
            }
            _ => Some(particle),
        })
    }

    /// The mean Euclidean distance of the particles' current positions from `center`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::DimensionMismatch`] if `center` has a different dimension than
    /// the particles.
    pub fn mean_distance(&self, center: &DVector<Float>) -> Result<Float, ValidationError> {
        mean_distance(
            self.particles.iter().map(|p| p.position.x.as_slice()),
            center.as_slice(),
        )
    }
}

/// Methods to initialize the positions of particles in a swarm.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum SwarmPositionInitializer {
    /// Draw one velocity and one position per particle and use them for every dimension, which
    /// places the particles on the diagonal of the domain.
    #[default]
    Diagonal,
    /// Draw every coordinate of the velocity and position independently.
    Independent,
    /// Start the particles at the given positions (one per particle). Velocities are drawn for
    /// every dimension independently.
    Custom(Vec<DVector<Float>>),
}

/// A particle with a position, velocity, and best known position
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SwarmParticle {
    /// The position of the particle
    pub position: Point,
    /// The velocity of the particle
    pub velocity: DVector<Float>,
    /// The best position this particle has visited
    pub best: Point,
}

impl SwarmParticle {
    /// Create a new particle with the given position and velocity, evaluating the position.
    ///
    /// # Errors
    ///
    /// Returns an `Err(E)` if the evaluation fails. See [`CostFunction::evaluate`] for more
    /// information.
    pub fn new<U, E>(
        position: Point,
        velocity: DVector<Float>,
        func: &dyn CostFunction<U, E>,
        user_data: &mut U,
    ) -> Result<Self, E> {
        let mut position = position;
        position.evaluate(func, user_data)?;
        Ok(Self {
            best: position.clone(),
            position,
            velocity,
        })
    }

    /// Move the particle one step towards its personal best and `gbest` and evaluate the new
    /// position.
    ///
    /// For each dimension, in order, this draws the cognitive factor, then the social factor,
    /// then the inertia weight (if it is drawn per dimension), and finally whatever the boundary
    /// method needs to confine the position.
    ///
    /// # Errors
    ///
    /// Returns an `Err(E)` if the evaluation fails. See [`CostFunction::evaluate`] for more
    /// information.
    pub(crate) fn update<U, E, R: RandomSource + ?Sized>(
        &mut self,
        gbest: &DVector<Float>,
        motion: &Motion,
        rng: &mut R,
        func: &dyn CostFunction<U, E>,
        user_data: &mut U,
    ) -> Result<Float, E> {
        let mut x = self.position.x.clone();
        for i in 0..x.len() {
            let cognitive = motion.c1 * rng.draw() * (self.best.x[i] - x[i]);
            let social = motion.c2 * rng.draw() * (gbest[i] - x[i]);
            let inertia = motion.inertia.weight(rng);
            let v = motion.boundary_method.confine_velocity(
                inertia * self.velocity[i] + cognitive + social,
                motion.v_max,
            );
            self.velocity[i] = v;
            x[i] = motion
                .boundary_method
                .confine_position(x[i] + v, &motion.domain, rng);
        }
        self.position.set_position(x);
        self.position.evaluate(func, user_data)
    }
}

/// The inertia weight as it is applied during a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Inertia {
    PerDimension { low: Float, high: Float },
    Fixed(Float),
}

impl Inertia {
    fn weight<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Float {
        match self {
            Self::PerDimension { low, high } => rng.uniform(*low, *high),
            Self::Fixed(w) => *w,
        }
    }
}

/// Everything a particle needs to move, resolved once per run.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Motion {
    pub(crate) c1: Float,
    pub(crate) c2: Float,
    pub(crate) inertia: Inertia,
    /// absolute velocity cap
    pub(crate) v_max: Float,
    pub(crate) domain: Domain,
    pub(crate) boundary_method: BoundaryMethod,
}
