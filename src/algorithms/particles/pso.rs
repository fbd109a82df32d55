use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    algorithms::particles::{
        swarm::{Inertia, Motion},
        Swarm, SwarmPositionInitializer, SwarmStatus,
    },
    core::{BoundaryMethod, Domain, Lcg, SwarmSummary, Target},
    error::{PsoError, ValidationError},
    traits::{Algorithm, CostFunction, RandomSource, Status},
    Float,
};

/// Policies for the inertia weight $`\omega`$ which scales a particle's previous velocity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InertiaWeight {
    /// Draw a fresh weight uniformly in `[low, high]` for every particle, dimension and step.
    PerDimension {
        /// The smallest weight.
        low: Float,
        /// The largest weight.
        high: Float,
    },
    /// Draw one weight uniformly in `[low, high]` at the start of each run and use it throughout.
    PerRun {
        /// The smallest weight.
        low: Float,
        /// The largest weight.
        high: Float,
    },
    /// Use a fixed weight.
    Constant(Float),
}

impl Default for InertiaWeight {
    fn default() -> Self {
        Self::PerDimension {
            low: 0.5,
            high: 1.0,
        }
    }
}

impl InertiaWeight {
    fn validate(&self) -> Result<(), ValidationError> {
        match *self {
            Self::PerDimension { low, high } | Self::PerRun { low, high } => {
                if low.is_finite() && high.is_finite() && low <= high {
                    Ok(())
                } else {
                    Err(ValidationError::config(
                        "inertia",
                        format!("the range [{low}, {high}] must be finite and ordered"),
                    ))
                }
            }
            Self::Constant(w) if !w.is_finite() => Err(ValidationError::config(
                "inertia",
                format!("the weight {w} must be finite"),
            )),
            Self::Constant(_) => Ok(()),
        }
    }
}

/// Conditions under which a swarm is considered converged. Every condition compares against the
/// `convergence` threshold of the [`PSOConfig`] and is checked after each step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum ConvergenceCriterion {
    /// The global best value changed by less than the threshold during the last step.
    BestValueDelta,
    /// The mean distance of the particles from the global best is below the threshold.
    MeanDistance,
    /// Either [`ConvergenceCriterion::BestValueDelta`] or
    /// [`ConvergenceCriterion::MeanDistance`] holds.
    #[default]
    Either,
    /// The global best value is within the threshold of a known optimal value.
    KnownOptimum(Float),
}

impl ConvergenceCriterion {
    fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::KnownOptimum(value) if !value.is_finite() => Err(ValidationError::config(
                "criterion",
                format!("the known optimum {value} must be finite"),
            )),
            _ => Ok(()),
        }
    }
}

/// The configuration of a [`PSO`] run.
///
/// All values are checked by [`PSOConfig::validate`] when a run starts, so the builder methods
/// never fail. Missing fields take their default values when a configuration is deserialized.
///
/// ```rust
/// use omnipso::prelude::*;
///
/// let config: PSOConfig = serde_json::from_str(
///     r#"{"n_particles": 40, "domain": {"low": -5.0, "high": 5.0}, "target": "Maximize"}"#,
/// )
/// .unwrap();
/// assert_eq!(config.n_particles, 40);
/// assert_eq!(config.max_steps, 100);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PSOConfig {
    /// The number of particles (default = `25`).
    pub n_particles: usize,
    /// The number of dimensions. If `None`, the dimension reported by the
    /// [`CostFunction`] is used.
    pub dimension: Option<usize>,
    /// The maximum number of steps (default = `100`).
    pub max_steps: usize,
    /// The convergence threshold used by the [`ConvergenceCriterion`] (default = `0.001`). A
    /// threshold of zero disables early stopping.
    pub convergence: Float,
    /// The velocity cap as a fraction of the domain width (default = `0.1`).
    pub vmax: Float,
    /// The cognitive weight $`c_1`$ (default = `2.0`).
    pub c1: Float,
    /// The social weight $`c_2`$ (default = `2.0`).
    pub c2: Float,
    /// The inertia weight policy (default = drawn in `[0.5, 1.0]` per dimension).
    pub inertia: InertiaWeight,
    /// The convergence criterion (default = [`ConvergenceCriterion::Either`]).
    pub criterion: ConvergenceCriterion,
    /// What the swarm is looking for (default = [`Target::Minimize`]).
    pub target: Target,
    /// The search domain of every coordinate (default = `[0, 1]`).
    pub domain: Domain,
    /// The seed of the default random source. If `None`, [`Lcg::DEFAULT_SEED`] is used.
    pub seed: Option<u64>,
    /// The number of draws discarded from the random source at the start of each run
    /// (default = `0`).
    pub warmup: usize,
    /// How velocities and positions are kept inside their limits
    /// (default = [`BoundaryMethod::Rectify`]).
    pub boundary_method: BoundaryMethod,
    /// How the particles are placed at the start of a run
    /// (default = [`SwarmPositionInitializer::Diagonal`]).
    pub position_initializer: SwarmPositionInitializer,
    /// Optional names of the parameters, used when printing a [`SwarmSummary`].
    pub parameter_names: Option<Vec<String>>,
}

impl Default for PSOConfig {
    fn default() -> Self {
        Self {
            n_particles: 25,
            dimension: None,
            max_steps: 100,
            convergence: 0.001,
            vmax: 0.1,
            c1: 2.0,
            c2: 2.0,
            inertia: InertiaWeight::default(),
            criterion: ConvergenceCriterion::default(),
            target: Target::default(),
            domain: Domain::default(),
            seed: None,
            warmup: 0,
            boundary_method: BoundaryMethod::default(),
            position_initializer: SwarmPositionInitializer::default(),
            parameter_names: None,
        }
    }
}

impl PSOConfig {
    /// Create a configuration for the given domain and target with default values for everything
    /// else.
    pub fn new(domain: impl Into<Domain>, target: Target) -> Self {
        Self {
            domain: domain.into(),
            target,
            ..Default::default()
        }
    }
    /// Sets the number of particles.
    pub const fn with_n_particles(mut self, value: usize) -> Self {
        self.n_particles = value;
        self
    }
    /// Sets the number of dimensions explicitly.
    pub const fn with_dimension(mut self, value: usize) -> Self {
        self.dimension = Some(value);
        self
    }
    /// Sets the maximum number of steps.
    pub const fn with_max_steps(mut self, value: usize) -> Self {
        self.max_steps = value;
        self
    }
    /// Sets the convergence threshold.
    pub const fn with_convergence(mut self, value: Float) -> Self {
        self.convergence = value;
        self
    }
    /// Sets the velocity cap as a fraction of the domain width.
    pub const fn with_vmax(mut self, value: Float) -> Self {
        self.vmax = value;
        self
    }
    /// Sets the cognitive weight $`c_1`$ which controls the particle's tendency to move towards
    /// its personal best.
    pub const fn with_c1(mut self, value: Float) -> Self {
        self.c1 = value;
        self
    }
    /// Sets the social weight $`c_2`$ which controls the particle's tendency to move towards the
    /// global best.
    pub const fn with_c2(mut self, value: Float) -> Self {
        self.c2 = value;
        self
    }
    /// Sets the [`InertiaWeight`] policy.
    pub const fn with_inertia(mut self, value: InertiaWeight) -> Self {
        self.inertia = value;
        self
    }
    /// Sets the [`ConvergenceCriterion`].
    pub const fn with_criterion(mut self, value: ConvergenceCriterion) -> Self {
        self.criterion = value;
        self
    }
    /// Sets the [`Target`].
    pub const fn with_target(mut self, value: Target) -> Self {
        self.target = value;
        self
    }
    /// Sets the search [`Domain`].
    pub fn with_domain(mut self, value: impl Into<Domain>) -> Self {
        self.domain = value.into();
        self
    }
    /// Sets the seed of the default random source.
    pub const fn with_seed(mut self, value: u64) -> Self {
        self.seed = Some(value);
        self
    }
    /// Sets the number of draws discarded from the random source before each run.
    pub const fn with_warmup(mut self, value: usize) -> Self {
        self.warmup = value;
        self
    }
    /// Sets the [`BoundaryMethod`].
    pub const fn with_boundary_method(mut self, value: BoundaryMethod) -> Self {
        self.boundary_method = value;
        self
    }
    /// Sets the [`SwarmPositionInitializer`].
    pub fn with_position_initializer(mut self, value: SwarmPositionInitializer) -> Self {
        self.position_initializer = value;
        self
    }
    /// Sets the names of the parameters. This is only used for printing and debugging purposes.
    pub fn with_parameter_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parameter_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Check the configuration and resolve the number of dimensions, given the dimension
    /// reported by the cost function (if any).
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidDomain`] or [`ValidationError::InvalidTarget`] for a bad
    /// domain or target, [`ValidationError::DimensionMismatch`] if the explicit dimension, the
    /// cost function, the parameter names, or custom starting positions disagree, and
    /// [`ValidationError::InvalidConfig`] for any other out-of-range parameter.
    pub fn validate(&self, cost_dimension: Option<usize>) -> Result<usize, ValidationError> {
        self.domain.validate()?;
        self.target.validate()?;
        let dimension = match (self.dimension, cost_dimension) {
            (Some(expected), Some(found)) if expected != found => {
                return Err(ValidationError::DimensionMismatch { expected, found })
            }
            (Some(dimension), _) | (None, Some(dimension)) => dimension,
            (None, None) => {
                return Err(ValidationError::config(
                    "dimension",
                    "must be set in the configuration or reported by the cost function",
                ))
            }
        };
        if dimension == 0 {
            return Err(ValidationError::config("dimension", "must be positive"));
        }
        if self.n_particles == 0 {
            return Err(ValidationError::config("n_particles", "must be positive"));
        }
        if self.max_steps == 0 {
            return Err(ValidationError::config("max_steps", "must be positive"));
        }
        if !(self.vmax.is_finite() && self.vmax > 0.0) {
            return Err(ValidationError::config(
                "vmax",
                format!("must be finite and positive, found {}", self.vmax),
            ));
        }
        for (parameter, value) in [("c1", self.c1), ("c2", self.c2)] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ValidationError::config(
                    parameter,
                    format!("must be finite and non-negative, found {value}"),
                ));
            }
        }
        if !(self.convergence.is_finite() && self.convergence >= 0.0) {
            return Err(ValidationError::config(
                "convergence",
                format!("must be finite and non-negative, found {}", self.convergence),
            ));
        }
        self.inertia.validate()?;
        self.criterion.validate()?;
        if let Some(names) = &self.parameter_names {
            if names.len() != dimension {
                return Err(ValidationError::DimensionMismatch {
                    expected: dimension,
                    found: names.len(),
                });
            }
        }
        if let SwarmPositionInitializer::Custom(positions) = &self.position_initializer {
            if positions.len() != self.n_particles {
                return Err(ValidationError::config(
                    "position_initializer",
                    format!(
                        "expected {} starting positions, found {}",
                        self.n_particles,
                        positions.len()
                    ),
                ));
            }
            if let Some(position) = positions.iter().find(|p| p.len() != dimension) {
                return Err(ValidationError::DimensionMismatch {
                    expected: dimension,
                    found: position.len(),
                });
            }
        }
        Ok(dimension)
    }
}

/// Particle Swarm Optimizer
///
/// The PSO algorithm moves an ensemble of particles through the search domain. Each particle
/// remembers the best position it has visited, and the swarm shares the best position any
/// particle has found. Every step, each coordinate $`i`$ of each particle's velocity is updated as
///
/// ```math
/// v_i^{t+1} = \omega v_i^t + c_1 r_{1}(p_i^t - x_i^t) + c_2 r_{2}(g_i^t - x_i^t)
/// ```
/// where $`r_1`$ and $`r_2`$ are fresh uniform draws in $`[0,1)`$, $`\omega`$ is the inertia
/// weight, $`c_1`$ and $`c_2`$ are the cognitive and social weights, $`p^t`$ is the particle's
/// personal best position and $`g^t`$ is the swarm's best position. The velocity is then confined
/// to `vmax` times the domain width and the position $`x_i^{t+1} = x_i^t + v_i^{t+1}`$ to the
/// domain, both with the configured [`BoundaryMethod`]. See [^1] for more information.
///
/// Particles move one after another, so a new global best found by one particle is seen by the
/// particles after it in the same step. "Best" is judged by the configured [`Target`].
///
/// All randomness comes from a single [`RandomSource`] which persists across runs of the same
/// [`PSO`]. With the default [`Lcg`] a run is fully determined by its seed and configuration.
///
/// [^1]: [Houssein, E. H., Gad, A. G., Hussain, K., & Suganthan, P. N. (2021). Major Advances in Particle Swarm Optimization: Theory, Analysis, and Application. In Swarm and Evolutionary Computation (Vol. 63, p. 100868). Elsevier BV.](https://doi.org/10.1016/j.swevo.2021.100868)
#[derive(Debug, Clone)]
pub struct PSO<R = Lcg> {
    config: PSOConfig,
    rng: R,
    motion: Option<Motion>,
}

impl PSO {
    /// Construct a new particle swarm optimizer driven by an [`Lcg`] seeded from the
    /// configuration.
    pub fn new(config: PSOConfig) -> Self {
        let rng = Lcg::new(config.seed.unwrap_or(Lcg::DEFAULT_SEED));
        Self::with_rng(config, rng)
    }
}

impl<R: RandomSource> PSO<R> {
    /// Construct a new particle swarm optimizer driven by the given [`RandomSource`]. The seed in
    /// the configuration is ignored.
    pub const fn with_rng(config: PSOConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            motion: None,
        }
    }
    /// The configuration of the optimizer.
    pub const fn config(&self) -> &PSOConfig {
        &self.config
    }
    /// The random source of the optimizer in its current state.
    pub const fn rng(&self) -> &R {
        &self.rng
    }
}

impl<R: RandomSource, U, E> Algorithm<SwarmStatus, U, E> for PSO<R> {
    type Summary = SwarmSummary;

    fn max_steps(&self) -> usize {
        self.config.max_steps
    }

    fn initialize(
        &mut self,
        func: &dyn CostFunction<U, E>,
        status: &mut SwarmStatus,
        user_data: &mut U,
    ) -> Result<(), PsoError<E>> {
        let dimension = self.config.validate(func.dimension())?;
        self.rng.discard(self.config.warmup);
        let inertia = match self.config.inertia {
            InertiaWeight::PerDimension { low, high } => Inertia::PerDimension { low, high },
            InertiaWeight::PerRun { low, high } => Inertia::Fixed(self.rng.uniform(low, high)),
            InertiaWeight::Constant(w) => Inertia::Fixed(w),
        };
        let motion = Motion {
            c1: self.config.c1,
            c2: self.config.c2,
            inertia,
            v_max: self.config.vmax * self.config.domain.width(),
            domain: self.config.domain,
            boundary_method: self.config.boundary_method,
        };
        info!(
            n_particles = self.config.n_particles,
            dimension,
            target = %self.config.target,
            domain = %self.config.domain,
            "starting particle swarm optimization"
        );
        status.swarm = Swarm::new(
            self.config.n_particles,
            self.config.boundary_method,
            self.config.position_initializer.clone(),
        );
        status.n_f_evals = status
            .swarm
            .initialize(&mut self.rng, dimension, &motion, func, user_data)
            .map_err(PsoError::Evaluation)?;
        if let Some(best) = status.swarm.best_particle(&self.config.target) {
            status.gbest = best.best.clone();
        }
        status.mean_distance = status.swarm.mean_distance(&status.gbest.x)?;
        status.update_message("Initialized");
        self.motion = Some(motion);
        Ok(())
    }

    fn step(
        &mut self,
        current_step: usize,
        func: &dyn CostFunction<U, E>,
        status: &mut SwarmStatus,
        user_data: &mut U,
    ) -> Result<(), PsoError<E>> {
        let motion = self.motion.as_ref().ok_or_else(|| {
            ValidationError::config("swarm", "must be initialized before the first step")
        })?;
        let target = self.config.target;
        status.previous_best = status.gbest.fx;
        for particle in &mut status.swarm.particles {
            particle
                .update(&status.gbest.x, motion, &mut self.rng, func, user_data)
                .map_err(PsoError::Evaluation)?;
            status.n_f_evals += 1;
            if particle.position.is_better_than(&particle.best, &target) {
                particle.best = particle.position.clone();
            }
            if particle.position.is_better_than(&status.gbest, &target) {
                status.gbest = particle.position.clone();
            }
        }
        status.mean_distance = status.swarm.mean_distance(&status.gbest.x)?;
        let best = status.gbest.fx.unwrap_or(Float::NAN);
        status.best_history.push(best);
        status.distance_history.push(status.mean_distance);
        debug!(
            step = current_step,
            best,
            mean_distance = status.mean_distance,
            "swarm moved"
        );
        Ok(())
    }

    fn check_for_termination(
        &mut self,
        _func: &dyn CostFunction<U, E>,
        status: &mut SwarmStatus,
        _user_data: &mut U,
    ) -> Result<bool, PsoError<E>> {
        let threshold = self.config.convergence;
        let best = status.gbest.fx;
        let settled = matches!(
            (status.previous_best, best),
            (Some(previous), Some(current)) if (current - previous).abs() < threshold
        );
        let gathered = status.mean_distance < threshold;
        let settled_message = || format!("Best value changed by less than {threshold}");
        let gathered_message =
            || format!("Mean distance from the global best fell below {threshold}");
        let message = match self.config.criterion {
            ConvergenceCriterion::BestValueDelta => settled.then(settled_message),
            ConvergenceCriterion::MeanDistance => gathered.then(gathered_message),
            ConvergenceCriterion::Either => {
                if settled {
                    Some(settled_message())
                } else {
                    gathered.then(gathered_message)
                }
            }
            ConvergenceCriterion::KnownOptimum(optimum) => best
                .filter(|value| (value - optimum).abs() < threshold)
                .map(|_| format!("Reached the known optimum {optimum} within {threshold}")),
        };
        if let Some(message) = message {
            status.converged = true;
            status.update_message(&message);
        }
        Ok(status.converged)
    }

    fn postprocessing(
        &mut self,
        _func: &dyn CostFunction<U, E>,
        status: &mut SwarmStatus,
        _user_data: &mut U,
    ) -> Result<(), PsoError<E>> {
        info!(
            best = ?status.gbest.fx,
            converged = status.converged,
            evaluations = status.n_f_evals,
            "particle swarm optimization finished"
        );
        Ok(())
    }

    fn summarize(&self, current_step: usize, status: &SwarmStatus) -> Self::Summary {
        let (x, fx) = status.get_best().destructure();
        SwarmSummary {
            x,
            fx,
            target: self.config.target,
            domain: self.config.domain,
            converged: status.converged,
            message: status.message.clone(),
            iterations: current_step,
            cost_evals: status.n_f_evals,
            parameter_names: self.config.parameter_names.clone(),
            best_history: status.best_history.clone(),
            distance_history: status.distance_history.clone(),
        }
    }
}
