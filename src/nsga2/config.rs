//! NSGA-II configuration.
//!
//! [`Nsga2Config`] holds the parameters an NSGA-II run is configured with.
//! This crate only consumes the initialization fields (population size,
//! bounds, initialization scheme, seed, parallelism); the variation and
//! termination fields are carried for the downstream evolutionary loop.

use crate::error::ConfigError;
use crate::sampling::{Bounds, Initialization};

/// Configuration for an NSGA-II run.
///
/// # Defaults
///
/// ```
/// use u_moea::nsga2::Nsga2Config;
///
/// let config = Nsga2Config::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.offspring_population_size, 100);
/// assert_eq!(config.max_generations, 250);
/// assert!(config.bounds.is_empty());
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_moea::nsga2::Nsga2Config;
/// use u_moea::sampling::Bounds;
///
/// let config = Nsga2Config::default()
///     .with_population_size(40)
///     .with_bounds(vec![Bounds::new(-5.0, 5.0), Bounds::new(0.0, 10.0)])
///     .with_seed(7);
/// assert!(config.validate(2).is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Nsga2Config {
    /// Number of candidates in the population.
    pub population_size: usize,

    /// Number of offspring produced per generation.
    ///
    /// NSGA-II is normally run with as many offspring as parents; a
    /// different value is accepted but logged at `warn` by
    /// [`validate`](Self::validate).
    pub offspring_population_size: usize,

    /// Per-dimension decision bounds.
    ///
    /// May be shorter than the problem dimension; the remaining dimensions
    /// use `[0, 1]`.
    pub bounds: Vec<Bounds>,

    /// How the initial population is sampled.
    pub initialization: Initialization,

    /// Number of generations of the downstream evolutionary loop.
    pub max_generations: usize,

    /// Probability of applying crossover to a pair of parents (0.0–1.0).
    pub crossover_rate: f64,

    /// Per-variable mutation probability (0.0–1.0).
    pub mutation_rate: f64,

    /// Distribution index of simulated binary crossover.
    pub crossover_distribution_index: f64,

    /// Distribution index of polynomial mutation.
    pub mutation_distribution_index: f64,

    /// Whether to evaluate candidates in parallel using rayon.
    ///
    /// Has no effect without the `parallel` feature.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for Nsga2Config {
    fn default() -> Self {
        Self {
            population_size: 100,
            offspring_population_size: 100,
            bounds: Vec::new(),
            initialization: Initialization::default(),
            max_generations: 250,
            crossover_rate: 0.9,
            mutation_rate: 0.1,
            crossover_distribution_index: 15.0,
            mutation_distribution_index: 20.0,
            parallel: true,
            seed: None,
        }
    }
}

impl Nsga2Config {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of offspring per generation.
    pub fn with_offspring_population_size(mut self, n: usize) -> Self {
        self.offspring_population_size = n;
        self
    }

    /// Sets the decision bounds.
    pub fn with_bounds(mut self, bounds: Vec<Bounds>) -> Self {
        self.bounds = bounds;
        self
    }

    /// Sets the initialization scheme.
    pub fn with_initialization(mut self, initialization: Initialization) -> Self {
        self.initialization = initialization;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the per-variable mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the SBX distribution index.
    pub fn with_crossover_distribution_index(mut self, eta: f64) -> Self {
        self.crossover_distribution_index = eta.max(0.0);
        self
    }

    /// Sets the polynomial mutation distribution index.
    pub fn with_mutation_distribution_index(mut self, eta: f64) -> Self {
        self.mutation_distribution_index = eta.max(0.0);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration against a problem of `dimension` variables.
    ///
    /// Returns the first problem found. An offspring population size that
    /// differs from the population size is not an error, only a warning.
    pub fn validate(&self, dimension: usize) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.bounds.len() > dimension {
            return Err(ConfigError::TooManyBounds {
                dimension,
                got: self.bounds.len(),
            });
        }
        if let Some((d, b)) = self.bounds.iter().enumerate().find(|(_, b)| !b.is_valid()) {
            return Err(ConfigError::InvalidBounds {
                dimension: d,
                lower: b.lower(),
                upper: b.upper(),
            });
        }
        if self.offspring_population_size != self.population_size {
            log::warn!(
                "offspring population size {} differs from population size {}",
                self.offspring_population_size,
                self.population_size
            );
        }
        if self.max_generations == 0 {
            return Err(ConfigError::ZeroGenerations);
        }
        check_rate("crossover_rate", self.crossover_rate)?;
        check_rate("mutation_rate", self.mutation_rate)?;
        check_distribution_index(
            "crossover_distribution_index",
            self.crossover_distribution_index,
        )?;
        check_distribution_index(
            "mutation_distribution_index",
            self.mutation_distribution_index,
        )?;
        Ok(())
    }
}

fn check_rate(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidRate { name, value })
    }
}

fn check_distribution_index(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidDistributionIndex { name, value })
    }
}
