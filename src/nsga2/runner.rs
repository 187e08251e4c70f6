//! Initial generation pipeline.
//!
//! [`Nsga2Initializer`] runs the front-end of an NSGA-II run once:
//! validation → sampling → evaluation → non-dominated sorting.

use super::config::Nsga2Config;
use super::types::MultiObjectiveProblem;
use crate::dominance::{rank_by_dominance, DominanceRanking};
use crate::error::{Error, Result};
use crate::random::{create_rng, resolve_seed};
use crate::sampling::Population;
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A sampled, evaluated and ranked initial population.
///
/// Population index `i`, objective row `i` and `ranking.ranks()[i]` all
/// refer to the same candidate.
#[derive(Debug, Clone)]
pub struct InitialGeneration {
    /// The sampled candidates.
    pub population: Population,

    /// Objective vector of each candidate.
    pub objectives: Vec<Vec<f64>>,

    /// Dominance fronts and ranks.
    pub ranking: DominanceRanking,

    /// Seed the generator was created from, when the initializer created it.
    pub seed: Option<u64>,
}

/// One candidate of an [`InitialGeneration`], with everything a report needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedCandidate<'a> {
    /// Index in the population.
    pub index: usize,
    /// Front the candidate belongs to.
    pub rank: usize,
    /// Decision variables.
    pub variables: &'a [f64],
    /// Objective values.
    pub objectives: &'a [f64],
}

impl InitialGeneration {
    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.population.len()
    }

    /// Returns `true` if the generation is empty.
    pub fn is_empty(&self) -> bool {
        self.population.is_empty()
    }

    /// Individuals in index order, with their rank and objectives.
    pub fn individuals(&self) -> impl Iterator<Item = RankedCandidate<'_>> {
        self.population
            .iter()
            .zip(self.objectives.iter().map(Vec::as_slice))
            .zip(self.ranking.ranks().iter())
            .enumerate()
            .map(|(index, ((variables, objectives), &rank))| RankedCandidate {
                index,
                rank,
                variables,
                objectives,
            })
    }

    /// Decision vectors of the non-dominated candidates, in front order.
    pub fn pareto_set(&self) -> Vec<&[f64]> {
        self.ranking
            .pareto_front()
            .iter()
            .map(|&i| &self.population[i])
            .collect()
    }
}

/// Builds the initial generation of an NSGA-II run.
///
/// # Usage
///
/// ```
/// use u_moea::nsga2::{MultiObjectiveProblem, Nsga2Config, Nsga2Initializer};
/// use u_moea::sampling::Bounds;
///
/// struct Schaffer;
///
/// impl MultiObjectiveProblem for Schaffer {
///     fn dimension(&self) -> usize { 1 }
///     fn objective_count(&self) -> usize { 2 }
///     fn evaluate(&self, x: &[f64]) -> Vec<f64> {
///         vec![x[0] * x[0], (x[0] - 2.0).powi(2)]
///     }
///     fn bounds(&self) -> Vec<Bounds> {
///         vec![Bounds::new(-10.0, 10.0)]
///     }
/// }
///
/// let config = Nsga2Config::default().with_population_size(20).with_seed(42);
/// let generation = Nsga2Initializer::run(&Schaffer, &config).unwrap();
///
/// assert_eq!(generation.len(), 20);
/// assert!(!generation.ranking.pareto_front().is_empty());
/// assert_eq!(generation.individuals().count(), 20);
/// ```
pub struct Nsga2Initializer;

impl Nsga2Initializer {
    /// Runs the pipeline with a generator created from `config.seed`
    /// (or a random seed, recorded in the result).
    ///
    /// # Errors
    /// See [`run_with_rng`](Self::run_with_rng).
    pub fn run<P: MultiObjectiveProblem + ?Sized>(
        problem: &P,
        config: &Nsga2Config,
    ) -> Result<InitialGeneration> {
        let seed = resolve_seed(config.seed);
        let mut rng = create_rng(seed);
        let mut generation = Self::run_with_rng(problem, config, &mut rng)?;
        generation.seed = Some(seed);
        Ok(generation)
    }

    /// Runs the pipeline with an explicit generator. `config.seed` is ignored.
    ///
    /// Bounds come from `config.bounds`, or from [`MultiObjectiveProblem::bounds`]
    /// when the configuration has none.
    ///
    /// # Errors
    ///
    /// - [`Error::Config`] if the configuration is invalid for the problem
    /// - [`Error::ShapeMismatch`] if the problem returns objective vectors of
    ///   the wrong length
    /// - [`Error::InvariantViolation`] if ranking fails internally
    pub fn run_with_rng<P: MultiObjectiveProblem + ?Sized, R: Rng + ?Sized>(
        problem: &P,
        config: &Nsga2Config,
        rng: &mut R,
    ) -> Result<InitialGeneration> {
        let dimension = problem.dimension();
        let config = Nsga2Config {
            bounds: if config.bounds.is_empty() {
                problem.bounds()
            } else {
                config.bounds.clone()
            },
            ..config.clone()
        };
        config.validate(dimension).map_err(|e| {
            log::error!("invalid configuration for problem '{}': {e}", problem.name());
            e
        })?;

        let population = config.initialization.sample(
            config.population_size,
            dimension,
            &config.bounds,
            rng,
        );
        let objectives = evaluate_population(problem, &population, config.parallel)?;
        let ranking = rank_by_dominance(&objectives)?;

        log::debug!(
            "initialized '{}': {} candidates, {} fronts, {} non-dominated",
            problem.name(),
            population.len(),
            ranking.front_count(),
            ranking.pareto_front().len()
        );

        Ok(InitialGeneration {
            population,
            objectives,
            ranking,
            seed: None,
        })
    }
}

/// Evaluates every candidate of a population.
///
/// Row `i` of the result holds the objectives of candidate `i`, regardless
/// of evaluation order. With `parallel` set and the `parallel` feature
/// enabled, candidates are evaluated with rayon.
///
/// # Errors
/// [`Error::ShapeMismatch`] for the first row whose length differs from
/// [`MultiObjectiveProblem::objective_count`].
pub fn evaluate_population<P: MultiObjectiveProblem + ?Sized>(
    problem: &P,
    population: &Population,
    parallel: bool,
) -> Result<Vec<Vec<f64>>> {
    let objectives = evaluate_rows(problem, population, parallel);

    let expected = problem.objective_count();
    if let Some((row, got)) = objectives
        .iter()
        .map(Vec::len)
        .enumerate()
        .find(|&(_, len)| len != expected)
    {
        return Err(Error::ShapeMismatch { row, expected, got });
    }
    Ok(objectives)
}

#[cfg(feature = "parallel")]
fn evaluate_rows<P: MultiObjectiveProblem + ?Sized>(
    problem: &P,
    population: &Population,
    parallel: bool,
) -> Vec<Vec<f64>> {
    if parallel {
        population
            .candidates()
            .par_iter()
            .map(|c| problem.evaluate(c))
            .collect()
    } else {
        population.iter().map(|c| problem.evaluate(c)).collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn evaluate_rows<P: MultiObjectiveProblem + ?Sized>(
    problem: &P,
    population: &Population,
    _parallel: bool,
) -> Vec<Vec<f64>> {
    population.iter().map(|c| problem.evaluate(c)).collect()
}

// ============================================================================
// Tests
// ============================================================================
