//! NSGA-II front-end.
//!
//! Ties the crate together: a [`MultiObjectiveProblem`] is sampled with the
//! scheme chosen in [`Nsga2Config`], evaluated, and ranked into dominance
//! fronts by [`Nsga2Initializer`].
//!
//! # Key Types
//!
//! - [`Nsga2Config`]: run parameters (population size, bounds, operator rates)
//! - [`MultiObjectiveProblem`]: the objective function seam
//! - [`Nsga2Initializer`]: sample → evaluate → rank, once
//! - [`InitialGeneration`]: the index-aligned result
//!
//! Variation operators and the generational loop are not part of this
//! crate; their parameters in [`Nsga2Config`] are passed through untouched.
//!
//! # References
//!
//! - Deb et al. (2002), *A Fast and Elitist Multiobjective GA: NSGA-II*

mod config;
mod runner;
mod types;

pub use config::Nsga2Config;
pub use runner::{evaluate_population, InitialGeneration, Nsga2Initializer, RankedCandidate};
pub use types::MultiObjectiveProblem;
