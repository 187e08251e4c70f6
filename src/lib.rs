//! Multi-objective evolutionary algorithm front-end.
//!
//! Provides the two numerically non-trivial stages that precede an
//! NSGA-II style evolutionary loop:
//!
//! - **Sampling**: Latin hypercube construction of the initial population,
//!   guaranteeing one candidate per stratum along every dimension.
//! - **Dominance ranking**: fast non-dominated sorting of evaluated
//!   candidates into ordered Pareto fronts.
//!
//! The [`nsga2`] module wires both together behind a problem trait and a
//! builder-style configuration.
//!
//! # Example
//!
//! ```
//! use u_moea::dominance::rank_by_dominance;
//! use u_moea::random::create_rng;
//! use u_moea::sampling::{sample_population, Bounds};
//!
//! let mut rng = create_rng(7);
//! let population = sample_population(8, 2, &[Bounds::new(0.0, 4.0)], &mut rng);
//!
//! // Two conflicting objectives over the first variable.
//! let objectives: Vec<Vec<f64>> = population
//!     .iter()
//!     .map(|c| vec![c[0] + c[1], 4.0 - c[0] + c[1]])
//!     .collect();
//!
//! let ranking = rank_by_dominance(&objectives).unwrap();
//! assert_eq!(ranking.len(), 8);
//! ```
//!
//! # Architecture
//!
//! All computations are synchronous and pure. Random sources are always
//! passed in explicitly, so sampling calls on different threads stay
//! isolated and reproducible.

pub mod dominance;
pub mod error;
pub mod nsga2;
pub mod random;
pub mod sampling;

pub use error::{ConfigError, Error, Result};
