//! Initial population sampling.
//!
//! Builds the first population of an evolutionary run inside a bounded box.
//! The default scheme is Latin hypercube sampling, which guarantees one
//! candidate per equal-width stratum along every dimension.
//!
//! # Key Types
//!
//! - [`Bounds`]: per-dimension `[lower, upper]` interval
//! - [`Population`]: the sampled candidates, index-aligned with later stages
//! - [`Initialization`]: choice between [`latin_hypercube`] and [`uniform`]
//!
//! All samplers take the random source explicitly; there is no hidden
//! global generator.

mod bounds;
mod latin_hypercube;
mod population;

pub use bounds::{bounds_for, bounds_from_arrays, Bounds};
pub use latin_hypercube::{latin_hypercube, uniform, Initialization};
pub use population::Population;

/// Alias for [`latin_hypercube`].
pub use latin_hypercube::latin_hypercube as sample_population;
