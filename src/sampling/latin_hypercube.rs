//! Latin hypercube and uniform population samplers.
//!
//! # Latin hypercube sampling
//!
//! Each dimension `[lower, upper)` is cut into `N` equal-width strata.
//! For every dimension independently, a random permutation assigns one
//! stratum to each candidate, and a uniform jitter places the value inside
//! its stratum:
//!
//! ```text
//! x[i][d] = lower[d] + ((perm_d[i] + u) / N) * (upper[d] - lower[d]),  u ∈ [0, 1)
//! ```
//!
//! Every stratum of every dimension therefore holds exactly one candidate.
//! No correlation structure across dimensions is enforced.
//!
//! # References
//!
//! - McKay, Beckman & Conover (1979), "A Comparison of Three Methods for
//!   Selecting Values of Input Variables in the Analysis of Output from a
//!   Computer Code", *Technometrics* 21(2), 239–245

use super::bounds::{bounds_for, Bounds};
use super::population::Population;
use rand::seq::SliceRandom;
use rand::Rng;

/// Population initialization scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Initialization {
    /// Stratified sampling, see [`latin_hypercube`].
    #[default]
    LatinHypercube,
    /// Independent uniform sampling, see [`uniform`].
    Uniform,
}

impl Initialization {
    /// Samples `count` candidates with this scheme.
    pub fn sample<R: Rng + ?Sized>(
        self,
        count: usize,
        dimension: usize,
        bounds: &[Bounds],
        rng: &mut R,
    ) -> Population {
        match self {
            Initialization::LatinHypercube => latin_hypercube(count, dimension, bounds, rng),
            Initialization::Uniform => uniform(count, dimension, bounds, rng),
        }
    }
}

/// Builds a Latin hypercube population.
///
/// # Arguments
///
/// - `count`: number of candidates `N` (0 yields an empty population)
/// - `dimension`: number of decision variables `D` (0 yields `N` empty candidates)
/// - `bounds`: per-dimension bounds; dimensions past `bounds.len()` use `[0, 1]`
/// - `rng`: random source; the output is a pure function of its state
///
/// Random numbers are consumed dimension by dimension: first the shuffle of
/// the stratum permutation, then one jitter per candidate in index order.
///
/// # Example
///
/// ```
/// use u_moea::random::create_rng;
/// use u_moea::sampling::{latin_hypercube, Bounds};
///
/// let mut rng = create_rng(42);
/// let pop = latin_hypercube(10, 2, &[Bounds::new(-5.0, 5.0)], &mut rng);
///
/// assert_eq!(pop.len(), 10);
/// // Dimension 0 spans [-5, 5); dimension 1 falls back to [0, 1).
/// assert!(pop.iter().all(|c| (-5.0..5.0).contains(&c[0])));
/// assert!(pop.iter().all(|c| (0.0..1.0).contains(&c[1])));
/// ```
pub fn latin_hypercube<R: Rng + ?Sized>(
    count: usize,
    dimension: usize,
    bounds: &[Bounds],
    rng: &mut R,
) -> Population {
    log_fallback(dimension, bounds);

    let mut candidates = vec![vec![0.0; dimension]; count];
    if count == 0 {
        return Population::from_candidates(candidates, dimension);
    }

    let n = count as f64;
    let mut strata: Vec<usize> = (0..count).collect();

    for d in 0..dimension {
        let b = bounds_for(bounds, d);

        // Identity permutation before every shuffle.
        for (k, s) in strata.iter_mut().enumerate() {
            *s = k;
        }
        strata.shuffle(rng);

        for (candidate, &stratum) in candidates.iter_mut().zip(strata.iter()) {
            let u: f64 = rng.random();
            candidate[d] = b.lower() + ((stratum as f64 + u) / n) * b.span();
        }
    }

    log::debug!("latin hypercube: sampled {count} candidates in {dimension} dimensions");
    Population::from_candidates(candidates, dimension)
}

/// Builds a population of independent uniform samples.
///
/// Same bounds fallback and determinism guarantees as [`latin_hypercube`],
/// without stratification. Random numbers are consumed candidate by candidate.
pub fn uniform<R: Rng + ?Sized>(
    count: usize,
    dimension: usize,
    bounds: &[Bounds],
    rng: &mut R,
) -> Population {
    log_fallback(dimension, bounds);

    let candidates: Vec<Vec<f64>> = (0..count)
        .map(|_| {
            (0..dimension)
                .map(|d| bounds_for(bounds, d).lerp(rng.random::<f64>()))
                .collect()
        })
        .collect();

    log::debug!("uniform: sampled {count} candidates in {dimension} dimensions");
    Population::from_candidates(candidates, dimension)
}

fn log_fallback(dimension: usize, bounds: &[Bounds]) {
    if bounds.len() < dimension {
        log::warn!(
            "{} of {} dimensions have no bounds; using [0, 1]",
            dimension - bounds.len(),
            dimension
        );
    }
}

// ============================================================================
// Tests
// ============================================================================
