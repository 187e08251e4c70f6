//! Problem definition trait.
//!
//! [`MultiObjectiveProblem`] is the contract between the generic
//! initialization pipeline and a domain-specific objective function.

use crate::sampling::Bounds;

/// Defines a multi-objective optimization problem.
///
/// Implementors map a candidate (one `f64` per decision variable) to its
/// objective vector. All objectives are **minimized**; negate any objective
/// that should be maximized.
///
/// # Thread Safety
///
/// `MultiObjectiveProblem` must be `Send + Sync` because candidates may be
/// evaluated in parallel using rayon.
///
/// # Implementing
///
/// ```
/// use u_moea::nsga2::MultiObjectiveProblem;
///
/// /// Schaffer's function N.1: f1 = x², f2 = (x - 2)².
/// struct Schaffer;
///
/// impl MultiObjectiveProblem for Schaffer {
///     fn dimension(&self) -> usize { 1 }
///     fn objective_count(&self) -> usize { 2 }
///     fn evaluate(&self, x: &[f64]) -> Vec<f64> {
///         vec![x[0] * x[0], (x[0] - 2.0).powi(2)]
///     }
/// }
///
/// assert_eq!(Schaffer.evaluate(&[1.0]), vec![1.0, 1.0]);
/// ```
pub trait MultiObjectiveProblem: Send + Sync {
    /// Number of decision variables.
    fn dimension(&self) -> usize;

    /// Number of objectives each evaluation returns.
    fn objective_count(&self) -> usize;

    /// Evaluates one candidate.
    ///
    /// `candidate.len()` equals [`dimension`](Self::dimension). The returned
    /// vector must have [`objective_count`](Self::objective_count) entries.
    fn evaluate(&self, candidate: &[f64]) -> Vec<f64>;

    /// Natural bounds of the decision variables.
    ///
    /// Used when the configuration supplies none. The default is empty,
    /// which samples every dimension from `[0, 1]`.
    fn bounds(&self) -> Vec<Bounds> {
        Vec::new()
    }

    /// Human-readable problem name, for logging and reports.
    fn name(&self) -> &str {
        "unnamed"
    }
}
