//! Pareto dominance ranking.
//!
//! Given one objective vector per candidate (all objectives minimized),
//! assigns every candidate to exactly one dominance front. Rank 0 is the
//! non-dominated set; rank `k` candidates are dominated only by candidates
//! of lower ranks.
//!
//! - [`dominates`] / [`compare`]: the dominance relation
//! - [`rank_by_dominance`]: fast non-dominated sort (Deb et al., 2002)
//! - [`DominanceRanking`]: fronts plus per-candidate rank
//!
//! Maximized objectives must be negated by the caller.

mod relation;
mod sort;

pub use relation::{compare, dominates, Dominance};
pub use sort::{rank_by_dominance, DominanceRanking};
