//! Fast non-dominated sorting.
//!
//! # References
//!
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic Algorithm: NSGA-II"
//! - IEEE Transactions on Evolutionary Computation, 6(2), 182-197

use super::relation::{compare, Dominance};
use crate::error::{Error, Result};

/// Result of non-dominated sorting.
///
/// `fronts[k]` lists the candidates of rank `k`; `ranks[i]` is the rank of
/// candidate `i`. Every candidate appears in exactly one front and
/// `ranks[i] == k` iff `fronts[k]` contains `i`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DominanceRanking {
    fronts: Vec<Vec<usize>>,
    ranks: Vec<usize>,
}

impl DominanceRanking {
    /// Fronts ordered from rank 0 (non-dominated) upward.
    pub fn fronts(&self) -> &[Vec<usize>] {
        &self.fronts
    }

    /// Rank of every candidate, indexed like the objective matrix.
    pub fn ranks(&self) -> &[usize] {
        &self.ranks
    }

    /// Rank of candidate `i`, or `None` if out of range.
    pub fn rank_of(&self, i: usize) -> Option<usize> {
        self.ranks.get(i).copied()
    }

    /// Members of front `k`, or `None` if there is no such front.
    pub fn front(&self, k: usize) -> Option<&[usize]> {
        self.fronts.get(k).map(Vec::as_slice)
    }

    /// Number of fronts.
    pub fn front_count(&self) -> usize {
        self.fronts.len()
    }

    /// Number of ranked candidates.
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    /// Returns `true` if nothing was ranked.
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// The non-dominated candidates (front 0). Empty for empty input.
    pub fn pareto_front(&self) -> &[usize] {
        self.front(0).unwrap_or(&[])
    }

    /// Splits the ranking into `(fronts, ranks)`.
    pub fn into_parts(self) -> (Vec<Vec<usize>>, Vec<usize>) {
        (self.fronts, self.ranks)
    }
}

/// Partitions candidates into Pareto fronts.
///
/// All objectives are **minimized**. Row `i` of `objectives` holds the
/// objective values of candidate `i`; the returned ranking uses the same
/// indices.
///
/// # Algorithm (Deb et al., 2002)
///
/// 1. Compare every pair once; record whom each candidate dominates and
///    how many candidates dominate it
/// 2. Candidates dominated by nobody form front 0, in ascending index order
/// 3. For each member of the current front, decrement the count of every
///    candidate it dominates; those reaching zero join the next front in
///    discovery order
/// 4. Repeat until a front yields no successor
///
/// # Complexity
///
/// O(m * n²) time and O(n²) worst-case space, where m = number of
/// objectives and n = number of candidates.
///
/// # Errors
///
/// - [`Error::ShapeMismatch`] if a row's length differs from row 0's
/// - [`Error::InvariantViolation`] if front 0 is empty or a candidate is
///   left unranked; both indicate a bug, not bad input
///
/// # Example
///
/// ```
/// use u_moea::dominance::rank_by_dominance;
///
/// let objectives = vec![
///     vec![1.0, 5.0],
///     vec![2.0, 3.0],
///     vec![3.0, 1.0],
///     vec![4.0, 4.0], // dominated by (2,3) and (3,1)
/// ];
///
/// let ranking = rank_by_dominance(&objectives).unwrap();
/// assert_eq!(ranking.fronts(), &[vec![0, 1, 2], vec![3]]);
/// assert_eq!(ranking.ranks(), &[0, 0, 0, 1]);
/// ```
pub fn rank_by_dominance<T: AsRef<[f64]>>(objectives: &[T]) -> Result<DominanceRanking> {
    let n = objectives.len();
    if n == 0 {
        return Ok(DominanceRanking::default());
    }

    let m = objectives[0].as_ref().len();
    if let Some((row, got)) = objectives
        .iter()
        .map(|o| o.as_ref().len())
        .enumerate()
        .find(|&(_, len)| len != m)
    {
        return Err(Error::ShapeMismatch {
            row,
            expected: m,
            got,
        });
    }

    // dominated[p] = candidates p dominates; domination_count[q] = how many dominate q
    let mut dominated: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut domination_count = vec![0usize; n];

    for p in 0..n {
        let objs_p = objectives[p].as_ref();
        for q in (p + 1)..n {
            match compare(objs_p, objectives[q].as_ref()) {
                Dominance::Left => {
                    dominated[p].push(q);
                    domination_count[q] += 1;
                }
                Dominance::Right => {
                    dominated[q].push(p);
                    domination_count[p] += 1;
                }
                Dominance::Neither => {}
            }
        }
    }

    let mut ranks: Vec<Option<usize>> = vec![None; n];
    let front_0: Vec<usize> = (0..n).filter(|&i| domination_count[i] == 0).collect();
    if front_0.is_empty() {
        return Err(Error::InvariantViolation(format!(
            "no non-dominated candidate among {n}"
        )));
    }
    for &i in &front_0 {
        ranks[i] = Some(0);
    }

    let mut fronts = vec![front_0];
    loop {
        let rank = fronts.len();
        let mut next_front = Vec::new();

        for &p in &fronts[rank - 1] {
            for &q in &dominated[p] {
                domination_count[q] -= 1;
                if domination_count[q] == 0 {
                    ranks[q] = Some(rank);
                    next_front.push(q);
                }
            }
        }

        if next_front.is_empty() {
            break;
        }
        log::trace!("front {rank}: {} candidates", next_front.len());
        fronts.push(next_front);
    }

    let ranks = ranks
        .into_iter()
        .enumerate()
        .map(|(i, r)| {
            r.ok_or_else(|| {
                Error::InvariantViolation(format!("candidate {i} was never assigned a front"))
            })
        })
        .collect::<Result<Vec<usize>>>()?;

    log::debug!(
        "non-dominated sort: {n} candidates, {m} objectives, {} fronts ({} non-dominated)",
        fronts.len(),
        fronts[0].len()
    );

    Ok(DominanceRanking { fronts, ranks })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dominance::dominates;
    use proptest::prelude::*;

    #[test]
    fn test_empty_input() {
        let objs: Vec<Vec<f64>> = Vec::new();
        let result = rank_by_dominance(&objs).unwrap();
        assert!(result.fronts().is_empty());
        assert!(result.ranks().is_empty());
        assert!(result.is_empty());
        assert!(result.pareto_front().is_empty());
    }

    #[test]
    fn test_single_solution() {
        let objs = vec![vec![1.0, 2.0]];
        let result = rank_by_dominance(&objs).unwrap();
        assert_eq!(result.ranks(), &[0]);
        assert_eq!(result.front_count(), 1);
        assert_eq!(result.front(0), Some(&[0][..]));
    }

    #[test]
    fn test_staircase() {
        let objs = vec![
            vec![1.0, 5.0],
            vec![2.0, 3.0],
            vec![3.0, 1.0],
            vec![4.0, 4.0], // dominated by (2,3) and (3,1)
        ];
        let result = rank_by_dominance(&objs).unwrap();
        assert_eq!(result.fronts(), &[vec![0, 1, 2], vec![3]]);
        assert_eq!(result.ranks(), &[0, 0, 0, 1]);
    }

    #[test]
    fn test_identical_rows() {
        let objs = vec![vec![1.0, 1.0], vec![1.0, 1.0]];
        let result = rank_by_dominance(&objs).unwrap();
        assert_eq!(result.ranks(), &[0, 0]);
        assert_eq!(result.fronts(), &[vec![0, 1]]);
    }

    #[test]
    fn test_chain() {
        let objs = vec![vec![3.0, 3.0], vec![1.0, 1.0], vec![2.0, 2.0]];
        let result = rank_by_dominance(&objs).unwrap();
        assert_eq!(result.ranks(), &[2, 0, 1]);
        assert_eq!(result.fronts(), &[vec![1], vec![2], vec![0]]);
    }

    #[test]
    fn test_mixed_fronts() {
        let objs = vec![
            vec![1.0, 5.0], // front 0
            vec![3.0, 3.0], // front 0
            vec![5.0, 1.0], // front 0
            vec![4.0, 4.0], // dominated by [1] → front 1
            vec![6.0, 6.0], // dominated by [3] → front 2
        ];
        let result = rank_by_dominance(&objs).unwrap();
        assert_eq!(result.ranks(), &[0, 0, 0, 1, 2]);
        assert_eq!(result.front_count(), 3);
        assert_eq!(result.pareto_front(), &[0, 1, 2]);
    }

    #[test]
    fn test_discovery_order_in_later_fronts() {
        // Front 1 members are discovered while walking front 0 in index
        // order, so index 4 (freed by candidate 0) precedes index 3.
        let objs = vec![
            vec![0.0, 9.0], // front 0, dominates 4
            vec![9.0, 0.0], // front 0, dominates 3
            vec![9.5, 9.5], // dominated by 3 and 4 → front 2
            vec![9.5, 1.0], // front 1
            vec![1.0, 9.5], // front 1
        ];
        let result = rank_by_dominance(&objs).unwrap();
        assert_eq!(result.fronts(), &[vec![0, 1], vec![4, 3], vec![2]]);
    }

    #[test]
    fn test_three_objectives() {
        let objs = vec![
            vec![1.0, 5.0, 3.0],
            vec![3.0, 1.0, 5.0],
            vec![5.0, 3.0, 1.0],
            vec![4.0, 4.0, 4.0], // trades off against each of the above
        ];
        let result = rank_by_dominance(&objs).unwrap();
        assert_eq!(result.ranks(), &[0, 0, 0, 0]);
    }

    #[test]
    fn test_ragged_rows() {
        let objs = vec![vec![1.0, 2.0], vec![1.0, 2.0], vec![3.0]];
        let err = rank_by_dominance(&objs).unwrap_err();
        assert_eq!(
            err,
            Error::ShapeMismatch {
                row: 2,
                expected: 2,
                got: 1
            }
        );
        assert!(!err.is_defect());
    }

    #[test]
    fn test_zero_objectives() {
        let objs = vec![Vec::<f64>::new(), Vec::new(), Vec::new()];
        let result = rank_by_dominance(&objs).unwrap();
        assert_eq!(result.ranks(), &[0, 0, 0]);
    }

    #[test]
    fn test_slices_as_rows() {
        let objs: [&[f64]; 2] = [&[1.0, 1.0], &[2.0, 2.0]];
        let result = rank_by_dominance(&objs).unwrap();
        assert_eq!(result.ranks(), &[0, 1]);
    }

    #[test]
    fn test_nan_objective_is_neutral() {
        // NaN compares false both ways, so only the other objective decides.
        let objs = vec![vec![f64::NAN, 1.0], vec![5.0, 5.0]];
        let result = rank_by_dominance(&objs).unwrap();
        assert_eq!(result.ranks(), &[0, 1]);

        let objs = vec![vec![1.0, 1.0], vec![f64::NAN, 5.0], vec![2.0, 2.0]];
        let result = rank_by_dominance(&objs).unwrap();
        assert_eq!(result.ranks(), &[0, 2, 1]);
    }

    #[test]
    fn test_nan_cycle_reported_as_invariant_violation() {
        // With NaN ties the relation is no longer acyclic: 0 > 1 > 2 > 0.
        let nan = f64::NAN;
        let objs = vec![vec![0.0, nan, 1.0], vec![1.0, 0.0, nan], vec![nan, 1.0, 0.0]];
        let err = rank_by_dominance(&objs).unwrap_err();
        assert!(matches!(err, Error::InvariantViolation(_)));
    }

    #[test]
    fn test_infinite_objectives() {
        let objs = vec![vec![f64::INFINITY, 0.0], vec![1.0, 0.0]];
        let result = rank_by_dominance(&objs).unwrap();
        assert_eq!(result.ranks(), &[1, 0]);
    }

    #[test]
    fn test_accessors_and_parts() {
        let objs = vec![vec![1.0], vec![2.0]];
        let result = rank_by_dominance(&objs).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result.rank_of(1), Some(1));
        assert_eq!(result.rank_of(2), None);
        assert_eq!(result.front(2), None);

        let (fronts, ranks) = result.into_parts();
        assert_eq!(fronts, vec![vec![0], vec![1]]);
        assert_eq!(ranks, vec![0, 1]);
    }

    // ---- Properties ----

    fn arb_objectives() -> impl Strategy<Value = Vec<Vec<f64>>> {
        (1usize..4).prop_flat_map(|m| {
            // Small integer grid so ties and dominance chains are frequent.
            prop::collection::vec(
                prop::collection::vec((0i32..6).prop_map(f64::from), m),
                0..40,
            )
        })
    }

    proptest! {
        #[test]
        fn prop_partition_and_ordering(objs in arb_objectives()) {
            let result = rank_by_dominance(&objs).unwrap();
            let n = objs.len();

            // Every index appears exactly once, and rank matches front position.
            let mut seen = vec![0usize; n];
            for (k, front) in result.fronts().iter().enumerate() {
                prop_assert!(!front.is_empty());
                for &i in front {
                    seen[i] += 1;
                    prop_assert_eq!(result.ranks()[i], k);
                }
            }
            prop_assert!(seen.iter().all(|&c| c == 1));

            for i in 0..n {
                let rank = result.ranks()[i];

                // Never dominated by a candidate of the same or a worse rank.
                for j in 0..n {
                    if dominates(&objs[j], &objs[i]) {
                        prop_assert!(result.ranks()[j] < rank);
                    }
                }

                // Some candidate of the previous front dominates it.
                if rank > 0 {
                    let prev = result.front(rank - 1).unwrap();
                    prop_assert!(prev.iter().any(|&j| dominates(&objs[j], &objs[i])));
                }
            }
        }

        #[test]
        fn prop_front_zero_is_non_dominated_set(objs in arb_objectives()) {
            let result = rank_by_dominance(&objs).unwrap();
            for i in 0..objs.len() {
                let dominated = (0..objs.len()).any(|j| dominates(&objs[j], &objs[i]));
                prop_assert_eq!(result.ranks()[i] == 0, !dominated);
            }
        }
    }
}
