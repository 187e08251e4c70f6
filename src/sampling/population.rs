//! Sampled population container.

use std::ops::Index;

/// An ordered set of candidate points in a `dimension`-dimensional box.
///
/// Candidate `i` here corresponds to objective row `i` and to
/// `ranks[i]` of a [`DominanceRanking`](crate::dominance::DominanceRanking).
/// The population is read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Population {
    candidates: Vec<Vec<f64>>,
    dimension: usize,
}

impl Population {
    /// Wraps candidate vectors. All of them must have length `dimension`.
    pub(crate) fn from_candidates(candidates: Vec<Vec<f64>>, dimension: usize) -> Self {
        debug_assert!(candidates.iter().all(|c| c.len() == dimension));
        Self {
            candidates,
            dimension,
        }
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Returns `true` if the population has no candidates.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Number of decision variables per candidate.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns candidate `i`, or `None` if out of range.
    pub fn get(&self, i: usize) -> Option<&[f64]> {
        self.candidates.get(i).map(Vec::as_slice)
    }

    /// Iterates over candidates in index order.
    pub fn iter(&self) -> impl Iterator<Item = &[f64]> {
        self.candidates.iter().map(Vec::as_slice)
    }

    /// All candidates as a slice.
    pub fn candidates(&self) -> &[Vec<f64>] {
        &self.candidates
    }

    /// Consumes the population and returns its candidates.
    pub fn into_candidates(self) -> Vec<Vec<f64>> {
        self.candidates
    }

    /// Collects the values of dimension `d` across all candidates.
    ///
    /// # Panics
    /// Panics if `d >= self.dimension()` and the population is not empty.
    pub fn column(&self, d: usize) -> Vec<f64> {
        self.candidates.iter().map(|c| c[d]).collect()
    }
}

impl Index<usize> for Population {
    type Output = [f64];

    fn index(&self, i: usize) -> &[f64] {
        &self.candidates[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Population {
        Population::from_candidates(vec![vec![0.1, 0.2], vec![0.3, 0.4], vec![0.5, 0.6]], 2)
    }

    #[test]
    fn test_accessors() {
        let pop = sample();
        assert_eq!(pop.len(), 3);
        assert!(!pop.is_empty());
        assert_eq!(pop.dimension(), 2);
        assert_eq!(pop.get(1), Some(&[0.3, 0.4][..]));
        assert_eq!(pop.get(3), None);
        assert_eq!(&pop[2], &[0.5, 0.6]);
    }

    #[test]
    fn test_column() {
        let pop = sample();
        assert_eq!(pop.column(0), vec![0.1, 0.3, 0.5]);
        assert_eq!(pop.column(1), vec![0.2, 0.4, 0.6]);
    }

    #[test]
    fn test_iteration_order() {
        let pop = sample();
        let firsts: Vec<f64> = pop.iter().map(|c| c[0]).collect();
        assert_eq!(firsts, vec![0.1, 0.3, 0.5]);
        assert!(pop.iter().all(|c| c.len() == 2));
    }

    #[test]
    fn test_empty() {
        let pop = Population::from_candidates(Vec::new(), 4);
        assert!(pop.is_empty());
        assert!(pop.column(0).is_empty());
        assert!(pop.into_candidates().is_empty());
    }
}
