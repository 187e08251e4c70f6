//! Pareto dominance relation (minimization).

/// Outcome of comparing two objective vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dominance {
    /// Left dominates right.
    Left,
    /// Right dominates left.
    Right,
    /// Neither dominates the other.
    Neither,
}

/// Returns `true` if `p` dominates `q`.
///
/// `p` dominates `q` iff `p[j] <= q[j]` for every objective `j` and
/// `p[j] < q[j]` for at least one. Equal vectors dominate neither way,
/// so the relation is irreflexive.
///
/// Comparisons are plain IEEE comparisons: an objective counts against `p`
/// only when `p[j] > q[j]`. Since `NaN` compares false both ways, a `NaN`
/// objective is a neutral tie and the remaining objectives decide.
///
/// Both slices must have the same length (checked in debug builds).
///
/// # Example
///
/// ```
/// use u_moea::dominance::dominates;
///
/// assert!(dominates(&[1.0, 2.0], &[1.0, 3.0]));
/// assert!(!dominates(&[1.0, 2.0], &[1.0, 2.0]));
/// assert!(!dominates(&[1.0, 4.0], &[2.0, 3.0]));
/// ```
pub fn dominates(p: &[f64], q: &[f64]) -> bool {
    compare(p, q) == Dominance::Left
}

/// Compares two objective vectors in a single pass.
///
/// Consistent with [`dominates`]: returns [`Dominance::Left`] iff
/// `dominates(a, b)` and [`Dominance::Right`] iff `dominates(b, a)`.
pub fn compare(a: &[f64], b: &[f64]) -> Dominance {
    debug_assert_eq!(a.len(), b.len(), "objective vectors differ in length");

    let mut a_no_worse = true;
    let mut b_no_worse = true;
    let mut a_better_in_some = false;
    let mut b_better_in_some = false;

    for (&va, &vb) in a.iter().zip(b.iter()) {
        a_no_worse &= !(va > vb);
        b_no_worse &= !(vb > va);
        a_better_in_some |= va < vb;
        b_better_in_some |= vb < va;
        if !a_no_worse && !b_no_worse {
            return Dominance::Neither;
        }
    }

    if a_no_worse && a_better_in_some {
        Dominance::Left
    } else if b_no_worse && b_better_in_some {
        Dominance::Right
    } else {
        Dominance::Neither
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_dominance() {
        assert_eq!(compare(&[1.0, 1.0], &[2.0, 2.0]), Dominance::Left);
        assert_eq!(compare(&[2.0, 2.0], &[1.0, 1.0]), Dominance::Right);
    }

    #[test]
    fn test_weak_dominance_needs_one_strict() {
        assert_eq!(compare(&[1.0, 2.0], &[1.0, 3.0]), Dominance::Left);
        assert_eq!(compare(&[1.0, 2.0], &[1.0, 2.0]), Dominance::Neither);
    }

    #[test]
    fn test_trade_off() {
        assert_eq!(compare(&[1.0, 5.0], &[3.0, 1.0]), Dominance::Neither);
    }

    #[test]
    fn test_irreflexive() {
        let p = [0.5, -2.0, 7.0];
        assert!(!dominates(&p, &p));
    }

    #[test]
    fn test_single_objective() {
        assert!(dominates(&[1.0], &[2.0]));
        assert!(!dominates(&[2.0], &[1.0]));
    }

    #[test]
    fn test_infinity_compares_normally() {
        assert!(dominates(&[1.0, 1.0], &[1.0, f64::INFINITY]));
        assert!(dominates(&[f64::NEG_INFINITY, 0.0], &[0.0, 0.0]));
    }

    #[test]
    fn test_nan_is_a_neutral_tie() {
        let with_nan = [f64::NAN, 1.0];
        assert_eq!(compare(&with_nan, &[5.0, 5.0]), Dominance::Left);
        assert_eq!(compare(&[0.0, 0.0], &with_nan), Dominance::Left);
        assert_eq!(compare(&with_nan, &[f64::NAN, 2.0]), Dominance::Left);
        assert_eq!(compare(&with_nan, &[f64::NAN, 1.0]), Dominance::Neither);
        assert_eq!(compare(&[f64::NAN, 1.0], &[0.0, 2.0]), Dominance::Left);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "objective vectors differ in length")]
    fn test_length_mismatch_panics_in_debug() {
        compare(&[1.0, 2.0], &[1.0]);
    }

    #[test]
    fn test_empty_vectors() {
        assert_eq!(compare(&[], &[]), Dominance::Neither);
    }
}
