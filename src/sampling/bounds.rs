//! Per-dimension box bounds.

/// Closed interval `[lower, upper]` for one decision variable.
///
/// Sampled values lie in the half-open `[lower, upper)`; see
/// [`contains`](Bounds::contains).
///
/// The sampler never checks `lower <= upper`. That is a configuration
/// concern, handled by [`Nsga2Config::validate`](crate::nsga2::Nsga2Config::validate).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    lower: f64,
    upper: f64,
}

impl Bounds {
    /// Creates bounds from their two ends.
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// The unit interval `[0, 1]`, used for any dimension without explicit bounds.
    pub fn unit() -> Self {
        Self::new(0.0, 1.0)
    }

    /// Lower end.
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Upper end.
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Width of the interval, `upper - lower`.
    pub fn span(&self) -> f64 {
        self.upper - self.lower
    }

    /// Maps a fraction in `[0, 1)` onto the interval.
    pub fn lerp(&self, t: f64) -> f64 {
        self.lower + t * self.span()
    }

    /// Returns `true` if `x` lies in `[lower, upper)`.
    ///
    /// A degenerate interval (`lower == upper`) contains exactly `lower`.
    pub fn contains(&self, x: f64) -> bool {
        if self.lower == self.upper {
            x == self.lower
        } else {
            self.lower <= x && x < self.upper
        }
    }

    /// Returns `true` if both ends are finite and `lower <= upper`.
    pub fn is_valid(&self) -> bool {
        self.lower.is_finite() && self.upper.is_finite() && self.lower <= self.upper
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::unit()
    }
}

impl From<(f64, f64)> for Bounds {
    fn from((lower, upper): (f64, f64)) -> Self {
        Self::new(lower, upper)
    }
}

/// Returns the bounds for dimension `d`, falling back to [`Bounds::unit`]
/// when `bounds` is shorter than `d + 1`.
///
/// Bounds given as two separate arrays of different lengths should first go
/// through [`bounds_from_arrays`], which fills each end on its own.
pub fn bounds_for(bounds: &[Bounds], d: usize) -> Bounds {
    bounds.get(d).copied().unwrap_or_default()
}

/// Pairs separate lower and upper arrays into per-dimension bounds.
///
/// The result has `max(lower.len(), upper.len())` entries. A missing lower
/// end defaults to `0.0` and a missing upper end to `1.0`, independently of
/// the other end.
///
/// # Example
///
/// ```
/// use u_moea::sampling::{bounds_from_arrays, Bounds};
///
/// let bounds = bounds_from_arrays(&[-5.0, -5.0], &[5.0]);
/// assert_eq!(bounds, vec![Bounds::new(-5.0, 5.0), Bounds::new(-5.0, 1.0)]);
/// ```
pub fn bounds_from_arrays(lower: &[f64], upper: &[f64]) -> Vec<Bounds> {
    let unit = Bounds::unit();
    (0..lower.len().max(upper.len()))
        .map(|d| {
            Bounds::new(
                lower.get(d).copied().unwrap_or(unit.lower),
                upper.get(d).copied().unwrap_or(unit.upper),
            )
        })
        .collect()
}
