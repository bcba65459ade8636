//! Natural cubic spline interpolation.
//!
//! The interpolant is an immutable value object: fit once per snapshot, then
//! evaluate anywhere. Boundary convention is **natural** (second derivative
//! zero at both end knots), applied uniformly at both ends. Queries outside
//! `[min(x), max(x)]` evaluate the boundary segment's cubic polynomial —
//! deliberately not clamped and not an error, so extrapolated values stay
//! C2-continuous with the last interior segment. This favors smooth scenario
//! generation over physical realism at long extrapolation distances.
//!
//! Costs: fitting is a single O(n) tridiagonal solve; evaluation is a binary
//! search plus a constant amount of arithmetic per query.

use crate::error::CurveError;

/// A fitted natural cubic spline.
///
/// Owns its knots and the second derivatives solved at fit time. With two
/// knots the natural conditions make the curve a straight line.
#[derive(Debug, Clone, PartialEq)]
pub struct CubicSpline {
    x: Vec<f64>,
    y: Vec<f64>,
    /// Second derivatives at the knots (`m[0] == m[n-1] == 0`).
    m: Vec<f64>,
}

impl CubicSpline {
    /// Fit a spline through strictly increasing knots.
    ///
    /// Errors:
    /// - `InsufficientData` for fewer than 2 points
    /// - `DegenerateInput` for duplicate or decreasing knot positions
    /// - `InvalidInput` for length mismatch or non-finite values
    pub fn fit(x: &[f64], y: &[f64]) -> Result<Self, CurveError> {
        validate_knots(x, y)?;

        let m = solve_second_derivatives(x, y);
        Ok(Self {
            x: x.to_vec(),
            y: y.to_vec(),
            m,
        })
    }

    /// Evaluate the spline at a single year-fraction point.
    pub fn value(&self, t: f64) -> f64 {
        let i = self.segment_index(t);
        let h = self.x[i + 1] - self.x[i];
        let a = (self.x[i + 1] - t) / h;
        let b = (t - self.x[i]) / h;

        // Standard moment form of the cubic segment. The formula is a plain
        // cubic polynomial in t, so it extends naturally when a or b leave
        // [0, 1] (extrapolation).
        a * self.y[i]
            + b * self.y[i + 1]
            + ((a * a * a - a) * self.m[i] + (b * b * b - b) * self.m[i + 1]) * (h * h) / 6.0
    }

    /// Evaluate the spline at each query point.
    pub fn values(&self, ts: &[f64]) -> Vec<f64> {
        ts.iter().map(|&t| self.value(t)).collect()
    }

    /// Knot abscissas (year fractions).
    pub fn knots_x(&self) -> &[f64] {
        &self.x
    }

    /// Knot ordinates (yields).
    pub fn knots_y(&self) -> &[f64] {
        &self.y
    }

    /// Index of the segment whose polynomial covers `t`.
    ///
    /// Queries left of the first knot map to segment 0, queries right of the
    /// last knot map to the final segment; both give the cubic extension of
    /// the boundary piece.
    fn segment_index(&self, t: f64) -> usize {
        let idx = self.x.partition_point(|v| *v <= t);
        idx.saturating_sub(1).min(self.x.len() - 2)
    }
}

fn validate_knots(x: &[f64], y: &[f64]) -> Result<(), CurveError> {
    if x.len() != y.len() {
        return Err(CurveError::invalid_input(format!(
            "Knot length mismatch: {} tenors vs {} yields.",
            x.len(),
            y.len()
        )));
    }
    if x.len() < 2 {
        return Err(CurveError::insufficient(format!(
            "Need at least 2 observation points to fit a curve (got {}).",
            x.len()
        )));
    }
    if x.iter().any(|v| !v.is_finite()) || y.iter().any(|v| !v.is_finite()) {
        return Err(CurveError::invalid_input("Knots contain non-finite values."));
    }
    for w in x.windows(2) {
        if w[1] == w[0] {
            return Err(CurveError::degenerate(format!(
                "Duplicate knot position at t={}.",
                w[0]
            )));
        }
        if w[1] < w[0] {
            return Err(CurveError::degenerate(format!(
                "Knot positions must be strictly increasing ({} after {}).",
                w[1], w[0]
            )));
        }
    }
    Ok(())
}

/// Solve the natural-spline tridiagonal system for the knot second
/// derivatives via the Thomas algorithm.
///
/// The system has one equation per interior knot; the natural conditions pin
/// both end values to zero. Diagonal dominance (`2(h_{i-1}+h_i)` against
/// `h_{i-1}` and `h_i`) makes the forward elimination unconditionally stable
/// for strictly increasing knots.
fn solve_second_derivatives(x: &[f64], y: &[f64]) -> Vec<f64> {
    let n = x.len();
    let mut m = vec![0.0; n];
    if n < 3 {
        return m;
    }

    let interior = n - 2;
    let mut diag = vec![0.0; interior];
    let mut rhs = vec![0.0; interior];
    let mut upper = vec![0.0; interior];

    for k in 0..interior {
        let i = k + 1;
        let h_prev = x[i] - x[i - 1];
        let h_next = x[i + 1] - x[i];
        diag[k] = 2.0 * (h_prev + h_next);
        upper[k] = h_next;
        rhs[k] = 6.0 * ((y[i + 1] - y[i]) / h_next - (y[i] - y[i - 1]) / h_prev);
    }

    // Forward elimination. The sub-diagonal entry for row k is h between
    // knots k and k+1, recomputed on the fly.
    for k in 1..interior {
        let lower = x[k + 1] - x[k];
        let w = lower / diag[k - 1];
        diag[k] -= w * upper[k - 1];
        rhs[k] -= w * rhs[k - 1];
    }

    // Back substitution into the interior slots of m.
    m[interior] = rhs[interior - 1] / diag[interior - 1];
    for k in (0..interior - 1).rev() {
        m[k + 1] = (rhs[k] - upper[k] * m[k + 2]) / diag[k];
    }

    m
}
