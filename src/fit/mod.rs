//! Curve fitting.
//!
//! Responsibilities:
//!
//! - validate normalized (tenor, yield) knots
//! - build the natural cubic spline interpolant
//! - evaluate it at scalar or vector query points (extrapolation included)

pub mod spline;

pub use spline::*;
