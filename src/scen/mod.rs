//! Scenario generation.
//!
//! Responsibilities:
//!
//! - evaluate the fitted curve at the tenor query points (`base`)
//! - draw independent Gaussian shocks per scenario row
//! - assemble the immutable `ScenarioMatrix`
//!
//! Randomness is injected through the `ShockSource` trait so callers and
//! tests control seeding explicitly; there is no ambient global RNG state.

pub mod generate;
pub mod shock;

pub use generate::*;
pub use shock::*;
