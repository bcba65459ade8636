//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - raw observations and term-structure snapshots (`Observation`, `ObservationSet`)
//! - run configuration (`RunConfig`)
//! - scenario output (`ScenarioMatrix`)
//! - the portable curve file schema (`CurveFile`, `CurveGrid`)

pub mod types;

pub use types::*;
