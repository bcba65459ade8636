//! Observation sources.
//!
//! The pipeline only needs "something that yields term-structure snapshots";
//! everything source-specific (HTTP, file formats, schema quirks) stays
//! behind `ObservationSource`:
//!
//! - `fred`: constant-maturity Treasury yields over the FRED API
//! - CSV files are handled by `io::ingest` and wrapped in `CsvSource`

use std::path::PathBuf;

use crate::domain::ObservationSet;
use crate::error::CurveError;

pub mod fred;

pub use fred::FredClient;

/// Anything that can produce term-structure snapshots.
pub trait ObservationSource {
    /// Fetch all available snapshots. Order is not significant; the
    /// pipeline selects the latest as-of date itself.
    fn fetch(&self) -> Result<Vec<ObservationSet>, CurveError>;
}

/// Observation source backed by a local CSV file.
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Full ingest output, including row-error accounting.
    pub fn load(&self) -> Result<crate::io::ingest::IngestedData, CurveError> {
        crate::io::ingest::load_observations(&self.path)
    }
}

impl ObservationSource for CsvSource {
    fn fetch(&self) -> Result<Vec<ObservationSet>, CurveError> {
        self.load().map(|i| i.snapshots)
    }
}

impl ObservationSource for FredClient {
    fn fetch(&self) -> Result<Vec<ObservationSet>, CurveError> {
        self.fetch_snapshot().map(|s| vec![s])
    }
}
