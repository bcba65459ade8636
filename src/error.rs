//! Crate-wide error type.
//!
//! All failures are raised synchronously at the point of detection and
//! propagate directly to the caller; the pipeline never retries and never
//! returns partial results. The variants distinguish the failure classes
//! callers care about; `exit_code()` maps them onto process exit codes for
//! the `tsg` binary:
//!
//! - 2: malformed input or bad parameters
//! - 3: not enough (or degenerate) data to fit
//! - 4: observation source / runtime failure

#[derive(Clone)]
pub enum CurveError {
    /// Malformed or empty date/yield input.
    InvalidInput(String),
    /// Non-monotonic or duplicate knot positions.
    DegenerateInput(String),
    /// Fewer than 2 observation points.
    InsufficientData(String),
    /// Out-of-range generation parameters (e.g. negative volatility).
    InvalidParameter(String),
    /// Observation source or file I/O failure.
    Source(String),
}

impl CurveError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateInput(message.into())
    }

    pub fn insufficient(message: impl Into<String>) -> Self {
        Self::InsufficientData(message.into())
    }

    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter(message.into())
    }

    pub fn source(message: impl Into<String>) -> Self {
        Self::Source(message.into())
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            CurveError::InvalidInput(_) | CurveError::InvalidParameter(_) => 2,
            CurveError::DegenerateInput(_) | CurveError::InsufficientData(_) => 3,
            CurveError::Source(_) => 4,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            CurveError::InvalidInput(_) => "invalid input",
            CurveError::DegenerateInput(_) => "degenerate input",
            CurveError::InsufficientData(_) => "insufficient data",
            CurveError::InvalidParameter(_) => "invalid parameter",
            CurveError::Source(_) => "source error",
        }
    }

    fn message(&self) -> &str {
        match self {
            CurveError::InvalidInput(m)
            | CurveError::DegenerateInput(m)
            | CurveError::InsufficientData(m)
            | CurveError::InvalidParameter(m)
            | CurveError::Source(m) => m,
        }
    }
}

impl std::fmt::Display for CurveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.label(), self.message())
    }
}

impl std::fmt::Debug for CurveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CurveError")
            .field("kind", &self.label())
            .field("message", &self.message())
            .finish()
    }
}

impl std::error::Error for CurveError {}
