use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Half-open sampling range for the domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainSpec {
    pub start: f64,
    pub stop: f64,
    pub step: f64,
}

impl Default for DomainSpec {
    /// The standard domain: -4π up to 4π in steps of 0.1.
    fn default() -> Self {
        Self {
            start: -4.0 * PI,
            stop: 4.0 * PI,
            step: 0.1,
        }
    }
}

/// Common error type for waveform generation.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum WaveError {
    #[error("invalid range: start {start}, stop {stop}, step {step} (need finite start < stop and step > 0)")]
    InvalidRange { start: f64, stop: f64, step: f64 },
    #[error("range needs {requested} samples, more than the limit of {limit}")]
    TooManySamples { requested: f64, limit: usize },
}

pub type WaveResult<T> = Result<T, WaveError>;
