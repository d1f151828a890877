use crate::math::fft::FftHelper;
use crate::math::stats::StatsHelper;
use crate::waveform::WaveSet;
use serde::{Deserialize, Serialize};

/// Descriptive numbers for one series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub label: String,
    pub len: usize,
    pub min: f64,
    pub max: f64,
    pub rms: f64,
    pub zero_crossings: usize,
    pub dominant_bin: Option<usize>,
}

impl SeriesSummary {
    pub fn from_samples(label: &str, samples: &[f64]) -> Self {
        let (min, max) = StatsHelper::min_max(samples).unwrap_or((0.0, 0.0));
        let dominant_bin = if samples.len() > 1 {
            FftHelper::new(samples.len()).dominant_bin(samples)
        } else {
            None
        };
        Self {
            label: label.to_string(),
            len: samples.len(),
            min,
            max,
            rms: StatsHelper::rms(samples),
            zero_crossings: StatsHelper::zero_crossings(samples),
            dominant_bin,
        }
    }

    /// Summaries for y1..y4 in order.
    pub fn for_waves(waves: &WaveSet) -> Vec<SeriesSummary> {
        waves
            .labelled()
            .into_iter()
            .map(|(label, series)| Self::from_samples(label, &series.to_vec()))
            .collect()
    }
}
