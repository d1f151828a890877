/// Magnitudes below this are treated as exact zeros when counting crossings.
pub const ZERO_EPSILON: f64 = 1e-9;

pub struct StatsHelper;

impl StatsHelper {
    pub fn rms(samples: &[f64]) -> f64 {
        if samples.is_empty() {
            return 0.0;
        }
        let sum_sq: f64 = samples.iter().map(|&v| v * v).sum();
        (sum_sq / samples.len() as f64).sqrt()
    }

    pub fn min_max(samples: &[f64]) -> Option<(f64, f64)> {
        if samples.is_empty() {
            return None;
        }
        let min = samples.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = samples.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        Some((min, max))
    }

    /// Number of sign changes between successive non-zero samples.
    pub fn zero_crossings(samples: &[f64]) -> usize {
        let mut previous: Option<bool> = None;
        let mut crossings = 0;
        for &value in samples {
            if value.abs() < ZERO_EPSILON {
                continue;
            }
            let positive = value > 0.0;
            if previous.is_some_and(|p| p != positive) {
                crossings += 1;
            }
            previous = Some(positive);
        }
        crossings
    }
}
