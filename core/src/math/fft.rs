use num_complex::Complex64;
use rustfft::{num_traits::Zero, Fft, FftPlanner};

/// Helper that wraps the `rustfft` planner for reuse.
pub struct FftHelper {
    fft: std::sync::Arc<dyn Fft<f64>>,
    size: usize,
}

impl FftHelper {
    pub fn new(size: usize) -> Self {
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(size);
        Self { fft, size }
    }

    /// Forward transform of a real sequence, zero-padded or truncated to the planned size.
    pub fn forward(&self, input: &[f64]) -> Vec<Complex64> {
        let mut buffer: Vec<Complex64> = input
            .iter()
            .take(self.size)
            .map(|&value| Complex64::new(value, 0.0))
            .collect();
        buffer.resize(self.size, Complex64::zero());
        self.fft.process(&mut buffer);
        buffer
    }

    /// Index of the strongest non-DC bin in the lower half of the spectrum.
    pub fn dominant_bin(&self, input: &[f64]) -> Option<usize> {
        let spectrum = self.forward(input);
        spectrum
            .iter()
            .enumerate()
            .take(self.size / 2 + 1)
            .skip(1)
            .max_by(|(_, a), (_, b)| a.norm().total_cmp(&b.norm()))
            .map(|(bin, _)| bin)
    }
}
