pub mod fft;
pub mod stats;
pub mod summary;

pub use fft::FftHelper;
pub use stats::StatsHelper;
pub use summary::SeriesSummary;
