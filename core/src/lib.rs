//! Waveform composition core for the superposed-sine demo.
//!
//! The pipeline is `generate_domain -> compose -> render`. The first two
//! steps are pure; `render` is the only side effect and goes through the
//! [`plot::PlotBackend`] seam so no display is needed to test the maths.

pub mod math;
pub mod plot;
pub mod prelude;
pub mod telemetry;
pub mod waveform;

pub use plot::{render, Figure, PlotBackend};
pub use prelude::{DomainSpec, WaveError, WaveResult};
pub use waveform::{compose, generate_domain, generate_from_spec, Domain, SineTerm, WaveSet};
