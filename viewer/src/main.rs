use anyhow::Context;
use wavecore::{compose, generate_from_spec, render, Domain, DomainSpec, PlotBackend, WaveSet};

mod chart;
mod window;

/// The plot is static; the window never produces messages.
#[derive(Debug, Clone)]
pub enum Message {}

fn show<B>(backend: &mut B, domain: &Domain, waves: &WaveSet) -> anyhow::Result<()>
where
    B: PlotBackend,
    B::Error: std::error::Error + Send + Sync + 'static,
{
    render(backend, domain, waves).context("displaying plot window")
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let domain =
        generate_from_spec(&DomainSpec::default()).context("generating sample domain")?;
    let waves = compose(&domain);

    show(&mut window::WindowBackend, &domain, &waves)
}
