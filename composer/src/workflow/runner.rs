use crate::workflow::config::WorkflowConfig;
use anyhow::Context;
use wavecore::math::SeriesSummary;
use wavecore::{compose, generate_from_spec, render, Domain, PlotBackend, WaveSet};

pub struct WorkflowResult {
    pub domain: Domain,
    pub waves: WaveSet,
}

impl WorkflowResult {
    pub fn summaries(&self) -> Vec<SeriesSummary> {
        SeriesSummary::for_waves(&self.waves)
    }

    pub fn render_to<B>(&self, backend: &mut B) -> anyhow::Result<()>
    where
        B: PlotBackend,
        B::Error: std::error::Error + Send + Sync + 'static,
    {
        render(backend, &self.domain, &self.waves).context("rendering composed waves")
    }
}

#[derive(Clone)]
pub struct Runner {
    config: WorkflowConfig,
}

impl Runner {
    pub fn new(config: WorkflowConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> anyhow::Result<WorkflowResult> {
        let domain =
            generate_from_spec(&self.config.domain).context("generating sample domain")?;
        log::debug!("domain holds {} samples", domain.len());
        let waves = compose(&domain);
        Ok(WorkflowResult { domain, waves })
    }
}
