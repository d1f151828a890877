use anyhow::Context;
use clap::Parser;
use report::table::{write_summaries, TableBackend};
use std::io::{self, Write};
use std::path::PathBuf;
use workflow::config::WorkflowConfig;
use workflow::runner::Runner;

mod report;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Headless driver for the superposed sine waves")]
struct Args {
    /// Print one summary line per series instead of the sample table
    #[arg(long, default_value_t = false)]
    summary: bool,
    /// Print the figure as JSON instead of the sample table
    #[arg(long, default_value_t = false, conflicts_with = "summary")]
    json: bool,
    /// Limit the number of table rows
    #[arg(long, conflicts_with_all = ["summary", "json"])]
    rows: Option<usize>,
    /// Load the sampling domain from YAML
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = if let Some(path) = args.config {
        WorkflowConfig::load(path)?
    } else {
        WorkflowConfig::default()
    };

    let result = Runner::new(config).execute()?;
    let stdout = io::stdout();

    if args.summary {
        let mut out = stdout.lock();
        write_summaries(&mut out, &result.summaries()).context("writing summary")?;
    } else if args.json {
        let figure = wavecore::Figure::from_waves(&result.domain, &result.waves);
        let mut out = stdout.lock();
        writeln!(out, "{}", figure.to_json().context("serializing figure")?)?;
    } else {
        let mut backend = TableBackend::new(stdout.lock(), args.rows);
        result.render_to(&mut backend)?;
    }

    Ok(())
}
