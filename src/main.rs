mod cli;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use std::io::{self, Write};
use tracing::info;

use cli::{Cli, Config};
use resource_report::core::{collect_metrics, DockerStatsSource};
use resource_report::report::render;
use resource_report::utils::init_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::from(cli);
    if !config.color {
        colored::control::set_override(false);
    }

    let source = DockerStatsSource::new(config.docker_bin.as_str());
    let collection = collect_metrics(&source, &config.filters);

    if !collection.source_available {
        info!("Stats source unavailable, producing an empty report");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render(config.format, &collection.records, &Local::now(), &mut out)
        .context("Failed to write report")?;
    out.flush().context("Failed to flush report")?;

    Ok(())
}
