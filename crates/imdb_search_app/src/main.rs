//! `imdb_ext_search`: fetch one IMDb advanced search page and post-process its results.
mod cli;

use std::io;

use anyhow::Context;
use clap::Parser;
use engine_logging::{engine_debug, engine_info};
use imdb_search_engine::{run_search, AdvancedListExtractor, ReqwestFetcher, RunOutcome};

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    engine_logging::initialize(cli.log_destination(), cli.log_level());

    if let Err(err) = run(&cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let request = cli.search_request();
    engine_debug!("search request: {:?}", request);
    let fetcher = ReqwestFetcher::new(cli.fetch_settings());
    let extractor = AdvancedListExtractor::default();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let outcome = runtime.block_on(run_search(
        &fetcher,
        &extractor,
        &request,
        &mut out,
        &mut rand::rng(),
    ))?;

    match outcome {
        RunOutcome::Completed { records } => engine_info!("printed {} records", records.len()),
        RunOutcome::Unsuccessful { status } => engine_info!("stopped after status {}", status),
    }
    Ok(())
}
