//! CLI entrypoint for scrape-runner
//!
//! Wires the layers together with dependency injection: parse the
//! locator and selector, assemble the scraping crew, run it through the
//! local runtime backed by the scrape provider, and print the extracted
//! text.

use anyhow::Result;
use clap::Parser;
use crewrun::commands::ScrapeCli;
use crewrun::console;
use crewrun_application::RunCrewUseCase;
use crewrun_domain::scrape_crew;
use crewrun_infrastructure::{LocalCrewRuntime, ScrapeProvider};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = match ScrapeCli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Usage failures exit 1; --help and --version exit 0
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    crewrun::init_tracing(cli.verbose, cli.quiet);
    info!(
        "Starting scrape runner for '{}' with selector '{}'",
        cli.locator, cli.selector
    );

    // Assemble the crew before touching any resource
    let unit = scrape_crew(&cli.locator, &cli.selector)?;

    // === Dependency Injection ===
    let provider = Arc::new(ScrapeProvider::new());
    let runtime = Arc::new(LocalCrewRuntime::new().register(provider));

    let use_case = RunCrewUseCase::new(runtime);
    let result = use_case.execute(unit).await?;

    console::print_result(&result);
    Ok(())
}
