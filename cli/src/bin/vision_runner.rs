//! CLI entrypoint for vision-runner
//!
//! Wires the layers together with dependency injection: parse the
//! locator, assemble the OCR crew, run it through the local runtime
//! backed by the vision provider, and print the extracted text.

use anyhow::Result;
use clap::Parser;
use crewrun::commands::VisionCli;
use crewrun::console;
use crewrun_application::RunCrewUseCase;
use crewrun_domain::vision_crew;
use crewrun_infrastructure::{LocalCrewRuntime, VisionConfig, VisionProvider};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = match VisionCli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Usage failures exit 1; --help and --version exit 0
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    crewrun::init_tracing(cli.verbose, cli.quiet);
    info!("Starting vision runner for '{}'", cli.locator);

    // Assemble the crew before touching any resource
    let unit = vision_crew(&cli.locator)?;

    // === Dependency Injection ===
    let provider = Arc::new(VisionProvider::new(VisionConfig::from_env()?));
    let runtime = Arc::new(LocalCrewRuntime::new().register(provider));

    let use_case = RunCrewUseCase::new(runtime);
    let result = use_case.execute(unit).await?;

    console::print_result(&result);
    Ok(())
}
