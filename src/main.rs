use anyhow::Context;
use campus_records::utils::{logger, validation::Validate};
use campus_records::{CliConfig, Showcase};
use clap::Parser;
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting campus-records CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // Load and validate the scenario; bail out with status 1 on failure
    let scenario = match config.validate().and_then(|_| config.load_scenario()) {
        Ok(scenario) => scenario,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let showcase = Showcase::new(scenario);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match showcase.run(&mut out) {
        Ok(report) => {
            if config.json {
                let json = report.to_json()?;
                writeln!(out, "{}", json).context("failed to write demo report")?;
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Demo aborted: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("\n Error occurred: {}", e.user_friendly_message());
        }
    }

    Ok(())
}
