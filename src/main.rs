use anyhow::Context;
use clap::Parser;

use ccp_rip::app::console;
use ccp_rip::config::{file::FileConfig, Settings};
use ccp_rip::core::checksum;
use ccp_rip::utils::{logger, validation::Validate};
use ccp_rip::CliConfig;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting ccp-rip");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let file_config = match &config.config {
        Some(path) => {
            let loaded = FileConfig::from_file(path)
                .with_context(|| format!("cannot load configuration file {}", path))?;
            if let Err(e) = loaded.validate() {
                tracing::error!("Configuration validation failed: {}", e);
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
            Some(loaded)
        }
        None => None,
    };

    let settings = match Settings::resolve(&config, file_config.as_ref()) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if config.interactive {
        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();
        console::run_interactive(stdin.lock(), &mut stdout, settings.locale, settings.format)?;
        return Ok(());
    }

    let raw = match settings.account.as_deref() {
        Some(raw) => raw,
        None => {
            eprintln!(
                "❌ no account number given, pass one as an argument, set [account] default, or use --interactive"
            );
            std::process::exit(1);
        }
    };

    match checksum::compute(raw) {
        Ok(result) => {
            tracing::info!("Computed keys for account {}", result.account);
            let mut stdout = std::io::stdout();
            console::render(&mut stdout, settings.locale, settings.format, &result)?;
        }
        Err(e) if e.is_input_error() => {
            tracing::warn!("Input rejected: {}", e);
            eprintln!("⚠️  {}", console::error_hint(settings.locale, &e));
            std::process::exit(2);
        }
        Err(e) => {
            tracing::error!("Computation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
