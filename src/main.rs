//! extract-settings - Main entry point
//!
//! Provisions the data layout and reports what it did.

use anyhow::Context;
use tracing::{debug, error, info};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use extract_settings::cli::{Cli, Commands};
use extract_settings::sanity::{print_check_failures, verify_layout};
use extract_settings::{DataLayout, Settings, SettingsConfig};

/// Initialize the logger with appropriate settings
fn init_logger(verbose: bool) {
    let filter = log_filter(std::env::var("RUST_LOG").ok(), verbose);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// RUST_LOG directives (default `info`), raised to `debug` by `-v`
fn log_filter(rust_log: Option<String>, verbose: bool) -> EnvFilter {
    let filter = rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"));

    if verbose {
        filter.add_directive(LevelFilter::DEBUG.into())
    } else {
        filter
    }
}

/// Main application entry point
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();
    init_logger(cli.verbose);
    debug!("CLI arguments parsed: {:?}", cli);

    let config = SettingsConfig::from_env()
        .with_base_dir(cli.base_dir.clone())
        .with_mode(cli.mode());

    match cli.command.unwrap_or(Commands::Provision) {
        Commands::Provision => run_provision(&config),
        Commands::Show { json, output } => {
            let layout = resolve_layout(&config)?;
            if let Some(path) = output {
                layout.save_to_file(&path)?;
                info!("Layout written to {:?}", path);
            }
            if json {
                println!("{}", layout.to_json()?);
            } else {
                print_layout(&layout);
            }
            Ok(())
        }
        Commands::Check => {
            let layout = resolve_layout(&config)?;
            let check = verify_layout(&layout);
            if !check.is_ok() {
                print_check_failures(&check);
                std::process::exit(1);
            }
            println!("✓ Layout under {} is complete", layout.base_dir().display());
            Ok(())
        }
    }
}

/// Provision the layout, exiting with status 1 on failure
fn run_provision(config: &SettingsConfig) -> anyhow::Result<()> {
    match Settings::init(config) {
        Ok(settings) => {
            for (path, status) in &settings.report.entries {
                println!("✓ {} ({})", path.display(), status);
            }
            Ok(())
        }
        Err(e) => {
            error!("Provisioning failed: {}", e);
            eprintln!("✗ {}", e);
            std::process::exit(1);
        }
    }
}

fn resolve_layout(config: &SettingsConfig) -> anyhow::Result<DataLayout> {
    let base_dir = config
        .resolve_base()
        .context("Failed to resolve base directory")?;
    Ok(DataLayout::from_base(base_dir)?)
}

fn print_layout(layout: &DataLayout) {
    println!("base:     {}", layout.base_dir().display());
    println!("data:     {}", layout.data_dir().display());
    println!("input:    {}", layout.input_dir().display());
    println!("download: {}", layout.download_dir().display());
    println!("output:   {}", layout.output_dir().display());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_defaults_to_info() {
        assert_eq!(log_filter(None, false).max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_verbose_applies_with_rust_log_set() {
        let filter = log_filter(Some("warn".to_string()), true);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG), "got {}", filter);
    }

    #[test]
    fn test_rust_log_kept_without_verbose() {
        let filter = log_filter(Some("warn".to_string()), false);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }
}
