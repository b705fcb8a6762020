// Declare modules
pub mod cli;
pub mod config;
pub mod error;
pub mod file_io;
pub mod models;
pub mod report;
pub mod settings;

use anyhow::{Context, Result};
use clap::Parser;
use std::env;

use self::cli::Cli;
use self::config::resolve_config;
use self::file_io::FileIo;
use self::report::LogFacade;
use self::settings::SettingsBuilder;

/// Resolves, validates and reports the settings for a generation run.
pub fn run() -> Result<()> {
    // 1. Parse Args
    let args = Cli::parse();

    // 2. Identify the project, used to auto-select a preset
    let current_dir = env::current_dir().context("Failed to get current directory")?;
    let project_name = current_dir.file_name().and_then(|n| n.to_str());

    // 3. Resolve Configuration
    let config = resolve_config(args, project_name)?;

    // 4. Validate
    let settings = SettingsBuilder::from_config(&config).build()?;

    // 5. Report
    settings.log_properties(&LogFacade);

    if let Some(report_file) = &config.report_file {
        FileIo::write_content_to_file(&settings.report_lines().join("\n"), report_file)?;
        log::info!("Settings report written to {}", report_file.display());
    }

    Ok(())
}
