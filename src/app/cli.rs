use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Validate and report the settings for feature and runner generation"
)]
pub struct Cli {
    /// Use a named preset from presets.toml
    #[arg(long)]
    pub preset: Option<String>,

    /// Read presets from this file instead of ~/.config/runner_gen/presets.toml
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Feature file or directory, optionally suffixed with ':<line>' to select one scenario
    #[arg(long)]
    pub source_features: Option<String>,

    /// Template used to render runner classes
    #[arg(long)]
    pub source_runner_template_file: Option<String>,

    /// Directory receiving the generated feature files
    #[arg(long)]
    pub generated_feature_directory: Option<String>,

    /// Directory receiving the generated runners
    #[arg(long)]
    pub generated_runner_directory: Option<String>,

    /// Only scenarios carrying one of these tags (e.g. '@smoke')
    #[arg(long, num_args = 1..)]
    pub include_tags: Option<Vec<String>>,

    /// Skip scenarios carrying any of these tags (e.g. '@wip')
    #[arg(long, num_args = 1..)]
    pub exclude_tags: Option<Vec<String>>,

    /// Also write the settings report to this file
    #[arg(long)]
    pub report: Option<PathBuf>,
}
