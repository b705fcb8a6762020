use crate::app::cli::Cli;
use crate::app::file_io::FileIo;
use crate::app::models::RuntimeConfig;
use anyhow::{anyhow, bail, Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Deserialize, Debug)]
struct PresetsFile {
    #[serde(flatten)]
    presets: HashMap<String, PresetConfig>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(deny_unknown_fields)]
struct PresetConfig {
    source_features: Option<String>,
    source_runner_template_file: Option<String>,
    generated_feature_directory: Option<String>,
    generated_runner_directory: Option<String>,
    include_tags: Option<Vec<String>>,
    exclude_tags: Option<Vec<String>>,
}

fn presets_path_under(home: &Path) -> PathBuf {
    home.join(".config").join("runner_gen").join("presets.toml")
}

/// An explicit path must exist; the default one is optional.
fn load_presets_file(explicit: Option<&Path>) -> Result<HashMap<String, PresetConfig>> {
    load_presets_from(explicit, dirs::home_dir())
}

fn load_presets_from(
    explicit: Option<&Path>,
    home: Option<PathBuf>,
) -> Result<HashMap<String, PresetConfig>> {
    let config_path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match home.map(|home| presets_path_under(&home)) {
            Some(path) if path.exists() => path,
            _ => {
                log::debug!("No presets file found, using command-line settings only");
                return Ok(HashMap::new());
            }
        },
    };

    let content = FileIo::read_content_from_file(&config_path)
        .context(format!("Failed to read presets at {:?}", config_path))?;

    parse_presets(&content).context(format!("Failed to parse {:?}", config_path))
}

fn parse_presets(content: &str) -> Result<HashMap<String, PresetConfig>> {
    let parsed: PresetsFile = toml::from_str(content)?;
    Ok(parsed.presets)
}

/// Preset entries first, then CLI entries. Order and duplicates are kept.
fn merge_vecs(preset_vec: Option<Vec<String>>, cli_vec: Option<Vec<String>>) -> Vec<String> {
    let mut combined = preset_vec.unwrap_or_default();
    if let Some(mut cli_items) = cli_vec {
        combined.append(&mut cli_items);
    }
    combined
}

fn require(cli_value: Option<String>, preset_value: Option<String>, flag: &str) -> Result<String> {
    cli_value
        .or(preset_value)
        .ok_or_else(|| anyhow!("Missing setting: pass --{} or set it in a preset", flag))
}

pub fn resolve_config(cli: Cli, project_name: Option<&str>) -> Result<RuntimeConfig> {
    let presets = load_presets_file(cli.config.as_deref())?;
    merge_config(cli, project_name, &presets)
}

fn merge_config(
    cli: Cli,
    project_name: Option<&str>,
    presets: &HashMap<String, PresetConfig>,
) -> Result<RuntimeConfig> {
    // Determine preset to use: CLI flag > Auto-detect > None
    let preset = match cli.preset.as_deref() {
        Some(name) => match presets.get(name) {
            Some(preset) => preset.clone(),
            None => bail!("Preset '{}' is not defined", name),
        },
        None => project_name
            .and_then(|name| presets.get(name))
            .cloned()
            .unwrap_or_default(),
    };

    let config = RuntimeConfig {
        source_features: require(cli.source_features, preset.source_features, "source-features")?,
        source_runner_template_file: require(
            cli.source_runner_template_file,
            preset.source_runner_template_file,
            "source-runner-template-file",
        )?,
        generated_feature_directory: require(
            cli.generated_feature_directory,
            preset.generated_feature_directory,
            "generated-feature-directory",
        )?,
        generated_runner_directory: require(
            cli.generated_runner_directory,
            preset.generated_runner_directory,
            "generated-runner-directory",
        )?,
        include_tags: merge_vecs(preset.include_tags, cli.include_tags),
        exclude_tags: merge_vecs(preset.exclude_tags, cli.exclude_tags),
        report_file: cli.report,
    };

    Ok(config)
}
