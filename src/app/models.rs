use std::path::PathBuf;

/// Represents the final configuration after merging presets and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub source_features: String,
    pub source_runner_template_file: String,
    pub generated_feature_directory: String,
    pub generated_runner_directory: String,
    pub include_tags: Vec<String>,
    pub exclude_tags: Vec<String>,
    pub report_file: Option<PathBuf>,
}

/// A feature location, optionally pinned to a single scenario by `path:line`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceFeatures {
    /// The suffix after the last `:` was an integer.
    Scenario { path: String, line_number: i32 },
    /// No suffix, or one that is not an integer. Holds the raw input untouched.
    Path(String),
}

impl SourceFeatures {
    /// Splits on the last `:`. A suffix that does not parse as an integer is
    /// kept as part of the path rather than rejected.
    pub fn parse(raw: &str) -> Self {
        if let Some((path, suffix)) = raw.rsplit_once(':') {
            if let Ok(line_number) = suffix.parse::<i32>() {
                return SourceFeatures::Scenario {
                    path: path.to_string(),
                    line_number,
                };
            }
        }
        SourceFeatures::Path(raw.to_string())
    }

    pub fn path(&self) -> &str {
        match self {
            SourceFeatures::Scenario { path, .. } | SourceFeatures::Path(path) => path,
        }
    }

    pub fn line_number(&self) -> Option<i32> {
        match self {
            SourceFeatures::Scenario { line_number, .. } => Some(*line_number),
            SourceFeatures::Path(_) => None,
        }
    }
}

impl Default for SourceFeatures {
    fn default() -> Self {
        SourceFeatures::Path(String::new())
    }
}
