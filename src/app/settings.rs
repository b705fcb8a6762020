//! Settings for a generation run.
//!
//! Values are collected in a [`SettingsBuilder`] and only become a
//! [`Settings`] once the tag filters pass validation, so a validated value
//! can no longer be changed.

use crate::app::error::ConfigurationError;
use crate::app::models::{RuntimeConfig, SourceFeatures};
use crate::app::report::{field_line, tags_line, PropertyLog};

/// Validated, read-only settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    source: SourceFeatures,
    source_runner_template_file: String,
    generated_feature_directory: String,
    generated_runner_directory: String,
    include_tags: Vec<String>,
    exclude_tags: Vec<String>,
}

impl Settings {
    /// Feature path with any valid `:line` suffix removed.
    pub fn source_features(&self) -> &str {
        self.source.path()
    }

    pub fn scenario_line_number(&self) -> Option<i32> {
        self.source.line_number()
    }

    pub fn source_runner_template_file(&self) -> &str {
        &self.source_runner_template_file
    }

    pub fn generated_feature_directory(&self) -> &str {
        &self.generated_feature_directory
    }

    pub fn generated_runner_directory(&self) -> &str {
        &self.generated_runner_directory
    }

    pub fn include_tags(&self) -> &[String] {
        &self.include_tags
    }

    pub fn exclude_tags(&self) -> &[String] {
        &self.exclude_tags
    }

    /// The settings report: five fixed lines, then the line number, include
    /// tags and exclude tags, each only when set.
    pub fn report_lines(&self) -> Vec<String> {
        let selection = match self.scenario_line_number() {
            Some(_) => "single scenario",
            None => "all scenarios in source features",
        };

        let mut lines = vec![
            field_line("source feature(s)", self.source_features()),
            field_line("source runner template file", &self.source_runner_template_file),
            field_line("generated feature directory", &self.generated_feature_directory),
            field_line("generated runner directory", &self.generated_runner_directory),
            field_line("scenario selection", selection),
        ];

        if let Some(line_number) = self.scenario_line_number() {
            lines.push(field_line("scenario line number", &line_number.to_string()));
        }
        if !self.include_tags.is_empty() {
            lines.push(tags_line("include tags", &self.include_tags));
        }
        if !self.exclude_tags.is_empty() {
            lines.push(tags_line("exclude tags", &self.exclude_tags));
        }

        lines
    }

    pub fn log_properties(&self, log: &dyn PropertyLog) {
        for line in self.report_lines() {
            log.info(&line);
        }
    }
}

/// Collects settings field by field. Nothing is checked until
/// [`SettingsBuilder::validate`] or [`SettingsBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct SettingsBuilder {
    settings: Settings,
}

impl SettingsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &RuntimeConfig) -> Self {
        Self::new()
            .source_features(&config.source_features)
            .source_runner_template_file(&config.source_runner_template_file)
            .generated_feature_directory(&config.generated_feature_directory)
            .generated_runner_directory(&config.generated_runner_directory)
            .include_scenario_tags(config.include_tags.clone())
            .exclude_scenario_tags(config.exclude_tags.clone())
    }

    /// Accepts `path` or `path:line`; see [`SourceFeatures::parse`].
    pub fn source_features(mut self, raw: &str) -> Self {
        self.settings.source = SourceFeatures::parse(raw);
        self
    }

    pub fn source_runner_template_file(mut self, path: &str) -> Self {
        self.settings.source_runner_template_file = path.to_string();
        self
    }

    pub fn generated_feature_directory(mut self, path: &str) -> Self {
        self.settings.generated_feature_directory = path.to_string();
        self
    }

    pub fn generated_runner_directory(mut self, path: &str) -> Self {
        self.settings.generated_runner_directory = path.to_string();
        self
    }

    pub fn include_scenario_tags(mut self, tags: Vec<String>) -> Self {
        self.settings.include_tags = tags;
        self
    }

    pub fn exclude_scenario_tags(mut self, tags: Vec<String>) -> Self {
        self.settings.exclude_tags = tags;
        self
    }

    pub fn source_features_path(&self) -> &str {
        self.settings.source_features()
    }

    pub fn scenario_line_number(&self) -> Option<i32> {
        self.settings.scenario_line_number()
    }

    /// Fails on the first tag without a leading `@`, include tags first.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if let Some(tag) = first_malformed(&self.settings.include_tags) {
            return Err(ConfigurationError::IncludeTag(tag.to_string()));
        }
        if let Some(tag) = first_malformed(&self.settings.exclude_tags) {
            return Err(ConfigurationError::ExcludeTag(tag.to_string()));
        }
        Ok(())
    }

    pub fn build(self) -> Result<Settings, ConfigurationError> {
        self.validate()?;
        Ok(self.settings)
    }

    /// Logs the current, possibly unvalidated, values.
    pub fn log_properties(&self, log: &dyn PropertyLog) {
        self.settings.log_properties(log);
    }
}

fn first_malformed(tags: &[String]) -> Option<&str> {
    tags.iter()
        .map(String::as_str)
        .find(|tag| !tag.starts_with('@'))
}
