mod loader;

pub use loader::{
    directory_ancestors, load_config, load_config_from, parse_and_validate_config,
    CONFIG_FILE_NAME,
};

use crate::classifier::{Classifier, KeywordSet};
use crate::intake::SUGGESTED_DEPARTMENTS;
use crate::io::output::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure, read from `.insider-risk.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct InsiderRiskConfig {
    /// Keyword overrides for the classifier
    #[serde(default)]
    pub keywords: Option<KeywordsConfig>,

    /// Where the alert history lives
    #[serde(default)]
    pub storage: Option<StorageConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,

    /// Suggested department labels
    #[serde(default)]
    pub departments: Option<DepartmentsConfig>,

    /// Directory of the file this config was read from
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

impl InsiderRiskConfig {
    /// Build the classifier, falling back to the compiled-in list for any
    /// tier the file does not override.
    pub fn classifier(&self) -> Classifier {
        let keywords = self.keywords.as_ref();
        let high = keywords
            .and_then(|k| k.high.clone())
            .unwrap_or_else(KeywordSet::default_high);
        let medium = keywords
            .and_then(|k| k.medium.clone())
            .unwrap_or_else(KeywordSet::default_medium);
        log::debug!(
            "Classifier keywords: {} high [{}], {} medium [{}]",
            high.len(),
            high.iter().collect::<Vec<_>>().join(", "),
            medium.len(),
            medium.iter().collect::<Vec<_>>().join(", ")
        );
        Classifier::new(high, medium)
    }

    /// Relative paths are resolved against the directory holding the
    /// config file, so every subdirectory of a project shares one history.
    pub fn history_file(&self) -> PathBuf {
        let path = self
            .storage
            .as_ref()
            .map(|s| s.history_file.clone())
            .unwrap_or_else(default_history_file);

        match &self.base_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path,
        }
    }

    pub fn with_base_dir(mut self, dir: &Path) -> Self {
        self.base_dir = Some(dir.to_path_buf());
        self
    }

    pub fn default_format(&self) -> OutputFormat {
        self.output
            .as_ref()
            .and_then(|o| o.default_format)
            .unwrap_or_default()
    }

    pub fn use_color(&self) -> Option<bool> {
        self.output.as_ref().and_then(|o| o.use_color)
    }

    pub fn suggested_departments(&self) -> Vec<String> {
        self.departments
            .as_ref()
            .map(|d| d.suggested.clone())
            .unwrap_or_else(|| SUGGESTED_DEPARTMENTS.iter().map(|d| d.to_string()).collect())
    }
}

/// Keyword overrides. Omitted tiers keep their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct KeywordsConfig {
    #[serde(default)]
    pub high: Option<KeywordSet>,

    #[serde(default)]
    pub medium: Option<KeywordSet>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// JSON alert history used by the CLI (default: alerts.json)
    #[serde(default = "default_history_file")]
    pub history_file: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            history_file: default_history_file(),
        }
    }
}

fn default_history_file() -> PathBuf {
    PathBuf::from("alerts.json")
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    pub default_format: Option<OutputFormat>,
    /// Enable colored output (default: auto-detect based on TTY)
    #[serde(default)]
    pub use_color: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentsConfig {
    pub suggested: Vec<String>,
}
