use crate::core::RiskTier;
use colored::*;
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => std::io::stdout().is_terminal(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FormattingConfig {
    pub color: ColorMode,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
        }
    }
}

impl FormattingConfig {
    pub fn new(color: ColorMode) -> Self {
        Self { color }
    }

    /// Resolve color from the environment, then the config file preference.
    ///
    /// `NO_COLOR` and `CLICOLOR=0` always win; `CLICOLOR_FORCE=1` wins over
    /// the config file.
    pub fn from_env(configured: Option<bool>) -> Self {
        Self::resolve(configured, |name| env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injected variable lookup.
    pub fn resolve(configured: Option<bool>, var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(use_color) = configured {
            config.color = if use_color {
                ColorMode::Always
            } else {
                ColorMode::Never
            };
        }

        if var("CLICOLOR_FORCE").as_deref() == Some("1") {
            config.color = ColorMode::Always;
        }

        if var("CLICOLOR").as_deref() == Some("0") {
            config.color = ColorMode::Never;
        }

        // per no-color.org
        if var("NO_COLOR").is_some() {
            config.color = ColorMode::Never;
        }

        config
    }

    /// Plain output: no colors
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
        }
    }
}

/// Severity-aware text styling for terminal output.
pub struct TierPainter {
    enabled: bool,
}

impl TierPainter {
    pub fn new(config: FormattingConfig) -> Self {
        let enabled = config.color.should_use_color();
        colored::control::set_override(enabled);
        Self { enabled }
    }

    pub fn tier(&self, tier: RiskTier, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        match tier {
            RiskTier::High => text.red().bold().to_string(),
            RiskTier::Medium => text.yellow().to_string(),
            RiskTier::Low => text.green().to_string(),
        }
    }

    pub fn header(&self, text: &str) -> String {
        if self.enabled {
            text.cyan().bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn dim(&self, text: &str) -> String {
        if self.enabled {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }
}
