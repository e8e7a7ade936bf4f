pub mod alerts;
pub mod init;
pub mod rank;

use crate::cli::{Cli, Commands};
use crate::config::{load_config, load_config_from, InsiderRiskConfig};
use crate::formatting::FormattingConfig;
use crate::io::output::{create_writer, OutputFormat, ReportWriter};
use anyhow::Result;
use std::io::Write;
use std::path::PathBuf;

/// Everything a command needs, resolved once from flags and config.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub config: InsiderRiskConfig,
    pub history_path: PathBuf,
    pub format: OutputFormat,
    pub formatting: FormattingConfig,
}

impl CommandContext {
    /// Flags win over the config file, which wins over defaults.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = match &cli.config {
            Some(path) => load_config_from(path)?,
            None => load_config(),
        };

        let history_path = cli
            .history
            .clone()
            .unwrap_or_else(|| config.history_file());
        let format = cli.format.unwrap_or_else(|| config.default_format());
        let formatting = if cli.plain {
            FormattingConfig::plain()
        } else {
            FormattingConfig::from_env(config.use_color())
        };

        Ok(Self {
            config,
            history_path,
            format,
            formatting,
        })
    }

    pub fn writer<'a>(&self, out: Box<dyn Write + 'a>) -> Box<dyn ReportWriter + 'a> {
        create_writer(self.format, self.formatting, out)
    }
}

/// Dispatch a parsed command line, writing reports to `out`.
pub fn run(cli: Cli, out: &mut dyn Write) -> Result<()> {
    let ctx = CommandContext::from_cli(&cli)?;
    log::debug!("Using alert history {}", ctx.history_path.display());
    let mut writer = ctx.writer(Box::new(out));

    match cli.command {
        Commands::Classify { snippet } => alerts::classify(&ctx, writer.as_mut(), &snippet),
        Commands::Submit {
            employee,
            department,
            snippet,
        } => alerts::submit(&ctx, writer.as_mut(), employee, department, snippet),
        Commands::List => alerts::list(&ctx, writer.as_mut()),
        Commands::Isolate { id } => alerts::isolate(&ctx, writer.as_mut(), id),
        Commands::Rank { top } => rank::rank(&ctx, writer.as_mut(), top),
        Commands::Overview => rank::overview(&ctx, writer.as_mut()),
        Commands::Departments => alerts::departments(&ctx, writer.as_mut()),
        Commands::Init { force } => init::init_config(writer.as_mut(), force),
    }
}
