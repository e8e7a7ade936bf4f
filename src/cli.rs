use crate::core::AlertId;
use crate::intake::DEFAULT_DEPARTMENT;
use crate::io::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "insider-risk")]
#[command(about = "Keyword-based insider risk classification and rankings", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to the nearest .insider-risk.toml)
    #[arg(long, global = true, env = "INSIDER_RISK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Alert history file (overrides [storage] history_file)
    #[arg(long, global = true, env = "INSIDER_RISK_HISTORY")]
    pub history: Option<PathBuf>,

    /// Output format (overrides [output] default_format)
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Disable colors
    #[arg(long, global = true)]
    pub plain: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify a snippet without recording it
    Classify {
        /// Text to classify
        snippet: String,
    },

    /// Classify a snippet and record it as an alert
    Submit {
        /// Employee the snippet is attributed to
        #[arg(long)]
        employee: String,

        /// Department of the employee
        #[arg(long, default_value = DEFAULT_DEPARTMENT)]
        department: String,

        /// Intercepted message text
        #[arg(long)]
        snippet: String,
    },

    /// Show recorded alerts, newest first
    List,

    /// Rank employees by High alerts, then by alert volume
    Rank {
        /// Show only the top N employees
        #[arg(long = "top", visible_alias = "head")]
        top: Option<usize>,
    },

    /// Show alert, anomaly and critical counts
    Overview,

    /// Delete an alert from the history
    Isolate {
        /// Id of the alert to remove
        id: AlertId,
    },

    /// List suggested department labels
    Departments,

    /// Write a default .insider-risk.toml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
