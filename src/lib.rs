//! Insider risk engine: keyword classification of communication snippets and
//! per-employee risk rankings over the resulting alert history.

// Export modules for library usage
pub mod classifier;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod formatting;
pub mod intake;
pub mod io;
pub mod ranking;
pub mod store;

// Re-export commonly used types
pub use crate::core::{
    AlertId, AlertRecord, Error, NewAlert, Result, ResultExt, RiskTier, Submission,
};

pub use crate::classifier::{classify, Classification, Classifier, KeywordSet};

pub use crate::ranking::{rank, RankingEntry, ThreatOverview};

pub use crate::intake::{validate_submission, AlertIntake, SUGGESTED_DEPARTMENTS};

pub use crate::store::{AlertStore, MemoryAlertStore};

pub use crate::config::{load_config, InsiderRiskConfig};
