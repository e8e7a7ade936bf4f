use super::CommandContext;
use crate::io::history::load_history;
use crate::io::output::ReportWriter;
use crate::ranking::{self, ThreatOverview};
use anyhow::{Context, Result};

pub fn rank(ctx: &CommandContext, writer: &mut dyn ReportWriter, top: Option<usize>) -> Result<()> {
    let store = load_history(&ctx.history_path)
        .with_context(|| format!("Failed to load {}", ctx.history_path.display()))?;

    // Oldest first, so each employee shows their latest department
    let mut entries = ranking::rank(store.as_slice());
    if let Some(limit) = top {
        entries.truncate(limit);
    }

    writer.write_ranking(&entries)?;
    Ok(())
}

pub fn overview(ctx: &CommandContext, writer: &mut dyn ReportWriter) -> Result<()> {
    let store = load_history(&ctx.history_path)
        .with_context(|| format!("Failed to load {}", ctx.history_path.display()))?;
    writer.write_overview(&ThreatOverview::from_records(store.as_slice()))?;
    Ok(())
}
