use super::CommandContext;
use crate::core::{AlertId, Submission};
use crate::intake::AlertIntake;
use crate::io::history::{load_history, save_history};
use crate::io::output::ReportWriter;
use crate::store::AlertStore;
use anyhow::{Context, Result};

pub fn classify(ctx: &CommandContext, writer: &mut dyn ReportWriter, snippet: &str) -> Result<()> {
    let classification = ctx.config.classifier().explain(snippet);
    writer.write_classification(&classification)?;
    Ok(())
}

pub fn departments(ctx: &CommandContext, writer: &mut dyn ReportWriter) -> Result<()> {
    writer.write_departments(&ctx.config.suggested_departments())?;
    Ok(())
}

pub fn submit(
    ctx: &CommandContext,
    writer: &mut dyn ReportWriter,
    employee: String,
    department: String,
    snippet: String,
) -> Result<()> {
    let mut store = load_history(&ctx.history_path)
        .with_context(|| format!("Failed to load {}", ctx.history_path.display()))?;

    let intake = AlertIntake::new(ctx.config.classifier());
    let record = intake.submit(&mut store, Submission::new(employee, department, snippet))?;

    save_history(&ctx.history_path, &store)
        .with_context(|| format!("Failed to save {}", ctx.history_path.display()))?;
    writer.write_record(&record)?;
    Ok(())
}

pub fn list(ctx: &CommandContext, writer: &mut dyn ReportWriter) -> Result<()> {
    let store = load_history(&ctx.history_path)
        .with_context(|| format!("Failed to load {}", ctx.history_path.display()))?;
    writer.write_alerts(&store.newest_first())?;
    Ok(())
}

pub fn isolate(ctx: &CommandContext, writer: &mut dyn ReportWriter, id: AlertId) -> Result<()> {
    let mut store = load_history(&ctx.history_path)
        .with_context(|| format!("Failed to load {}", ctx.history_path.display()))?;

    store.isolate(id)?;

    save_history(&ctx.history_path, &store)
        .with_context(|| format!("Failed to save {}", ctx.history_path.display()))?;
    writer.write_alerts(&store.newest_first())?;
    Ok(())
}
