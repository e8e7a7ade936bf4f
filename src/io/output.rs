use crate::classifier::Classification;
use crate::core::{AlertRecord, Result, RiskTier};
use crate::formatting::{FormattingConfig, TierPainter};
use crate::ranking::{RankingEntry, ThreatOverview};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, Table};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

pub trait ReportWriter {
    fn write_classification(&mut self, classification: &Classification) -> Result<()>;
    fn write_record(&mut self, record: &AlertRecord) -> Result<()>;
    fn write_alerts(&mut self, alerts: &[AlertRecord]) -> Result<()>;
    fn write_ranking(&mut self, ranking: &[RankingEntry]) -> Result<()>;
    fn write_overview(&mut self, overview: &ThreatOverview) -> Result<()>;
    fn write_departments(&mut self, departments: &[String]) -> Result<()>;
    fn write_config_created(&mut self, path: &Path) -> Result<()>;
}

pub fn create_writer<'a>(
    format: OutputFormat,
    formatting: FormattingConfig,
    writer: Box<dyn Write + 'a>,
) -> Box<dyn ReportWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, formatting)),
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn emit<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, value)?;
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> ReportWriter for JsonWriter<W> {
    fn write_classification(&mut self, classification: &Classification) -> Result<()> {
        self.emit(classification)
    }

    fn write_record(&mut self, record: &AlertRecord) -> Result<()> {
        self.emit(record)
    }

    fn write_alerts(&mut self, alerts: &[AlertRecord]) -> Result<()> {
        self.emit(alerts)
    }

    fn write_ranking(&mut self, ranking: &[RankingEntry]) -> Result<()> {
        self.emit(ranking)
    }

    fn write_overview(&mut self, overview: &ThreatOverview) -> Result<()> {
        self.emit(overview)
    }

    fn write_departments(&mut self, departments: &[String]) -> Result<()> {
        self.emit(departments)
    }

    fn write_config_created(&mut self, path: &Path) -> Result<()> {
        self.emit(&json!({ "created": path.display().to_string() }))
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    painter: TierPainter,
    styled: bool,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, formatting: FormattingConfig) -> Self {
        Self {
            writer,
            painter: TierPainter::new(formatting),
            styled: formatting.color.should_use_color(),
        }
    }

    fn table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        if self.styled {
            table.enforce_styling();
        }
        table
    }

    fn tier_cell(&self, tier: RiskTier, content: impl ToString) -> Cell {
        let cell = Cell::new(content);
        if !self.styled {
            return cell;
        }
        match tier {
            RiskTier::High => cell.fg(Color::Red).add_attribute(Attribute::Bold),
            RiskTier::Medium => cell.fg(Color::Yellow),
            RiskTier::Low => cell.fg(Color::Green),
        }
    }
}

impl<W: Write> ReportWriter for TerminalWriter<W> {
    fn write_classification(&mut self, classification: &Classification) -> Result<()> {
        let tier = classification.tier;
        match &classification.matched_keyword {
            Some(keyword) => writeln!(
                self.writer,
                "{} {}",
                self.painter.tier(tier, tier.as_str()),
                self.painter.dim(&format!("(matched \"{keyword}\")"))
            )?,
            None => writeln!(self.writer, "{}", self.painter.tier(tier, tier.as_str()))?,
        }
        Ok(())
    }

    fn write_record(&mut self, record: &AlertRecord) -> Result<()> {
        writeln!(
            self.writer,
            "Alert {} recorded for {} ({}) on {}: {}",
            record.id,
            record.employee,
            record.department,
            record.date,
            self.painter.tier(record.risk, record.risk.as_str())
        )?;
        Ok(())
    }

    fn write_alerts(&mut self, alerts: &[AlertRecord]) -> Result<()> {
        writeln!(self.writer, "{}", self.painter.header("THREAT LOG"))?;
        if alerts.is_empty() {
            writeln!(self.writer, "No anomalies in current databank.")?;
            return Ok(());
        }

        let mut table = self.table();
        table.set_header(vec![
            "Id",
            "Date",
            "Employee",
            "Department",
            "Snippet",
            "Severity",
        ]);
        for alert in alerts {
            table.add_row(vec![
                Cell::new(alert.id),
                Cell::new(&alert.date),
                Cell::new(&alert.employee),
                Cell::new(&alert.department),
                Cell::new(format!("\"{}\"", alert.snippet)),
                self.tier_cell(alert.risk, alert.risk),
            ]);
        }
        writeln!(self.writer, "{table}")?;
        Ok(())
    }

    fn write_ranking(&mut self, ranking: &[RankingEntry]) -> Result<()> {
        writeln!(self.writer, "{}", self.painter.header("RISK LEADERBOARD"))?;
        if ranking.is_empty() {
            writeln!(self.writer, "No threat data available.")?;
            return Ok(());
        }

        let mut table = self.table();
        table.set_header(vec![
            "#",
            "Employee",
            "Department",
            "Total",
            "High",
            "Medium",
            "Low",
            "High %",
        ]);
        for (position, entry) in ranking.iter().enumerate() {
            table.add_row(vec![
                Cell::new(position + 1),
                self.tier_cell(entry.headline_tier(), &entry.employee),
                Cell::new(&entry.department),
                Cell::new(entry.total),
                Cell::new(entry.high),
                Cell::new(entry.medium),
                Cell::new(entry.low),
                Cell::new(format!("{:.0}%", entry.share(RiskTier::High))),
            ]);
        }
        writeln!(self.writer, "{table}")?;
        Ok(())
    }

    fn write_overview(&mut self, overview: &ThreatOverview) -> Result<()> {
        writeln!(self.writer, "{}", self.painter.header("SYSTEM OVERVIEW"))?;
        writeln!(self.writer, "Alerts recorded:    {}", overview.total_alerts)?;
        writeln!(
            self.writer,
            "Anomalies detected: {}",
            self.painter.tier(RiskTier::Medium, &overview.anomalies.to_string())
        )?;
        writeln!(
            self.writer,
            "Critical breaches:  {}",
            self.painter.tier(RiskTier::High, &overview.critical.to_string())
        )?;
        Ok(())
    }

    fn write_departments(&mut self, departments: &[String]) -> Result<()> {
        writeln!(self.writer, "{}", self.painter.header("DEPARTMENTS"))?;
        for department in departments {
            writeln!(self.writer, "  {department}")?;
        }
        Ok(())
    }

    fn write_config_created(&mut self, path: &Path) -> Result<()> {
        writeln!(self.writer, "Created {} configuration file", path.display())?;
        Ok(())
    }
}
