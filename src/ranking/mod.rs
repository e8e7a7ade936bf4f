//! Per-employee risk rankings folded from the alert history.
//!
//! Rankings are never stored. Every call folds the full record slice it is
//! handed, so a ranking always reflects exactly that snapshot.

pub mod overview;

pub use overview::ThreatOverview;

use crate::core::{AlertRecord, RiskTier};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Risk tally for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub employee: String,
    /// Department of the last record folded for this employee
    pub department: String,
    pub total: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl RankingEntry {
    fn empty(employee: &str) -> Self {
        Self {
            employee: employee.to_string(),
            department: String::new(),
            total: 0,
            high: 0,
            medium: 0,
            low: 0,
        }
    }

    fn fold(&mut self, record: &AlertRecord) {
        self.department.clone_from(&record.department);
        match record.risk {
            RiskTier::High => self.high += 1,
            RiskTier::Medium => self.medium += 1,
            RiskTier::Low => self.low += 1,
        }
        self.total += 1;
    }

    pub fn count(&self, tier: RiskTier) -> usize {
        match tier {
            RiskTier::High => self.high,
            RiskTier::Medium => self.medium,
            RiskTier::Low => self.low,
        }
    }

    /// Percentage of this employee's alerts that fall in `tier`.
    pub fn share(&self, tier: RiskTier) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(tier) as f64 / self.total as f64 * 100.0
    }

    /// Most severe tier with at least one alert.
    pub fn headline_tier(&self) -> RiskTier {
        RiskTier::SEVERITY_ORDER
            .into_iter()
            .find(|tier| self.count(*tier) > 0)
            .unwrap_or(RiskTier::Low)
    }
}

/// High count first, then total volume. Equal entries keep their relative
/// order, which `rank` sets to first appearance in the input.
fn ranking_order(a: &RankingEntry, b: &RankingEntry) -> Ordering {
    b.high.cmp(&a.high).then_with(|| b.total.cmp(&a.total))
}

/// Group records by exact employee name and order the groups by severity.
///
/// Records should be supplied oldest first: the department shown for an
/// employee is taken from the last of their records in `records`.
pub fn rank(records: &[AlertRecord]) -> Vec<RankingEntry> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut entries: Vec<RankingEntry> = Vec::new();

    for record in records {
        let slot = *slots.entry(record.employee.as_str()).or_insert_with(|| {
            entries.push(RankingEntry::empty(&record.employee));
            entries.len() - 1
        });
        entries[slot].fold(record);
    }

    // sort_by is stable, so ties stay in first-encounter order
    entries.sort_by(ranking_order);

    log::debug!(
        "Ranked {} employees from {} alert records",
        entries.len(),
        records.len()
    );
    entries
}
