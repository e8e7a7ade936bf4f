use crate::core::{AlertRecord, RiskTier};
use serde::{Deserialize, Serialize};

/// Headline counts across the whole alert history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreatOverview {
    pub total_alerts: usize,
    /// Alerts above Low
    pub anomalies: usize,
    /// High alerts
    pub critical: usize,
}

impl ThreatOverview {
    pub fn from_records(records: &[AlertRecord]) -> Self {
        records
            .iter()
            .fold(ThreatOverview::default(), |mut overview, record| {
                overview.total_alerts += 1;
                if record.risk.is_anomaly() {
                    overview.anomalies += 1;
                }
                if record.risk == RiskTier::High {
                    overview.critical += 1;
                }
                overview
            })
    }
}
