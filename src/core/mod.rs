pub mod errors;

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use errors::{Error, Result, ResultExt};

/// Display format for alert dates, e.g. `Oct 18, 2026`.
pub const ALERT_DATE_FORMAT: &str = "%b %-d, %Y";

/// Risk tier assigned to a snippet by the classifier.
///
/// Ordered `Low < Medium < High` so tier precedence can be expressed with
/// plain comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// All tiers from most to least severe
    pub const SEVERITY_ORDER: [RiskTier; 3] = [RiskTier::High, RiskTier::Medium, RiskTier::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Medium => "Medium",
            RiskTier::High => "High",
        }
    }

    /// Anything above Low counts as an anomaly on the overview.
    pub fn is_anomaly(&self) -> bool {
        *self != RiskTier::Low
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskTier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Low" => Ok(RiskTier::Low),
            "Medium" => Ok(RiskTier::Medium),
            "High" => Ok(RiskTier::High),
            other => Err(Error::UnknownRiskTier(other.to_string())),
        }
    }
}

/// Opaque identifier assigned to a record by the alert store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlertId(u64);

impl AlertId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for AlertId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AlertId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<u64>()
            .map(AlertId)
            .map_err(|_| Error::Validation(format!("'{s}' is not a valid alert id")))
    }
}

/// Inbound submission: who said what, before classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub employee: String,
    pub department: String,
    pub snippet: String,
}

impl Submission {
    pub fn new(
        employee: impl Into<String>,
        department: impl Into<String>,
        snippet: impl Into<String>,
    ) -> Self {
        Self {
            employee: employee.into(),
            department: department.into(),
            snippet: snippet.into(),
        }
    }
}

/// A classified alert that has not yet been given an id by a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAlert {
    pub employee: String,
    pub department: String,
    pub snippet: String,
    pub risk: RiskTier,
    pub date: String,
}

impl NewAlert {
    pub fn into_record(self, id: AlertId) -> AlertRecord {
        AlertRecord {
            id,
            employee: self.employee,
            department: self.department,
            snippet: self.snippet,
            risk: self.risk,
            date: self.date,
        }
    }
}

/// A persisted, classified alert. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertRecord {
    pub id: AlertId,
    pub employee: String,
    pub department: String,
    pub snippet: String,
    pub risk: RiskTier,
    pub date: String,
}

/// Format a timestamp the way alert dates are displayed.
pub fn format_alert_date<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    at.format(ALERT_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone, Utc};

    #[test]
    fn tiers_order_by_severity() {
        assert!(RiskTier::High > RiskTier::Medium);
        assert!(RiskTier::Medium > RiskTier::Low);
        assert_eq!(RiskTier::SEVERITY_ORDER[0], RiskTier::High);
    }

    #[test]
    fn unknown_tier_is_rejected() {
        let err = "Critical".parse::<RiskTier>().unwrap_err();
        assert!(matches!(err, Error::UnknownRiskTier(ref t) if t == "Critical"));
        assert!("high".parse::<RiskTier>().is_err());
        assert_eq!("Medium".parse::<RiskTier>().unwrap(), RiskTier::Medium);
    }

    #[test]
    fn unknown_tier_fails_deserialization() {
        let json = r#"{"id":1,"employee":"A","department":"HR","snippet":"x","risk":"Severe","date":"Jan 1, 2026"}"#;
        assert!(serde_json::from_str::<AlertRecord>(json).is_err());
    }

    #[test]
    fn alert_id_parses_and_rejects_garbage() {
        assert_eq!("17".parse::<AlertId>().unwrap(), AlertId::new(17));
        assert!("abc".parse::<AlertId>().is_err());
    }

    #[test]
    fn dates_use_short_month_day_year() {
        let at = Utc.with_ymd_and_hms(2026, 3, 7, 23, 30, 0).unwrap();
        assert_eq!(format_alert_date(&at), "Mar 7, 2026");

        // Local offset decides the calendar day
        let east = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(format_alert_date(&at.with_timezone(&east)), "Mar 8, 2026");
    }

    #[test]
    fn record_serializes_with_plain_id() {
        let record = NewAlert {
            employee: "B. Wayne".into(),
            department: "Executive Board".into(),
            snippet: "hello".into(),
            risk: RiskTier::Low,
            date: "Oct 18, 2026".into(),
        }
        .into_record(AlertId::new(3));

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["id"], 3);
        assert_eq!(value["risk"], "Low");
    }
}
