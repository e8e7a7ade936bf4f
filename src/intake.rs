//! Submission flow: validate, classify, stamp, and hand off to a store.

use crate::classifier::Classifier;
use crate::core::{format_alert_date, AlertRecord, Error, NewAlert, Result, Submission};
use crate::store::AlertStore;
use chrono::{DateTime, Local, TimeZone};
use std::fmt;

/// Department labels offered to operators. Any other string is accepted.
pub const SUGGESTED_DEPARTMENTS: &[&str] = &[
    "Investment Banking",
    "Customer Service",
    "IT Ops",
    "HR",
    "Executive Board",
];

/// Department preselected when the operator does not pick one.
pub const DEFAULT_DEPARTMENT: &str = "Investment Banking";

/// Reject submissions the classifier should never see.
///
/// The employee name is the aggregation key and the snippet is the thing
/// being judged, so neither may be blank. Values are not trimmed or
/// otherwise normalized.
pub fn validate_submission(submission: &Submission) -> Result<()> {
    if submission.employee.trim().is_empty() {
        return Err(Error::Validation("employee must not be empty".to_string()));
    }
    if submission.snippet.trim().is_empty() {
        return Err(Error::Validation("snippet must not be empty".to_string()));
    }
    Ok(())
}

/// Turns submissions into classified alerts.
#[derive(Debug, Clone, Default)]
pub struct AlertIntake {
    classifier: Classifier,
}

impl AlertIntake {
    pub fn new(classifier: Classifier) -> Self {
        Self { classifier }
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Classify a submission and date it at `at`.
    pub fn prepare<Tz>(&self, submission: Submission, at: &DateTime<Tz>) -> Result<NewAlert>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        validate_submission(&submission)?;

        let classification = self.classifier.explain(&submission.snippet);
        match &classification.matched_keyword {
            Some(keyword) => log::debug!(
                "Classified snippet from '{}' as {} (matched '{}')",
                submission.employee,
                classification.tier,
                keyword
            ),
            None => log::debug!(
                "Classified snippet from '{}' as {} (no keyword matched)",
                submission.employee,
                classification.tier
            ),
        }

        Ok(NewAlert {
            employee: submission.employee,
            department: submission.department,
            snippet: submission.snippet,
            risk: classification.tier,
            date: format_alert_date(at),
        })
    }

    /// Classify a submission and insert it into `store`, dated now in local time.
    pub fn submit<S>(&self, store: &mut S, submission: Submission) -> Result<AlertRecord>
    where
        S: AlertStore + ?Sized,
    {
        let alert = self.prepare(submission, &Local::now())?;
        let record = store.insert(alert)?;
        log::info!(
            "Recorded {} alert {} for {}",
            record.risk,
            record.id,
            record.employee
        );
        Ok(record)
    }
}
