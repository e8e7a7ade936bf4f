//! Alert storage boundary.
//!
//! The engine only needs three things from storage: append a classified
//! alert, delete one by id, and hand back the current records in insertion
//! order. `MemoryAlertStore` is the in-process implementation used by the CLI
//! and tests.

use crate::core::{AlertId, AlertRecord, Error, NewAlert, Result};
use std::collections::HashSet;

pub trait AlertStore {
    /// Persist a new alert and return it with its assigned id.
    fn insert(&mut self, alert: NewAlert) -> Result<AlertRecord>;

    /// Delete a single alert ("isolate" it) and return what was removed.
    fn isolate(&mut self, id: AlertId) -> Result<AlertRecord>;

    /// Current records, oldest first.
    fn records(&self) -> Vec<AlertRecord>;

    /// Current records, newest first, for display.
    fn newest_first(&self) -> Vec<AlertRecord> {
        let mut records = self.records();
        records.reverse();
        records
    }
}

#[derive(Debug, Clone)]
pub struct MemoryAlertStore {
    records: Vec<AlertRecord>,
    next_id: u64,
}

impl Default for MemoryAlertStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryAlertStore {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Rebuild a store from previously saved records.
    ///
    /// `next_id` is raised past every existing id so ids are never handed out
    /// twice. Duplicate ids are rejected.
    pub fn from_records(records: Vec<AlertRecord>, next_id: u64) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                return Err(Error::Validation(format!(
                    "duplicate alert id {} in history",
                    record.id
                )));
            }
        }

        let past_max = records
            .iter()
            .map(|r| r.id.get().saturating_add(1))
            .max()
            .unwrap_or(1);

        Ok(Self {
            records,
            next_id: next_id.max(past_max).max(1),
        })
    }

    /// The id the next insert will receive.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn as_slice(&self) -> &[AlertRecord] {
        &self.records
    }
}

impl AlertStore for MemoryAlertStore {
    fn insert(&mut self, alert: NewAlert) -> Result<AlertRecord> {
        let id = AlertId::new(self.next_id);
        self.next_id = self
            .next_id
            .checked_add(1)
            .ok_or_else(|| Error::Validation("alert id space exhausted".to_string()))?;

        let record = alert.into_record(id);
        self.records.push(record.clone());
        Ok(record)
    }

    fn isolate(&mut self, id: AlertId) -> Result<AlertRecord> {
        let position = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or(Error::AlertNotFound(id))?;
        let removed = self.records.remove(position);
        log::info!("Isolated alert {} ({})", removed.id, removed.employee);
        Ok(removed)
    }

    fn records(&self) -> Vec<AlertRecord> {
        self.records.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RiskTier;
    use crate::ranking::rank;

    fn new_alert(employee: &str, risk: RiskTier) -> NewAlert {
        NewAlert {
            employee: employee.into(),
            department: "HR".into(),
            snippet: "note".into(),
            risk,
            date: "Oct 18, 2026".into(),
        }
    }

    #[test]
    fn ids_increase_and_are_not_reused() {
        let mut store = MemoryAlertStore::new();
        let a = store.insert(new_alert("A", RiskTier::Low)).unwrap();
        let b = store.insert(new_alert("B", RiskTier::Low)).unwrap();
        store.isolate(b.id).unwrap();
        let c = store.insert(new_alert("C", RiskTier::Low)).unwrap();

        assert_eq!(a.id.get(), 1);
        assert_eq!(b.id.get(), 2);
        assert_eq!(c.id.get(), 3);
    }

    #[test]
    fn newest_first_reverses_insertion_order() {
        let mut store = MemoryAlertStore::new();
        store.insert(new_alert("A", RiskTier::Low)).unwrap();
        store.insert(new_alert("B", RiskTier::Low)).unwrap();
        let names: Vec<_> = store
            .newest_first()
            .into_iter()
            .map(|r| r.employee)
            .collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn isolating_unknown_id_fails() {
        let mut store = MemoryAlertStore::new();
        let err = store.isolate(AlertId::new(9)).unwrap_err();
        assert!(matches!(err, Error::AlertNotFound(id) if id.get() == 9));
    }

    #[test]
    fn isolated_records_leave_the_ranking() {
        let mut store = MemoryAlertStore::new();
        let high = store.insert(new_alert("A", RiskTier::High)).unwrap();
        store.insert(new_alert("B", RiskTier::Low)).unwrap();
        assert_eq!(rank(store.as_slice())[0].employee, "A");

        store.isolate(high.id).unwrap();
        let ranking = rank(store.as_slice());
        assert_eq!(ranking.len(), 1);
        assert_eq!(ranking[0].employee, "B");
    }

    #[test]
    fn from_records_rejects_duplicate_ids() {
        let record = new_alert("A", RiskTier::Low).into_record(AlertId::new(4));
        let result = MemoryAlertStore::from_records(vec![record.clone(), record], 1);
        assert!(result.is_err());
    }

    #[test]
    fn from_records_moves_next_id_past_existing() {
        let record = new_alert("A", RiskTier::Low).into_record(AlertId::new(4));
        let store = MemoryAlertStore::from_records(vec![record], 2).unwrap();
        assert_eq!(store.next_id(), 5);

        let store = MemoryAlertStore::from_records(Vec::new(), 10).unwrap();
        assert_eq!(store.next_id(), 10);
    }
}
