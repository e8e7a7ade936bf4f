//! JSON snapshot of the alert store, so the CLI can keep history between runs.

use crate::core::{AlertRecord, Error, Result};
use crate::store::{AlertStore, MemoryAlertStore};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// On-disk layout: the records oldest first plus the next id to hand out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistorySnapshot {
    #[serde(default)]
    pub next_id: u64,
    pub alerts: Vec<AlertRecord>,
}

impl From<&MemoryAlertStore> for HistorySnapshot {
    fn from(store: &MemoryAlertStore) -> Self {
        Self {
            next_id: store.next_id(),
            alerts: store.records(),
        }
    }
}

/// Load the store saved at `path`. A missing file is an empty history.
pub fn load_history(path: &Path) -> Result<MemoryAlertStore> {
    if !path.exists() {
        log::debug!(
            "No alert history at {}, starting empty",
            path.display()
        );
        return Ok(MemoryAlertStore::new());
    }

    let contents = fs::read_to_string(path)?;
    let snapshot: HistorySnapshot =
        serde_json::from_str(&contents).map_err(|e| Error::history(path, e.to_string()))?;

    let count = snapshot.alerts.len();
    let store = MemoryAlertStore::from_records(snapshot.alerts, snapshot.next_id)
        .map_err(|e| Error::history(path, e.to_string()))?;
    log::debug!("Loaded {} alerts from {}", count, path.display());
    Ok(store)
}

/// Write the store to `path`, replacing the previous snapshot.
///
/// The snapshot is written to a sibling temp file and renamed into place so a
/// failed write never leaves a truncated history behind.
pub fn save_history(path: &Path, store: &MemoryAlertStore) -> Result<()> {
    super::ensure_parent_dir(path)?;

    let json = serde_json::to_string_pretty(&HistorySnapshot::from(store))?;
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = Path::new(&tmp);

    fs::write(tmp, json)?;
    fs::rename(tmp, path)?;
    log::debug!("Saved {} alerts to {}", store.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{NewAlert, RiskTier};
    use tempfile::TempDir;

    fn new_alert(employee: &str) -> NewAlert {
        NewAlert {
            employee: employee.into(),
            department: "HR".into(),
            snippet: "external share".into(),
            risk: RiskTier::Medium,
            date: "Oct 18, 2026".into(),
        }
    }

    #[test]
    fn missing_file_is_empty_history() {
        let dir = TempDir::new().unwrap();
        let store = load_history(&dir.path().join("alerts.json")).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn saved_history_keeps_order_and_next_id() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("alerts.json");

        let mut store = MemoryAlertStore::new();
        store.insert(new_alert("A")).unwrap();
        let b = store.insert(new_alert("B")).unwrap();
        store.isolate(b.id).unwrap();
        save_history(&path, &store).unwrap();

        let mut loaded = load_history(&path).unwrap();
        assert_eq!(loaded.records(), store.records());
        let c = loaded.insert(new_alert("C")).unwrap();
        assert_eq!(c.id.get(), 3);
    }

    #[test]
    fn unknown_tier_in_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("alerts.json");
        fs::write(
            &path,
            r#"{"next_id":2,"alerts":[{"id":1,"employee":"A","department":"HR","snippet":"x","risk":"Critical","date":"Oct 18, 2026"}]}"#,
        )
        .unwrap();

        let err = load_history(&path).unwrap_err();
        assert!(matches!(err, Error::History { .. }));
    }
}
