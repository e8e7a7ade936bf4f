use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::InsiderRiskConfig;
use crate::core::{Error, Result, ResultExt};

pub const CONFIG_FILE_NAME: &str = ".insider-risk.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse config from a TOML string. Keyword sets are validated while
/// deserializing, so a bad keyword fails the whole parse.
pub fn parse_and_validate_config(contents: &str) -> Result<InsiderRiskConfig> {
    let config = toml::from_str::<InsiderRiskConfig>(contents)?;

    if let Some(departments) = &config.departments {
        if departments.suggested.iter().any(|d| d.trim().is_empty()) {
            return Err(Error::Configuration(
                "suggested departments may not be empty".to_string(),
            ));
        }
    }

    Ok(config)
}

/// Load an explicitly named config file. Any failure is an error.
pub fn load_config_from(path: &Path) -> Result<InsiderRiskConfig> {
    let contents = read_config_file(path)
        .map_err(Error::from)
        .context(format!("Failed to read {}", path.display()))?;
    let config =
        parse_and_validate_config(&contents).context(format!("Invalid {}", path.display()))?;
    log::debug!("Loaded config from {}", path.display());
    Ok(anchor(config, path))
}

fn anchor(config: InsiderRiskConfig, path: &Path) -> InsiderRiskConfig {
    match path.parent() {
        Some(dir) => config.with_base_dir(dir),
        None => config,
    }
}

fn try_load_config_from_path(config_path: &Path) -> Option<InsiderRiskConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(anchor(config, config_path))
        }
        Err(e) => {
            log::warn!(
                "Ignoring {}: {}. Using defaults.",
                config_path.display(),
                e
            );
            None
        }
    }
}

fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// `start` and its parents, nearest first, at most `max_depth` of them.
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Find the nearest `.insider-risk.toml` above the current directory.
pub fn load_config() -> InsiderRiskConfig {
    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return InsiderRiskConfig::default();
        }
    };

    directory_ancestors(current, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            InsiderRiskConfig::default()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn ancestors_are_nearest_first_and_bounded() {
        let dirs: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c"), 2).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a/b/c"), PathBuf::from("/a/b")]);
    }

    #[test]
    fn ancestors_stop_at_root() {
        let dirs: Vec<_> = directory_ancestors(PathBuf::from("/a"), 10).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a"), PathBuf::from("/")]);
    }

    #[test]
    fn explicit_path_reports_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = load_config_from(&dir.path().join("missing.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn explicit_path_reports_bad_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[keywords\nhigh = 1").unwrap();
        assert!(load_config_from(&path).is_err());
    }

    #[test]
    fn discovery_ignores_unparseable_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "not = [valid").unwrap();
        assert!(try_load_config_from_path(&path).is_none());
    }

    #[test]
    fn discovered_config_resolves_history_beside_it() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[storage]\nhistory_file = \"alerts.json\"\n").unwrap();

        let config = try_load_config_from_path(&path).unwrap();
        assert_eq!(config.history_file(), dir.path().join("alerts.json"));
    }

    #[test]
    fn explicit_config_resolves_history_beside_it() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "[storage]\nhistory_file = \"data/h.json\"\n").unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.history_file(), dir.path().join("data").join("h.json"));
    }

    #[test]
    fn blank_department_is_rejected() {
        let result = parse_and_validate_config("[departments]\nsuggested = [\"HR\", \" \"]\n");
        assert!(result.is_err());
    }
}
