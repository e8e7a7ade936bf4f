use crate::config::CONFIG_FILE_NAME;
use crate::io;
use crate::io::output::ReportWriter;
use anyhow::Result;
use std::path::PathBuf;

const DEFAULT_CONFIG: &str = r#"# insider-risk configuration

# Keyword overrides. Matching is case-insensitive substring containment;
# any High keyword wins over every Medium keyword. Remove a list to fall
# back to the built-in defaults for that tier.
[keywords]
high = ["unreleased", "quit", "steal", "confidential", "ssn", "credit card", "hack", "leak"]
medium = ["download", "personal drive", "usb", "bypass", "external"]

[storage]
history_file = "alerts.json"

[output]
default_format = "terminal"

[departments]
suggested = ["Investment Banking", "Customer Service", "IT Ops", "HR", "Executive Board"]
"#;

pub fn init_config(writer: &mut dyn ReportWriter, force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(&config_path, DEFAULT_CONFIG)?;
    writer.write_config_created(&config_path)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::Classifier;
    use crate::config::parse_and_validate_config;

    #[test]
    fn default_config_matches_built_in_defaults() {
        let config = parse_and_validate_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.classifier(), Classifier::default());
        assert_eq!(config.history_file(), PathBuf::from("alerts.json"));
        assert_eq!(config.suggested_departments().len(), 5);
    }
}
