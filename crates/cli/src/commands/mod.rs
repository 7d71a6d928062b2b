pub mod batch;
pub mod generate;
pub mod init;
pub mod rules;

use std::collections::HashSet;
use std::path::Path;

use rostername_core::config::RosternameConfig;
use rostername_core::existing::load_existing_usernames;
use tracing::info;

/// Load and validate the configuration, falling back to defaults when the file is absent.
pub fn load_config(config_path: &str) -> anyhow::Result<RosternameConfig> {
    let config = RosternameConfig::load_or_default(Path::new(config_path))?;
    config.validate()?;
    Ok(config)
}

/// Apply command-line overrides on top of the configured length range.
pub fn resolve_range(
    config: &RosternameConfig,
    min: Option<usize>,
    max: Option<usize>,
) -> (usize, usize) {
    (
        min.unwrap_or(config.generator.min_length),
        max.unwrap_or(config.generator.max_length),
    )
}

/// Read the taken-username list, or start empty when none is given.
pub fn load_existing(path: Option<&str>) -> anyhow::Result<HashSet<String>> {
    match path {
        Some(p) => {
            let existing = load_existing_usernames(Path::new(p))?;
            info!("Loaded {} existing usernames from {}", existing.len(), p);
            Ok(existing)
        }
        None => Ok(HashSet::new()),
    }
}
