use std::path::Path;

use rostername_core::config::RosternameConfig;
use tracing::info;

/// Run the `init` command: write a default configuration file.
pub fn run(path: &str, force: bool) -> anyhow::Result<()> {
    let target = Path::new(path);
    if target.exists() && !force {
        anyhow::bail!("{path} already exists; pass --force to overwrite it");
    }

    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
            info!("Created directory: {}", parent.display());
        }
    }

    let config = RosternameConfig::generate_default();
    std::fs::write(target, config.to_toml()?)?;
    info!("Wrote default configuration to {}", path);
    println!("Configuration written to {path}");

    Ok(())
}
