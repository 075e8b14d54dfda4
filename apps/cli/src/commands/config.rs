//! Config file management.

use basket_client::{ClientConfig, ClientError, ClientResult};
use std::path::PathBuf;

/// Writes the effective configuration (file + environment) to `path`, or to
/// the platform config file when no path is given.
pub fn init(config: &ClientConfig, path: Option<PathBuf>, force: bool) -> ClientResult<()> {
    let path = path
        .or_else(ClientConfig::default_path)
        .ok_or_else(|| ClientError::ConfigSaveFailed("No config path available".into()))?;

    if path.exists() && !force {
        return Err(ClientError::ConfigSaveFailed(format!(
            "{} already exists (pass --force to overwrite)",
            path.display()
        )));
    }

    config.save(&path)?;
    tracing::info!("Wrote {}", path.display());
    Ok(())
}

/// Reports the effective settings.
pub fn show(config: &ClientConfig) {
    tracing::info!("backend   {}", config.backend.url);
    tracing::info!("timeout   {}s", config.backend.timeout_secs);
    tracing::info!("currency  {}", config.currency());
    match config.token_path() {
        Some(path) => tracing::info!("token     {}", path.display()),
        None => tracing::info!("token     (no data directory)"),
    }
}
