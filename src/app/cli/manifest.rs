//! Manifest command implementation.

use crate::app::ExtensionManifest;
use crate::domain::AppError;

pub fn run_manifest() -> Result<(), AppError> {
    let manifest = ExtensionManifest::current();
    let json = serde_json::to_string_pretty(&manifest)
        .map_err(|e| AppError::config_error(format!("Failed to serialize manifest: {}", e)))?;
    println!("{json}");
    Ok(())
}
