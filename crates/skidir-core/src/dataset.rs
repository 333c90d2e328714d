use std::path::Path;

use crate::ConfigError;

/// Read a local resort dataset file into a raw payload.
///
/// The file is parsed as YAML, which also accepts plain JSON documents. The
/// payload is left untyped; callers run it through the normalizer.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read or parsed.
pub fn load_dataset(path: &Path) -> Result<serde_json::Value, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::DatasetFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let payload: serde_json::Value = serde_yaml::from_str(&content)?;
    Ok(payload)
}
