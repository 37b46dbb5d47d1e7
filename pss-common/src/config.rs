//! Configuration loading and data directory resolution

use std::path::PathBuf;

use crate::{Error, Result};

/// Environment variable naming the data directory
pub const DATA_DIR_ENV: &str = "PSS_DATA_DIR";

/// Data directory resolution, priority order:
/// 1. Command-line argument (highest priority)
/// 2. `PSS_DATA_DIR` environment variable
/// 3. `data_dir` key in the TOML config file
/// 4. Compiled default `./data` (fallback)
pub fn resolve_data_dir(cli_arg: Option<&str>) -> PathBuf {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return PathBuf::from(path);
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(DATA_DIR_ENV) {
        return PathBuf::from(path);
    }

    // Priority 3: TOML config file
    if let Ok(config_path) = config_file_path() {
        if let Ok(toml_content) = std::fs::read_to_string(&config_path) {
            if let Ok(config) = toml::from_str::<toml::Value>(&toml_content) {
                if let Some(data_dir) = config.get("data_dir").and_then(|v| v.as_str()) {
                    return PathBuf::from(data_dir);
                }
            }
        }
    }

    // Priority 4: Compiled default
    PathBuf::from("data")
}

/// Config file path for the platform: `<config dir>/pss-site/config.toml`
fn config_file_path() -> Result<PathBuf> {
    let path = dirs::config_dir()
        .map(|d| d.join("pss-site").join("config.toml"))
        .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;

    if path.exists() {
        Ok(path)
    } else {
        Err(Error::Config(format!("Config file not found: {:?}", path)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_arg_wins() {
        let dir = resolve_data_dir(Some("/tmp/somewhere"));
        assert_eq!(dir, PathBuf::from("/tmp/somewhere"));
    }

    #[test]
    fn test_default_fallback() {
        // Env var interference is possible here only if the test runner
        // itself sets PSS_DATA_DIR, which the suite never does.
        if std::env::var(DATA_DIR_ENV).is_err() && config_file_path().is_err() {
            assert_eq!(resolve_data_dir(None), PathBuf::from("data"));
        }
    }
}
