use serde_json::{Map, Value};

use crate::{config::REQUIRED_CONFIG_KEYS, error::ConfigError};

/// Checks that `config` carries every key in [`REQUIRED_CONFIG_KEYS`].
pub fn validate_config(config: &Map<String, Value>) -> Result<bool, ConfigError> {
    let missing: Vec<&'static str> = REQUIRED_CONFIG_KEYS
        .into_iter()
        .filter(|key| !config.contains_key(*key))
        .collect();

    if !missing.is_empty() {
        return Err(ConfigError::MissingRequiredKeys { missing });
    }
    Ok(true)
}
