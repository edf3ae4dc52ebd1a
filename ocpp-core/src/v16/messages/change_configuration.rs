use serde_json::Value;

use super::super::types::ConfigurationStatus;

/// Fields are kept as sent. A key that is not a string names no known key.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct ChangeConfigurationRequest {
    pub key: Value,
    pub value: Value,
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug)]
pub struct ChangeConfigurationResponse {
    pub status: ConfigurationStatus,
}
