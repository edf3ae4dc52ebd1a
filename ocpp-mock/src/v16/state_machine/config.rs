use std::collections::HashMap;

use rocpp_core::v16::types::{ConfigurationStatus, KeyValue};

#[derive(Clone, Debug, PartialEq)]
pub struct OcppConfig {
    pub key: String,
    pub value: String,
    pub readonly: bool,
}

impl OcppConfig {
    pub fn new(key: &str, value: &str) -> Self {
        Self {
            key: key.to_string(),
            value: value.to_string(),
            readonly: true,
        }
    }
    pub fn write(mut self) -> Self {
        self.readonly = false;
        self
    }
    fn key_value(&self) -> KeyValue {
        KeyValue {
            key: self.key.clone(),
            readonly: self.readonly,
            value: Some(self.value.clone()),
        }
    }
}

/// Configuration keys known to the charge point. The key set is fixed at
/// construction, only values of writable keys change afterwards.
#[derive(Clone, Debug)]
pub struct OcppConfigs {
    entries: Vec<OcppConfig>,
}

impl Default for OcppConfigs {
    fn default() -> Self {
        Self::new()
    }
}

impl OcppConfigs {
    pub fn new() -> Self {
        Self {
            entries: vec![
                OcppConfig::new("HeartbeatInterval", "60").write(),
                OcppConfig::new("ConnectionTimeOut", "1200").write(),
                OcppConfig::new("SupportedFeatureProfiles", "Core,RemoteTrigger,Configuration"),
                OcppConfig::new("ChargeProfileMaxStackLevel", "10"),
                OcppConfig::new("AllowOfflineTxForUnknownId", "false").write(),
            ],
        }
    }

    /// Seeds the default keys, then applies start-up values. Overrides may
    /// touch readonly keys but never add new ones.
    pub fn build(overrides: &HashMap<String, String>) -> Self {
        let mut configs = Self::new();
        for (key, value) in overrides {
            match configs.entries.iter_mut().find(|t| &t.key == key) {
                Some(entry) => entry.value = value.clone(),
                None => log::warn!("ignoring unknown configuration key {}", key),
            }
        }
        configs
    }

    pub fn get(&self, key: &str) -> Option<&OcppConfig> {
        self.entries.iter().find(|t| t.key == key)
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        self.get(key).map(|t| t.value.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn change(&mut self, key: &str, value: String) -> ConfigurationStatus {
        match self.entries.iter_mut().find(|t| t.key == key) {
            Some(entry) if entry.readonly => ConfigurationStatus::Rejected,
            Some(entry) => {
                log::info!("configuration {} changed: {} -> {}", key, entry.value, value);
                entry.value = value;
                ConfigurationStatus::Accepted
            }
            None => ConfigurationStatus::NotSupported,
        }
    }

    /// Splits the requested keys into known entries and unknown names.
    /// `None` lists every entry in seed order.
    pub fn list(&self, keys: Option<Vec<String>>) -> (Vec<KeyValue>, Vec<String>) {
        let Some(keys) = keys else {
            return (self.entries.iter().map(OcppConfig::key_value).collect(), Vec::new());
        };
        let mut configuration_key = Vec::new();
        let mut unknown_key = Vec::new();
        for key in keys {
            match self.get(&key) {
                Some(entry) => configuration_key.push(entry.key_value()),
                None => unknown_key.push(key),
            }
        }
        (configuration_key, unknown_key)
    }
}
