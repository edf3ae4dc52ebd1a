use std::{collections::HashMap, time::Duration};

use crate::v16::payloads::DEFAULT_BOOT_INTERVAL;

/// Start-up settings of the mock charge point. Every field is optional in the
/// JSON form.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct MockConfig {
    pub connector_id: usize,
    /// Interval returned in `BootNotification.conf`, in seconds.
    pub boot_interval: u64,
    /// Pause between the frames of a multi-frame reply.
    pub burst_delay_ms: u64,
    /// Period of the background `MeterValues` sender; `0` disables it.
    pub meter_interval_secs: u64,
    /// Initial values for the pre-seeded configuration keys.
    pub ocpp_configs: HashMap<String, String>,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            connector_id: 1,
            boot_interval: DEFAULT_BOOT_INTERVAL,
            burst_delay_ms: 100,
            meter_interval_secs: 0,
            ocpp_configs: HashMap::new(),
        }
    }
}

impl MockConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
    pub fn burst_delay(&self) -> Duration {
        Duration::from_millis(self.burst_delay_ms)
    }
    pub fn meter_interval(&self) -> Option<Duration> {
        (self.meter_interval_secs > 0).then(|| Duration::from_secs(self.meter_interval_secs))
    }
}
