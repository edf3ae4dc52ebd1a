use super::super::types::RegistrationStatus;
use chrono::{DateTime, Utc};

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct BootNotificationResponse {
    #[serde(with = "crate::format::timestamp")]
    pub current_time: DateTime<Utc>,
    pub interval: u64,
    pub status: RegistrationStatus,
}
