use chrono::{DateTime, Utc};

use super::SampledValue;

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MeterValue {
    #[serde(with = "crate::format::timestamp")]
    pub timestamp: DateTime<Utc>,
    pub sampled_value: Vec<SampledValue>,
}
