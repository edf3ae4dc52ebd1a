use serde_json::Value;

use super::super::types::RemoteStartStopStatus;

/// Both fields are optional and untyped on decode; the charge point fills in
/// its own connector and a fallback id tag.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RemoteStartTransactionRequest {
    #[serde(skip_serializing_if = "Value::is_null")]
    pub connector_id: Value,
    #[serde(skip_serializing_if = "Value::is_null")]
    pub id_tag: Value,
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RemoteStartTransactionResponse {
    pub status: RemoteStartStopStatus,
}
