//! Payload shapes for every action the mock answers, and for the requests it
//! synthesizes on its own. All functions are pure: the caller supplies the
//! status and the current time.

use chrono::{DateTime, Utc};
use rocpp_core::v16::{
    messages::{
        authorize::AuthorizeResponse,
        boot_notification::BootNotificationResponse,
        change_configuration::ChangeConfigurationResponse,
        clear_cache::ClearCacheResponse,
        data_transfer::DataTransferResponse,
        get_configuration::GetConfigurationResponse,
        heart_beat::HeartbeatResponse,
        meter_values::{MeterValuesRequest, MeterValuesResponse},
        remote_start_transaction::RemoteStartTransactionResponse,
        remote_stop_transaction::RemoteStopTransactionResponse,
        start_transaction::{StartTransactionRequest, StartTransactionResponse},
        status_notification::{StatusNotificationRequest, StatusNotificationResponse},
        stop_transaction::{StopTransactionRequest, StopTransactionResponse},
    },
    types::{
        AuthorizationStatus, ChargePointErrorCode, ChargePointStatus, ClearCacheStatus,
        ConfigurationStatus, DataTransferStatus, IdTagInfo, KeyValue, Measurand, MeterValue,
        ReadingContext, Reason, RegistrationStatus, RemoteStartStopStatus, SampledValue,
        UnitOfMeasure,
    },
};

pub const DEFAULT_BOOT_INTERVAL: u64 = 200;

pub fn boot_notification(
    status: RegistrationStatus,
    current_time: DateTime<Utc>,
    interval: u64,
) -> BootNotificationResponse {
    BootNotificationResponse {
        current_time,
        interval,
        status,
    }
}

pub fn heartbeat(current_time: DateTime<Utc>) -> HeartbeatResponse {
    HeartbeatResponse { current_time }
}

pub fn authorize(status: AuthorizationStatus) -> AuthorizeResponse {
    AuthorizeResponse {
        id_tag_info: IdTagInfo::with_status(status),
    }
}

pub fn status_notification() -> StatusNotificationResponse {
    StatusNotificationResponse {}
}

pub fn start_transaction(transaction_id: i32, status: AuthorizationStatus) -> StartTransactionResponse {
    StartTransactionResponse {
        id_tag_info: IdTagInfo::with_status(status),
        transaction_id,
    }
}

pub fn meter_values() -> MeterValuesResponse {
    MeterValuesResponse {}
}

pub fn stop_transaction(status: AuthorizationStatus) -> StopTransactionResponse {
    StopTransactionResponse {
        id_tag_info: Some(IdTagInfo::with_status(status)),
    }
}

pub fn data_transfer(status: DataTransferStatus) -> DataTransferResponse {
    DataTransferResponse { status, data: None }
}

pub fn clear_cache(status: ClearCacheStatus) -> ClearCacheResponse {
    ClearCacheResponse { status }
}

pub fn change_configuration(status: ConfigurationStatus) -> ChangeConfigurationResponse {
    ChangeConfigurationResponse { status }
}

/// Both lists are always present, possibly empty.
pub fn get_configuration(
    configuration_key: Vec<KeyValue>,
    unknown_key: Vec<String>,
) -> GetConfigurationResponse {
    GetConfigurationResponse {
        configuration_key: Some(configuration_key),
        unknown_key: Some(unknown_key),
    }
}

pub fn remote_start_transaction(status: RemoteStartStopStatus) -> RemoteStartTransactionResponse {
    RemoteStartTransactionResponse { status }
}

pub fn remote_stop_transaction(status: RemoteStartStopStatus) -> RemoteStopTransactionResponse {
    RemoteStopTransactionResponse { status }
}

pub fn status_notification_request(
    connector_id: usize,
    status: ChargePointStatus,
) -> StatusNotificationRequest {
    StatusNotificationRequest {
        connector_id,
        error_code: ChargePointErrorCode::NoError,
        info: None,
        status,
        timestamp: None,
        vendor_id: None,
        vendor_error_code: None,
    }
}

pub fn start_transaction_request(
    connector_id: usize,
    id_tag: String,
    meter_start: u64,
    timestamp: DateTime<Utc>,
) -> StartTransactionRequest {
    StartTransactionRequest {
        connector_id,
        id_tag,
        meter_start,
        reservation_id: None,
        timestamp,
    }
}

pub fn stop_transaction_request(
    transaction_id: Option<i64>,
    meter_stop: u64,
    timestamp: DateTime<Utc>,
    reason: Reason,
) -> StopTransactionRequest {
    StopTransactionRequest {
        id_tag: None,
        meter_stop,
        timestamp,
        transaction_id,
        reason: Some(reason),
        transaction_data: None,
    }
}

pub fn meter_values_request(
    connector_id: usize,
    transaction_id: Option<i64>,
    energy_wh: u64,
    timestamp: DateTime<Utc>,
) -> MeterValuesRequest {
    MeterValuesRequest {
        connector_id,
        transaction_id,
        meter_value: vec![MeterValue {
            timestamp,
            sampled_value: vec![SampledValue {
                value: energy_wh.to_string(),
                context: Some(ReadingContext::SamplePeriodic),
                measurand: Some(Measurand::EnergyActiveImportRegister),
                unit: Some(UnitOfMeasure::Wh),
            }],
        }],
    }
}
