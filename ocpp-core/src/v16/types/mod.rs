mod authorization_status;
mod charge_point_error_code;
mod charge_point_status;
mod clear_cache_status;
mod configuration_status;
mod data_transfer_status;
mod id_tag_info;
mod key_value;
mod measurand;
mod meter_value;
mod reading_context;
mod reason;
mod registration_status;
mod remote_start_stop_status;
mod sampled_value;
mod unit_of_measure;

pub use {
    authorization_status::AuthorizationStatus, charge_point_error_code::ChargePointErrorCode,
    charge_point_status::ChargePointStatus, clear_cache_status::ClearCacheStatus,
    configuration_status::ConfigurationStatus, data_transfer_status::DataTransferStatus,
    id_tag_info::IdTagInfo, key_value::KeyValue, measurand::Measurand, meter_value::MeterValue,
    reading_context::ReadingContext, reason::Reason, registration_status::RegistrationStatus,
    remote_start_stop_status::RemoteStartStopStatus, sampled_value::SampledValue,
    unit_of_measure::UnitOfMeasure,
};
