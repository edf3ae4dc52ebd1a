use rocpp_core::{
    format::message::{CallResponse, Frame, Invalid, OcppMessage},
    v16::{
        protocol_error::ProtocolError,
        types::{
            AuthorizationStatus, ClearCacheStatus, DataTransferStatus, RegistrationStatus,
        },
    },
};
use serde_json::Value;

use crate::v16::{cp::core::ChargePointCore, payloads, state_machine::clock::Clock};

/// Actions the central system may invoke on the mock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IncomingAction {
    BootNotification,
    Heartbeat,
    Authorize,
    StatusNotification,
    StartTransaction,
    MeterValues,
    StopTransaction,
    DataTransfer,
    ClearCache,
    ChangeConfiguration,
    GetConfiguration,
    RemoteStartTransaction,
    RemoteStopTransaction,
}

impl IncomingAction {
    pub fn from_action(action: &str) -> Option<Self> {
        let action = match action {
            "BootNotification" => IncomingAction::BootNotification,
            "Heartbeat" => IncomingAction::Heartbeat,
            "Authorize" => IncomingAction::Authorize,
            "StatusNotification" => IncomingAction::StatusNotification,
            "StartTransaction" => IncomingAction::StartTransaction,
            "MeterValues" => IncomingAction::MeterValues,
            "StopTransaction" => IncomingAction::StopTransaction,
            "DataTransfer" => IncomingAction::DataTransfer,
            "ClearCache" => IncomingAction::ClearCache,
            "ChangeConfiguration" => IncomingAction::ChangeConfiguration,
            "GetConfiguration" => IncomingAction::GetConfiguration,
            "RemoteStartTransaction" => IncomingAction::RemoteStartTransaction,
            "RemoteStopTransaction" => IncomingAction::RemoteStopTransaction,
            _ => return None,
        };
        Some(action)
    }
}

/// Why an input line produced no output and no state change.
#[derive(Debug, Clone)]
pub enum FrameDrop {
    Empty,
    NotUtf8,
    Malformed(Invalid),
}

impl std::fmt::Display for FrameDrop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FrameDrop::Empty => write!(f, "empty line"),
            FrameDrop::NotUtf8 => write!(f, "line is not valid utf-8"),
            FrameDrop::Malformed(invalid) => {
                write!(f, "{}: {}", invalid.err_msg, invalid.message)
            }
        }
    }
}

impl std::error::Error for FrameDrop {}

impl<C: Clock> ChargePointCore<C> {
    /// Reacts to one decoded inbound frame. Calls always yield a reply first,
    /// followed by any synthesized requests; everything else yields nothing.
    pub fn got_msg(&mut self, msg: OcppMessage<ProtocolError>) -> Vec<Frame<ProtocolError>> {
        match msg {
            OcppMessage::Call(call) => self.handle(&call.action, call.payload, call.unique_id),
            OcppMessage::CallResponse(CallResponse::CallResult(res)) => {
                self.call_result_ocpp(res);
                Vec::new()
            }
            OcppMessage::CallResponse(CallResponse::CallError(err)) => {
                log::debug!(
                    "ignoring CallError {} for {}",
                    err.error_code,
                    err.unique_id
                );
                Vec::new()
            }
            OcppMessage::Invalid(invalid) => {
                log::debug!("dropping frame: {}", invalid.err_msg);
                Vec::new()
            }
        }
    }

    pub fn handle(
        &mut self,
        action: &str,
        payload: Value,
        unique_id: String,
    ) -> Vec<Frame<ProtocolError>> {
        let Some(action) = IncomingAction::from_action(action) else {
            log::warn!("action {} not supported", action);
            return Self::error(unique_id, ProtocolError::NotSupported);
        };
        match action {
            IncomingAction::BootNotification => Self::reply(
                unique_id,
                payloads::boot_notification(
                    RegistrationStatus::Accepted,
                    self.clock.now(),
                    self.boot_interval,
                ),
            ),
            IncomingAction::Heartbeat => {
                Self::reply(unique_id, payloads::heartbeat(self.clock.now()))
            }
            IncomingAction::Authorize => {
                Self::reply(unique_id, payloads::authorize(AuthorizationStatus::Accepted))
            }
            IncomingAction::StatusNotification => {
                Self::reply(unique_id, payloads::status_notification())
            }
            IncomingAction::StartTransaction => self.start_transaction_ocpp(unique_id),
            IncomingAction::MeterValues => Self::reply(unique_id, payloads::meter_values()),
            IncomingAction::StopTransaction => self.stop_transaction_ocpp(unique_id),
            IncomingAction::DataTransfer => Self::reply(
                unique_id,
                payloads::data_transfer(DataTransferStatus::Accepted),
            ),
            IncomingAction::ClearCache => {
                Self::reply(unique_id, payloads::clear_cache(ClearCacheStatus::Accepted))
            }
            IncomingAction::ChangeConfiguration => {
                self.handle_call(unique_id, payload, Self::change_configuration_ocpp)
            }
            IncomingAction::GetConfiguration => {
                self.handle_call(unique_id, payload, Self::get_configuration_ocpp)
            }
            IncomingAction::RemoteStartTransaction => {
                self.handle_call(unique_id, payload, Self::remote_start_transaction_ocpp)
            }
            IncomingAction::RemoteStopTransaction => {
                self.handle_call(unique_id, payload, Self::remote_stop_transaction_ocpp)
            }
        }
    }

    /// Request fields are read leniently by the handlers, so a payload only
    /// fails to decode when it is not an object. It then counts as empty.
    fn handle_call<T: serde::de::DeserializeOwned + Default>(
        &mut self,
        unique_id: String,
        payload: Value,
        handler: impl FnOnce(&mut Self, String, T) -> Vec<Frame<ProtocolError>>,
    ) -> Vec<Frame<ProtocolError>> {
        let req = serde_json::from_value::<T>(payload).unwrap_or_else(|e| {
            log::warn!("payload of {} read as empty: {}", unique_id, e);
            T::default()
        });
        handler(self, unique_id, req)
    }
}
