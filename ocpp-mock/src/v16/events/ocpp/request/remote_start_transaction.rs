use rocpp_core::{
    format::message::Frame,
    v16::{
        messages::remote_start_transaction::RemoteStartTransactionRequest,
        protocol_error::ProtocolError,
        types::{ChargePointStatus, RemoteStartStopStatus},
    },
};
use serde_json::Value;

use crate::v16::{
    cp::core::ChargePointCore,
    payloads,
    state_machine::{call::CallAction, clock::Clock},
};

const REMOTE_ID_TAG: &str = "REMOTE_USER";

impl<C: Clock> ChargePointCore<C> {
    /// Accepts the command, then plays the plug-in sequence a real charge
    /// point would report: Preparing, StartTransaction, Charging. The
    /// transaction id arrives later in the StartTransaction result.
    pub(crate) fn remote_start_transaction_ocpp(
        &mut self,
        unique_id: String,
        req: RemoteStartTransactionRequest,
    ) -> Vec<Frame<ProtocolError>> {
        match req.connector_id.as_u64().and_then(|t| usize::try_from(t).ok()) {
            Some(connector_id) if connector_id > 0 => self.session.set_connector(connector_id),
            _ if req.connector_id.is_null() => {}
            _ => log::warn!("ignoring connector id {}", req.connector_id),
        }
        self.session.set_charging(true);
        let connector_id = self.session.connector_id();
        let id_tag = match req.id_tag {
            Value::String(id_tag) => id_tag,
            Value::Null => REMOTE_ID_TAG.to_string(),
            other => other.to_string(),
        };
        log::info!("remote start on connector {} for {}", connector_id, id_tag);

        let now = self.clock.now();
        let preparing = self.new_call(
            CallAction::StatusNotification,
            payloads::status_notification_request(connector_id, ChargePointStatus::Preparing),
        );
        let start = self.new_call(
            CallAction::StartTransaction,
            payloads::start_transaction_request(connector_id, id_tag, 0, now),
        );
        let charging = self.new_call(
            CallAction::StatusNotification,
            payloads::status_notification_request(connector_id, ChargePointStatus::Charging),
        );
        vec![
            Self::call_result(
                unique_id,
                payloads::remote_start_transaction(RemoteStartStopStatus::Accepted),
            ),
            preparing,
            start,
            charging,
        ]
    }
}
