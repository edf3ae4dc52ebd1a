use rocpp_core::{
    format::message::Frame,
    v16::{
        messages::remote_stop_transaction::RemoteStopTransactionRequest,
        protocol_error::ProtocolError,
        types::{ChargePointStatus, Reason, RemoteStartStopStatus},
    },
};

use crate::v16::{
    cp::core::ChargePointCore,
    payloads,
    state_machine::{call::CallAction, clock::Clock, session::parse_transaction_id},
};

impl<C: Clock> ChargePointCore<C> {
    /// Accepts the command and reports Finishing, StopTransaction, Available.
    /// The requested id is not checked against the running transaction; a
    /// missing, zero or non-numeric one falls back to the known id.
    pub(crate) fn remote_stop_transaction_ocpp(
        &mut self,
        unique_id: String,
        req: RemoteStopTransactionRequest,
    ) -> Vec<Frame<ProtocolError>> {
        let session = self.session.snapshot();
        let transaction_id = parse_transaction_id(&req.transaction_id)
            .filter(|t| *t != 0)
            .or(session.transaction_id);
        self.session.stop_transaction();
        log::info!("remote stop of transaction {:?}", transaction_id);

        let connector_id = session.connector_id;
        let now = self.clock.now();
        let finishing = self.new_call(
            CallAction::StatusNotification,
            payloads::status_notification_request(connector_id, ChargePointStatus::Finishing),
        );
        let stop = self.new_call(
            CallAction::StopTransaction,
            payloads::stop_transaction_request(transaction_id, 0, now, Reason::Remote),
        );
        let available = self.new_call(
            CallAction::StatusNotification,
            payloads::status_notification_request(connector_id, ChargePointStatus::Available),
        );
        vec![
            Self::call_result(
                unique_id,
                payloads::remote_stop_transaction(RemoteStartStopStatus::Accepted),
            ),
            finishing,
            stop,
            available,
        ]
    }
}
