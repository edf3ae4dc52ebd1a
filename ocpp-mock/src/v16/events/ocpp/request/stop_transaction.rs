use rocpp_core::{
    format::message::Frame,
    v16::{protocol_error::ProtocolError, types::AuthorizationStatus},
};

use crate::v16::{cp::core::ChargePointCore, payloads, state_machine::clock::Clock};

impl<C: Clock> ChargePointCore<C> {
    pub(crate) fn stop_transaction_ocpp(&mut self, unique_id: String) -> Vec<Frame<ProtocolError>> {
        self.session.stop_transaction();
        Self::reply(
            unique_id,
            payloads::stop_transaction(AuthorizationStatus::Accepted),
        )
    }
}
