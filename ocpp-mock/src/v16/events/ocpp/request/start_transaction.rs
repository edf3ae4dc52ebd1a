use rocpp_core::{
    format::message::Frame,
    v16::{protocol_error::ProtocolError, types::AuthorizationStatus},
};

use crate::v16::{
    cp::core::ChargePointCore,
    payloads,
    state_machine::{clock::Clock, rng::get_transaction_id},
};

impl<C: Clock> ChargePointCore<C> {
    /// Locally started transaction: the mock plays the central system and
    /// hands out the transaction id itself.
    pub(crate) fn start_transaction_ocpp(&mut self, unique_id: String) -> Vec<Frame<ProtocolError>> {
        let transaction_id = get_transaction_id(&mut self.rng);
        self.session.start_transaction(i64::from(transaction_id));
        log::info!("transaction {} started", transaction_id);
        Self::reply(
            unique_id,
            payloads::start_transaction(transaction_id, AuthorizationStatus::Accepted),
        )
    }
}
