use rocpp_core::format::frame::CallResult;
use serde_json::Value;

use crate::v16::{
    cp::core::ChargePointCore,
    state_machine::{clock::Clock, session::parse_transaction_id},
};

impl<C: Clock> ChargePointCore<C> {
    /// Results of our own calls are matched by shape only: a top-level
    /// `transactionId` (StartTransaction.conf in practice) becomes the
    /// session's transaction id, and a `null` one clears it.
    pub(crate) fn call_result_ocpp(&mut self, res: CallResult) {
        let Some(raw) = res.payload.get("transactionId") else {
            log::debug!("CallResult {} carries no transaction id", res.unique_id);
            return;
        };
        if let Value::Null = raw {
            log::info!("central system cleared the transaction id");
            self.session.record_server_transaction_id(None);
            return;
        }
        match parse_transaction_id(raw) {
            Some(transaction_id) => {
                log::info!("central system assigned transaction {}", transaction_id);
                self.session.record_server_transaction_id(Some(transaction_id));
            }
            None => log::warn!("ignoring non-integer transaction id {}", raw),
        }
    }
}
