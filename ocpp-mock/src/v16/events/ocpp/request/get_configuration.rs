use rocpp_core::{
    format::message::Frame,
    v16::{messages::get_configuration::GetConfigurationRequest, protocol_error::ProtocolError},
};
use serde_json::Value;

use crate::v16::{cp::core::ChargePointCore, payloads, state_machine::clock::Clock};

impl<C: Clock> ChargePointCore<C> {
    pub(crate) fn get_configuration_ocpp(
        &mut self,
        unique_id: String,
        req: GetConfigurationRequest,
    ) -> Vec<Frame<ProtocolError>> {
        let (configuration_key, unknown_key) = self.configs.list(requested_keys(req.key));
        Self::reply(
            unique_id,
            payloads::get_configuration(configuration_key, unknown_key),
        )
    }
}

/// `None` asks for every key: no list, an empty one, or a shape that names
/// no keys. Non-string list entries are skipped.
fn requested_keys(raw: Value) -> Option<Vec<String>> {
    match raw {
        Value::Array(items) if !items.is_empty() => Some(
            items
                .into_iter()
                .filter_map(|t| match t {
                    Value::String(key) => Some(key),
                    other => {
                        log::debug!("skipping configuration key {}", other);
                        None
                    }
                })
                .collect(),
        ),
        Value::String(key) if !key.is_empty() => Some(vec![key]),
        _ => None,
    }
}
