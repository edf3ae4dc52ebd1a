use rocpp_core::{
    format::message::Frame,
    v16::{
        messages::change_configuration::ChangeConfigurationRequest,
        protocol_error::ProtocolError, types::ConfigurationStatus,
    },
};
use serde_json::Value;

use crate::v16::{cp::core::ChargePointCore, payloads, state_machine::clock::Clock};

impl<C: Clock> ChargePointCore<C> {
    pub(crate) fn change_configuration_ocpp(
        &mut self,
        unique_id: String,
        req: ChangeConfigurationRequest,
    ) -> Vec<Frame<ProtocolError>> {
        let status = match req.key.as_str() {
            Some(key) => {
                let status = self.configs.change(key, config_value(req.value));
                log::debug!("ChangeConfiguration {} -> {:?}", key, status);
                status
            }
            None => {
                log::debug!("ChangeConfiguration with key {} is not supported", req.key);
                ConfigurationStatus::NotSupported
            }
        };
        Self::reply(unique_id, payloads::change_configuration(status))
    }
}

/// Stored form of a requested value: strings as is, a missing value as the
/// empty string, anything else as its JSON text.
fn config_value(value: Value) -> String {
    match value {
        Value::String(value) => value,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
