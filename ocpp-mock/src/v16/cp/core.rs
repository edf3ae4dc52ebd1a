use rand::rngs::SmallRng;
use rocpp_core::{
    format::{
        frame::{CallError, CallResult},
        message::Frame,
    },
    v16::protocol_error::ProtocolError,
};
use serde::Serialize;

use crate::v16::state_machine::{clock::Clock, config::OcppConfigs, session::Session};

use super::config::MockConfig;

/// Protocol state of the mock charge point: session, configuration keys and
/// the sources of time and randomness used when answering the central system.
pub struct ChargePointCore<C: Clock> {
    pub(crate) session: Session,
    pub(crate) configs: OcppConfigs,
    pub(crate) rng: SmallRng,
    pub(crate) clock: C,
    pub(crate) boot_interval: u64,
}

impl<C: Clock> ChargePointCore<C> {
    pub fn new(config: &MockConfig, clock: C, rng: SmallRng) -> Self {
        Self {
            session: Session::new(config.connector_id),
            configs: OcppConfigs::build(&config.ocpp_configs),
            rng,
            clock,
            boot_interval: config.boot_interval,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn configs(&self) -> &OcppConfigs {
        &self.configs
    }

    pub(crate) fn call_result<T: Serialize>(
        unique_id: String,
        payload: T,
    ) -> Frame<ProtocolError> {
        Frame::CallResult(CallResult::new(unique_id, payload))
    }

    pub(crate) fn reply<T: Serialize>(unique_id: String, payload: T) -> Vec<Frame<ProtocolError>> {
        vec![Self::call_result(unique_id, payload)]
    }

    pub(crate) fn error(unique_id: String, err: ProtocolError) -> Vec<Frame<ProtocolError>> {
        vec![Frame::CallError(
            CallError::new(unique_id, err).with_description(err.description()),
        )]
    }
}
