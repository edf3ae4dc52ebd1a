use rocpp_core::{
    format::{frame::Call, message::Frame},
    v16::protocol_error::ProtocolError,
};
use serde::Serialize;

use super::{clock::Clock, rng::get_uuid};
use crate::v16::cp::core::ChargePointCore;

/// Requests the charge point sends on its own initiative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CallAction {
    StatusNotification,
    StartTransaction,
    StopTransaction,
    MeterValues,
}

impl std::fmt::Display for CallAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CallAction::StatusNotification => "StatusNotification",
            CallAction::StartTransaction => "StartTransaction",
            CallAction::StopTransaction => "StopTransaction",
            CallAction::MeterValues => "MeterValues",
        };
        write!(f, "{s}")
    }
}

pub(crate) fn build_call<R: rand::RngCore, T: Serialize>(
    rng: &mut R,
    action: CallAction,
    payload: T,
) -> Frame<ProtocolError> {
    Frame::Call(Call::new(get_uuid(rng), action, payload))
}

impl<C: Clock> ChargePointCore<C> {
    pub(crate) fn new_call<T: Serialize>(
        &mut self,
        action: CallAction,
        payload: T,
    ) -> Frame<ProtocolError> {
        build_call(&mut self.rng, action, payload)
    }
}
