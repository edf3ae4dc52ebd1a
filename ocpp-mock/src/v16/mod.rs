mod cp;
mod events;
pub mod payloads;
mod services;
mod state_machine;

pub use {
    cp::{
        config::MockConfig,
        core::ChargePointCore,
        runner::{serve, ChargePoint},
    },
    events::frame::{FrameDrop, IncomingAction},
    services::{
        frame::{decode_frame, FrameReader, FrameWriter},
        meter::MeterEmitter,
    },
    state_machine::{
        clock::{Clock, FixedClock, SystemClock},
        config::{OcppConfig, OcppConfigs},
        session::{Session, SessionState},
    },
};
