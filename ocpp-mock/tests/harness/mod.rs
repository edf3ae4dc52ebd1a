#![allow(dead_code)]

use std::sync::Once;

use chrono::{DateTime, TimeZone, TimeDelta, Utc};
use log::LevelFilter;
use rand::{rngs::SmallRng, SeedableRng};
use rocpp_core::{
    format::{frame::Call, message::{EncodeDecode, Frame}},
    v16::protocol_error::ProtocolError,
};
use rocpp_mock::v16::{ChargePoint, ChargePointCore, FixedClock, MockConfig};
use serde_json::Value;

static INIT: Once = Once::new();

pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::builder()
            .is_test(true)
            .filter_level(LevelFilter::Trace)
            .try_init()
            .ok();
    });
}

pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap() + TimeDelta::milliseconds(678)
}

pub const FIXED_TIME: &str = "2025-01-02T03:04:05.678Z";

pub fn new_core() -> ChargePointCore<FixedClock> {
    new_core_with(MockConfig::default())
}

pub fn new_core_with(config: MockConfig) -> ChargePointCore<FixedClock> {
    init_logger();
    ChargePointCore::new(&config, FixedClock(fixed_time()), SmallRng::seed_from_u64(7))
}

pub fn new_cp(config: MockConfig) -> ChargePoint<FixedClock> {
    init_logger();
    ChargePoint::new(config, FixedClock(fixed_time()), SmallRng::seed_from_u64(7))
}

pub fn uid() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// A Call line as the central system would send it.
pub fn call_line(action: &str, payload: Value) -> (String, String) {
    let unique_id = uid();
    let call = Call {
        unique_id: unique_id.clone(),
        action: action.to_string(),
        payload,
    };
    (unique_id, call.encode())
}

pub fn result_payload(frame: &Frame<ProtocolError>) -> &Value {
    match frame {
        Frame::CallResult(res) => &res.payload,
        other => panic!("expected CallResult, got {:?}", other),
    }
}

pub fn call_parts(frame: &Frame<ProtocolError>) -> (&str, &Value) {
    match frame {
        Frame::Call(call) => (call.action.as_str(), &call.payload),
        other => panic!("expected Call, got {:?}", other),
    }
}
