use chrono::{TimeDelta, TimeZone, Utc};
use rocpp_core::{
    format::{
        frame::{Call, CallError, CallResult},
        message::{CallResponse, EncodeDecode, Frame, OcppMessage},
        timestamp,
    },
    v16::{
        messages::heart_beat::HeartbeatResponse, protocol_error::ProtocolError,
        types::RegistrationStatus,
    },
};
use serde_json::{json, Value};

fn decode(raw: &str) -> OcppMessage<ProtocolError> {
    OcppMessage::decode(raw.to_string())
}

#[test]
fn decode_classifies_frames() {
    match decode(r#"[2,"a1","Heartbeat",{}]"#) {
        OcppMessage::Call(call) => {
            assert_eq!(call.unique_id, "a1");
            assert_eq!(call.action, "Heartbeat");
            assert_eq!(call.payload, json!({}));
        }
        other => panic!("expected Call, got {:?}", other),
    }
    match decode(r#"[3,"a2",{"transactionId":5}]"#) {
        OcppMessage::CallResponse(CallResponse::CallResult(res)) => {
            assert_eq!(res.unique_id, "a2");
            assert_eq!(res.payload["transactionId"], json!(5));
        }
        other => panic!("expected CallResult, got {:?}", other),
    }
    match decode(r#"[4,"a3","NotImplemented","nope",{}]"#) {
        OcppMessage::CallResponse(CallResponse::CallError(err)) => {
            assert_eq!(err.error_code, ProtocolError::NotImplemented);
            assert_eq!(err.error_description, "nope");
        }
        other => panic!("expected CallError, got {:?}", other),
    }
}

#[test]
fn decode_rejects_malformed_frames() {
    for raw in [
        "hello",
        "{}",
        "[]",
        r#"[2,"a","Heartbeat"]"#,
        r#"[2,7,"Heartbeat",{}]"#,
        r#"[2,"a","Heartbeat",[1,2]]"#,
        r#"[2,"a","Heartbeat","str"]"#,
        r#"[3,"a",5]"#,
        r#"[4,"a","NoSuchCode","x",{}]"#,
        r#"[5,"a",{}]"#,
    ] {
        assert!(
            matches!(decode(raw), OcppMessage::Invalid(_)),
            "{raw} should be invalid"
        );
    }
}

#[test]
fn encode_uses_ocpp_j_arrays() {
    let call = Call::new("c1".into(), "StatusNotification", json!({"connectorId": 1}));
    assert_eq!(
        call.encode(),
        r#"[2,"c1","StatusNotification",{"connectorId":1}]"#
    );

    let res = CallResult::new("r1".into(), json!({"status": "Accepted"}));
    assert_eq!(res.encode(), r#"[3,"r1",{"status":"Accepted"}]"#);

    let err = CallError::new("e1".into(), ProtocolError::NotSupported)
        .with_description(ProtocolError::NotSupported.description());
    assert_eq!(
        err.encode(),
        r#"[4,"e1","NotSupported","Action not supported",{}]"#
    );

    let frame: Frame<ProtocolError> = Frame::CallError(err.clone());
    assert_eq!(frame.unique_id(), "e1");
    assert_eq!(frame.encode(), err.encode());
}

#[test]
fn timestamps_carry_milliseconds_and_z() {
    let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    assert_eq!(timestamp::format(&at), "2024-05-01T12:00:00.000Z");

    let at = at + TimeDelta::milliseconds(42);
    let payload = serde_json::to_value(HeartbeatResponse { current_time: at }).unwrap();
    assert_eq!(payload, json!({"currentTime": "2024-05-01T12:00:00.042Z"}));

    let back: HeartbeatResponse = serde_json::from_value(payload).unwrap();
    assert_eq!(back.current_time, at);
}

#[test]
fn enums_use_protocol_spelling() {
    assert_eq!(
        serde_json::to_value(RegistrationStatus::Accepted).unwrap(),
        Value::from("Accepted")
    );
    assert_eq!(ProtocolError::FormationViolation.to_string(), "FormationViolation");
}
