mod harness;

use std::collections::HashMap;

use harness::{call_parts, new_core, new_core_with, result_payload, uid, FIXED_TIME};
use rocpp_core::{
    format::{
        frame::CallResult,
        message::{CallResponse, Frame, OcppMessage},
    },
    v16::protocol_error::ProtocolError,
};
use rocpp_mock::v16::{MockConfig, SessionState};
use serde_json::{json, Value};

const SUPPORTED: [&str; 13] = [
    "BootNotification",
    "Heartbeat",
    "Authorize",
    "StatusNotification",
    "StartTransaction",
    "MeterValues",
    "StopTransaction",
    "DataTransfer",
    "ClearCache",
    "ChangeConfiguration",
    "GetConfiguration",
    "RemoteStartTransaction",
    "RemoteStopTransaction",
];

fn observe_result(payload: Value) -> OcppMessage<ProtocolError> {
    OcppMessage::CallResponse(CallResponse::CallResult(CallResult::new(uid(), payload)))
}

#[test]
fn every_supported_action_answers_with_the_same_unique_id() {
    let mut cp = new_core();
    for action in SUPPORTED {
        let unique_id = uid();
        let frames = cp.handle(action, json!({}), unique_id.clone());
        assert!(!frames.is_empty(), "{action} produced nothing");
        assert!(
            matches!(frames[0], Frame::CallResult(_)),
            "{action} did not reply with a CallResult"
        );
        assert_eq!(frames[0].unique_id(), unique_id, "{action}");
        for follow_up in &frames[1..] {
            assert!(matches!(follow_up, Frame::Call(_)), "{action}");
        }
    }
}

#[test]
fn simple_actions_use_protocol_payload_shapes() {
    let mut cp = new_core();
    let boot = cp.handle("BootNotification", json!({}), uid());
    assert_eq!(
        result_payload(&boot[0]),
        &json!({"status": "Accepted", "currentTime": FIXED_TIME, "interval": 200})
    );
    let heartbeat = cp.handle("Heartbeat", json!({}), uid());
    assert_eq!(result_payload(&heartbeat[0]), &json!({"currentTime": FIXED_TIME}));
    let authorize = cp.handle("Authorize", json!({"idTag": "ABC"}), uid());
    assert_eq!(
        result_payload(&authorize[0]),
        &json!({"idTagInfo": {"status": "Accepted"}})
    );
    let status = cp.handle("StatusNotification", json!({}), uid());
    assert_eq!(result_payload(&status[0]), &json!({}));
    let meter = cp.handle("MeterValues", json!({}), uid());
    assert_eq!(result_payload(&meter[0]), &json!({}));
    let data = cp.handle("DataTransfer", json!({"vendorId": "x"}), uid());
    assert_eq!(result_payload(&data[0]), &json!({"status": "Accepted"}));
    let cache = cp.handle("ClearCache", json!({}), uid());
    assert_eq!(result_payload(&cache[0]), &json!({"status": "Accepted"}));
}

#[test]
fn boot_interval_follows_config() {
    let mut cp = new_core_with(MockConfig {
        boot_interval: 30,
        ..MockConfig::default()
    });
    let boot = cp.handle("BootNotification", json!({}), uid());
    assert_eq!(result_payload(&boot[0])["interval"], json!(30));
}

#[test]
fn remote_start_plays_preparing_start_charging() {
    let mut cp = new_core();
    let unique_id = uid();
    let frames = cp.handle("RemoteStartTransaction", json!({"idTag": "X"}), unique_id.clone());
    assert_eq!(frames.len(), 4);
    assert_eq!(frames[0].unique_id(), unique_id);
    assert_eq!(result_payload(&frames[0]), &json!({"status": "Accepted"}));

    let (action, payload) = call_parts(&frames[1]);
    assert_eq!(action, "StatusNotification");
    assert_eq!(
        payload,
        &json!({"connectorId": 1, "errorCode": "NoError", "status": "Preparing"})
    );

    let (action, payload) = call_parts(&frames[2]);
    assert_eq!(action, "StartTransaction");
    assert_eq!(
        payload,
        &json!({"connectorId": 1, "idTag": "X", "meterStart": 0, "timestamp": FIXED_TIME})
    );

    let (action, payload) = call_parts(&frames[3]);
    assert_eq!(action, "StatusNotification");
    assert_eq!(payload["status"], json!("Charging"));

    let ids: Vec<&str> = frames[1..].iter().map(|t| t.unique_id()).collect();
    assert!(ids.iter().all(|t| *t != unique_id));
    assert_ne!(ids[0], ids[1]);
    assert_ne!(ids[1], ids[2]);

    let session = cp.session().snapshot();
    assert!(session.is_charging);
    assert_eq!(session.transaction_id, None);
}

#[test]
fn remote_start_without_id_tag_uses_remote_user_on_requested_connector() {
    let mut cp = new_core();
    let frames = cp.handle("RemoteStartTransaction", json!({"connectorId": 2}), uid());
    let (_, start) = call_parts(&frames[2]);
    assert_eq!(start["idTag"], json!("REMOTE_USER"));
    assert_eq!(start["connectorId"], json!(2));
    let (_, charging) = call_parts(&frames[3]);
    assert_eq!(charging["connectorId"], json!(2));
    assert_eq!(cp.session().connector_id(), 2);
}

#[test]
fn remote_stop_reports_requested_transaction() {
    let mut cp = new_core();
    let frames = cp.handle("RemoteStopTransaction", json!({"transactionId": 42}), uid());
    assert_eq!(frames.len(), 4);
    assert_eq!(result_payload(&frames[0]), &json!({"status": "Accepted"}));

    let (action, payload) = call_parts(&frames[1]);
    assert_eq!(action, "StatusNotification");
    assert_eq!(payload["status"], json!("Finishing"));

    let (action, payload) = call_parts(&frames[2]);
    assert_eq!(action, "StopTransaction");
    assert_eq!(
        payload,
        &json!({
            "transactionId": 42,
            "meterStop": 0,
            "timestamp": FIXED_TIME,
            "reason": "Remote"
        })
    );

    let (action, payload) = call_parts(&frames[3]);
    assert_eq!(action, "StatusNotification");
    assert_eq!(payload["status"], json!("Available"));
}

#[test]
fn remote_stop_falls_back_to_known_transaction() {
    let mut cp = new_core();
    cp.handle("RemoteStartTransaction", json!({"idTag": "X"}), uid());
    assert!(cp.got_msg(observe_result(json!({"transactionId": 555, "idTagInfo": {"status": "Accepted"}}))).is_empty());

    let frames = cp.handle("RemoteStopTransaction", json!({}), uid());
    let (_, stop) = call_parts(&frames[2]);
    assert_eq!(stop["transactionId"], json!(555));
    assert_eq!(
        cp.session().snapshot(),
        SessionState {
            is_charging: false,
            transaction_id: None,
            connector_id: 1
        }
    );
}

#[test]
fn remote_stop_with_nothing_known_sends_null_transaction() {
    let mut cp = new_core();
    let frames = cp.handle("RemoteStopTransaction", json!({}), uid());
    let (_, stop) = call_parts(&frames[2]);
    assert_eq!(stop["transactionId"], Value::Null);
}

#[test]
fn readonly_key_is_rejected_and_kept() {
    let mut cp = new_core();
    let frames = cp.handle(
        "ChangeConfiguration",
        json!({"key": "SupportedFeatureProfiles", "value": "Core"}),
        uid(),
    );
    assert_eq!(result_payload(&frames[0]), &json!({"status": "Rejected"}));
    assert_eq!(
        cp.configs().value("SupportedFeatureProfiles"),
        Some("Core,RemoteTrigger,Configuration")
    );
}

#[test]
fn writable_key_change_shows_in_get_configuration() {
    let mut cp = new_core();
    let frames = cp.handle(
        "ChangeConfiguration",
        json!({"key": "HeartbeatInterval", "value": "30"}),
        uid(),
    );
    assert_eq!(result_payload(&frames[0]), &json!({"status": "Accepted"}));

    let frames = cp.handle("GetConfiguration", json!({"key": ["HeartbeatInterval"]}), uid());
    assert_eq!(
        result_payload(&frames[0]),
        &json!({
            "configurationKey": [{"key": "HeartbeatInterval", "readonly": false, "value": "30"}],
            "unknownKey": []
        })
    );
}

#[test]
fn unknown_key_change_is_not_supported() {
    let mut cp = new_core();
    let frames = cp.handle("ChangeConfiguration", json!({"key": "Nope", "value": "1"}), uid());
    assert_eq!(result_payload(&frames[0]), &json!({"status": "NotSupported"}));
    let frames = cp.handle("ChangeConfiguration", json!({}), uid());
    assert_eq!(result_payload(&frames[0]), &json!({"status": "NotSupported"}));
    assert_eq!(cp.configs().len(), 5);
}

#[test]
fn get_configuration_without_keys_lists_everything() {
    let mut cp = new_core();
    for payload in [json!({}), json!({"key": []})] {
        let frames = cp.handle("GetConfiguration", payload, uid());
        let payload = result_payload(&frames[0]);
        let keys: Vec<&str> = payload["configurationKey"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["key"].as_str().unwrap())
            .collect();
        assert_eq!(
            keys,
            vec![
                "HeartbeatInterval",
                "ConnectionTimeOut",
                "SupportedFeatureProfiles",
                "ChargeProfileMaxStackLevel",
                "AllowOfflineTxForUnknownId"
            ]
        );
        assert_eq!(payload["unknownKey"], json!([]));
    }
}

#[test]
fn get_configuration_reports_unknown_keys() {
    let mut cp = new_core();
    let frames = cp.handle("GetConfiguration", json!({"key": ["Nope"]}), uid());
    assert_eq!(
        result_payload(&frames[0]),
        &json!({"configurationKey": [], "unknownKey": ["Nope"]})
    );
}

#[test]
fn configured_values_seed_the_store() {
    let mut cp = new_core_with(MockConfig {
        ocpp_configs: HashMap::from([
            ("ConnectionTimeOut".to_string(), "30".to_string()),
            ("MadeUp".to_string(), "1".to_string()),
        ]),
        ..MockConfig::default()
    });
    assert_eq!(cp.configs().value("ConnectionTimeOut"), Some("30"));
    assert!(cp.configs().get("MadeUp").is_none());
    let frames = cp.handle("GetConfiguration", json!({"key": ["MadeUp"]}), uid());
    assert_eq!(result_payload(&frames[0])["unknownKey"], json!(["MadeUp"]));
}

#[test]
fn unknown_action_is_not_supported() {
    let mut cp = new_core();
    let unique_id = uid();
    let frames = cp.handle("FooBar", json!({}), unique_id.clone());
    assert_eq!(frames.len(), 1);
    match &frames[0] {
        Frame::CallError(err) => {
            assert_eq!(err.unique_id, unique_id);
            assert_eq!(err.error_code, ProtocolError::NotSupported);
            assert_eq!(err.error_description, "Action not supported");
            assert_eq!(err.error_details, json!({}));
        }
        other => panic!("expected CallError, got {:?}", other),
    }
}

#[test]
fn remote_stop_with_string_id_still_stops() {
    let mut cp = new_core();
    cp.handle("StartTransaction", json!({}), uid());
    assert!(cp.session().is_charging());

    let frames = cp.handle("RemoteStopTransaction", json!({"transactionId": "42"}), uid());
    assert_eq!(frames.len(), 4);
    assert_eq!(result_payload(&frames[0]), &json!({"status": "Accepted"}));
    let (action, stop) = call_parts(&frames[2]);
    assert_eq!(action, "StopTransaction");
    assert_eq!(stop["transactionId"], json!(42));
    let session = cp.session().snapshot();
    assert!(!session.is_charging);
    assert_eq!(session.transaction_id, None);
}

#[test]
fn remote_stop_with_zero_or_junk_id_uses_known_transaction() {
    for requested in [json!(0), json!("abc"), json!(false)] {
        let mut cp = new_core();
        cp.handle("StartTransaction", json!({}), uid());
        let known = cp.session().transaction_id().unwrap();

        let frames = cp.handle(
            "RemoteStopTransaction",
            json!({"transactionId": requested}),
            uid(),
        );
        assert_eq!(frames.len(), 4);
        let (_, stop) = call_parts(&frames[2]);
        assert_eq!(stop["transactionId"], json!(known), "{requested}");
        assert!(!cp.session().is_charging());
    }
}

#[test]
fn remote_stop_keeps_large_transaction_ids() {
    let mut cp = new_core();
    let frames = cp.handle(
        "RemoteStopTransaction",
        json!({"transactionId": 5_000_000_000i64}),
        uid(),
    );
    let (_, stop) = call_parts(&frames[2]);
    assert_eq!(stop["transactionId"], json!(5_000_000_000i64));
}

#[test]
fn loosely_typed_payloads_are_still_answered() {
    let mut cp = new_core();
    let frames = cp.handle(
        "ChangeConfiguration",
        json!({"key": "HeartbeatInterval", "value": 30}),
        uid(),
    );
    assert_eq!(result_payload(&frames[0]), &json!({"status": "Accepted"}));
    assert_eq!(cp.configs().value("HeartbeatInterval"), Some("30"));

    let frames = cp.handle("ChangeConfiguration", json!({"key": 5, "value": "1"}), uid());
    assert_eq!(result_payload(&frames[0]), &json!({"status": "NotSupported"}));

    let frames = cp.handle(
        "GetConfiguration",
        json!({"key": ["HeartbeatInterval", 5]}),
        uid(),
    );
    assert_eq!(
        result_payload(&frames[0]),
        &json!({
            "configurationKey": [{"key": "HeartbeatInterval", "readonly": false, "value": "30"}],
            "unknownKey": []
        })
    );

    let frames = cp.handle(
        "RemoteStartTransaction",
        json!({"idTag": 5, "connectorId": "two"}),
        uid(),
    );
    assert_eq!(frames.len(), 4);
    let (_, start) = call_parts(&frames[2]);
    assert_eq!(start["idTag"], json!("5"));
    assert_eq!(start["connectorId"], json!(1));
    assert!(cp.session().is_charging());

    let frames = cp.handle("GetConfiguration", json!([1, 2]), uid());
    assert_eq!(
        result_payload(&frames[0])["configurationKey"]
            .as_array()
            .unwrap()
            .len(),
        5
    );
}

#[test]
fn known_actions_never_answer_with_an_error() {
    let mut cp = new_core();
    for action in SUPPORTED {
        let odd = json!({
            "key": 1,
            "value": [],
            "idTag": {},
            "transactionId": {},
            "connectorId": -1
        });
        for payload in [odd, json!(7)] {
            let frames = cp.handle(action, payload, uid());
            assert!(
                matches!(frames[0], Frame::CallResult(_)),
                "{action} answered with {:?}",
                frames[0]
            );
        }
    }
}

#[test]
fn start_then_stop_clears_the_session() {
    let mut cp = new_core();
    let frames = cp.handle("StartTransaction", json!({"idTag": "X"}), uid());
    let payload = result_payload(&frames[0]);
    let transaction_id = payload["transactionId"].as_i64().unwrap();
    assert!((10000..=99999).contains(&transaction_id));
    assert_eq!(payload["idTagInfo"], json!({"status": "Accepted"}));
    assert!(cp.session().is_charging());
    assert_eq!(cp.session().transaction_id(), Some(transaction_id));

    let frames = cp.handle("StopTransaction", json!({}), uid());
    assert_eq!(
        result_payload(&frames[0]),
        &json!({"idTagInfo": {"status": "Accepted"}})
    );
    let session = cp.session().snapshot();
    assert!(!session.is_charging);
    assert_eq!(session.transaction_id, None);
}

#[test]
fn call_results_teach_the_transaction_id() {
    let mut cp = new_core();
    assert!(cp.got_msg(observe_result(json!({"transactionId": 777}))).is_empty());
    assert_eq!(cp.session().transaction_id(), Some(777));

    assert!(cp.got_msg(observe_result(json!({"transactionId": "abc"}))).is_empty());
    assert!(cp.got_msg(observe_result(json!({"status": "Accepted"}))).is_empty());
    assert_eq!(cp.session().transaction_id(), Some(777));
    assert!(!cp.session().is_charging());

    assert!(cp.got_msg(observe_result(json!({"transactionId": 5_000_000_000i64}))).is_empty());
    assert_eq!(cp.session().transaction_id(), Some(5_000_000_000));
}

#[test]
fn null_transaction_id_in_a_call_result_clears_it() {
    let mut cp = new_core();
    cp.handle("StartTransaction", json!({}), uid());
    assert!(cp.session().transaction_id().is_some());

    assert!(cp.got_msg(observe_result(json!({"transactionId": null}))).is_empty());
    let session = cp.session().snapshot();
    assert_eq!(session.transaction_id, None);
    assert!(session.is_charging);

    let frames = cp.handle("RemoteStopTransaction", json!({}), uid());
    let (_, stop) = call_parts(&frames[2]);
    assert_eq!(stop["transactionId"], Value::Null);
}
