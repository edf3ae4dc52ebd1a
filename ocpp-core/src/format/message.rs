use serde_json::Value;

use super::frame::{Call, CallError, CallResult};

#[derive(Debug, Clone)]
pub struct Invalid {
    pub unique_id: Option<String>,
    pub message: String,
    pub err_msg: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CallResponse<T> {
    CallResult(CallResult),
    CallError(CallError<T>),
}

#[derive(Debug, Clone)]
pub enum OcppMessage<T> {
    Call(Call),
    CallResponse(CallResponse<T>),
    Invalid(Invalid),
}

/// A complete outbound frame, one line on the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum Frame<T> {
    Call(Call),
    CallResult(CallResult),
    CallError(CallError<T>),
}

pub trait EncodeDecode {
    fn encode(&self) -> String;
}

impl<T> Frame<T> {
    pub fn unique_id(&self) -> &str {
        match self {
            Frame::Call(t) => &t.unique_id,
            Frame::CallResult(t) => &t.unique_id,
            Frame::CallError(t) => &t.unique_id,
        }
    }
}

impl<T: serde::de::DeserializeOwned> OcppMessage<T> {
    pub fn decode(message: String) -> OcppMessage<T> {
        let raw: Value = match serde_json::from_str(&message) {
            Ok(val) => val,
            Err(e) => {
                return OcppMessage::Invalid(Invalid {
                    unique_id: None,
                    message,
                    err_msg: format!("JSON parse error: {}", e),
                });
            }
        };

        let arr = match raw {
            Value::Array(arr) => arr,
            _ => {
                return OcppMessage::Invalid(Invalid {
                    unique_id: None,
                    message,
                    err_msg: "Expected JSON array".into(),
                });
            }
        };

        match arr.first().and_then(|v| v.as_u64()) {
            Some(2) if arr.len() == 4 => {
                let unique_id = arr[1].as_str().map(|s| s.to_string());
                let action = arr[2].as_str().map(|s| s.to_string());
                let payload = arr[3].clone();

                match (unique_id.clone(), action) {
                    (Some(unique_id), Some(action)) if payload.is_object() => {
                        OcppMessage::Call(Call {
                            unique_id,
                            action,
                            payload,
                        })
                    }
                    _ => OcppMessage::Invalid(Invalid {
                        unique_id,
                        message,
                        err_msg: "Invalid Call structure".into(),
                    }),
                }
            }

            Some(3) if arr.len() == 3 => {
                let unique_id = arr[1].as_str().map(|s| s.to_string());
                let payload = arr[2].clone();

                match unique_id {
                    Some(unique_id) if payload.is_object() => {
                        OcppMessage::CallResponse(CallResponse::CallResult(CallResult {
                            unique_id,
                            payload,
                        }))
                    }
                    _ => OcppMessage::Invalid(Invalid {
                        unique_id: None,
                        message,
                        err_msg: "Invalid CallResult structure".into(),
                    }),
                }
            }

            Some(4) if arr.len() == 5 => {
                let unique_id = arr[1].as_str().map(|s| s.to_string());
                let error_code = serde_json::from_value::<T>(arr[2].clone());
                let error_description = arr[3].as_str().map(|s| s.to_string());
                let error_details = arr[4].clone();

                if let (Some(unique_id), Ok(error_code), Some(error_description)) =
                    (unique_id.clone(), error_code, error_description)
                {
                    OcppMessage::CallResponse(CallResponse::CallError(CallError {
                        unique_id,
                        error_code,
                        error_description,
                        error_details,
                    }))
                } else {
                    OcppMessage::Invalid(Invalid {
                        unique_id,
                        message,
                        err_msg: "Invalid CallError structure".into(),
                    })
                }
            }

            _ => OcppMessage::Invalid(Invalid {
                unique_id: None,
                message,
                err_msg: "Unknown or malformed message".into(),
            }),
        }
    }
}

impl EncodeDecode for Call {
    fn encode(&self) -> String {
        Value::Array(vec![
            2.into(),
            self.unique_id.clone().into(),
            self.action.clone().into(),
            self.payload.clone(),
        ])
        .to_string()
    }
}

impl EncodeDecode for CallResult {
    fn encode(&self) -> String {
        Value::Array(vec![
            3.into(),
            self.unique_id.clone().into(),
            self.payload.clone(),
        ])
        .to_string()
    }
}

impl<T: ToString> EncodeDecode for CallError<T> {
    fn encode(&self) -> String {
        Value::Array(vec![
            4.into(),
            self.unique_id.clone().into(),
            self.error_code.to_string().into(),
            self.error_description.clone().into(),
            self.error_details.clone(),
        ])
        .to_string()
    }
}

impl<T: ToString> EncodeDecode for CallResponse<T> {
    fn encode(&self) -> String {
        match self {
            CallResponse::CallResult(t) => t.encode(),
            CallResponse::CallError(t) => t.encode(),
        }
    }
}

impl<T: ToString> EncodeDecode for Frame<T> {
    fn encode(&self) -> String {
        match self {
            Frame::Call(t) => t.encode(),
            Frame::CallResult(t) => t.encode(),
            Frame::CallError(t) => t.encode(),
        }
    }
}
