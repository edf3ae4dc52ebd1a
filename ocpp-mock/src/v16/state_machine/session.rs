use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub is_charging: bool,
    pub transaction_id: Option<i64>,
    pub connector_id: usize,
}

/// Charging session shared between the dispatcher, the call-result observer
/// and the meter sender. Every mutation goes through the lock.
#[derive(Clone, Debug)]
pub struct Session {
    inner: Arc<Mutex<SessionState>>,
}

impl Session {
    pub fn new(connector_id: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(SessionState {
                is_charging: false,
                transaction_id: None,
                connector_id,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn start_transaction(&self, transaction_id: i64) {
        let mut state = self.lock();
        state.transaction_id = Some(transaction_id);
        state.is_charging = true;
    }

    pub fn stop_transaction(&self) {
        let mut state = self.lock();
        state.is_charging = false;
        state.transaction_id = None;
    }

    pub fn set_charging(&self, is_charging: bool) {
        self.lock().is_charging = is_charging;
    }

    pub fn set_connector(&self, connector_id: usize) {
        self.lock().connector_id = connector_id;
    }

    /// Any id is accepted, the charge point does not check it against its
    /// own transaction. `None` forgets the current one.
    pub fn record_server_transaction_id(&self, transaction_id: Option<i64>) {
        self.lock().transaction_id = transaction_id;
    }

    pub fn is_charging(&self) -> bool {
        self.lock().is_charging
    }

    pub fn transaction_id(&self) -> Option<i64> {
        self.lock().transaction_id
    }

    pub fn connector_id(&self) -> usize {
        self.lock().connector_id
    }

    pub fn snapshot(&self) -> SessionState {
        *self.lock()
    }
}

/// Reads a transaction id as the central system sent it: an integer, or a
/// string holding one.
pub(crate) fn parse_transaction_id(raw: &Value) -> Option<i64> {
    match raw {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
