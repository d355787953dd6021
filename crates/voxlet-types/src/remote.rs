//! Payloads fetched from the widget backend.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Remote app configuration.
///
/// Opaque to the bootstrapper: it is decoded only as far as "is this JSON"
/// and handed to the mount entrypoint unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RemoteAppConfig(Value);

impl RemoteAppConfig {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for RemoteAppConfig {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Credentials the UI needs to join a voice room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionDetails {
    /// Media server URL (usually `wss://`).
    pub server_url: String,
    pub room_name: String,
    pub participant_name: String,
    /// Access token authorizing the participant to join the room.
    pub participant_token: String,
}
