//! Messages exchanged with connected clients.
//!
//! Every frame is a JSON object `{"type": ..., "data": ...}`; events without
//! a payload carry only `type`.

use serde::{Deserialize, Serialize};

use crate::error::{CurtainError, CurtainResult};
use crate::progress::ProgressSnapshot;

/// Client -> server events.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum ClientEvent {
    /// A curtain page asks for the current progress.
    RegisterCurtain,
    /// Dashboard replaces the required list with comma-separated names.
    SetUsers(String),
    /// A participant pressed their button.
    UserClicked(String),
}

impl ClientEvent {
    /// Decode a text frame.
    pub fn from_json(text: &str) -> CurtainResult<Self> {
        serde_json::from_str(text)
            .map_err(|e| CurtainError::invalid_message(format!("{e}: {text}")))
    }
}

/// Server -> client messages.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum ServerMessage {
    UpdateUserList(Vec<String>),
    ProgressUpdate(ProgressSnapshot),
    OpenCurtain,
}

impl ServerMessage {
    pub fn to_json(&self) -> CurtainResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_client_events() {
        assert_eq!(
            ClientEvent::from_json(r#"{"type":"registerCurtain"}"#).unwrap(),
            ClientEvent::RegisterCurtain
        );
        assert_eq!(
            ClientEvent::from_json(r#"{"type":"setUsers","data":"Alice, Bob"}"#).unwrap(),
            ClientEvent::SetUsers("Alice, Bob".to_string())
        );
        assert_eq!(
            ClientEvent::from_json(r#"{"type":"userClicked","data":"Alice"}"#).unwrap(),
            ClientEvent::UserClicked("Alice".to_string())
        );
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let err = ClientEvent::from_json("not json").unwrap_err();
        assert!(matches!(err, CurtainError::InvalidMessage(_)));

        assert!(ClientEvent::from_json(r#"{"type":"launchRockets"}"#).is_err());
        assert!(ClientEvent::from_json(r#"{"type":"userClicked"}"#).is_err());
    }

    #[test]
    fn test_encode_server_messages() {
        let list = ServerMessage::UpdateUserList(vec!["a".into(), "b".into()]);
        assert_eq!(
            list.to_json().unwrap(),
            r#"{"type":"updateUserList","data":["a","b"]}"#
        );

        assert_eq!(
            ServerMessage::OpenCurtain.to_json().unwrap(),
            r#"{"type":"openCurtain"}"#
        );

        let progress = ServerMessage::ProgressUpdate(ProgressSnapshot {
            completed_count: 1,
            total_count: 4,
            fraction_percent: 25.0,
        });
        let value: serde_json::Value =
            serde_json::from_str(&progress.to_json().unwrap()).unwrap();
        assert_eq!(value["type"], "progressUpdate");
        assert_eq!(value["data"]["progress"], 25.0);
        assert_eq!(value["data"]["clicked"], 1);
        assert_eq!(value["data"]["total"], 4);
    }
}
