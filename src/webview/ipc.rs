//! Control-message parsing for the webview IPC channel
//!
//! The content script posts each request as a small JSON object,
//! `{"cmd": "close"}` and friends. Anything that does not parse to a
//! known command is rejected.

use crate::utils::error::{ChromelessError, Result};
use crate::window::ControlRequest;

/// Parse a raw IPC message into a control request
pub fn parse_request(raw: &str) -> Result<ControlRequest> {
    serde_json::from_str(raw).map_err(|e| {
        ChromelessError::InvalidInput(format!("Unrecognized control message {:?}: {}", raw, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_commands() {
        assert_eq!(
            parse_request(r#"{"cmd":"close"}"#).unwrap(),
            ControlRequest::Close
        );
        assert_eq!(
            parse_request(r#"{"cmd":"minimize"}"#).unwrap(),
            ControlRequest::Minimize
        );
        assert_eq!(
            parse_request(r#"{"cmd":"toggle-maximize"}"#).unwrap(),
            ControlRequest::ToggleMaximize
        );
        assert_eq!(
            parse_request(r#"{"cmd":"drag"}"#).unwrap(),
            ControlRequest::Drag
        );
    }

    #[test]
    fn test_parse_rejects_unknown_command() {
        let result = parse_request(r#"{"cmd":"explode"}"#);
        assert!(matches!(result, Err(ChromelessError::InvalidInput(_))));
    }

    #[test]
    fn test_parse_rejects_malformed_payload() {
        assert!(parse_request("").is_err());
        assert!(parse_request("close").is_err());
        assert!(parse_request(r#"{"command":"close"}"#).is_err());
    }
}
