//! Response envelope returned by every storefront API endpoint.
//!
//! `{ "success": bool, "message"?: string, "data"?: T }`

use serde::{Deserialize, Serialize};

/// Message shown when the server failed without explaining why.
pub const FALLBACK_MESSAGE: &str = "Something went wrong";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Server message, or the generic fallback when it is missing or blank.
    pub fn message_or_fallback(&self) -> String {
        match self.message.as_deref().map(str::trim) {
            Some(m) if !m.is_empty() => m.to_string(),
            _ => FALLBACK_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_success_without_data() {
        let resp: ApiResponse<Value> = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(resp.success);
        assert_eq!(resp.message, None);
        assert_eq!(resp.data, None);
    }

    #[test]
    fn test_failure_keeps_server_message() {
        let resp: ApiResponse<Value> =
            serde_json::from_str(r#"{"success":false,"message":"Category already exists"}"#)
                .unwrap();
        assert!(!resp.success);
        assert_eq!(resp.message_or_fallback(), "Category already exists");
    }

    #[test]
    fn test_failure_without_message_uses_fallback() {
        let resp: ApiResponse<Value> =
            serde_json::from_str(r#"{"success":false,"message":"  "}"#).unwrap();
        assert_eq!(resp.message_or_fallback(), FALLBACK_MESSAGE);
    }

    #[test]
    fn test_null_data_is_none() {
        let resp: ApiResponse<Vec<String>> =
            serde_json::from_str(r#"{"success":true,"data":null}"#).unwrap();
        assert_eq!(resp.data, None);
    }
}
