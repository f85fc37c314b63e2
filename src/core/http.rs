use std::time::Duration;

use reqwest::{
    header::{
        HeaderMap,
        HeaderValue,
        AUTHORIZATION,
    },
    Client,
};
use serde_json::Value;

use crate::core::FlipwiseError;

const USER_AGENT: &str = concat!("flipwise/", env!("CARGO_PKG_VERSION"), " (+reqwest)");

pub fn http_client(timeout_secs: u64) -> Result<Client, FlipwiseError> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| FlipwiseError::Custom(format!("HTTP client build failed: {e}")))
}

pub fn bearer_headers(token: &str) -> Result<HeaderMap, FlipwiseError> {
    let mut headers = HeaderMap::new();
    let value = HeaderValue::from_str(&format!("Bearer {token}"))
        .map_err(|_| FlipwiseError::Custom("Stored access token is not a valid header".into()))?;
    headers.insert(AUTHORIZATION, value);
    Ok(headers)
}

/// Turns a non-2xx body into an error, using the body's `error` field when
/// the server sent one.
pub fn api_error(status: u16, body: &Value, fallback: &str) -> FlipwiseError {
    let message = body
        .get("error")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .unwrap_or(fallback)
        .to_string();
    FlipwiseError::Api { status, message }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn server_message_wins_over_fallback() {
        let err = api_error(400, &json!({"error": "Email already registered"}), "Signup failed");
        assert_eq!(err.to_string(), "Email already registered");
    }

    #[test]
    fn fallback_used_for_empty_or_missing_error() {
        assert_eq!(api_error(500, &json!({}), "Login failed").to_string(), "Login failed");
        assert_eq!(api_error(500, &json!({"error": ""}), "Login failed").to_string(), "Login failed");
        assert_eq!(api_error(502, &Value::Null, "Login failed").to_string(), "Login failed");
    }

    #[test]
    fn bearer_header_rejects_newlines() {
        assert!(bearer_headers("abc").is_ok());
        assert!(bearer_headers("abc\ndef").is_err());
    }
}
