use serde::Deserialize;

/// Body returned by the expiry-check endpoint.
///
/// Exactly one shape is expected: `{response}`, `{err}` or `{alert, response}`.
#[derive(Debug, Deserialize)]
pub struct CheckResponse {
    pub response: Option<String>,
    pub err: Option<String>,
    pub alert: Option<serde_json::Value>,
}

/// Body returned by every `/user` and `/feedback` call, on success and on error.
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    #[serde(rename = "Message")]
    pub message: String,
}
