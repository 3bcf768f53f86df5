//! Uniform failure shape for every API call.

pub const STATUS_VALIDATION: u16 = 422;
pub const STATUS_NETWORK: u16 = 0;

/// Error returned by the HTTP wrapper and every API operation.
///
/// `status` is the HTTP status of the failed response, `422` for input rejected
/// before any request was sent, or `0` when no response arrived at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: u16,
    pub message: String,
}

impl ApiError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// `"<field> is required."`, raised before touching the network.
    pub fn required(field: &str) -> Self {
        Self::new(STATUS_VALIDATION, format!("{field} is required."))
    }

    pub fn network() -> Self {
        Self::new(STATUS_NETWORK, "Network request failed")
    }

    pub fn fallback_message(status: u16) -> String {
        format!("Request failed with status {status}")
    }

    pub fn is_validation(&self) -> bool {
        self.status == STATUS_VALIDATION
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}
