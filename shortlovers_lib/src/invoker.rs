//! The error boundary between remote calls and application code.
//!
//! [`invoke`] runs one remote call on a runtime worker and folds every way it
//! can fail into [`NetworkResult::Error`]. Code above this layer never sees a
//! transport error, a decode error or a panic from the call.

use std::any::Any;
use std::future::Future;

use serde::Serialize;
use shortlovers_api::{ApiError, ErrorCode};

/// Outcome of a remote call as seen by the application.
///
/// `Loading` is only a placeholder callers hold while a call is in flight;
/// [`invoke`] itself never returns it.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum NetworkResult<T> {
    Success(T),
    Error(ApiError),
    Loading,
}

impl<T> NetworkResult<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, NetworkResult::Success(_))
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, NetworkResult::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            NetworkResult::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            NetworkResult::Error(err) => Some(err),
            _ => None,
        }
    }

    pub fn map<U, F>(self, f: F) -> NetworkResult<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            NetworkResult::Success(data) => NetworkResult::Success(f(data)),
            NetworkResult::Error(err) => NetworkResult::Error(err),
            NetworkResult::Loading => NetworkResult::Loading,
        }
    }

    /// Converts a terminal result into a `Result`. `Loading` yields `None`.
    pub fn into_result(self) -> Option<Result<T, ApiError>> {
        match self {
            NetworkResult::Success(data) => Some(Ok(data)),
            NetworkResult::Error(err) => Some(Err(err)),
            NetworkResult::Loading => None,
        }
    }
}

/// Why a call failed, in the order [`invoke`] checks for it.
#[derive(Debug, thiserror::Error)]
pub enum CallFailure {
    /// The server answered with a structured error.
    #[error(transparent)]
    Api(#[from] ApiError),
    /// The host name could not be resolved.
    #[error("host could not be resolved")]
    HostUnresolved,
    /// Connecting or reading took longer than the configured timeout.
    #[error("request timed out")]
    TimedOut,
    /// Any other connection or I/O failure.
    #[error("I/O failure: {message}")]
    Io { message: String, description: String },
    /// Everything else: undecodable payloads, bad URLs, panics.
    #[error("unexpected failure: {}", .0.as_deref().unwrap_or("unknown"))]
    Other(Option<String>),
}

impl CallFailure {
    /// Normalizes the failure into the error handed to callers.
    pub fn into_api_error(self) -> ApiError {
        match self {
            CallFailure::Api(err) => err,
            CallFailure::HostUnresolved => {
                ApiError::new(ErrorCode::NetworkError, "No internet connection")
                    .with_reason("Unable to resolve host")
            }
            CallFailure::TimedOut => ApiError::new(ErrorCode::NetworkError, "Connection timed out")
                .with_reason("Server took too long to respond"),
            CallFailure::Io {
                message,
                description,
            } => ApiError::new(ErrorCode::NetworkError, message).with_reason(description),
            CallFailure::Other(message) => ApiError::new(
                ErrorCode::Unknown,
                message.unwrap_or_else(|| "Unknown error".to_string()),
            ),
        }
    }
}

impl From<shortlovers_api::Error> for CallFailure {
    fn from(err: shortlovers_api::Error) -> Self {
        match err {
            shortlovers_api::Error::Api(api) => CallFailure::Api(api),
            shortlovers_api::Error::Transport(e) => CallFailure::from(e),
            shortlovers_api::Error::Decode(e) => CallFailure::Other(Some(e.to_string())),
            shortlovers_api::Error::InvalidUrl(e) => CallFailure::Other(Some(e.to_string())),
        }
    }
}

impl From<reqwest::Error> for CallFailure {
    fn from(err: reqwest::Error) -> Self {
        if mentions_host_resolution(&err) {
            return CallFailure::HostUnresolved;
        }
        if err.is_timeout() {
            return CallFailure::TimedOut;
        }
        if err.is_decode() || err.is_builder() {
            return CallFailure::Other(Some(err.to_string()));
        }
        CallFailure::Io {
            message: err.to_string(),
            description: describe_chain(&err),
        }
    }
}

/// Runs `call` on a runtime worker and converts its outcome.
///
/// The caller only awaits; the request itself is driven by the spawned task.
/// Failures are mapped in this order: structured API errors unchanged, host
/// resolution, timeout, other I/O, then anything else (including a panic in
/// the call) as `UNKNOWN`. Never panics and never returns `Loading`.
pub async fn invoke<T, E, F, Fut>(call: F) -> NetworkResult<T>
where
    F: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = Result<T, E>> + Send + 'static,
    T: Send + 'static,
    E: Into<CallFailure> + Send + 'static,
{
    // Building the future happens inside the task too, so a panic there is caught.
    let failure = match tokio::spawn(async move { call().await }).await {
        Ok(Ok(data)) => return NetworkResult::Success(data),
        Ok(Err(e)) => e.into(),
        Err(join_err) => {
            let message = if join_err.is_panic() {
                panic_message(join_err.into_panic())
            } else {
                Some("Request was cancelled".to_string())
            };
            CallFailure::Other(message)
        }
    };

    let err = failure.into_api_error();
    tracing::warn!(
        "Remote call failed: {} ({})",
        err,
        err.reason.as_deref().unwrap_or("-")
    );
    NetworkResult::Error(err)
}

fn panic_message(payload: Box<dyn Any + Send>) -> Option<String> {
    if let Some(s) = payload.downcast_ref::<&str>() {
        Some(s.to_string())
    } else {
        payload.downcast_ref::<String>().cloned()
    }
}

const HOST_RESOLUTION_MARKERS: &[&str] = &[
    "dns error",
    "failed to lookup address",
    "name or service not known",
    "no such host",
    "nodename nor servname",
    "temporary failure in name resolution",
];

/// True when any error in the source chain reports a failed DNS lookup.
pub(crate) fn mentions_host_resolution(err: &(dyn std::error::Error + 'static)) -> bool {
    let mut current = Some(err);
    while let Some(e) = current {
        let text = e.to_string().to_lowercase();
        if HOST_RESOLUTION_MARKERS.iter().any(|m| text.contains(m)) {
            return true;
        }
        current = e.source();
    }
    false
}

/// The innermost cause's message, which is the most specific description.
fn describe_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut last = err;
    while let Some(next) = last.source() {
        last = next;
    }
    last.to_string()
}
