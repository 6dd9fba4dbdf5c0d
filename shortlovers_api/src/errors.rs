//! Error types for the API client.
//!
//! Directus reports failures as `{"errors":[{"message", "extensions": {"code", ...}}]}`.
//! [`ErrorCode`] is the closed set of codes the app knows about and [`ApiError`]
//! is the typed error built from the first entry of such a body.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The server answered with a non-success status. Raised by the transport layer.
    #[error(transparent)]
    Api(#[from] ApiError),
    /// The request never produced a response, or the body could not be read.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// A success response did not match the expected shape.
    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),
    /// The base URL and path did not form a valid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Known Directus error codes, each bound to one canonical HTTP status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    FailedValidation,
    Forbidden,
    InvalidToken,
    TokenExpired,
    InvalidCredentials,
    InvalidIp,
    InvalidOtp,
    InvalidPayload,
    InvalidQuery,
    UnsupportedMediaType,
    RequestsExceeded,
    RouteNotFound,
    ServiceUnavailable,
    UnprocessableContent,
    /// Connectivity problem on the client side. Never sent by the server.
    NetworkError,
    /// Anything not listed above.
    Unknown,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 16] = [
        ErrorCode::FailedValidation,
        ErrorCode::Forbidden,
        ErrorCode::InvalidToken,
        ErrorCode::TokenExpired,
        ErrorCode::InvalidCredentials,
        ErrorCode::InvalidIp,
        ErrorCode::InvalidOtp,
        ErrorCode::InvalidPayload,
        ErrorCode::InvalidQuery,
        ErrorCode::UnsupportedMediaType,
        ErrorCode::RequestsExceeded,
        ErrorCode::RouteNotFound,
        ErrorCode::ServiceUnavailable,
        ErrorCode::UnprocessableContent,
        ErrorCode::NetworkError,
        ErrorCode::Unknown,
    ];

    /// Looks up a code by its exact (case-sensitive) name. Missing or
    /// unrecognized codes map to [`ErrorCode::Unknown`].
    pub fn from_code(code: Option<&str>) -> ErrorCode {
        code.and_then(|c| c.parse().ok())
            .unwrap_or(ErrorCode::Unknown)
    }

    /// The wire name, e.g. `TOKEN_EXPIRED`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::FailedValidation => "FAILED_VALIDATION",
            ErrorCode::Forbidden => "FORBIDDEN",
            ErrorCode::InvalidToken => "INVALID_TOKEN",
            ErrorCode::TokenExpired => "TOKEN_EXPIRED",
            ErrorCode::InvalidCredentials => "INVALID_CREDENTIALS",
            ErrorCode::InvalidIp => "INVALID_IP",
            ErrorCode::InvalidOtp => "INVALID_OTP",
            ErrorCode::InvalidPayload => "INVALID_PAYLOAD",
            ErrorCode::InvalidQuery => "INVALID_QUERY",
            ErrorCode::UnsupportedMediaType => "UNSUPPORTED_MEDIA_TYPE",
            ErrorCode::RequestsExceeded => "REQUESTS_EXCEEDED",
            ErrorCode::RouteNotFound => "ROUTE_NOT_FOUND",
            ErrorCode::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            ErrorCode::UnprocessableContent => "UNPROCESSABLE_CONTENT",
            ErrorCode::NetworkError => "NETWORK_ERROR",
            ErrorCode::Unknown => "UNKNOWN",
        }
    }

    /// Canonical HTTP status. `0` for network errors, `-1` for unknown.
    pub fn http_status(&self) -> i32 {
        match self {
            ErrorCode::FailedValidation => 400,
            ErrorCode::Forbidden => 403,
            ErrorCode::InvalidToken => 403,
            ErrorCode::TokenExpired => 401,
            ErrorCode::InvalidCredentials => 401,
            ErrorCode::InvalidIp => 401,
            ErrorCode::InvalidOtp => 401,
            ErrorCode::InvalidPayload => 400,
            ErrorCode::InvalidQuery => 400,
            ErrorCode::UnsupportedMediaType => 415,
            ErrorCode::RequestsExceeded => 429,
            ErrorCode::RouteNotFound => 404,
            ErrorCode::ServiceUnavailable => 503,
            ErrorCode::UnprocessableContent => 422,
            ErrorCode::NetworkError => 0,
            ErrorCode::Unknown => -1,
        }
    }

    /// Fixed Indonesian message shown to users. `None` for [`ErrorCode::Unknown`],
    /// whose message comes from the error payload instead.
    fn fixed_message(&self) -> Option<&'static str> {
        Some(match self {
            ErrorCode::Forbidden => "Akses ditolak. Anda tidak memiliki izin.",
            ErrorCode::InvalidToken => "Token tidak valid. Silakan login kembali.",
            ErrorCode::TokenExpired => "Sesi telah berakhir. Silakan login kembali.",
            ErrorCode::InvalidCredentials => "Email atau password salah.",
            ErrorCode::InvalidIp => "Alamat IP tidak diizinkan.",
            ErrorCode::InvalidOtp => "Kode OTP salah.",
            ErrorCode::InvalidPayload => "Data yang dikirim tidak valid.",
            ErrorCode::InvalidQuery => "Permintaan tidak valid.",
            ErrorCode::FailedValidation => "Validasi gagal. Periksa kembali data Anda.",
            ErrorCode::UnsupportedMediaType => "Format file tidak didukung.",
            ErrorCode::RequestsExceeded => "Terlalu banyak permintaan. Coba lagi nanti.",
            ErrorCode::RouteNotFound => "Endpoint tidak ditemukan.",
            ErrorCode::ServiceUnavailable => "Layanan sedang tidak tersedia.",
            ErrorCode::UnprocessableContent => "Permintaan tidak dapat diproses.",
            ErrorCode::NetworkError => "Gagal terhubung ke server. Periksa koneksi internet.",
            ErrorCode::Unknown => return None,
        })
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ErrorCode::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or(())
    }
}

/// A structured API failure. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
    pub reason: Option<String>,
    pub path: Option<String>,
    pub http_status: Option<u16>,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            reason: None,
            path: None,
            http_status: None,
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_http_status(mut self, status: u16) -> Self {
        self.http_status = Some(status);
        self
    }

    /// Builds the error from one entry of a Directus error body.
    pub fn from_entry(entry: &crate::types::ErrorEntry, http_status: Option<u16>) -> Self {
        let extensions = entry.extensions.as_ref();
        Self {
            code: ErrorCode::from_code(extensions.and_then(|e| e.code.as_deref())),
            message: entry
                .message
                .clone()
                .unwrap_or_else(|| "Unknown error".to_string()),
            reason: extensions.and_then(|e| e.reason.clone()),
            path: extensions.and_then(|e| e.path.clone()),
            http_status,
        }
    }

    /// Fallback used when an error body is missing or unreadable.
    pub fn unknown_status(status: u16, status_text: &str) -> Self {
        Self::new(
            ErrorCode::Unknown,
            format!("HTTP {}: {}", status, status_text),
        )
        .with_http_status(status)
    }

    /// Message suitable for showing to the user.
    ///
    /// Depends only on `code`, except for [`ErrorCode::Unknown`] which falls back
    /// to `reason` and then `message`.
    pub fn user_message(&self) -> String {
        match self.code.fixed_message() {
            Some(msg) => msg.to_string(),
            None => self
                .reason
                .clone()
                .unwrap_or_else(|| self.message.clone()),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)?;
        if let Some(status) = self.http_status {
            write!(f, " (HTTP {})", status)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}
