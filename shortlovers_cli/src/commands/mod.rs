//! CLI subcommand implementations.

pub mod browse;
pub mod groups;
pub mod home;
pub mod titles;

use anyhow::{anyhow, Result};
use shortlovers_lib::session::OFFLINE_MESSAGE;
use shortlovers_lib::{present_error, ApiError, NetworkResult, ScreenView};

/// Text shown to the user for a failed call: the offline text for
/// connectivity failures, the code's message otherwise.
pub fn error_text(err: &ApiError) -> String {
    match present_error(err) {
        ScreenView::Offline => OFFLINE_MESSAGE.to_string(),
        ScreenView::Failed(message) => message,
        _ => err.user_message(),
    }
}

/// Turns a finished call into its data, or an error carrying the user-facing text.
pub fn take<T>(result: NetworkResult<T>) -> Result<T> {
    match result {
        NetworkResult::Success(data) => Ok(data),
        NetworkResult::Error(err) => Err(anyhow!("{}", error_text(&err))),
        NetworkResult::Loading => Err(anyhow!("request did not complete")),
    }
}
