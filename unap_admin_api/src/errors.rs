//! Error types for the API client.

/// Errors that can occur when talking to the admin API.
///
/// Non-2xx statuses are not errors: they come back as a normal
/// [`crate::Envelope`] with `ok == false`. Only failures that prevent a
/// response from being obtained at all surface here.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request could not be sent or the response body could not be read
    /// (connection failure, timeout, invalid URL).
    #[error("Request failed")]
    RequestFailed,
    /// The durable session store could not be opened.
    #[error("Session store unavailable: {0}")]
    StoreUnavailable(String),
}
