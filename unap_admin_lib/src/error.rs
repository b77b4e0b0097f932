//! Error type for mutate operations.

/// A user-facing failure from a mutate operation.
///
/// Fetch failures never surface as errors; they are stored as message
/// strings on the owning slice's `RequestState`. Mutations instead report
/// back to the triggering form, which stays open so the user can retry.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum OpError {
    /// Rejected client-side before any request was issued.
    #[error("{0}")]
    Validation(String),
    /// The server rejected the mutation; carries its message verbatim when
    /// one was supplied.
    #[error("{0}")]
    Server(String),
    /// The request never produced a response.
    #[error("Request failed")]
    Transport,
}

impl OpError {
    /// Builds a [`OpError::Server`] from a response envelope, preferring the
    /// server-supplied message.
    pub fn from_envelope(envelope: &unap_admin_api::Envelope, fallback: &str) -> Self {
        OpError::Server(envelope.error_message(fallback))
    }
}
