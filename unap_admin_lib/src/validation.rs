//! Shallow client-side validation, run before a mutate request is issued.
//! Messages are surfaced verbatim next to the triggering form.

use crate::error::OpError;
use crate::store::paged::Selection;

/// Recipient scope for mass communications.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum RecipientFilter {
    #[default]
    All,
    Selected,
}

impl RecipientFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecipientFilter::All => "all",
            RecipientFilter::Selected => "selected",
        }
    }
}

/// Rejects empty or whitespace-only required fields.
pub fn require(value: &str, message: &str) -> Result<(), OpError> {
    if value.trim().is_empty() {
        return Err(OpError::Validation(message.to_string()));
    }
    Ok(())
}

/// A `selected` filter with nothing selected never reaches the server.
pub fn require_recipients(filter: RecipientFilter, selected: &Selection) -> Result<(), OpError> {
    if filter == RecipientFilter::Selected && selected.is_empty() {
        return Err(OpError::Validation("Select at least one user.".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_rejects_blank() {
        assert!(require("", "Subject and content are required.").is_err());
        assert!(require("   ", "Subject and content are required.").is_err());
        assert!(require("Flash Sale", "x").is_ok());
    }

    #[test]
    fn selected_filter_needs_at_least_one_user() {
        let empty = Selection::default();
        let err = require_recipients(RecipientFilter::Selected, &empty).unwrap_err();
        assert_eq!(
            err,
            OpError::Validation("Select at least one user.".to_string())
        );

        let mut one = Selection::default();
        one.toggle("u1");
        assert!(require_recipients(RecipientFilter::Selected, &one).is_ok());
    }

    #[test]
    fn all_filter_ignores_selection() {
        let empty = Selection::default();
        assert!(require_recipients(RecipientFilter::All, &empty).is_ok());
    }
}
