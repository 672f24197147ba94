//! Payloads for the logging and response consumers
//!
//! Nothing here writes anywhere: a [`LogRecord`] is handed to whatever logger
//! the application uses, an [`ExposedError`] to whatever builds responses.

use crate::error::{ErrorKind, InternalError, LogFields};
use crate::inspect::{ErrorRef, Inspector, direct_causes, kind_of, peel};
use serde::Serialize;

/// Text shown to users when no structured error is available
pub const FALLBACK_OUT_TEXT: &str = "An unexpected error occurred";

/// Structured payload for a logging consumer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogRecord {
    /// Classification of the logged error, if it is one of ours
    pub kind: Option<ErrorKind>,
    /// Message key of the logged error, if it is structured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Diagnostic text
    pub text: String,
    /// Structured fields to attach to the log event
    pub fields: LogFields,
    /// Display form of every direct cause
    pub causes: Vec<String>,
}

impl LogRecord {
    /// Build the record for `err` itself.
    ///
    /// Structured errors contribute their log text and fields; any other
    /// error contributes its display string. Shared-cause layers around the
    /// error are looked through.
    pub fn from_error(err: ErrorRef<'_>) -> Self {
        let err = peel(err);
        let causes = direct_causes(err).iter().map(|c| c.to_string()).collect();

        match err.downcast_ref::<InternalError>() {
            Some(structured) => Self {
                kind: Some(structured.kind()),
                key: Some(structured.message().key().to_string()),
                text: structured.log_text(),
                fields: structured.log_fields().clone(),
                causes,
            },
            None => Self {
                kind: kind_of(err),
                key: None,
                text: err.to_string(),
                fields: LogFields::new(),
                causes,
            },
        }
    }
}

/// Payload for an API consumer: classification plus user-safe text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExposedError {
    /// Classification of the structured error the text came from, if any
    pub kind: Option<ErrorKind>,
    /// Text safe to show to an end user
    pub text: String,
}

impl ExposedError {
    /// Expose the first structured error in `err`'s graph.
    ///
    /// Without one, the text is [`FALLBACK_OUT_TEXT`] so that no diagnostic
    /// detail reaches the user.
    pub fn from_error(err: ErrorRef<'_>) -> Self {
        Self::from_error_with(&Inspector::default(), err)
    }

    /// Same as [`ExposedError::from_error`] with explicit inspection settings
    pub fn from_error_with(inspector: &Inspector, err: ErrorRef<'_>) -> Self {
        match inspector.find_generic(err) {
            Some(generic) => Self {
                kind: Some(generic.kind()),
                text: generic.out_text(),
            },
            None => Self {
                kind: kind_of(err),
                text: FALLBACK_OUT_TEXT.to_string(),
            },
        }
    }

    /// Whether the end user caused this failure and can act on it
    pub fn is_user_actionable(&self) -> bool {
        self.kind == Some(ErrorKind::Validation)
    }
}
