//! Extension traits for `Result` and `Option`

use super::types::{Cause, PlainError, WrapError};
use crate::inspect::aggravate;
use serde_json::Value;
use std::borrow::Cow;
use std::sync::Arc;

/// Wrap the error side of a `Result`
pub trait ResultExt<T> {
    /// Wrap the error under a fixed message
    fn wrap_err(self, message: impl Into<String>) -> Result<T, WrapError>;

    /// Wrap the error under a message rendered from a positional template
    fn wrap_errf(self, template: &str, args: &[Value]) -> Result<T, WrapError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn wrap_err(self, message: impl Into<String>) -> Result<T, WrapError> {
        self.map_err(|e| WrapError::new(message, vec![Arc::new(e)]))
    }

    fn wrap_errf(self, template: &str, args: &[Value]) -> Result<T, WrapError> {
        self.map_err(|e| WrapError::newf(template, args, vec![Arc::new(e)]))
    }
}

/// Escalate the error side of a `Result`
pub trait AggravateExt<T> {
    /// See [`aggravate`]
    fn aggravate(self) -> Result<T, Cause>;
}

impl<T> AggravateExt<T> for Result<T, Cause> {
    fn aggravate(self) -> Result<T, Cause> {
        self.map_err(aggravate)
    }
}

/// Convert `None` into a plain error
pub trait OptionExt<T> {
    /// Use a fixed message for the missing value
    fn or_plain(self, message: impl Into<Cow<'static, str>>) -> Result<T, PlainError>;
}

impl<T> OptionExt<T> for Option<T> {
    fn or_plain(self, message: impl Into<Cow<'static, str>>) -> Result<T, PlainError> {
        self.ok_or_else(|| PlainError::new(message))
    }
}
