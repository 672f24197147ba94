//! dualerr core library
//!
//! A small error taxonomy that keeps apart what failed, what the caller may
//! see and what an operator should log:
//!
//! - [`PlainError`]: a fixed message, no causes
//! - [`WrapError`]: a fixed message over any number of causes
//! - [`InternalError`]: a [`Message`] rendered twice, once for users
//!   ([`InternalError::out_text`]) and once for logs
//!   ([`InternalError::log_text`]), classified as `Internal`, `Validation` or
//!   `Unexpected`
//!
//! Causes form a graph, so the [`inspect`] helpers search every branch when
//! matching a sentinel or a classification. [`aggravate`] turns a validation
//! failure that travelled too far into an unexpected one.

pub mod config;
pub mod error;
pub mod inspect;
pub mod message;
pub mod report;

// Re-export commonly used types
pub use config::InspectConfig;
pub use error::{
    AggravateExt, Cause, ErrorKind, GenericError, InternalError, LogFields, OptionExt, Options,
    PlainError, ResultExt, WrapError, cause, cause_from_anyhow,
};
pub use inspect::{
    Inspector, aggravate, as_error, as_generic_error, as_internal_error, as_unexpected_error,
    as_validation_error, as_wrap_error, find, is, is_same, kind_of,
};
pub use message::{Message, MessageSource, TemplateMessage};
pub use report::{ExposedError, LogRecord};
