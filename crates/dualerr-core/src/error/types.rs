//! Shared error types: causes, rendering options and the leaf/aggregate errors

use crate::message::format::render;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

/// A shared, thread-safe causal error
pub type Cause = std::sync::Arc<dyn std::error::Error + Send + Sync + 'static>;

/// Structured fields attached to the diagnostic rendering
pub type LogFields = serde_json::Map<String, Value>;

/// Classification tag of every error variant this crate defines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Leaf failure with a fixed message
    Plain,
    /// Fixed message aggregating other failures
    Wrap,
    /// Structured failure without a classification
    Internal,
    /// Expected, user-actionable structured failure
    Validation,
    /// Bug-class structured failure
    Unexpected,
}

impl ErrorKind {
    /// Tag used in the display form, e.g. `<ValidationError| ...>`
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Plain => "Error",
            Self::Wrap => "WrapError",
            Self::Internal => "InternalError",
            Self::Validation => "ValidationError",
            Self::Unexpected => "UnexpectedError",
        }
    }

    /// Whether this kind carries a message and dual rendering
    pub fn is_structured(&self) -> bool {
        matches!(self, Self::Internal | Self::Validation | Self::Unexpected)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Rendering options for structured errors.
///
/// `out_args` feed the user-facing text, `log_args` the diagnostic text and
/// `log_fields` are handed to the logging consumer as structured fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    pub out_args: Vec<Value>,
    pub log_args: Vec<Value>,
    pub log_fields: LogFields,
}

impl Options {
    /// Empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an argument for the user-facing text
    pub fn with_out_arg(mut self, arg: impl Into<Value>) -> Self {
        self.out_args.push(arg.into());
        self
    }

    /// Append arguments for the user-facing text
    pub fn with_out_args<I, V>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.out_args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Append an argument for the diagnostic text
    pub fn with_log_arg(mut self, arg: impl Into<Value>) -> Self {
        self.log_args.push(arg.into());
        self
    }

    /// Append arguments for the diagnostic text
    pub fn with_log_args<I, V>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.log_args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Attach a structured log field
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.log_fields.insert(key.into(), value.into());
        self
    }
}

/// Leaf error holding a fixed message
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
#[error("<Error| {message}>")]
pub struct PlainError {
    message: Cow<'static, str>,
}

impl PlainError {
    /// Create a plain error
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Create a plain error in a `const` context, for sentinels
    pub const fn from_static(message: &'static str) -> Self {
        Self {
            message: Cow::Borrowed(message),
        }
    }

    /// Create a plain error from a positional template
    pub fn newf(template: &str, args: &[Value]) -> Self {
        Self::new(render(template, args))
    }

    /// The fixed message
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Error aggregating zero or more causes under a fixed message
#[derive(Debug, Clone)]
pub struct WrapError {
    message: String,
    causes: Vec<Cause>,
}

impl WrapError {
    /// Create a wrap error
    pub fn new(message: impl Into<String>, causes: Vec<Cause>) -> Self {
        Self {
            message: message.into(),
            causes,
        }
    }

    /// Create a wrap error whose message comes from a positional template
    pub fn newf(template: &str, args: &[Value], causes: Vec<Cause>) -> Self {
        Self::new(render(template, args), causes)
    }

    /// The fixed message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Every direct cause, in order
    pub fn causes(&self) -> &[Cause] {
        &self.causes
    }
}

impl fmt::Display for WrapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{}| {}> caused from: {}",
            ErrorKind::Wrap.tag(),
            self.message,
            CauseList(&self.causes)
        )
    }
}

impl std::error::Error for WrapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.causes.first().map(|c| &**c as _)
    }
}

/// Display adapter printing causes as `[a b]`
pub(crate) struct CauseList<'a>(pub(crate) &'a [Cause]);

impl fmt::Display for CauseList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, cause) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", cause)?;
        }
        f.write_str("]")
    }
}
