//! Message identity and the rendering capability errors depend on

use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Renders one message into its two independent texts.
///
/// Implementations must be pure and infallible: formatting problems are
/// embedded in the returned text instead of being reported.
#[cfg_attr(test, mockall::automock)]
pub trait MessageSource: Send + Sync {
    /// Text that is safe to show to an end user
    fn out_text(&self, args: &[Value]) -> String;

    /// Diagnostic text for operators; may carry internal detail
    fn log_text(&self, args: &[Value]) -> String;
}

/// Shared handle to a message: a stable key plus the source that renders it.
///
/// Errors hold a `Message` by reference count and never mutate it. Two
/// handles are equal when they share the same source or carry the same key.
#[derive(Clone)]
pub struct Message {
    key: Arc<str>,
    source: Arc<dyn MessageSource>,
}

impl Message {
    /// Create a message from a key and a rendering source
    pub fn new(key: impl Into<Arc<str>>, source: impl MessageSource + 'static) -> Self {
        Self {
            key: key.into(),
            source: Arc::new(source),
        }
    }

    /// Create a message from an already shared source
    pub fn from_shared(key: impl Into<Arc<str>>, source: Arc<dyn MessageSource>) -> Self {
        Self {
            key: key.into(),
            source,
        }
    }

    /// Stable identifier of this message
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Render the user-facing text
    pub fn out_text(&self, args: &[Value]) -> String {
        self.source.out_text(args)
    }

    /// Render the diagnostic text
    pub fn log_text(&self, args: &[Value]) -> String {
        self.source.log_text(args)
    }

    /// Whether both handles point at the same source instance
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.source, &other.source)
    }
}

impl PartialEq for Message {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.key == other.key
    }
}

impl Eq for Message {}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Message").field("key", &self.key).finish()
    }
}
