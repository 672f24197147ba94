//! Cause-graph inspection
//!
//! Errors in this crate may have several direct causes, so matching is a
//! bounded search over a graph rather than a walk down a single `source()`
//! chain. [`Inspector`] carries the traversal settings; the free functions
//! use the defaults.

mod escalate;
mod matching;
mod walk;

pub use escalate::aggravate;
pub use matching::{
    as_error, as_generic_error, as_internal_error, as_unexpected_error, as_validation_error,
    as_wrap_error, find, is, is_same, kind_of,
};
pub use walk::{ErrorRef, Walk, direct_causes};

pub(crate) use matching::peel;

use crate::config::InspectConfig;
use crate::error::{Cause, ErrorKind, GenericError, InternalError};
use std::sync::Arc;

/// Matches errors anywhere in a cause graph
#[derive(Debug, Clone, Default)]
pub struct Inspector {
    config: InspectConfig,
}

impl Inspector {
    /// Create an inspector with explicit settings
    pub fn new(config: InspectConfig) -> Self {
        Self { config }
    }

    /// Current settings
    pub fn config(&self) -> &InspectConfig {
        &self.config
    }

    /// Visit `err` and everything it was caused by, in preorder
    pub fn walk<'a>(&self, err: ErrorRef<'a>) -> Walk<'a> {
        Walk::new(err, self.config.max_depth)
    }

    /// First error of type `T` in the graph
    pub fn find<'a, T>(&self, err: ErrorRef<'a>) -> Option<&'a T>
    where
        T: std::error::Error + 'static,
    {
        self.walk(err).find_map(|e| e.downcast_ref::<T>())
    }

    /// Whether an error equal to `target` appears in the graph
    pub fn is<T>(&self, err: ErrorRef<'_>, target: &T) -> bool
    where
        T: std::error::Error + PartialEq + 'static,
    {
        self.walk(err).any(|e| e.downcast_ref::<T>() == Some(target))
    }

    /// Whether the very instance behind `target` appears in the graph
    pub fn is_same(&self, err: ErrorRef<'_>, target: &Cause) -> bool {
        let target = Arc::as_ptr(target);
        self.walk(err)
            .any(|e| std::ptr::addr_eq(e as *const dyn std::error::Error, target))
    }

    /// First structured error carrying `kind`
    pub fn find_kind<'a>(&self, err: ErrorRef<'a>, kind: ErrorKind) -> Option<&'a InternalError> {
        self.walk(err)
            .filter_map(|e| e.downcast_ref::<InternalError>())
            .find(|e| e.kind() == kind)
    }

    /// First structured error of any classification
    pub fn find_generic<'a>(&self, err: ErrorRef<'a>) -> Option<&'a dyn GenericError> {
        self.find::<InternalError>(err)
            .map(|e| e as &dyn GenericError)
    }
}
