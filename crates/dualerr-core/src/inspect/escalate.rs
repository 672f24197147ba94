//! Escalation of validation failures

use super::Inspector;
use super::matching::kind_of;
use super::walk::Walk;
use crate::error::{Cause, ErrorKind, InternalError};
use std::sync::Arc;
use tracing::debug;

impl Inspector {
    /// Reclassify a validation failure as unexpected.
    ///
    /// The first validation error in `err`'s graph that is not beneath an
    /// unexpected error is rebuilt as a new unexpected error from its
    /// message, options and causes, which is returned in place of `err`.
    /// Validation errors under an unexpected error are already escalated, so
    /// the search never descends into one. Everything else is returned
    /// unchanged and the input is never mutated.
    pub fn aggravate(&self, err: Cause) -> Cause {
        let escalated = Walk::new(&*err, self.config().max_depth)
            .pruned(|node| kind_of(node) == Some(ErrorKind::Unexpected))
            .filter_map(|node| node.downcast_ref::<InternalError>())
            .find(|node| node.is_validation())
            .map(|validation| {
                if self.config().log_escalations {
                    debug!(
                        key = validation.message().key(),
                        causes = validation.causes().len(),
                        "Escalating validation error to unexpected"
                    );
                }
                InternalError::unexpected(
                    validation.message().clone(),
                    Some(validation.options().clone()),
                    validation.causes().to_vec(),
                )
            });

        match escalated {
            Some(unexpected) => Arc::new(unexpected),
            None => err,
        }
    }
}

/// Reclassify a validation failure as unexpected, using default settings.
///
/// See [`Inspector::aggravate`].
pub fn aggravate(err: Cause) -> Cause {
    Inspector::default().aggravate(err)
}
