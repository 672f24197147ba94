//! Conversions into [`Cause`]

use super::types::Cause;
use std::sync::Arc;

/// Share any error as a cause
pub fn cause<E>(error: E) -> Cause
where
    E: std::error::Error + Send + Sync + 'static,
{
    Arc::new(error)
}

/// Share an `anyhow::Error` as a cause.
///
/// The boxed error keeps anyhow's context chain reachable through `source()`.
pub fn cause_from_anyhow(error: anyhow::Error) -> Cause {
    let boxed: Box<dyn std::error::Error + Send + Sync + 'static> = error.into();
    Arc::from(boxed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlainError;

    #[test]
    fn test_cause_keeps_concrete_type() {
        let shared = cause(PlainError::new("boom"));
        assert_eq!(
            shared.downcast_ref::<PlainError>(),
            Some(&PlainError::new("boom"))
        );
    }

    #[test]
    fn test_cause_from_anyhow_keeps_context() {
        let error = anyhow::Error::new(PlainError::new("root")).context("loading profile");
        let shared = cause_from_anyhow(error);

        assert_eq!(shared.to_string(), "loading profile");
        let source = shared.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("<Error| root>"));
    }
}
