//! Matching helpers using the default [`Inspector`]

use super::Inspector;
use super::walk::ErrorRef;
use crate::error::{Cause, ErrorKind, GenericError, InternalError, PlainError, WrapError};

/// Whether an error equal to `target` appears anywhere in `err`'s graph
pub fn is<T>(err: ErrorRef<'_>, target: &T) -> bool
where
    T: std::error::Error + PartialEq + 'static,
{
    Inspector::default().is(err, target)
}

/// Whether the shared instance `target` appears anywhere in `err`'s graph
pub fn is_same(err: ErrorRef<'_>, target: &Cause) -> bool {
    Inspector::default().is_same(err, target)
}

/// First error of type `T` anywhere in `err`'s graph
pub fn find<T>(err: ErrorRef<'_>) -> Option<&T>
where
    T: std::error::Error + 'static,
{
    Inspector::default().find::<T>(err)
}

/// First plain error anywhere in `err`'s graph
pub fn as_error(err: ErrorRef<'_>) -> Option<&PlainError> {
    find::<PlainError>(err)
}

/// First wrap error anywhere in `err`'s graph
pub fn as_wrap_error(err: ErrorRef<'_>) -> Option<&WrapError> {
    find::<WrapError>(err)
}

/// First structured error, whatever its classification
pub fn as_generic_error(err: ErrorRef<'_>) -> Option<&dyn GenericError> {
    Inspector::default().find_generic(err)
}

/// First structured error that is neither validation nor unexpected
pub fn as_internal_error(err: ErrorRef<'_>) -> Option<&InternalError> {
    Inspector::default().find_kind(err, ErrorKind::Internal)
}

/// First structured error classified as validation
pub fn as_validation_error(err: ErrorRef<'_>) -> Option<&InternalError> {
    Inspector::default().find_kind(err, ErrorKind::Validation)
}

/// First structured error classified as unexpected
pub fn as_unexpected_error(err: ErrorRef<'_>) -> Option<&InternalError> {
    Inspector::default().find_kind(err, ErrorKind::Unexpected)
}

/// Classification of `err` itself, looking through shared-cause wrappers
pub fn kind_of(err: ErrorRef<'_>) -> Option<ErrorKind> {
    let err = peel(err);
    if err.is::<PlainError>() {
        Some(ErrorKind::Plain)
    } else if err.is::<WrapError>() {
        Some(ErrorKind::Wrap)
    } else {
        err.downcast_ref::<InternalError>().map(InternalError::kind)
    }
}

/// Strip `Arc` layers added when a [`Cause`] is itself shared as a cause
pub(crate) fn peel(mut err: ErrorRef<'_>) -> ErrorRef<'_> {
    while let Some(inner) = err.downcast_ref::<Cause>() {
        err = &**inner;
    }
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InspectConfig;
    use crate::error::Options;
    use crate::message::Message;
    use std::sync::Arc;

    const TIMEOUT: PlainError = PlainError::from_static("timeout");

    fn message() -> Message {
        Message::template("m", "out {}", "log {}")
    }

    fn structured(kind: ErrorKind, causes: Vec<Cause>) -> Cause {
        let options = Some(Options::new().with_out_arg("o").with_log_arg("l"));
        Arc::new(match kind {
            ErrorKind::Validation => InternalError::validation(message(), options, causes),
            ErrorKind::Unexpected => InternalError::unexpected(message(), options, causes),
            _ => InternalError::internal(message(), options, causes),
        })
    }

    #[test]
    fn test_is_matches_sentinel_in_nested_cause() {
        let err = WrapError::new(
            "outer",
            vec![Arc::new(WrapError::new("mid", vec![Arc::new(TIMEOUT)]))],
        );
        assert!(is(&err, &TIMEOUT));
        assert!(!is(&err, &PlainError::from_static("other")));
    }

    #[test]
    fn test_is_same_uses_identity() {
        let sentinel: Cause = Arc::new(PlainError::new("x"));
        let lookalike: Cause = Arc::new(PlainError::new("x"));
        let err = WrapError::new("outer", vec![sentinel.clone()]);

        assert!(is_same(&err, &sentinel));
        assert!(!is_same(&err, &lookalike));
        assert!(is(&err, &PlainError::new("x")));
    }

    #[test]
    fn test_classifications_are_disjoint() {
        let validation = structured(ErrorKind::Validation, vec![]);
        let unexpected = structured(ErrorKind::Unexpected, vec![]);
        let internal = structured(ErrorKind::Internal, vec![]);

        assert!(as_validation_error(&*validation).is_some());
        assert!(as_unexpected_error(&*validation).is_none());
        assert!(as_internal_error(&*validation).is_none());

        assert!(as_unexpected_error(&*unexpected).is_some());
        assert!(as_validation_error(&*unexpected).is_none());

        assert!(as_internal_error(&*internal).is_some());
        assert!(as_validation_error(&*internal).is_none());

        for err in [&validation, &unexpected, &internal] {
            assert!(as_generic_error(&**err).is_some());
            assert!(as_error(&**err).is_none());
        }
    }

    #[test]
    fn test_as_error_and_wrap_error() {
        let err = WrapError::new("outer", vec![Arc::new(PlainError::new("leaf"))]);

        assert_eq!(as_wrap_error(&err).map(WrapError::message), Some("outer"));
        assert_eq!(as_error(&err).map(PlainError::message), Some("leaf"));
    }

    #[test]
    fn test_generic_error_renders_found_error() {
        let err = WrapError::new("outer", vec![structured(ErrorKind::Validation, vec![])]);
        let generic = as_generic_error(&err).unwrap();

        assert_eq!(generic.kind(), ErrorKind::Validation);
        assert_eq!(generic.out_text(), "out o");
        assert_eq!(generic.log_text(), "log l");
    }

    #[test]
    fn test_kind_of_reads_outermost_tag() {
        assert_eq!(kind_of(&TIMEOUT), Some(ErrorKind::Plain));
        assert_eq!(kind_of(&WrapError::new("w", vec![])), Some(ErrorKind::Wrap));

        let shared = structured(ErrorKind::Unexpected, vec![]);
        assert_eq!(kind_of(&*shared), Some(ErrorKind::Unexpected));

        let io = std::io::Error::other("io");
        assert_eq!(kind_of(&io), None);
    }

    #[test]
    fn test_inspector_depth_limits_matching() {
        let err = WrapError::new(
            "outer",
            vec![Arc::new(WrapError::new("mid", vec![Arc::new(TIMEOUT)]))],
        );
        let shallow = Inspector::new(InspectConfig {
            max_depth: 1,
            ..InspectConfig::default()
        });

        assert!(!shallow.is(&err, &TIMEOUT));
        assert!(Inspector::default().is(&err, &TIMEOUT));
    }
}
