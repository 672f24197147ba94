//! Structured errors with dual rendering
//!
//! [`InternalError`] is the single storage shape behind the `Internal`,
//! `Validation` and `Unexpected` classifications. The classification lives in
//! an [`ErrorKind`] tag, so matching reads the tag instead of the type.

use super::types::{Cause, CauseList, ErrorKind, LogFields, Options};
use crate::message::Message;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Capabilities shared by every structured error
pub trait GenericError: std::error::Error + Send + Sync {
    /// Classification tag
    fn kind(&self) -> ErrorKind;

    /// Every direct cause, in order
    fn causes(&self) -> &[Cause];

    /// The message this error renders
    fn message(&self) -> &Message;

    /// Options as given at construction
    fn options(&self) -> &Options;

    /// User-facing text
    fn out_text(&self) -> String;

    /// Diagnostic text
    fn log_text(&self) -> String;

    /// Structured fields for the logging consumer
    fn log_fields(&self) -> &LogFields;
}

/// Structured error: message identity, rendering arguments and causes
#[derive(Debug, Clone)]
pub struct InternalError {
    kind: ErrorKind,
    message: Message,
    options: Arc<Options>,
    causes: Vec<Cause>,
    out_args: Vec<Value>,
    log_args: Vec<Value>,
    log_fields: LogFields,
}

impl InternalError {
    /// Create an unclassified structured error
    pub fn internal(message: Message, options: Option<Options>, causes: Vec<Cause>) -> Self {
        Self::construct(ErrorKind::Internal, message, options, causes)
    }

    /// Create an expected, user-actionable error
    pub fn validation(message: Message, options: Option<Options>, causes: Vec<Cause>) -> Self {
        Self::construct(ErrorKind::Validation, message, options, causes)
    }

    /// Create a bug-class error
    pub fn unexpected(message: Message, options: Option<Options>, causes: Vec<Cause>) -> Self {
        Self::construct(ErrorKind::Unexpected, message, options, causes)
    }

    fn construct(
        kind: ErrorKind,
        message: Message,
        options: Option<Options>,
        causes: Vec<Cause>,
    ) -> Self {
        InternalErrorBuilder::new(kind, message, options)
            .causes(causes)
            .out_args()
            .log_args()
            .log_fields()
            .build()
    }

    /// Classification tag
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Whether this is an expected, user-actionable failure
    pub fn is_validation(&self) -> bool {
        self.kind == ErrorKind::Validation
    }

    /// Whether this is a bug-class failure
    pub fn is_unexpected(&self) -> bool {
        self.kind == ErrorKind::Unexpected
    }

    /// The message this error renders
    pub fn message(&self) -> &Message {
        &self.message
    }

    /// Options as given at construction; empty when none were given
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Every direct cause, in order
    pub fn causes(&self) -> &[Cause] {
        &self.causes
    }

    /// Arguments snapshotted for the user-facing text
    pub fn out_args(&self) -> &[Value] {
        &self.out_args
    }

    /// Arguments snapshotted for the diagnostic text
    pub fn log_args(&self) -> &[Value] {
        &self.log_args
    }

    /// Structured fields for the logging consumer
    pub fn log_fields(&self) -> &LogFields {
        &self.log_fields
    }

    /// User-facing text; the only rendering safe to show to end users
    pub fn out_text(&self) -> String {
        self.message.out_text(&self.out_args)
    }

    /// Diagnostic text; may carry internal detail
    pub fn log_text(&self) -> String {
        self.message.log_text(&self.log_args)
    }
}

impl fmt::Display for InternalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Log text, not out text: the generic form is operator-facing.
        write!(
            f,
            "<{}| {}> caused from: {}",
            self.kind.tag(),
            self.log_text(),
            CauseList(&self.causes)
        )
    }
}

impl std::error::Error for InternalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.causes.first().map(|c| &**c as _)
    }
}

impl GenericError for InternalError {
    fn kind(&self) -> ErrorKind {
        self.kind
    }

    fn causes(&self) -> &[Cause] {
        &self.causes
    }

    fn message(&self) -> &Message {
        &self.message
    }

    fn options(&self) -> &Options {
        &self.options
    }

    fn out_text(&self) -> String {
        InternalError::out_text(self)
    }

    fn log_text(&self) -> String {
        InternalError::log_text(self)
    }

    fn log_fields(&self) -> &LogFields {
        &self.log_fields
    }
}

/// Ordered construction pipeline for [`InternalError`].
///
/// Options are defaulted in `new`, before any later step reads them. Every
/// step is total.
struct InternalErrorBuilder {
    kind: ErrorKind,
    message: Message,
    options: Arc<Options>,
    causes: Vec<Cause>,
    out_args: Vec<Value>,
    log_args: Vec<Value>,
    log_fields: LogFields,
}

impl InternalErrorBuilder {
    fn new(kind: ErrorKind, message: Message, options: Option<Options>) -> Self {
        Self {
            kind,
            message,
            options: Arc::new(options.unwrap_or_default()),
            causes: Vec::new(),
            out_args: Vec::new(),
            log_args: Vec::new(),
            log_fields: LogFields::new(),
        }
    }

    fn causes(mut self, causes: Vec<Cause>) -> Self {
        self.causes = causes;
        self
    }

    fn out_args(mut self) -> Self {
        self.out_args = self.options.out_args.clone();
        self
    }

    fn log_args(mut self) -> Self {
        self.log_args = self.options.log_args.clone();
        self
    }

    fn log_fields(mut self) -> Self {
        self.log_fields = self.options.log_fields.clone();
        self
    }

    fn build(self) -> InternalError {
        InternalError {
            kind: self.kind,
            message: self.message,
            options: self.options,
            causes: self.causes,
            out_args: self.out_args,
            log_args: self.log_args,
            log_fields: self.log_fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlainError;
    use crate::message::MockMessageSource;
    use serde_json::json;

    fn echo_message(key: &str) -> Message {
        Message::template(key, "out:{}", "log:{}")
    }

    #[test]
    fn test_renderings_use_their_own_arguments() {
        let mut source = MockMessageSource::new();
        source
            .expect_out_text()
            .withf(|args| args.to_vec() == vec![json!("a")])
            .times(1)
            .return_const("user text".to_string());
        source
            .expect_log_text()
            .withf(|args| args.to_vec() == vec![json!("b")])
            .times(1)
            .return_const("operator text".to_string());

        let err = InternalError::internal(
            Message::new("m", source),
            Some(Options::new().with_out_arg("a").with_log_arg("b")),
            vec![],
        );

        assert_eq!(err.out_text(), "user text");
        assert_eq!(err.log_text(), "operator text");
    }

    #[test]
    fn test_changing_out_args_leaves_log_text_alone() {
        let message = echo_message("m");
        let first = InternalError::internal(
            message.clone(),
            Some(Options::new().with_out_arg("a").with_log_arg("b")),
            vec![],
        );
        let second = InternalError::internal(
            message,
            Some(Options::new().with_out_arg("z").with_log_arg("b")),
            vec![],
        );

        assert_ne!(first.out_text(), second.out_text());
        assert_eq!(first.log_text(), second.log_text());
    }

    #[test]
    fn test_missing_options_default_to_empty() {
        let err = InternalError::internal(echo_message("m"), None, vec![]);

        assert_eq!(err.options(), &Options::default());
        assert!(err.out_args().is_empty());
        assert!(err.log_args().is_empty());
        assert!(err.log_fields().is_empty());
        assert_eq!(err.out_text(), "out:{!missing 0}");
        assert_eq!(err.log_text(), "log:{!missing 0}");
    }

    #[test]
    fn test_snapshot_is_taken_at_construction() {
        let mut options = Options::new().with_out_arg("a").with_field("code", 42);
        let err = InternalError::internal(echo_message("m"), Some(options.clone()), vec![]);

        options.out_args.push(json!("late"));
        options.log_fields.insert("late".into(), json!(true));

        assert_eq!(err.out_args(), &[json!("a")]);
        assert_eq!(err.log_fields().len(), 1);
        assert_eq!(err.out_text(), "out:a");
    }

    #[test]
    fn test_scenario_internal_with_cause() {
        let cause: Cause = Arc::new(PlainError::new("socket closed"));
        let err = InternalError::internal(
            echo_message("x"),
            Some(
                Options::new()
                    .with_out_arg("a")
                    .with_log_arg("b")
                    .with_field("code", 42),
            ),
            vec![cause.clone()],
        );

        assert_eq!(err.out_text(), "out:a");
        assert_eq!(err.log_text(), "log:b");
        assert_eq!(err.log_fields().get("code"), Some(&json!(42)));
        assert_eq!(err.causes().len(), 1);
        assert!(Arc::ptr_eq(&err.causes()[0], &cause));
    }

    #[test]
    fn test_display_embeds_log_text_and_causes() {
        let err = InternalError::validation(
            echo_message("x"),
            Some(Options::new().with_out_arg("public").with_log_arg("private")),
            vec![Arc::new(PlainError::new("inner"))],
        );

        assert_eq!(
            err.to_string(),
            "<ValidationError| log:private> caused from: [<Error| inner>]"
        );
        assert!(!err.to_string().contains("public"));
    }

    #[test]
    fn test_classification_tags() {
        let internal = InternalError::internal(echo_message("m"), None, vec![]);
        let validation = InternalError::validation(echo_message("m"), None, vec![]);
        let unexpected = InternalError::unexpected(echo_message("m"), None, vec![]);

        assert_eq!(internal.kind(), ErrorKind::Internal);
        assert!(validation.is_validation() && !validation.is_unexpected());
        assert!(unexpected.is_unexpected() && !unexpected.is_validation());
        assert!(unexpected.to_string().starts_with("<UnexpectedError| "));
        assert!(internal.to_string().starts_with("<InternalError| "));
    }

    #[test]
    fn test_generic_error_object() {
        let err = InternalError::unexpected(
            echo_message("m"),
            Some(Options::new().with_out_arg(1)),
            vec![],
        );
        let generic: &dyn GenericError = &err;

        assert_eq!(generic.kind(), ErrorKind::Unexpected);
        assert_eq!(generic.out_text(), "out:1");
        assert_eq!(generic.message().key(), "m");
        assert!(generic.causes().is_empty());
    }
}
