//! Messages and their dual rendering
//!
//! A [`Message`] pairs a stable key with a [`MessageSource`] that renders an
//! outward-facing text and a diagnostic text from independent argument lists.

pub mod format;
mod source;
mod template;

pub use source::{Message, MessageSource};
pub use template::TemplateMessage;

#[cfg(test)]
pub use source::MockMessageSource;
