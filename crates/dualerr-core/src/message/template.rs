//! Template-backed message source

use super::format::render;
use super::source::{Message, MessageSource};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A message rendered from two positional templates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateMessage {
    /// Template for the user-facing text
    pub out: String,
    /// Template for the diagnostic text
    pub log: String,
}

impl TemplateMessage {
    /// Create a template message
    pub fn new(out: impl Into<String>, log: impl Into<String>) -> Self {
        Self {
            out: out.into(),
            log: log.into(),
        }
    }

    /// Use the same template for both renderings
    pub fn uniform(template: impl Into<String>) -> Self {
        let template = template.into();
        Self {
            out: template.clone(),
            log: template,
        }
    }

    /// Wrap into a shared message handle under `key`
    pub fn into_message(self, key: &str) -> Message {
        Message::new(key, self)
    }
}

impl MessageSource for TemplateMessage {
    fn out_text(&self, args: &[Value]) -> String {
        render(&self.out, args)
    }

    fn log_text(&self, args: &[Value]) -> String {
        render(&self.log, args)
    }
}

impl Message {
    /// Shorthand for a template-backed message
    pub fn template(key: &str, out: impl Into<String>, log: impl Into<String>) -> Self {
        TemplateMessage::new(out, log).into_message(key)
    }
}
