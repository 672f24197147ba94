//! Error taxonomy
//!
//! Leaf failures ([`PlainError`]), aggregated failures ([`WrapError`]) and
//! structured failures ([`InternalError`]) classified as `Internal`,
//! `Validation` or `Unexpected` through [`ErrorKind`].

mod conversions;
mod ext;
mod internal;
mod types;

pub use conversions::{cause, cause_from_anyhow};
pub use ext::{AggravateExt, OptionExt, ResultExt};
pub use internal::{GenericError, InternalError};
pub use types::{Cause, ErrorKind, LogFields, Options, PlainError, WrapError};
