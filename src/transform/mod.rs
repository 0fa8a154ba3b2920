//! Text-to-text rewrites that turn CommonJS exports into ES module exports.
//!
//! Every step works on line-anchored patterns rather than a syntax tree and
//! insists on a single match where a single statement is expected.

mod declarations;
mod dedup;
mod interpolate;
mod main_export;
mod named_export;

pub use declarations::scan_declarations;
pub use dedup::deduplicate;
pub use interpolate::interpolate;
pub use main_export::{default_export_name, rewrite_main};
pub(crate) use main_export::split_default_export;
pub use named_export::{rewrite_named, self_require_pattern};

use crate::error::BrowserizeError;

pub type Result<T> = std::result::Result<T, BrowserizeError>;

/// A JavaScript identifier as the patterns in this module understand it.
pub(crate) const IDENTIFIER: &str = r"[A-Za-z_$][\w$]*";

/// End of a single-line statement: optional `;`, optional `//` comment, end of line.
///
/// A comment needs a `;` or whitespace before it so `//` inside a value such as
/// `'http://host'` is not taken for one.
pub(crate) const STATEMENT_END: &str = r"(?:[ \t]*;[ \t]*(?://.*)?|[ \t]+//.*)?[ \t\r]*$";
