//! Convert CommonJS modules into an ES module.
//!
//! A main module's `module.exports = <expr>` becomes `export default <expr>`,
//! a named module's `module.exports = { ... }` becomes `export { ... }`, and
//! when both are given they are merged into one body:
//!
//! ```
//! use browserize::{browserize, BrowserizeInput};
//!
//! let input = BrowserizeInput::new()
//!     .with_main("module.exports = function Foo(){}\n")
//!     .with_named("const Foo = require('./foo')\nmodule.exports = {\n  bar,\n}\n");
//!
//! assert_eq!(
//!     browserize(&input).unwrap(),
//!     "export default function Foo(){}\n\n;;\n\nexport {\n  bar,\n}\n"
//! );
//! ```

pub mod cli;
pub mod config;
mod engine;
pub mod error;
pub mod files;
pub mod transform;
pub mod types;

pub use engine::{browserize, MODULE_SEPARATOR};
pub use error::{BrowserizeError, MalformedExport};
pub use types::{BrowserizeInput, Declaration, DeclarationKind, ImportBindings};
