//! Shared types for the transform engine.

use std::ops::Range;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Statically known values keyed by the exact `require(...)` path they replace.
pub type ImportBindings = IndexMap<String, Value>;

/// Everything one `browserize` call works on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrowserizeInput {
    /// Source of the module whose `module.exports = <expr>` becomes `export default`.
    pub main: Option<String>,
    /// Source of the module whose `module.exports = { ... }` becomes `export { ... }`.
    pub named: Option<String>,
    /// Values substituted for matching `require(path)` calls.
    #[serde(default)]
    pub imports: ImportBindings,
}

impl BrowserizeInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_main(mut self, source: impl Into<String>) -> Self {
        self.main = Some(source.into());
        self
    }

    pub fn with_named(mut self, source: impl Into<String>) -> Self {
        self.named = Some(source.into());
        self
    }

    pub fn with_import(mut self, path: impl Into<String>, value: Value) -> Self {
        self.imports.insert(path.into(), value);
        self
    }
}

/// Keyword a top-level declaration was made with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    Const,
    Let,
    Var,
}

impl DeclarationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclarationKind::Const => "const",
            DeclarationKind::Let => "let",
            DeclarationKind::Var => "var",
        }
    }

    /// `let` and `var` bind mutable names that merge into one binding.
    pub fn is_variable(&self) -> bool {
        matches!(self, DeclarationKind::Let | DeclarationKind::Var)
    }
}

impl std::fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single-line, column-zero `const`/`let`/`var` statement found by scanning text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub kind: DeclarationKind,
    pub name: String,
    /// Initializer text, without the trailing semicolon.
    pub value: Option<String>,
    /// Byte range of the statement line, excluding its line break.
    pub span: Range<usize>,
}

impl Declaration {
    pub fn has_initializer(&self) -> bool {
        self.value.is_some()
    }
}
