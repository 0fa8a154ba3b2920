//! Error types raised by the export-rewrite engine.

use thiserror::Error;

/// An error that stops a transform. Nothing is produced when one is raised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BrowserizeError {
    /// Neither a main nor a named module was supplied.
    #[error("expected at least one input: a main module, a named exports module, or both")]
    MissingInput,

    /// A required export assignment was missing, repeated, or anonymous.
    #[error("malformed export: {0}")]
    MalformedExport(#[from] MalformedExport),

    /// A top-level constant is declared in both modules with different values.
    #[error("constant `{name}` is declared in both modules with different values")]
    DuplicateConstantConflict {
        /// The conflicting identifier.
        name: String,
    },
}

/// Why an export statement could not be rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedExport {
    /// The main module does not contain exactly one `module.exports =` line.
    #[error("expected exactly one `module.exports =` assignment in the main module, found {0}")]
    Default(usize),

    /// The named module does not contain exactly one `module.exports = {` line.
    #[error("expected exactly one grouped `module.exports = {{` assignment in the named module, found {0}")]
    Named(usize),

    /// The default export has no name to strip a self-require against.
    #[error("the default export has no identifier; anonymous default exports cannot be combined with named exports")]
    AnonymousDefault,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_problem() {
        let err = BrowserizeError::DuplicateConstantConflict {
            name: "limit".to_string(),
        };
        assert!(err.to_string().contains("`limit`"));

        let err = BrowserizeError::from(MalformedExport::Named(0));
        assert!(err.to_string().starts_with("malformed export:"));
        assert!(err.to_string().contains("found 0"));
        assert!(err.to_string().contains("`module.exports = {`"));
    }
}
