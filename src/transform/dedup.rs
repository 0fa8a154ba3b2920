//! Declaration deduplication for combined modules.
//!
//! When the named body is appended to the main body both share one module
//! scope. Constants repeated verbatim are dropped from the named body, constants
//! repeated with a different value are a conflict, and `let`/`var` names already
//! declared by the main body are collapsed to assignments or dropped.
//!
//! The lookup in the main body is textual: a declaration anywhere in it counts,
//! whatever scope it sits in.

use std::collections::{HashMap, HashSet};
use std::ops::Range;

use log::{debug, trace};
use once_cell::sync::Lazy;
use regex::Regex;

use super::{scan_declarations, Result, IDENTIFIER, STATEMENT_END};
use crate::error::BrowserizeError;
use crate::types::{Declaration, DeclarationKind};

static CONSTANT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?m)\bconst[ \t]+({IDENTIFIER})[ \t]*=[ \t]*(.*?){STATEMENT_END}"
    ))
    .unwrap()
});

static VARIABLE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"\b(?:let|var)[ \t]+({IDENTIFIER})")).unwrap());

/// Names the main body declares, wherever they appear in it.
#[derive(Debug, Default)]
struct MainBindings {
    constants: HashMap<String, Vec<String>>,
    variables: HashSet<String>,
}

impl MainBindings {
    fn scan(main: &str) -> Self {
        let mut bindings = Self::default();

        for cap in CONSTANT_PATTERN.captures_iter(main) {
            bindings
                .constants
                .entry(cap[1].to_string())
                .or_default()
                .push(cap[2].to_string());
        }

        for cap in VARIABLE_PATTERN.captures_iter(main) {
            bindings.variables.insert(cap[1].to_string());
        }

        trace!(
            "Main body declares {} constants and {} variables",
            bindings.constants.len(),
            bindings.variables.len()
        );
        bindings
    }

    fn constant_values(&self, name: &str) -> Option<&[String]> {
        self.constants.get(name).map(Vec::as_slice)
    }

    fn declares_variable(&self, name: &str) -> bool {
        self.variables.contains(name)
    }
}

/// One change to the named body: replace `range` with `text`.
struct Edit {
    range: Range<usize>,
    text: String,
}

/// Remove or adapt top-level declarations in `named` that `main` already makes.
///
/// Fails with [`BrowserizeError::DuplicateConstantConflict`] when a constant is
/// declared in both bodies with different value text.
pub fn deduplicate(named: &str, main: &str) -> Result<String> {
    let bindings = MainBindings::scan(main);
    let declarations = scan_declarations(named);

    let mut edits = constant_edits(named, &declarations, &bindings)?;
    edits.extend(variable_edits(named, &declarations, &bindings));
    edits.sort_by_key(|edit| edit.range.start);

    Ok(apply_edits(named, &edits))
}

fn constant_edits(
    named: &str,
    declarations: &[Declaration],
    bindings: &MainBindings,
) -> Result<Vec<Edit>> {
    let mut edits = Vec::new();

    for decl in declarations
        .iter()
        .filter(|d| d.kind == DeclarationKind::Const)
    {
        let Some(value) = decl.value.as_deref() else {
            continue;
        };
        let Some(main_values) = bindings.constant_values(&decl.name) else {
            continue;
        };

        if main_values.iter().any(|v| v == value) {
            debug!("Removing constant `{}` already declared by the main body", decl.name);
            edits.push(Edit {
                range: with_line_break(named, &decl.span),
                text: String::new(),
            });
        } else {
            return Err(BrowserizeError::DuplicateConstantConflict {
                name: decl.name.clone(),
            });
        }
    }

    Ok(edits)
}

fn variable_edits(named: &str, declarations: &[Declaration], bindings: &MainBindings) -> Vec<Edit> {
    declarations
        .iter()
        .filter(|d| d.kind.is_variable() && bindings.declares_variable(&d.name))
        .map(|decl| {
            if decl.has_initializer() {
                debug!("Collapsing `{} {}` into an assignment", decl.kind, decl.name);
                let statement = &named[decl.span.clone()];
                Edit {
                    range: decl.span.clone(),
                    text: statement[decl.kind.as_str().len()..].trim_start().to_string(),
                }
            } else {
                debug!("Removing placeholder `{} {}`", decl.kind, decl.name);
                Edit {
                    range: with_line_break(named, &decl.span),
                    text: String::new(),
                }
            }
        })
        .collect()
}

/// Extend a statement span over the line break that ends it.
fn with_line_break(text: &str, span: &Range<usize>) -> Range<usize> {
    let rest = &text[span.end..];
    let end = if rest.starts_with("\r\n") {
        span.end + 2
    } else if rest.starts_with('\n') {
        span.end + 1
    } else {
        span.end
    };
    span.start..end
}

/// Apply non-overlapping edits sorted by start offset.
fn apply_edits(text: &str, edits: &[Edit]) -> String {
    let mut output = String::with_capacity(text.len());
    let mut cursor = 0;

    for edit in edits {
        output.push_str(&text[cursor..edit.range.start]);
        output.push_str(&edit.text);
        cursor = edit.range.end;
    }

    output.push_str(&text[cursor..]);
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_removes_identical_constant() {
        let main = "const path = require('path')\nexport default function Foo(){}\n";
        let named = "const path = require('path')\nconst own = 1\nexport { own }\n";

        let output = deduplicate(named, main).unwrap();
        assert_eq!(output, "const own = 1\nexport { own }\n");
    }

    #[test]
    fn test_identical_constant_ignores_semicolon() {
        let main = "const limit = 10;\n";
        let named = "const limit = 10\nexport { limit }\n";

        let output = deduplicate(named, main).unwrap();
        assert_eq!(output, "export { limit }\n");
    }

    #[test]
    fn test_conflicting_constant_is_an_error() {
        let main = "const limit = 10\n";
        let named = "const limit = 20\nexport { limit }\n";

        let err = deduplicate(named, main).unwrap_err();
        assert_eq!(
            err,
            BrowserizeError::DuplicateConstantConflict {
                name: "limit".to_string()
            }
        );
    }

    #[test]
    fn test_constant_only_in_named_is_kept() {
        let main = "const other = 1\n";
        let named = "const limit = 20\nexport { limit }\n";

        assert_eq!(deduplicate(named, main).unwrap(), named);
    }

    #[test]
    fn test_constant_nested_in_main_still_counts() {
        let main = "function f() {\n  const limit = 10\n}\n";
        let named = "const limit = 20\n";

        assert!(deduplicate(named, main).is_err());
    }

    #[test]
    fn test_variable_with_initializer_becomes_assignment() {
        let main = "let state\n";
        let named = "let state = load();\nexport { state }\n";

        let output = deduplicate(named, main).unwrap();
        assert_eq!(output, "state = load();\nexport { state }\n");
    }

    #[test]
    fn test_placeholder_variable_is_removed() {
        let main = "var cache = {}\n";
        let named = "var cache\nlet fresh\nexport { cache, fresh }\n";

        let output = deduplicate(named, main).unwrap();
        assert_eq!(output, "let fresh\nexport { cache, fresh }\n");
    }

    #[test]
    fn test_commented_placeholder_variable_is_removed() {
        let main = "let count\nexport default function Foo(){}\n";
        let named = "let count // shared\nexport { count }\n";

        let output = deduplicate(named, main).unwrap();
        assert_eq!(output, "export { count }\n");
    }

    #[test]
    fn test_constant_comparison_ignores_trailing_comments() {
        let main = "const limit = 10 // max\n";
        let named = "const limit = 10; // same\nexport { limit }\n";

        assert_eq!(deduplicate(named, main).unwrap(), "export { limit }\n");
    }

    #[test]
    fn test_let_and_var_are_interchangeable() {
        let main = "var count = 0\n";
        let named = "let count = 1\n";

        assert_eq!(deduplicate(named, main).unwrap(), "count = 1\n");
    }

    #[test]
    fn test_variable_name_must_match_exactly() {
        let main = "let counter\n";
        let named = "let count = 1\n";

        assert_eq!(deduplicate(named, main).unwrap(), named);
    }

    #[test]
    fn test_indented_named_declarations_are_left_alone() {
        let main = "const limit = 10\nlet state\n";
        let named = "function f() {\n  const limit = 20\n  let state = 1\n}\n";

        assert_eq!(deduplicate(named, main).unwrap(), named);
    }

    #[test]
    fn test_both_passes_apply_together() {
        let main = "const a = 1\nlet b\n";
        let named = "const a = 1\nlet b\nlet b = 2\nconst c = 3\n";

        let output = deduplicate(named, main).unwrap();
        assert_eq!(output, "b = 2\nconst c = 3\n");
    }

    #[test]
    fn test_last_line_without_line_break() {
        let main = "const a = 1\n";
        let named = "export { a }\nconst a = 1";

        assert_eq!(deduplicate(named, main).unwrap(), "export { a }\n");
    }
}
