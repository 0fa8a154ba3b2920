use once_cell::sync::Lazy;
use regex::Regex;

use super::{IDENTIFIER, STATEMENT_END};
use crate::types::{Declaration, DeclarationKind};

static DECLARATION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?m)^(const|let|var)[ \t]+({IDENTIFIER})(?:[ \t]*=[ \t]*(.*?))?{STATEMENT_END}"
    ))
    .unwrap()
});

/// Find every column-zero, single-name `const`/`let`/`var` statement in `source`.
///
/// Indented declarations are treated as nested and skipped. Destructuring and
/// multi-name declarations do not match.
pub fn scan_declarations(source: &str) -> Vec<Declaration> {
    DECLARATION_PATTERN
        .captures_iter(source)
        .filter_map(|cap| {
            let whole = cap.get(0)?;
            let kind = match cap.get(1)?.as_str() {
                "const" => DeclarationKind::Const,
                "let" => DeclarationKind::Let,
                _ => DeclarationKind::Var,
            };

            Some(Declaration {
                kind,
                name: cap.get(2)?.as_str().to_string(),
                value: cap.get(3).map(|m| m.as_str().to_string()),
                span: whole.range(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scans_constants() {
        let decls = scan_declarations("const a = 1\nconst b = 'two';\n");
        assert_eq!(decls.len(), 2);
        assert_eq!(decls[0].kind, DeclarationKind::Const);
        assert_eq!(decls[0].name, "a");
        assert_eq!(decls[0].value.as_deref(), Some("1"));
        assert_eq!(decls[1].value.as_deref(), Some("'two'"));
    }

    #[test]
    fn test_scans_variables_with_and_without_initializer() {
        let source = "let count\nvar total = count + 1;\n";
        let decls = scan_declarations(source);
        assert_eq!(decls.len(), 2);
        assert_eq!(decls[0].kind, DeclarationKind::Let);
        assert!(!decls[0].has_initializer());
        assert_eq!(&source[decls[0].span.clone()], "let count");
        assert_eq!(decls[1].kind, DeclarationKind::Var);
        assert_eq!(decls[1].value.as_deref(), Some("count + 1"));
    }

    #[test]
    fn test_skips_nested_and_destructured() {
        let source = "function f() {\n  const inner = 1\n}\nconst { a, b } = obj\nlet x, y\n";
        assert!(scan_declarations(source).is_empty());
    }

    #[test]
    fn test_does_not_match_longer_keywords() {
        assert!(scan_declarations("constant = 1\nletter = 2\n").is_empty());
    }

    #[test]
    fn test_allows_trailing_line_comment() {
        let source = "let count // shared\nconst limit = 10; // max\nvar total = 1 // sum\n";
        let decls = scan_declarations(source);
        assert_eq!(decls.len(), 3);
        assert_eq!(decls[0].name, "count");
        assert!(!decls[0].has_initializer());
        assert_eq!(&source[decls[0].span.clone()], "let count // shared");
        assert_eq!(decls[1].value.as_deref(), Some("10"));
        assert_eq!(decls[2].value.as_deref(), Some("1"));
    }

    #[test]
    fn test_slashes_inside_value_are_not_a_comment() {
        let decls = scan_declarations("const url = 'http://host/path'\n");
        assert_eq!(decls[0].value.as_deref(), Some("'http://host/path'"));
    }

    #[test]
    fn test_handles_crlf() {
        let decls = scan_declarations("const a = 1\r\nconst b = 2\r\n");
        assert_eq!(decls.len(), 2);
        assert_eq!(decls[0].value.as_deref(), Some("1"));
    }
}
