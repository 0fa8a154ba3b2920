use log::{debug, trace};
use once_cell::sync::Lazy;
use regex::Regex;

use super::Result;
use crate::error::MalformedExport;

static DEFAULT_EXPORT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^module\.exports[ \t\n]*=[ \t\n]*").unwrap());

static EXPORT_NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"export default (?:(?:class|const|let|var)[ \t]+|(?:async[ \t]+)?function(?:[ \t]*\*[ \t]*|[ \t]+))?([A-Za-z_$][\w$]*)",
    )
    .unwrap()
});

/// Words that can follow `export default` without naming the exported value.
const NOT_A_NAME: &[&str] = &[
    "async", "await", "class", "const", "function", "let", "new", "null", "this", "typeof",
    "var", "void", "yield", "true", "false",
];

/// Split `source` around its single top-level `module.exports =` assignment.
///
/// Returns the text before the assignment and the exported expression onwards.
pub(crate) fn split_default_export(source: &str) -> Result<(&str, &str)> {
    let matches: Vec<_> = DEFAULT_EXPORT_PATTERN.find_iter(source).collect();

    if matches.len() != 1 {
        return Err(MalformedExport::Default(matches.len()).into());
    }

    let assignment = matches[0];
    trace!(
        "Default export assignment at bytes {}..{}",
        assignment.start(),
        assignment.end()
    );

    Ok((&source[..assignment.start()], &source[assignment.end()..]))
}

/// Rewrite the single top-level `module.exports =` assignment as `export default`.
pub fn rewrite_main(source: &str) -> Result<String> {
    let (prefix, expression) = split_default_export(source)?;

    let mut output = String::with_capacity(source.len());
    output.push_str(prefix);
    output.push_str("export default ");
    output.push_str(expression);

    debug!("Rewrote `module.exports =` as `export default`");
    Ok(output)
}

/// Name bound by the first `export default [class|[async] function[*]|const] <name>` in `source`.
///
/// Returns `None` for anonymous exports such as `export default function () {}`
/// or `export default { ... }`.
pub fn default_export_name(source: &str) -> Option<&str> {
    let name = EXPORT_NAME_PATTERN.captures(source)?.get(1)?.as_str();

    if NOT_A_NAME.contains(&name) {
        return None;
    }

    Some(name)
}
