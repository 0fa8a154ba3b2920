use log::{debug, trace};
use once_cell::sync::Lazy;
use regex::Regex;

use super::Result;
use crate::error::MalformedExport;

static NAMED_EXPORT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^(?:module\.)?exports[ \t\n]*=[ \t\n]*\{").unwrap());

/// Pattern for a column-zero `const <name> = require('<path>')` statement.
///
/// The match covers the statement and an optional `;` on the same line, never
/// the line break or anything on the following lines.
pub fn self_require_pattern(name: &str) -> Regex {
    let pattern = format!(
        r#"(?m)^const[ \t]+{}[ \t]*=[ \t]*require\((?:'[^'\n]*'|"[^"\n]*")\)[ \t]*;?"#,
        regex::escape(name)
    );
    // The name is escaped, so the pattern is always valid.
    Regex::new(&pattern).unwrap()
}

/// Rewrite the single top-level `module.exports = {` assignment as `export {`.
///
/// With `strip`, the first statement it matches is removed from the result.
/// Finding nothing to strip is not an error.
pub fn rewrite_named(source: &str, strip: Option<&Regex>) -> Result<String> {
    let matches: Vec<_> = NAMED_EXPORT_PATTERN.find_iter(source).collect();

    if matches.len() != 1 {
        return Err(MalformedExport::Named(matches.len()).into());
    }

    let assignment = matches[0];
    trace!(
        "Named export assignment at bytes {}..{}",
        assignment.start(),
        assignment.end()
    );

    let mut output = String::with_capacity(source.len());
    output.push_str(&source[..assignment.start()]);
    output.push_str("export {");
    output.push_str(&source[assignment.end()..]);

    debug!("Rewrote `module.exports = {{` as `export {{`");

    let Some(strip) = strip else {
        return Ok(output);
    };

    match strip.find(&output).map(|found| found.range()) {
        Some(range) => {
            debug!("Stripped self-require `{}`", &output[range.clone()]);
            output.replace_range(range, "");
        }
        None => trace!("No self-require to strip"),
    }

    Ok(output)
}
