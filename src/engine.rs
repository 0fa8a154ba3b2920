//! Combines the rewrite steps into the single `browserize` entry point.

use log::{debug, info};

use crate::error::{BrowserizeError, MalformedExport};
use crate::transform::{
    deduplicate, default_export_name, interpolate, rewrite_main, rewrite_named,
    self_require_pattern, Result,
};
use crate::types::BrowserizeInput;

/// Placed between the default export and the named exports of a combined module.
pub const MODULE_SEPARATOR: &str = "\n;;\n";

/// Turn CommonJS sources into one ES module body.
///
/// - main and named: the main body comes first, then [`MODULE_SEPARATOR`], then
///   the named body with its self-require stripped and shared declarations
///   deduplicated.
/// - only one of them: that body rewritten on its own.
///
/// Import bindings are interpolated into whatever results.
pub fn browserize(input: &BrowserizeInput) -> Result<String> {
    let body = match (input.main.as_deref(), input.named.as_deref()) {
        (Some(main), Some(named)) => combine(main, named)?,
        (Some(main), None) => {
            debug!("Rewriting main module only");
            rewrite_main(main)?
        }
        (None, Some(named)) => {
            debug!("Rewriting named exports module only");
            rewrite_named(named, None)?
        }
        (None, None) => return Err(BrowserizeError::MissingInput),
    };

    Ok(interpolate(&body, &input.imports))
}

fn combine(main: &str, named: &str) -> Result<String> {
    let main_out = rewrite_main(main)?;
    let name = default_export_name(&main_out).ok_or(MalformedExport::AnonymousDefault)?;
    info!("Combining default export `{name}` with named exports");

    let strip = self_require_pattern(name);
    let named_out = rewrite_named(named, Some(&strip))?;
    let deduped = deduplicate(&named_out, &main_out)?;

    Ok(format!("{main_out}{MODULE_SEPARATOR}{deduped}"))
}
