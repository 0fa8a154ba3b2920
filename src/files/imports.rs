use anyhow::{anyhow, Context, Result};
use indexmap::IndexMap;
use log::debug;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use crate::transform::split_default_export;
use crate::types::ImportBindings;

/// Locate an import file the way `require` would: as given, then with `.js`, then `.json`.
fn locate(path: &Path) -> Option<PathBuf> {
    if path.is_file() {
        return Some(path.to_path_buf());
    }

    ["js", "json"].iter().find_map(|extension| {
        let mut name = path.as_os_str().to_os_string();
        name.push(".");
        name.push(extension);
        let candidate = PathBuf::from(name);
        candidate.is_file().then_some(candidate)
    })
}

/// Load the JSON-representable value a file exports.
///
/// `.json` files are parsed whole. Other files must assign a JSON literal with a
/// single top-level `module.exports =`.
pub fn resolve_import_value(path: &Path) -> Result<Value> {
    let file = locate(path).ok_or_else(|| anyhow!("Import file not found: {}", path.display()))?;
    let content =
        fs::read_to_string(&file).with_context(|| format!("Failed to read {}", file.display()))?;

    let literal = if file.extension().is_some_and(|ext| ext == "json") {
        content.as_str()
    } else {
        let (_, expression) = split_default_export(&content)
            .with_context(|| format!("Cannot find the exported value of {}", file.display()))?;
        expression.trim_end().trim_end_matches(';').trim_end()
    };

    serde_json::from_str(literal)
        .with_context(|| format!("Exported value of {} is not a JSON literal", file.display()))
}

/// Resolve every specifier's file into the value substituted for it.
pub fn resolve_imports(imports: &IndexMap<String, PathBuf>) -> Result<ImportBindings> {
    imports
        .iter()
        .map(|(specifier, path)| {
            let value = resolve_import_value(path)
                .with_context(|| format!("Failed to resolve import {specifier:?}"))?;
            debug!("Resolved import {specifier:?} from {}", path.display());
            Ok((specifier.clone(), value))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_resolves_json_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("constant.json");
        fs::write(&path, "{ \"answer\": 42 }\n").unwrap();

        assert_eq!(resolve_import_value(&path).unwrap(), json!({ "answer": 42 }));
    }

    #[test]
    fn test_resolves_module_export_literal() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("constant.js"), "module.exports = 42;\n").unwrap();

        let value = resolve_import_value(&temp.path().join("constant")).unwrap();
        assert_eq!(value, json!(42));
    }

    #[test]
    fn test_falls_back_to_json_extension() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("list.json"), "[1, 2]").unwrap();

        let value = resolve_import_value(&temp.path().join("list")).unwrap();
        assert_eq!(value, json!([1, 2]));
    }

    #[test]
    fn test_rejects_non_literal_export() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("fn.js");
        fs::write(&path, "module.exports = () => 42\n").unwrap();

        let err = resolve_import_value(&path).unwrap_err();
        assert!(format!("{err:#}").contains("not a JSON literal"));
    }

    #[test]
    fn test_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = resolve_import_value(&temp.path().join("nowhere")).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_resolve_imports_keeps_specifiers() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.json"), "\"first\"").unwrap();
        fs::write(temp.path().join("b.js"), "module.exports = true\n").unwrap();

        let mut imports = IndexMap::new();
        imports.insert("./a".to_string(), temp.path().join("a.json"));
        imports.insert("./b".to_string(), temp.path().join("b"));

        let bindings = resolve_imports(&imports).unwrap();
        assert_eq!(bindings.get("./a"), Some(&json!("first")));
        assert_eq!(bindings.get("./b"), Some(&json!(true)));
    }
}
