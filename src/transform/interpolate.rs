use log::debug;
use regex::{NoExpand, Regex};
use serde_json::Value;

use crate::types::ImportBindings;

/// Pattern for `require('<path>')` or `require("<path>")` with exactly `path`.
fn require_pattern(path: &str) -> Regex {
    let path = regex::escape(path);
    // Escaped input only ever yields a valid pattern.
    Regex::new(&format!(r#"require\((?:'{path}'|"{path}")\)"#)).unwrap()
}

/// Integral floats print without a fraction (`1.0` as `1`), as in JavaScript.
fn js_number(value: &Value) -> Value {
    match value {
        Value::Number(number) => match number.as_f64() {
            Some(float)
                if !number.is_i64()
                    && !number.is_u64()
                    && float.fract() == 0.0
                    && float.abs() <= MAX_SAFE_INTEGER =>
            {
                Value::from(float as i64)
            }
            _ => value.clone(),
        },
        Value::Array(items) => Value::Array(items.iter().map(js_number).collect()),
        Value::Object(fields) => Value::Object(
            fields
                .iter()
                .map(|(key, field)| (key.clone(), js_number(field)))
                .collect(),
        ),
        _ => value.clone(),
    }
}

/// Largest integer a JavaScript number holds exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Replace each `require(path)` whose path has a binding with the bound value as a JSON literal.
///
/// Bindings are applied one after another, each across the whole text.
pub fn interpolate(source: &str, bindings: &ImportBindings) -> String {
    let mut output = source.to_string();

    for (path, value) in bindings {
        let pattern = require_pattern(path);
        let occurrences = pattern.find_iter(&output).count();

        if occurrences == 0 {
            debug!("No `require({path:?})` to interpolate");
            continue;
        }

        let literal = js_number(value).to_string();
        output = pattern
            .replace_all(&output, NoExpand(&literal))
            .into_owned();
        debug!("Interpolated {occurrences} `require({path:?})` as {literal}");
    }

    output
}
