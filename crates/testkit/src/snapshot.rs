//! Golden JSON snapshots for layout tests.
//!
//! Values are written as canonical pretty JSON (object keys sorted) so the
//! files diff cleanly. Tests compare against the file on disk; rerun with
//! `CARDLAYOUT_UPDATE_SNAPSHOTS=1` to rewrite them.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Environment variable that enables snapshot updates.
pub const UPDATE_SNAPSHOTS_ENV: &str = "CARDLAYOUT_UPDATE_SNAPSHOTS";

/// Assert that `value` matches the JSON snapshot stored at `path`.
///
/// With `CARDLAYOUT_UPDATE_SNAPSHOTS=1` the file is (re)written from `value`
/// instead of compared.
pub fn assert_json_snapshot<P: AsRef<Path>, T: Serialize>(path: P, value: &T) -> Result<()> {
    let path = path.as_ref();
    let actual = canonical_json(value)?;

    if should_update_snapshots() {
        write_snapshot(path, &actual)?;
        return Ok(());
    }

    let expected = fs::read_to_string(path).with_context(|| {
        format!(
            "Snapshot missing at {} (run with {}=1 to create/update)",
            path.display(),
            UPDATE_SNAPSHOTS_ENV
        )
    })?;

    // Compare parsed values; whitespace and `25` vs `25.0` are not differences.
    let expected_value: Value = serde_json::from_str(&expected)
        .with_context(|| format!("Snapshot at {} is not valid JSON", path.display()))?;
    let actual_value: Value = serde_json::from_str(&actual)?;
    if !json_eq(&expected_value, &actual_value) {
        tracing::warn!(path = %path.display(), "layout snapshot mismatch");
        anyhow::bail!(
            "Snapshot mismatch at {} (run with {}=1 to update)\n--- expected\n{}\n--- actual\n{}",
            path.display(),
            UPDATE_SNAPSHOTS_ENV,
            expected.trim_end(),
            actual.trim_end()
        );
    }

    Ok(())
}

fn should_update_snapshots() -> bool {
    matches!(
        std::env::var(UPDATE_SNAPSHOTS_ENV).as_deref(),
        Ok("1") | Ok("true") | Ok("TRUE") | Ok("yes") | Ok("YES")
    )
}

fn write_snapshot(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create snapshot directory {}", parent.display()))?;
    }
    fs::write(path, contents)
        .with_context(|| format!("Failed to write snapshot {}", path.display()))
}

fn canonical_json<T: Serialize>(value: &T) -> Result<String> {
    let value = serde_json::to_value(value).context("Failed to serialize snapshot value")?;
    let value = canonicalize_value(value);
    let mut s = serde_json::to_string_pretty(&value).context("Failed to format snapshot JSON")?;
    s.push('\n');
    Ok(s)
}

/// Structural equality that treats numbers by value (`25` == `25.0`) and
/// tolerates float noise below 1e-4.
fn json_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => (x - y).abs() <= 1e-4 * x.abs().max(1.0),
            _ => x == y,
        },
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| json_eq(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(k, x)| ys.get(k).is_some_and(|y| json_eq(x, y)))
        }
        (x, y) => x == y,
    }
}

fn canonicalize_value(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            let mut out = serde_json::Map::with_capacity(entries.len());
            for (k, v) in entries {
                out.insert(k, canonicalize_value(v));
            }
            Value::Object(out)
        }
        Value::Array(values) => Value::Array(values.into_iter().map(canonicalize_value).collect()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn canonical_json_sorts_keys() {
        let s = canonical_json(&json!({"b": 1, "a": {"d": 2, "c": 3}})).unwrap();
        let a = s.find("\"a\"").unwrap();
        let b = s.find("\"b\"").unwrap();
        let c = s.find("\"c\"").unwrap();
        let d = s.find("\"d\"").unwrap();
        assert!(a < b && c < d);
        assert!(s.ends_with('\n'));
    }

    #[test]
    fn numbers_compare_by_value() {
        assert!(json_eq(&json!({"x": 25}), &json!({"x": 25.0})));
        assert!(json_eq(&json!([82.22222]), &json!([82.222_23])));
        assert!(!json_eq(&json!({"x": 25}), &json!({"x": 26})));
        assert!(!json_eq(&json!({"x": 1}), &json!({"x": 1, "y": 2})));
    }
}
