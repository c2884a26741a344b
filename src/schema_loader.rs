//! Shape check for app list documents.
//!
//! The JSON Schema in `schema/app_list.schema.json` is embedded at build time
//! and compiled on each load. Catalog loading runs once per process, so the
//! compiled validator is not cached.

use crate::error::LoadFailure;
use jsonschema::JSONSchema;
use serde_json::Value;

const APP_LIST_SCHEMA: &str = include_str!("../schema/app_list.schema.json");

// Large exports can fail on thousands of rows; report the first few.
const MAX_REPORTED_VIOLATIONS: usize = 10;

/// Parse and compile the embedded app list schema.
pub(crate) fn compile_app_list_schema() -> Result<JSONSchema, LoadFailure> {
    let schema: Value = serde_json::from_str(APP_LIST_SCHEMA)
        .map_err(|err| LoadFailure::Shape(format!("embedded app list schema is invalid: {err}")))?;
    JSONSchema::compile(&schema)
        .map_err(|err| LoadFailure::Shape(format!("compiling app list schema: {err}")))
}

/// Validate a parsed document against the app list schema.
///
/// Every violation (up to a cap) is reported with its JSON pointer so a broken
/// export can be fixed in one pass.
pub(crate) fn validate_app_list(document: &Value) -> Result<(), LoadFailure> {
    let schema = compile_app_list_schema()?;
    let Err(errors) = schema.validate(document) else {
        return Ok(());
    };

    let violations: Vec<String> = errors
        .map(|err| {
            let pointer = err.instance_path.to_string();
            let location = if pointer.is_empty() { "/" } else { pointer.as_str() };
            format!("{location}: {err}")
        })
        .collect();

    let mut details = violations
        .iter()
        .take(MAX_REPORTED_VIOLATIONS)
        .cloned()
        .collect::<Vec<_>>()
        .join("\n");
    if violations.len() > MAX_REPORTED_VIOLATIONS {
        details.push_str(&format!(
            "\n... and {} more",
            violations.len() - MAX_REPORTED_VIOLATIONS
        ));
    }
    Err(LoadFailure::Shape(details))
}
