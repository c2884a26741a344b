//! Deserializable representation of `AppList.json`.
//!
//! The file is a flat JSON array exported from the SAP Fiori apps reference
//! library, one object per app, keyed by human-readable column titles. Every
//! column is optional: absent keys, JSON `null`, and bare `NaN` literals become
//! `None`. In the data columns (everything except name and id) the stringified
//! `"nan"`/`"none"` placeholders left by tabular exports are dropped as well, so
//! lookups never re-inspect cell contents.

use crate::catalog::identity::{AppId, SemanticAction};
use crate::error::{FioriError, LoadFailure, Result};
use crate::schema_loader::validate_app_list;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::borrow::Cow;
use std::fs;
use std::path::Path;

// Placeholders a spreadsheet export writes for an empty cell.
const EMPTY_CELL_SENTINELS: &[&str] = &["nan", "none", "null"];

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
/// One Fiori app entry. Immutable once loaded.
pub struct AppRecord {
    #[serde(rename = "App Name", default, deserialize_with = "raw_cell")]
    pub name: Option<String>,
    #[serde(rename = "App ID", default, deserialize_with = "typed_raw_cell")]
    pub id: Option<AppId>,
    #[serde(rename = "App Description", default, deserialize_with = "cell")]
    pub description: Option<String>,
    #[serde(
        rename = "Semantic Object - Action",
        default,
        deserialize_with = "typed_cell"
    )]
    pub semantic_action: Option<SemanticAction>,
    #[serde(rename = "UI Technology", default, deserialize_with = "cell")]
    pub ui_technology: Option<String>,
    #[serde(rename = "Application Component", default, deserialize_with = "cell")]
    pub component: Option<String>,
    #[serde(rename = "Technical Catalog", default, deserialize_with = "cell")]
    pub technical_catalog: Option<String>,
    #[serde(rename = "Transaction Codes", default, deserialize_with = "cell")]
    pub transaction_code: Option<String>,
    #[serde(rename = "OData Service", default, deserialize_with = "cell")]
    pub odata_service: Option<String>,
    #[serde(rename = "OData V4 Service Group", default, deserialize_with = "cell")]
    pub odata_v4_service_group: Option<String>,
}

impl AppRecord {
    /// Display form of the id; empty when the catalog has none.
    pub fn id_or_empty(&self) -> &str {
        self.id.as_ref().map(AppId::as_str).unwrap_or_default()
    }

    pub fn name_or_empty(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

/// Read and parse an app list from disk.
pub fn load_app_list_from_path(path: &Path) -> Result<Vec<AppRecord>> {
    let data = fs::read_to_string(path).map_err(|err| FioriError::catalog_load(path, err))?;
    parse_app_list(&data).map_err(|err| FioriError::catalog_load(path, err))
}

/// Parse app list JSON already held in memory.
///
/// The document must be an array of objects whose cells are scalars; anything
/// else is rejected before deserialization so the error lists every offending
/// entry at once.
pub fn parse_app_list(data: &str) -> std::result::Result<Vec<AppRecord>, LoadFailure> {
    let sanitized = replace_nan_literals(data);
    let value: Value = serde_json::from_str(&sanitized)?;
    validate_app_list(&value)?;
    let records = serde_json::from_value(value)?;
    Ok(records)
}

/// Rewrite bare `NaN` tokens (outside string literals) to `null`.
///
/// pandas writes missing cells as `NaN`, which is not valid JSON.
fn replace_nan_literals(data: &str) -> Cow<'_, str> {
    if !data.contains("NaN") {
        return Cow::Borrowed(data);
    }

    let mut out = String::with_capacity(data.len());
    let mut in_string = false;
    let mut escaped = false;
    let mut rest = data;
    while let Some(ch) = rest.chars().next() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
        } else if ch == '"' {
            in_string = true;
        } else if rest.starts_with("NaN") {
            out.push_str("null");
            rest = &rest["NaN".len()..];
            continue;
        }
        out.push(ch);
        rest = &rest[ch.len_utf8()..];
    }
    Cow::Owned(out)
}

fn normalize_cell(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty()
        || EMPTY_CELL_SENTINELS
            .iter()
            .any(|sentinel| trimmed.eq_ignore_ascii_case(sentinel))
    {
        return None;
    }
    Some(value)
}

/// Cell text as written; only absent keys and JSON `null` are empty.
///
/// Used for the name and id columns, where a placeholder-looking value such
/// as `None` is still a real app name.
fn raw_cell<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::String(text)) => text,
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::Bool(flag)) => flag.to_string(),
        Some(other) => {
            return Err(D::Error::custom(format!(
                "expected a scalar cell, found {other}"
            )));
        }
    };
    Ok(Some(raw))
}

fn typed_raw_cell<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: From<String>,
{
    Ok(raw_cell(deserializer)?.map(T::from))
}

/// Data column cell with export placeholders mapped to `None`.
fn cell<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(raw_cell(deserializer)?.and_then(normalize_cell))
}

fn typed_cell<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: From<String>,
{
    Ok(cell(deserializer)?.map(T::from))
}
