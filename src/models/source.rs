//! Catalog search response records.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{AppError, Result};

/// One item as returned by the catalog search API.
///
/// Every field is optional; absent and `null` values both deserialize to
/// `None` or an empty list. Scalars of the wrong JSON type are taken as
/// text rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRecord {
    #[serde(default, deserialize_with = "string_scalar")]
    pub id: Option<String>,

    #[serde(default, deserialize_with = "string_scalar")]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "string_scalar")]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "string_scalar")]
    pub dimensions: Option<String>,

    #[serde(default, deserialize_with = "string_list")]
    pub language: Vec<String>,

    #[serde(default, deserialize_with = "string_list")]
    pub creator: Vec<String>,

    #[serde(default, deserialize_with = "string_scalar")]
    pub publisher: Option<String>,

    #[serde(default, deserialize_with = "string_list")]
    pub subject: Vec<String>,

    #[serde(default, deserialize_with = "string_list")]
    pub date_created: Vec<String>,

    #[serde(default, deserialize_with = "string_list")]
    pub city: Vec<String>,

    #[serde(default, deserialize_with = "string_list")]
    pub state: Vec<String>,

    #[serde(default, deserialize_with = "string_list")]
    pub country: Vec<String>,

    #[serde(default, deserialize_with = "string_list")]
    pub continent: Vec<String>,

    #[serde(default, deserialize_with = "string_list")]
    pub region: Vec<String>,

    /// CONTENTdm collection alias
    #[serde(default, deserialize_with = "string_scalar")]
    pub set_spec: Option<String>,

    /// CONTENTdm pointer of the compound object
    #[serde(default, deserialize_with = "parent_id")]
    pub parent_id: Option<ParentId>,

    #[serde(default, deserialize_with = "string_scalar")]
    pub thumb_url: Option<String>,

    #[serde(default, deserialize_with = "string_scalar")]
    pub system_identifier: Option<String>,

    #[serde(default, deserialize_with = "string_scalar")]
    pub local_rights: Option<String>,
}

/// `parent_id` arrives as either a JSON number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParentId {
    Number(i64),
    Text(String),
}

impl ParentId {
    /// Decimal text form, `None` for a blank string.
    pub fn to_text(&self) -> Option<String> {
        match self {
            ParentId::Number(n) => Some(n.to_string()),
            ParentId::Text(s) if s.trim().is_empty() => None,
            ParentId::Text(s) => Some(s.clone()),
        }
    }
}

/// Parse a search response body into records.
///
/// The endpoint answers with a bare array of records; Solr-style wrappers
/// carrying the array under `docs` or `items` are accepted as well.
pub fn parse_search_response(body: &[u8]) -> Result<Vec<SourceRecord>> {
    let items = match serde_json::from_slice::<Value>(body)? {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("docs").or_else(|| map.remove("items")) {
            Some(Value::Array(items)) => items,
            Some(other) => {
                return Err(AppError::response(format!(
                    "record list is a {}, not an array",
                    json_type(&other)
                )));
            }
            None => {
                return Err(AppError::response(
                    "object has neither a 'docs' nor an 'items' array",
                ));
            }
        },
        other => {
            return Err(AppError::response(format!(
                "expected an array or object, got a {}",
                json_type(&other)
            )));
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).map_err(|e| AppError::invalid_record(index, e))
        })
        .collect()
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Text form of a scalar. Lists are joined with "; "; objects have none.
fn value_text(value: Value) -> Option<String> {
    match value {
        Value::Null | Value::Object(_) => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(items) => {
            let parts: Vec<String> = items.into_iter().filter_map(value_text).collect();
            (!parts.is_empty()).then(|| parts.join("; "))
        }
    }
}

/// Accept a string, number, boolean, list, or null as optional text.
fn string_scalar<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(value_text))
}

/// Accept a list of scalars, a lone scalar, or null.
fn string_list<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(Value::Array(items)) => items.into_iter().filter_map(value_text).collect(),
        Some(other) => value_text(other).into_iter().collect(),
    })
}

/// Integers, integral floats and strings; anything else is treated as absent.
fn parent_id<'de, D>(deserializer: D) -> std::result::Result<Option<ParentId>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => Some(match n.as_i64() {
            Some(i) => ParentId::Number(i),
            None => match n.as_f64() {
                Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
                    ParentId::Number(f as i64)
                }
                _ => ParentId::Text(n.to_string()),
            },
        }),
        Some(Value::String(s)) => Some(ParentId::Text(s)),
        _ => None,
    })
}
