//! Normalization of Politics & War API response envelopes.
//!
//! The API is not consistent about where a result list lives. Paginated queries return
//! `{"data": {"wars": {"data": [..], "paginatorInfo": {..}}}}`, some endpoints and proxies return
//! the list directly under the field (`{"data": {"wars": [..]}}`), and some omit the outer `data`
//! wrapper entirely. Every shape is reduced to a [`Page`] before anything downstream sees it.

use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;

use crate::server::error::pnw::{truncate_body, ExternalSourceError};

/// Top-level GraphQL response.
#[derive(Deserialize, Debug)]
struct GraphQlResponse {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Option<Value>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
struct PaginatorInfo {
    #[serde(default)]
    has_more_pages: bool,
}

/// A list result either wrapped with pagination info or returned bare.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum Listing {
    Paginated {
        data: Option<Vec<Value>>,
        #[serde(rename = "paginatorInfo", default)]
        paginator_info: Option<PaginatorInfo>,
    },
    Flat(Vec<Value>),
}

/// A list entry identified by an `id` field.
pub trait ListEntry: DeserializeOwned {
    /// Builds an entry carrying nothing but `id`.
    ///
    /// Stands in for an entry whose other fields could not be decoded, so the entry keeps its
    /// identity and is rejected later by validation.
    fn from_id(id: String) -> Self;
}

/// One page of a normalized list result.
#[derive(Debug)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Number of undecodable entries kept by their ID alone
    pub partial: usize,
    /// Number of undecodable entries without a readable ID, dropped entirely
    pub dropped: usize,
    pub has_more_pages: bool,
}

/// Extracts the list under `field` from a raw response body.
///
/// A present, non-empty `errors` array fails the whole response. An entry that fails to decode
/// never fails the page: it is kept as [`ListEntry::from_id`] when its `id` is readable and
/// dropped otherwise.
pub fn parse_page<T: ListEntry>(field: &str, body: &str) -> Result<Page<T>, ExternalSourceError> {
    let response: GraphQlResponse =
        serde_json::from_str(body).map_err(|e| ExternalSourceError::decode(e, body))?;

    if let Some(errors) = response.errors.filter(has_errors) {
        return Err(ExternalSourceError::GraphQl {
            body: truncate_body(&errors.to_string()),
        });
    }

    let container = match response.data {
        Some(Value::Null) | None => {
            // No `data` wrapper, the field may sit at the top level
            serde_json::from_str::<Value>(body).map_err(|e| ExternalSourceError::decode(e, body))?
        }
        Some(data) => data,
    };

    let listing = match container.get(field) {
        None | Some(Value::Null) => {
            return Err(ExternalSourceError::decode(
                format!("response has no `{}` field", field),
                body,
            ))
        }
        Some(value) => Listing::deserialize(value)
            .map_err(|e| ExternalSourceError::decode(e, body))?,
    };

    let (values, has_more_pages) = match listing {
        Listing::Paginated {
            data,
            paginator_info,
        } => (
            data.unwrap_or_default(),
            paginator_info.map(|p| p.has_more_pages).unwrap_or(false),
        ),
        Listing::Flat(values) => (values, false),
    };

    let mut items = Vec::with_capacity(values.len());
    let mut partial = 0;
    let mut dropped = 0;

    for value in values {
        let id = entry_id(&value);

        match serde_json::from_value::<T>(value) {
            Ok(item) => items.push(item),
            Err(e) => match id {
                Some(id) => {
                    tracing::warn!(
                        "Keeping only the ID of undecodable `{}` entry {}: {}",
                        field,
                        id,
                        e
                    );
                    items.push(T::from_id(id));
                    partial += 1;
                }
                None => {
                    tracing::warn!("Dropping undecodable `{}` entry: {}", field, e);
                    dropped += 1;
                }
            },
        }
    }

    Ok(Page {
        items,
        partial,
        dropped,
        has_more_pages,
    })
}

/// Reads an entry's `id` when it is a string or a number.
fn entry_id(value: &Value) -> Option<String> {
    match value.get("id")? {
        Value::String(id) if !id.trim().is_empty() => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}

fn has_errors(errors: &Value) -> bool {
    match errors {
        Value::Null => false,
        Value::Array(errors) => !errors.is_empty(),
        _ => true,
    }
}

/// Deserializes a value the API may send as a string, a number or null into `Option<String>`.
pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected a string or number, found {}",
            other
        ))),
    }
}
