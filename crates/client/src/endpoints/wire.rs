//! Response bodies as sent by the API, and their mapping to domain values.
//!
//! Every quote field is optional on the wire. A missing or wrong-typed field
//! leaves the value unset instead of failing the whole quote.

use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;
use tracing::trace;
use tronald_core::{parse_wire_date, Quote};

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct WireQuote {
    #[serde(default, deserialize_with = "lenient_string")]
    pub quote_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub value: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub appeared_at: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub tags: Option<Vec<Value>>,
    #[serde(default, rename = "_embedded", deserialize_with = "lenient")]
    pub embedded: Option<WireQuoteEmbedded>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct WireQuoteEmbedded {
    #[serde(default, deserialize_with = "lenient")]
    pub source: Option<Vec<Value>>,
}

/// Decode `T`, or `None` when the value has another shape
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Strings as is, numbers and booleans in their JSON text form, anything else `None`
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        value @ (Value::Number(_) | Value::Bool(_)) => Some(value.to_string()),
        _ => None,
    })
}

impl From<WireQuote> for Quote {
    fn from(wire: WireQuote) -> Self {
        let source_url = wire
            .embedded
            .and_then(|embedded| embedded.source)
            .and_then(|sources| sources.into_iter().next())
            .and_then(|source| source.get("url").and_then(Value::as_str).map(str::to_string));

        let date = wire.appeared_at.as_deref().and_then(|raw| {
            let parsed = parse_wire_date(raw);
            if parsed.is_none() && !raw.is_empty() {
                trace!(appeared_at = %raw, "Unparseable quote date, leaving it unset");
            }
            parsed
        });

        let tags = wire
            .tags
            .unwrap_or_default()
            .into_iter()
            .filter_map(|tag| match tag {
                Value::String(tag) => Some(tag),
                _ => None,
            })
            .collect();

        Quote {
            id: wire.quote_id.unwrap_or_default(),
            value: wire.value.unwrap_or_default(),
            source_url,
            date,
            tags,
        }
    }
}

/// Body of `/tags`
#[derive(Debug, Deserialize)]
pub(crate) struct WireTags {
    #[serde(rename = "_embedded")]
    pub embedded: Vec<String>,
}

/// Body of `/search/quote`
#[derive(Debug, Deserialize)]
pub(crate) struct WireSearchResult {
    #[serde(default)]
    pub total: Option<i64>,
    #[serde(default, rename = "_embedded")]
    pub embedded: Option<WireSearchEmbedded>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireSearchEmbedded {
    #[serde(default)]
    pub quotes: Option<Vec<WireQuote>>,
}

impl WireSearchResult {
    pub fn into_parts(self) -> (Vec<Quote>, i64) {
        let quotes = self
            .embedded
            .and_then(|embedded| embedded.quotes)
            .unwrap_or_default()
            .into_iter()
            .map(Quote::from)
            .collect();
        (quotes, self.total.unwrap_or(0))
    }
}
