use crate::utils::date::{format_wire_date, wire_date_option};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single quote as served by the API.
///
/// `tags` is always materialized, empty when the server sent none.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quote {
    pub id: String,
    pub value: String,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default, with = "wire_date_option")]
    pub date: Option<NaiveDateTime>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Quote {
    pub fn new(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
            ..Self::default()
        }
    }

    pub fn with_source_url(mut self, source_url: impl Into<String>) -> Self {
        self.source_url = Some(source_url.into());
        self
    }

    pub fn with_date(mut self, date: NaiveDateTime) -> Self {
        self.date = Some(date);
        self
    }

    /// Appends after any existing tags
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn source_url(&self) -> Option<&str> {
        self.source_url.as_deref()
    }

    /// The date in the wire format, if known
    pub fn formatted_date(&self) -> Option<String> {
        self.date.as_ref().map(format_wire_date)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
