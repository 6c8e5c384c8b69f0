//! Conversion between quote timestamps and their wire representation.

use crate::constants::DATE_FORMAT;
use chrono::NaiveDateTime;

/// Parse a wire timestamp.
///
/// Returns `None` for empty input or input that does not match the format exactly.
pub fn parse_wire_date(value: &str) -> Option<NaiveDateTime> {
    if value.is_empty() {
        return None;
    }
    NaiveDateTime::parse_from_str(value, DATE_FORMAT).ok()
}

/// Render a timestamp in the wire format
pub fn format_wire_date(date: &NaiveDateTime) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Serde adapter for `Option<NaiveDateTime>` fields stored in the wire format
pub mod wire_date_option {
    use super::{format_wire_date, parse_wire_date};
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => serializer.serialize_some(&format_wire_date(date)),
            None => serializer.serialize_none(),
        }
    }

    /// Unparseable values deserialize to `None`
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(parse_wire_date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_wire_date() {
        let date = parse_wire_date("2013-05-08T00:00:00").unwrap();
        let expected = NaiveDate::from_ymd_opt(2013, 5, 8)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(date, expected);
    }

    #[test]
    fn test_parse_rejects_other_formats() {
        assert_eq!(parse_wire_date(""), None);
        assert_eq!(parse_wire_date("2013-05-08"), None);
        assert_eq!(parse_wire_date("08/05/2013 00:00:00"), None);
        assert_eq!(parse_wire_date("2013-05-08T00:00:00Z"), None);
        assert_eq!(parse_wire_date("2013-13-40T00:00:00"), None);
    }

    #[test]
    fn test_format_matches_parse() {
        let raw = "2016-11-23T17:42:09";
        let date = parse_wire_date(raw).unwrap();
        assert_eq!(format_wire_date(&date), raw);
    }
}
