use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Integer(i64),
    Float(f64),
}

/// Deserialize an optional field as text.
/// Form bodies always carry strings while JSON clients tend to send numbers
/// for `duration`; both end up as the same string here.
pub fn deserialize_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<TextOrNumber> = Option::deserialize(deserializer)?;
    Ok(opt.map(|value| match value {
        TextOrNumber::Text(s) => s,
        TextOrNumber::Integer(n) => n.to_string(),
        TextOrNumber::Float(f) => f.to_string(),
    }))
}

/// Trimmed value, or `None` when the field is absent or blank.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Payload {
        #[serde(default, deserialize_with = "deserialize_optional_text")]
        value: Option<String>,
    }

    #[test]
    fn test_json_number_becomes_text() {
        let payload: Payload = serde_json::from_str(r#"{"value": 30}"#).unwrap();
        assert_eq!(payload.value.as_deref(), Some("30"));
    }

    #[test]
    fn test_json_string_kept() {
        let payload: Payload = serde_json::from_str(r#"{"value": "Running"}"#).unwrap();
        assert_eq!(payload.value.as_deref(), Some("Running"));
    }

    #[test]
    fn test_missing_and_null_are_none() {
        let payload: Payload = serde_json::from_str("{}").unwrap();
        assert!(payload.value.is_none());

        let payload: Payload = serde_json::from_str(r#"{"value": null}"#).unwrap();
        assert!(payload.value.is_none());
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(Some("  run ")), Some("run"));
        assert_eq!(non_blank(Some("   ")), None);
        assert_eq!(non_blank(Some("")), None);
        assert_eq!(non_blank(None), None);
    }
}
