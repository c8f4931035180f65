use serde_json::Value;

pub type PostingId = i64;

/// A job posting as the rest of the core sees it.
///
/// Every field is optional: a field missing from the remote record stays
/// absent and renders as empty text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Posting {
    pub id: Option<PostingId>,
    pub date: Option<String>,
    pub position: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub link: Option<String>,
}

impl Posting {
    /// First and second space-delimited segments of the date, e.g. `("Jan", "5")`.
    pub fn date_tokens(&self) -> (String, String) {
        let mut parts = self.date.as_deref().unwrap_or_default().split(' ');
        let head = parts.next().unwrap_or_default().to_string();
        let tail = parts.next().unwrap_or_default().to_string();
        (head, tail)
    }
}

/// Map one raw remote record to a [`Posting`] by renaming its fields.
///
/// Total: anything that is not the expected shape becomes `None`.
pub fn normalize(record: &Value) -> Posting {
    Posting {
        id: record.get("id").and_then(Value::as_i64),
        date: text_field(record, "date_posted"),
        position: text_field(record, "title"),
        company: text_field(record, "company"),
        location: text_field(record, "location"),
        link: text_field(record, "job_url"),
    }
}

/// Normalize every record, one-to-one and in order.
pub fn normalize_all(records: &[Value]) -> Vec<Posting> {
    records.iter().map(normalize).collect()
}

fn text_field(record: &Value, key: &str) -> Option<String> {
    match record.get(key)? {
        Value::String(text) => Some(text.clone()),
        scalar @ (Value::Number(_) | Value::Bool(_)) => Some(scalar.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn date_tokens_split_on_single_space() {
        let posting = Posting {
            date: Some("Mar 14 2024".to_string()),
            ..Posting::default()
        };
        assert_eq!(posting.date_tokens(), ("Mar".to_string(), "14".to_string()));
    }

    #[test]
    fn date_tokens_are_empty_when_date_missing_or_short() {
        assert_eq!(
            Posting::default().date_tokens(),
            (String::new(), String::new())
        );
        let posting = Posting {
            date: Some("2024-03-14".to_string()),
            ..Posting::default()
        };
        assert_eq!(
            posting.date_tokens(),
            ("2024-03-14".to_string(), String::new())
        );
    }

    #[test]
    fn scalar_text_fields_use_their_json_text() {
        let posting = normalize(&json!({ "title": 42, "company": true, "location": null }));
        assert_eq!(posting.position.as_deref(), Some("42"));
        assert_eq!(posting.company.as_deref(), Some("true"));
        assert_eq!(posting.location, None);
    }

    #[test]
    fn non_object_record_normalizes_to_empty_posting() {
        assert_eq!(normalize(&json!(7)), Posting::default());
        assert_eq!(normalize(&json!(["id", 1])), Posting::default());
    }
}
