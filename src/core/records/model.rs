use serde::{Deserialize, Serialize};

/// One post from the remote list.
///
/// The record set is replaced wholesale on every fetch and never patched.
/// Unknown JSON fields (the reference endpoint also sends `userId`) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: u64,
    pub title: String,
    pub body: String,
}

impl Record {
    pub fn new(id: u64, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_ignores_extra_fields() {
        let json = r#"[{"userId": 1, "id": 7, "title": "seven", "body": "b"}]"#;
        let records: Vec<Record> = serde_json::from_str(json).unwrap();
        assert_eq!(records, vec![Record::new(7, "seven", "b")]);
    }

    #[test]
    fn test_decode_rejects_missing_title() {
        let json = r#"[{"id": 7, "body": "b"}]"#;
        assert!(serde_json::from_str::<Vec<Record>>(json).is_err());
    }
}
