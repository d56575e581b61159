use serde::{Deserialize, Serialize};

/// A curated question paired with its fixed answer.
///
/// Partitions on disk use the `pergunta` / `resposta` keys; `question` /
/// `answer` are accepted on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaEntry {
    #[serde(rename = "pergunta", alias = "question")]
    pub question: String,
    #[serde(rename = "resposta", alias = "answer")]
    pub answer: String,
}

impl QaEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_portuguese_keys() {
        let entry = QaEntry::new("qual o horário", "8h às 18h");
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"pergunta":"qual o horário","resposta":"8h às 18h"}"#);
    }

    #[test]
    fn accepts_english_aliases() {
        let entry: QaEntry =
            serde_json::from_str(r#"{"question": "oi", "answer": "olá"}"#).unwrap();
        assert_eq!(entry, QaEntry::new("oi", "olá"));
    }
}
