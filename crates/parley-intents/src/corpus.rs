//! IntentCorpus: named intents loaded once at startup, immutable afterwards.
//!
//! An intent document is either a bare JSON array of intent records or an
//! object holding that array under `intents`. Records that fail validation
//! are skipped one by one; unreadable documents are skipped whole.

use std::collections::HashSet;
use std::path::Path;

use parley_core::errors::{CorpusLoadWarning, LoadReport};
use parley_core::models::IntentRecord;
use parley_core::text::normalize;
use parley_core::Intent;
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};

#[derive(Deserialize)]
#[serde(untagged)]
enum IntentDocument {
    List(Vec<Value>),
    Wrapped { intents: Vec<Value> },
}

/// Validated intents in declaration order (source order, then record order).
#[derive(Debug, Clone, Default)]
pub struct IntentCorpus {
    intents: Vec<Intent>,
}

impl IntentCorpus {
    /// Load every source in order. Problems are reported, never fatal.
    pub fn load<P: AsRef<Path>>(sources: &[P]) -> (Self, LoadReport) {
        let mut report = LoadReport::new();
        let mut intents = Vec::new();

        for source in sources {
            let path = source.as_ref();
            let path_str = path.display().to_string();

            if !path.exists() {
                warn!(path = %path_str, "intent source not found, skipping");
                report.add(CorpusLoadWarning::Missing { path: path_str });
                continue;
            }

            let records = match read_document(path) {
                Ok(records) => records,
                Err(message) => {
                    warn!(path = %path_str, error = %message, "malformed intent source, skipping");
                    report.add(CorpusLoadWarning::Malformed {
                        path: path_str,
                        message,
                    });
                    continue;
                }
            };

            for (index, record) in records.into_iter().enumerate() {
                match parse_record(record) {
                    Ok(intent) => intents.push(intent),
                    Err(reason) => {
                        warn!(path = %path_str, index, reason = %reason, "skipping invalid intent");
                        report.add(CorpusLoadWarning::InvalidRecord {
                            path: path_str.clone(),
                            index,
                            reason,
                        });
                    }
                }
            }
        }

        let corpus = Self { intents };
        info!(
            intents = corpus.len(),
            sources = sources.len(),
            skipped = report.warning_count(),
            "intent corpus loaded"
        );
        (corpus, report)
    }

    /// Build a corpus from already-validated intents.
    pub fn from_intents(intents: Vec<Intent>) -> Self {
        Self { intents }
    }

    /// Build a corpus from raw records, skipping the ones that fail validation.
    pub fn from_records(records: Vec<IntentRecord>) -> Self {
        let intents = records
            .into_iter()
            .filter_map(|r| validate(r).ok())
            .collect();
        Self { intents }
    }

    pub fn intents(&self) -> &[Intent] {
        &self.intents
    }

    pub fn get(&self, index: usize) -> Option<&Intent> {
        self.intents.get(index)
    }

    pub fn len(&self) -> usize {
        self.intents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }
}

fn read_document(path: &Path) -> Result<Vec<Value>, String> {
    let content = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    let document: IntentDocument = serde_json::from_str(&content).map_err(|_| {
        "expected an array of intents or an object with an `intents` array".to_string()
    })?;
    Ok(match document {
        IntentDocument::List(records) => records,
        IntentDocument::Wrapped { intents } => intents,
    })
}

fn parse_record(record: Value) -> Result<Intent, String> {
    let record: IntentRecord = serde_json::from_value(record).map_err(|e| e.to_string())?;
    validate(record)
}

/// Turn a raw record into an [`Intent`]: a name and at least one non-blank
/// response are required; keywords and patterns are normalized.
fn validate(record: IntentRecord) -> Result<Intent, String> {
    let name = record
        .name
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .ok_or_else(|| "missing intent name".to_string())?;

    let responses: Vec<String> = record
        .responses
        .into_iter()
        .filter(|r| !r.trim().is_empty())
        .collect();
    if responses.is_empty() {
        return Err(format!("intent `{name}` has no responses"));
    }

    let mut seen = HashSet::new();
    let keywords = record
        .keywords
        .iter()
        .map(|k| normalize(k.trim()).trim().to_string())
        .filter(|k| !k.is_empty() && seen.insert(k.clone()))
        .collect();

    let patterns = record
        .patterns
        .iter()
        .map(|p| normalize(p).trim().to_string())
        .filter(|p| !p.is_empty())
        .collect();

    Ok(Intent {
        name,
        keywords,
        patterns,
        responses,
        template: record.template,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: Option<&str>, keywords: &[&str], responses: &[&str]) -> IntentRecord {
        IntentRecord {
            name: name.map(String::from),
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
            patterns: vec!["Qual é o PREÇO?".into()],
            responses: responses.iter().map(|s| s.to_string()).collect(),
            template: None,
        }
    }

    #[test]
    fn validate_normalizes_and_dedupes_keywords() {
        let intent = validate(record(Some("preco"), &["Preço", "preco", " VALOR ", ""], &["R$ 10"])).unwrap();
        assert_eq!(intent.keywords, vec!["preco", "valor"]);
        assert_eq!(intent.patterns, vec!["qual e o preco"]);
    }

    #[test]
    fn validate_requires_name() {
        assert!(validate(record(None, &[], &["x"])).is_err());
        assert!(validate(record(Some("  "), &[], &["x"])).is_err());
    }

    #[test]
    fn validate_requires_a_non_blank_response() {
        let err = validate(record(Some("vazio"), &["a"], &["", "  "])).unwrap_err();
        assert!(err.contains("vazio"));
    }

    #[test]
    fn from_records_skips_invalid() {
        let corpus = IntentCorpus::from_records(vec![
            record(Some("ok"), &["a"], &["resposta"]),
            record(None, &["b"], &["resposta"]),
        ]);
        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus.get(0).unwrap().name, "ok");
    }

    #[test]
    fn document_shapes() {
        let dir = tempfile::tempdir().unwrap();
        let bare = dir.path().join("bare.json");
        let wrapped = dir.path().join("wrapped.json");
        let scalar = dir.path().join("scalar.json");
        std::fs::write(&bare, r#"[{"name": "a", "responses": ["1"]}]"#).unwrap();
        std::fs::write(&wrapped, r#"{"intents": [{"tag": "b", "responses": ["2"]}]}"#).unwrap();
        std::fs::write(&scalar, "42").unwrap();

        assert_eq!(read_document(&bare).unwrap().len(), 1);
        assert_eq!(read_document(&wrapped).unwrap().len(), 1);
        assert!(read_document(&scalar).is_err());
    }
}
