//! Reading one QA partition: a JSON array of `{pergunta, resposta}` records.
//!
//! Problems never abort the load. A missing or unparseable file is skipped as
//! a whole; a bad record is skipped on its own.

use std::path::Path;

use parley_core::errors::{CorpusLoadWarning, LoadReport};
use parley_core::QaEntry;
use serde_json::Value;
use tracing::warn;

/// Read the valid entries of one partition, in file order.
///
/// Skipped sources and records are recorded in `report` and logged.
pub fn read_partition(path: &Path, report: &mut LoadReport) -> Vec<QaEntry> {
    let path_str = path.display().to_string();

    if !path.exists() {
        warn!(path = %path_str, "QA partition not found, skipping");
        report.add(CorpusLoadWarning::Missing { path: path_str });
        return Vec::new();
    }

    let records = match read_records(path) {
        Ok(records) => records,
        Err(message) => {
            warn!(path = %path_str, error = %message, "malformed QA partition, skipping");
            report.add(CorpusLoadWarning::Malformed {
                path: path_str,
                message,
            });
            return Vec::new();
        }
    };

    let mut entries = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        match parse_record(record) {
            Ok(entry) => entries.push(entry),
            Err(reason) => {
                warn!(path = %path_str, index, reason = %reason, "skipping invalid QA record");
                report.add(CorpusLoadWarning::InvalidRecord {
                    path: path_str.clone(),
                    index,
                    reason,
                });
            }
        }
    }
    entries
}

fn read_records(path: &Path) -> Result<Vec<Value>, String> {
    let content = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    match serde_json::from_str::<Value>(&content).map_err(|e| e.to_string())? {
        Value::Array(records) => Ok(records),
        _ => Err("expected a JSON array of records".to_string()),
    }
}

fn parse_record(record: Value) -> Result<QaEntry, String> {
    let entry: QaEntry = serde_json::from_value(record).map_err(|e| e.to_string())?;
    if entry.question.trim().is_empty() {
        return Err("empty question".to_string());
    }
    if entry.answer.trim().is_empty() {
        return Err("empty answer".to_string());
    }
    Ok(entry)
}
