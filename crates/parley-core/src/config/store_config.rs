use std::path::Path;

use serde::{Deserialize, Serialize};

use super::defaults;

/// QA partition layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Partition files merged at startup, in order.
    pub partitions: Vec<String>,
    /// Partition rewritten on every mutation. Defaults to the first partition.
    pub write_target: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            partitions: vec![defaults::DEFAULT_QA_PARTITION.to_string()],
            write_target: None,
        }
    }
}

impl StoreConfig {
    /// Partitions to read at startup: the configured ones, then the write
    /// target when it is not among them.
    pub fn load_order(&self) -> Vec<&str> {
        let target = self.effective_write_target();
        let mut order: Vec<&str> = self.partitions.iter().map(String::as_str).collect();
        if !order.iter().any(|p| Path::new(p) == Path::new(target)) {
            order.push(target);
        }
        order
    }

    /// The effective write target: explicit, else the first partition, else
    /// the default partition name.
    pub fn effective_write_target(&self) -> &str {
        self.write_target
            .as_deref()
            .or_else(|| self.partitions.first().map(String::as_str))
            .unwrap_or(defaults::DEFAULT_QA_PARTITION)
    }
}
