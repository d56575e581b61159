//! TF-IDF similarity index over labeled training examples.
//!
//! Raw term counts, smoothed IDF `ln((1 + n) / (1 + df)) + 1`, L2-normalized
//! sparse vectors. Terms the index never saw are ignored at query time.

use std::collections::HashMap;

/// Sparse L2-normalized vector: `(term id, weight)` sorted by term id.
pub type SparseVector = Vec<(usize, f64)>;

/// Split text into terms: runs of at least two alphanumeric or `_` chars.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|t| t.chars().count() >= 2)
        .collect()
}

/// A trained index. Each example keeps the label (intent index) it belongs to.
#[derive(Debug, Clone)]
pub struct TfIdfIndex {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    examples: Vec<(SparseVector, usize)>,
}

impl TfIdfIndex {
    /// Fit on `(text, label)` pairs.
    ///
    /// Returns `None` when there are no examples or none of them yields a
    /// single term, since there is no vocabulary to project queries onto.
    pub fn fit(examples: &[(String, usize)]) -> Option<Self> {
        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut df: Vec<usize> = Vec::new();

        for (text, _) in examples {
            let mut seen: Vec<usize> = Vec::new();
            for term in tokenize(text) {
                let next = vocabulary.len();
                let id = *vocabulary.entry(term.to_string()).or_insert(next);
                if id == df.len() {
                    df.push(0);
                }
                if !seen.contains(&id) {
                    seen.push(id);
                    df[id] += 1;
                }
            }
        }

        if vocabulary.is_empty() {
            return None;
        }

        let n = examples.len() as f64;
        let idf: Vec<f64> = df
            .iter()
            .map(|&d| ((1.0 + n) / (1.0 + d as f64)).ln() + 1.0)
            .collect();

        let mut index = Self {
            vocabulary,
            idf,
            examples: Vec::new(),
        };
        let vectors: Vec<(SparseVector, usize)> = examples
            .iter()
            .map(|(text, label)| (index.transform(text), *label))
            .collect();
        index.examples = vectors;
        Some(index)
    }

    /// Project `text` into the trained space.
    pub fn transform(&self, text: &str) -> SparseVector {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for term in tokenize(text) {
            if let Some(&id) = self.vocabulary.get(term) {
                *counts.entry(id).or_insert(0.0) += 1.0;
            }
        }

        let mut vector: SparseVector = counts
            .into_iter()
            .map(|(id, tf)| (id, tf * self.idf[id]))
            .collect();
        vector.sort_unstable_by_key(|(id, _)| *id);

        let norm = vector.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, w) in &mut vector {
                *w /= norm;
            }
        }
        vector
    }

    /// Label and cosine of the example most similar to `query`.
    ///
    /// The first example wins ties. A query with no known terms scores 0
    /// against every example.
    pub fn best(&self, query: &str) -> Option<(usize, f64)> {
        let q = self.transform(query);
        let mut best: Option<(usize, f64)> = None;
        for (vector, label) in &self.examples {
            let score = cosine(&q, vector);
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((*label, score));
            }
        }
        best
    }

    /// Number of indexed examples.
    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}

/// Cosine similarity of two sparse vectors. Returns 0 when either is all-zero.
fn cosine(a: &[(usize, f64)], b: &[(usize, f64)]) -> f64 {
    let (mut i, mut j) = (0, 0);
    let mut dot = 0.0;
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                dot += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }

    let mag_a = a.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
    let mag_b = b.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
    if mag_a == 0.0 || mag_b == 0.0 {
        return 0.0;
    }
    (dot / (mag_a * mag_b)).clamp(0.0, 1.0)
}
