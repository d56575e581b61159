//! Fuzzy QA matching: best stored question for a query.
//!
//! Both sides are normalized before scoring. One pass over the store per
//! query, so cost grows with store size × question length; fine for tens to
//! low hundreds of entries.

pub mod gestalt;

use parley_core::config::FuzzyMetric;
use parley_core::text::normalize;
use parley_core::QaEntry;

/// The highest-scoring stored question for a query.
#[derive(Debug, Clone, PartialEq)]
pub struct FuzzyMatch {
    /// Position of the entry in store order.
    pub index: usize,
    pub score: f64,
    pub question: String,
    pub answer: String,
}

/// Similarity of two already-normalized strings in [0, 1].
///
/// `candidate` is the stored question, `query` the incoming text. The
/// gestalt ratio is not perfectly symmetric, so argument order is fixed.
pub fn similarity(candidate: &str, query: &str, metric: FuzzyMetric) -> f64 {
    match metric {
        FuzzyMetric::Gestalt => gestalt::ratio(candidate, query),
        FuzzyMetric::Levenshtein => strsim::normalized_levenshtein(candidate, query),
    }
}

/// Score every entry against `query` and return the best one, regardless of
/// threshold. The first entry in store order wins ties.
pub fn best_match(query: &str, entries: &[QaEntry], metric: FuzzyMetric) -> Option<FuzzyMatch> {
    let query = normalize(query);
    let mut best: Option<(usize, f64)> = None;

    for (index, entry) in entries.iter().enumerate() {
        let score = similarity(&normalize(&entry.question), &query, metric);
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((index, score));
        }
    }

    best.map(|(index, score)| FuzzyMatch {
        index,
        score,
        question: entries[index].question.clone(),
        answer: entries[index].answer.clone(),
    })
}

/// Best match only if it reaches `threshold` (inclusive).
pub fn match_above(
    query: &str,
    entries: &[QaEntry],
    threshold: f64,
    metric: FuzzyMetric,
) -> Option<FuzzyMatch> {
    best_match(query, entries, metric).filter(|m| m.score >= threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> Vec<QaEntry> {
        vec![
            QaEntry::new("qual o horario", "8h as 18h"),
            QaEntry::new("onde fica a loja", "Rua A, 10"),
            QaEntry::new("aceita cartao", "Sim"),
        ]
    }

    #[test]
    fn exact_question_scores_one() {
        let m = best_match("Onde fica a loja?", &store(), FuzzyMetric::Gestalt).unwrap();
        assert_eq!(m.index, 1);
        assert!((m.score - 1.0).abs() < 1e-12);
    }

    #[test]
    fn accented_query_matches_plain_question() {
        let m = match_above("Qual é o horário?", &store(), 0.85, FuzzyMetric::Gestalt).unwrap();
        assert_eq!(m.answer, "8h as 18h");
        assert!((m.score - 28.0 / 30.0).abs() < 1e-12);
    }

    #[test]
    fn below_threshold_is_no_match() {
        assert!(match_above("previsao do tempo", &store(), 0.6, FuzzyMetric::Gestalt).is_none());
    }

    #[test]
    fn empty_store_has_no_best_match() {
        assert!(best_match("oi", &[], FuzzyMetric::Gestalt).is_none());
    }

    #[test]
    fn ties_go_to_first_in_store_order() {
        let entries = vec![
            QaEntry::new("Aceita cartão?", "primeira"),
            QaEntry::new("aceita cartao", "segunda"),
        ];
        let m = best_match("aceita cartao", &entries, FuzzyMetric::Gestalt).unwrap();
        assert_eq!(m.answer, "primeira");
    }

    #[test]
    fn levenshtein_metric_is_selectable() {
        let score = similarity("kitten", "sitting", FuzzyMetric::Levenshtein);
        assert!((score - (1.0 - 3.0 / 7.0)).abs() < 1e-12);
    }
}
