//! Property tests for parley-store.

use proptest::prelude::*;

use parley_core::config::FuzzyMetric;
use parley_core::QaEntry;
use parley_store::fuzzy::{best_match, gestalt, similarity};
use parley_store::QaStore;

proptest! {
    #[test]
    fn prop_gestalt_in_unit_interval(a in "[a-z ]{0,20}", b in "[a-z ]{0,20}") {
        let r = gestalt::ratio(&a, &b);
        prop_assert!((0.0..=1.0).contains(&r));
    }

    #[test]
    fn prop_identical_scores_one(a in "[a-z ]{0,20}") {
        prop_assert_eq!(similarity(&a, &a, FuzzyMetric::Gestalt), 1.0);
        prop_assert_eq!(similarity(&a, &a, FuzzyMetric::Levenshtein), 1.0);
    }

    #[test]
    fn prop_stored_question_is_its_own_best_match(
        questions in proptest::collection::hash_set("[a-z]{3,12}", 1..8)
    ) {
        let entries: Vec<QaEntry> = questions
            .iter()
            .map(|q| QaEntry::new(q.clone(), format!("answer for {q}")))
            .collect();
        for entry in &entries {
            let m = best_match(&entry.question, &entries, FuzzyMetric::Gestalt).unwrap();
            prop_assert_eq!(m.score, 1.0);
            prop_assert_eq!(&m.answer, &entry.answer);
        }
    }

    #[test]
    fn prop_duplicate_append_leaves_size_unchanged(q in "[a-zA-Z]{1,12}") {
        let dir = tempfile::tempdir().unwrap();
        let store = QaStore::from_entries(vec![QaEntry::new(q.clone(), "x")], dir.path().join("b.json"));
        let upper = format!("{}?", q.to_uppercase());
        prop_assert!(store.append(&upper, "y").is_err());
        prop_assert_eq!(store.len(), 1);
    }
}
