//! Property tests for parley-pipeline.

use proptest::prelude::*;

use parley_core::QaEntry;
use parley_intents::IntentClassifier;
use parley_pipeline::template::apply_template;
use parley_pipeline::{ParleyEngine, ResolutionSource};
use parley_store::QaStore;

const FALLBACK: &str = "fallback";

fn empty_engine() -> ParleyEngine {
    ParleyEngine::new(
        QaStore::from_entries(Vec::new(), "unused.json"),
        IntentClassifier::empty(),
        FALLBACK,
    )
}

proptest! {
    #[test]
    fn prop_empty_corpora_always_fall_back(query in "\\PC{1,40}") {
        prop_assume!(!query.trim().is_empty());
        let r = empty_engine().resolve_detailed(&query).unwrap();
        prop_assert_eq!(r.answer, FALLBACK);
        prop_assert_eq!(r.source, ResolutionSource::Fallback);
    }

    #[test]
    fn prop_non_blank_query_always_resolves(
        questions in proptest::collection::vec("[a-z ]{1,15}", 0..5),
        query in "[a-zA-Z0-9 ?!]{1,30}",
    ) {
        prop_assume!(!query.trim().is_empty());
        let entries = questions.iter().map(|q| QaEntry::new(q.clone(), "a")).collect();
        let engine = ParleyEngine::new(
            QaStore::from_entries(entries, "unused.json"),
            IntentClassifier::empty(),
            FALLBACK,
        );
        prop_assert!(engine.resolve(&query).is_ok());
    }

    #[test]
    fn prop_stored_question_resolves_to_its_answer(q in "[a-z]{3,10}( [a-z]{3,10}){0,3}") {
        let engine = ParleyEngine::new(
            QaStore::from_entries(vec![QaEntry::new(q.clone(), "resposta")], "unused.json"),
            IntentClassifier::empty(),
            FALLBACK,
        );
        prop_assert_eq!(engine.resolve(&q.to_uppercase()).unwrap(), "resposta");
    }

    #[test]
    fn prop_template_without_placeholder_is_identity(t in "[a-z {}]{0,20}", r in "\\PC{0,20}") {
        prop_assume!(!t.contains("{resposta}"));
        prop_assert_eq!(apply_template(Some(&t), &r), r);
    }
}
