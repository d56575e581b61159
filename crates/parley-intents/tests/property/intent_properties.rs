//! Property tests for parley-intents.

use proptest::prelude::*;

use parley_core::config::IntentConfig;
use parley_core::Intent;
use parley_intents::{FirstSelector, IntentClassifier, IntentCorpus, MatchStage, TfIdfIndex};

fn intent(name: &str, keywords: Vec<String>, patterns: Vec<String>) -> Intent {
    Intent {
        name: name.into(),
        keywords,
        patterns,
        responses: vec![format!("resposta {name}")],
        template: None,
    }
}

proptest! {
    #[test]
    fn prop_similarity_in_unit_interval(
        docs in proptest::collection::vec("[a-z]{2,6}( [a-z]{2,6}){0,4}", 1..6),
        query in "[a-z ]{0,30}",
    ) {
        let examples: Vec<(String, usize)> = docs.into_iter().enumerate().map(|(i, d)| (d, i)).collect();
        let index = TfIdfIndex::fit(&examples).unwrap();
        let (_, score) = index.best(&query).unwrap();
        prop_assert!((0.0..=1.0 + 1e-9).contains(&score));
    }

    #[test]
    fn prop_keyword_beats_similarity(
        keyword in "[a-z]{4,8}",
        pattern in "[a-z]{4,8} [a-z]{4,8}",
    ) {
        prop_assume!(!pattern.contains(&keyword));
        let corpus = IntentCorpus::from_intents(vec![
            intent("vetor", Vec::new(), vec![pattern.clone()]),
            intent("chave", vec![keyword.clone()], vec!["zz".into()]),
        ]);
        let classifier = IntentClassifier::new(corpus, &IntentConfig::default())
            .with_selector(Box::new(FirstSelector));
        let m = classifier.classify(&format!("{pattern} {keyword}")).unwrap();
        prop_assert_eq!(m.intent, "chave");
        let is_keyword = matches!(m.stage, MatchStage::Keyword { .. });
        prop_assert!(is_keyword);
    }

    #[test]
    fn prop_response_is_one_of_the_intents(query in "[a-z ]{1,20}") {
        let corpus = IntentCorpus::from_intents(vec![
            intent("a", vec!["a".into()], Vec::new()),
            intent("e", vec!["e".into()], Vec::new()),
        ]);
        let classifier = IntentClassifier::new(corpus, &IntentConfig::default());
        if let Some(m) = classifier.classify(&query) {
            prop_assert_eq!(m.response, format!("resposta {}", m.intent));
        }
    }
}
