//! Property tests for text normalization.

use proptest::prelude::*;

use parley_core::text::{normalize, question_key};

proptest! {
    #[test]
    fn prop_normalize_idempotent(s in "[a-zA-ZÀ-ÿ0-9 !?.,;:'\"()-]{0,40}") {
        let once = normalize(&s);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn prop_normalize_has_no_ascii_punctuation_or_uppercase(s in "[a-zA-ZÀ-ÿ0-9 !?.,;:'\"()-]{0,40}") {
        let n = normalize(&s);
        prop_assert!(!n.chars().any(|c| c.is_ascii_punctuation()));
        prop_assert!(!n.chars().any(|c| c.is_uppercase()));
    }

    #[test]
    fn prop_case_and_punctuation_insensitive(s in "[a-z ]{0,30}") {
        let shouted = format!("{}?!", s.to_uppercase());
        prop_assert_eq!(normalize(&shouted), normalize(&s));
    }

    #[test]
    fn prop_question_key_ignores_padding(s in "[a-zA-Z ]{0,30}", pad in "[ \t]{0,4}") {
        let padded = format!("{pad}{s}{pad}");
        prop_assert_eq!(question_key(&padded), question_key(&s));
    }
}

#[test]
fn accented_and_plain_forms_agree() {
    assert_eq!(normalize("Café!"), normalize("cafe"));
    assert_eq!(normalize("Horário"), "horario");
}
