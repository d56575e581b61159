//! Keyword stage: score each intent by keyword hits against the normalized query.

use std::collections::HashSet;

use parley_core::config::KeywordMatch;
use parley_core::text::tokens;
use parley_core::Intent;

/// Number of `keywords` found in `query` (already normalized).
pub fn count_hits(query: &str, keywords: &[String], mode: KeywordMatch) -> usize {
    match mode {
        KeywordMatch::Substring => keywords.iter().filter(|kw| query.contains(kw.as_str())).count(),
        KeywordMatch::Token => {
            let query_tokens: HashSet<&str> = tokens(query).into_iter().collect();
            keywords
                .iter()
                .filter(|kw| {
                    let kw_tokens = tokens(kw);
                    !kw_tokens.is_empty() && kw_tokens.iter().all(|t| query_tokens.contains(t))
                })
                .count()
        }
    }
}

/// Index and hit count of the intent with the most keyword hits.
///
/// Only a strictly greater count replaces the current best, so ties go to
/// the earlier intent. `None` when no intent has a single hit.
pub fn best_intent(query: &str, intents: &[Intent], mode: KeywordMatch) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize)> = None;
    for (index, intent) in intents.iter().enumerate() {
        let hits = count_hits(query, &intent.keywords, mode);
        if hits > best.map_or(0, |(_, h)| h) {
            best = Some((index, hits));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intent(name: &str, keywords: &[&str]) -> Intent {
        Intent {
            name: name.into(),
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
            patterns: Vec::new(),
            responses: vec!["ok".into()],
            template: None,
        }
    }

    fn kws(words: &[&str]) -> Vec<String> {
        words.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn substring_matches_inside_words() {
        assert_eq!(count_hits("oiiii tudo bem", &kws(&["oi"]), KeywordMatch::Substring), 1);
        assert_eq!(count_hits("boiada", &kws(&["oi"]), KeywordMatch::Substring), 1);
    }

    #[test]
    fn token_mode_needs_whole_tokens() {
        assert_eq!(count_hits("boiada", &kws(&["oi"]), KeywordMatch::Token), 0);
        assert_eq!(count_hits("oi tudo bem", &kws(&["oi"]), KeywordMatch::Token), 1);
    }

    #[test]
    fn token_mode_multi_word_keywords_match_in_any_order() {
        let keywords = kws(&["bom dia"]);
        assert_eq!(count_hits("dia bom pra voce", &keywords, KeywordMatch::Token), 1);
        assert_eq!(count_hits("bom pra voce", &keywords, KeywordMatch::Token), 0);
    }

    #[test]
    fn most_hits_wins() {
        let intents = vec![
            intent("saudacao", &["oi"]),
            intent("preco", &["preco", "valor"]),
        ];
        let best = best_intent("oi qual o preco e o valor", &intents, KeywordMatch::Substring);
        assert_eq!(best, Some((1, 2)));
    }

    #[test]
    fn ties_go_to_declaration_order() {
        let intents = vec![intent("a", &["loja"]), intent("b", &["loja"])];
        assert_eq!(best_intent("onde fica a loja", &intents, KeywordMatch::Substring), Some((0, 1)));
    }

    #[test]
    fn no_hits_is_none() {
        let intents = vec![intent("a", &["loja"]), intent("b", &[])];
        assert_eq!(best_intent("bom dia", &intents, KeywordMatch::Substring), None);
    }
}
