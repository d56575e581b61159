//! Text normalization shared by every matching stage.
//!
//! Lowercase → fold letters that have no decomposition (ø, æ, ß, ...) →
//! strip diacritics → drop ASCII punctuation. Whitespace is kept as-is so
//! token boundaries survive.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonicalize raw text for comparison.
///
/// Pure and idempotent: `normalize(&normalize(x)) == normalize(x)`.
///
/// ```
/// use parley_core::text::normalize;
///
/// assert_eq!(normalize("Qual é o horário?"), "qual e o horario");
/// assert_eq!(normalize("Café!"), normalize("cafe"));
/// ```
pub fn normalize(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());
    for c in text.to_lowercase().chars() {
        match fold_letter(c) {
            Some(ascii) => folded.push_str(ascii),
            None => folded.push(c),
        }
    }
    folded
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .nfc()
        .filter(|c| !c.is_ascii_punctuation())
        .collect()
}

/// Latin letters that NFD leaves whole, mapped to their plain spelling.
/// Input is already lowercase.
fn fold_letter(c: char) -> Option<&'static str> {
    let ascii = match c {
        'ø' => "o",
        'æ' => "ae",
        'œ' => "oe",
        'ß' => "ss",
        'đ' | 'ð' => "d",
        'ł' => "l",
        'þ' => "th",
        'ı' => "i",
        'ħ' => "h",
        'ŧ' => "t",
        _ => return None,
    };
    Some(ascii)
}

/// Whitespace tokens of already-normalized text.
pub fn tokens(normalized: &str) -> Vec<&str> {
    normalized.split_whitespace().collect()
}

/// Key used for question uniqueness: normalized, surrounding whitespace trimmed.
pub fn question_key(question: &str) -> String {
    normalize(question.trim()).trim().to_string()
}
