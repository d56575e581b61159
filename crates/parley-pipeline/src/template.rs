//! Response templates.

use parley_core::models::RESPONSE_PLACEHOLDER;

/// Render `response` through `template`.
///
/// Every `{resposta}` in the template is replaced. A missing template, or one
/// without the placeholder, yields the raw response.
pub fn apply_template(template: Option<&str>, response: &str) -> String {
    match template {
        Some(t) if t.contains(RESPONSE_PLACEHOLDER) => t.replace(RESPONSE_PLACEHOLDER, response),
        _ => response.to_string(),
    }
}
