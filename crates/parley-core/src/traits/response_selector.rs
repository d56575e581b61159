/// Picks one response out of an intent's candidate list.
///
/// Production uses uniform random choice for varied phrasing; tests inject a
/// deterministic selector.
pub trait IResponseSelector: Send + Sync {
    /// Choose a response. Returns `None` only for an empty list.
    fn select<'a>(&self, responses: &'a [String]) -> Option<&'a str>;

    /// Selector name, for logging.
    fn name(&self) -> &str;
}
