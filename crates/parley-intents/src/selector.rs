//! Response selectors.

use parley_core::traits::IResponseSelector;
use rand::seq::SliceRandom;

/// Uniform random choice. Varied phrasing is intended.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomSelector;

impl IResponseSelector for RandomSelector {
    fn select<'a>(&self, responses: &'a [String]) -> Option<&'a str> {
        responses
            .choose(&mut rand::thread_rng())
            .map(String::as_str)
    }

    fn name(&self) -> &str {
        "random"
    }
}

/// Always the first response.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstSelector;

impl IResponseSelector for FirstSelector {
    fn select<'a>(&self, responses: &'a [String]) -> Option<&'a str> {
        responses.first().map(String::as_str)
    }

    fn name(&self) -> &str {
        "first"
    }
}
