//! Link validation for boost URLs

use once_cell::sync::Lazy;
use regex::Regex;

/// Prefix every accepted link starts with
pub const LINK_PREFIX: &str = "https://arc.net/boost/";

static BOOST_LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https://arc\.net/boost/[^\s\p{Cc}]+$").expect("boost link pattern is valid")
});

/// Check whether `candidate` is a shareable Arc boost link
///
/// Accepts `https://arc.net/boost/` followed by at least one character that
/// is neither whitespace nor a control character, since the link is copied
/// verbatim into the generated Markdown. Never fails: anything else,
/// including the empty string, is rejected.
pub fn is_valid_link(candidate: &str) -> bool {
    BOOST_LINK.is_match(candidate)
}
