//! Built-in referrer policy functions.
//!
//! Each function takes the raw `from` and `to` URLs and returns the referrer
//! to send, or an empty string for "send no referrer". A URL that fails to
//! normalize never produces an error here, it produces an empty string.
//!
//! See <https://www.w3.org/TR/referrer-policy/>.

use std::sync::Arc;

use crate::normalize::{normalize, NormalizedUrl};

/// A referrer policy as a function value.
///
/// Called with `(from_url, to_url)`; returns the referrer, empty for none.
/// Implementations must be pure: no I/O and no shared mutable state.
pub type PolicyFn = Arc<dyn Fn(&str, &str) -> String + Send + Sync>;

fn parse(raw: &str) -> Option<NormalizedUrl> {
    match normalize(raw) {
        Ok(url) => Some(url),
        Err(e) => {
            tracing::trace!(error = %e, "URL rejected, no referrer");
            None
        }
    }
}

fn parse_pair(from_url: &str, to_url: &str) -> Option<(NormalizedUrl, NormalizedUrl)> {
    Some((parse(from_url)?, parse(to_url)?))
}

/// `no-referrer`: never send a referrer.
pub fn no_referrer(_from_url: &str, _to_url: &str) -> String {
    String::new()
}

/// `unsafe-url`: always send the full URL, whatever the destination.
pub fn unsafe_url(from_url: &str, _to_url: &str) -> String {
    parse(from_url)
        .map(NormalizedUrl::into_string)
        .unwrap_or_default()
}

/// `no-referrer-when-downgrade`: full URL unless leaving TLS.
pub fn no_referrer_when_downgrade(from_url: &str, to_url: &str) -> String {
    let Some((from, to)) = parse_pair(from_url, to_url) else {
        return String::new();
    };

    if from.is_downgrade_to(&to) {
        return String::new();
    }
    from.into_string()
}

/// `same-origin`: full URL for same-origin requests, nothing otherwise.
pub fn same_origin(from_url: &str, to_url: &str) -> String {
    let Some((from, to)) = parse_pair(from_url, to_url) else {
        return String::new();
    };

    if from.same_origin(&to) {
        return from.into_string();
    }
    String::new()
}

/// `origin`: always the origin, even on downgrade.
pub fn origin(from_url: &str, _to_url: &str) -> String {
    parse(from_url)
        .map(|from| from.origin().to_owned())
        .unwrap_or_default()
}

/// `strict-origin`: the origin unless leaving TLS.
pub fn strict_origin(from_url: &str, to_url: &str) -> String {
    let Some((from, to)) = parse_pair(from_url, to_url) else {
        return String::new();
    };

    if from.is_downgrade_to(&to) {
        return String::new();
    }
    from.origin().to_owned()
}

/// `origin-when-cross-origin`: full URL same-origin, origin cross-origin.
pub fn origin_when_cross_origin(from_url: &str, to_url: &str) -> String {
    let Some((from, to)) = parse_pair(from_url, to_url) else {
        return String::new();
    };

    if from.same_origin(&to) {
        return from.into_string();
    }
    from.origin().to_owned()
}

/// `strict-origin-when-cross-origin`: nothing when leaving TLS, otherwise
/// full URL same-origin and origin cross-origin.
pub fn strict_origin_when_cross_origin(from_url: &str, to_url: &str) -> String {
    let Some((from, to)) = parse_pair(from_url, to_url) else {
        return String::new();
    };

    // downgrade wins over same-origin
    if from.is_downgrade_to(&to) {
        return String::new();
    }
    if from.same_origin(&to) {
        return from.into_string();
    }
    from.origin().to_owned()
}
