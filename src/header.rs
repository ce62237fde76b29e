use crate::policy::PolicyId;

/// Name of the response header carrying a referrer policy.
pub const REFERRER_POLICY: &str = "Referrer-Policy";

/// Name of the request header carrying the computed referrer.
pub const REFERER: &str = "Referer";

/// Parses a `Referrer-Policy` header value.
///
/// The value is a comma-separated token list; the last token naming a known
/// policy wins and unknown tokens are skipped, so servers can list a
/// fallback before a newer policy. Returns `None` if no token is known.
///
/// # Examples
///
/// ```
/// use referrer_policy::{parse_policy_header, PolicyId};
///
/// assert_eq!(
///     parse_policy_header("no-referrer, strict-origin-when-cross-origin"),
///     Some(PolicyId::STRICT_ORIGIN_WHEN_CROSS_ORIGIN),
/// );
/// assert_eq!(
///     parse_policy_header("same-origin, some-future-policy"),
///     Some(PolicyId::SAME_ORIGIN),
/// );
/// assert_eq!(parse_policy_header(""), None);
/// ```
pub fn parse_policy_header(value: &str) -> Option<PolicyId> {
    value
        .split(',')
        .filter_map(|token| token.parse::<PolicyId>().ok())
        .last()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_token() {
        assert_eq!(parse_policy_header("origin"), Some(PolicyId::ORIGIN));
        assert_eq!(parse_policy_header(" Origin "), Some(PolicyId::ORIGIN));
    }

    #[test]
    fn last_known_token_wins() {
        assert_eq!(
            parse_policy_header("unsafe-url,no-referrer"),
            Some(PolicyId::NO_REFERRER)
        );
        assert_eq!(
            parse_policy_header("unsafe-url, , nonsense"),
            Some(PolicyId::UNSAFE_URL)
        );
    }

    #[test]
    fn nothing_known() {
        assert_eq!(parse_policy_header(""), None);
        assert_eq!(parse_policy_header(" , ,"), None);
        assert_eq!(parse_policy_header("never, always"), None);
    }
}
