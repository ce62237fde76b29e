use std::{fmt, str::FromStr};

use crate::error::ParsePolicyError;

/// Identifier of a referrer policy.
///
/// Values `0..=7` are reserved for the policies defined by the W3C
/// Referrer-Policy specification and are available as associated constants.
/// Any other value may be used for a custom policy registered on a
/// [`Referrer`](crate::Referrer); avoiding collisions with the reserved
/// values is up to the caller.
///
/// # Examples
///
/// ```
/// use referrer_policy::PolicyId;
///
/// let policy: PolicyId = "strict-origin-when-cross-origin".parse().unwrap();
/// assert_eq!(policy, PolicyId::STRICT_ORIGIN_WHEN_CROSS_ORIGIN);
/// assert_eq!(policy.to_string(), "strict-origin-when-cross-origin");
///
/// const TLS_ONLY: PolicyId = PolicyId::custom(8);
/// assert!(!TLS_ONLY.is_reserved());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PolicyId(u32);

impl PolicyId {
    /// `no-referrer`
    pub const NO_REFERRER: PolicyId = PolicyId(0);
    /// `no-referrer-when-downgrade`
    pub const NO_REFERRER_WHEN_DOWNGRADE: PolicyId = PolicyId(1);
    /// `same-origin`
    pub const SAME_ORIGIN: PolicyId = PolicyId(2);
    /// `origin`
    pub const ORIGIN: PolicyId = PolicyId(3);
    /// `strict-origin`
    pub const STRICT_ORIGIN: PolicyId = PolicyId(4);
    /// `origin-when-cross-origin`
    pub const ORIGIN_WHEN_CROSS_ORIGIN: PolicyId = PolicyId(5);
    /// `strict-origin-when-cross-origin`
    pub const STRICT_ORIGIN_WHEN_CROSS_ORIGIN: PolicyId = PolicyId(6);
    /// `unsafe-url`
    pub const UNSAFE_URL: PolicyId = PolicyId(7);

    /// All reserved policies, in identifier order.
    pub const RESERVED: [PolicyId; 8] = [
        Self::NO_REFERRER,
        Self::NO_REFERRER_WHEN_DOWNGRADE,
        Self::SAME_ORIGIN,
        Self::ORIGIN,
        Self::STRICT_ORIGIN,
        Self::ORIGIN_WHEN_CROSS_ORIGIN,
        Self::STRICT_ORIGIN_WHEN_CROSS_ORIGIN,
        Self::UNSAFE_URL,
    ];

    /// Creates an identifier from a raw code.
    ///
    /// Nothing stops `code` from being one of the reserved values.
    pub const fn custom(code: u32) -> Self {
        PolicyId(code)
    }

    /// Returns the raw code.
    pub const fn code(self) -> u32 {
        self.0
    }

    /// Returns `true` for the eight W3C policies.
    pub const fn is_reserved(self) -> bool {
        self.0 <= Self::UNSAFE_URL.0
    }

    /// Returns the W3C token for a reserved policy.
    pub fn token(self) -> Option<&'static str> {
        let token = match self {
            Self::NO_REFERRER => "no-referrer",
            Self::NO_REFERRER_WHEN_DOWNGRADE => "no-referrer-when-downgrade",
            Self::SAME_ORIGIN => "same-origin",
            Self::ORIGIN => "origin",
            Self::STRICT_ORIGIN => "strict-origin",
            Self::ORIGIN_WHEN_CROSS_ORIGIN => "origin-when-cross-origin",
            Self::STRICT_ORIGIN_WHEN_CROSS_ORIGIN => "strict-origin-when-cross-origin",
            Self::UNSAFE_URL => "unsafe-url",
            _ => return None,
        };
        Some(token)
    }
}

impl Default for PolicyId {
    fn default() -> Self {
        Self::NO_REFERRER_WHEN_DOWNGRADE
    }
}

impl From<u32> for PolicyId {
    fn from(code: u32) -> Self {
        PolicyId(code)
    }
}

impl fmt::Display for PolicyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.token() {
            Some(token) => f.write_str(token),
            None => write!(f, "custom({})", self.0),
        }
    }
}

impl FromStr for PolicyId {
    type Err = ParsePolicyError;

    /// Parses a W3C policy token, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        Self::RESERVED
            .into_iter()
            .find(|id| id.token().is_some_and(|t| t.eq_ignore_ascii_case(token)))
            .ok_or_else(|| ParsePolicyError::new(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_codes_follow_declaration_order() {
        for (code, id) in PolicyId::RESERVED.iter().enumerate() {
            assert_eq!(id.code() as usize, code);
            assert!(id.is_reserved());
        }
        assert!(!PolicyId::custom(8).is_reserved());
    }

    #[test]
    fn default_is_no_referrer_when_downgrade() {
        assert_eq!(PolicyId::default(), PolicyId::NO_REFERRER_WHEN_DOWNGRADE);
    }

    #[test]
    fn tokens_round_trip_through_from_str() {
        for id in PolicyId::RESERVED {
            let token = id.token().expect("reserved ids have tokens");
            assert_eq!(token.parse::<PolicyId>().unwrap(), id);
        }
    }

    #[test]
    fn from_str_ignores_case_and_whitespace() {
        assert_eq!(
            "  Unsafe-URL ".parse::<PolicyId>().unwrap(),
            PolicyId::UNSAFE_URL
        );
    }

    #[test]
    fn from_str_rejects_unknown_tokens() {
        let err = "always".parse::<PolicyId>().unwrap_err();
        assert_eq!(err.token(), "always");
        assert!("".parse::<PolicyId>().is_err());
    }

    #[test]
    fn custom_ids_display_their_code() {
        assert_eq!(PolicyId::custom(42).to_string(), "custom(42)");
        assert_eq!(PolicyId::custom(42).token(), None);
        assert_eq!(PolicyId::from(3), PolicyId::ORIGIN);
    }
}
