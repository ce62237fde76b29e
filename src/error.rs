use std::fmt;

/// Errors that can occur in the referrer-policy crate.
///
/// Only the URL normalizer and policy-name parsing surface errors. Computing
/// a referrer never fails: problems there degrade to "no referrer".
#[derive(Debug)]
pub enum Error {
    /// A URL could not be normalized
    Normalize(NormalizeError),
    /// A policy token was not recognised
    ParsePolicy(ParsePolicyError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Normalize(e) => write!(f, "Invalid URL: {}", e),
            Error::ParsePolicy(e) => write!(f, "Invalid policy: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Normalize(e) => Some(e),
            Error::ParsePolicy(e) => Some(e),
        }
    }
}

impl From<NormalizeError> for Error {
    fn from(e: NormalizeError) -> Self {
        Error::Normalize(e)
    }
}

impl From<ParsePolicyError> for Error {
    fn from(e: ParsePolicyError) -> Self {
        Error::ParsePolicy(e)
    }
}

/// A URL string that cannot be turned into a [`NormalizedUrl`](crate::NormalizedUrl).
///
/// Every kind is an "invalid URL" as far as callers are concerned; the kind
/// only narrows down which check rejected the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeError {
    kind: NormalizeErrorKind,
    input: String,
    source: Option<url::ParseError>,
}

impl NormalizeError {
    pub(crate) fn new(kind: NormalizeErrorKind, input: impl Into<String>) -> Self {
        Self {
            kind,
            input: input.into(),
            source: None,
        }
    }

    pub(crate) fn unparsable(input: impl Into<String>, source: url::ParseError) -> Self {
        Self {
            kind: NormalizeErrorKind::Unparsable,
            input: input.into(),
            source: Some(source),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> NormalizeErrorKind {
        self.kind
    }

    /// Returns the rejected input.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for NormalizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:?})", self.kind, self.input)
    }
}

impl std::error::Error for NormalizeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Why a URL was rejected by the normalizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizeErrorKind {
    /// The string is not syntactically a URL.
    Unparsable,
    /// The string is a relative reference (no scheme).
    NotAbsolute,
    /// The URL has a scheme but no host to build an origin from.
    MissingHost,
}

impl fmt::Display for NormalizeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unparsable => write!(f, "unparsable URL"),
            Self::NotAbsolute => write!(f, "not an absolute URL"),
            Self::MissingHost => write!(f, "URL has no host"),
        }
    }
}

/// A string that is not a known Referrer-Policy token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePolicyError {
    token: String,
}

impl ParsePolicyError {
    pub(crate) fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Returns the unrecognised token.
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Display for ParsePolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown referrer policy '{}'", self.token)
    }
}

impl std::error::Error for ParsePolicyError {}
