//! W3C Referrer-Policy evaluation for HTTP clients.
//!
//! This crate computes the `Referer` header value a client should send when
//! a request goes from one URL to another:
//! - **Normalization**: URLs are reduced to a comparable form (no user info,
//!   fragment or port) with an origin, a TLS flag and a local-scheme flag
//! - **Policies**: the eight W3C policies as plain functions, plus any custom
//!   function registered under a caller-chosen identifier
//! - **Engine**: a [`Referrer`] holding the active policy and its registry
//!
//! Computing a referrer never fails. A URL that does not parse, an empty or
//! local-scheme source, or an unregistered policy all mean "no referrer".
//!
//! # Core Types
//!
//! - [`Referrer`]: the engine; [`Referrer::make`] is the entry point
//! - [`PolicyId`]: reserved W3C policies and custom identifiers
//! - [`PolicyRegistry`]: identifier to policy function mapping
//! - [`Normalizer`] / [`NormalizedUrl`]: URL normalization for custom policies
//!
//! # Examples
//!
//! ```
//! use referrer_policy::{PolicyId, Referrer, REFERER};
//!
//! let mut referrer = Referrer::new();
//! referrer.set_policy(PolicyId::STRICT_ORIGIN_WHEN_CROSS_ORIGIN);
//!
//! let mut headers = Vec::new();
//! if let Some(value) = referrer.make("https://example.com/from", "https://golang.org/to") {
//!     headers.push((REFERER, value));
//! }
//! assert_eq!(headers, vec![(REFERER, "https://example.com/".to_string())]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod header;
mod normalize;
mod policy;
pub mod policy_fn;
mod referrer;
mod registry;

pub use error::{Error, NormalizeError, NormalizeErrorKind, ParsePolicyError};
pub use header::{parse_policy_header, REFERER, REFERRER_POLICY};
pub use normalize::{
    normalize, NormalizedUrl, Normalizer, DEFAULT_LOCAL_SCHEMES, TLS_SCHEME_PREFIXES,
};
pub use policy::PolicyId;
pub use policy_fn::PolicyFn;
pub use referrer::{Referrer, ReferrerBuilder};
pub use registry::PolicyRegistry;
