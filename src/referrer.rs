use crate::{
    header::parse_policy_header,
    normalize::Normalizer,
    policy::PolicyId,
    policy_fn::PolicyFn,
    registry::PolicyRegistry,
};

/// Computes `Referer` header values under an active referrer policy.
///
/// Each instance owns its policy registry, active policy and normalizer;
/// nothing is shared between instances. Mutation takes `&mut self`, so a
/// `Referrer` shared between threads goes behind the caller's own lock.
///
/// # Examples
///
/// ```
/// use referrer_policy::{PolicyId, Referrer};
///
/// let mut referrer = Referrer::new();
/// referrer.set_policy(PolicyId::ORIGIN_WHEN_CROSS_ORIGIN);
///
/// let value = referrer.make("http://example.com/from", "http://example.com/to");
/// assert_eq!(value.as_deref(), Some("http://example.com/from"));
///
/// let value = referrer.make("http://example.com/from", "http://golang.org/to");
/// assert_eq!(value.as_deref(), Some("http://example.com/"));
/// ```
#[derive(Debug, Clone)]
pub struct Referrer {
    policy: PolicyId,
    registry: PolicyRegistry,
    normalizer: Normalizer,
}

impl Referrer {
    /// Creates an engine with the built-in policies and
    /// `no-referrer-when-downgrade` active.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Starts building a configured engine.
    pub fn builder() -> ReferrerBuilder {
        ReferrerBuilder::new()
    }

    /// Makes `policy` the active policy.
    ///
    /// The identifier does not have to be registered; [`make`](Self::make)
    /// then produces nothing until it is.
    pub fn set_policy(&mut self, policy: PolicyId) {
        tracing::debug!(from = %self.policy, to = %policy, "active referrer policy changed");
        self.policy = policy;
    }

    /// Returns the active policy.
    pub fn policy(&self) -> PolicyId {
        self.policy
    }

    /// Activates the policy named by a `Referrer-Policy` header value.
    ///
    /// Returns `false` and keeps the current policy if the value names no
    /// known policy.
    pub fn set_policy_from_header(&mut self, value: &str) -> bool {
        match parse_policy_header(value) {
            Some(policy) => {
                self.set_policy(policy);
                true
            }
            None => {
                tracing::warn!(header = value, "no recognised referrer policy in header");
                false
            }
        }
    }

    /// Installs `policy` under `id`, replacing any existing function.
    ///
    /// # Examples
    ///
    /// ```
    /// use referrer_policy::{normalize, PolicyId, Referrer};
    ///
    /// const TLS_ONLY: PolicyId = PolicyId::custom(8);
    ///
    /// let mut referrer = Referrer::new();
    /// referrer.register(TLS_ONLY, |from_url: &str, to_url: &str| {
    ///     match (normalize(from_url), normalize(to_url)) {
    ///         (Ok(from), Ok(to)) if from.is_tls() && to.is_tls() => from.origin().to_owned(),
    ///         _ => String::new(),
    ///     }
    /// });
    /// referrer.set_policy(TLS_ONLY);
    ///
    /// assert_eq!(
    ///     referrer.make("https://example.com/a", "https://golang.org/").as_deref(),
    ///     Some("https://example.com/"),
    /// );
    /// assert_eq!(referrer.make("https://example.com/a", "http://golang.org/"), None);
    /// ```
    pub fn register<F>(&mut self, id: PolicyId, policy: F)
    where
        F: Fn(&str, &str) -> String + Send + Sync + 'static,
    {
        self.registry.register(id, policy);
    }

    /// Returns the policy registry.
    pub fn registry(&self) -> &PolicyRegistry {
        &self.registry
    }

    /// Returns the policy registry for modification.
    pub fn registry_mut(&mut self) -> &mut PolicyRegistry {
        &mut self.registry
    }

    /// Returns the normalizer deciding which schemes are local.
    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Computes the referrer for a request from `from_url` to `to_url`.
    ///
    /// Returns `None` when no referrer should be sent: `from_url` is empty or
    /// uses a local scheme, the active policy is not registered, or the
    /// policy decided on no referrer (including URLs that do not parse).
    pub fn make(&self, from_url: &str, to_url: &str) -> Option<String> {
        if from_url.is_empty() {
            tracing::debug!(policy = %self.policy, "no referrer: empty source URL");
            return None;
        }

        if self.normalizer.is_local(from_url) {
            tracing::debug!(policy = %self.policy, "no referrer: local scheme");
            return None;
        }

        let Some(policy) = self.registry.lookup(self.policy) else {
            tracing::debug!(policy = %self.policy, "no referrer: policy not registered");
            return None;
        };

        let referrer = policy(from_url, to_url);
        tracing::debug!(
            policy = %self.policy,
            produced = !referrer.is_empty(),
            "referrer computed"
        );
        tracing::trace!(referrer = %referrer, to = to_url);

        if referrer.is_empty() {
            None
        } else {
            Some(referrer)
        }
    }

    /// Like [`make`](Self::make), returning the referrer and whether one was
    /// produced; the string is empty when the flag is `false`.
    pub fn make_pair(&self, from_url: &str, to_url: &str) -> (String, bool) {
        match self.make(from_url, to_url) {
            Some(referrer) => (referrer, true),
            None => (String::new(), false),
        }
    }
}

impl Default for Referrer {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`Referrer`].
///
/// # Examples
///
/// ```
/// use referrer_policy::{Normalizer, PolicyId, Referrer};
///
/// let referrer = Referrer::builder()
///     .policy(PolicyId::STRICT_ORIGIN)
///     .normalizer(Normalizer::with_local_schemes(["about", "data", "chrome"]))
///     .build();
///
/// assert_eq!(referrer.policy(), PolicyId::STRICT_ORIGIN);
/// assert_eq!(referrer.make("chrome://settings/", "https://example.com/"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReferrerBuilder {
    policy: PolicyId,
    registry: PolicyRegistry,
    normalizer: Normalizer,
}

impl ReferrerBuilder {
    /// Creates a builder with the engine defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initially active policy.
    pub fn policy(mut self, policy: PolicyId) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the normalizer used for local-scheme detection.
    pub fn normalizer(mut self, normalizer: Normalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Replaces the whole registry, e.g. with [`PolicyRegistry::empty`].
    pub fn registry(mut self, registry: PolicyRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Registers an additional policy function.
    pub fn with_policy<F>(mut self, id: PolicyId, policy: F) -> Self
    where
        F: Fn(&str, &str) -> String + Send + Sync + 'static,
    {
        self.registry.register(id, policy);
        self
    }

    /// Registers an already shared policy function.
    pub fn with_policy_arc(mut self, id: PolicyId, policy: PolicyFn) -> Self {
        self.registry.register_arc(id, policy);
        self
    }

    /// Builds the engine.
    pub fn build(self) -> Referrer {
        Referrer {
            policy: self.policy,
            registry: self.registry,
            normalizer: self.normalizer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn default_policy_is_no_referrer_when_downgrade() {
        let referrer = Referrer::new();
        assert_eq!(referrer.policy(), PolicyId::NO_REFERRER_WHEN_DOWNGRADE);
        assert_eq!(
            referrer.make("https://example.com/from", "http://example.com/to"),
            None
        );
        assert_eq!(
            referrer
                .make("https://example.com/from", "https://example.com/to")
                .as_deref(),
            Some("https://example.com/from")
        );
    }

    #[test]
    fn empty_source_produces_nothing() {
        let referrer = Referrer::builder().policy(PolicyId::UNSAFE_URL).build();
        assert_eq!(referrer.make_pair("", "http://x/"), (String::new(), false));
    }

    #[test]
    fn local_scheme_source_produces_nothing_for_every_policy() {
        let mut referrer = Referrer::new();
        for policy in PolicyId::RESERVED {
            referrer.set_policy(policy);
            assert_eq!(referrer.make("data://x/", "http://x/"), None);
            assert_eq!(referrer.make("about:blank", "http://x/"), None);
            assert_eq!(referrer.make("blob:https://x/1234", "https://x/"), None);
        }
    }

    #[test]
    fn unregistered_policy_produces_nothing() {
        let mut referrer = Referrer::new();
        referrer.set_policy(PolicyId::custom(100));
        assert_eq!(referrer.policy(), PolicyId::custom(100));
        assert_eq!(referrer.make("http://example.com/", "http://example.com/"), None);
    }

    #[test]
    fn custom_policy_is_invoked_when_active() {
        let mut referrer = Referrer::new();
        referrer.register(PolicyId::custom(8), |_: &str, _: &str| "custom".to_string());
        referrer.set_policy(PolicyId::custom(8));

        assert_eq!(
            referrer.make("http://example.com/", "http://example.com/").as_deref(),
            Some("custom")
        );

        referrer.set_policy(PolicyId::ORIGIN);
        assert_eq!(
            referrer.make("http://example.com/a", "http://golang.org/").as_deref(),
            Some("http://example.com/")
        );
    }

    #[test]
    fn set_policy_from_header_takes_last_known_token() {
        let mut referrer = Referrer::new();
        assert!(referrer.set_policy_from_header("no-referrer, unsafe-url"));
        assert_eq!(referrer.policy(), PolicyId::UNSAFE_URL);

        assert!(!referrer.set_policy_from_header("bogus"));
        assert_eq!(referrer.policy(), PolicyId::UNSAFE_URL);
    }

    #[test]
    fn builder_accepts_custom_normalizer_and_policies() {
        let shared: PolicyFn = Arc::new(|from: &str, _: &str| from.to_uppercase());
        let referrer = Referrer::builder()
            .registry(PolicyRegistry::empty())
            .with_policy(PolicyId::ORIGIN, crate::policy_fn::origin)
            .with_policy_arc(PolicyId::custom(9), shared)
            .normalizer(Normalizer::with_local_schemes(["internal"]))
            .policy(PolicyId::custom(9))
            .build();

        assert_eq!(referrer.registry().len(), 2);
        assert_eq!(referrer.make("internal://host/", "http://x/"), None);
        // data: is no longer local for this engine
        assert_eq!(
            referrer.make("data://x/", "http://x/").as_deref(),
            Some("DATA://X/")
        );
    }

    #[test]
    fn engines_are_independent() {
        let mut a = Referrer::new();
        let b = Referrer::new();
        a.register(PolicyId::NO_REFERRER_WHEN_DOWNGRADE, |_: &str, _: &str| String::new());

        let from = "http://example.com/from";
        let to = "http://example.com/to";
        assert_eq!(a.make(from, to), None);
        assert_eq!(b.make(from, to).as_deref(), Some(from));
    }

    #[test]
    fn referrer_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Referrer>();
    }
}
