use std::{collections::HashMap, fmt, sync::Arc};

use crate::{
    policy::PolicyId,
    policy_fn::{self, PolicyFn},
};

/// Mapping from [`PolicyId`] to the function implementing it.
///
/// A new registry holds the eight W3C policies. Registering under an
/// existing identifier replaces the previous function, reserved ones
/// included; lookups never fail, they return `None`.
///
/// # Examples
///
/// ```
/// use referrer_policy::{PolicyId, PolicyRegistry};
///
/// let mut registry = PolicyRegistry::new();
/// registry.register(PolicyId::custom(8), |from: &str, _to: &str| from.to_owned());
///
/// let policy = registry.lookup(PolicyId::custom(8)).unwrap();
/// assert_eq!(policy("http://a.example/", "http://b.example/"), "http://a.example/");
/// assert_eq!(registry.len(), 9);
/// ```
#[derive(Clone)]
pub struct PolicyRegistry {
    policies: HashMap<PolicyId, PolicyFn>,
}

impl PolicyRegistry {
    /// Creates a registry holding the built-in policies.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(PolicyId::NO_REFERRER, policy_fn::no_referrer);
        registry.register(
            PolicyId::NO_REFERRER_WHEN_DOWNGRADE,
            policy_fn::no_referrer_when_downgrade,
        );
        registry.register(PolicyId::SAME_ORIGIN, policy_fn::same_origin);
        registry.register(PolicyId::ORIGIN, policy_fn::origin);
        registry.register(PolicyId::STRICT_ORIGIN, policy_fn::strict_origin);
        registry.register(
            PolicyId::ORIGIN_WHEN_CROSS_ORIGIN,
            policy_fn::origin_when_cross_origin,
        );
        registry.register(
            PolicyId::STRICT_ORIGIN_WHEN_CROSS_ORIGIN,
            policy_fn::strict_origin_when_cross_origin,
        );
        registry.register(PolicyId::UNSAFE_URL, policy_fn::unsafe_url);
        registry
    }

    /// Creates a registry with no policies at all.
    pub fn empty() -> Self {
        Self {
            policies: HashMap::new(),
        }
    }

    /// Installs `policy` under `id`, replacing whatever was there.
    pub fn register<F>(&mut self, id: PolicyId, policy: F)
    where
        F: Fn(&str, &str) -> String + Send + Sync + 'static,
    {
        self.register_arc(id, Arc::new(policy));
    }

    /// Installs an already shared policy function under `id`.
    pub fn register_arc(&mut self, id: PolicyId, policy: PolicyFn) {
        if self.policies.insert(id, policy).is_some() {
            tracing::debug!(policy = %id, "referrer policy replaced");
        }
    }

    /// Returns the function registered under `id`.
    pub fn lookup(&self, id: PolicyId) -> Option<&PolicyFn> {
        self.policies.get(&id)
    }

    /// Removes the function registered under `id`, returning whether one existed.
    pub fn remove(&mut self, id: PolicyId) -> bool {
        self.policies.remove(&id).is_some()
    }

    /// Returns `true` if a function is registered under `id`.
    pub fn contains(&self, id: PolicyId) -> bool {
        self.policies.contains_key(&id)
    }

    /// Returns the number of registered policies.
    pub fn len(&self) -> usize {
        self.policies.len()
    }

    /// Returns `true` if no policy is registered.
    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }

    /// Returns the registered identifiers in ascending order.
    pub fn ids(&self) -> Vec<PolicyId> {
        let mut ids: Vec<_> = self.policies.keys().copied().collect();
        ids.sort();
        ids
    }
}

impl Default for PolicyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PolicyRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.ids()).finish()
    }
}
