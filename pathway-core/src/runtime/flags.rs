use arc_swap::ArcSwap;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Arc;

/// Selects the strict RFC 3986 canonicalizer when enabled (the default) or
/// the legacy decode-once canonicalizer when disabled.
pub const RFC_3986_CANONICALIZER: &str = "pathway.rfc_3986_canonicalizer";

static GLOBAL_FLAGS: Lazy<Arc<FeatureFlags>> = Lazy::new(|| Arc::new(FeatureFlags::new()));

/// The process-wide flag store.
///
/// Embedders that need a scoped store (tests, per-tenant overrides) build
/// their own [`FeatureFlags`] and pass it down instead.
pub fn feature_flags() -> Arc<FeatureFlags> {
    GLOBAL_FLAGS.clone()
}

/// Named boolean flags with registered defaults.
///
/// Reads load an immutable snapshot without locking. Writers build a new
/// snapshot offline and swap it in, so a reader racing a reload sees either
/// the old map or the new one, never a mix. Callers that read a flag more
/// than once per operation must read it once and hold the value.
#[derive(Debug)]
pub struct FeatureFlags {
    snapshot: ArcSwap<HashMap<String, bool>>,
}

impl FeatureFlags {
    /// A store holding every known flag at its default value.
    pub fn new() -> Self {
        let mut defaults = HashMap::new();
        defaults.insert(RFC_3986_CANONICALIZER.to_string(), true);

        Self {
            snapshot: ArcSwap::from_pointee(defaults),
        }
    }

    /// Current value of a flag. Unknown names read as disabled.
    pub fn is_enabled(&self, name: &str) -> bool {
        self.snapshot.load().get(name).copied().unwrap_or(false)
    }

    /// Overrides a single flag. Last writer wins.
    pub fn set(&self, name: &str, enabled: bool) {
        self.apply([(name.to_string(), enabled)]);
    }

    /// Applies a batch of overrides as one snapshot swap.
    pub fn apply<I>(&self, overrides: I)
    where
        I: IntoIterator<Item = (String, bool)>,
    {
        // Build the new snapshot OFFLINE.
        let current = self.snapshot.load_full();
        let mut next: HashMap<String, bool> = (*current).clone();

        for (name, enabled) in overrides {
            tracing::info!(flag = %name, enabled, "feature flag override");
            next.insert(name, enabled);
        }

        // Atomic swap (point of no return).
        self.snapshot.store(Arc::new(next));
    }
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self::new()
    }
}
