//! Store configuration parameters.

/// What [`TraxelStore::add_batch`](crate::TraxelStore::add_batch) does when
/// an incoming traxel collides with an existing `(timestep, id)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Abort the whole batch before inserting anything.
    #[default]
    Reject,
    /// Insert the non-colliding traxels and report the skipped keys.
    Skip,
}

/// Configuration for a [`TraxelStore`](crate::TraxelStore).
///
/// Single-traxel [`add`](crate::TraxelStore::add) always rejects
/// duplicates; the policy only governs batch inserts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    /// Number of traxels to pre-allocate room for.
    ///
    /// Default: 0.
    pub initial_capacity: usize,

    /// Duplicate handling for batch inserts.
    ///
    /// Default: [`DuplicatePolicy::Reject`].
    pub duplicate_policy: DuplicatePolicy,
}

impl StoreConfig {
    /// Default pre-allocation.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 0;

    /// Create a config pre-sized for `initial_capacity` traxels.
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            duplicate_policy: DuplicatePolicy::default(),
        }
    }

    /// Builder-style setter for the duplicate policy.
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INITIAL_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rejects_duplicates() {
        let config = StoreConfig::default();
        assert_eq!(config.initial_capacity, 0);
        assert_eq!(config.duplicate_policy, DuplicatePolicy::Reject);
    }

    #[test]
    fn builder_sets_policy() {
        let config = StoreConfig::new(128).with_duplicate_policy(DuplicatePolicy::Skip);
        assert_eq!(config.initial_capacity, 128);
        assert_eq!(config.duplicate_policy, DuplicatePolicy::Skip);
    }
}
