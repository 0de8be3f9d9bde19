//! The dual-indexed [`TraxelStore`].

use std::collections::BTreeMap;
use std::ops::RangeBounds;

use indexmap::{IndexMap, IndexSet};
use smallvec::SmallVec;
use traxel_core::{Timestep, Traxel, TraxelKey};

use crate::config::{DuplicatePolicy, StoreConfig};
use crate::error::StoreError;
use crate::handle::TraxelHandle;

/// Handles of all traxels at one timestep, ascending by id.
pub(crate) type Bucket = SmallVec<[TraxelHandle; 8]>;

/// Outcome of a successful [`TraxelStore::add_batch`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Number of traxels inserted.
    pub inserted: usize,
    /// Keys that collided and were skipped (only under
    /// [`DuplicatePolicy::Skip`]).
    pub skipped: Vec<TraxelKey>,
}

/// A collection of traxels indexed by timestep and by `(timestep, id)`.
///
/// The store owns its traxels. Iteration is always in canonical
/// `(timestep, id)` order regardless of insertion order.
///
/// # Examples
///
/// ```
/// use traxel_core::{FeatureMap, Traxel};
/// use traxel_store::{StoreError, TraxelStore};
///
/// let com = |x: f32| FeatureMap::new().with("center-of-mass", vec![x, 0.0, 0.0]);
///
/// let mut store = TraxelStore::new();
/// store.add(Traxel::new(7, 2, com(1.0))).unwrap();
/// store.add(Traxel::new(3, 2, com(2.0))).unwrap();
/// store.add(Traxel::new(1, 0, com(3.0))).unwrap();
///
/// // Same (timestep, id) is rejected; the original survives.
/// let err = store.add(Traxel::new(7, 2, com(99.0))).unwrap_err();
/// assert!(matches!(err, StoreError::DuplicateKey { .. }));
/// assert_eq!(store.len(), 3);
///
/// let order: Vec<String> = store.iter().map(|t| t.to_string()).collect();
/// assert_eq!(order, ["Traxel(1, 0)", "Traxel(3, 2)", "Traxel(7, 2)"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct TraxelStore {
    /// Arena of owned traxels, addressed by [`TraxelHandle`].
    slots: Vec<Traxel>,
    /// Ordered, non-unique view: timestep → handles sorted by id.
    by_timestep: BTreeMap<Timestep, Bucket>,
    /// Unique view: `(timestep, id)` → handle.
    by_time_id: IndexMap<TraxelKey, TraxelHandle>,
    config: StoreConfig,
}

impl TraxelStore {
    /// Create an empty store with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with the given configuration.
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            slots: Vec::with_capacity(config.initial_capacity),
            by_timestep: BTreeMap::new(),
            by_time_id: IndexMap::with_capacity(config.initial_capacity),
            config,
        }
    }

    /// Build a store from a traxel sequence, failing on the first duplicate.
    pub fn from_traxels<I>(traxels: I) -> Result<Self, StoreError>
    where
        I: IntoIterator<Item = Traxel>,
    {
        let mut store = Self::new();
        store.add_batch(traxels)?;
        Ok(store)
    }

    /// The configuration this store was created with.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Insert a traxel into both indices.
    ///
    /// # Errors
    ///
    /// [`StoreError::DuplicateKey`] if a traxel with the same
    /// `(timestep, id)` is already present. The store is unchanged and the
    /// existing traxel keeps its data.
    ///
    /// [`StoreError::CapacityExceeded`] once the store already holds
    /// `u32::MAX + 1` traxels.
    pub fn add(&mut self, traxel: Traxel) -> Result<TraxelHandle, StoreError> {
        let key = traxel.key();
        if self.by_time_id.contains_key(&key) {
            tracing::debug!(
                timestep = %key.timestep,
                id = %key.id,
                "rejected duplicate traxel"
            );
            return Err(StoreError::DuplicateKey { key });
        }
        self.insert_unchecked(traxel)
    }

    /// Insert many traxels, handling collisions per the configured
    /// [`DuplicatePolicy`].
    ///
    /// Under [`DuplicatePolicy::Reject`] the batch is validated first
    /// (against the store and against itself) and nothing is inserted if
    /// any key collides.
    pub fn add_batch<I>(&mut self, traxels: I) -> Result<BatchReport, StoreError>
    where
        I: IntoIterator<Item = Traxel>,
    {
        let traxels: Vec<Traxel> = traxels.into_iter().collect();
        let mut report = BatchReport::default();

        match self.config.duplicate_policy {
            DuplicatePolicy::Reject => {
                let mut seen = IndexSet::with_capacity(traxels.len());
                for t in &traxels {
                    let key = t.key();
                    if self.by_time_id.contains_key(&key) || !seen.insert(key) {
                        tracing::warn!(
                            timestep = %key.timestep,
                            id = %key.id,
                            batch_len = traxels.len(),
                            "aborting traxel batch on duplicate key"
                        );
                        return Err(StoreError::DuplicateKey { key });
                    }
                }
                let last = (self.slots.len() + traxels.len()).saturating_sub(1);
                if !traxels.is_empty() && TraxelHandle::new(last).is_none() {
                    return Err(StoreError::CapacityExceeded);
                }
                report.inserted = traxels.len();
                self.slots.reserve(traxels.len());
                for t in traxels {
                    self.insert_unchecked(t)?;
                }
            }
            DuplicatePolicy::Skip => {
                for t in traxels {
                    match self.add(t) {
                        Ok(_) => report.inserted += 1,
                        Err(StoreError::DuplicateKey { key }) => report.skipped.push(key),
                        Err(e) => return Err(e),
                    }
                }
            }
        }

        tracing::debug!(
            inserted = report.inserted,
            skipped = report.skipped.len(),
            total = self.len(),
            "added traxel batch"
        );
        Ok(report)
    }

    /// The only path that grows the store; keeps both indices in sync.
    ///
    /// Caller guarantees the key is not yet present.
    fn insert_unchecked(&mut self, traxel: Traxel) -> Result<TraxelHandle, StoreError> {
        let handle = TraxelHandle::new(self.slots.len()).ok_or(StoreError::CapacityExceeded)?;
        let key = traxel.key();
        self.slots.push(traxel);

        let slots = &self.slots;
        let bucket = self.by_timestep.entry(key.timestep).or_default();
        let pos = bucket
            .binary_search_by(|h| slots[h.index()].id.cmp(&key.id))
            .unwrap_or_else(|insert_at| insert_at);
        bucket.insert(pos, handle);

        self.by_time_id.insert(key, handle);
        Ok(handle)
    }

    /// Remove every traxel. Previously issued handles become invalid.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.by_timestep.clear();
        self.by_time_id.clear();
    }

    /// Number of traxels in the store.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the store holds no traxels.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Whether a traxel with this key is present.
    pub fn contains(&self, key: &TraxelKey) -> bool {
        self.by_time_id.contains_key(key)
    }

    /// Look up a traxel by `(timestep, id)`.
    pub fn get(&self, key: &TraxelKey) -> Option<&Traxel> {
        self.by_time_id.get(key).map(|h| &self.slots[h.index()])
    }

    /// Resolve a handle issued by this store.
    pub fn resolve(&self, handle: TraxelHandle) -> Option<&Traxel> {
        self.slots.get(handle.index())
    }

    /// Distinct timesteps present, ascending.
    pub fn timesteps(
        &self,
    ) -> impl DoubleEndedIterator<Item = Timestep> + ExactSizeIterator + '_ {
        self.by_timestep.keys().copied()
    }

    /// Smallest timestep present.
    pub fn earliest_timestep(&self) -> Result<Timestep, StoreError> {
        self.timesteps().next().ok_or(StoreError::EmptyStore)
    }

    /// Largest timestep present.
    pub fn latest_timestep(&self) -> Result<Timestep, StoreError> {
        self.timesteps().next_back().ok_or(StoreError::EmptyStore)
    }

    /// Traxels at one timestep, ascending by id.
    pub fn at_timestep(&self, timestep: Timestep) -> impl Iterator<Item = &Traxel> + '_ {
        self.by_timestep
            .get(&timestep)
            .into_iter()
            .flat_map(move |bucket| self.resolve_all(bucket))
    }

    /// Number of traxels at one timestep.
    pub fn count_at(&self, timestep: Timestep) -> usize {
        self.by_timestep.get(&timestep).map_or(0, |b| b.len())
    }

    /// Traxels whose timestep falls in `range`, in canonical order.
    pub fn range<R>(&self, range: R) -> impl Iterator<Item = &Traxel> + '_
    where
        R: RangeBounds<Timestep>,
    {
        self.by_timestep
            .range(range)
            .flat_map(move |(_, bucket)| self.resolve_all(bucket))
    }

    /// All traxels in canonical `(timestep, id)` order.
    pub fn iter(&self) -> impl Iterator<Item = &Traxel> + '_ {
        self.range(..)
    }

    /// Timestep buckets in ascending order.
    pub(crate) fn buckets(&self) -> impl Iterator<Item = (Timestep, &[TraxelHandle])> + '_ {
        self.by_timestep.iter().map(|(&t, b)| (t, b.as_slice()))
    }

    fn resolve_all<'a>(
        &'a self,
        bucket: &'a Bucket,
    ) -> impl Iterator<Item = &'a Traxel> + 'a {
        bucket.iter().map(move |h| &self.slots[h.index()])
    }

    /// Check that both indices describe exactly the arena contents.
    #[cfg(test)]
    pub(crate) fn indices_consistent(&self) -> bool {
        let ordered: usize = self.by_timestep.values().map(|b| b.len()).sum();
        ordered == self.slots.len()
            && self.by_time_id.len() == self.slots.len()
            && self
                .by_time_id
                .iter()
                .all(|(k, h)| self.slots[h.index()].key() == *k)
            && self.by_timestep.iter().all(|(t, b)| {
                !b.is_empty()
                    && b.windows(2)
                        .all(|w| self.slots[w[0].index()].id < self.slots[w[1].index()].id)
                    && b.iter().all(|h| self.slots[h.index()].timestep == *t)
            })
    }
}

impl<'a> IntoIterator for &'a TraxelStore {
    type Item = &'a Traxel;
    type IntoIter = Box<dyn Iterator<Item = &'a Traxel> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
