//! The [`Traxel`] observation entity.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::LocatorError;
use crate::feature::FeatureMap;
use crate::id::{Timestep, TraxelId, TraxelKey};
use crate::locator::Locator;
use crate::position::Position;

/// One timestamped observation of a tracked object.
///
/// Identity is the `(timestep, id)` pair: ordering, equality, and hashing
/// look at nothing else, so two traxels with the same key but different
/// features compare equal. The traxel exclusively owns its [`Locator`];
/// cloning a traxel clones the locator, leaving both fully independent.
///
/// # Examples
///
/// ```
/// use traxel_core::{FeatureMap, Locator, Traxel};
///
/// let features = FeatureMap::new().with("center-of-mass", vec![1.0, 2.0, 3.0]);
/// let a = Traxel::new(1, 0, features);
/// let mut b = a.clone();
/// b.locator_mut().x_scale = 2.0;
///
/// assert_eq!(a.x().unwrap(), 1.0);
/// assert_eq!(b.x().unwrap(), 2.0);
/// assert_eq!(a, b); // same (timestep, id)
/// ```
#[derive(Clone, Debug, Default)]
pub struct Traxel {
    /// Connected component label within the timestep.
    pub id: TraxelId,
    /// Frame the observation belongs to.
    pub timestep: Timestep,
    /// Per-object feature vectors.
    pub features: FeatureMap,
    locator: Locator,
}

impl Traxel {
    /// Create a traxel with the default center-of-mass locator.
    pub fn new(id: u32, timestep: i32, features: FeatureMap) -> Self {
        Self::with_locator(id, timestep, features, Locator::default())
    }

    /// Create a traxel owning the given locator.
    pub fn with_locator(id: u32, timestep: i32, features: FeatureMap, locator: Locator) -> Self {
        Self {
            id: TraxelId(id),
            timestep: Timestep(timestep),
            features,
            locator,
        }
    }

    /// The composite `(timestep, id)` key.
    pub fn key(&self) -> TraxelKey {
        TraxelKey {
            timestep: self.timestep,
            id: self.id,
        }
    }

    /// The owned locator.
    pub fn locator(&self) -> &Locator {
        &self.locator
    }

    /// Mutable access to the owned locator (e.g. to adjust scales).
    pub fn locator_mut(&mut self) -> &mut Locator {
        &mut self.locator
    }

    /// Replace the owned locator, dropping the previous one.
    pub fn set_locator(&mut self, locator: Locator) -> &mut Self {
        self.locator = locator;
        self
    }

    /// Set all three scale factors of the owned locator.
    pub fn set_scales(&mut self, x_scale: f64, y_scale: f64, z_scale: f64) -> &mut Self {
        self.locator.x_scale = x_scale;
        self.locator.y_scale = y_scale;
        self.locator.z_scale = z_scale;
        self
    }

    /// Scaled X coordinate according to the owned locator.
    pub fn x(&self) -> Result<f64, LocatorError> {
        self.locator.x(&self.features)
    }

    /// Scaled Y coordinate according to the owned locator.
    pub fn y(&self) -> Result<f64, LocatorError> {
        self.locator.y(&self.features)
    }

    /// Scaled Z coordinate according to the owned locator.
    pub fn z(&self) -> Result<f64, LocatorError> {
        self.locator.z(&self.features)
    }

    /// All three scaled coordinates.
    pub fn position(&self) -> Result<Position, LocatorError> {
        self.locator.position(&self.features)
    }

    /// Euclidean distance between the two traxels' positions.
    ///
    /// Each side uses its own locator.
    pub fn distance_to(&self, other: &Traxel) -> Result<f64, LocatorError> {
        Ok(self.position()?.distance_to(&other.position()?))
    }

    /// Angle in radians at `self` between the rays towards `leg1` and `leg2`.
    ///
    /// Computed as `acos(v1·v2 / (|v1| |v2|))` with `vi = legi - self`.
    /// When either leg coincides with the vertex the angle is undefined
    /// and the result is `NaN`; callers must treat that as an error.
    pub fn angle(&self, leg1: &Traxel, leg2: &Traxel) -> Result<f64, LocatorError> {
        let vertex = self.position()?;
        let v1 = leg1.position()? - vertex;
        let v2 = leg2.position()? - vertex;
        let cos = v1.dot(&v2) / (v1.norm() * v2.norm());
        // Rounding can push collinear legs just outside acos' domain.
        Ok(cos.clamp(-1.0, 1.0).acos())
    }
}

impl PartialEq for Traxel {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Traxel {}

impl PartialOrd for Traxel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Traxel {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl Hash for Traxel {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for Traxel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Traxel({}, {})", self.id, self.timestep)
    }
}

/// Traxels of a single timestep keyed by id.
pub type TraxelMap = BTreeMap<TraxelId, Traxel>;

/// Collect a traxel sequence into a [`TraxelMap`].
///
/// Only the id is used as key; a later traxel with an id already present
/// replaces the earlier one.
pub fn traxel_map_from<I>(traxels: I) -> TraxelMap
where
    I: IntoIterator<Item = Traxel>,
{
    traxels.into_iter().map(|t| (t.id, t)).collect()
}
