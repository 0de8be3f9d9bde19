//! Strongly-typed identifiers for observations.

use std::fmt;

/// Identifies a segmented object within one timestep (its connected
/// component label).
///
/// Ids are only unique per timestep; the same id at two timesteps is two
/// unrelated observations unless a tracker links them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TraxelId(pub u32);

impl fmt::Display for TraxelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for TraxelId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Frame index of an observation in the image sequence.
///
/// Signed so that sequences may start before zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timestep(pub i32);

impl Timestep {
    /// The following timestep, or `None` past `i32::MAX`.
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for Timestep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for Timestep {
    fn from(v: i32) -> Self {
        Self(v)
    }
}

/// Composite `(timestep, id)` identity of a traxel.
///
/// Field order makes the derived `Ord` the canonical traxel order: by
/// timestep first, then by id.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TraxelKey {
    /// Frame of the observation.
    pub timestep: Timestep,
    /// Object label within that frame.
    pub id: TraxelId,
}

impl TraxelKey {
    /// Build a key from raw values.
    pub fn new(timestep: i32, id: u32) -> Self {
        Self {
            timestep: Timestep(timestep),
            id: TraxelId(id),
        }
    }
}

impl fmt::Display for TraxelKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(t={}, id={})", self.timestep, self.id)
    }
}
