//! Coordinate extraction strategies.
//!
//! A [`Locator`] turns an observation's [`FeatureMap`] into scaled spatial
//! coordinates. The set of strategies is closed ([`LocatorKind`]); variants
//! differ only in which named feature they read and at which vector offsets.
//!
//! | Kind | Feature | X | Y | Z |
//! |------|---------|---|---|---|
//! | [`LocatorKind::CenterOfMass`] | `"center-of-mass"` | 0 | 1 | 2 |
//! | [`LocatorKind::IntMaxPosition`] | `"int-max-position"` | 1 | 2 | 3 |
//!
//! The int-max-position vector reserves offset 0 for a value that is not a
//! coordinate, so it is skipped.

use crate::error::LocatorError;
use crate::feature::FeatureMap;
use crate::position::Position;

/// Spatial axis selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Axis {
    X,
    Y,
    Z,
}

/// The closed set of coordinate extraction strategies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LocatorKind {
    /// Reads offsets `0, 1, 2` of `"center-of-mass"`.
    #[default]
    CenterOfMass,
    /// Reads offsets `1, 2, 3` of `"int-max-position"`.
    IntMaxPosition,
}

impl LocatorKind {
    /// Name of the feature vector this strategy reads.
    pub fn feature_name(&self) -> &'static str {
        match self {
            Self::CenterOfMass => "center-of-mass",
            Self::IntMaxPosition => "int-max-position",
        }
    }

    /// Vector offsets for `[X, Y, Z]`.
    pub fn offsets(&self) -> [usize; 3] {
        match self {
            Self::CenterOfMass => [0, 1, 2],
            Self::IntMaxPosition => [1, 2, 3],
        }
    }

    fn offset(&self, axis: Axis) -> usize {
        let [x, y, z] = self.offsets();
        match axis {
            Axis::X => x,
            Axis::Y => y,
            Axis::Z => z,
        }
    }
}

/// A coordinate extraction strategy with per-axis scale factors.
///
/// Each coordinate is `axis_scale * features[feature_name][offset]`. The
/// locator holds no per-observation state, so cloning it yields a fully
/// independent strategy with the same kind and scales.
#[derive(Clone, Debug, PartialEq)]
pub struct Locator {
    kind: LocatorKind,
    /// Multiplier applied to the raw X value.
    pub x_scale: f64,
    /// Multiplier applied to the raw Y value.
    pub y_scale: f64,
    /// Multiplier applied to the raw Z value.
    pub z_scale: f64,
}

impl Locator {
    /// Create a locator of the given kind with unit scales.
    pub fn new(kind: LocatorKind) -> Self {
        Self {
            kind,
            x_scale: 1.0,
            y_scale: 1.0,
            z_scale: 1.0,
        }
    }

    /// Center-of-mass locator with unit scales.
    pub fn center_of_mass() -> Self {
        Self::new(LocatorKind::CenterOfMass)
    }

    /// Int-max-position locator with unit scales.
    pub fn int_max_position() -> Self {
        Self::new(LocatorKind::IntMaxPosition)
    }

    /// Replace all three scale factors.
    pub fn with_scales(mut self, x_scale: f64, y_scale: f64, z_scale: f64) -> Self {
        self.x_scale = x_scale;
        self.y_scale = y_scale;
        self.z_scale = z_scale;
        self
    }

    /// The strategy this locator implements.
    pub fn kind(&self) -> LocatorKind {
        self.kind
    }

    /// Name of the feature vector this locator reads.
    pub fn feature_name(&self) -> &'static str {
        self.kind.feature_name()
    }

    /// Vector offsets for `[X, Y, Z]`.
    pub fn offsets(&self) -> [usize; 3] {
        self.kind.offsets()
    }

    /// Whether `features` carries the vector this locator reads.
    ///
    /// Does not check the vector length; a short vector still fails
    /// extraction with [`LocatorError::VectorTooShort`].
    pub fn is_applicable(&self, features: &FeatureMap) -> bool {
        features.contains(self.feature_name())
    }

    /// Scaled X coordinate.
    pub fn x(&self, features: &FeatureMap) -> Result<f64, LocatorError> {
        self.coordinate(features, Axis::X)
    }

    /// Scaled Y coordinate.
    pub fn y(&self, features: &FeatureMap) -> Result<f64, LocatorError> {
        self.coordinate(features, Axis::Y)
    }

    /// Scaled Z coordinate.
    pub fn z(&self, features: &FeatureMap) -> Result<f64, LocatorError> {
        self.coordinate(features, Axis::Z)
    }

    /// All three scaled coordinates.
    pub fn position(&self, features: &FeatureMap) -> Result<Position, LocatorError> {
        Ok(Position::new(
            self.x(features)?,
            self.y(features)?,
            self.z(features)?,
        ))
    }

    fn coordinate(&self, features: &FeatureMap, axis: Axis) -> Result<f64, LocatorError> {
        let feature = self.feature_name();
        let values = features
            .get(feature)
            .ok_or(LocatorError::Inapplicable { feature })?;
        let offset = self.kind.offset(axis);
        let raw = values
            .get(offset)
            .copied()
            .ok_or(LocatorError::VectorTooShort {
                feature,
                len: values.len(),
                offset,
            })?;
        let scale = match axis {
            Axis::X => self.x_scale,
            Axis::Y => self.y_scale,
            Axis::Z => self.z_scale,
        };
        Ok(scale * f64::from(raw))
    }
}

impl Default for Locator {
    fn default() -> Self {
        Self::center_of_mass()
    }
}
