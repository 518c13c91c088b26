//! Centralized configuration values shared across the map brush pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Tolerance for component-wise vector equality.
///
/// # Examples
/// ```
/// use config::constants::EQUAL_EPSILON;
/// assert!((1.0005_f64 - 1.0).abs() <= EQUAL_EPSILON);
/// ```
pub const EQUAL_EPSILON: f64 = 0.001;

/// Half-thickness of a plane when classifying points as front, back or on.
///
/// Distances within `[-ON_EPSILON, ON_EPSILON]` count as on the plane.
///
/// # Examples
/// ```
/// use config::constants::{ON_EPSILON, EQUAL_EPSILON};
/// assert!(ON_EPSILON > EQUAL_EPSILON);
/// ```
pub const ON_EPSILON: f64 = 0.01;

/// Minimum normal dot product for two planes to be treated as coincident.
///
/// # Examples
/// ```
/// use config::constants::DUPLICATE_NORMAL_DOT;
/// assert!(DUPLICATE_NORMAL_DOT < 1.0);
/// ```
pub const DUPLICATE_NORMAL_DOT: f64 = 0.999;

/// Maximum distance delta for two planes to be treated as coincident.
///
/// # Examples
/// ```
/// use config::constants::DUPLICATE_DIST_EPSILON;
/// assert!(DUPLICATE_DIST_EPSILON > 0.0);
/// ```
pub const DUPLICATE_DIST_EPSILON: f64 = 0.01;

// =============================================================================
// WINDING CONSTANTS
// =============================================================================

/// Default maximum number of points a winding may hold.
///
/// # Examples
/// ```
/// use config::constants::MAX_POINTS_ON_WINDING;
/// assert!(MAX_POINTS_ON_WINDING >= 3);
/// ```
pub const MAX_POINTS_ON_WINDING: usize = 64;

/// Extra capacity reserved when a winding is clipped.
///
/// A convex polygon clipped by one plane gains at most two points; the extra
/// slack absorbs classification noise on nearly-on vertices.
///
/// # Examples
/// ```
/// use config::constants::CLIP_CAPACITY_MARGIN;
/// assert!(CLIP_CAPACITY_MARGIN >= 2);
/// ```
pub const CLIP_CAPACITY_MARGIN: usize = 4;

/// Half-extent of the seed polygon laid on every face plane.
///
/// # Examples
/// ```
/// use config::constants::{BASE_WINDING_EXTENT, BOGUS_RANGE};
/// assert!(BASE_WINDING_EXTENT < BOGUS_RANGE);
/// ```
pub const BASE_WINDING_EXTENT: f64 = 8192.0;

/// Coordinate magnitude no valid map geometry reaches.
pub const BOGUS_RANGE: f64 = 18000.0;

// =============================================================================
// TEXTURE CONSTANTS
// =============================================================================

/// Texture name that marks a face as a portal; such faces skip texture lookup.
///
/// # Examples
/// ```
/// use config::constants::PORTAL_TEXTURE;
/// assert_eq!(PORTAL_TEXTURE, "portal");
/// ```
pub const PORTAL_TEXTURE: &str = "portal";

/// File extension appended to texture names when resolving them on disk.
pub const TEXTURE_EXTENSION: &str = "tga";

/// Number of texture parameters on a face line without surface attributes.
pub const TEX_PARAMS_SHORT: usize = 5;

/// Number of texture parameters on a face line with `contents flags value`.
pub const TEX_PARAMS_LONG: usize = 8;

// =============================================================================
// GEOMETRY CONFIG
// =============================================================================

/// Immutable snapshot of the tolerances and limits used by face
/// reconstruction.
///
/// # Examples
/// ```
/// use config::constants::GeometryConfig;
/// let config = GeometryConfig::default();
/// assert!(config.on_epsilon > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryConfig {
    /// Component-wise vector equality tolerance.
    pub equal_epsilon: f64,
    /// Plane thickness used by point classification.
    pub on_epsilon: f64,
    /// Maximum number of points a winding may hold.
    pub max_points: usize,
    /// Half-extent of the seed polygon.
    pub base_extent: f64,
    /// Normal dot product above which two planes may be duplicates.
    pub duplicate_normal_dot: f64,
    /// Distance delta below which two planes may be duplicates.
    pub duplicate_dist_epsilon: f64,
}

impl GeometryConfig {
    /// Builds a configuration with custom plane tolerances and capacity,
    /// keeping the remaining defaults.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GeometryConfig;
    /// let cfg = GeometryConfig::new(0.02, 128).expect("valid config");
    /// assert_eq!(cfg.max_points, 128);
    /// ```
    pub fn new(on_epsilon: f64, max_points: usize) -> Result<Self, ConfigError> {
        Self {
            on_epsilon,
            max_points,
            ..Self::default()
        }
        .validated()
    }

    /// Checks every field and returns the configuration unchanged when valid.
    ///
    /// # Examples
    /// ```
    /// use config::constants::{ConfigError, GeometryConfig};
    /// let cfg = GeometryConfig { base_extent: 0.0, ..GeometryConfig::default() };
    /// assert_eq!(cfg.validated().unwrap_err(), ConfigError::InvalidExtent(0.0));
    /// ```
    pub fn validated(self) -> Result<Self, ConfigError> {
        if !(self.equal_epsilon > 0.0) {
            return Err(ConfigError::InvalidTolerance(self.equal_epsilon));
        }
        if !(self.on_epsilon > 0.0) {
            return Err(ConfigError::InvalidTolerance(self.on_epsilon));
        }
        if !(self.duplicate_dist_epsilon > 0.0) {
            return Err(ConfigError::InvalidTolerance(self.duplicate_dist_epsilon));
        }
        if self.max_points < 3 {
            return Err(ConfigError::InvalidCapacity(self.max_points));
        }
        if !(self.base_extent > 0.0) {
            return Err(ConfigError::InvalidExtent(self.base_extent));
        }
        if !(self.duplicate_normal_dot > 0.0 && self.duplicate_normal_dot <= 1.0) {
            return Err(ConfigError::InvalidNormalDot(self.duplicate_normal_dot));
        }
        Ok(self)
    }
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            equal_epsilon: EQUAL_EPSILON,
            on_epsilon: ON_EPSILON,
            max_points: MAX_POINTS_ON_WINDING,
            base_extent: BASE_WINDING_EXTENT,
            duplicate_normal_dot: DUPLICATE_NORMAL_DOT,
            duplicate_dist_epsilon: DUPLICATE_DIST_EPSILON,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when a tolerance is zero, negative or NaN.
    InvalidTolerance(f64),
    /// Raised when the winding capacity is too small to form a polygon.
    InvalidCapacity(usize),
    /// Raised when the seed polygon extent is zero, negative or NaN.
    InvalidExtent(f64),
    /// Raised when the duplicate-plane dot threshold is outside `(0, 1]`.
    InvalidNormalDot(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive: {value}")
            }
            ConfigError::InvalidCapacity(value) => {
                write!(f, "max_points must be >= 3: {value}")
            }
            ConfigError::InvalidExtent(value) => {
                write!(f, "base_extent must be positive: {value}")
            }
            ConfigError::InvalidNormalDot(value) => {
                write!(f, "duplicate_normal_dot must be in (0, 1]: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
