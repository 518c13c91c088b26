//! # Config Crate
//!
//! Centralized configuration constants for the map brush pipeline.
//! Every tolerance, capacity and sentinel used while turning brush planes into
//! polygons is defined here so the parser, the geometry kernel and the
//! converter agree on the same numbers.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{GeometryConfig, ON_EPSILON, MAX_POINTS_ON_WINDING};
//!
//! let cfg = GeometryConfig::default();
//! assert_eq!(cfg.on_epsilon, ON_EPSILON);
//! assert_eq!(cfg.max_points, MAX_POINTS_ON_WINDING);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Format Compatible**: Defaults match the Id Tech 2 editor conventions
//! - **Validated Overrides**: `GeometryConfig::new` rejects unusable values

pub mod constants;

#[cfg(test)]
mod tests;
