//! # Map Convert
//!
//! Converts Id Tech 2 `.map` text into a scene of brush meshes.
//!
//! ## Architecture
//!
//! ```text
//! .map text → map-parser (MapSource) → build (Map) → brush-geometry
//!           → ExportScene → JSON / OBJ
//! ```
//!
//! ## Usage
//!
//! ```
//! use map_convert::{convert, ConvertOptions};
//!
//! let source = r#"
//! {
//! "classname" "worldspawn"
//! {
//! ( 0 0 64 ) ( 0 0 0 ) ( 0 64 0 ) base/wall 0 0 0 1 1
//! ( 64 64 0 ) ( 64 0 0 ) ( 64 0 64 ) base/wall 0 0 0 1 1
//! ( 64 0 0 ) ( 0 0 0 ) ( 0 0 64 ) base/wall 0 0 0 1 1
//! ( 0 64 64 ) ( 0 64 0 ) ( 64 64 0 ) base/wall 0 0 0 1 1
//! ( 0 64 0 ) ( 0 0 0 ) ( 64 0 0 ) base/floor 0 0 0 1 1
//! ( 64 0 64 ) ( 0 0 64 ) ( 0 64 64 ) base/floor 0 0 0 1 1
//! }
//! }
//! "#;
//!
//! let conversion = convert(source, &ConvertOptions::default()).unwrap();
//! assert_eq!(conversion.scene.nodes[0].name, "brushNode0");
//! assert_eq!(conversion.scene.polygon_count(), 6);
//! ```

pub mod build;
pub mod error;
pub mod export;
pub mod textures;

use std::borrow::Cow;
use std::path::PathBuf;

use brush_geometry::ReconstructReport;
use config::constants::GeometryConfig;
use tracing::{info, warn};

pub use build::{build_map, BuildOutput, SkippedBrush};
pub use error::{ConvertError, ConvertResult};
pub use export::{ExportMesh, ExportNode, ExportScene, OutputFormat};
pub use textures::TextureCache;

/// Settings for one conversion run.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Texture directory; without one no UVs are generated.
    pub textures: Option<PathBuf>,
    pub geometry: GeometryConfig,
}

/// Everything a conversion produced.
#[derive(Debug)]
pub struct Conversion {
    pub scene: ExportScene,
    pub report: ReconstructReport,
    /// Brushes left out while building, with their reasons.
    pub skipped: Vec<SkippedBrush>,
}

/// Parses, builds, reconstructs and exports a map.
///
/// # Errors
/// Parse errors, fatal reconstruction errors and export inconsistencies.
/// Bad brushes are reported in [`Conversion::skipped`] instead.
pub fn convert(source: &str, options: &ConvertOptions) -> ConvertResult<Conversion> {
    let parsed = map_parser::parse(source)?;
    info!(
        "parsed {} entities with {} brushes",
        parsed.entities.len(),
        parsed.brush_count()
    );

    let mut textures = match &options.textures {
        Some(root) => TextureCache::new(root),
        None => TextureCache::disabled(),
    };

    let BuildOutput { mut map, skipped } = build_map(&parsed, &mut textures, &options.geometry)?;
    let report = map.reconstruct(&options.geometry)?;
    let scene = ExportScene::from_map(&map)?;

    info!(
        "exported {} brush nodes ({} polygons, {} skipped brushes)",
        scene.nodes.len(),
        scene.polygon_count(),
        skipped.len()
    );

    Ok(Conversion {
        scene,
        report,
        skipped,
    })
}

/// Converts raw map file contents.
///
/// Map files are not guaranteed to be UTF-8 (high-bit characters show up in
/// entity messages), so invalid sequences are replaced before parsing.
pub fn convert_bytes(bytes: &[u8], options: &ConvertOptions) -> ConvertResult<Conversion> {
    let source = String::from_utf8_lossy(bytes);
    if matches!(source, Cow::Owned(_)) {
        warn!("map contains invalid UTF-8; replaced with U+FFFD");
    }
    convert(&source, options)
}
