//! # Texture Metadata
//!
//! Pixel sizes of the textures referenced by faces, read from
//! `<root>/<name>.tga` headers and cached per resolved path for one
//! conversion run.

use std::collections::HashMap;
use std::path::PathBuf;

use brush_geometry::TextureSize;
use config::constants::{PORTAL_TEXTURE, TEXTURE_EXTENSION};
use tracing::debug;

use crate::error::{ConvertError, ConvertResult};

/// Cache of texture sizes keyed by resolved file path.
#[derive(Debug, Clone, Default)]
pub struct TextureCache {
    root: Option<PathBuf>,
    sizes: HashMap<PathBuf, TextureSize>,
}

impl TextureCache {
    /// Looks textures up under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
            sizes: HashMap::new(),
        }
    }

    /// A cache with no texture directory; every lookup yields `None`.
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Number of distinct textures read so far.
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// File a texture name resolves to, if a root is configured.
    pub fn path_for(&self, name: &str) -> Option<PathBuf> {
        let root = self.root.as_ref()?;
        let mut path = root.join(name).into_os_string();
        path.push(".");
        path.push(TEXTURE_EXTENSION);
        Some(PathBuf::from(path))
    }

    /// Size of texture `name`.
    ///
    /// Returns `None` without touching the disk when no root is configured
    /// or the name is the portal marker.
    ///
    /// # Errors
    /// - `MissingTexture` when the file does not exist
    /// - `TextureRead` when its header cannot be decoded
    pub fn lookup(&mut self, name: &str) -> ConvertResult<Option<TextureSize>> {
        let Some(path) = self.path_for(name) else {
            return Ok(None);
        };

        if let Some(size) = self.sizes.get(&path) {
            return Ok(Some(*size));
        }

        if !path.exists() {
            if name == PORTAL_TEXTURE {
                return Ok(None);
            }
            return Err(ConvertError::MissingTexture { path });
        }

        let (width, height) = match image::image_dimensions(&path) {
            Ok(dims) => dims,
            Err(source) => return Err(ConvertError::TextureRead { path, source }),
        };
        debug!("texture {} is {}x{}", path.display(), width, height);

        let size = TextureSize::new(width, height);
        self.sizes.insert(path, size);
        Ok(Some(size))
    }
}
