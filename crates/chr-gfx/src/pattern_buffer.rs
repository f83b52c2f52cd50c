use std::{fs, ops::Deref, path::Path, sync::Arc};

use crate::{
    error::{RenderError, TileError},
    graphics::{
        palette::Palette,
        pattern_table::{render_with_palette, PatternTableImage, MIN_BUFFER_SIZE},
        tile::{decode_tile, tile_count, Tile, TILE_BYTES},
    },
};

// -------------------------------------------------------------------------------------------------

/// Raw, headerless 2bpp tile data. Read-only once loaded.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatternBuffer(pub Arc<[u8]>);

// -------------------------------------------------------------------------------------------------

impl PatternBuffer {
    pub fn new(data: Vec<u8>) -> Self {
        if data.len() < MIN_BUFFER_SIZE {
            log::warn!("Pattern buffer holds {} bytes, both tables need {MIN_BUFFER_SIZE}", data.len());
        } else if data.len() > MIN_BUFFER_SIZE {
            log::warn!("Ignoring {} bytes past the second pattern table", data.len() - MIN_BUFFER_SIZE);
        }
        if data.len() % TILE_BYTES != 0 {
            log::warn!("Pattern buffer size {} is not a multiple of {TILE_BYTES}", data.len());
        }
        Self(Arc::from(data))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        log::info!("Reading pattern tables from file: {}", path.as_ref().display());
        let bytes = fs::read(path)?;
        Ok(Self::new(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn tile_count(&self) -> usize {
        tile_count(&self.0)
    }

    pub fn tile(&self, index: usize) -> Result<Tile, TileError> {
        decode_tile(&self.0, index)
    }

    pub fn render(&self, palette: Palette) -> Result<PatternTableImage, RenderError> {
        render_with_palette(&self.0, palette)
    }
}

impl Deref for PatternBuffer {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<u8>> for PatternBuffer {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

// -------------------------------------------------------------------------------------------------
