use std::ops::Range;

use thiserror::Error;

// -------------------------------------------------------------------------------------------------

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum TileError {
    #[error("Tile {index} needs bytes {span:?} but the buffer holds only {buffer_len} bytes")]
    OutOfRange { index: usize, span: Range<usize>, buffer_len: usize },
}

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum PaletteError {
    #[error("Unknown palette '{name}' (expected one of: {valid:?})")]
    UnknownPalette { name: String, valid: &'static [&'static str] },
    #[error("Color index {0} does not fit in 2 bits")]
    InvalidIndex(u8),
}

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum RenderError {
    #[error("Decoding pattern table tile:\n- {0}")]
    Tile(TileError),
    #[error("Resolving tile colors:\n- {0}")]
    Palette(PaletteError),
}

pub type ParseErr<'a> = nom::Err<nom::error::Error<&'a [u8]>>;

// -------------------------------------------------------------------------------------------------

impl From<TileError> for RenderError {
    fn from(e: TileError) -> Self {
        RenderError::Tile(e)
    }
}

impl From<PaletteError> for RenderError {
    fn from(e: PaletteError) -> Self {
        RenderError::Palette(e)
    }
}
