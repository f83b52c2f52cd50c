//! Decoding of 2bpp planar tile graphics and composition of the two 256-tile pattern tables into
//! a single 256x128 RGB image.

pub mod error;
pub mod graphics;
pub mod pattern_buffer;

pub use crate::{
    error::{PaletteError, RenderError, TileError},
    graphics::{
        color::Rgb888,
        palette::{resolve, Palette},
        pattern_table::{render, render_with_palette, PatternTable, PatternTableImage},
        tile::{decode_tile, ColorIndex, Tile},
    },
    pattern_buffer::PatternBuffer,
};
