use itertools::iproduct;

use crate::{
    error::RenderError,
    graphics::{
        color::Rgb888,
        palette::Palette,
        tile::{decode_tile, Tile, TILE_BYTES, TILE_SIZE},
    },
};

// -------------------------------------------------------------------------------------------------

pub const TILES_PER_ROW: usize = 16;
pub const TILES_PER_TABLE: usize = TILES_PER_ROW * TILES_PER_ROW;
pub const PATTERN_TABLE_BYTES: usize = TILES_PER_TABLE * TILE_BYTES;
pub const PATTERN_TABLE_PIXEL_SIZE: usize = TILES_PER_ROW * TILE_SIZE;

pub const IMAGE_WIDTH: usize = 2 * PATTERN_TABLE_PIXEL_SIZE;
pub const IMAGE_HEIGHT: usize = PATTERN_TABLE_PIXEL_SIZE;

/// Smallest buffer holding both pattern tables.
pub const MIN_BUFFER_SIZE: usize = 2 * PATTERN_TABLE_BYTES;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PatternTable {
    Left,
    Right,
}

/// Both pattern tables side by side, 256x128 pixels.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatternTableImage {
    pixels: Box<[Rgb888]>,
}

// -------------------------------------------------------------------------------------------------

impl PatternTable {
    pub const BOTH: [PatternTable; 2] = [PatternTable::Left, PatternTable::Right];

    pub fn first_tile(self) -> usize {
        match self {
            PatternTable::Left => 0,
            PatternTable::Right => TILES_PER_TABLE,
        }
    }

    pub fn x_origin(self) -> usize {
        match self {
            PatternTable::Left => 0,
            PatternTable::Right => PATTERN_TABLE_PIXEL_SIZE,
        }
    }

    /// Top-left canvas pixel of the `i`th tile of this table.
    pub fn tile_origin(self, i: usize) -> (usize, usize) {
        debug_assert!(i < TILES_PER_TABLE);
        let (col, row) = (i % TILES_PER_ROW, i / TILES_PER_ROW);
        (self.x_origin() + col * TILE_SIZE, row * TILE_SIZE)
    }
}

impl PatternTableImage {
    fn blank() -> Self {
        Self { pixels: vec![Rgb888::BLACK; IMAGE_WIDTH * IMAGE_HEIGHT].into_boxed_slice() }
    }

    pub fn width(&self) -> usize {
        IMAGE_WIDTH
    }

    pub fn height(&self) -> usize {
        IMAGE_HEIGHT
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb888> {
        if x < IMAGE_WIDTH && y < IMAGE_HEIGHT {
            Some(self.pixels[y * IMAGE_WIDTH + x])
        } else {
            None
        }
    }

    /// Row-major pixels, `IMAGE_WIDTH` per row.
    pub fn pixels(&self) -> &[Rgb888] {
        &self.pixels
    }

    fn blit_tile(&mut self, tile: &Tile, (x, y): (usize, usize), palette: Palette) -> Result<(), RenderError> {
        for (ty, tx) in iproduct!(0..TILE_SIZE, 0..TILE_SIZE) {
            let color = palette.resolve(tile.color_index_at(tx, ty))?;
            self.pixels[(y + ty) * IMAGE_WIDTH + (x + tx)] = color;
        }
        Ok(())
    }
}

/// Renders both pattern tables held in `buffer` with the palette called `palette_name`.
///
/// The palette is looked up before any tile is decoded. An image is only handed back once every
/// tile has been drawn.
pub fn render(buffer: &[u8], palette_name: &str) -> Result<PatternTableImage, RenderError> {
    let palette = palette_name.parse::<Palette>()?;
    render_with_palette(buffer, palette)
}

pub fn render_with_palette(buffer: &[u8], palette: Palette) -> Result<PatternTableImage, RenderError> {
    log::debug!("Rendering {} byte pattern buffer with palette {palette}", buffer.len());

    let mut image = PatternTableImage::blank();
    for i in 0..TILES_PER_TABLE {
        for table in PatternTable::BOTH {
            let tile = decode_tile(buffer, table.first_tile() + i)?;
            image.blit_tile(&tile, table.tile_origin(i), palette)?;
        }
    }
    Ok(image)
}

// -------------------------------------------------------------------------------------------------
