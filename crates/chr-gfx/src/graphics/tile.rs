use std::ops::Range;

use nom::{bytes::complete::take, IResult};

use crate::{
    error::{PaletteError, ParseErr, TileError},
    graphics::{color::Rgb888, palette::Palette},
};

// -------------------------------------------------------------------------------------------------

/// 2-bit palette slot, always in `0..=3` when produced by the decoder.
pub type ColorIndex = u8;

pub const TILE_SIZE: usize = 8;
pub const TILE_BYTES: usize = 2 * TILE_SIZE;
pub const N_PIXELS_IN_TILE: usize = TILE_SIZE * TILE_SIZE;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Tile {
    color_indices: [ColorIndex; N_PIXELS_IN_TILE],
}

// -------------------------------------------------------------------------------------------------

impl Tile {
    /// Parses one tile stored as a low bit-plane (8 bytes) followed by a high bit-plane (8 bytes).
    /// The leftmost pixel of each row lives in the most significant bit.
    pub fn from_2bpp(input: &[u8]) -> IResult<&[u8], Self> {
        let (input, bytes) = take(TILE_BYTES)(input)?;
        let (low_plane, high_plane) = bytes.split_at(TILE_SIZE);
        let mut tile = Tile { color_indices: [0; N_PIXELS_IN_TILE] };

        for i in 0..N_PIXELS_IN_TILE {
            let (row, col) = (i / TILE_SIZE, 7 - (i % TILE_SIZE));
            let low_bit = (low_plane[row] >> col) & 1;
            let high_bit = (high_plane[row] >> col) & 1;
            tile.color_indices[i] = low_bit | (high_bit << 1);
        }

        Ok((input, tile))
    }

    pub fn color_index_at(&self, x: usize, y: usize) -> ColorIndex {
        debug_assert!(x < TILE_SIZE && y < TILE_SIZE, "({x}, {y}) is outside of an 8x8 tile");
        self.color_indices[y * TILE_SIZE + x]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[ColorIndex]> {
        self.color_indices.chunks_exact(TILE_SIZE)
    }

    pub fn to_rgb(&self, palette: Palette) -> Result<Box<[Rgb888]>, PaletteError> {
        self.color_indices.iter().map(|&color_index| palette.resolve(color_index)).collect()
    }
}

/// Byte span occupied by tile `index`. Saturates instead of wrapping so that huge indices
/// always land outside of any buffer.
pub fn tile_span(index: usize) -> Range<usize> {
    let start = index.saturating_mul(TILE_BYTES);
    start..start.saturating_add(TILE_BYTES)
}

pub fn tile_count(buffer: &[u8]) -> usize {
    buffer.len() / TILE_BYTES
}

pub fn decode_tile(buffer: &[u8], index: usize) -> Result<Tile, TileError> {
    let span = tile_span(index);
    let out_of_range = || TileError::OutOfRange {
        index,
        span: span.clone(),
        buffer_len: buffer.len(),
    };

    let bytes = buffer.get(span.clone()).ok_or_else(out_of_range)?;
    let (_, tile) = Tile::from_2bpp(bytes).map_err(|_: ParseErr| out_of_range())?;
    Ok(tile)
}

// -------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn tile_bytes(low: u8, high: u8) -> [u8; TILE_BYTES] {
        let mut bytes = [low; TILE_BYTES];
        bytes[TILE_SIZE..].fill(high);
        bytes
    }

    fn assert_uniform(tile: &Tile, expected: ColorIndex) {
        for (y, row) in tile.rows().enumerate() {
            assert!(row.iter().all(|&c| c == expected), "row {y} is {row:?}, expected all {expected}");
        }
    }

    #[test]
    fn test_bit_planes() {
        for (low, high, expected) in [(0x00, 0x00, 0), (0xFF, 0x00, 1), (0x00, 0xFF, 2), (0xFF, 0xFF, 3)] {
            let tile = decode_tile(&tile_bytes(low, high), 0).unwrap();
            assert_uniform(&tile, expected);
        }
    }

    #[test]
    fn test_msb_is_leftmost_pixel() {
        let mut bytes = [0u8; TILE_BYTES];
        bytes[3] = 0x80;
        let tile = decode_tile(&bytes, 0).unwrap();
        let rows: Vec<&[ColorIndex]> = tile.rows().collect();
        assert_eq!(rows[3], &[1u8, 0, 0, 0, 0, 0, 0, 0]);
        assert!(rows.iter().enumerate().filter(|(y, _)| *y != 3).all(|(_, row)| row.iter().all(|&c| c == 0)));
    }

    #[test]
    fn test_planes_combine_per_pixel() {
        let mut bytes = [0u8; TILE_BYTES];
        // Row 0: low = 0b1010_0000, high = 0b0110_0000 -> [1, 2, 3, 0, ...]
        bytes[0] = 0b1010_0000;
        bytes[TILE_SIZE] = 0b0110_0000;
        let tile = decode_tile(&bytes, 0).unwrap();
        assert_eq!(tile.color_index_at(0, 0), 1);
        assert_eq!(tile.color_index_at(1, 0), 2);
        assert_eq!(tile.color_index_at(2, 0), 3);
        assert_eq!(tile.color_index_at(3, 0), 0);
        assert_eq!(tile.color_index_at(7, 7), 0);
    }

    #[test]
    fn test_second_tile_offset() {
        let mut buffer = vec![0u8; 2 * TILE_BYTES];
        buffer[TILE_BYTES..TILE_BYTES + TILE_SIZE].fill(0xFF);
        assert_uniform(&decode_tile(&buffer, 0).unwrap(), 0);
        assert_uniform(&decode_tile(&buffer, 1).unwrap(), 1);
    }

    #[test]
    fn test_deterministic() {
        let buffer: Vec<u8> = (0..=255u8).cycle().take(4 * TILE_BYTES).collect();
        for index in 0..4 {
            assert_eq!(decode_tile(&buffer, index).unwrap(), decode_tile(&buffer, index).unwrap());
        }
    }

    #[test]
    fn test_out_of_range() {
        let buffer = [0u8; TILE_BYTES + 4];
        assert_eq!(decode_tile(&buffer, 1), Err(TileError::OutOfRange {
            index:      1,
            span:       16..32,
            buffer_len: 20,
        }));
        assert!(matches!(decode_tile(&[], 0), Err(TileError::OutOfRange { index: 0, .. })));
        assert!(matches!(decode_tile(&buffer, usize::MAX), Err(TileError::OutOfRange { .. })));
    }

    #[test]
    fn test_from_2bpp_returns_remaining_input() {
        let bytes = [0xFFu8; TILE_BYTES + 3];
        let (rest, tile) = Tile::from_2bpp(&bytes).unwrap();
        assert_eq!(rest.len(), 3);
        assert_uniform(&tile, 3);
        assert!(Tile::from_2bpp(&bytes[..TILE_BYTES - 1]).is_err());
    }

    #[test]
    fn test_to_rgb() {
        let tile = decode_tile(&tile_bytes(0x00, 0xFF), 0).unwrap();
        let colors = tile.to_rgb(Palette::Rgb).unwrap();
        assert_eq!(colors.len(), N_PIXELS_IN_TILE);
        assert!(colors.iter().all(|&c| c == Rgb888::GREEN));
    }

    #[test]
    fn test_tile_count() {
        assert_eq!(tile_count(&[0; 8192]), 512);
        assert_eq!(tile_count(&[0; 8191]), 511);
        assert_eq!(tile_count(&[]), 0);
    }
}
