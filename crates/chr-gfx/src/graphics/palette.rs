use std::{
    fmt,
    fmt::{Display, Formatter},
    str::FromStr,
};

use crate::{
    error::PaletteError,
    graphics::{color::Rgb888, tile::ColorIndex},
};

// -------------------------------------------------------------------------------------------------

pub const N_COLORS_IN_PALETTE: usize = 4;

/// One of the predefined four-color palettes. Slot 0 is the background color.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Palette {
    #[default]
    Grayscale,
    Rgb,
    Dk,
}

// -------------------------------------------------------------------------------------------------

#[rustfmt::skip]
const GRAYSCALE_COLORS: [Rgb888; N_COLORS_IN_PALETTE] = [
    Rgb888::new(0, 0, 0),
    Rgb888::new(85, 85, 85),
    Rgb888::new(170, 170, 170),
    Rgb888::new(255, 255, 255),
];

#[rustfmt::skip]
const RGB_COLORS: [Rgb888; N_COLORS_IN_PALETTE] = [
    Rgb888::BLACK,
    Rgb888::BLUE,
    Rgb888::GREEN,
    Rgb888::RED,
];

#[rustfmt::skip]
const DK_COLORS: [Rgb888; N_COLORS_IN_PALETTE] = [
    Rgb888::new(0, 0, 0),
    Rgb888::new(69, 67, 230),
    Rgb888::new(120, 39, 56),
    Rgb888::new(255, 255, 255),
];

// -------------------------------------------------------------------------------------------------

impl Palette {
    pub const ALL: [Palette; 3] = [Palette::Grayscale, Palette::Rgb, Palette::Dk];
    pub const NAMES: &'static [&'static str] = &["GRAYSCALE", "RGB", "DK"];

    pub fn name(self) -> &'static str {
        match self {
            Palette::Grayscale => "GRAYSCALE",
            Palette::Rgb => "RGB",
            Palette::Dk => "DK",
        }
    }

    pub fn colors(self) -> &'static [Rgb888; N_COLORS_IN_PALETTE] {
        match self {
            Palette::Grayscale => &GRAYSCALE_COLORS,
            Palette::Rgb => &RGB_COLORS,
            Palette::Dk => &DK_COLORS,
        }
    }

    pub fn resolve(self, color_index: ColorIndex) -> Result<Rgb888, PaletteError> {
        self.colors().get(color_index as usize).copied().ok_or(PaletteError::InvalidIndex(color_index))
    }
}

impl Display for Palette {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Palette {
    type Err = PaletteError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Palette::ALL
            .into_iter()
            .find(|palette| palette.name() == name)
            .ok_or_else(|| PaletteError::UnknownPalette { name: name.to_owned(), valid: Palette::NAMES })
    }
}

/// Looks up `palette_name` and returns the color stored in slot `color_index`.
pub fn resolve(palette_name: &str, color_index: ColorIndex) -> Result<Rgb888, PaletteError> {
    palette_name.parse::<Palette>()?.resolve(color_index)
}

// -------------------------------------------------------------------------------------------------
