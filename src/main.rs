mod logging;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chr_gfx::{Palette, PatternBuffer, PatternTableImage};
use clap::{
    builder::{PossibleValuesParser, TypedValueParser},
    Parser,
};
use image::RgbImage;
use itertools::Itertools;

#[derive(Parser, Debug)]
#[command(version, about = "Render NES pattern tables to an image.", long_about = None)]
struct Args {
    /// Path to the pattern table file (should be 8KB)
    pattern_table_file: PathBuf,

    /// Path to save the output image; the format follows the extension
    output_image: PathBuf,

    /// Palette to use
    #[arg(
        short = 'P',
        long,
        default_value = "GRAYSCALE",
        value_parser = PossibleValuesParser::new(Palette::NAMES.iter().copied()).try_map(|name| name.parse::<Palette>()),
    )]
    palette: Palette,

    /// Log decoding details
    #[arg(short, long)]
    verbose: bool,
}

fn to_rgb_image(image: &PatternTableImage) -> Result<RgbImage> {
    let bytes = image.pixels().iter().flat_map(|color| color.to_array()).collect_vec();
    RgbImage::from_raw(image.width() as u32, image.height() as u32, bytes)
        .context("Pixel buffer does not match the image dimensions")
}

fn save(image: &PatternTableImage, path: &Path) -> Result<()> {
    to_rgb_image(image)?.save(path).with_context(|| format!("Couldn't save image to {}", path.display()))
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose)?;

    let palette = args.palette;
    let buffer = PatternBuffer::from_file(&args.pattern_table_file)
        .with_context(|| format!("Couldn't read {}", args.pattern_table_file.display()))?;

    let image = buffer.render(palette)?;
    save(&image, &args.output_image)?;

    log::info!("Wrote {}x{} image", image.width(), image.height());
    println!("Image saved to {} with palette {palette}", args.output_image.display());
    Ok(())
}

// -------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_argument() {
        let args = Args::try_parse_from(["chr-viewer", "in.chr", "out.png"]).unwrap();
        assert_eq!(args.palette, Palette::Grayscale);

        let args = Args::try_parse_from(["chr-viewer", "-P", "DK", "in.chr", "out.png"]).unwrap();
        assert_eq!(args.palette, Palette::Dk);

        assert!(Args::try_parse_from(["chr-viewer", "--palette", "rgb", "in.chr", "out.png"]).is_err());

        assert!(Args::try_parse_from(["chr-viewer", "--palette", "SEPIA", "in.chr", "out.png"]).is_err());
    }

    #[test]
    fn test_to_rgb_image() {
        let mut data = vec![0u8; 0x2000];
        data[..8].fill(0xFF);
        let image = chr_gfx::render(&data, "RGB").unwrap();
        let rgb = to_rgb_image(&image).unwrap();
        assert_eq!(rgb.dimensions(), (256, 128));
        assert_eq!(rgb.get_pixel(0, 0).0, [0, 0, 255]);
        assert_eq!(rgb.get_pixel(8, 0).0, [0, 0, 0]);
    }
}
