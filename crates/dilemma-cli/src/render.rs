use std::path::Path;

use anyhow::Context as _;
use dilemma_engine::{Grid, Strategy};
use image::{ImageFormat, Rgb, RgbImage};

/// Side length of the square drawn for each cell, in pixels.
const CELL_PIXELS: u32 = 5;

const COOPERATE_COLOR: Rgb<u8> = Rgb([0, 0, 255]);
const DEFECT_COLOR: Rgb<u8> = Rgb([255, 0, 0]);

/// Rasterizes the field, one solid square per cell: blue for cooperators,
/// red for defectors. Row 0 is the top of the image.
#[expect(clippy::cast_possible_truncation)]
pub(crate) fn render_image(field: &Grid) -> RgbImage {
    let width = field.cols() as u32 * CELL_PIXELS;
    let height = field.rows() as u32 * CELL_PIXELS;
    RgbImage::from_fn(width, height, |x, y| {
        let row = (y / CELL_PIXELS) as usize;
        let col = (x / CELL_PIXELS) as usize;
        match field.cell(row, col).strategy() {
            Strategy::Cooperate => COOPERATE_COLOR,
            Strategy::Defect => DEFECT_COLOR,
        }
    })
}

/// Renders the field and writes it as a PNG, whatever the path's extension.
pub(crate) fn save_png(field: &Grid, path: &Path) -> anyhow::Result<()> {
    render_image(field)
        .save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("Failed to write image: {}", path.display()))
}
