//! Discrete color palettes for colored-face and colored-vertex texturing
//!
//! A palette is a small image with one pixel per color, laid out row-major in
//! a near-square grid. Each color index maps to the texture coordinate of its
//! pixel centre, so sampling never bleeds into a neighbouring swatch.

use super::{hsv_to_rgb, TextureBuffer};
use crate::error::{Result, TexturingError};

/// A generated color palette
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    colors: usize,
    image: TextureBuffer,
}

impl Palette {
    /// Build a palette with `colors` evenly spaced hues
    ///
    /// Color `i` has hue `360 * (1 - i / colors)` at full saturation and
    /// value, so the same count always yields the same image.
    pub fn new(colors: usize) -> Result<Self> {
        if colors == 0 {
            return Err(TexturingError::InvalidColorCount(colors));
        }
        let (width, height) = layout(colors);
        let image = TextureBuffer::from_fn(width, height, |x, y| {
            let index = y as usize * width as usize + x as usize;
            if index < colors {
                swatch(index, colors)
            } else {
                [0; 4]
            }
        });
        tracing::debug!(colors, width, height, "Created palette");
        Ok(Self { colors, image })
    }

    /// Number of colors
    pub fn colors(&self) -> usize {
        self.colors
    }

    /// The palette image
    pub fn image(&self) -> &TextureBuffer {
        &self.image
    }

    /// Normalized texture coordinate of swatch `index`, `None` past the end
    pub fn location_of(&self, index: usize) -> Option<[f32; 2]> {
        if index >= self.colors {
            return None;
        }
        let (x, y) = cell(index, self.image.width);
        Some([
            (x as f32 + 0.5) / self.image.width as f32,
            (y as f32 + 0.5) / self.image.height as f32,
        ])
    }

    /// RGBA value of swatch `index`
    pub fn color_of(&self, index: usize) -> Option<[u8; 4]> {
        (index < self.colors).then(|| swatch(index, self.colors))
    }

    /// All swatch locations, two floats per color in index order
    pub fn tex_coords(&self) -> Vec<f32> {
        (0..self.colors)
            .filter_map(|i| self.location_of(i))
            .flatten()
            .collect()
    }
}

/// Near-square `(width, height)` holding at least `colors` cells
fn layout(colors: usize) -> (u32, u32) {
    let width = (colors as f64).sqrt().ceil().max(1.0) as usize;
    let height = colors.div_ceil(width);
    (width as u32, height as u32)
}

#[inline]
fn cell(index: usize, width: u32) -> (u32, u32) {
    let w = width as usize;
    ((index % w) as u32, (index / w) as u32)
}

fn swatch(index: usize, colors: usize) -> [u8; 4] {
    let hue = 360.0 * (1.0 - index as f32 / colors as f32);
    let (r, g, b) = hsv_to_rgb(hue, 1.0, 1.0);
    [r, g, b, 255]
}
