//! RGBA8 pixel buffer

/// Row-major RGBA8 image
///
/// This is the opaque image that crosses the image-provider boundary: the
/// engine reads `width` and `height`, hosts read `pixels`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextureBuffer {
    pub width: u32,
    pub height: u32,
    /// `width * height` pixels, four bytes each, rows top to bottom
    pub pixels: Vec<u8>,
}

impl TextureBuffer {
    /// Transparent black image
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, [0; 4])
    }

    /// Image with every pixel set to `color`
    pub fn filled(width: u32, height: u32, color: [u8; 4]) -> Self {
        Self {
            width,
            height,
            pixels: color.repeat(width as usize * height as usize),
        }
    }

    /// Image with pixel `(x, y)` set to `f(x, y)`, evaluated row by row
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> [u8; 4]) -> Self {
        let pixels = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .flat_map(|(x, y)| f(x, y))
            .collect();
        Self {
            width,
            height,
            pixels,
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        4 * (y as usize * self.width as usize + x as usize)
    }

    /// Panics if `(x, y)` lies outside the image.
    pub fn get_pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = self.index(x, y);
        std::array::from_fn(|c| self.pixels[i + c])
    }

    /// Panics if `(x, y)` lies outside the image.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: [u8; 4]) {
        let i = self.index(x, y);
        self.pixels[i..i + 4].copy_from_slice(&color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_transparent() {
        let image = TextureBuffer::new(3, 2);
        assert_eq!(image.pixels, vec![0; 3 * 2 * 4]);
    }

    #[test]
    fn test_pixel_addressing() {
        let mut image = TextureBuffer::filled(3, 2, [9, 8, 7, 6]);
        image.set_pixel(2, 1, [1, 2, 3, 4]);
        assert_eq!(image.get_pixel(2, 1), [1, 2, 3, 4]);
        assert_eq!(image.get_pixel(1, 1), [9, 8, 7, 6]);
        assert_eq!(&image.pixels[20..24], &[1, 2, 3, 4]);
    }

    #[test]
    fn test_from_fn_row_major() {
        let image = TextureBuffer::from_fn(2, 2, |x, y| [x as u8, y as u8, 0, 255]);
        assert_eq!(image.get_pixel(1, 0), [1, 0, 0, 255]);
        assert_eq!(image.get_pixel(0, 1), [0, 1, 0, 255]);
        assert_eq!(&image.pixels[4..8], &[1, 0, 0, 255]);
    }
}
