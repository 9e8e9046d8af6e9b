//! PNG persistence for generated images

use super::TextureBuffer;
use crate::error::{Result, TexturingError};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Encode `texture` as an 8-bit RGBA PNG into `out`
pub fn encode_png<W: Write>(texture: &TextureBuffer, out: W) -> Result<()> {
    let mut encoder = png::Encoder::new(out, texture.width, texture.height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(&texture.pixels)?;
    writer.finish()?;
    Ok(())
}

/// Save `texture` to `path`, creating missing parent directories
pub fn write_png(texture: &TextureBuffer, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|e| TexturingError::io(dir, e))?;
    }
    let file = File::create(path).map_err(|e| TexturingError::io(path, e))?;
    encode_png(texture, BufWriter::new(file))?;

    tracing::info!(
        path = %path.display(),
        width = texture.width,
        height = texture.height,
        "Saved image"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_encode_header() {
        let mut bytes = Vec::new();
        encode_png(&TextureBuffer::filled(5, 3, [0, 128, 255, 255]), &mut bytes).unwrap();

        let reader = png::Decoder::new(Cursor::new(bytes)).read_info().unwrap();
        assert_eq!((reader.info().width, reader.info().height), (5, 3));
        assert_eq!(reader.info().color_type, png::ColorType::Rgba);
    }

    #[test]
    fn test_write_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a").join("b").join("swatch.png");

        write_png(&TextureBuffer::new(2, 2), &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }
}
