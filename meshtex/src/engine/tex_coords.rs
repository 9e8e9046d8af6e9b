//! Texture coordinate grids
//!
//! Both grids are row-major with `(width + 1) * (height + 1)` nodes and two
//! floats per node, so node `y * (width + 1) + x` lines up with the vertex of
//! the same index in a regular surface tessellation.

use crate::error::{Result, TexturingError};
use crate::geometry::GridSize;

fn check_grid(grid: GridSize) -> Result<()> {
    if grid.width == 0 || grid.height == 0 {
        return Err(TexturingError::InvalidGridSize {
            width: grid.width,
            height: grid.height,
        });
    }
    Ok(())
}

/// Regular UV grid spanning `[0, 1] x [0, 1]`
pub fn create_tex_coords(grid: GridSize) -> Result<Vec<f32>> {
    check_grid(grid)?;
    let (w, h) = (grid.width as f32, grid.height as f32);
    let mut coords = Vec::with_capacity(grid.node_count() * 2);
    for y in 0..=grid.height {
        let v = y as f32 / h;
        for x in 0..=grid.width {
            coords.push(x as f32 / w);
            coords.push(v);
        }
    }
    Ok(coords)
}

/// UV grid that repeats a `pattern_width x pattern_height` tile across the grid
///
/// One tile covers `pattern_size / scale` grid cells. Both axes are then
/// stretched so the far edge lands on a tile boundary. The vertical axis is
/// additionally scaled by `ratio` (area height over area width) so tiles
/// keep their aspect on non-square surfaces. The arithmetic, including the
/// `f32` roundings, is kept bit-for-bit stable because any drift shifts the
/// visible tile seams.
pub fn tex_coords_with_pattern(
    grid: GridSize,
    pattern_width: u32,
    pattern_height: u32,
    scale: f64,
    ratio: f64,
) -> Result<Vec<f32>> {
    check_grid(grid)?;
    if pattern_width == 0 || pattern_height == 0 {
        return Err(TexturingError::InvalidPatternSize {
            width: pattern_width,
            height: pattern_height,
        });
    }
    crate::config::validate_scale(scale)?;

    let (rect_width, rect_height) = (grid.width as f64, grid.height as f64);
    let units_x = pattern_width as f64 / scale;
    let units_y = pattern_height as f64 / scale;

    let tiles_y = 1.0 / units_y * ratio * rect_width;
    let rest_height = pattern_height as f32 - (tiles_y as f32) % pattern_height as f32;
    let factor_height = (1.0 + rest_height as f64 / tiles_y) as f32;

    let tiles_x = rect_width / units_x;
    let rest_width = pattern_width as f32 - (tiles_x as f32) % pattern_width as f32;
    let factor_width = (1.0 + rest_width as f64 / tiles_x) as f32;

    tracing::trace!(factor_width, factor_height, "Pattern stretch factors");

    let mut coords = Vec::with_capacity(grid.node_count() * 2);
    for y in 0..=grid.height {
        let v = y as f64 / units_y * ratio / rect_height * rect_width;
        let v = (v * factor_height as f64) as f32;
        for x in 0..=grid.width {
            coords.push((x as f64 / units_x * factor_width as f64) as f32);
            coords.push(v);
        }
    }
    Ok(coords)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(coords: &[f32], index: usize) -> (f32, f32) {
        (coords[2 * index], coords[2 * index + 1])
    }

    #[test]
    fn test_grid_size_and_corners() {
        let grid = GridSize::new(4, 3);
        let coords = create_tex_coords(grid).unwrap();
        assert_eq!(coords.len(), 5 * 4 * 2);
        assert_eq!(pair(&coords, 0), (0.0, 0.0));
        assert_eq!(pair(&coords, 4), (1.0, 0.0));
        assert_eq!(pair(&coords, 15), (0.0, 1.0));
        assert_eq!(pair(&coords, 19), (1.0, 1.0));
    }

    #[test]
    fn test_grid_is_row_major() {
        let coords = create_tex_coords(GridSize::new(2, 2)).unwrap();
        assert_eq!(pair(&coords, 1), (0.5, 0.0));
        assert_eq!(pair(&coords, 3), (0.0, 0.5));
    }

    #[test]
    fn test_zero_grid_rejected() {
        assert!(matches!(
            create_tex_coords(GridSize::new(0, 3)),
            Err(TexturingError::InvalidGridSize { width: 0, height: 3 })
        ));
        assert!(tex_coords_with_pattern(GridSize::new(3, 0), 12, 12, 1.0, 1.0).is_err());
    }

    #[test]
    fn test_pattern_rejects_bad_scale() {
        assert!(matches!(
            tex_coords_with_pattern(GridSize::new(3, 3), 12, 12, 0.0, 1.0),
            Err(TexturingError::InvalidPatternScale(_))
        ));
    }

    #[test]
    fn test_pattern_matches_reference_values() {
        // 24 cells, 12px tile at scale 1: 2 tiles across, rest = 12 - 2 = 10,
        // factor = 1 + 10 / 2 = 6
        let grid = GridSize::new(24, 24);
        let coords = tex_coords_with_pattern(grid, 12, 12, 1.0, 1.0).unwrap();
        assert_eq!(coords.len(), 25 * 25 * 2);
        assert_eq!(pair(&coords, 0), (0.0, 0.0));
        let (u_end, v_end) = pair(&coords, 25 * 25 - 1);
        assert!((u_end - 12.0).abs() < 1e-4, "u_end = {u_end}");
        assert!((v_end - 12.0).abs() < 1e-4, "v_end = {v_end}");
        let (u1, _) = pair(&coords, 1);
        assert!((u1 - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_pattern_ratio_scales_v() {
        // 2px tile: 5 tiles across; rows span 5 tiles (square) or 10 (tall)
        let grid = GridSize::new(10, 10);
        let square = tex_coords_with_pattern(grid, 2, 2, 1.0, 1.0).unwrap();
        let tall = tex_coords_with_pattern(grid, 2, 2, 1.0, 2.0).unwrap();
        let last = 11 * 11 - 1;
        assert!((pair(&square, last).0 - 6.0).abs() < 1e-5);
        assert_eq!(pair(&square, last).0, pair(&tall, last).0);
        assert!((pair(&square, last).1 - 6.0).abs() < 1e-5);
        assert!((pair(&tall, last).1 - 12.0).abs() < 1e-5);
    }

    #[test]
    fn test_pattern_u_monotonic() {
        let coords = tex_coords_with_pattern(GridSize::new(7, 5), 12, 8, 2.5, 0.75).unwrap();
        for x in 1..=7 {
            assert!(pair(&coords, x).0 > pair(&coords, x - 1).0);
        }
    }
}
