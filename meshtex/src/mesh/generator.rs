//! Mesh topology producers

use crate::error::{Result, TexturingError};
use crate::geometry::{AreaSize, GridSize, IndexTriple, Position3};
use std::fmt;
use std::sync::Arc;

/// Vertex, face and texture lists for one mesh build
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshTopology {
    pub vertices: Vec<Position3>,
    pub faces: Vec<IndexTriple>,
    /// Texture index triples parallel to `faces`; empty when the mesh has none
    pub textures: Vec<IndexTriple>,
    /// Tessellation grid, for meshes laid over a regular UV grid
    pub grid: Option<GridSize>,
    /// Physical extent, for pattern aspect correction
    pub area: AreaSize,
}

impl MeshTopology {
    pub fn new(vertices: Vec<Position3>, faces: Vec<IndexTriple>) -> Self {
        Self {
            vertices,
            faces,
            ..Default::default()
        }
    }
}

/// Something that can tessellate itself into a [`MeshTopology`]
pub trait MeshGenerator {
    fn generate(&self) -> Result<MeshTopology>;
}

impl MeshGenerator for MeshTopology {
    fn generate(&self) -> Result<MeshTopology> {
        Ok(self.clone())
    }
}

type HeightFn = Arc<dyn Fn(f64, f64) -> f64 + Send + Sync>;

/// Height-field surface `z = f(x, y)` over a rectangle centred on the origin
///
/// Vertices are row-major, `(divisions.width + 1) * (divisions.height + 1)`
/// of them, so vertex `i` sits on node `i` of the grid
/// [`create_tex_coords`](crate::engine::create_tex_coords) builds. Each cell
/// splits into two triangles and the texture triples equal the face triples.
#[derive(Clone)]
pub struct SurfaceGrid {
    area: AreaSize,
    divisions: GridSize,
    height: HeightFn,
}

impl SurfaceGrid {
    /// Flat surface of `area` split into `divisions` cells
    pub fn new(area: AreaSize, divisions: GridSize) -> Self {
        Self {
            area,
            divisions,
            height: Arc::new(|_, _| 0.0),
        }
    }

    /// Replace the height function
    pub fn with_height<F>(mut self, f: F) -> Self
    where
        F: Fn(f64, f64) -> f64 + Send + Sync + 'static,
    {
        self.height = Arc::new(f);
        self
    }

    pub fn area(&self) -> AreaSize {
        self.area
    }

    pub fn divisions(&self) -> GridSize {
        self.divisions
    }
}

impl fmt::Debug for SurfaceGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SurfaceGrid")
            .field("area", &self.area)
            .field("divisions", &self.divisions)
            .finish_non_exhaustive()
    }
}

impl MeshGenerator for SurfaceGrid {
    fn generate(&self) -> Result<MeshTopology> {
        let GridSize { width: dx, height: dy } = self.divisions;
        if dx == 0 || dy == 0 {
            return Err(TexturingError::InvalidGridSize { width: dx, height: dy });
        }

        let (w, h) = (self.area.width, self.area.height);
        let mut vertices = Vec::with_capacity(self.divisions.node_count());
        for j in 0..=dy {
            let y = -h / 2.0 + h * j as f64 / dy as f64;
            for i in 0..=dx {
                let x = -w / 2.0 + w * i as f64 / dx as f64;
                vertices.push(Position3::new(x, y, (self.height)(x, y)));
            }
        }

        let row = dx + 1;
        let mut faces = Vec::with_capacity(2 * dx as usize * dy as usize);
        for j in 0..dy {
            for i in 0..dx {
                let p00 = j * row + i;
                let p10 = p00 + 1;
                let p01 = p00 + row;
                let p11 = p01 + 1;
                faces.push(IndexTriple::new(p00, p10, p11));
                faces.push(IndexTriple::new(p00, p11, p01));
            }
        }

        Ok(MeshTopology {
            vertices,
            textures: faces.clone(),
            faces,
            grid: Some(self.divisions),
            area: self.area,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_grid_counts() {
        let grid = SurfaceGrid::new(AreaSize::new(4.0, 2.0), GridSize::new(4, 2));
        let mesh = grid.generate().unwrap();
        assert_eq!(mesh.vertices.len(), 15);
        assert_eq!(mesh.faces.len(), 16);
        assert_eq!(mesh.textures, mesh.faces);
        assert_eq!(mesh.grid, Some(GridSize::new(4, 2)));
    }

    #[test]
    fn test_surface_grid_spans_area() {
        let grid = SurfaceGrid::new(AreaSize::new(4.0, 2.0), GridSize::new(2, 2))
            .with_height(|x, y| x + y);
        let mesh = grid.generate().unwrap();
        assert_eq!(mesh.vertices[0], Position3::new(-2.0, -1.0, -3.0));
        assert_eq!(mesh.vertices[8], Position3::new(2.0, 1.0, 3.0));
        assert_eq!(mesh.vertices[4], Position3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_surface_grid_indices_in_range() {
        let mesh = SurfaceGrid::new(AreaSize::new(1.0, 1.0), GridSize::new(3, 5))
            .generate()
            .unwrap();
        let count = mesh.vertices.len() as u32;
        assert!(mesh.faces.iter().flat_map(|f| f.to_array()).all(|i| i < count));
    }

    #[test]
    fn test_surface_grid_rejects_empty_grid() {
        let grid = SurfaceGrid::new(AreaSize::new(1.0, 1.0), GridSize::new(0, 4));
        assert!(matches!(
            grid.generate(),
            Err(TexturingError::InvalidGridSize { width: 0, height: 4 })
        ));
    }
}
