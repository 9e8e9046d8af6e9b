//! Vertex buffer flattening and surface area

use crate::error::{Result, TexturingError};
use crate::geometry::{IndexTriple, Position3};
use rayon::prelude::*;

/// Flatten positions to three floats each
pub fn update_vertices(points: &[Position3]) -> Vec<f32> {
    points
        .par_iter()
        .map(Position3::coordinates)
        .collect::<Vec<_>>()
        .into_flattened()
}

/// Flatten positions with a uniform scale applied to every coordinate
pub fn update_vertices_scaled(points: &[Position3], factor: f32) -> Vec<f32> {
    points
        .par_iter()
        .map(|p| p.coordinates_scaled(factor))
        .collect::<Vec<_>>()
        .into_flattened()
}

/// Total area of all triangles, `|(b - a) x (c - a)| / 2` summed over faces
///
/// Summed sequentially in face order so repeated calls are bit-identical.
pub fn mesh_area(points: &[Position3], faces: &[IndexTriple]) -> Result<f64> {
    let mut area = 0.0;
    for (face, f) in faces.iter().enumerate() {
        let [a, b, c] = f.to_array().map(|index| {
            points
                .get(index as usize)
                .copied()
                .ok_or(TexturingError::VertexOutOfRange {
                    face,
                    index,
                    count: points.len(),
                })
        });
        let (a, b, c) = (a?, b?, c?);
        area += (b - a).cross(c - a).magnitude() / 2.0;
    }
    Ok(area)
}
