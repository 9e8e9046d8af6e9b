//! Face buffer construction
//!
//! Every builder emits six `u32`s per triangle, interleaving vertex and
//! texture-coordinate indices: `[p0, t0, p1, t1, p2, t2]`. Faces are mapped
//! independently on the rayon pool; output order always follows face order.

use crate::density::{clamp_index, Density, DensityRange};
use crate::error::{Result, TexturingError};
use crate::geometry::{IndexTriple, Position3};
use rayon::prelude::*;

/// Every texture index is 0
pub fn faces_without_texture(faces: &[IndexTriple]) -> Vec<u32> {
    faces
        .par_iter()
        .map(|f| [f.a, 0, f.b, 0, f.c, 0])
        .collect::<Vec<_>>()
        .into_flattened()
}

/// Texture index equals vertex index
pub fn faces_with_vertices(faces: &[IndexTriple]) -> Vec<u32> {
    faces
        .par_iter()
        .map(|f| [f.a, f.a, f.b, f.b, f.c, f.c])
        .collect::<Vec<_>>()
        .into_flattened()
}

/// Zip faces with an explicit texture-index list, one-to-one in list order
///
/// # Errors
///
/// [`TexturingError::InconsistentTextures`] if `textures` is shorter than
/// `faces`. Extra texture entries are ignored.
pub fn faces_with_textures(faces: &[IndexTriple], textures: &[IndexTriple]) -> Result<Vec<u32>> {
    if textures.len() < faces.len() {
        return Err(TexturingError::InconsistentTextures {
            faces: faces.len(),
            textures: textures.len(),
        });
    }
    Ok(faces
        .par_iter()
        .zip(textures.par_iter())
        .map(|(f, t)| [f.a, t.a, f.b, t.b, f.c, t.c])
        .collect::<Vec<_>>()
        .into_flattened())
}

/// Min/max of `density` over `points`, `(0, 1)` for an empty slice or a
/// field with no finite bounds
pub fn density_range(points: &[Position3], density: &Density) -> DensityRange {
    if points.is_empty() {
        return DensityRange::default();
    }
    let (min, max) = points
        .par_iter()
        .map(|&p| density.eval(p))
        .fold(
            || (f64::INFINITY, f64::NEG_INFINITY),
            |(lo, hi), d| (lo.min(d), hi.max(d)),
        )
        .reduce(
            || (f64::INFINITY, f64::NEG_INFINITY),
            |a, b| (a.0.min(b.0), a.1.max(b.1)),
        );
    DensityRange::new(min, max)
}

/// Per-corner palette index from a density map
///
/// `map` turns a vertex position into a palette index. The density range it
/// closes over must already be final; this only reads it.
pub fn faces_with_density_map<M>(
    points: &[Position3],
    faces: &[IndexTriple],
    map: M,
) -> Result<Vec<u32>>
where
    M: Fn(Position3) -> usize + Sync,
{
    let vertex = |face: usize, index: u32| {
        points
            .get(index as usize)
            .copied()
            .ok_or(TexturingError::VertexOutOfRange {
                face,
                index,
                count: points.len(),
            })
    };

    let mapped = faces
        .par_iter()
        .enumerate()
        .map(|(i, f)| {
            let t0 = map(vertex(i, f.a)?) as u32;
            let t1 = map(vertex(i, f.b)?) as u32;
            let t2 = map(vertex(i, f.c)?) as u32;
            Ok([f.a, t0, f.b, t1, f.c, t2])
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(mapped.into_flattened())
}

/// Palette index for face `ordinal` of `total`, in `[0, colors - 1]`
#[inline]
pub fn map_faces(ordinal: usize, total: usize, colors: usize) -> usize {
    clamp_index(ordinal as f64 / total as f64 * colors as f64, colors)
}

/// One palette index per face, spread evenly over the palette by face order
pub fn faces_with_faces(faces: &[IndexTriple], colors: usize) -> Vec<u32> {
    let total = faces.len();
    faces
        .par_iter()
        .enumerate()
        .map(|(i, f)| {
            let t = map_faces(i, total, colors) as u32;
            [f.a, t, f.b, t, f.c, t]
        })
        .collect::<Vec<_>>()
        .into_flattened()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tri(a: u32, b: u32, c: u32) -> IndexTriple {
        IndexTriple::new(a, b, c)
    }

    #[test]
    fn test_without_texture() {
        let faces = [tri(0, 1, 2), tri(2, 1, 3)];
        let buf = faces_without_texture(&faces);
        assert_eq!(buf, vec![0, 0, 1, 0, 2, 0, 2, 0, 1, 0, 3, 0]);
    }

    #[test]
    fn test_without_texture_odd_slots_zero() {
        let faces: Vec<_> = (0..500).map(|i| tri(i, i + 1, i + 2)).collect();
        let buf = faces_without_texture(&faces);
        assert_eq!(buf.len(), 6 * faces.len());
        assert!(buf.iter().skip(1).step_by(2).all(|&t| t == 0));
        assert_eq!(buf[6 * 499], 499);
    }

    #[test]
    fn test_with_vertices() {
        assert_eq!(
            faces_with_vertices(&[tri(4, 5, 6)]),
            vec![4, 4, 5, 5, 6, 6]
        );
    }

    #[test]
    fn test_with_textures_zips_in_order() {
        let faces = [tri(0, 1, 2), tri(3, 4, 5)];
        let textures = [tri(10, 11, 12), tri(13, 14, 15), tri(99, 99, 99)];
        assert_eq!(
            faces_with_textures(&faces, &textures).unwrap(),
            vec![0, 10, 1, 11, 2, 12, 3, 13, 4, 14, 5, 15]
        );
    }

    #[test]
    fn test_with_textures_short_list_fails() {
        let faces = [tri(0, 1, 2), tri(3, 4, 5)];
        let textures = [tri(0, 1, 2)];
        assert!(matches!(
            faces_with_textures(&faces, &textures),
            Err(TexturingError::InconsistentTextures { faces: 2, textures: 1 })
        ));
        assert!(faces_with_textures(&faces, &[]).is_err());
    }

    #[test]
    fn test_density_range() {
        let points = [
            Position3::new(0.0, 0.0, -2.0),
            Position3::new(0.0, 0.0, 5.0),
            Position3::new(0.0, 0.0, 1.0),
        ];
        let range = density_range(&points, &Density::new(|p: Position3| p.z));
        assert_eq!((range.min(), range.max()), (-2.0, 5.0));

        let flat = density_range(&points, &Density::zero());
        assert_eq!((flat.min(), flat.max()), (0.0, 1.0));

        assert_eq!(density_range(&[], &Density::zero()), DensityRange::default());

        let undefined = density_range(&points, &Density::new(|_: Position3| f64::NAN));
        assert_eq!(undefined, DensityRange::default());
    }

    #[test]
    fn test_density_map_out_of_range_vertex() {
        let points = [Position3::ZERO; 3];
        let result = faces_with_density_map(&points, &[tri(0, 1, 7)], |_| 0);
        assert!(matches!(
            result,
            Err(TexturingError::VertexOutOfRange { face: 0, index: 7, count: 3 })
        ));
    }

    #[test]
    fn test_map_faces_bounds() {
        for colors in 1..20 {
            for total in 1..30 {
                for ordinal in 0..=total {
                    let idx = map_faces(ordinal, total, colors);
                    assert!(idx < colors);
                }
            }
        }
        assert_eq!(map_faces(0, 1, 2), 0);
        assert_eq!(map_faces(3, 4, 4), 3);
    }

    #[test]
    fn test_faces_with_faces_flat_per_face() {
        let faces: Vec<_> = (0..8).map(|i| tri(i, i + 1, i + 2)).collect();
        let buf = faces_with_faces(&faces, 4);
        for (i, chunk) in buf.chunks_exact(6).enumerate() {
            assert_eq!(chunk[1], chunk[3]);
            assert_eq!(chunk[3], chunk[5]);
            assert_eq!(chunk[1] as usize, i / 2);
        }
    }
}
