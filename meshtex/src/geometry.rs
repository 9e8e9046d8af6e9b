//! Geometry value types
//!
//! Positions and index triples are kept as separate types so a face list can
//! never be read back as fractional coordinates.

use glam::DVec3;
use std::ops::Sub;

/// A point or vector in 3D space
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position3 {
    /// Origin
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Coordinates narrowed to the `f32` layout used by vertex buffers
    #[inline]
    pub fn coordinates(&self) -> [f32; 3] {
        [self.x as f32, self.y as f32, self.z as f32]
    }

    /// Coordinates with a uniform scale applied, narrowed to `f32`
    #[inline]
    pub fn coordinates_scaled(&self, factor: f32) -> [f32; 3] {
        [
            self.x as f32 * factor,
            self.y as f32 * factor,
            self.z as f32 * factor,
        ]
    }

    /// Cross product `self × other`
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        DVec3::from(self).cross(DVec3::from(other)).into()
    }

    /// Euclidean length
    #[inline]
    pub fn magnitude(self) -> f64 {
        DVec3::from(self).length()
    }
}

impl Sub for Position3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl From<DVec3> for Position3 {
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Position3> for DVec3 {
    fn from(p: Position3) -> Self {
        DVec3::new(p.x, p.y, p.z)
    }
}

impl From<[f64; 3]> for Position3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

/// Three integer indices describing one triangle
///
/// Used both for vertex indices in the face list and for texture-coordinate
/// indices in the parallel texture list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct IndexTriple {
    pub a: u32,
    pub b: u32,
    pub c: u32,
}

impl IndexTriple {
    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        Self { a, b, c }
    }

    #[inline]
    pub fn to_array(self) -> [u32; 3] {
        [self.a, self.b, self.c]
    }
}

impl From<[u32; 3]> for IndexTriple {
    fn from([a, b, c]: [u32; 3]) -> Self {
        Self::new(a, b, c)
    }
}

/// Tessellation grid dimensions, in grid cells
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GridSize {
    pub width: u32,
    pub height: u32,
}

impl GridSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of grid nodes, `(width + 1) * (height + 1)`
    pub fn node_count(&self) -> usize {
        (self.width as usize + 1) * (self.height as usize + 1)
    }
}

/// Physical extent of the textured surface
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AreaSize {
    pub width: f64,
    pub height: f64,
}

impl AreaSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Height over width, or `1.0` unless both sides are positive
    pub fn aspect_ratio(&self) -> f64 {
        if self.width > 0.0 && self.height > 0.0 {
            self.height / self.width
        } else {
            1.0
        }
    }
}
