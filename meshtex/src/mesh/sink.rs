//! Mesh sink boundary

use crate::texture::TextureBuffer;

/// Default diffuse color for untextured meshes (opaque white)
pub const DEFAULT_DIFFUSE_COLOR: [u8; 4] = [255, 255, 255, 255];

/// Diffuse input handed to the host's material
#[derive(Clone, Debug, PartialEq)]
pub enum DiffuseMap {
    /// Solid RGBA color
    Color([u8; 4]),
    /// External image, decoded by the host
    Uri(String),
    /// Generated palette or pattern image
    Texture(TextureBuffer),
}

/// Receiver for the buffers a [`TexturedMesh`](super::TexturedMesh) produces
///
/// Every call replaces what the sink held before. Buffers are handed over by
/// value; a sink that uploads them elsewhere can drop them afterwards.
pub trait MeshSink {
    /// Vertex positions, three floats per vertex
    fn set_points(&mut self, points: Vec<f32>);

    /// Texture coordinates, two floats per entry
    fn set_tex_coords(&mut self, tex_coords: Vec<f32>);

    /// Faces, six indices per triangle (`vertex, tex index` x 3)
    fn set_faces(&mut self, faces: Vec<u32>);

    /// One smoothing group tag per face
    fn set_face_smoothing_groups(&mut self, groups: Vec<u32>);

    /// Diffuse color or image for the active texturing mode
    fn set_diffuse(&mut self, diffuse: DiffuseMap);
}

/// Sink that keeps the latest value of every buffer
///
/// Useful for hosts that pull buffers rather than receive pushes, and in
/// tests.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshBuffers {
    pub points: Vec<f32>,
    pub tex_coords: Vec<f32>,
    pub faces: Vec<u32>,
    pub smoothing_groups: Vec<u32>,
    pub diffuse: Option<DiffuseMap>,
}

impl MeshBuffers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.points.len() / 3
    }

    pub fn face_count(&self) -> usize {
        self.faces.len() / 6
    }
}

impl MeshSink for MeshBuffers {
    fn set_points(&mut self, points: Vec<f32>) {
        self.points = points;
    }

    fn set_tex_coords(&mut self, tex_coords: Vec<f32>) {
        self.tex_coords = tex_coords;
    }

    fn set_faces(&mut self, faces: Vec<u32>) {
        self.faces = faces;
    }

    fn set_face_smoothing_groups(&mut self, groups: Vec<u32>) {
        self.smoothing_groups = groups;
    }

    fn set_diffuse(&mut self, diffuse: DiffuseMap) {
        self.diffuse = Some(diffuse);
    }
}

impl<S: MeshSink + ?Sized> MeshSink for &mut S {
    fn set_points(&mut self, points: Vec<f32>) {
        (**self).set_points(points);
    }

    fn set_tex_coords(&mut self, tex_coords: Vec<f32>) {
        (**self).set_tex_coords(tex_coords);
    }

    fn set_faces(&mut self, faces: Vec<u32>) {
        (**self).set_faces(faces);
    }

    fn set_face_smoothing_groups(&mut self, groups: Vec<u32>) {
        (**self).set_face_smoothing_groups(groups);
    }

    fn set_diffuse(&mut self, diffuse: DiffuseMap) {
        (**self).set_diffuse(diffuse);
    }
}
