//! Textured mesh controller
//!
//! [`TexturedMesh`] owns a mesh topology and a [`TexturingEngine`], and keeps
//! a [`MeshSink`] in step with them. Every setter that changes what the
//! buffers depend on rebuilds both buffers and pushes them, together with the
//! diffuse map for the active mode. A failed rebuild pushes nothing and
//! rolls the texturing state back, so the sink and [`TexturedMesh::texture_mode`]
//! keep agreeing.

mod generator;
mod sink;

pub use generator::{MeshGenerator, MeshTopology, SurfaceGrid};
pub use sink::{DiffuseMap, MeshBuffers, MeshSink, DEFAULT_DIFFUSE_COLOR};

use crate::config::TexturingConfig;
use crate::density::Density;
use crate::engine::{
    create_tex_coords, faces_without_texture, mesh_area, update_vertices,
    update_vertices_scaled, MeshContext, TexturingEngine, TexturingMode,
};
use crate::error::Result;
use crate::geometry::{AreaSize, GridSize, IndexTriple, Position3};

/// Smoothing group assigned to every face
const SMOOTHING_GROUP: u32 = 1;

/// A mesh whose texture buffers follow its texturing mode
#[derive(Debug)]
pub struct TexturedMesh<S: MeshSink> {
    topology: MeshTopology,
    image_tex_coords: Vec<f32>,
    engine: TexturingEngine,
    diffuse_color: [u8; 4],
    image_uri: Option<String>,
    sink: S,
}

impl<S: MeshSink> TexturedMesh<S> {
    /// Take ownership of `topology` and push the untextured mesh to `sink`
    pub fn new(topology: MeshTopology, sink: S, config: TexturingConfig) -> Result<Self> {
        let engine = TexturingEngine::new(config)?;
        let image_tex_coords = match topology.grid {
            Some(grid) => create_tex_coords(grid)?,
            None => Vec::new(),
        };
        let mut mesh = Self {
            topology,
            image_tex_coords,
            engine,
            diffuse_color: DEFAULT_DIFFUSE_COLOR,
            image_uri: None,
            sink,
        };
        mesh.create_mesh();
        Ok(mesh)
    }

    /// Generate the topology, then behave like [`new`](Self::new)
    pub fn from_generator(
        generator: &impl MeshGenerator,
        sink: S,
        config: TexturingConfig,
    ) -> Result<Self> {
        Self::new(generator.generate()?, sink, config)
    }

    fn create_mesh(&mut self) {
        let faces = &self.topology.faces;
        self.sink.set_points(update_vertices(&self.topology.vertices));
        self.sink.set_tex_coords(vec![0.0, 0.0]);
        self.sink.set_faces(faces_without_texture(faces));
        self.sink
            .set_face_smoothing_groups(vec![SMOOTHING_GROUP; faces.len()]);
        tracing::debug!(
            nodes = self.topology.vertices.len(),
            faces = faces.len(),
            "Created mesh"
        );
    }

    /// Lay a regular UV grid of `grid` cells over the mesh
    ///
    /// Image and pattern modes sample through this grid. The active mode is
    /// not rebuilt.
    pub fn create_tex_coords(&mut self, grid: GridSize) -> Result<()> {
        self.image_tex_coords = create_tex_coords(grid)?;
        self.topology.grid = Some(grid);
        Ok(())
    }

    /// Set the physical extent used for pattern aspect correction
    pub fn set_area(&mut self, area: AreaSize) {
        self.topology.area = area;
    }

    /// Untextured, optionally with a new solid diffuse color
    pub fn set_texture_mode_none(&mut self, color: Option<[u8; 4]>) -> Result<()> {
        let previous = self.diffuse_color;
        if let Some(color) = color {
            self.diffuse_color = color;
        }
        let applied = self.apply(|engine| engine.set_mode(TexturingMode::None));
        if applied.is_err() {
            self.diffuse_color = previous;
        }
        applied
    }

    /// Map an external image through the UV grid
    ///
    /// An empty `uri` leaves the mesh untouched.
    pub fn set_texture_mode_image(&mut self, uri: &str) -> Result<()> {
        if uri.is_empty() {
            tracing::warn!("Ignoring image texture mode with an empty URI");
            return Ok(());
        }
        let previous = self.image_uri.replace(uri.to_string());
        let applied = self.apply(|engine| engine.set_mode(TexturingMode::Image));
        if applied.is_err() {
            self.image_uri = previous;
        }
        applied
    }

    /// Tile the generated pattern at `scale`
    pub fn set_texture_mode_pattern(&mut self, scale: f64) -> Result<()> {
        self.apply(|engine| {
            engine.set_pattern_scale(scale)?;
            engine.set_mode(TexturingMode::Pattern)
        })
    }

    /// Color each vertex from `colors` palette entries by `density`
    pub fn set_texture_mode_vertices(&mut self, colors: usize, density: Density) -> Result<()> {
        self.apply(|engine| {
            engine.set_colors(colors)?;
            engine.set_density(density);
            engine.set_mode(TexturingMode::ColoredVertices)
        })
    }

    /// Color each face from `colors` palette entries by face order
    pub fn set_texture_mode_faces(&mut self, colors: usize) -> Result<()> {
        self.apply(|engine| {
            engine.set_colors(colors)?;
            engine.set_mode(TexturingMode::ColoredFaces)
        })
    }

    pub fn set_colors(&mut self, colors: usize) -> Result<()> {
        self.apply(|engine| engine.set_colors(colors))
    }

    pub fn set_density(&mut self, density: Density) -> Result<()> {
        self.apply(|engine| {
            engine.set_density(density);
            Ok(())
        })
    }

    pub fn set_pattern_scale(&mut self, scale: f64) -> Result<()> {
        self.apply(|engine| engine.set_pattern_scale(scale))
    }

    /// Rebuild and push both buffers and the diffuse map for the active mode
    pub fn refresh(&mut self) -> Result<()> {
        self.apply(|_| Ok(()))
    }

    /// Run `change` on a copy of the engine and rebuild from it
    ///
    /// The copy replaces the engine only once both buffers are built, so a
    /// failed change or build leaves the engine and the sink as they were.
    fn apply(&mut self, change: impl FnOnce(&mut TexturingEngine) -> Result<()>) -> Result<()> {
        let mut staged = self.engine.clone();
        change(&mut staged)?;
        let buffers = staged.build(&self.context())?;
        self.engine = staged;

        self.sink.set_tex_coords(buffers.tex_coords);
        self.sink.set_faces(buffers.faces);
        if let Some(diffuse) = self.diffuse_map() {
            self.sink.set_diffuse(diffuse);
        }
        Ok(())
    }

    fn context(&self) -> MeshContext<'_> {
        MeshContext {
            vertices: &self.topology.vertices,
            faces: &self.topology.faces,
            textures: &self.topology.textures,
            image_tex_coords: &self.image_tex_coords,
            grid: self.topology.grid.unwrap_or_default(),
            area: self.topology.area,
        }
    }

    fn diffuse_map(&self) -> Option<DiffuseMap> {
        match self.engine.mode() {
            TexturingMode::None => Some(DiffuseMap::Color(self.diffuse_color)),
            TexturingMode::Image => self.image_uri.clone().map(DiffuseMap::Uri),
            _ => self
                .engine
                .diffuse_texture()
                .cloned()
                .map(DiffuseMap::Texture),
        }
    }

    /// Re-push vertex positions with every coordinate scaled by `factor`
    pub fn update_vertices(&mut self, factor: f32) {
        self.sink
            .set_points(update_vertices_scaled(&self.topology.vertices, factor));
    }

    /// Total surface area of the mesh
    pub fn mesh_area(&self) -> Result<f64> {
        mesh_area(&self.topology.vertices, &self.topology.faces)
    }

    pub fn texture_mode(&self) -> TexturingMode {
        self.engine.mode()
    }

    pub fn vertices(&self) -> &[Position3] {
        &self.topology.vertices
    }

    pub fn faces(&self) -> &[IndexTriple] {
        &self.topology.faces
    }

    pub fn textures(&self) -> &[IndexTriple] {
        &self.topology.textures
    }

    pub fn grid(&self) -> Option<GridSize> {
        self.topology.grid
    }

    pub fn area(&self) -> AreaSize {
        self.topology.area
    }

    pub fn engine(&self) -> &TexturingEngine {
        &self.engine
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
