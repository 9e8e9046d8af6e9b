//! Texturing engine
//!
//! Turns a triangle mesh into the two buffers a renderer consumes for a
//! given [`TexturingMode`]:
//!
//! - a texture coordinate buffer, two floats per entry
//! - a face buffer, six `u32`s per triangle (`vertex, tex index` x 3)
//!
//! The engine caches the palette and pattern images it hands out, and the
//! density extremes of the last colored-vertex build. Nothing is rebuilt
//! implicitly: callers change state through setters, then ask for buffers.
//!
//! # Example
//! ```
//! use meshtex::{
//!     IndexTriple, MeshContext, Position3, TexturingConfig, TexturingEngine, TexturingMode,
//! };
//!
//! let vertices = [
//!     Position3::new(0.0, 0.0, 0.0),
//!     Position3::new(1.0, 0.0, 0.0),
//!     Position3::new(0.0, 1.0, 0.0),
//! ];
//! let faces = [IndexTriple::new(0, 1, 2)];
//! let ctx = MeshContext::new(&vertices, &faces);
//!
//! let mut engine = TexturingEngine::new(TexturingConfig::default())?;
//! let buffers = engine.build(&ctx)?;
//! assert_eq!(buffers.tex_coords, vec![0.0, 0.0]);
//! assert_eq!(buffers.faces, vec![0, 0, 1, 0, 2, 0]);
//!
//! engine.set_colors(2)?;
//! engine.set_mode(TexturingMode::ColoredFaces)?;
//! assert_eq!(engine.build(&ctx)?.faces, vec![0, 0, 1, 0, 2, 0]);
//! # Ok::<(), meshtex::TexturingError>(())
//! ```

mod faces;
mod mode;
mod tex_coords;
mod vertices;

pub use faces::{
    density_range, faces_with_density_map, faces_with_faces, faces_with_textures,
    faces_with_vertices, faces_without_texture, map_faces,
};
pub use mode::{TexturingMode, UnknownMode};
pub use tex_coords::{create_tex_coords, tex_coords_with_pattern};
pub use vertices::{mesh_area, update_vertices, update_vertices_scaled};

use crate::config::{validate_scale, TexturingConfig};
use crate::density::{Density, DensityRange};
use crate::error::{Result, TexturingError};
use crate::geometry::{AreaSize, GridSize, IndexTriple, Position3};
use crate::texture::{write_png, Palette, Pattern, TextureBuffer};

/// Read-only view of the mesh a build runs against
#[derive(Clone, Copy, Debug, Default)]
pub struct MeshContext<'a> {
    /// Vertex positions; index is vertex id
    pub vertices: &'a [Position3],
    /// Vertex index triples, one per triangle
    pub faces: &'a [IndexTriple],
    /// Texture index triples parallel to `faces`; may be empty
    pub textures: &'a [IndexTriple],
    /// Precomputed rectangular UV grid for image texturing; may be empty
    pub image_tex_coords: &'a [f32],
    /// Tessellation grid the UV grids are laid over
    pub grid: GridSize,
    /// Physical surface extent, for pattern aspect correction
    pub area: AreaSize,
}

impl<'a> MeshContext<'a> {
    pub fn new(vertices: &'a [Position3], faces: &'a [IndexTriple]) -> Self {
        Self {
            vertices,
            faces,
            ..Default::default()
        }
    }
}

/// Output of one build
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TexturedBuffers {
    /// Two floats per texture coordinate
    pub tex_coords: Vec<f32>,
    /// Six indices per triangle
    pub faces: Vec<u32>,
}

/// Mode state machine plus cached palette/pattern images
#[derive(Clone, Debug)]
pub struct TexturingEngine {
    config: TexturingConfig,
    mode: TexturingMode,
    colors: usize,
    pattern_scale: f64,
    palette: Option<Palette>,
    pattern: Option<Pattern>,
    density: Density,
    range: DensityRange,
}

impl TexturingEngine {
    /// Create an engine in [`TexturingMode::None`]
    ///
    /// Color count and pattern scale start from `config`. No image is built
    /// until a mode needs one.
    pub fn new(config: TexturingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            mode: TexturingMode::None,
            colors: config.palette.colors,
            pattern_scale: config.pattern.scale,
            palette: None,
            pattern: None,
            density: Density::zero(),
            range: DensityRange::default(),
            config,
        })
    }

    pub fn config(&self) -> &TexturingConfig {
        &self.config
    }

    pub fn mode(&self) -> TexturingMode {
        self.mode
    }

    pub fn colors(&self) -> usize {
        self.colors
    }

    pub fn pattern_scale(&self) -> f64 {
        self.pattern_scale
    }

    pub fn palette(&self) -> Option<&Palette> {
        self.palette.as_ref()
    }

    pub fn pattern(&self) -> Option<&Pattern> {
        self.pattern.as_ref()
    }

    pub fn density(&self) -> &Density {
        &self.density
    }

    /// Extremes from the most recent [`update_extremes`](Self::update_extremes)
    pub fn density_range(&self) -> DensityRange {
        self.range
    }

    /// Switch mode, building the palette or pattern if the mode needs one
    /// and none is cached. Buffers are not rebuilt.
    pub fn set_mode(&mut self, mode: TexturingMode) -> Result<()> {
        if mode.uses_palette() {
            self.ensure_palette()?;
        }
        if mode.uses_pattern() {
            self.ensure_pattern()?;
        }
        if mode != self.mode {
            tracing::debug!(from = %self.mode, to = %mode, "Texturing mode changed");
        }
        self.mode = mode;
        Ok(())
    }

    /// Set the palette size
    ///
    /// Rebuilds the palette unless one with this count is already cached.
    pub fn set_colors(&mut self, colors: usize) -> Result<()> {
        if colors == 0 {
            return Err(TexturingError::InvalidColorCount(colors));
        }
        if self.palette.as_ref().is_some_and(|p| p.colors() == colors) {
            return Ok(());
        }
        self.create_palette(colors, self.config.palette.save)
    }

    /// Replace the density function used by colored-vertex builds
    pub fn set_density(&mut self, density: Density) {
        self.density = density;
    }

    /// Set how many pattern tiles map onto the grid
    pub fn set_pattern_scale(&mut self, scale: f64) -> Result<()> {
        validate_scale(scale)?;
        self.pattern_scale = scale;
        Ok(())
    }

    /// Build a fresh palette of `colors` swatches, optionally writing it out
    pub fn create_palette(&mut self, colors: usize, persist: bool) -> Result<()> {
        let palette = self.generate_palette(colors, persist)?;
        self.colors = colors;
        self.palette = Some(palette);
        Ok(())
    }

    /// Build a fresh `width x height` pattern tile, optionally writing it out
    pub fn create_pattern(&mut self, width: u32, height: u32, persist: bool) -> Result<()> {
        self.pattern = Some(self.generate_pattern(width, height, persist)?);
        Ok(())
    }

    fn generate_palette(&self, colors: usize, persist: bool) -> Result<Palette> {
        let palette = Palette::new(colors)?;
        if persist {
            write_png(palette.image(), &self.config.output.palette_path())?;
        }
        Ok(palette)
    }

    fn generate_pattern(&self, width: u32, height: u32, persist: bool) -> Result<Pattern> {
        let pattern = Pattern::new(width, height, self.config.pattern.pattern_kind())?;
        if persist {
            write_png(pattern.image(), &self.config.output.pattern_path())?;
        }
        Ok(pattern)
    }

    fn ensure_palette(&mut self) -> Result<&Palette> {
        let palette = match self.palette.take() {
            Some(p) if p.colors() == self.colors => p,
            _ => self.generate_palette(self.colors, self.config.palette.save)?,
        };
        Ok(self.palette.insert(palette))
    }

    fn ensure_pattern(&mut self) -> Result<&Pattern> {
        let pattern = match self.pattern.take() {
            Some(p) => p,
            None => {
                let (width, height) = (self.config.pattern.width, self.config.pattern.height);
                self.generate_pattern(width, height, self.config.pattern.save)?
            }
        };
        Ok(self.pattern.insert(pattern))
    }

    /// Recompute density extremes over `points`
    pub fn update_extremes(&mut self, points: &[Position3]) {
        self.range = density_range(points, &self.density);
        tracing::debug!(
            min = self.range.min(),
            max = self.range.max(),
            "Updated density extremes"
        );
    }

    /// Palette index of the density at `p`, in `[0, colors - 1]`
    pub fn map_density(&self, p: Position3) -> usize {
        self.range.bucket(self.density.eval(p), self.colors)
    }

    /// Palette index of face `ordinal` of `total`, in `[0, colors - 1]`
    pub fn map_faces(&self, ordinal: usize, total: usize) -> usize {
        map_faces(ordinal, total, self.colors)
    }

    /// Texture coordinate buffer for `mode`
    pub fn build_tex_coords(
        &mut self,
        mode: TexturingMode,
        ctx: &MeshContext<'_>,
    ) -> Result<Vec<f32>> {
        (mode.builders().tex_coords)(self, ctx)
    }

    /// Face buffer for `mode`
    pub fn build_faces(&mut self, mode: TexturingMode, ctx: &MeshContext<'_>) -> Result<Vec<u32>> {
        (mode.builders().faces)(self, ctx)
    }

    /// Both buffers for the active mode
    pub fn build(&mut self, ctx: &MeshContext<'_>) -> Result<TexturedBuffers> {
        let builders = self.mode.builders();
        let tex_coords = (builders.tex_coords)(self, ctx)?;
        let faces = (builders.faces)(self, ctx)?;
        tracing::debug!(
            mode = %self.mode,
            tex_coords = tex_coords.len() / 2,
            faces = faces.len() / 6,
            "Built texture buffers"
        );
        Ok(TexturedBuffers { tex_coords, faces })
    }

    /// Image the active mode samples from, if it is generated here
    pub fn diffuse_texture(&self) -> Option<&TextureBuffer> {
        match self.mode {
            TexturingMode::Pattern => self.pattern.as_ref().map(Pattern::image),
            TexturingMode::ColoredFaces | TexturingMode::ColoredVertices => {
                self.palette.as_ref().map(Palette::image)
            }
            TexturingMode::None | TexturingMode::Image => None,
        }
    }

    pub(crate) fn untextured_tex_coords(&mut self, _ctx: &MeshContext<'_>) -> Result<Vec<f32>> {
        Ok(vec![0.0, 0.0])
    }

    pub(crate) fn untextured_faces(&mut self, ctx: &MeshContext<'_>) -> Result<Vec<u32>> {
        Ok(faces_without_texture(ctx.faces))
    }

    pub(crate) fn image_tex_coords(&mut self, ctx: &MeshContext<'_>) -> Result<Vec<f32>> {
        if ctx.image_tex_coords.is_empty() {
            return Err(TexturingError::MissingTexCoords);
        }
        Ok(ctx.image_tex_coords.to_vec())
    }

    pub(crate) fn image_faces(&mut self, ctx: &MeshContext<'_>) -> Result<Vec<u32>> {
        if ctx.textures.is_empty() {
            Ok(faces_with_vertices(ctx.faces))
        } else {
            faces_with_textures(ctx.faces, ctx.textures)
        }
    }

    pub(crate) fn pattern_tex_coords(&mut self, ctx: &MeshContext<'_>) -> Result<Vec<f32>> {
        let scale = self.pattern_scale;
        let pattern = self.ensure_pattern()?;
        tex_coords_with_pattern(
            ctx.grid,
            pattern.width(),
            pattern.height(),
            scale,
            ctx.area.aspect_ratio(),
        )
    }

    pub(crate) fn pattern_faces(&mut self, ctx: &MeshContext<'_>) -> Result<Vec<u32>> {
        faces_with_textures(ctx.faces, ctx.textures)
    }

    pub(crate) fn palette_tex_coords(&mut self, _ctx: &MeshContext<'_>) -> Result<Vec<f32>> {
        Ok(self.ensure_palette()?.tex_coords())
    }

    pub(crate) fn colored_faces(&mut self, ctx: &MeshContext<'_>) -> Result<Vec<u32>> {
        Ok(faces_with_faces(ctx.faces, self.colors))
    }

    pub(crate) fn colored_vertices(&mut self, ctx: &MeshContext<'_>) -> Result<Vec<u32>> {
        // Extremes must be final before any face is mapped
        self.update_extremes(ctx.vertices);
        let engine = &*self;
        faces_with_density_map(ctx.vertices, ctx.faces, |p| engine.map_density(p))
    }
}

#[cfg(test)]
mod tests;
