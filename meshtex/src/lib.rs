//! Meshtex - texture buffers for procedural triangle meshes
//!
//! Given vertex positions and triangle index triples, meshtex produces the
//! interleaved texture-coordinate and face buffers a renderer needs for one
//! of five texturing modes:
//!
//! - **None**: a single degenerate coordinate, untextured faces
//! - **Image**: an external image on a regular UV grid
//! - **Pattern**: a generated tile repeated across the UV grid
//! - **ColoredFaces**: one palette color per triangle
//! - **ColoredVertices**: one palette color per vertex, picked by a density
//!   function
//!
//! [`TexturingEngine`] does the buffer math. [`TexturedMesh`] wraps it around
//! a mesh and pushes results into a host-supplied [`MeshSink`].
//!
//! # Example
//! ```
//! use meshtex::{AreaSize, GridSize, MeshBuffers, SurfaceGrid, TexturedMesh, TexturingConfig};
//!
//! let surface = SurfaceGrid::new(AreaSize::new(2.0, 2.0), GridSize::new(8, 8))
//!     .with_height(|x, y| (x * x + y * y).sqrt());
//! let mut mesh =
//!     TexturedMesh::from_generator(&surface, MeshBuffers::new(), TexturingConfig::default())?;
//! mesh.set_texture_mode_faces(8)?;
//! assert_eq!(mesh.sink().face_count(), 128);
//! # Ok::<(), meshtex::TexturingError>(())
//! ```

pub mod config;
pub mod density;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod mesh;
pub mod texture;

pub use config::TexturingConfig;
pub use density::{Density, DensityFunction, DensityRange};
pub use engine::{MeshContext, TexturedBuffers, TexturingEngine, TexturingMode, UnknownMode};
pub use error::{Result, TexturingError};
pub use geometry::{AreaSize, GridSize, IndexTriple, Position3};
pub use mesh::{
    DiffuseMap, MeshBuffers, MeshGenerator, MeshSink, MeshTopology, SurfaceGrid, TexturedMesh,
};
pub use texture::{Palette, Pattern, PatternKind, TextureBuffer};
