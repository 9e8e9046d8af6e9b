//! Error types for texturing operations

use std::path::PathBuf;

/// Errors raised while building texture or face buffers.
///
/// Degenerate density ranges and out-of-range color indices are recovered
/// locally and never show up here.
#[derive(Debug, thiserror::Error)]
pub enum TexturingError {
    /// The texture-index list is shorter than the face list
    #[error("texture index list has {textures} entries but face list has {faces}")]
    InconsistentTextures {
        /// Number of faces in the mesh
        faces: usize,
        /// Number of texture-index triples supplied
        textures: usize,
    },

    /// Palette color count below one
    #[error("invalid color count {0} (must be at least 1)")]
    InvalidColorCount(usize),

    /// Pattern image with a zero dimension
    #[error("invalid pattern size {width}x{height} (both dimensions must be at least 1)")]
    InvalidPatternSize {
        /// Requested width in pixels
        width: u32,
        /// Requested height in pixels
        height: u32,
    },

    /// Pattern scale that is not a finite positive number
    #[error("invalid pattern scale {0} (must be finite and greater than 0)")]
    InvalidPatternScale(f64),

    /// Texture coordinate grid with a zero dimension
    #[error("invalid grid size {width}x{height} (both dimensions must be at least 1)")]
    InvalidGridSize {
        /// Grid columns
        width: u32,
        /// Grid rows
        height: u32,
    },

    /// A face references a vertex that does not exist
    #[error("face {face} references vertex {index} but the mesh has {count} vertices")]
    VertexOutOfRange {
        /// Ordinal of the offending face
        face: usize,
        /// Vertex index referenced by the face
        index: u32,
        /// Number of vertices in the mesh
        count: usize,
    },

    /// Image mode was requested on a mesh without a texture coordinate grid
    #[error("image texturing requires a texture coordinate grid")]
    MissingTexCoords,

    /// Filesystem error while persisting an image or reading config
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File being read or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    Png(#[from] png::EncodingError),

    /// Config file could not be parsed
    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    /// Config could not be serialized
    #[error("config serialization failed: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

impl TexturingError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, TexturingError>;
