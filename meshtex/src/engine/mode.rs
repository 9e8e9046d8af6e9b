//! Texturing modes and their buffer builders

use super::{MeshContext, TexturingEngine};
use crate::error::Result;
use std::fmt;
use std::str::FromStr;

/// How a mesh is textured
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TexturingMode {
    /// Untextured; a single degenerate coordinate
    #[default]
    None,
    /// External image on the mesh's rectangular UV grid
    Image,
    /// Procedural pattern tiled across the UV grid
    Pattern,
    /// One palette color per face, spread by face order
    ColoredFaces,
    /// Palette color per vertex picked by a density function
    ColoredVertices,
}

pub(crate) type TexCoordBuilder = fn(&mut TexturingEngine, &MeshContext<'_>) -> Result<Vec<f32>>;
pub(crate) type FaceBuilder = fn(&mut TexturingEngine, &MeshContext<'_>) -> Result<Vec<u32>>;

/// Coordinate and face builder for one mode
///
/// Both halves come from the same match arm so they cannot drift apart.
pub(crate) struct ModeBuilders {
    pub tex_coords: TexCoordBuilder,
    pub faces: FaceBuilder,
}

impl TexturingMode {
    /// All modes, in declaration order
    pub const ALL: [Self; 5] = [
        Self::None,
        Self::Image,
        Self::Pattern,
        Self::ColoredFaces,
        Self::ColoredVertices,
    ];

    pub(crate) fn builders(self) -> ModeBuilders {
        match self {
            Self::None => ModeBuilders {
                tex_coords: TexturingEngine::untextured_tex_coords,
                faces: TexturingEngine::untextured_faces,
            },
            Self::Image => ModeBuilders {
                tex_coords: TexturingEngine::image_tex_coords,
                faces: TexturingEngine::image_faces,
            },
            Self::Pattern => ModeBuilders {
                tex_coords: TexturingEngine::pattern_tex_coords,
                faces: TexturingEngine::pattern_faces,
            },
            Self::ColoredFaces => ModeBuilders {
                tex_coords: TexturingEngine::palette_tex_coords,
                faces: TexturingEngine::colored_faces,
            },
            Self::ColoredVertices => ModeBuilders {
                tex_coords: TexturingEngine::palette_tex_coords,
                faces: TexturingEngine::colored_vertices,
            },
        }
    }

    /// Whether this mode samples the palette image
    pub fn uses_palette(self) -> bool {
        matches!(self, Self::ColoredFaces | Self::ColoredVertices)
    }

    /// Whether this mode samples the pattern image
    pub fn uses_pattern(self) -> bool {
        self == Self::Pattern
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Image => "image",
            Self::Pattern => "pattern",
            Self::ColoredFaces => "faces",
            Self::ColoredVertices => "vertices",
        }
    }
}

impl fmt::Display for TexturingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognized texturing mode name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown texturing mode '{0}' (expected none, image, pattern, faces or vertices)")]
pub struct UnknownMode(pub String);

impl FromStr for TexturingMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownMode(s.to_string()))
    }
}
