//! Generated diffuse images
//!
//! The engine asks two image providers for pictures to map onto a mesh: a
//! [`Palette`] of discrete swatches for the colored modes and a tileable
//! [`Pattern`] for pattern mode. Both hand back a [`TextureBuffer`]. Only its
//! size feeds into the buffer math; the pixels go straight to the host.
//!
//! ```
//! use meshtex::texture::{Palette, Pattern, PatternKind};
//!
//! let palette = Palette::new(6)?;
//! assert_eq!(palette.tex_coords().len(), 12);
//!
//! let tile = Pattern::new(16, 8, PatternKind::Checker)?;
//! assert_eq!((tile.width(), tile.height()), (16, 8));
//! # Ok::<(), meshtex::TexturingError>(())
//! ```

mod color;
mod export;
mod image;
mod palette;
mod pattern;

pub use color::hsv_to_rgb;
pub use export::{encode_png, write_png};
pub use image::TextureBuffer;
pub use palette::Palette;
pub use pattern::{Pattern, PatternKind};
