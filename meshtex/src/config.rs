//! Texturing configuration (TOML)
//!
//! Holds the defaults the engine starts from: palette size, pattern tile
//! size and kind, tiling scale, and where persisted images are written.
//!
//! ```toml
//! [palette]
//! colors = 16
//! save = false
//!
//! [pattern]
//! width = 12
//! height = 12
//! scale = 1.0
//! kind = "carbon"   # carbon | checker | noise
//! seed = 0
//! save = false
//!
//! [output]
//! dir = "."
//! ```

use crate::error::{Result, TexturingError};
use crate::texture::PatternKind;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default number of palette colors
pub const DEFAULT_COLORS: usize = 16;
/// Default pattern tile width in pixels
pub const DEFAULT_PATTERN_WIDTH: u32 = 12;
/// Default pattern tile height in pixels
pub const DEFAULT_PATTERN_HEIGHT: u32 = 12;
/// Default pattern tiling scale
pub const DEFAULT_PATTERN_SCALE: f64 = 1.0;

/// Texturing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TexturingConfig {
    /// Palette settings
    #[serde(default)]
    pub palette: PaletteConfig,
    /// Pattern settings
    #[serde(default)]
    pub pattern: PatternConfig,
    /// Output settings for persisted images
    #[serde(default)]
    pub output: OutputConfig,
}

/// Palette settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteConfig {
    /// Number of colors (default: 16)
    #[serde(default = "default_colors")]
    pub colors: usize,
    /// Write `palette.png` whenever the palette is rebuilt (default: false)
    #[serde(default)]
    pub save: bool,
}

/// Pattern family names accepted in config files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PatternName {
    #[default]
    Carbon,
    Checker,
    Noise,
}

/// Pattern settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternConfig {
    /// Tile width in pixels (default: 12)
    #[serde(default = "default_pattern_width")]
    pub width: u32,
    /// Tile height in pixels (default: 12)
    #[serde(default = "default_pattern_height")]
    pub height: u32,
    /// Tiling scale (default: 1.0)
    #[serde(default = "default_pattern_scale")]
    pub scale: f64,
    /// Pattern family (default: carbon)
    #[serde(default)]
    pub kind: PatternName,
    /// Seed for noise patterns (default: 0)
    #[serde(default)]
    pub seed: u32,
    /// Write `pattern.png` whenever the pattern is rebuilt (default: false)
    #[serde(default)]
    pub save: bool,
}

impl PatternConfig {
    /// The configured pattern kind with its seed applied
    pub fn pattern_kind(&self) -> PatternKind {
        match self.kind {
            PatternName::Carbon => PatternKind::Carbon,
            PatternName::Checker => PatternKind::Checker,
            PatternName::Noise => PatternKind::Noise { seed: self.seed },
        }
    }
}

/// Output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory persisted images are written to (default: current directory)
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
}

impl OutputConfig {
    pub fn palette_path(&self) -> PathBuf {
        self.dir.join("palette.png")
    }

    pub fn pattern_path(&self) -> PathBuf {
        self.dir.join("pattern.png")
    }
}

fn default_colors() -> usize {
    DEFAULT_COLORS
}
fn default_pattern_width() -> u32 {
    DEFAULT_PATTERN_WIDTH
}
fn default_pattern_height() -> u32 {
    DEFAULT_PATTERN_HEIGHT
}
fn default_pattern_scale() -> f64 {
    DEFAULT_PATTERN_SCALE
}
fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            colors: default_colors(),
            save: false,
        }
    }
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            width: default_pattern_width(),
            height: default_pattern_height(),
            scale: default_pattern_scale(),
            kind: PatternName::default(),
            seed: 0,
            save: false,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

impl TexturingConfig {
    /// Parse a config from TOML text and validate it
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load a config file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, does not parse, or
    /// holds values the engine would reject.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| TexturingError::io(path, e))?;
        Self::from_toml_str(&content)
    }

    /// Write the config to `path`, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|e| TexturingError::io(dir, e))?;
        }
        let content = self.to_toml_string()?;
        std::fs::write(path, content).map_err(|e| TexturingError::io(path, e))
    }

    /// Check the contracts the engine enforces on these values
    pub fn validate(&self) -> Result<()> {
        if self.palette.colors == 0 {
            return Err(TexturingError::InvalidColorCount(self.palette.colors));
        }
        let (width, height) = (self.pattern.width, self.pattern.height);
        if width == 0 || height == 0 {
            return Err(TexturingError::InvalidPatternSize { width, height });
        }
        validate_scale(self.pattern.scale)
    }
}

pub(crate) fn validate_scale(scale: f64) -> Result<()> {
    if scale.is_finite() && scale > 0.0 {
        Ok(())
    } else {
        Err(TexturingError::InvalidPatternScale(scale))
    }
}
