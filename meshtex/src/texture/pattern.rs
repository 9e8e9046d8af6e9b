//! Tileable procedural patterns
//!
//! Every pattern repeats with a period of exactly its own size, so the
//! engine can wrap texture coordinates past `1.0` without visible seams.

use super::color::lerp_color;
use super::TextureBuffer;
use crate::error::{Result, TexturingError};
use noise::{NoiseFn, Perlin};
use std::f64::consts::TAU;

const FIBER_DARK: [u8; 4] = [18, 18, 22, 255];
const FIBER_LIGHT: [u8; 4] = [96, 96, 108, 255];
const CHECKER_A: [u8; 4] = [230, 230, 230, 255];
const CHECKER_B: [u8; 4] = [40, 40, 40, 255];

/// Radius of the torus the noise pattern is sampled on
const NOISE_RADIUS: f64 = 1.5;
const NOISE_OCTAVES: u32 = 4;

/// Procedural pattern selection
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PatternKind {
    /// Woven carbon fiber: two horizontal and two vertical strands per tile
    #[default]
    Carbon,
    /// 2x2 checkerboard
    Checker,
    /// Fractal Perlin noise wrapped on a torus
    Noise {
        /// Noise seed
        seed: u32,
    },
}

/// A generated tile image
#[derive(Clone, Debug, PartialEq)]
pub struct Pattern {
    kind: PatternKind,
    image: TextureBuffer,
}

impl Pattern {
    /// Generate a `width x height` tile
    pub fn new(width: u32, height: u32, kind: PatternKind) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(TexturingError::InvalidPatternSize { width, height });
        }
        let image = match kind {
            PatternKind::Carbon => carbon(width, height),
            PatternKind::Checker => checker(width, height),
            PatternKind::Noise { seed } => torus_noise(width, height, seed),
        };
        tracing::debug!(width, height, ?kind, "Created pattern");
        Ok(Self { kind, image })
    }

    pub fn kind(&self) -> PatternKind {
        self.kind
    }

    /// Tile width in pixels
    pub fn width(&self) -> u32 {
        self.image.width
    }

    /// Tile height in pixels
    pub fn height(&self) -> u32 {
        self.image.height
    }

    pub fn image(&self) -> &TextureBuffer {
        &self.image
    }
}

fn carbon(width: u32, height: u32) -> TextureBuffer {
    // Each quadrant holds one strand; diagonal quadrants run horizontally
    let strand = |pos: u32, size: u32| {
        let phase = ((pos as f32 + 0.5) * 2.0 / size as f32).fract();
        (phase * std::f32::consts::PI).sin()
    };
    TextureBuffer::from_fn(width, height, |x, y| {
        let horizontal = (2 * x) / width == (2 * y) / height;
        let shade = if horizontal {
            strand(y, height)
        } else {
            strand(x, width)
        };
        lerp_color(FIBER_DARK, FIBER_LIGHT, shade)
    })
}

fn checker(width: u32, height: u32) -> TextureBuffer {
    TextureBuffer::from_fn(width, height, |x, y| {
        if ((2 * x) / width + (2 * y) / height) % 2 == 0 {
            CHECKER_A
        } else {
            CHECKER_B
        }
    })
}

fn torus_noise(width: u32, height: u32, seed: u32) -> TextureBuffer {
    let perlin = Perlin::new(seed);
    TextureBuffer::from_fn(width, height, |x, y| {
        // Both axes map to full circles, so opposite edges sample the same ring
        let a = TAU * x as f64 / width as f64;
        let b = TAU * y as f64 / height as f64;
        let point = [a.cos(), a.sin(), b.cos(), b.sin()].map(|c| c * NOISE_RADIUS);
        let value = sample_fbm(&perlin, point);
        lerp_color(FIBER_DARK, CHECKER_A, ((value + 1.0) / 2.0) as f32)
    })
}

/// Fractal Brownian motion: octaves at doubling frequency and halving
/// amplitude, normalized back to roughly `[-1, 1]`
fn sample_fbm<N: NoiseFn<f64, 4>>(noise: &N, point: [f64; 4]) -> f64 {
    let (sum, norm) = (0..NOISE_OCTAVES).fold((0.0, 0.0), |(sum, norm), octave| {
        let frequency = f64::from(1u32 << octave);
        let amplitude = frequency.recip();
        let sample = noise.get(point.map(|c| c * frequency));
        (sum + sample * amplitude, norm + amplitude)
    });
    sum / norm
}
