//! Scalar density fields over 3D space
//!
//! A density function picks a palette color per vertex in
//! [`TexturingMode::ColoredVertices`](crate::TexturingMode::ColoredVertices).

use crate::geometry::Position3;
use std::fmt;
use std::sync::Arc;

/// A scalar field evaluated at mesh vertices
///
/// Implemented for any `Fn(Position3) -> f64` closure, so callers normally
/// pass a closure:
///
/// ```
/// use meshtex::{Density, Position3};
///
/// let height = Density::new(|p: Position3| p.z);
/// assert_eq!(height.eval(Position3::new(0.0, 0.0, 2.5)), 2.5);
/// ```
pub trait DensityFunction: Send + Sync {
    /// Evaluate the field at `p`
    fn eval(&self, p: Position3) -> f64;
}

impl<F> DensityFunction for F
where
    F: Fn(Position3) -> f64 + Send + Sync,
{
    #[inline]
    fn eval(&self, p: Position3) -> f64 {
        self(p)
    }
}

/// Shared handle to a density function
///
/// Cheap to clone; the engine and controller both hold one.
#[derive(Clone)]
pub struct Density(Arc<dyn DensityFunction>);

impl Density {
    pub fn new(f: impl DensityFunction + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// The constant-zero field
    pub fn zero() -> Self {
        Self::new(|_: Position3| 0.0)
    }

    #[inline]
    pub fn eval(&self, p: Position3) -> f64 {
        self.0.eval(p)
    }
}

impl Default for Density {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Debug for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Density(..)")
    }
}

/// Min/max of a density field over a vertex set
///
/// Always satisfies `min < max` with both bounds finite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DensityRange {
    min: f64,
    max: f64,
}

impl Default for DensityRange {
    fn default() -> Self {
        Self { min: 0.0, max: 1.0 }
    }
}

impl DensityRange {
    /// Build a range, widening `max` to `min + 1` when the bounds coincide
    ///
    /// Bounds that are not finite or out of order (an all-NaN field folds to
    /// `(inf, -inf)`) give the default `(0, 1)`. Past `2^53` the widening
    /// grows with `min` so the bounds still differ.
    pub fn new(min: f64, max: f64) -> Self {
        if !(min.is_finite() && max.is_finite()) || max < min {
            return Self::default();
        }
        if max > min {
            return Self { min, max };
        }
        let width = 1.0_f64.max(min.abs() * f64::EPSILON);
        if (min + width).is_finite() {
            Self {
                min,
                max: min + width,
            }
        } else {
            Self {
                min: min - width,
                max: min,
            }
        }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Map `value` to a palette slot in `[0, colors - 1]`
    #[inline]
    pub fn bucket(&self, value: f64, colors: usize) -> usize {
        let f = (value - self.min) / (self.max - self.min) * colors as f64;
        clamp_index(f, colors)
    }
}

/// Truncate towards zero and clamp to `[0, colors - 1]`. NaN maps to 0.
#[inline]
pub(crate) fn clamp_index(f: f64, colors: usize) -> usize {
    let last = colors.saturating_sub(1);
    if f.is_nan() || f < 0.0 {
        0
    } else if f >= colors as f64 {
        last
    } else {
        (f as usize).min(last)
    }
}
