//! Core state types for the circle simulation.
//!
//! - `Body`: one rigid circle (position, velocity, acceleration accumulator,
//!   mass, radius, color)
//! - `Color`: RGBA tag carried for the renderer, ignored by physics
//!
//! Coordinates are screen-like: x grows to the right, y grows downward,
//! so gravity is +y.

use nalgebra::Vector2;

pub type NVec2 = Vector2<f64>;

/// Rejected body construction
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum BodyError {
    #[error("body mass must be positive and finite, got {0}")]
    InvalidMass(f64),
    #[error("body radius must be positive and finite, got {0}")]
    InvalidRadius(f64),
}

/// 8-bit RGBA visual tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgba(255, 255, 255, 255);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}

/// A rigid circle.
///
/// `mass` and `radius` are only set through [`Body::new`], which rejects
/// values that are not strictly positive and finite. Everything downstream
/// divides by the mass and compares against the radius without re-checking.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub a: NVec2, // acceleration accumulator
    pub color: Color,
    mass: f64,
    radius: f64,
}

impl Body {
    pub fn new(
        x: f64,
        y: f64,
        vx: f64,
        vy: f64,
        mass: f64,
        radius: f64,
        color: Color,
    ) -> Result<Self, BodyError> {
        // NaN fails both comparisons
        if !(mass > 0.0 && mass.is_finite()) {
            return Err(BodyError::InvalidMass(mass));
        }
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(BodyError::InvalidRadius(radius));
        }

        Ok(Self {
            x: NVec2::new(x, y),
            v: NVec2::new(vx, vy),
            a: NVec2::zeros(),
            color,
            mass,
            radius,
        })
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn inv_mass(&self) -> f64 {
        self.mass.recip()
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Magnitude of the velocity
    pub fn speed(&self) -> f64 {
        self.v.norm()
    }

    /// Translational kinetic energy, ½·m·|v|²
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.v.norm_squared()
    }

    /// Whether `point` lies inside or on the circle
    pub fn contains(&self, point: NVec2) -> bool {
        (point - self.x).norm() <= self.radius
    }
}
