//! Numerical and physical parameters for a world
//!
//! `Parameters` holds the runtime tuning a `World` is built with:
//! - gravity, restitution and time scale,
//! - world bounds,
//! - collision iterations, slop and positional correction,
//! - strength of an interaction kick

/// Invalid world tuning
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParameterError {
    #[error("parameter `{name}` must be finite, got {value}")]
    NotFinite { name: &'static str, value: f64 },
    #[error("world bounds must be positive, got {width} x {height}")]
    InvalidBounds { width: f64, height: f64 },
    #[error("parameter `{name}` must be non-negative, got {value}")]
    Negative { name: &'static str, value: f64 },
    #[error("correction percent must be within [0, 1], got {0}")]
    InvalidCorrection(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub gravity: f64, // downward acceleration, length/s²
    pub restitution: f64, // fraction of normal velocity kept by a bounce
    pub time_scale: f64, // multiplies every dt
    pub width: f64, // world spans [0, width] in x
    pub height: f64, // and [0, height] in y
    pub collision_iterations: usize, // pairwise passes per step
    pub slop: f64, // penetration left uncorrected
    pub correction_percent: f64, // share of penetration removed per pair
    pub impulse_strength: f64, // magnitude of a click kick
}

impl Parameters {
    pub const GRAVITY: f64 = 784.0;
    pub const RESTITUTION: f64 = 0.8;
    pub const TIME_SCALE: f64 = 1.0;
    pub const WIDTH: f64 = 800.0;
    pub const HEIGHT: f64 = 600.0;
    pub const COLLISION_ITERATIONS: usize = 2;
    pub const SLOP: f64 = 0.01;
    pub const CORRECTION_PERCENT: f64 = 0.8;
    pub const IMPULSE_STRENGTH: f64 = 1000.0;

    pub fn validate(&self) -> Result<(), ParameterError> {
        let named = [
            ("gravity", self.gravity),
            ("restitution", self.restitution),
            ("time_scale", self.time_scale),
            ("width", self.width),
            ("height", self.height),
            ("slop", self.slop),
            ("correction_percent", self.correction_percent),
            ("impulse_strength", self.impulse_strength),
        ];
        for (name, value) in named {
            if !value.is_finite() {
                return Err(ParameterError::NotFinite { name, value });
            }
        }

        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(ParameterError::InvalidBounds {
                width: self.width,
                height: self.height,
            });
        }

        for (name, value) in [
            ("restitution", self.restitution),
            ("time_scale", self.time_scale),
            ("slop", self.slop),
            ("impulse_strength", self.impulse_strength),
        ] {
            if value < 0.0 {
                return Err(ParameterError::Negative { name, value });
            }
        }

        if !(0.0..=1.0).contains(&self.correction_percent) {
            return Err(ParameterError::InvalidCorrection(self.correction_percent));
        }

        Ok(())
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            gravity: Self::GRAVITY,
            restitution: Self::RESTITUTION,
            time_scale: Self::TIME_SCALE,
            width: Self::WIDTH,
            height: Self::HEIGHT,
            collision_iterations: Self::COLLISION_ITERATIONS,
            slop: Self::SLOP,
            correction_percent: Self::CORRECTION_PERCENT,
            impulse_strength: Self::IMPULSE_STRENGTH,
        }
    }
}
