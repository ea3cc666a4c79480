//! Acceleration contributors for the circle world
//!
//! Every step the world asks its `AccelSet` for the acceleration of each
//! body. Terms are summed; the only built-in term is uniform gravity.
//! Per-tick pushes from outside the world are described by `ExternalForce`.

use crate::simulation::states::{Body, NVec2};

/// Collection of acceleration terms (gravity, wind, etc.)
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations for all `bodies`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, bodies: &[Body], out: &mut [NVec2]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        for term in &self.terms {
            term.acceleration(bodies, out);
        }
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for acceleration sources.
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, bodies: &[Body], out: &mut [NVec2]);
}

/// Constant downward pull, identical for every body.
///
/// Equivalent to applying the force `(0, m·g)` to each body.
pub struct UniformGravity {
    pub g: f64,
}

impl Acceleration for UniformGravity {
    fn acceleration(&self, _bodies: &[Body], out: &mut [NVec2]) {
        for a in out.iter_mut() {
            a.y += self.g;
        }
    }
}

/// A force acting on one body for a single step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExternalForce {
    pub body: usize,
    pub force: NVec2,
}

impl ExternalForce {
    pub fn new(body: usize, fx: f64, fy: f64) -> Self {
        Self {
            body,
            force: NVec2::new(fx, fy),
        }
    }
}
