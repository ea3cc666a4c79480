//! The simulated world: bodies, tuning, forces and time.
//!
//! One call to [`World::step`] is a complete unit of work: every body is
//! integrated and clamped to the bounds, then the pairwise pass runs
//! `collision_iterations` times over the whole set.

use super::collision::{resolve_all_pairs, resolve_boundary};
use super::forces::{AccelSet, ExternalForce, UniformGravity};
use super::integrator::{apply_force, apply_impulse, verlet_step};
use super::interaction::{closest_edge_and_normal, find_body_at};
use super::params::{ParameterError, Parameters};
use super::states::{Body, NVec2};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WorldError {
    #[error("invalid world parameters: {0}")]
    Parameters(#[from] ParameterError),
    #[error("no body with index {0}")]
    NoSuchBody(usize),
    #[error("body {index} with radius {radius} does not fit in a {width} x {height} world")]
    BodyTooLarge {
        index: usize,
        radius: f64,
        width: f64,
        height: f64,
    },
}

pub struct World {
    bodies: Vec<Body>,
    params: Parameters,
    forces: AccelSet,
    t: f64,
}

impl World {
    /// Build a world with uniform gravity from `params`.
    ///
    /// Every body must fit between both pairs of walls. The number of
    /// bodies is fixed from here on.
    pub fn new(params: Parameters, bodies: Vec<Body>) -> Result<Self, WorldError> {
        params.validate()?;
        // A circle wider than the world would be clamped against both walls
        // of an axis in the same step and end up outside
        if let Some((index, body)) = bodies
            .iter()
            .enumerate()
            .find(|(_, b)| 2.0 * b.radius() > params.width.min(params.height))
        {
            return Err(WorldError::BodyTooLarge {
                index,
                radius: body.radius(),
                width: params.width,
                height: params.height,
            });
        }

        let forces = AccelSet::new().with(UniformGravity { g: params.gravity });
        log::info!(
            "world {} x {} with {} bodies, gravity {}",
            params.width,
            params.height,
            bodies.len(),
            params.gravity
        );

        Ok(Self {
            bodies,
            params,
            forces,
            t: 0.0,
        })
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    /// Mutable access to a body's state; mass and radius stay read-only.
    pub fn body_mut(&mut self, index: usize) -> Option<&mut Body> {
        self.bodies.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn params(&self) -> &Parameters {
        &self.params
    }

    /// Simulated seconds elapsed, after time scaling
    pub fn time(&self) -> f64 {
        self.t
    }

    pub fn total_kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    /// Advance the world by `dt` wall-clock seconds.
    pub fn step(&mut self, dt: f64) {
        self.advance(dt, &[]);
    }

    /// Advance by `dt` with extra forces acting during this step only.
    ///
    /// The forces join gravity in this step's new acceleration. All indices
    /// are checked before anything moves.
    pub fn step_with(&mut self, dt: f64, external: &[ExternalForce]) -> Result<(), WorldError> {
        if let Some(bad) = external.iter().find(|f| f.body >= self.bodies.len()) {
            return Err(WorldError::NoSuchBody(bad.body));
        }
        self.advance(dt, external);
        Ok(())
    }

    /// Add a force to a body's accumulator; it acts in the next step's
    /// position update and half of its velocity update. A step with zero
    /// `dt` still resets the accumulator and drops it.
    pub fn apply_force(&mut self, index: usize, force: NVec2) -> Result<(), WorldError> {
        let body = self.bodies.get_mut(index).ok_or(WorldError::NoSuchBody(index))?;
        apply_force(body, force.x, force.y);
        Ok(())
    }

    pub fn apply_impulse(&mut self, index: usize, impulse: NVec2) -> Result<(), WorldError> {
        let body = self.bodies.get_mut(index).ok_or(WorldError::NoSuchBody(index))?;
        apply_impulse(body, impulse.x, impulse.y);
        Ok(())
    }

    pub fn find_body_at(&self, point: NVec2) -> Option<usize> {
        find_body_at(&self.bodies, point)
    }

    /// Kick the body under `point` upward with `impulse_strength`.
    ///
    /// Returns the index of the kicked body, if any.
    pub fn kick_at(&mut self, point: NVec2) -> Option<usize> {
        let index = self.find_body_at(point)?;
        let strength = self.params.impulse_strength;
        let body = &mut self.bodies[index];

        let hit = closest_edge_and_normal(body, point);
        apply_impulse(body, hit.normal.x * strength, hit.normal.y * strength);
        log::debug!("kicked body {index} at edge {:?}, direction {:?}", hit.edge, hit.normal);

        Some(index)
    }

    fn scaled_dt(&self, dt: f64) -> f64 {
        if !dt.is_finite() || dt < 0.0 {
            log::warn!("ignoring invalid time step {dt}");
            return 0.0;
        }
        dt * self.params.time_scale
    }

    fn advance(&mut self, dt: f64, external: &[ExternalForce]) {
        let dt = self.scaled_dt(dt);
        let n = self.bodies.len();

        // a_new for every body: acceleration terms plus this step's pushes
        let mut a_new = vec![NVec2::zeros(); n];
        self.forces.accumulate_accels(&self.bodies, &mut a_new);
        for f in external {
            a_new[f.body] += f.force * self.bodies[f.body].inv_mass();
        }

        for (body, a) in self.bodies.iter_mut().zip(a_new) {
            verlet_step(body, a, dt);
            resolve_boundary(body, &self.params);
        }

        for _ in 0..self.params.collision_iterations {
            resolve_all_pairs(&mut self.bodies, &self.params);
        }

        self.t += dt;
    }
}
