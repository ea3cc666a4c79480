//! Build fully-initialized scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario`, containing:
//! - the `World` (parameters, bodies at t = 0, gravity)
//! - the headless run settings (`RunConfig`)
//!
//! Scenarios are inserted into Bevy as a `Resource` and consumed by the
//! stepping, input and rendering systems

use bevy::prelude::Resource;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::configuration::config::{BodyConfig, ConfigError, RandomBodiesConfig, RunConfig, ScenarioConfig};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, BodyError, Color};
use crate::simulation::world::{World, WorldError};

#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("body {index}: {source}")]
    InvalidBody { index: usize, source: BodyError },
    #[error("random `{name}` range must be finite and ordered, got [{min}, {max}]")]
    InvalidRange { name: &'static str, min: f64, max: f64 },
    #[error("run step must be positive and finite, got dt = {dt}, t_end = {t_end}")]
    InvalidRun { dt: f64, t_end: f64 },
    #[error(transparent)]
    World(#[from] WorldError),
}

/// Bevy resource representing a fully-initialized scenario
#[derive(Resource)]
pub struct Scenario {
    pub world: World,
    pub run: RunConfig,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ScenarioError> {
        let run = cfg.run;
        if !(run.dt > 0.0 && run.dt.is_finite()) || !run.t_end.is_finite() {
            return Err(ScenarioError::InvalidRun {
                dt: run.dt,
                t_end: run.t_end,
            });
        }

        let parameters = Parameters::from(cfg.world);

        // Explicit bodies first, generated ones after, so indices are stable
        let mut bodies = cfg
            .bodies
            .iter()
            .enumerate()
            .map(|(index, bc)| {
                body_from_config(bc).map_err(|source| ScenarioError::InvalidBody { index, source })
            })
            .collect::<Result<Vec<Body>, ScenarioError>>()?;

        if let Some(random) = &cfg.random {
            let offset = bodies.len();
            let generated = random_bodies(random, &parameters).map_err(|e| match e {
                ScenarioError::InvalidBody { index, source } => ScenarioError::InvalidBody {
                    index: index + offset,
                    source,
                },
                other => other,
            })?;
            bodies.extend(generated);
        }

        let world = World::new(parameters, bodies)?;
        log::info!(
            "scenario ready: {} bodies, headless dt {} until t = {}",
            world.len(),
            run.dt,
            run.t_end
        );

        Ok(Self { world, run })
    }

    /// Number of fixed `dt` steps a headless run takes to cover `t_end`
    pub fn headless_steps(&self) -> u64 {
        if self.run.t_end <= 0.0 {
            return 0;
        }
        (self.run.t_end / self.run.dt).ceil() as u64
    }
}

fn body_from_config(bc: &BodyConfig) -> Result<Body, BodyError> {
    Body::new(
        bc.x[0],
        bc.x[1],
        bc.v[0],
        bc.v[1],
        bc.m,
        bc.radius,
        bc.color.map(Color::from).unwrap_or_default(),
    )
}

/// Generate `cfg.count` bodies, reproducibly from `cfg.seed`.
///
/// Centers land in `[50, W-50] x [50, H/2]`, velocities in
/// `[-200, 200] x [-100, 100]`.
pub fn random_bodies(cfg: &RandomBodiesConfig, params: &Parameters) -> Result<Vec<Body>, ScenarioError> {
    for (name, [min, max]) in [("mass", cfg.mass), ("radius", cfg.radius)] {
        // The sampler needs a finite, representable span
        if !(min <= max && (max - min).is_finite()) {
            return Err(ScenarioError::InvalidRange { name, min, max });
        }
    }

    let mut rng = Xoshiro256PlusPlus::seed_from_u64(cfg.seed);
    let margin = 50.0;

    (0..cfg.count)
        .map(|index| {
            let x = sample(&mut rng, margin, params.width - margin);
            let y = sample(&mut rng, margin, params.height / 2.0);
            let vx = sample(&mut rng, -200.0, 200.0);
            let vy = sample(&mut rng, -100.0, 100.0);
            let mass = sample(&mut rng, cfg.mass[0], cfg.mass[1]);
            let radius = sample(&mut rng, cfg.radius[0], cfg.radius[1]);
            let color = Color::rgba(rng.random(), rng.random(), rng.random(), 255);

            Body::new(x, y, vx, vy, mass, radius, color)
                .map_err(|source| ScenarioError::InvalidBody { index, source })
        })
        .collect()
}

// Uniform in [min, max); collapses to `min` for an empty range
fn sample(rng: &mut Xoshiro256PlusPlus, min: f64, max: f64) -> f64 {
    if min < max {
        rng.random_range(min..max)
    } else {
        min
    }
}
