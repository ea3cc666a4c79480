//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`WorldConfig`]         – world tuning (gravity, bounds, collisions)
//! - [`RunConfig`]           – fixed step and stop time for headless runs
//! - [`BodyConfig`]          – initial state for each explicit body
//! - [`RandomBodiesConfig`]  – seeded generation of extra bodies
//! - [`ScenarioConfig`]      – top-level wrapper used to load a scenario
//!
//! # YAML format
//! Every section is optional; missing keys take the documented defaults.
//!
//! ```yaml
//! world:
//!   width: 800
//!   height: 600
//!   gravity: 784.0
//!   restitution: 0.8
//!   time_scale: 1.0
//!   collision_iterations: 2
//!   slop: 0.01
//!   correction_percent: 0.8
//!   impulse_strength: 1000.0
//!
//! run:
//!   dt: 0.008333            # headless fixed step
//!   t_end: 10.0             # headless stop time
//!
//! bodies:
//!   - x: [100.0, 100.0]
//!     v: [10.0, 0.0]
//!     m: 1.0
//!     radius: 10.0
//!     color: [255, 64, 64, 255]
//!
//! random:
//!   count: 15
//!   seed: 42
//! ```
//!
//! `Scenario::build_scenario` maps this into the runtime `World`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::simulation::params::Parameters;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read scenario {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed scenario YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// World tuning; defaults are those of [`Parameters::default`]
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    pub width: f64,
    pub height: f64,
    pub gravity: f64,
    pub restitution: f64,
    pub time_scale: f64,
    pub collision_iterations: usize,
    pub slop: f64,
    pub correction_percent: f64,
    pub impulse_strength: f64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        let p = Parameters::default();
        Self {
            width: p.width,
            height: p.height,
            gravity: p.gravity,
            restitution: p.restitution,
            time_scale: p.time_scale,
            collision_iterations: p.collision_iterations,
            slop: p.slop,
            correction_percent: p.correction_percent,
            impulse_strength: p.impulse_strength,
        }
    }
}

impl From<WorldConfig> for Parameters {
    fn from(cfg: WorldConfig) -> Self {
        Parameters {
            gravity: cfg.gravity,
            restitution: cfg.restitution,
            time_scale: cfg.time_scale,
            width: cfg.width,
            height: cfg.height,
            collision_iterations: cfg.collision_iterations,
            slop: cfg.slop,
            correction_percent: cfg.correction_percent,
            impulse_strength: cfg.impulse_strength,
        }
    }
}

/// Settings for headless runs; the viewer steps with wall-clock time instead
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RunConfig {
    pub dt: f64,    // fixed step in seconds
    pub t_end: f64, // stop once simulated time reaches this
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            dt: 1.0 / 120.0,
            t_end: 10.0,
        }
    }
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BodyConfig {
    pub x: [f64; 2], // initial center
    #[serde(default)]
    pub v: [f64; 2], // initial velocity, at rest if omitted
    pub m: f64, // mass
    pub radius: f64,
    #[serde(default)]
    pub color: Option<[u8; 4]>, // RGBA, white if omitted
}

/// Seeded generation of bodies scattered over the upper half of the world
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct RandomBodiesConfig {
    pub count: usize,
    #[serde(default)]
    pub seed: u64,
    #[serde(default = "RandomBodiesConfig::default_mass")]
    pub mass: [f64; 2], // [min, max)
    #[serde(default = "RandomBodiesConfig::default_radius")]
    pub radius: [f64; 2], // [min, max)
}

impl RandomBodiesConfig {
    fn default_mass() -> [f64; 2] {
        [0.5, 2.0]
    }

    fn default_radius() -> [f64; 2] {
        [10.0, 30.0]
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ScenarioConfig {
    pub world: WorldConfig,
    pub run: RunConfig,
    pub bodies: Vec<BodyConfig>, // explicit bodies, in order
    pub random: Option<RandomBodiesConfig>, // generated bodies, appended after `bodies`
}

impl ScenarioConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&text)
    }
}
