//! 2D rigid-circle physics: velocity-Verlet integration under gravity,
//! boundary and pairwise impulse collisions, and click interaction.

pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, BodyError, Color, NVec2};
pub use simulation::params::{Parameters, ParameterError};
pub use simulation::forces::{Acceleration, AccelSet, ExternalForce, UniformGravity};
pub use simulation::integrator::{apply_force, apply_impulse, verlet_step};
pub use simulation::collision::{resolve_all_pairs, resolve_boundary, resolve_pair, Contact};
pub use simulation::interaction::{closest_edge_and_normal, find_body_at, EdgeHit};
pub use simulation::world::{World, WorldError};
pub use simulation::scenario::{Scenario, ScenarioError};

pub use configuration::config::{WorldConfig, RunConfig, BodyConfig, RandomBodiesConfig, ScenarioConfig, ConfigError};

pub use visualization::{circlesim_vis2d::run_2d, headless::run_headless};

pub use benchmark::benchmark::{bench_step, bench_collision_iterations};
