use std::time::Instant;

use crate::configuration::config::RandomBodiesConfig;
use crate::simulation::collision::max_penetration;
use crate::simulation::params::Parameters;
use crate::simulation::scenario::{random_bodies, ScenarioError};
use crate::simulation::world::World;

fn bench_world(n: usize, params: Parameters) -> Result<World, ScenarioError> {
    let cfg = RandomBodiesConfig {
        count: n,
        seed: 42,
        mass: [0.5, 2.0],
        radius: [4.0, 12.0],
    };
    let bodies = random_bodies(&cfg, &params)?;
    Ok(World::new(params, bodies)?)
}

pub fn bench_step() -> Result<(), ScenarioError> {
    // Different body counts to test; the pairwise pass is O(n²)
    let ns = [50, 100, 200, 400, 800, 1600];
    let steps = 120; // one second at 120 Hz
    let dt = 1.0 / 120.0;

    for n in ns {
        let params = Parameters {
            width: 2000.0,
            height: 2000.0,
            ..Parameters::default()
        };
        let mut world = bench_world(n, params)?;

        // Warm up
        world.step(dt);

        let t0 = Instant::now();
        for _ in 0..steps {
            world.step(dt);
        }
        let elapsed = t0.elapsed().as_secs_f64();

        println!(
            "N = {n:5}, {steps} steps = {:8.6} s, per step = {:10.3} us",
            elapsed,
            elapsed / steps as f64 * 1e6
        );
    }

    Ok(())
}

pub fn bench_collision_iterations() -> Result<(), ScenarioError> {
    // Same crowded start for each iteration count, so the only variable is
    // how many relaxation passes run per step
    let n = 400;
    let steps = 240;
    let dt = 1.0 / 120.0;

    for iterations in [1, 2, 4, 8, 16] {
        let params = Parameters {
            collision_iterations: iterations,
            ..Parameters::default()
        };
        let mut world = bench_world(n, params)?;

        let t0 = Instant::now();
        for _ in 0..steps {
            world.step(dt);
        }
        let elapsed = t0.elapsed().as_secs_f64();

        println!(
            "iterations = {iterations:2}, {steps} steps = {:8.6} s, max penetration = {:8.4}",
            elapsed,
            max_penetration(world.bodies())
        );
    }

    Ok(())
}
