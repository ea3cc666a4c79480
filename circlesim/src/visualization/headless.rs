//! Windowless runner: fixed steps until the scenario's `t_end`.
//!
//! Uses Bevy's minimal plugin set so logging from the library is routed
//! through `LogPlugin` exactly as in the viewer.

use bevy::log::LogPlugin;
use bevy::prelude::*;

use crate::simulation::scenario::Scenario;

pub fn run_headless(scenario: Scenario) -> AppExit {
    println!(
        "run_headless: {} bodies, {} steps of {} s",
        scenario.world.len(),
        scenario.headless_steps(),
        scenario.run.dt
    );

    App::new()
        .insert_resource(scenario)
        .add_plugins((MinimalPlugins, LogPlugin::default()))
        .add_systems(Update, fixed_step_system)
        .run()
}

fn fixed_step_system(mut scenario: ResMut<Scenario>, mut steps: Local<u64>, mut exit: EventWriter<AppExit>) {
    let total = scenario.headless_steps();
    if *steps < total {
        let dt = scenario.run.dt;
        scenario.world.step(dt);
        *steps += 1;

        // Once per simulated second
        let per_second = (1.0 / dt).round().max(1.0) as u64;
        if *steps % per_second == 0 {
            info!(
                "t = {:.2} s, kinetic energy {:.1}",
                scenario.world.time(),
                scenario.world.total_kinetic_energy()
            );
        }
    }

    if *steps >= total {
        info!(
            "finished after {} steps at t = {:.3} s, kinetic energy {:.1}",
            *steps,
            scenario.world.time(),
            scenario.world.total_kinetic_energy()
        );
        exit.send(AppExit::Success);
    }
}
