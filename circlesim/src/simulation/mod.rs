pub mod states;
pub mod params;
pub mod forces;
pub mod integrator;
pub mod collision;
pub mod interaction;
pub mod world;
pub mod scenario;
