pub mod circlesim_vis2d;
pub mod headless;
