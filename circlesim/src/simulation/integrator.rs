//! Fixed-step velocity-Verlet integration for a single body
//!
//! The body's acceleration field doubles as an accumulator: it holds the
//! acceleration of the step just taken plus anything added by
//! [`apply_force`] since, and is consumed as `a_old` by the next step.

use super::states::{Body, NVec2};

/// Advance one body by `dt` using velocity-Verlet.
///
/// ```text
/// x_n+1 = x_n + v_n dt + 1/2 a_old dt²
/// v_n+1 = v_n + 1/2 (a_old + a_new) dt
/// ```
///
/// `a_new` is the acceleration for this step (gravity plus this tick's
/// external forces). Afterwards the accumulator holds exactly `a_new`.
/// With `dt == 0` position and velocity are left untouched, but the
/// accumulator is still replaced, so pending `apply_force` contributions
/// are dropped.
pub fn verlet_step(body: &mut Body, a_new: NVec2, dt: f64) {
    let a_old = body.a;
    let half_dt = 0.5 * dt;

    body.x += dt * body.v + half_dt * dt * a_old;
    body.v += half_dt * (a_old + a_new);

    // Reset the accumulator to this step's acceleration
    body.a = a_new;
}

/// Add `(fx, fy) / mass` to the body's acceleration accumulator.
///
/// Takes effect as part of `a_old` in the body's next step.
pub fn apply_force(body: &mut Body, fx: f64, fy: f64) {
    body.a += NVec2::new(fx, fy) * body.inv_mass();
}

/// Change velocity by `(ix, iy) / mass` immediately.
pub fn apply_impulse(body: &mut Body, ix: f64, iy: f64) {
    body.v += NVec2::new(ix, iy) * body.inv_mass();
}
