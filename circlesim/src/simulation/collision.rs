//! Boundary and circle-circle collision handling
//!
//! Both resolvers use the world's restitution. Pairwise resolution is an
//! impulse along the contact normal followed by a positional correction
//! split by inverse mass; `resolve_all_pairs` sweeps every unordered pair
//! in index order, so later pairs see the corrections of earlier ones.

use super::params::Parameters;
use super::states::{Body, NVec2};

/// Contact normal used when two centers coincide exactly: `b` is pushed
/// toward +x and `a` toward -x.
pub const COINCIDENT_NORMAL: [f64; 2] = [1.0, 0.0];

/// What `resolve_pair` did to a colliding pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub normal: NVec2, // unit vector from a toward b
    pub penetration: f64, // overlap before correction
    pub impulse: f64, // scalar impulse j
    pub corrected: bool, // whether positions were pushed apart
}

/// Clamp a body inside `[0, width] x [0, height]`.
///
/// A crossed bound puts the center `radius` away from it and reflects the
/// matching velocity component, scaled by restitution.
pub fn resolve_boundary(body: &mut Body, params: &Parameters) {
    let r = body.radius();
    let e = params.restitution;

    if body.x.y > params.height - r {
        body.x.y = params.height - r;
        body.v.y *= -e;
    }
    if body.x.y < r {
        body.x.y = r;
        body.v.y *= -e;
    }
    if body.x.x > params.width - r {
        body.x.x = params.width - r;
        body.v.x *= -e;
    }
    if body.x.x < r {
        body.x.x = r;
        body.v.x *= -e;
    }
}

/// Resolve an overlap between `a` and `b`.
///
/// Returns `None` when the circles do not touch or are already separating;
/// a separating pair gets neither an impulse nor a positional correction.
pub fn resolve_pair(a: &mut Body, b: &mut Body, params: &Parameters) -> Option<Contact> {
    let delta = b.x - a.x;
    let distance = delta.norm();
    let min_dist = a.radius() + b.radius();
    if distance >= min_dist {
        return None;
    }

    let normal = if distance > 0.0 {
        delta / distance
    } else {
        log::trace!("coincident centers, using fallback normal {:?}", COINCIDENT_NORMAL);
        NVec2::from(COINCIDENT_NORMAL)
    };

    // Relative velocity along the normal
    let vn = (b.v - a.v).dot(&normal);
    if vn > 0.0 {
        return None;
    }

    let inv_a = a.inv_mass();
    let inv_b = b.inv_mass();
    let inv_sum = inv_a + inv_b;

    let j = -(1.0 + params.restitution) * vn / inv_sum;
    let impulse = j * normal;
    a.v -= impulse * inv_a;
    b.v += impulse * inv_b;

    let penetration = min_dist - distance;
    let corrected = penetration > params.slop;
    if corrected {
        let correction = (penetration * params.correction_percent / inv_sum) * normal;
        a.x -= correction * inv_a;
        b.x += correction * inv_b;
    }

    Some(Contact {
        normal,
        penetration,
        impulse: j,
        corrected,
    })
}

/// One pass over every pair `(i, j)` with `i < j`; returns the number of
/// contacts resolved.
pub fn resolve_all_pairs(bodies: &mut [Body], params: &Parameters) -> usize {
    let n = bodies.len();
    let mut contacts = 0;

    for i in 0..n {
        // Split so body i and every later body can be borrowed together
        let (head, tail) = bodies.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            if resolve_pair(a, b, params).is_some() {
                contacts += 1;
            }
        }
    }

    contacts
}

/// Largest overlap left between any two bodies, zero if none touch
pub fn max_penetration(bodies: &[Body]) -> f64 {
    let mut worst: f64 = 0.0;
    for (i, a) in bodies.iter().enumerate() {
        for b in &bodies[i + 1..] {
            let overlap = a.radius() + b.radius() - (b.x - a.x).norm();
            worst = worst.max(overlap);
        }
    }
    worst
}
