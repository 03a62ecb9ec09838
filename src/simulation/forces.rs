//! Force / acceleration contributors for the n-body engine
//!
//! Defines the acceleration trait plus the two force laws the engine
//! ships: direct Newtonian gravity and the tidal/spin quadrupole effect.
//! Each term adds its contribution into a shared per-body acceleration
//! buffer owned by the integrator.

use crate::simulation::states::{NVec3, System};
use crate::simulation::tides::spin_orbit_force;

/// Collection of acceleration terms (gravity, tides, etc.)
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl std::fmt::Debug for AccelSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccelSet")
            .field("terms", &self.terms.len())
            .finish()
    }
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add an acceleration term
    pub fn with(mut self, term: impl Acceleration + Send + Sync + 'static) -> Self {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations at time `t` for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, t: f64, sys: &System, out: &mut [NVec3]) {
        for a in out.iter_mut() {
            *a = NVec3::zeros();
        }
        for term in &self.terms {
            term.acceleration(t, sys, out);
        }
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for acceleration sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, t: f64, sys: &System, out: &mut [NVec3]);
}

/// Newtonian gravity with softening (direct n^2 sum)
///
/// Per-pair softening blends the squared radii of both bodies with the
/// global floor `eps2` to smooth close encounters
#[allow(non_snake_case)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
    pub eps2: f64, // softening
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, _t: f64, sys: &System, out: &mut [NVec3]) {
        let n = sys.bodies.len();

        // each unordered pair (i, j) with i < j
        for i in 0..n {
            let bi = &sys.bodies[i];
            for j in (i + 1)..n {
                let bj = &sys.bodies[j];

                // displacement from i to j: i is pulled along +r, j along -r
                let r = bj.x - bi.x;
                let r2 = r.norm_squared();

                let soft2 =
                    0.5 * (bi.radius * bi.radius + bj.radius * bj.radius) + self.eps2;
                let d2 = r2 + soft2;

                let inv_r = d2.sqrt().recip();
                let inv_r3 = inv_r * inv_r * inv_r;
                let coef = self.G * inv_r3;

                // equal and opposite: a = G m r / |r_soft|^3
                out[i] += coef * bj.m * r;
                out[j] -= coef * bi.m * r;
            }
        }
    }
}

/// Tidal/spin quadrupole forces for bodies with physical structure
///
/// For every ordered pair where the source carries a Love number and a full
/// spin vector, evaluates the spin-orbit force with the source as the
/// distorted body and splits it into equal-and-opposite accelerations by
/// mass ratio. A single interaction force is computed per ordered pair and
/// redistributed, not two independent force evaluations.
#[allow(non_snake_case)]
pub struct TidalSpin {
    pub G: f64, // gravitational constant
}

impl Acceleration for TidalSpin {
    fn acceleration(&self, _t: f64, sys: &System, out: &mut [NVec3]) {
        let n = sys.bodies.len();

        for i in 0..n {
            let source = &sys.bodies[i];
            // source needs k2 and all three spin components, otherwise it
            // stays a point particle; sigma is optional
            let (Some(k2), Some(spin)) = (source.structure.k2, source.structure.spin) else {
                continue;
            };
            let sigma = source.sigma_or_zero();

            for j in 0..n {
                if i == j {
                    continue;
                }
                let target = &sys.bodies[j]; // j raises tides on i
                if source.m == 0.0 || target.m == 0.0 {
                    continue;
                }

                let force = spin_orbit_force(source, target, self.G, k2, sigma, spin);
                let mtot = source.m + target.m;

                out[j] -= (source.m / mtot) * force;
                out[i] += (target.m / mtot) * force;
            }
        }
    }
}
