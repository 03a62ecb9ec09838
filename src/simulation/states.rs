//! Core state types for the N-body simulation
//!
//! Defines the body/system structs plus the optional structure block that
//! tags a body with tidal/spin physical parameters. A body whose structure
//! block is empty behaves as a point particle.

use nalgebra::Vector3;
pub type NVec3 = Vector3<f64>;

/// Optional physical-structure parameters for a body
///
/// Presence of a parameter, not just its value, is meaningful: a body
/// raises and feels quadrupole tides only once `k2` and `spin` are set,
/// dissipates only once `sigma` is also set, and its spin evolves over
/// time only once `moi` is set as well
#[derive(Debug, Clone, Copy, Default)]
pub struct Structure {
    pub k2: Option<f64>,     // potential Love number of degree 2
    pub sigma: Option<f64>,  // tidal dissipation parameter, absent treated as 0
    pub moi: Option<f64>,    // fully dimensional moment of inertia
    pub spin: Option<NVec3>, // spin frequency vector
}

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec3, // position
    pub v: NVec3, // velocity
    pub m: f64, // mass
    pub radius: f64, // physical radius
    pub structure: Structure, // tidal/spin tags, empty for point particles
}

impl Body {
    /// Body raises structure-dependent forces on its companions
    pub fn feels_tides(&self) -> bool {
        self.structure.k2.is_some() && self.structure.spin.is_some()
    }

    /// Body's spin vector evolves under the auxiliary ODE
    ///
    /// Single eligibility predicate shared by ODE registration, the
    /// derivative function and both synchronizers
    pub fn tracks_spin(&self) -> bool {
        self.structure.k2.is_some()
            && self.structure.moi.is_some()
            && self.structure.spin.is_some()
    }

    /// Dissipation parameter, with absent treated as zero
    pub fn sigma_or_zero(&self) -> f64 {
        self.structure.sigma.unwrap_or(0.0)
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // collection of bodies
    pub t: f64, // time
}

impl System {
    /// Total translational kinetic energy
    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(|b| 0.5 * b.m * b.v.norm_squared()).sum()
    }

    /// Pairwise Newtonian potential energy, unsoftened
    pub fn gravitational_potential(&self, g: f64) -> f64 {
        let n = self.bodies.len();
        let mut u = 0.0;
        for i in 0..n {
            for j in (i + 1)..n {
                let d = (self.bodies[j].x - self.bodies[i].x).norm();
                if d > 0.0 {
                    u -= g * self.bodies[i].m * self.bodies[j].m / d;
                }
            }
        }
        u
    }

    /// Rotational kinetic energy of bodies carrying a moment of inertia
    /// and a spin vector
    pub fn rotational_energy(&self) -> f64 {
        self.bodies
            .iter()
            .filter_map(|b| match (b.structure.moi, b.structure.spin) {
                (Some(moi), Some(s)) => Some(0.5 * moi * s.norm_squared()),
                _ => None,
            })
            .sum()
    }
}
