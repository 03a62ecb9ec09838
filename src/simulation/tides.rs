//! Tidal and spin-distortion force law
//!
//! Pairwise accelerations for bodies with physical structure: the
//! conservative quadrupole distortion raised by spin and by the companion,
//! plus a constant-time-lag dissipative term, following the equilibrium
//! tide framework of Eggleton, Kiseleva & Hut (1998).
//!
//! All functions here are pure: they read two body states and return a
//! force vector, a potential, or a derived parameter. Accumulation into
//! the simulation's acceleration buffer lives in [`crate::simulation::forces`],
//! spin evolution in [`crate::simulation::spin_ode`].

use crate::error::{SimError, SimResult};
use crate::simulation::states::{Body, NVec3, System};

/// Tidal/spin interaction force between `source` and `target`
///
/// All structure parameters (`k2`, `sigma`, `spin`) belong to the source,
/// the body whose figure is distorted. Returns the raw interaction force
/// before mass-ratio splitting; `k2 == 0` short-circuits to the zero
/// vector. The caller must skip zero-mass pairs (reduced mass would
/// divide by zero) and coincident bodies (the law diverges as r^-8..r^-10
/// at small separations).
pub fn spin_orbit_force(
    source: &Body,
    target: &Body,
    g: f64,
    k2: f64,
    sigma: f64,
    spin: NVec3,
) -> NVec3 {
    if k2 == 0.0 {
        return NVec3::zeros();
    }

    let ms = source.m;
    let mt = target.m;
    let mu = ms * mt / (ms + mt); // reduced mass, zero masses checked by caller
    let big_a = k2 * source.radius.powi(5); // quadrupole response amplitude

    // separation and relative velocity, target to source
    let d = source.x - target.x;
    let dv = source.v - target.v;
    let d2 = d.norm_squared();
    let dr = d2.sqrt();

    let quad_prefactor = mt * big_a / mu;
    let omega_dot_d = spin.dot(&d);
    let omega2 = spin.norm_squared();

    let t1 = 5.0 * omega_dot_d * omega_dot_d / (2.0 * dr.powi(7));
    let t2 = omega2 / (2.0 * dr.powi(5));
    let t3 = omega_dot_d / dr.powi(5);
    let t4 = 6.0 * g * mt / dr.powi(8);

    let mut force = quad_prefactor * ((t1 - t2 - t4) * d - t3 * spin);

    if sigma != 0.0 {
        // constant-time-lag dissipation
        let d_dot_v = d.dot(&dv);
        let h = d.cross(&dv); // specific relative angular momentum
        let lag = (h - d2 * spin).cross(&d);
        let prefactor = -9.0 * sigma * mt * mt * big_a * big_a / (2.0 * mu * d2.powi(5));
        force += prefactor * (3.0 * d_dot_v * d + lag);
    }

    force
}

/// Conservative quadrupole potential energy summed over all eligible pairs
///
/// A pair contributes when the source carries `k2` and `sigma` with nonzero
/// radius and mass; the target is the body raising the tide, so its radius
/// enters the amplitude while the source supplies the Love number. Used for
/// energy-conservation diagnostics only, never for dynamics.
pub fn spin_potential(sys: &System, g: f64) -> f64 {
    let n = sys.bodies.len();
    let mut total = 0.0;

    for i in 0..n {
        let source = &sys.bodies[i];
        let Some(k2) = source.structure.k2 else {
            continue;
        };
        if source.structure.sigma.is_none() || source.radius == 0.0 || source.m == 0.0 {
            continue;
        }
        for j in 0..n {
            if i == j {
                continue;
            }
            let target = &sys.bodies[j];
            if target.m == 0.0 {
                continue;
            }
            total += pair_potential(source, target, g, k2);
        }
    }

    total
}

fn pair_potential(source: &Body, target: &Body, g: f64, k2: f64) -> f64 {
    let fac = (source.m / target.m) * k2 * target.radius.powi(5);

    // separation in reverse order: target raising the tide on the source
    let d = target.x - source.x;
    let d2 = d.norm_squared();

    -0.5 * g * source.m * target.m / d2.powi(3) * fac
}

/// Dissipation parameter from a constant tidal lag time `tau`
///
/// Requires the body to carry a Love number and a nonzero radius; returns
/// a recoverable error otherwise so callers may probe freely
pub fn sigma_from_tau(body: &Body, g: f64, tau: f64) -> SimResult<f64> {
    match body.structure.k2 {
        Some(k2) if body.radius != 0.0 => Ok(4.0 * tau * g / (3.0 * body.radius.powi(5) * k2)),
        _ => Err(SimError::MissingTidalParams),
    }
}

/// Dissipation parameter from a tidal quality factor `q`, evaluated at the
/// current mean motion of `body` about `primary`
///
/// Same preconditions and error behavior as [`sigma_from_tau`]
pub fn sigma_from_q(body: &Body, primary: &Body, g: f64, q: f64) -> SimResult<f64> {
    match body.structure.k2 {
        Some(k2) if body.radius != 0.0 => {
            let n = mean_motion(body, primary, g);
            Ok(2.0 * g / (3.0 * q * body.radius.powi(5) * k2 * n))
        }
        _ => Err(SimError::MissingTidalParams),
    }
}

/// Osculating mean motion of `body` about `primary`, with the semi-major
/// axis taken from the vis-viva relation on the relative state
fn mean_motion(body: &Body, primary: &Body, g: f64) -> f64 {
    let gm = g * (body.m + primary.m);
    let d = body.x - primary.x;
    let dv = body.v - primary.v;
    let a = 1.0 / (2.0 / d.norm() - dv.norm_squared() / gm);
    (gm / (a * a * a)).sqrt()
}
