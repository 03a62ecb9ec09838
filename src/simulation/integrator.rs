//! Fixed-step time integrators
//!
//! Provides the velocity-Verlet and single-force-eval leapfrog orbital
//! integrators, driven by `AccelSet`, plus the RK4 driver for the
//! auxiliary spin ODE that brackets each step with the pre/post
//! synchronizers.

use super::forces::AccelSet;
use super::params::Parameters;
use super::spin_ode::SpinOde;
use super::states::{NVec3, System};
use crate::error::SimResult;

/// Advance the system by one step using velocity-Verlet
/// Uses two force evaluations per step and updates positions, velocities,
/// and `sys.t` in-place based on `params.h0`
pub fn verlet_integrator(sys: &mut System, forces: &AccelSet, params: &Parameters) {
    let n = sys.bodies.len();
    if n == 0 {
        return;
    }

    let dt = params.h0;
    let half_dt = 0.5 * dt;

    // a_n from x_n at time t_n
    let mut a_old = vec![NVec3::zeros(); n];
    forces.accumulate_accels(sys.t, sys, &mut a_old);

    // kick: v_n+1/2 = v_n + (dt/2) a_n
    for (b, a) in sys.bodies.iter_mut().zip(a_old.iter()) {
        b.v += half_dt * *a;
    }

    // drift: x_n+1 = x_n + dt v_n+1/2
    for b in sys.bodies.iter_mut() {
        b.x += dt * b.v;
    }

    sys.t += dt;

    // a_n+1 from x_n+1 at time t_n+1
    let mut a_new = vec![NVec3::zeros(); n];
    forces.accumulate_accels(sys.t, sys, &mut a_new);

    // second kick: v_n+1 = v_n+1/2 + (dt/2) a_n+1
    for (b, a) in sys.bodies.iter_mut().zip(a_new.iter()) {
        b.v += half_dt * *a;
    }
}

/// Advance the system by one step using a single-force-eval leapfrog
/// (drift-kick-drift). Cheaper than velocity-Verlet by one force
/// evaluation per step
pub fn leapfrog_integrator(sys: &mut System, forces: &AccelSet, params: &Parameters) {
    let n = sys.bodies.len();
    if n == 0 {
        return;
    }

    let dt = params.h0;
    let half_dt = 0.5 * dt;

    // first drift: x_half = x_n + (dt/2) v_n
    for b in sys.bodies.iter_mut() {
        b.x += half_dt * b.v;
    }

    let t_mid = sys.t + half_dt;

    // kick: v_n+1 = v_n + dt a(x_half)
    let mut a_mid = vec![NVec3::zeros(); n];
    forces.accumulate_accels(t_mid, sys, &mut a_mid);
    for (b, a) in sys.bodies.iter_mut().zip(a_mid.iter()) {
        b.v += dt * *a;
    }

    // second drift: x_n+1 = x_half + (dt/2) v_n+1
    for b in sys.bodies.iter_mut() {
        b.x += half_dt * b.v;
    }

    sys.t += dt;
}

/// Advance the spin ODE across one orbital timestep with fixed-substep RK4
///
/// Brackets the integration with the pre/post synchronizers so the body
/// spin tags and the flat state vector agree on both sides of the step.
/// Positions are held at their current values for the whole step; only the
/// spin state evolves here. Propagates the fatal length-mismatch error if
/// the tracked-body set changed since registration
pub fn spin_rk4_step(sys: &mut System, ode: &mut SpinOde, params: &Parameters) -> SimResult<()> {
    ode.sync_pre(sys)?;

    let n = ode.len();
    let substeps = params.spin_substeps.max(1);
    let h = params.h0 / substeps as f64;

    let mut k1 = vec![0.0; n];
    let mut k2 = vec![0.0; n];
    let mut k3 = vec![0.0; n];
    let mut k4 = vec![0.0; n];
    let mut stage = vec![0.0; n];

    for _ in 0..substeps {
        ode.derivative(sys, params.G, sys.t, &ode.y, &mut k1)?;

        for i in 0..n {
            stage[i] = ode.y[i] + 0.5 * h * k1[i];
        }
        ode.derivative(sys, params.G, sys.t, &stage, &mut k2)?;

        for i in 0..n {
            stage[i] = ode.y[i] + 0.5 * h * k2[i];
        }
        ode.derivative(sys, params.G, sys.t, &stage, &mut k3)?;

        for i in 0..n {
            stage[i] = ode.y[i] + h * k3[i];
        }
        ode.derivative(sys, params.G, sys.t, &stage, &mut k4)?;

        for i in 0..n {
            ode.y[i] += h / 6.0 * (k1[i] + 2.0 * k2[i] + 2.0 * k3[i] + k4[i]);
        }
    }

    ode.sync_post(sys)
}
