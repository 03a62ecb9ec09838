//! Auxiliary ODE for per-body spin evolution
//!
//! Owns the flat spin state vector (3 slots per tracked body) together with
//! the slot-to-body mapping, both fixed when the ODE is registered. The
//! derivative function and both synchronizers re-validate the tracked-body
//! count against the vector length on every call: the tracked set must not
//! change once the ODE exists, and a mismatch is an unrecoverable
//! configuration error.

use crate::error::{SimError, SimResult};
use crate::simulation::states::{NVec3, System};
use crate::simulation::tides::spin_orbit_force;

#[derive(Debug)]
pub struct SpinOde {
    slots: Vec<usize>, // body index per 3-slot group, fixed at registration
    pub y: Vec<f64>,   // flat spin state, [sx, sy, sz] per tracked body
}

impl SpinOde {
    /// Register the spin ODE over all bodies currently satisfying
    /// [`crate::simulation::states::Body::tracks_spin`], seeding the state
    /// vector from their spin tags. Returns `None` when no body qualifies
    pub fn register(sys: &System) -> Option<Self> {
        let mut slots = Vec::new();
        let mut y = Vec::new();

        for (i, body) in sys.bodies.iter().enumerate() {
            if !body.tracks_spin() {
                continue;
            }
            // tracks_spin guarantees the spin tag is present
            if let Some(spin) = body.structure.spin {
                slots.push(i);
                y.extend_from_slice(&[spin.x, spin.y, spin.z]);
            }
        }

        if slots.is_empty() {
            None
        } else {
            Some(Self { slots, y })
        }
    }

    /// Length of the state vector (3 per tracked body)
    pub fn len(&self) -> usize {
        self.y.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    /// Number of spin-tracked bodies
    pub fn tracked(&self) -> usize {
        self.slots.len()
    }

    /// Check that the set of spin-tracked bodies still matches the state
    /// vector registered over it
    fn validate(&self, sys: &System) -> SimResult<()> {
        let expected = 3 * sys.bodies.iter().filter(|b| b.tracks_spin()).count();
        if self.y.len() != expected {
            return Err(SimError::SpinStateMismatch {
                expected,
                found: self.y.len(),
            });
        }
        Ok(())
    }

    /// Time-derivative of the spin state vector
    ///
    /// For each tracked body the pairwise spin-orbit force is re-evaluated
    /// with the spin read from `y` (not from the body tag, which is only
    /// synchronized at step boundaries), and the reaction torque
    /// `(r_i - r_j) x F`, scaled by `-mu_ij / moi_i`, is accumulated into
    /// the matching slots of `ydot`. `t` is unused: the law is
    /// time-independent and the parameter exists for ODE-signature
    /// compatibility
    pub fn derivative(
        &self,
        sys: &System,
        g: f64,
        _t: f64,
        y: &[f64],
        ydot: &mut [f64],
    ) -> SimResult<()> {
        self.validate(sys)?;

        for (s, &i) in self.slots.iter().enumerate() {
            ydot[3 * s] = 0.0;
            ydot[3 * s + 1] = 0.0;
            ydot[3 * s + 2] = 0.0;

            let body = &sys.bodies[i];
            let (Some(k2), Some(moi)) = (body.structure.k2, body.structure.moi) else {
                continue;
            };
            let sigma = body.sigma_or_zero();
            let spin = NVec3::new(y[3 * s], y[3 * s + 1], y[3 * s + 2]);

            let mut torque = NVec3::zeros();
            for (j, other) in sys.bodies.iter().enumerate() {
                if i == j || body.m == 0.0 || other.m == 0.0 {
                    continue;
                }
                let force = spin_orbit_force(body, other, g, k2, sigma, spin);
                let d = body.x - other.x;
                let mu = body.m * other.m / (body.m + other.m);
                torque += d.cross(&force) * (-mu / moi);
            }

            ydot[3 * s] = torque.x;
            ydot[3 * s + 1] = torque.y;
            ydot[3 * s + 2] = torque.z;
        }

        Ok(())
    }

    /// Copy per-body spin tags into the working state vector before a step
    pub fn sync_pre(&mut self, sys: &System) -> SimResult<()> {
        self.validate(sys)?;

        for (s, &i) in self.slots.iter().enumerate() {
            if let Some(spin) = sys.bodies[i].structure.spin {
                self.y[3 * s] = spin.x;
                self.y[3 * s + 1] = spin.y;
                self.y[3 * s + 2] = spin.z;
            }
        }
        Ok(())
    }

    /// Copy the evolved state vector back into the body spin tags after a
    /// step, creating the tags if absent
    pub fn sync_post(&self, sys: &mut System) -> SimResult<()> {
        self.validate(sys)?;

        for (s, &i) in self.slots.iter().enumerate() {
            sys.bodies[i].structure.spin =
                Some(NVec3::new(self.y[3 * s], self.y[3 * s + 1], self.y[3 * s + 2]));
        }
        Ok(())
    }
}
