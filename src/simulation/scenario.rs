//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime bundle
//! containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - active force set (`AccelSet`)
//! - the auxiliary spin ODE, when spin evolution is enabled and at least
//!   one body qualifies
//!
//! The builder also derives per-body dissipation parameters from a
//! constant lag time when the scenario specifies `tau` instead of `sigma`.

use log::warn;

use crate::configuration::config::{IntegratorConfig, ScenarioConfig};
use crate::error::{SimError, SimResult};
use crate::simulation::engine::Engine;
use crate::simulation::forces::{AccelSet, NewtonianGravity, TidalSpin};
use crate::simulation::integrator::{leapfrog_integrator, spin_rk4_step, verlet_integrator};
use crate::simulation::params::Parameters;
use crate::simulation::spin_ode::SpinOde;
use crate::simulation::states::{Body, NVec3, Structure, System};
use crate::simulation::tides::{sigma_from_tau, spin_potential};

/// A fully-initialized simulation scenario
///
/// This is the main runtime bundle constructed from a [`ScenarioConfig`]:
/// engine settings, parameters, current system state, the set of active
/// force laws, and the spin ODE if one was registered
#[derive(Debug)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
    pub spin_ode: Option<SpinOde>,
}

impl Scenario {
    pub fn build(cfg: ScenarioConfig) -> SimResult<Self> {
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            t_end: p_cfg.t_end,
            h0: p_cfg.h0,
            eps2: p_cfg.eps2,
            G: p_cfg.G,
            spin_substeps: p_cfg.spin_substeps,
        };

        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
        let mut bodies = Vec::with_capacity(cfg.bodies.len());
        for (i, bc) in cfg.bodies.iter().enumerate() {
            let mut body = Body {
                x: NVec3::new(bc.x[0], bc.x[1], bc.x[2]),
                v: NVec3::new(bc.v[0], bc.v[1], bc.v[2]),
                m: bc.m,
                radius: bc.radius,
                structure: Structure {
                    k2: bc.k2,
                    sigma: bc.sigma,
                    moi: bc.moi,
                    spin: bc.spin.map(|s| NVec3::new(s[0], s[1], s[2])),
                },
            };

            // derive sigma from the constant lag time when only tau is given
            if let (None, Some(tau)) = (bc.sigma, bc.tau) {
                let sigma = sigma_from_tau(&body, parameters.G, tau).map_err(|_| {
                    SimError::Config(format!(
                        "body {i}: tau given but k2 and/or radius missing, cannot derive sigma"
                    ))
                })?;
                body.structure.sigma = Some(sigma);
            }

            bodies.push(body);
        }

        let system = System { bodies, t: 0.0 };

        let engine = Engine {
            integrator: cfg.engine.integrator,
            spin_evolution: cfg.engine.spin_evolution,
        };

        // Forces: Newtonian gravity always, tides when any body qualifies
        let mut forces = AccelSet::new().with(NewtonianGravity {
            G: parameters.G,
            eps2: parameters.eps2,
        });
        if system.bodies.iter().any(|b| b.feels_tides()) {
            forces = forces.with(TidalSpin { G: parameters.G });
        }

        // Spin ODE: registered once, here; the tracked-body set is fixed
        // from this point on
        let spin_ode = if engine.spin_evolution {
            let ode = SpinOde::register(&system);
            if ode.is_none() {
                warn!("spin evolution enabled but no body has k2, moi and spin all set");
            }
            ode
        } else {
            if system.bodies.iter().any(|b| b.tracks_spin()) {
                warn!("spin parameters set but spin evolution is disabled; spin axes will not evolve");
            }
            None
        };

        Ok(Self {
            engine,
            parameters,
            system,
            forces,
            spin_ode,
        })
    }

    /// Total mechanical energy: translational + rotational kinetic,
    /// Newtonian potential, and the conservative tidal potential
    pub fn total_energy(&self) -> f64 {
        let g = self.parameters.G;
        self.system.kinetic_energy()
            + self.system.gravitational_potential(g)
            + self.system.rotational_energy()
            + spin_potential(&self.system, g)
    }

    /// Advance the scenario by a single orbital step (plus the spin ODE
    /// when registered)
    pub fn step(&mut self) -> SimResult<()> {
        match self.engine.integrator {
            IntegratorConfig::Verlet => {
                verlet_integrator(&mut self.system, &self.forces, &self.parameters)
            }
            IntegratorConfig::Leapfrog => {
                leapfrog_integrator(&mut self.system, &self.forces, &self.parameters)
            }
        }
        if let Some(ode) = self.spin_ode.as_mut() {
            spin_rk4_step(&mut self.system, ode, &self.parameters)?;
        }
        Ok(())
    }

    /// Run the scenario headless until `t_end`, printing energy
    /// diagnostics ten times along the way
    pub fn run(&mut self) -> SimResult<()> {
        let steps = (self.parameters.t_end / self.parameters.h0).ceil() as usize;
        let report = (steps / 10).max(1);

        let e0 = self.total_energy();
        println!("t = {:10.4}  E = {:+.9e}", self.system.t, e0);

        for step in 0..steps {
            self.step()?;

            if (step + 1) % report == 0 {
                let e = self.total_energy();
                let drift = (e - e0) / e0.abs().max(f64::MIN_POSITIVE);
                println!(
                    "t = {:10.4}  E = {:+.9e}  drift = {:+.3e}",
                    self.system.t, e, drift
                );
            }
        }

        Ok(())
    }
}
