//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – global engine options (integrator, spin evolution)
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`BodyConfig`]       – initial state and structure for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   integrator: "verlet"    # or "leapfrog"
//!   spin_evolution: true
//!
//! parameters:
//!   t_end: 10.0             # total simulation time
//!   h0: 0.001               # fixed step size
//!   eps2: 0.0               # softening epsilon^2 (gravity only)
//!   G: 1.0                  # gravitational constant
//!   spin_substeps: 1        # RK4 substeps per orbital step
//!
//! bodies:
//!   - x: [0.0, 0.0, 0.0]
//!     v: [0.0, 0.0, 0.0]
//!     m: 1.0
//!     radius: 0.00465
//!     k2: 0.07              # structure block: all optional
//!     tau: 0.0001           # lag time; sigma derived when sigma omitted
//!     moi: 0.07
//!     spin: [0.0, 0.0, 20.0]
//!   - x: [0.1, 0.0, 0.0]
//!     v: [0.0, 3.164, 0.0]
//!     m: 0.001              # bare point particle
//! ```
//!
//! The engine then maps this configuration into its internal runtime
//! representation via the scenario builder.

use serde::Deserialize;

/// Which orbital integrator the engine uses
/// `integrator: "verlet"` or `integrator: "leapfrog"`
#[derive(Deserialize, Debug, Clone)]
pub enum IntegratorConfig {
    /// Velocity-Verlet, two force evaluations per step
    #[serde(rename = "verlet")]
    Verlet,

    /// Drift-kick-drift leapfrog, one force evaluation per step
    #[serde(rename = "leapfrog")]
    Leapfrog,
}

/// High-level engine configuration
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub integrator: IntegratorConfig, // time integrator for orbital motion
    pub spin_evolution: bool, // evolve spin vectors via the auxiliary ODE
}

/// Global numerical and physical parameters for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub t_end: f64, // time end
    pub h0: f64,    // time step size
    pub eps2: f64,  // softening for Newtonian gravity
    pub G: f64,     // gravitational constant
    #[serde(default = "default_spin_substeps")]
    pub spin_substeps: usize, // RK4 substeps per orbital step
}

fn default_spin_substeps() -> usize {
    1
}

/// Configuration for a single body's initial state
///
/// The structure fields are all optional; leaving them out produces a
/// point particle. `tau` is a convenience input: when `sigma` is omitted
/// but `tau` is given, the dissipation parameter is derived from the
/// constant lag time at scenario build
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub x: [f64; 3], // initial position
    pub v: [f64; 3], // initial velocity
    pub m: f64,      // mass
    #[serde(default)]
    pub radius: f64, // physical radius
    #[serde(default)]
    pub k2: Option<f64>, // potential Love number of degree 2
    #[serde(default)]
    pub sigma: Option<f64>, // tidal dissipation parameter
    #[serde(default)]
    pub tau: Option<f64>, // constant tidal lag time
    #[serde(default)]
    pub moi: Option<f64>, // moment of inertia
    #[serde(default)]
    pub spin: Option<[f64; 3]>, // spin frequency vector
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig, // engine-level configuration
    pub parameters: ParametersConfig, // global numerical and physical parameters
    pub bodies: Vec<BodyConfig>, // initial state of the system
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_scenario() {
        let yaml = r#"
engine:
  integrator: "verlet"
  spin_evolution: false
parameters:
  t_end: 1.0
  h0: 0.01
  eps2: 0.0
  G: 1.0
bodies:
  - x: [0.0, 0.0, 0.0]
    v: [0.0, 0.0, 0.0]
    m: 1.0
"#;
        let cfg: ScenarioConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.bodies.len(), 1);
        assert_eq!(cfg.parameters.spin_substeps, 1); // default
        assert!(cfg.bodies[0].k2.is_none());
        assert_eq!(cfg.bodies[0].radius, 0.0); // default
    }

    #[test]
    fn parses_structure_block() {
        let yaml = r#"
engine:
  integrator: "leapfrog"
  spin_evolution: true
parameters:
  t_end: 1.0
  h0: 0.01
  eps2: 0.0
  G: 1.0
  spin_substeps: 4
bodies:
  - x: [0.0, 0.0, 0.0]
    v: [0.0, 0.0, 0.0]
    m: 1.0
    radius: 0.1
    k2: 0.3
    tau: 0.01
    moi: 0.004
    spin: [0.0, 0.0, 5.0]
"#;
        let cfg: ScenarioConfig = serde_yaml::from_str(yaml).unwrap();
        let body = &cfg.bodies[0];
        assert_eq!(body.k2, Some(0.3));
        assert_eq!(body.tau, Some(0.01));
        assert!(body.sigma.is_none());
        assert_eq!(body.spin, Some([0.0, 0.0, 5.0]));
        assert_eq!(cfg.parameters.spin_substeps, 4);
    }
}
