//! High-level runtime engine settings
//!
//! Selects the orbital integrator and whether the auxiliary spin ODE is
//! driven alongside it

use crate::configuration::config::IntegratorConfig;

#[derive(Debug, Clone)]
pub struct Engine {
    pub integrator: IntegratorConfig, // verlet or leapfrog
    pub spin_evolution: bool, // drive the spin ODE each step
}
