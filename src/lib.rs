pub mod simulation;
pub mod configuration;
pub mod benchmark;
pub mod error;

pub use simulation::states::{Body, NVec3, Structure, System};
pub use simulation::forces::{AccelSet, Acceleration, NewtonianGravity, TidalSpin};
pub use simulation::tides::{sigma_from_q, sigma_from_tau, spin_orbit_force, spin_potential};
pub use simulation::spin_ode::SpinOde;
pub use simulation::integrator::{leapfrog_integrator, spin_rk4_step, verlet_integrator};
pub use simulation::params::Parameters;
pub use simulation::scenario::Scenario;

pub use configuration::config::{
    BodyConfig, EngineConfig, IntegratorConfig, ParametersConfig, ScenarioConfig,
};

pub use benchmark::benchmark::{bench_forces, bench_step};

pub use error::{SimError, SimResult};
