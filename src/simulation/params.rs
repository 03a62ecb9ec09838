//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - integration step size and end time,
//! - softening and gravitational constant (`eps2`, `G`),
//! - RK4 substep count for the auxiliary spin ODE

#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct Parameters {
    pub t_end: f64, // time end
    pub h0: f64, // step size
    pub eps2: f64, // softening
    pub G: f64, // gravitational constant
    pub spin_substeps: usize, // RK4 substeps per orbital step
}
