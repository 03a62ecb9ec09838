use std::time::Instant;

use crate::simulation::forces::{AccelSet, Acceleration, NewtonianGravity, TidalSpin};
use crate::simulation::integrator::{spin_rk4_step, verlet_integrator};
use crate::simulation::params::Parameters;
use crate::simulation::spin_ode::SpinOde;
use crate::simulation::states::{Body, NVec3, Structure, System};

/// Helper to build a manual System of size `n`, giving every fourth body
/// the full structure block so the tidal loops have work to do
fn make_system(n: usize) -> System {
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let x = NVec3::new(
            (i_f * 0.37).sin() * 5.0,
            (i_f * 0.13).cos() * 5.0,
            (i_f * 0.07).sin() * 5.0,
        );

        let structure = if i % 4 == 0 {
            Structure {
                k2: Some(0.3),
                sigma: Some(1.0e-4),
                moi: Some(0.01),
                spin: Some(NVec3::new(0.0, 0.0, 1.0)),
            }
        } else {
            Structure::default()
        };

        bodies.push(Body {
            x,
            v: NVec3::zeros(),
            m: 1.0,
            radius: 0.01,
            structure,
        });
    }

    System { bodies, t: 0.0 }
}

fn make_params() -> Parameters {
    Parameters {
        t_end: 100.0,
        h0: 0.001,
        eps2: 1e-4,
        G: 0.1,
        spin_substeps: 1,
    }
}

/// Time a single force evaluation, gravity alone vs gravity + tides
pub fn bench_forces() {
    let ns = [200, 400, 800, 1600, 3200];

    for n in ns {
        let sys = make_system(n);
        let params = make_params();
        let mut out = vec![NVec3::zeros(); n];

        let gravity = NewtonianGravity {
            G: params.G,
            eps2: params.eps2,
        };
        let tides = TidalSpin { G: params.G };

        // warm up
        gravity.acceleration(0.0, &sys, &mut out);
        tides.acceleration(0.0, &sys, &mut out);

        let t0 = Instant::now();
        gravity.acceleration(0.0, &sys, &mut out);
        let dt_gravity = t0.elapsed().as_secs_f64();

        let t1 = Instant::now();
        tides.acceleration(0.0, &sys, &mut out);
        let dt_tides = t1.elapsed().as_secs_f64();

        println!("N = {n:5}, gravity = {dt_gravity:8.6} s, tides = {dt_tides:8.6} s");
    }
}

/// Time full integration steps with and without spin evolution
/// Paste output directly into a spreadsheet to graph
pub fn bench_step() {
    println!("N,orbit_ms,orbit_spin_ms");

    for n in (200..=3200).step_by(200) {
        let steps = if n <= 800 { 5 } else { 1 };
        let params = make_params();

        // orbital step only
        let mut sys_orbit = make_system(n);
        let forces = AccelSet::new()
            .with(NewtonianGravity {
                G: params.G,
                eps2: params.eps2,
            })
            .with(TidalSpin { G: params.G });

        let t0 = Instant::now();
        for _ in 0..steps {
            verlet_integrator(&mut sys_orbit, &forces, &params);
        }
        let ms_orbit = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        // orbital step + spin ODE
        let mut sys_spin = make_system(n);
        let mut ode = match SpinOde::register(&sys_spin) {
            Some(ode) => ode,
            None => continue,
        };

        let t1 = Instant::now();
        for _ in 0..steps {
            verlet_integrator(&mut sys_spin, &forces, &params);
            if spin_rk4_step(&mut sys_spin, &mut ode, &params).is_err() {
                break;
            }
        }
        let ms_spin = t1.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{n},{ms_orbit:.6},{ms_spin:.6}");
    }
}
