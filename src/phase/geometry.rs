//! Analytic hypersphere geometry for D = 6N dimensional phase space
//!
//! Pure functions only:
//! - `dimension` / `energy_radius` map parameters to (D, R),
//! - `hypersphere_volume` / `hypersurface_area` give the exact
//!   D-ball volume and (D-1)-sphere area at radius R,
//! - `dimension_label` formats D for display

use statrs::function::gamma::gamma;
use std::f64::consts::PI;

use crate::phase::params::PhaseParams;

/// Phase-space dimension for N particles: 3 position + 3 momentum
/// coordinates each, so D = 6N. Caller contract: N > 0
pub fn dimension(n: usize) -> usize {
    6 * n
}

/// Energy radius R = sqrt(2 m E) of the kinetic-only Hamiltonian.
/// Negative m*E yields NaN, propagated rather than trapped
pub fn energy_radius(params: &PhaseParams) -> f64 {
    (2.0 * params.mass * params.energy).sqrt()
}

/// Volume of the D-ball of radius r:
/// omega_D(r) = pi^(D/2) r^D / Gamma(D/2 + 1)
pub fn hypersphere_volume(d: usize, r: f64) -> f64 {
    let d_f = d as f64;
    PI.powf(d_f / 2.0) * r.powf(d_f) / gamma(d_f / 2.0 + 1.0)
}

/// Surface area of the (D-1)-sphere of radius r:
/// sigma_{D-1}(r) = 2 pi^(D/2) r^(D-1) / Gamma(D/2)
/// This is d/dr of [`hypersphere_volume`]; the two must stay consistent
pub fn hypersurface_area(d: usize, r: f64) -> f64 {
    let d_f = d as f64;
    2.0 * PI.powf(d_f / 2.0) * r.powf(d_f - 1.0) / gamma(d_f / 2.0)
}

/// Display label for the dimension, e.g. "18 = 6N dims"
pub fn dimension_label(d: usize) -> String {
    format!("{} = 6N dims", d)
}
