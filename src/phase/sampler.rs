//! Microcanonical shell sampler
//!
//! Draws points on a thin spherical shell in D = 6N dimensions with the
//! correct measure: directions uniform on the unit sphere (normalized
//! Gaussian vectors), radii with density proportional to r^(D-1)
//! (inverse-CDF sampling on r^D). One seeded generator per run, so the
//! same `PhaseParams` always reproduce the same point set

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;

use crate::phase::geometry::{dimension, energy_radius};
use crate::phase::params::PhaseParams;

/// Flat, row-major set of D-dimensional points (point-major, coordinate-minor)
/// `data.len() == count * dim`. Kept flat so the projector's bulk
/// matrix-vector passes stay contiguous
#[derive(Debug, Clone)]
pub struct PhasePointSet {
    pub data: Vec<f64>, // count * dim coordinates
    pub dim: usize, // D
    pub count: usize, // number of points
}

impl PhasePointSet {
    /// Coordinates of point `i` as a slice of length `dim`
    pub fn point(&self, i: usize) -> &[f64] {
        &self.data[i * self.dim..(i + 1) * self.dim]
    }
}

/// Draw one radius in [R(1-rel), R(1+rel)] with PDF proportional to r^(D-1).
/// r^D is uniform on [a^D, b^D], so invert the CDF on that transformed
/// variable. `a` is floored to 1e-4 * R so the power stays well-defined
/// as rel -> 1
fn sample_radius_shell(rng: &mut ChaCha8Rng, r: f64, rel: f64, d: usize) -> f64 {
    let a = (r * (1.0 - rel)).max(1e-4 * r);
    let b = r * (1.0 + rel);
    let u: f64 = rng.gen();
    let a_d = a.powf(d as f64);
    let b_d = b.powf(d as f64);
    (a_d + (b_d - a_d) * u).powf(1.0 / d as f64)
}

/// Sample `params.samples` points on the microcanonical shell of the
/// kinetic-only Hamiltonian. Per point: D independent standard normals
/// give a direction uniform on the unit sphere after normalization
/// (rotational symmetry of the multivariate Gaussian), then one radius
/// draw places it in the shell
pub fn sample_shell(params: &PhaseParams) -> PhasePointSet {
    let d = dimension(params.particles);
    let count = params.samples;
    let r = energy_radius(params);

    let mut rng = ChaCha8Rng::seed_from_u64(params.seed);
    let mut data = vec![0.0f64; count * d];

    // Direction scratch, reused across points
    let mut v = vec![0.0f64; d];

    for s in 0..count {
        let mut norm2 = 0.0f64;
        for g in v.iter_mut() {
            let x: f64 = rng.sample(StandardNormal);
            *g = x;
            norm2 += x * x;
        }
        // Epsilon keeps the all-zero draw finite
        let inv = 1.0 / (norm2 + 1e-12).sqrt();

        let radius = sample_radius_shell(&mut rng, r, params.shell, d);

        for (out, g) in data[s * d..(s + 1) * d].iter_mut().zip(v.iter()) {
            *out = radius * *g * inv;
        }
    }

    PhasePointSet { data, dim: d, count }
}

/// Crude microcell edge-length guess for visualization, shrinking with
/// D and scaling with R. Cosmetic only; positive and finite for valid params
pub fn cell_size_hint(params: &PhaseParams) -> f64 {
    let r = energy_radius(params);
    let d = dimension(params.particles);
    0.015 * r * (3.0 / d as f64).sqrt()
}
