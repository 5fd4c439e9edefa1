//! Dimensionality reduction from D = 6N down to 3 for display
//!
//! Three strategies, selected by [`ProjectionKind`]:
//! - `Axes`: pick three raw coordinates
//! - `Random`: seeded Gaussian random projection (Johnson–Lindenstrauss style)
//! - `Pca`: top-3 principal directions via power iteration with deflation
//!
//! The linear algebra runs directly on the flat point-major buffer

use nalgebra::Vector3;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;

use crate::phase::sampler::PhasePointSet;

pub type NVec3 = Vector3<f64>;

/// Power-iteration count used by the `Pca` strategy
pub const PCA_POWER_ITERS: usize = 20;

/// Fixed seed for the power-iteration starting vectors, so PCA output is
/// stable run-to-run for the same data
const PCA_INIT_SEED: u64 = 777;

/// Projection strategy with its strategy-specific payload.
/// Axis indices must each lie in [0, D); `project_3d` asserts this
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionKind {
    Axes { i: usize, j: usize, k: usize },
    Random { seed: u64 },
    Pca,
}

/// Reduce the D-dimensional point set to 3D positions.
/// The input buffer is never mutated; PCA works on private copies, so the
/// same set can be re-projected with a different strategy
pub fn project_3d(set: &PhasePointSet, kind: ProjectionKind) -> Vec<NVec3> {
    let d = set.dim;

    match kind {
        ProjectionKind::Axes { i, j, k } => {
            assert!(i < d && j < d && k < d, "axis indices must lie in [0, {})", d);
            (0..set.count)
                .map(|s| {
                    let p = set.point(s);
                    NVec3::new(p[i], p[j], p[k])
                })
                .collect()
        }

        ProjectionKind::Random { seed } => {
            // 3 x D Gaussian matrix, rows normalized independently
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut rows = vec![0.0f64; 3 * d];
            for e in rows.iter_mut() {
                *e = rng.sample(StandardNormal);
            }
            for row in rows.chunks_mut(d) {
                normalize(row);
            }

            (0..set.count)
                .map(|s| {
                    let p = set.point(s);
                    NVec3::new(
                        dot(p, &rows[0..d]),
                        dot(p, &rows[d..2 * d]),
                        dot(p, &rows[2 * d..3 * d]),
                    )
                })
                .collect()
        }

        ProjectionKind::Pca => pca_project_3d(set, PCA_POWER_ITERS),
    }
}

/// Top-3 principal directions of the mean-centered data, via power
/// iteration on the implicit operator X^T X with deflation between
/// directions. The directions are unit length and approximately (not
/// exactly) mutually orthogonal
pub fn pca_directions(set: &PhasePointSet, iters: usize) -> [Vec<f64>; 3] {
    let d = set.dim;
    let mut x = mean_center(&set.data, d);
    let mut rng = ChaCha8Rng::seed_from_u64(PCA_INIT_SEED);

    let v1 = power_direction(&x, d, iters, &mut rng);
    deflate(&mut x, d, &v1);

    let v2 = power_direction(&x, d, iters, &mut rng);
    deflate(&mut x, d, &v2);

    let v3 = power_direction(&x, d, iters, &mut rng);

    [v1, v2, v3]
}

/// PCA projection to 3D: extract directions with [`pca_directions`], then
/// project the original mean-centered data onto them. Deflation only steers
/// the direction search; the deflated working copy is never what gets
/// projected
pub fn pca_project_3d(set: &PhasePointSet, iters: usize) -> Vec<NVec3> {
    let d = set.dim;
    let [v1, v2, v3] = pca_directions(set, iters);

    let x0 = mean_center(&set.data, d);
    (0..set.count)
        .map(|s| {
            let p = &x0[s * d..(s + 1) * d];
            NVec3::new(dot(p, &v1), dot(p, &v2), dot(p, &v3))
        })
        .collect()
}

// =========================================================================================
// Flat-buffer linear algebra helpers
// =========================================================================================

/// Subtract the per-coordinate mean; returns a fresh centered copy
fn mean_center(data: &[f64], d: usize) -> Vec<f64> {
    let n = data.len() / d;
    let mut mu = vec![0.0f64; d];
    for p in data.chunks(d) {
        for (m, x) in mu.iter_mut().zip(p.iter()) {
            *m += x;
        }
    }
    for m in mu.iter_mut() {
        *m /= n as f64;
    }

    let mut out = data.to_vec();
    for p in out.chunks_mut(d) {
        for (x, m) in p.iter_mut().zip(mu.iter()) {
            *x -= m;
        }
    }
    out
}

/// L2-normalize in place, epsilon-guarded against the all-zero vector
fn normalize(v: &mut [f64]) {
    let n2: f64 = v.iter().map(|a| a * a).sum();
    let inv = 1.0 / (n2 + 1e-12).sqrt();
    for a in v.iter_mut() {
        *a *= inv;
    }
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// y = X v, where X is (n x d) flat row-major and v has length d
fn mat_vec(x: &[f64], d: usize, v: &[f64]) -> Vec<f64> {
    x.chunks(d).map(|row| dot(row, v)).collect()
}

/// w = X^T y, length-d result
fn mat_t_vec(x: &[f64], d: usize, y: &[f64]) -> Vec<f64> {
    let mut w = vec![0.0f64; d];
    for (row, yi) in x.chunks(d).zip(y.iter()) {
        for (wd, xd) in w.iter_mut().zip(row.iter()) {
            *wd += xd * yi;
        }
    }
    w
}

/// Power iteration on the implicit covariance-like operator X^T X:
/// start from a random direction, repeat w = X^T (X v), normalize.
/// Converges toward the dominant eigenvector as `iters` grows
fn power_direction(x: &[f64], d: usize, iters: usize, rng: &mut ChaCha8Rng) -> Vec<f64> {
    let mut v: Vec<f64> = (0..d).map(|_| rng.gen_range(-1.0..1.0)).collect();
    normalize(&mut v);
    for _ in 0..iters {
        let y = mat_vec(x, d, &v);
        let mut w = mat_t_vec(x, d, &y);
        normalize(&mut w);
        v = w;
    }
    v
}

/// Remove direction `v`'s contribution from every sample:
/// row_i -= (row_i . v) v
fn deflate(x: &mut [f64], d: usize, v: &[f64]) {
    let y = mat_vec(x, d, v);
    for (row, yi) in x.chunks_mut(d).zip(y.iter()) {
        for (xd, vd) in row.iter_mut().zip(v.iter()) {
            *xd -= yi * vd;
        }
    }
}
