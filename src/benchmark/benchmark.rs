use std::time::Instant;
use crate::phase::params::PhaseParams;
use crate::phase::sampler::sample_shell;
use crate::projection::projector::{project_3d, pca_project_3d, ProjectionKind};

/// Parameters shared by the benchmark runs: N = 3 (D = 18), unit mass
/// and energy, thin shell
fn bench_params(samples: usize, particles: usize) -> PhaseParams {
    PhaseParams {
        particles,
        mass: 1.0,
        energy: 1.0,
        shell: 0.02,
        samples,
        seed: 42,
        kinetic_only: true,
    }
}

/// Time `sample_shell` over a range of sample counts
pub fn bench_sampling() {
    let counts = [1_000, 4_000, 16_000, 64_000, 256_000];

    for count in counts {
        let params = bench_params(count, 3);

        let t0 = Instant::now();
        let set = sample_shell(&params);
        let dt = t0.elapsed().as_secs_f64() * 1000.0;

        println!(
            "bench_sampling: {:>7} samples x {} dims -> {:.3} ms ({} values)",
            count,
            set.dim,
            dt,
            set.data.len()
        );
    }
}

/// Time each projection strategy on the same sampled set
pub fn bench_projection() {
    let params = bench_params(20_000, 3);
    let set = sample_shell(&params);

    let kinds = [
        ProjectionKind::Axes { i: 0, j: 1, k: 2 },
        ProjectionKind::Random { seed: 1234 },
        ProjectionKind::Pca,
    ];

    for kind in kinds {
        let t0 = Instant::now();
        let out = project_3d(&set, kind);
        let dt = t0.elapsed().as_secs_f64() * 1000.0;

        println!(
            "bench_projection: {:?} on {} x {} -> {:.3} ms ({} points out)",
            kind,
            set.count,
            set.dim,
            dt,
            out.len()
        );
    }
}

/// Time PCA as the power-iteration count grows; cost is linear in iterations
pub fn bench_pca_curve() {
    let params = bench_params(20_000, 3);
    let set = sample_shell(&params);

    let iter_counts = [5, 10, 20, 40, 80];

    for iters in iter_counts {
        let t0 = Instant::now();
        let out = pca_project_3d(&set, iters);
        let dt = t0.elapsed().as_secs_f64() * 1000.0;

        println!(
            "bench_pca_curve: {:>3} power iters on {} x {} -> {:.3} ms ({} points out)",
            iters,
            set.count,
            set.dim,
            dt,
            out.len()
        );
    }
}
