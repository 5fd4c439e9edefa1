pub mod phase;
pub mod projection;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use phase::params::PhaseParams;
pub use phase::geometry::{dimension, energy_radius, hypersphere_volume, hypersurface_area, dimension_label};
pub use phase::sampler::{sample_shell, cell_size_hint, PhasePointSet};
pub use phase::scene::{Scene, View};
pub use projection::projector::{project_3d, pca_project_3d, pca_directions, ProjectionKind, NVec3};

pub use configuration::config::{SceneConfig, ViewConfig, ParametersConfig, ProjectionConfig, ProjectionKindConfig};

pub use visualization::vis3d::run_3d;

pub use benchmark::benchmark::{bench_sampling, bench_projection, bench_pca_curve};
