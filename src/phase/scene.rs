//! Build a fully-initialized scene from configuration
//!
//! Takes a `SceneConfig` (YAML-facing) and produces the runtime bundle
//! (`Scene`) containing:
//! - physical parameters (`PhaseParams`)
//! - active projection strategy (`ProjectionKind`)
//! - viewer options (`View`)
//!
//! The scene is inserted into Bevy as a `Resource` and consumed by the
//! sampling, projection, and visualization systems

use bevy::prelude::Resource;

use crate::configuration::config::{SceneConfig, ProjectionKindConfig};
use crate::phase::params::PhaseParams;
use crate::projection::projector::ProjectionKind;

/// Runtime viewer options, mapped from [`crate::configuration::config::ViewConfig`]
#[derive(Debug, Clone)]
pub struct View {
    pub render: bool, // false = headless geometry report, true = Bevy viewer
    pub show_frame: bool, // draw the coordinate frame
    pub show_cells: bool, // points as microcell cubes instead of spheres
}

/// Bevy resource representing a fully-initialized scene
///
/// This is the main "runtime bundle" constructed from a [`SceneConfig`]:
/// it contains the ensemble parameters, the active projection strategy,
/// and the viewer options
///
/// In Bevy terms, this is inserted as a `Resource` and then read by systems
/// responsible for resampling, reprojection, and display
#[derive(Resource)]
pub struct Scene {
    pub params: PhaseParams,
    pub projection: ProjectionKind,
    pub proj_seed: u64, // seed reused when switching to the random strategy at runtime
    pub view: View,
}

impl Scene {
    pub fn build_scene(cfg: SceneConfig) -> Self {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let params = PhaseParams {
            particles: p_cfg.particles,
            mass: p_cfg.mass,
            energy: p_cfg.energy,
            shell: p_cfg.shell,
            samples: p_cfg.samples,
            seed: p_cfg.seed,
            kinetic_only: p_cfg.kinetic_only.unwrap_or(true),
        };

        // Projection: map the config selector plus its optional payload
        // fields onto the strategy sum type
        let proj_seed = cfg.projection.seed.unwrap_or(1234);
        let projection = match cfg.projection.kind {
            ProjectionKindConfig::Axes => {
                let axes = cfg.projection.axes.unwrap_or_else(|| vec![0, 1, 2]);
                ProjectionKind::Axes {
                    i: axes[0],
                    j: axes[1],
                    k: axes[2],
                }
            }
            ProjectionKindConfig::Random => ProjectionKind::Random { seed: proj_seed },
            ProjectionKindConfig::Pca => ProjectionKind::Pca,
        };

        // View (runtime) from ViewConfig
        let view = View {
            render: cfg.view.render,
            show_frame: cfg.view.show_frame,
            show_cells: cfg.view.show_cells.unwrap_or(false),
        };

        Self {
            params,
            projection,
            proj_seed,
            view,
        }
    }
}
