//! Configuration types for loading visualization scenes from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scene. A scene consists of:
//!
//! - [`ViewConfig`]       – viewer options (render, frame, microcells)
//! - [`ParametersConfig`] – physical ensemble parameters
//! - [`ProjectionConfig`] – 3D projection strategy and its inputs
//! - [`SceneConfig`]      – top-level wrapper used to load a scene from YAML
//!
//! # YAML format
//! An example scene YAML matching these types:
//!
//! ```yaml
//! view:
//!   render: true            # false -> headless geometry report on stdout
//!   show_frame: true        # draw the RGB axis frame
//!   show_cells: false       # draw points as microcell cubes instead of spheres
//!
//! parameters:
//!   particles: 3            # N, so D = 6N = 18
//!   mass: 1.0
//!   energy: 1.0
//!   shell: 0.02             # relative half-width of the energy shell
//!   samples: 20000
//!   seed: 1337
//!   kinetic_only: true
//!
//! projection:
//!   kind: "pca"             # or "axes", "random"
//!   axes: [0, 1, 2]         # used by kind: axes
//!   seed: 1234              # used by kind: random
//! ```
//!
//! The runtime maps this configuration into its internal scene
//! representation (see `phase::scene`)

use serde::Deserialize;

/// Which projection strategy reduces D dimensions to 3
/// `kind: "axes"`, `kind: "random"` or `kind: "pca"`
#[derive(Deserialize, Debug, Clone)]
pub enum ProjectionKindConfig {
    #[serde(rename = "axes")] // Copy three raw coordinates, chosen by `axes`
    Axes,

    #[serde(rename = "random")] // Seeded Gaussian random projection (Johnson–Lindenstrauss style)
    Random,

    #[serde(rename = "pca")] // Power-iteration PCA, top three principal directions
    Pca,
}

/// Viewer-level options
#[derive(Deserialize, Debug)]
pub struct ViewConfig {
    pub render: bool, // `true` - open the Bevy viewer, `false` - print a geometry report
    pub show_frame: bool, // draw the coordinate frame through the origin
    pub show_cells: Option<bool>, // render points as microcell cubes sized by the cell hint
}

/// Physical and sampling parameters for the ensemble
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub particles: usize, // N particles, phase space dimension D = 6N
    pub mass: f64,        // particle mass m
    pub energy: f64,      // total energy E, radius R = sqrt(2 m E)
    pub shell: f64,       // relative shell half-width
    pub samples: usize,   // points per sampling run
    pub seed: u64,        // deterministic seed to make runs reproducable
    pub kinetic_only: Option<bool>, // purely kinetic Hamiltonian (the only supported model)
}

/// Projection strategy selection plus strategy-specific inputs
#[derive(Deserialize, Debug)]
pub struct ProjectionConfig {
    pub kind: ProjectionKindConfig, // which of the three strategies to run
    pub axes: Option<Vec<usize>>,   // three coordinate indices for `axes`
    pub seed: Option<u64>,          // seed for `random`
}

/// Top-level scene configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct SceneConfig {
    pub view: ViewConfig, // viewer options (render mode, frame, microcells)
    pub parameters: ParametersConfig, // physical ensemble parameters
    pub projection: ProjectionConfig, // projection strategy and its inputs
}
