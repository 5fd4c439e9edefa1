//! Physical parameters of the N-particle ensemble
//!
//! `PhaseParams` holds everything one sampling run needs:
//! - particle count (drives D = 6N),
//! - mass and total energy (drive the energy radius R),
//! - relative shell half-width and sample count,
//! - deterministic seed

#[derive(Debug, Clone)]
pub struct PhaseParams {
    pub particles: usize, // N, phase space has D = 6N dimensions
    pub mass: f64, // particle mass m
    pub energy: f64, // total energy E
    pub shell: f64, // relative half-width, r in [R(1-shell), R(1+shell)]
    pub samples: usize, // points per sampling run
    pub seed: u64, // deterministic seed
    pub kinetic_only: bool, // Hamiltonian is purely kinetic (always true for now)
}
