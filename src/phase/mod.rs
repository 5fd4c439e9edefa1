pub mod params;
pub mod geometry;
pub mod sampler;
pub mod scene;
