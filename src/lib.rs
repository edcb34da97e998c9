pub mod camera;
pub mod cli;
pub mod collision;
pub mod lighting;
pub mod renderer;
pub mod scene;
pub mod texture;
pub mod transform;
pub mod types;
