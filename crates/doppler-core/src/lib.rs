pub mod body;
pub mod config;
pub mod constants;
pub mod controls;
pub mod doppler;
pub mod error;
pub mod sim;
pub mod trace;
pub mod wavefront;
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use body::*;
pub use config::*;
pub use constants::*;
pub use controls::*;
pub use doppler::*;
pub use error::*;
pub use sim::*;
pub use trace::*;
pub use wavefront::*;
