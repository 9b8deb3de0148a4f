mod engine;
pub mod net;
pub mod render;

pub use engine::*;
