pub mod config;
pub mod display_target;

pub use config::{ConvertProfile, DEFAULT_FPS};
pub use display_target::DisplayTarget;
