pub mod autopilot;
pub mod collision;
pub mod input;
pub mod movement;
pub mod scoring;

pub use autopilot::*;
pub use collision::*;
pub use input::*;
pub use movement::*;
pub use scoring::*;
