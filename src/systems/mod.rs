pub mod collision;
pub mod input;
pub mod movement;
pub mod particles;
pub mod powerups;
pub mod scoring;

pub use collision::*;
pub use input::*;
pub use movement::*;
pub use particles::*;
pub use powerups::*;
pub use scoring::*;
