pub mod combat;
pub mod gc;
pub mod input;
pub mod movement;

pub use combat::*;
pub use gc::*;
pub use input::*;
pub use movement::*;
