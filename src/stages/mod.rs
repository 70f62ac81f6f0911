pub mod assemble;
pub mod render;

pub use assemble::*;
pub use render::*;
