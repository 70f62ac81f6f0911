pub mod lines;
pub mod speaker;

pub use lines::*;
pub use speaker::*;
