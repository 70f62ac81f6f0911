pub mod cursor;
pub mod tag;
pub mod turn;

pub use cursor::*;
pub use tag::*;
pub use turn::*;
