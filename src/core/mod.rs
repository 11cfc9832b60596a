pub mod color;
pub mod constants;
pub mod drift;
pub mod field;
pub mod lifecycle;
pub mod pointer;

pub use color::*;
pub use constants::*;
pub use drift::*;
pub use field::*;
pub use lifecycle::*;
pub use pointer::*;
