pub mod errors;
pub mod entity;

pub use errors::*;
pub use entity::*;
