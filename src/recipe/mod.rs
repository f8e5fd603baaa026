pub mod ingredient;
pub mod model;
mod render;
pub mod step;

pub use ingredient::*;
pub use model::*;
pub use step::*;
