pub mod catalog;
pub mod quantity;
pub mod resolver;

pub use catalog::*;
pub use quantity::*;
pub use resolver::*;
