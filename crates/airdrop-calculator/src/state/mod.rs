pub mod group;
pub mod model;
pub mod result;

pub use group::*;
pub use model::*;
pub use result::*;
