pub mod launch;
pub mod selection;
pub mod site;

pub use launch::*;
pub use selection::*;
pub use site::*;
