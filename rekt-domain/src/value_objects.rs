// Domain value objects
pub mod group_field;
pub mod identifiers;
pub mod taxonomy;

pub use group_field::*;
pub use identifiers::*;
pub use taxonomy::*;
