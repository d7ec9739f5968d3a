pub mod incident_handlers;
pub mod ops_handlers;
pub mod stats_handlers;

pub use incident_handlers::*;
pub use ops_handlers::*;
pub use stats_handlers::*;
