// Domain entities

pub mod chain;
pub mod dashboard;
pub mod incident;
pub mod query;
pub mod runtime_config;

pub use chain::*;
pub use dashboard::*;
pub use incident::*;
pub use query::*;
pub use runtime_config::*;
