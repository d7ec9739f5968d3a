// Domain services

pub mod aggregator;
pub mod normalizer;
pub mod pager;
pub mod text;
pub mod trend;

pub use aggregator::*;
pub use normalizer::*;
pub use pager::*;
pub use text::*;
pub use trend::*;
