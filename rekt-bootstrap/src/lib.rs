pub mod context;
pub mod lifecycle;

pub use lifecycle::{run_snapshot, run_standalone, run_write_taxonomy};
