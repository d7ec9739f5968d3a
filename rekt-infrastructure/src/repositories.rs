pub mod config_files;
pub mod graphql_source;

pub use config_files::*;
pub use graphql_source::*;
