pub mod errors;

pub use errors::{BoxError, ConfigError, VoxError};

pub type Result<T> = std::result::Result<T, VoxError>;
