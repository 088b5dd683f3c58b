pub mod error;
pub mod files;
pub mod model;
pub mod ops;
pub mod store;

pub use error::{EngineError, Result};
