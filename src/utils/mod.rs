pub mod error;

pub use error::{CleanupError, Result};
