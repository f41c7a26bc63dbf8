pub mod analyze;
pub mod config;
pub mod error;
pub mod inference;
pub mod origin;
pub mod server;

pub use error::{Error, Result};
