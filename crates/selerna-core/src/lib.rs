//! Shared configuration and error types for the Selerna avatar service.

pub mod config;
pub mod error;

pub use config::SelernaConfig;
pub use error::{Result, SelernaError};
