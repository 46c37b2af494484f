//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer and owns the layered
//! application configuration.

pub mod adapters;
pub mod config;

pub use adapters::{AlertMailerAdapter, ClassifierAdapter, GenerativeAdapter};
pub use config::{AppConfig, ServerConfig};
