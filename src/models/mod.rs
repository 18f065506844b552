// src/models/mod.rs

//! Domain models for the locator application.

mod config;
mod edition;

// Re-export all public types
pub use config::{Config, HttpConfig, LocatorConfig};
pub use edition::{EditionReference, UploadInstructions};
