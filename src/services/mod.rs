//! Service layer for the locator application.
//!
//! This module contains the business logic for:
//! - Candidate filename generation (`filenames`)
//! - Existence probing (`ExistenceProbe`, `HttpProbe`)
//! - Edition resolution (`EditionLocator`)

pub mod filenames;
mod locator;
mod probe;

pub use locator::EditionLocator;
pub use probe::{ExistenceProbe, HttpProbe};
