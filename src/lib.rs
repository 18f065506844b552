// src/lib.rs

//! e-Paper Edition Locator Library

pub mod error;
pub mod models;
pub mod services;
pub mod utils;
