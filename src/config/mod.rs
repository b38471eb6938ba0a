//! Configuration module for Dolla
//!
//! This module provides configuration management including:
//! - Platform config directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::DollaPaths;
pub use settings::Settings;
