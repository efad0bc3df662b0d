//! Settings for the pelt bridge.
//!
//! A single JSON document, read once at startup and immutable for the
//! process lifetime. All sections use serde defaults so a partial
//! settings file works out of the box.

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{default_settings_path, load_from_path};
pub use schema::{ControlSettings, LiveSettings, Settings};

use std::path::Path;

use pelt_common::ConfigError;

/// Load settings from `path`, or from the platform default location when
/// no path is given. Validation failures are hard errors; a bridge with
/// a bad trigger policy should not start.
pub fn load(path: Option<&Path>) -> Result<Settings, ConfigError> {
    let settings = match path {
        Some(path) => loader::load_from_path(path)?,
        None => loader::load_default()?,
    };
    validation::validate(&settings)?;
    Ok(settings)
}
