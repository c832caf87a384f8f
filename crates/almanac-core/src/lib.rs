//! Shared foundation for the almanac workspace: configuration,
//! the translation-catalog interface, errors, and logging setup.

pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;

pub use catalog::{LocaleCatalog, StaticCatalog};
pub use config::Settings;
pub use error::{CoreError, CoreResult};
