//! Configuration management for the hazardwise CLI

mod paths;
mod settings;

pub use paths::ConfigPaths;
pub use settings::Config;
