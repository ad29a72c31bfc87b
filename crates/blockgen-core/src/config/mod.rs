//! Generator configuration

pub mod generator;

pub use generator::{GeneratorConfig, CONFIG_FILE_NAME};
