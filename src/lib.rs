pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{MemoryProperties, ProcessEnvironment, PropertiesFile};
pub use config::toml_config::TomlConfig;
pub use core::configuration::ClasspathConfiguration;
pub use domain::model::{Classpath, PATH_SEPARATOR};
pub use domain::ports::{ConfigProvider, PropertyStore, SystemProperties};
pub use utils::error::{ClasspathError, Result};
