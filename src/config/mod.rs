pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_locators, validate_path};
#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use clap::Parser;

pub const DEFAULT_FORK_PROPERTIES: &str = "fork.properties";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "fork-classpath")]
#[command(about = "Hand a classpath to a forked process through a properties file")]
pub struct CliConfig {
    /// TOML configuration file; overrides the classpath flags
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, value_delimiter = ',')]
    pub test_classpath: Vec<String>,

    #[arg(long, value_delimiter = ',')]
    pub provider_classpath: Vec<String>,

    #[arg(short, long, default_value = DEFAULT_FORK_PROPERTIES)]
    pub output: String,

    /// Read an existing fork properties file instead of writing one
    #[arg(long)]
    pub read: Option<String>,

    /// Print the effective classpath as a JSON array of URLs
    #[arg(long)]
    pub json: bool,

    #[arg(long)]
    pub child_delegation: bool,

    #[arg(long)]
    pub enable_assertions: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn test_classpath_elements(&self) -> &[String] {
        &self.test_classpath
    }

    fn provider_classpath_elements(&self) -> &[String] {
        &self.provider_classpath
    }

    fn fork_properties_path(&self) -> &str {
        &self.output
    }

    fn child_delegation(&self) -> bool {
        self.child_delegation
    }

    fn enable_assertions(&self) -> bool {
        self.enable_assertions
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_config_provider(self)
    }
}

pub(crate) fn validate_config_provider(config: &dyn ConfigProvider) -> Result<()> {
    validate_locators("classpath.test", config.test_classpath_elements())?;
    validate_locators("classpath.provider", config.provider_classpath_elements())?;
    validate_path("fork.properties_file", config.fork_properties_path())
}
