use crate::config::{validate_config_provider, DEFAULT_FORK_PROPERTIES};
use crate::core::ConfigProvider;
use crate::utils::error::{ClasspathError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub classpath: ClasspathSection,
    pub fork: Option<ForkSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClasspathSection {
    #[serde(default)]
    pub test: Vec<String>,
    #[serde(default)]
    pub provider: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ForkSection {
    pub properties_file: Option<String>,
    pub child_delegation: Option<bool>,
    pub enable_assertions: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ClasspathError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::from_toml_str_with_vars(content, |name| std::env::var(name).ok())
    }

    /// Like [`TomlConfig::from_toml_str`], resolving `${VAR}` through `lookup`
    /// instead of the process environment.
    pub fn from_toml_str_with_vars<F>(content: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let processed_content = Self::substitute_vars(content, lookup)?;

        toml::from_str(&processed_content).map_err(|e| ClasspathError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with `lookup(VAR)`. Unknown variables are left
    /// untouched.
    fn substitute_vars<F>(content: &str, lookup: F) -> Result<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ClasspathError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            lookup(var_name).unwrap_or_else(|| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for TomlConfig {
    fn test_classpath_elements(&self) -> &[String] {
        &self.classpath.test
    }

    fn provider_classpath_elements(&self) -> &[String] {
        &self.classpath.provider
    }

    fn fork_properties_path(&self) -> &str {
        self.fork
            .as_ref()
            .and_then(|f| f.properties_file.as_deref())
            .unwrap_or(DEFAULT_FORK_PROPERTIES)
    }

    fn child_delegation(&self) -> bool {
        self.fork
            .as_ref()
            .and_then(|f| f.child_delegation)
            .unwrap_or(false)
    }

    fn enable_assertions(&self) -> bool {
        self.fork
            .as_ref()
            .and_then(|f| f.enable_assertions)
            .unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_config_provider(self)
    }
}
