use crate::domain::ports::SystemProperties;
use crate::utils::error::{ClasspathError, Result};

/// Process environment as the process-wide property surface.
///
/// Writes are not synchronised; concurrent writers to the same variable race.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl ProcessEnvironment {
    pub fn new() -> Self {
        Self
    }
}

// Names and values `std::env::set_var` would panic on.
fn check_variable(name: &str, value: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ClasspathError::invalid_argument(
            "Environment variable name cannot be empty",
        ));
    }
    if name.contains('=') || name.contains('\0') {
        return Err(ClasspathError::invalid_argument(format!(
            "Environment variable name {:?} contains '=' or a NUL byte",
            name
        )));
    }
    if value.contains('\0') {
        return Err(ClasspathError::invalid_argument(format!(
            "Value for environment variable {} contains a NUL byte",
            name
        )));
    }
    Ok(())
}

impl SystemProperties for ProcessEnvironment {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn set(&mut self, name: &str, value: &str) -> Result<()> {
        check_variable(name, value)?;
        std::env::set_var(name, value);
        Ok(())
    }
}
