use crate::utils::error::{ClasspathError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ClasspathError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ClasspathError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ClasspathError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Every locator must be a usable path: non-blank and free of NUL bytes.
pub fn validate_locators(field_name: &str, locators: &[String]) -> Result<()> {
    for (index, locator) in locators.iter().enumerate() {
        let field = format!("{}[{}]", field_name, index);
        validate_non_empty_string(&field, locator)?;
        validate_path(&field, locator)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("fork.properties_file", "target/fork.properties").is_ok());
        assert!(validate_path("fork.properties_file", "").is_err());
        assert!(validate_path("fork.properties_file", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_locators() {
        let good = vec!["foo.jar".to_string(), "target/classes".to_string()];
        assert!(validate_locators("classpath.test", &good).is_ok());

        let blank = vec!["foo.jar".to_string(), "   ".to_string()];
        match validate_locators("classpath.test", &blank) {
            Err(ClasspathError::InvalidConfigValueError { field, .. }) => {
                assert_eq!(field, "classpath.test[1]");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
