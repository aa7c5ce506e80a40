use crate::domain::ports::{PropertyStore, SystemProperties};
use crate::utils::error::{ClasspathError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use url::Url;

/// Separator used when a classpath is flattened into a single path-list string.
pub const PATH_SEPARATOR: char = if cfg!(windows) { ';' } else { ':' };

/// Ordered set of classpath locators (file paths or URLs).
///
/// Insertion order is kept and the first occurrence of a locator wins; adding
/// a locator that is already present is a no-op. Nothing outside this type
/// can get mutable access to the elements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Classpath {
    elements: Vec<String>,
}

impl Classpath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Concatenates `first` and `second`, dropping repeats. Absent inputs are
    /// treated as empty classpaths; neither input is modified.
    pub fn join(first: Option<&Classpath>, second: Option<&Classpath>) -> Classpath {
        let mut joined = Classpath::new();
        for classpath in [first, second].into_iter().flatten() {
            for element in &classpath.elements {
                joined.push_unique(element);
            }
        }
        joined
    }

    /// Reads `prefix0`, `prefix1`, ... until the first missing key.
    pub fn read_from_fork_properties(store: &dyn PropertyStore, prefix: &str) -> Classpath {
        let mut classpath = Classpath::new();
        for index in 0.. {
            match store.get_property(&fork_key(prefix, index)) {
                Some(value) => classpath.push_unique(&value),
                None => break,
            }
        }
        tracing::debug!(
            "Read {} classpath elements from fork properties '{}'",
            classpath.len(),
            prefix
        );
        classpath
    }

    /// Inverse of [`Classpath::write_to_system_property`]. Empty segments are
    /// skipped, so the trailing separator round-trips cleanly.
    pub fn read_from_system_property(props: &dyn SystemProperties, name: &str) -> Classpath {
        props
            .get(name)
            .map(|value| {
                value
                    .split(PATH_SEPARATOR)
                    .filter(|segment| !segment.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Appends `locator` unless it is already present.
    ///
    /// `None` is rejected with [`ClasspathError::InvalidArgument`] before
    /// anything is touched.
    pub fn add_class_path_element_url(&mut self, locator: Option<&str>) -> Result<()> {
        let locator = locator.ok_or_else(|| {
            ClasspathError::invalid_argument("Null is not a valid class path element url.")
        })?;
        self.push_unique(locator);
        Ok(())
    }

    /// Copy of the elements in insertion order.
    pub fn get_class_path(&self) -> Vec<String> {
        self.elements.clone()
    }

    pub fn get_as_url_list(&self) -> Result<Vec<Url>> {
        self.elements
            .iter()
            .map(|element| resolve_url(element))
            .collect()
    }

    /// Stores every element followed by [`PATH_SEPARATOR`] under `property_name`,
    /// overwriting any previous value. Fails only when `props` refuses the
    /// name or value.
    pub fn write_to_system_property(
        &self,
        props: &mut dyn SystemProperties,
        property_name: &str,
    ) -> Result<()> {
        let value = self.as_path_string();
        tracing::debug!("Setting {} to '{}'", property_name, value);
        props.set(property_name, &value)
    }

    /// Sets `prefix0..prefixN` to the raw elements. Other keys are left alone.
    pub fn write_to_fork_properties(&self, store: &mut dyn PropertyStore, prefix: &str) {
        for (index, element) in self.elements.iter().enumerate() {
            store.set_property(&fork_key(prefix, index), element);
        }
        tracing::debug!(
            "Wrote {} classpath elements to fork properties '{}'",
            self.elements.len(),
            prefix
        );
    }

    pub fn as_path_string(&self) -> String {
        let mut value = String::new();
        for element in &self.elements {
            value.push_str(element);
            value.push(PATH_SEPARATOR);
        }
        value
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn contains(&self, locator: &str) -> bool {
        self.elements.iter().any(|element| element == locator)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.elements.iter()
    }

    fn push_unique(&mut self, locator: &str) {
        if self.contains(locator) {
            return;
        }
        tracing::debug!("Adding classpath element {}", locator);
        self.elements.push(locator.to_string());
    }
}

fn fork_key(prefix: &str, index: usize) -> String {
    format!("{}{}", prefix, index)
}

const URL_SCHEMES: [&str; 4] = ["file", "http", "https", "jar"];

/// URLs with a scheme in [`URL_SCHEMES`] pass through; anything else,
/// including `lib:x.jar` or a Windows drive path, is a file path relative to
/// the working directory.
fn resolve_url(locator: &str) -> Result<Url> {
    if let Ok(url) = Url::parse(locator) {
        if URL_SCHEMES.contains(&url.scheme()) {
            return Ok(url);
        }
    }

    let path = Path::new(locator);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(|e| ClasspathError::UrlResolution {
                locator: locator.to_string(),
                reason: format!("working directory unavailable: {}", e),
            })?
            .join(path)
    };

    Url::from_file_path(&absolute).map_err(|_| ClasspathError::UrlResolution {
        locator: locator.to_string(),
        reason: format!("'{}' cannot be expressed as a file URL", absolute.display()),
    })
}

impl fmt::Display for Classpath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_path_string())
    }
}

impl<S: Into<String>> FromIterator<S> for Classpath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut classpath = Classpath::new();
        classpath.extend(iter);
        classpath
    }
}

impl<S: Into<String>> Extend<S> for Classpath {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for locator in iter {
            let locator: String = locator.into();
            self.push_unique(&locator);
        }
    }
}

impl<'a> IntoIterator for &'a Classpath {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl From<Vec<String>> for Classpath {
    fn from(elements: Vec<String>) -> Self {
        elements.into_iter().collect()
    }
}

impl From<Classpath> for Vec<String> {
    fn from(classpath: Classpath) -> Self {
        classpath.elements
    }
}
