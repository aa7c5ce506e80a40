use crate::utils::error::Result;

/// Flat string-keyed store used to hand a classpath across a process
/// boundary.
pub trait PropertyStore {
    fn get_property(&self, key: &str) -> Option<String>;
    fn set_property(&mut self, key: &str, value: &str);
}

/// Process-wide key/value surface (system properties or environment).
///
/// Implementations own any synchronisation; writers race and the last
/// write wins. `set` rejects names or values the backing surface cannot hold.
pub trait SystemProperties {
    fn get(&self, name: &str) -> Option<String>;
    fn set(&mut self, name: &str, value: &str) -> Result<()>;
}

pub trait ConfigProvider {
    fn test_classpath_elements(&self) -> &[String];
    fn provider_classpath_elements(&self) -> &[String];
    fn fork_properties_path(&self) -> &str;
    fn child_delegation(&self) -> bool;
    fn enable_assertions(&self) -> bool;
}
