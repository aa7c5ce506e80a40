use crate::core::{Classpath, ConfigProvider, PropertyStore, SystemProperties};
use crate::utils::error::Result;

pub const CLASSPATH_URL_PREFIX: &str = "classPathUrl.";
pub const PROVIDER_CLASSPATH_URL_PREFIX: &str = "surefireClassPathUrl.";
pub const CHILD_DELEGATION: &str = "childDelegation";
pub const ENABLE_ASSERTIONS: &str = "enableAssertions";

pub const TEST_CLASSPATH_PROPERTY: &str = "surefire.test.class.path";
pub const JAVA_CLASSPATH_PROPERTY: &str = "java.class.path";

/// Everything a forked process needs to rebuild its search path: the test
/// classpath, the provider's own classpath, and the loader flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClasspathConfiguration {
    pub test_classpath: Classpath,
    pub provider_classpath: Classpath,
    pub child_delegation: bool,
    pub enable_assertions: bool,
}

impl ClasspathConfiguration {
    pub fn new(
        test_classpath: Classpath,
        provider_classpath: Classpath,
        child_delegation: bool,
        enable_assertions: bool,
    ) -> Self {
        Self {
            test_classpath,
            provider_classpath,
            child_delegation,
            enable_assertions,
        }
    }

    pub fn from_provider(config: &dyn ConfigProvider) -> Result<Self> {
        let mut test_classpath = Classpath::new();
        for element in config.test_classpath_elements() {
            test_classpath.add_class_path_element_url(Some(element.as_str()))?;
        }

        let mut provider_classpath = Classpath::new();
        for element in config.provider_classpath_elements() {
            provider_classpath.add_class_path_element_url(Some(element.as_str()))?;
        }

        Ok(Self::new(
            test_classpath,
            provider_classpath,
            config.child_delegation(),
            config.enable_assertions(),
        ))
    }

    pub fn write_to_fork_properties(&self, store: &mut dyn PropertyStore) {
        self.test_classpath
            .write_to_fork_properties(store, CLASSPATH_URL_PREFIX);
        self.provider_classpath
            .write_to_fork_properties(store, PROVIDER_CLASSPATH_URL_PREFIX);
        store.set_property(CHILD_DELEGATION, &self.child_delegation.to_string());
        store.set_property(ENABLE_ASSERTIONS, &self.enable_assertions.to_string());
    }

    pub fn read_from_fork_properties(store: &dyn PropertyStore) -> Self {
        Self {
            test_classpath: Classpath::read_from_fork_properties(store, CLASSPATH_URL_PREFIX),
            provider_classpath: Classpath::read_from_fork_properties(
                store,
                PROVIDER_CLASSPATH_URL_PREFIX,
            ),
            child_delegation: read_flag(store, CHILD_DELEGATION),
            enable_assertions: read_flag(store, ENABLE_ASSERTIONS),
        }
    }

    /// Test classpath followed by the provider classpath.
    pub fn effective_classpath(&self) -> Classpath {
        Classpath::join(Some(&self.test_classpath), Some(&self.provider_classpath))
    }

    pub fn write_to_system_properties(&self, props: &mut dyn SystemProperties) -> Result<()> {
        self.effective_classpath()
            .write_to_system_property(props, TEST_CLASSPATH_PROPERTY)?;
        self.test_classpath
            .write_to_system_property(props, JAVA_CLASSPATH_PROPERTY)
    }
}

// Missing or unparsable flags read as false.
fn read_flag(store: &dyn PropertyStore, key: &str) -> bool {
    store
        .get_property(key)
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(false)
}
