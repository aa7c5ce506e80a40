// Adapters layer: concrete property stores behind the domain ports.

pub mod environment;
pub mod memory;
pub mod properties_file;

pub use environment::ProcessEnvironment;
pub use memory::MemoryProperties;
pub use properties_file::PropertiesFile;
