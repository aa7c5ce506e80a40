pub mod configuration;

pub use crate::domain::model::{Classpath, PATH_SEPARATOR};
pub use crate::domain::ports::{ConfigProvider, PropertyStore, SystemProperties};
pub use crate::utils::error::Result;
