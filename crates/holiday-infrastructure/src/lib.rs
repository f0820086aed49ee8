pub mod config_service;
pub mod paths;
pub mod storage;

pub use crate::config_service::{ConfigService, OPENAI_API_KEY_VAR};
pub use crate::paths::{HolidayPaths, PathError};
pub use crate::storage::{ConfigStorage, ConfigStorageError, SecretStorage, SecretStorageError};
