use std::fs;
use std::io::ErrorKind;
use std::sync::Mutex;

use super::ConfigError;

/// Where raw config text comes from. `None` means nothing was stored yet.
pub trait ConfigContentProvider {
    fn get_config_content(&self) -> Result<Option<String>, ConfigError>;
    fn set_config_content(&self, content: &str) -> Result<(), ConfigError>;
}

pub struct FileContentConfigProvider {
    file_path: String,
}

impl FileContentConfigProvider {
    pub fn new(file_path: String) -> Self {
        Self { file_path }
    }

    pub fn file_path(&self) -> &str {
        &self.file_path
    }
}

impl ConfigContentProvider for FileContentConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, ConfigError> {
        match fs::read_to_string(&self.file_path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_config_content(&self, content: &str) -> Result<(), ConfigError> {
        fs::write(&self.file_path, content)?;
        Ok(())
    }
}

/// Keeps the config text in memory; handy for tests and embedding.
#[derive(Default)]
pub struct MemoryContentConfigProvider {
    content: Mutex<Option<String>>,
}

impl MemoryContentConfigProvider {
    pub fn new(content: Option<String>) -> Self {
        Self {
            content: Mutex::new(content),
        }
    }

    pub fn content(&self) -> Option<String> {
        self.content
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl ConfigContentProvider for MemoryContentConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, ConfigError> {
        Ok(self.content())
    }

    fn set_config_content(&self, content: &str) -> Result<(), ConfigError> {
        *self
            .content
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(content.to_string());
        Ok(())
    }
}
