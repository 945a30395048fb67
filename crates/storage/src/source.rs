use std::path::{Path, PathBuf};

use exercise_catalog_domain as domain;
use log::debug;

use crate::json;

/// A catalog stored as JSON file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl domain::CatalogRepository for JsonFile {
    fn read_records(
        &self,
    ) -> Result<Vec<Result<domain::ExerciseRecord, domain::RecordValidationError>>, domain::ReadError>
    {
        debug!("reading exercise catalog from {}", self.path.display());
        let bytes = std::fs::read(&self.path).map_err(|err| match err.kind() {
            std::io::ErrorKind::NotFound => domain::StorageError::NotFound(self.path.clone()),
            _ => domain::StorageError::Io(format!("{}: {err}", self.path.display())),
        })?;
        json::decode(&bytes)
    }
}

/// A catalog held in memory as JSON document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonBytes(pub Vec<u8>);

impl From<&str> for JsonBytes {
    fn from(value: &str) -> Self {
        Self(value.as_bytes().to_vec())
    }
}

impl From<Vec<u8>> for JsonBytes {
    fn from(value: Vec<u8>) -> Self {
        Self(value)
    }
}

impl domain::CatalogRepository for JsonBytes {
    fn read_records(
        &self,
    ) -> Result<Vec<Result<domain::ExerciseRecord, domain::RecordValidationError>>, domain::ReadError>
    {
        json::decode(&self.0)
    }
}
