use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum DataLoadError {
    #[error("failed to read exercise catalog: {0}")]
    Read(#[from] ReadError),
    #[error("no valid exercises in catalog ({rejected} records rejected)")]
    NoValidRecords { rejected: usize },
}

#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("invalid catalog format: {0}")]
    InvalidFormat(String),
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("catalog source not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read catalog source: {0}")]
    Io(String),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("record {index}{}: {kind}", .id.as_ref().map(|id| format!(" ({id})")).unwrap_or_default())]
pub struct RecordValidationError {
    pub index: usize,
    pub id: Option<String>,
    pub kind: RecordErrorKind,
}

impl RecordValidationError {
    #[must_use]
    pub fn malformed(index: usize, reason: impl Into<String>) -> Self {
        Self {
            index,
            id: None,
            kind: RecordErrorKind::Malformed(reason.into()),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordErrorKind {
    #[error("malformed record: {0}")]
    Malformed(String),
    #[error("missing field `{0}`")]
    Missing(&'static str),
    #[error("field `{0}` must not be empty")]
    Empty(&'static str),
    #[error("field `{field}` needs at least {min} entries")]
    TooFew { field: &'static str, min: usize },
    #[error("invalid id `{0}`")]
    InvalidID(String),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("exercise not found: {0}")]
    NotFound(String),
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}
