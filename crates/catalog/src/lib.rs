mod chain;
mod macros;
mod table;

pub use table::{CourseIndex, DEFAULT_BUCKET_COUNT};

use thiserror::Error;

/// One course as handed over by the loader: the identifier that gets
/// hashed, a display title, and the identifiers of any prerequisites in
/// the order they appeared in the input, duplicates included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub prerequisites: Vec<String>,
}

impl Course {
    pub fn new<S: Into<String>>(id: S, title: S, prerequisites: Vec<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            prerequisites,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// The table cannot exist without at least one bucket
    #[error("bucket count must be at least 1")]
    InvalidConfiguration,

    /// The identifier does not parse as the numeric key the hash function
    /// needs, so no bucket can be derived for it
    #[error("identifier {id:?} does not parse as a non-negative integer")]
    UnhashableIdentifier { id: String },
}
