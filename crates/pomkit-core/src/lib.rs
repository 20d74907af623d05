//! Document facade for Maven project descriptors.
//!
//! This crate ties the schema layer's decoder and encoder to a
//! `DependencyIndex` built right after decoding, and exposes them through
//! `Document`: parse a POM, look dependencies up by coordinates in constant
//! time, and marshal it back to text.

pub mod document;
pub mod index;

pub use document::Document;
pub use index::DependencyIndex;
pub use pomkit_schema::{EncodeOptions, Project};

use pomkit_schema::{DecodeError, EncodeError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("decode error: {0}")]
    Decode(DecodeError),
    #[error("encode error: {0}")]
    Encode(EncodeError),
    #[error("{0}")]
    Hash(#[from] pomkit_schema::HashError),
    #[error("dependency index is empty: project has no dependencies element")]
    IndexEmpty,
    #[error("dependency not found: {group_id}:{artifact_id}")]
    DependencyNotFound {
        group_id: String,
        artifact_id: String,
    },
}

// Read and write failures surface as `Io` whichever codec direction hit them.
impl From<DecodeError> for CoreError {
    fn from(err: DecodeError) -> Self {
        match err {
            DecodeError::Io(e) => Self::Io(e),
            other => Self::Decode(other),
        }
    }
}

impl From<EncodeError> for CoreError {
    fn from(err: EncodeError) -> Self {
        match err {
            EncodeError::Io(e) => Self::Io(e),
            other => Self::Encode(other),
        }
    }
}
