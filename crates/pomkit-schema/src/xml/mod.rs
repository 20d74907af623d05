//! XML mapping between POM text and the [`Project`](crate::Project) graph.
//!
//! Text is tokenized with `quick-xml` into a small [`Element`] tree; each model
//! type knows how to read itself from an element ([`FromElement`]) and how to
//! build one ([`ToElement`]). Encoding serializes the built tree back through
//! a `quick-xml` writer.

mod decode;
mod element;
mod encode;

pub use decode::{parse_project_file, parse_project_reader, parse_project_slice, parse_project_str};
pub use encode::{EncodeOptions, XML_DECLARATION};

pub(crate) use element::Element;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("failed to read project descriptor: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("malformed XML attribute: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),
    #[error("project descriptor is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    #[error("expected root element <project>, found <{0}>")]
    UnexpectedRoot(String),
    #[error("document has no root element")]
    MissingRoot,
    #[error("document ended inside <{0}>")]
    UnexpectedEof(String),
    #[error("closing tag </{0}> has no matching opening tag")]
    UnmatchedEnd(String),
    #[error("invalid element name '{0}'")]
    InvalidName(String),
    #[error("invalid boolean in <{field}>: '{value}'")]
    InvalidBool { field: String, value: String },
}

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("failed to write project descriptor: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode XML: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("cannot write element with invalid name '{0}'")]
    InvalidName(String),
}

/// Read a model value out of its element.
pub(crate) trait FromElement: Sized {
    fn from_element(element: &Element<'_>) -> Result<Self, DecodeError>;
}

/// Build the element for a model value, named by the caller since the same
/// type appears under different tags (`repository`, `snapshotRepository`).
pub(crate) trait ToElement {
    fn to_element<'a>(&'a self, name: &'a str) -> Element<'a>;
}
