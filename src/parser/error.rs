//! Loader errors
//!
//! The JDiff description format is fixed; anything the loader does not
//! recognize signals a tooling mismatch and is fatal rather than retried.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("XML error: {0}")]
    Xml(#[from] xml::reader::Error),
    #[error("Expected <api> document root, found <{found}>")]
    MissingDocumentRoot { found: String },
    #[error("Document ended before the <api> root element")]
    EmptyDocument,
    #[error("Unknown tag: <{0}>")]
    UnknownTag(String),
    #[error("Tag <{tag}> is not valid here ({context})")]
    MisplacedTag { tag: String, context: &'static str },
    #[error("Missing attribute '{attribute}' on <{tag}>")]
    MissingAttribute { tag: &'static str, attribute: &'static str },
    #[error("Private visibility is not expected in a public API description")]
    PrivateVisibility,
    #[error("Unknown visibility value: '{0}'")]
    UnknownVisibility(String),
}
