//! Top-level error type unifying the subsystem errors

use thiserror::Error;

use crate::check::CheckError;
use crate::parser::ParseError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("Check error: {0}")]
    Check(#[from] CheckError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
