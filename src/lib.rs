//! JDiff API Signature Compliance Checker (sigcheck)
//!
//! Checks a runtime API surface against a declarative JDiff-format XML
//! description of the expected public API.
//!
//! ## Architecture
//!
//! The checker follows a load/match/report pipeline:
//!
//! - **parser**: streaming loader for JDiff XML API descriptions
//! - **model**: in-memory descriptors for declared classes and members
//! - **runtime**: the live API surface being checked (reflection analog)
//! - **check**: structural comparison of declared vs. live elements
//! - **report**: failure taxonomy and observer fan-out
//! - **bin**: command-line interface
//!
//! ## Checking Flow
//!
//! ```text
//! JDiff XML → Loader → ClassDescription → Checker → FailureType → Observers
//!                                            ↑
//!                                       RuntimeApi
//! ```

pub mod check;
pub mod config;
pub mod consts;
pub mod error;
pub mod model;
pub mod parser;
pub mod report;
pub mod runtime;

pub use config::Config;
pub use error::{Error, Result};

use std::io::Read;

use crate::model::ClassDescription;
use crate::report::ResultObserver;
use crate::runtime::{RuntimeApi, RuntimeModel};

/// Check an API description against a runtime API surface.
///
/// Every declared class is located and compared as it is parsed; findings
/// are delivered to `observer`. Parsing stops with an error only on a
/// malformed document, never on a compliance failure.
pub fn check(
    api_xml: &str,
    runtime: &dyn RuntimeApi,
    config: &Config,
    observer: &mut dyn ResultObserver,
) -> Result<()> {
    log::debug!("check start: {} bytes of api xml", api_xml.len());
    parser::check_stream(api_xml.as_bytes(), runtime, config, observer)?;
    log::debug!("check end");
    Ok(())
}

/// Check an API description file against a runtime API surface.
pub fn check_file(
    path: &std::path::Path,
    runtime: &dyn RuntimeApi,
    config: &Config,
    observer: &mut dyn ResultObserver,
) -> Result<()> {
    let file = std::fs::File::open(path)?;
    parser::check_stream(std::io::BufReader::new(file), runtime, config, observer)
}

/// Parse an API description into a list of class descriptions without
/// checking anything. Useful for inspection tooling.
pub fn load_api<R: Read>(source: R) -> Result<Vec<ClassDescription>> {
    parser::collect_stream(source)
}

/// Build a runtime model that mirrors a parsed API description.
///
/// This lets one JDiff document stand in for the live side, so two API
/// descriptions can be diffed against each other.
pub fn mirror<R: Read>(source: R) -> Result<RuntimeModel> {
    let classes = parser::collect_stream(source)?;
    Ok(RuntimeModel::from_api(&classes))
}
