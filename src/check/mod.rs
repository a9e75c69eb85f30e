//! Signature compliance checking
//!
//! Per-member comparison of a declared [`ClassDescription`] against the
//! live class a [`RuntimeApi`] resolves for it. Findings are notified,
//! never returned: a single run can produce many findings and must keep
//! going after each one.

mod class;
mod constructors;
mod fields;
mod methods;

use crate::config::Config;
use crate::model::ClassDescription;
use crate::report::ResultObserver;
use crate::runtime::RuntimeApi;

pub type CheckResult<T> = Result<T, CheckError>;

/// Errors internal to a single member comparison. These never abort the
/// run; the member is reported as CAUGHT_EXCEPTION and checking continues.
#[derive(thiserror::Error, Debug)]
pub enum CheckError {
    #[error("Cannot render type: {0}")]
    UnrenderableType(String),
}

/// Check one declared class against the runtime.
///
/// Class-level identity is checked first; when the class resolves at all,
/// field, constructor and method checks still run even if the class-level
/// comparison already produced a finding.
pub fn check_signature_compliance(
    desc: &ClassDescription,
    runtime: &dyn RuntimeApi,
    config: &Config,
    observer: &mut dyn ResultObserver,
) {
    let absolute_name = desc.absolute_name();
    if config.skip_classes.contains(&absolute_name) {
        log::debug!("skipping exempted class {}", absolute_name);
        return;
    }

    let class = class::check_class_compliance(desc, &absolute_name, runtime, config, observer);
    if let Some(class) = class {
        fields::check_fields_compliance(desc, &absolute_name, class, observer);
        constructors::check_constructors_compliance(desc, &absolute_name, class, observer);
        methods::check_methods_compliance(desc, &absolute_name, class, observer);
    }
}

/// Compare a declared parameter string with a live parameter type string.
///
/// JDiff reports varargs as `...` while reflection reports them as `[]`;
/// the suffixes are stripped and the prefixes compared when both forms
/// are present.
pub(crate) fn compare_param(declared: &str, live: &str) -> bool {
    if declared == live {
        return true;
    }
    match (declared.find("..."), live.find("[]")) {
        (Some(declared_end), Some(live_end)) => declared[..declared_end] == live[..live_end],
        _ => false,
    }
}
