//! Method compliance: name/return/parameter matching plus modifier
//! normalization for the bits JDiff cannot express

use crate::check::{compare_param, CheckResult};
use crate::consts::*;
use crate::model::{ClassDescription, ClassKind, MethodDescription};
use crate::report::{FailureType, ResultObserver};
use crate::runtime::{RuntimeClass, RuntimeMethod};

pub(crate) fn check_methods_compliance(
    desc: &ClassDescription,
    absolute_name: &str,
    class: &RuntimeClass,
    observer: &mut dyn ResultObserver,
) {
    for method in &desc.methods {
        let mut expected_modifiers = method.modifiers;
        // JDiff does not mark interface methods abstract
        if desc.kind == ClassKind::Interface {
            expected_modifiers |= ACC_ABSTRACT;
        }

        match find_matching_method(class, method) {
            Err(err) => {
                log::error!(
                    "error while checking method compliance for {}: {}",
                    method.to_readable_string(absolute_name),
                    err
                );
                observer.notify_failure(
                    FailureType::CaughtException,
                    &method.to_readable_string(absolute_name),
                );
            }
            Ok(None) => {
                observer.notify_failure(
                    FailureType::MissingMethod,
                    &method.to_readable_string(absolute_name),
                );
            }
            Ok(Some(live)) => {
                if live.is_varargs() {
                    expected_modifiers |= METHOD_MODIFIER_VAR_ARGS;
                }
                if live.is_bridge() {
                    expected_modifiers |= METHOD_MODIFIER_BRIDGE;
                }
                if live.is_synthetic() {
                    expected_modifiers |= METHOD_MODIFIER_SYNTHETIC;
                }

                // the generated values() method carries modifiers the
                // description cannot predict; never flag it
                if class.is_enum() && method.name == "values" {
                    continue;
                }

                if live.modifiers != expected_modifiers {
                    observer.notify_failure(
                        FailureType::MismatchMethod,
                        &method.to_readable_string(absolute_name),
                    );
                }
            }
        }
    }
}

fn find_matching_method<'a>(
    class: &'a RuntimeClass,
    method: &MethodDescription,
) -> CheckResult<Option<&'a RuntimeMethod>> {
    for live in &class.methods {
        if matches(method, live)? {
            return Ok(Some(live));
        }
    }
    Ok(None)
}

/// Name, rendered return type and every parameter must match.
fn matches(method: &MethodDescription, live: &RuntimeMethod) -> CheckResult<bool> {
    if method.name != live.name {
        return Ok(false);
    }
    if method.return_type != live.return_type.render()? {
        return Ok(false);
    }
    if method.parameters.len() != live.parameters.len() {
        return Ok(false);
    }
    for (declared, live_param) in method.parameters.iter().zip(&live.parameters) {
        if !compare_param(declared, &live_param.render()?) {
            return Ok(false);
        }
    }
    Ok(true)
}
