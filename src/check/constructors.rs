//! Constructor compliance
//!
//! Like method matching, except the compiler prepends an implicit
//! outer-instance parameter to constructors of non-static member classes;
//! that parameter is invisible to JDiff and skipped here.

use crate::check::{compare_param, CheckResult};
use crate::consts::METHOD_MODIFIER_VAR_ARGS;
use crate::model::{ClassDescription, ConstructorDescription};
use crate::report::{FailureType, ResultObserver};
use crate::runtime::{RuntimeClass, RuntimeConstructor};

pub(crate) fn check_constructors_compliance(
    desc: &ClassDescription,
    absolute_name: &str,
    class: &RuntimeClass,
    observer: &mut dyn ResultObserver,
) {
    for ctor in &desc.constructors {
        match find_matching_constructor(class, ctor) {
            Err(err) => {
                log::error!(
                    "error while checking constructor compliance for {}: {}",
                    ctor.to_readable_string(absolute_name),
                    err
                );
                observer.notify_failure(
                    FailureType::CaughtException,
                    &ctor.to_readable_string(absolute_name),
                );
            }
            Ok(None) => {
                observer.notify_failure(
                    FailureType::MissingMethod,
                    &ctor.to_readable_string(absolute_name),
                );
            }
            Ok(Some(live)) => {
                let mut expected_modifiers = ctor.method.modifiers;
                if live.is_varargs() {
                    expected_modifiers |= METHOD_MODIFIER_VAR_ARGS;
                }
                if live.modifiers != expected_modifiers {
                    observer.notify_failure(
                        FailureType::MismatchMethod,
                        &ctor.to_readable_string(absolute_name),
                    );
                }
            }
        }
    }
}

fn find_matching_constructor<'a>(
    class: &'a RuntimeClass,
    ctor: &ConstructorDescription,
) -> CheckResult<Option<&'a RuntimeConstructor>> {
    for live in &class.constructors {
        let mut start_offset = 0;
        let mut param_count = live.parameters.len();

        // non-static inner class: skip the implicit outer-instance pointer
        if class.member_class && !class.is_static() && !live.parameters.is_empty() {
            start_offset = 1;
            param_count -= 1;
        }

        if ctor.method.parameters.len() != param_count {
            continue;
        }

        let mut found = true;
        for (declared, live_param) in ctor
            .method
            .parameters
            .iter()
            .zip(&live.parameters[start_offset..])
        {
            if !compare_param(declared, &live_param.render()?) {
                found = false;
                break;
            }
        }
        if found {
            return Ok(Some(live));
        }
    }
    Ok(None)
}
