//! Class-level compliance: lookup, modifiers, superclass, interfaces

use crate::config::Config;
use crate::consts::*;
use crate::model::{ClassDescription, ClassKind};
use crate::report::{FailureType, ResultObserver};
use crate::runtime::{RuntimeApi, RuntimeClass};

/// Locate the live class and run the class-level checks. Returns the live
/// class when it was found, so member checks can proceed.
pub(crate) fn check_class_compliance<'a>(
    desc: &ClassDescription,
    absolute_name: &str,
    runtime: &'a dyn RuntimeApi,
    config: &Config,
    observer: &mut dyn ResultObserver,
) -> Option<&'a RuntimeClass> {
    let class = match find_matching_class(desc, absolute_name, runtime) {
        Some(class) => class,
        None => {
            notify_missing(desc, absolute_name, observer);
            return None;
        }
    };

    if !check_class_modifiers_compliance(desc, class) {
        notify_mismatch(desc, absolute_name, observer);
        return Some(class);
    }

    if !check_class_annotation_compliance(desc, class) {
        notify_mismatch(desc, absolute_name, observer);
        return Some(class);
    }

    if !class.is_annotation() {
        if !check_class_extends_compliance(desc, absolute_name, class, config) {
            notify_mismatch(desc, absolute_name, observer);
            return Some(class);
        }
        if !check_class_implements_compliance(desc, class) {
            notify_mismatch(desc, absolute_name, observer);
            return Some(class);
        }
    }

    Some(class)
}

/// Resolve the declared class, walking nested public classes for dotted
/// short names (`Outer.Inner`).
fn find_matching_class<'a>(
    desc: &ClassDescription,
    absolute_name: &str,
    runtime: &'a dyn RuntimeApi,
) -> Option<&'a RuntimeClass> {
    let mut parts = desc.short_name.split('.');
    let first = parts.next()?;
    let top_level_name = format!("{}.{}", desc.package_name, first);

    let mut current = runtime.load_class(&top_level_name)?;
    if current.name == absolute_name {
        return Some(current);
    }

    for part in parts {
        current = find_nested_class_by_name(current, part)?;
        if current.name == absolute_name {
            return Some(current);
        }
    }
    None
}

fn find_nested_class_by_name<'a>(
    class: &'a RuntimeClass,
    simple_name: &str,
) -> Option<&'a RuntimeClass> {
    class
        .nested
        .iter()
        .find(|nested| nested.simple_name() == simple_name)
}

/// Modifier comparison with the mechanical exclusions: reflection reports
/// ANNOTATION, INTERFACE and ENUM bits that the JDiff format encodes
/// differently, so they are stripped from the live value first.
fn check_class_modifiers_compliance(desc: &ClassDescription, class: &RuntimeClass) -> bool {
    let mut live_modifiers = class.modifiers;
    if desc.is_annotation() {
        live_modifiers &= !CLASS_MODIFIER_ANNOTATION;
    }
    if class.is_interface() {
        live_modifiers &= !ACC_INTERFACE;
    }
    if desc.is_enum_type() && class.is_enum() {
        live_modifiers &= !CLASS_MODIFIER_ENUM;
    }
    live_modifiers == desc.modifiers && desc.is_enum_type() == class.is_enum()
}

/// A live annotation must be declared as implementing
/// `java.lang.annotation.Annotation` in the description.
fn check_class_annotation_compliance(desc: &ClassDescription, class: &RuntimeClass) -> bool {
    if class.is_annotation() {
        return desc.is_annotation();
    }
    true
}

fn check_class_extends_compliance(
    desc: &ClassDescription,
    absolute_name: &str,
    class: &RuntimeClass,
    config: &Config,
) -> bool {
    let declared = match &desc.extends {
        Some(name) => name,
        None => return true,
    };
    match &class.superclass {
        Some(live) if live == declared => true,
        _ => config.superclass_exemptions.contains(absolute_name),
    }
}

/// Every interface the description declares must be present on the live
/// class; extra live interfaces are tolerated.
fn check_class_implements_compliance(desc: &ClassDescription, class: &RuntimeClass) -> bool {
    use std::collections::HashSet;
    let live: HashSet<&str> = class.interfaces.iter().map(|name| name.as_str()).collect();
    desc.interfaces.iter().all(|name| live.contains(name.as_str()))
}

fn notify_missing(desc: &ClassDescription, absolute_name: &str, observer: &mut dyn ResultObserver) {
    let kind = match desc.kind {
        ClassKind::Interface => FailureType::MissingInterface,
        ClassKind::Class => FailureType::MissingClass,
    };
    observer.notify_failure(kind, absolute_name);
}

fn notify_mismatch(desc: &ClassDescription, absolute_name: &str, observer: &mut dyn ResultObserver) {
    let kind = match desc.kind {
        ClassKind::Interface => FailureType::MismatchInterface,
        ClassKind::Class => FailureType::MismatchClass,
    };
    observer.notify_failure(kind, absolute_name);
}
