//! The live API surface being checked
//!
//! Reflection-style introspection is abstracted behind [`RuntimeApi`]; the
//! checker only ever asks it to resolve a canonical top-level class name.
//! [`RuntimeModel`] is the in-memory implementation, populated either
//! directly (tests, embedders) or by mirroring a parsed API description.

pub mod class;
pub mod types;

pub use class::{RuntimeClass, RuntimeConstructor, RuntimeField, RuntimeMethod};
pub use types::JavaType;

use std::collections::HashMap;

use crate::consts::*;
use crate::model::{ClassDescription, ClassKind};

/// Resolver for live classes, keyed by canonical name.
///
/// Inner classes are not resolved directly; the checker loads the
/// outermost class and walks its nested-class list.
pub trait RuntimeApi {
    fn load_class(&self, canonical_name: &str) -> Option<&RuntimeClass>;
}

/// In-memory registry of live classes.
#[derive(Debug, Default)]
pub struct RuntimeModel {
    classes: HashMap<String, RuntimeClass>,
}

impl RuntimeModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a top-level class. Nested classes are carried inside their
    /// enclosing [`RuntimeClass`], not registered here.
    pub fn add_class(&mut self, class: RuntimeClass) {
        self.classes.insert(class.name.clone(), class);
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Mirror a parsed API description into a runtime model, reproducing
    /// what reflection would report for the same surface:
    ///
    /// - interfaces carry the INTERFACE bit and their methods ABSTRACT
    /// - non-static member classes gain the implicit outer-instance
    ///   constructor parameter the compiler inserts
    /// - dotted short names become nested classes of their enclosing class
    pub fn from_api(classes: &[ClassDescription]) -> Self {
        let mut model = Self::new();

        // Build every class flat first, then attach inner classes to their
        // enclosing class in declaration order. JDiff lists an outer class
        // before its inner classes, so a single ordered pass suffices.
        for desc in classes {
            let class = Self::mirror_class(desc);
            match desc.short_name.rsplit_once('.') {
                Some((outer_short, _)) => {
                    let outer_name = format!("{}.{}", desc.package_name, outer_short);
                    if let Some(orphan) = model.attach_nested(&outer_name, class) {
                        // Orphaned inner class: register flat so the walk
                        // at least fails with a missing-class finding.
                        model.add_class(orphan);
                    }
                }
                None => model.add_class(class),
            }
        }
        model
    }

    /// Attach `class` under its enclosing class; hands the class back when
    /// the enclosing class is not registered.
    fn attach_nested(&mut self, outer_name: &str, class: RuntimeClass) -> Option<RuntimeClass> {
        match self.lookup_mut(outer_name) {
            Some(outer) => {
                outer.nested.push(class);
                None
            }
            None => Some(class),
        }
    }

    fn mirror_class(desc: &ClassDescription) -> RuntimeClass {
        let mut modifiers = desc.modifiers;
        if desc.kind == ClassKind::Interface {
            modifiers |= ACC_INTERFACE;
        }
        if desc.is_annotation() {
            modifiers |= CLASS_MODIFIER_ANNOTATION;
        }
        if desc.is_enum_type() {
            modifiers |= CLASS_MODIFIER_ENUM;
        }

        let is_member = desc.short_name.contains('.');
        let mut class = RuntimeClass::new(&desc.absolute_name(), modifiers);
        class.member_class = is_member;
        class.superclass = desc.extends.clone();
        class.interfaces = desc.interfaces.clone();

        for field in &desc.fields {
            class.fields.push(RuntimeField::new(
                &field.name,
                &field.field_type,
                field.modifiers,
            ));
        }
        for method in &desc.methods {
            let mut mods = method.modifiers;
            if desc.kind == ClassKind::Interface {
                mods |= ACC_ABSTRACT;
            }
            class.methods.push(RuntimeMethod {
                name: method.name.clone(),
                modifiers: mods,
                return_type: JavaType::class(&method.return_type),
                parameters: method.parameters.iter().map(|p| JavaType::class(p)).collect(),
            });
        }
        for ctor in &desc.constructors {
            let mut parameters: Vec<JavaType> =
                ctor.method.parameters.iter().map(|p| JavaType::class(p)).collect();
            if is_member && modifiers & ACC_STATIC == 0 {
                // implicit outer-instance parameter
                let outer = desc
                    .absolute_name()
                    .rsplit_once('.')
                    .map(|(outer, _)| outer.to_string())
                    .unwrap_or_default();
                parameters.insert(0, JavaType::class(&outer));
            }
            class.constructors.push(RuntimeConstructor {
                modifiers: ctor.method.modifiers,
                parameters,
            });
        }
        class
    }

    fn lookup_mut(&mut self, canonical_name: &str) -> Option<&mut RuntimeClass> {
        // The enclosing class may itself be nested; search one level of
        // top-level classes, then walk nested lists by canonical name.
        if self.classes.contains_key(canonical_name) {
            return self.classes.get_mut(canonical_name);
        }
        for class in self.classes.values_mut() {
            if canonical_name.starts_with(class.name.as_str()) {
                if let Some(found) = class.lookup_nested_mut(canonical_name) {
                    return Some(found);
                }
            }
        }
        None
    }
}

impl RuntimeApi for RuntimeModel {
    fn load_class(&self, canonical_name: &str) -> Option<&RuntimeClass> {
        self.classes.get(canonical_name)
    }
}
