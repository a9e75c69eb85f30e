//! Live class/member structures, mirroring the java.lang.reflect surface
//! the checker needs: modifier bits, canonical names, generic types and
//! the public nested-class list.

use crate::consts::*;
use crate::runtime::types::JavaType;

/// A live class as the runtime reports it.
#[derive(Debug, Clone)]
pub struct RuntimeClass {
    /// Canonical name (`pkg.Outer.Inner` for nested classes).
    pub name: String,
    /// Reflection modifier bits, including INTERFACE/ANNOTATION/ENUM.
    pub modifiers: u32,
    /// True for classes declared inside another class.
    pub member_class: bool,
    pub superclass: Option<String>,
    /// Canonical names of directly implemented interfaces.
    pub interfaces: Vec<String>,
    pub fields: Vec<RuntimeField>,
    pub methods: Vec<RuntimeMethod>,
    pub constructors: Vec<RuntimeConstructor>,
    /// Public member classes (`Class.getClasses()` analog).
    pub nested: Vec<RuntimeClass>,
}

impl RuntimeClass {
    pub fn new(name: &str, modifiers: u32) -> Self {
        Self {
            name: name.to_string(),
            modifiers,
            member_class: false,
            superclass: None,
            interfaces: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            constructors: Vec::new(),
            nested: Vec::new(),
        }
    }

    /// Simple (unqualified) name, the last dotted segment.
    pub fn simple_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }

    pub fn is_interface(&self) -> bool {
        self.modifiers & ACC_INTERFACE != 0
    }

    pub fn is_annotation(&self) -> bool {
        self.modifiers & CLASS_MODIFIER_ANNOTATION != 0
    }

    pub fn is_enum(&self) -> bool {
        self.modifiers & CLASS_MODIFIER_ENUM != 0
    }

    pub fn is_static(&self) -> bool {
        self.modifiers & ACC_STATIC != 0
    }

    // Builder-style helpers for embedders and tests

    pub fn member(mut self) -> Self {
        self.member_class = true;
        self
    }

    pub fn with_superclass(mut self, name: &str) -> Self {
        self.superclass = Some(name.to_string());
        self
    }

    pub fn with_interface(mut self, name: &str) -> Self {
        self.interfaces.push(name.to_string());
        self
    }

    pub fn with_field(mut self, field: RuntimeField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_method(mut self, method: RuntimeMethod) -> Self {
        self.methods.push(method);
        self
    }

    pub fn with_constructor(mut self, constructor: RuntimeConstructor) -> Self {
        self.constructors.push(constructor);
        self
    }

    pub fn with_nested(mut self, class: RuntimeClass) -> Self {
        self.nested.push(class);
        self
    }

    /// Depth-first search of the nested-class tree by canonical name.
    pub(crate) fn lookup_nested_mut(&mut self, canonical_name: &str) -> Option<&mut RuntimeClass> {
        for nested in &mut self.nested {
            if nested.name == canonical_name {
                return Some(nested);
            }
            if canonical_name.starts_with(nested.name.as_str()) {
                if let Some(found) = nested.lookup_nested_mut(canonical_name) {
                    return Some(found);
                }
            }
        }
        None
    }
}

/// A live field.
#[derive(Debug, Clone)]
pub struct RuntimeField {
    pub name: String,
    /// Canonical type name.
    pub type_name: String,
    pub modifiers: u32,
}

impl RuntimeField {
    pub fn new(name: &str, type_name: &str, modifiers: u32) -> Self {
        Self {
            name: name.to_string(),
            type_name: type_name.to_string(),
            modifiers,
        }
    }
}

/// A live method with generic parameter/return types.
#[derive(Debug, Clone)]
pub struct RuntimeMethod {
    pub name: String,
    /// Reflection modifier bits, including BRIDGE/VARARGS/SYNTHETIC.
    pub modifiers: u32,
    pub return_type: JavaType,
    pub parameters: Vec<JavaType>,
}

impl RuntimeMethod {
    pub fn new(name: &str, modifiers: u32, return_type: JavaType) -> Self {
        Self {
            name: name.to_string(),
            modifiers,
            return_type,
            parameters: Vec::new(),
        }
    }

    pub fn with_param(mut self, param: JavaType) -> Self {
        self.parameters.push(param);
        self
    }

    pub fn is_varargs(&self) -> bool {
        self.modifiers & METHOD_MODIFIER_VAR_ARGS != 0
    }

    pub fn is_bridge(&self) -> bool {
        self.modifiers & METHOD_MODIFIER_BRIDGE != 0
    }

    pub fn is_synthetic(&self) -> bool {
        self.modifiers & METHOD_MODIFIER_SYNTHETIC != 0
    }
}

/// A live constructor.
#[derive(Debug, Clone)]
pub struct RuntimeConstructor {
    pub modifiers: u32,
    pub parameters: Vec<JavaType>,
}

impl RuntimeConstructor {
    pub fn new(modifiers: u32) -> Self {
        Self {
            modifiers,
            parameters: Vec::new(),
        }
    }

    pub fn with_param(mut self, param: JavaType) -> Self {
        self.parameters.push(param);
        self
    }

    pub fn is_varargs(&self) -> bool {
        self.modifiers & METHOD_MODIFIER_VAR_ARGS != 0
    }
}
