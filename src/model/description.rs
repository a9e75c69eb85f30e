//! Descriptors for classes and members declared in a JDiff document

/// Whether a declared type is a class or an interface. Annotations and
/// enums are declared as interfaces/classes with marker attributes, so
/// the format only distinguishes these two kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassKind {
    Class,
    Interface,
}

/// Canonicalize a JDiff type string.
///
/// `<? extends java.lang.Object>` and `<?>` denote the same wildcard; the
/// runtime renderer always produces the short form, so the declared side
/// is folded to it up front.
pub fn scrub_jdiff_type(type_name: &str) -> String {
    type_name.replace("<? extends java.lang.Object>", "<?>")
}

/// A declared field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescription {
    pub name: String,
    pub field_type: String,
    pub modifiers: u32,
}

impl FieldDescription {
    pub fn new(name: &str, field_type: &str, modifiers: u32) -> Self {
        Self {
            name: name.to_string(),
            field_type: field_type.to_string(),
            modifiers,
        }
    }

    /// Readable form used in failure messages: `Class#name(type)`.
    pub fn to_readable_string(&self, class_name: &str) -> String {
        format!("{}#{}({})", class_name, self.name, self.field_type)
    }
}

/// A declared method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDescription {
    pub name: String,
    pub modifiers: u32,
    /// Canonicalized return type, `"void"` when the attribute is absent.
    pub return_type: String,
    pub parameters: Vec<String>,
    /// Declared throws clause. Order carries no meaning for matching.
    pub exceptions: Vec<String>,
}

impl MethodDescription {
    pub fn new(name: &str, modifiers: u32, return_type: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            modifiers,
            return_type: match return_type {
                Some(ty) => scrub_jdiff_type(ty),
                None => "void".to_string(),
            },
            parameters: Vec::new(),
            exceptions: Vec::new(),
        }
    }

    pub fn add_param(&mut self, param_type: &str) {
        self.parameters.push(scrub_jdiff_type(param_type));
    }

    pub fn add_exception(&mut self, exception_type: &str) {
        self.exceptions.push(exception_type.to_string());
    }

    /// Readable form used in failure messages: `Class#name(p1, p2)`.
    pub fn to_readable_string(&self, class_name: &str) -> String {
        format!("{}#{}({})", class_name, self.name, self.parameters.join(", "))
    }
}

/// A declared constructor: a method with no return type whose name is the
/// enclosing class's short name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorDescription {
    pub method: MethodDescription,
}

impl ConstructorDescription {
    pub fn new(class_short_name: &str, modifiers: u32) -> Self {
        Self {
            method: MethodDescription::new(class_short_name, modifiers, None),
        }
    }

    pub fn with_params(class_short_name: &str, params: &[&str], modifiers: u32) -> Self {
        let mut ctor = Self::new(class_short_name, modifiers);
        for param in params {
            ctor.method.add_param(param);
        }
        ctor
    }

    pub fn add_param(&mut self, param_type: &str) {
        self.method.add_param(param_type);
    }

    pub fn add_exception(&mut self, exception_type: &str) {
        self.method.add_exception(exception_type);
    }

    pub fn to_readable_string(&self, class_name: &str) -> String {
        self.method.to_readable_string(class_name)
    }
}

/// A declared class or interface, plus its members.
///
/// The loader keeps a single instance alive across the whole document:
/// `reset` repopulates the identity for each `<class>`/`<interface>` tag
/// and `clear_members` drops the member lists after the compliance check.
#[derive(Debug, Clone)]
pub struct ClassDescription {
    pub package_name: String,
    /// Short class name, dot-separated for inner classes (`Outer.Inner`).
    pub short_name: String,
    pub kind: ClassKind,
    pub modifiers: u32,
    pub extends: Option<String>,
    pub interfaces: Vec<String>,
    pub fields: Vec<FieldDescription>,
    pub methods: Vec<MethodDescription>,
    pub constructors: Vec<ConstructorDescription>,
}

impl ClassDescription {
    pub fn new(package_name: &str, short_name: &str, kind: ClassKind) -> Self {
        Self {
            package_name: package_name.to_string(),
            short_name: short_name.to_string(),
            kind,
            modifiers: 0,
            extends: None,
            interfaces: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            constructors: Vec::new(),
        }
    }

    /// Re-point this description at a new class, dropping all previous
    /// state. Called by the loader at each class/interface start tag.
    pub fn reset(&mut self, package_name: &str, short_name: &str, kind: ClassKind) {
        self.package_name.clear();
        self.package_name.push_str(package_name);
        self.short_name.clear();
        self.short_name.push_str(short_name);
        self.kind = kind;
        self.modifiers = 0;
        self.extends = None;
        self.clear_members();
    }

    /// Drop member lists after a compliance pass. The description is not
    /// reusable for another check without re-population.
    pub fn clear_members(&mut self) {
        self.interfaces.clear();
        self.fields.clear();
        self.methods.clear();
        self.constructors.clear();
    }

    /// Package name + short class name.
    pub fn absolute_name(&self) -> String {
        format!("{}.{}", self.package_name, self.short_name)
    }

    pub fn add_impl_interface(&mut self, interface_name: &str) {
        self.interfaces.push(interface_name.to_string());
    }

    pub fn add_field(&mut self, field: FieldDescription) {
        self.fields.push(field);
    }

    pub fn add_method(&mut self, method: MethodDescription) {
        self.methods.push(method);
    }

    pub fn add_constructor(&mut self, constructor: ConstructorDescription) {
        self.constructors.push(constructor);
    }

    /// JDiff marks enums as classes extending `java.lang.Enum`.
    pub fn is_enum_type(&self) -> bool {
        self.extends.as_deref() == Some(crate::consts::JAVA_LANG_ENUM)
    }

    /// JDiff marks annotations as implementing `java.lang.annotation.Annotation`.
    pub fn is_annotation(&self) -> bool {
        self.interfaces
            .iter()
            .any(|name| name == crate::consts::JAVA_LANG_ANNOTATION)
    }
}
