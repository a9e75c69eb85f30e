// Java reflection modifier bits (java.lang.reflect.Modifier values)

pub const ACC_PUBLIC: u32 = 0x0001;
pub const ACC_PRIVATE: u32 = 0x0002;
pub const ACC_PROTECTED: u32 = 0x0004;
pub const ACC_STATIC: u32 = 0x0008;
pub const ACC_FINAL: u32 = 0x0010;
pub const ACC_SYNCHRONIZED: u32 = 0x0020;
pub const ACC_VOLATILE: u32 = 0x0040;
pub const ACC_TRANSIENT: u32 = 0x0080;
pub const ACC_NATIVE: u32 = 0x0100;
pub const ACC_INTERFACE: u32 = 0x0200;
pub const ACC_ABSTRACT: u32 = 0x0400;

// Class flags reflection reports but the JDiff format cannot express
pub const CLASS_MODIFIER_ANNOTATION: u32 = 0x2000;
pub const CLASS_MODIFIER_ENUM: u32 = 0x4000;

// Compiler-generated method flags, likewise invisible to JDiff
pub const METHOD_MODIFIER_BRIDGE: u32 = 0x0040;
pub const METHOD_MODIFIER_VAR_ARGS: u32 = 0x0080;
pub const METHOD_MODIFIER_SYNTHETIC: u32 = 0x1000;

// Canonical names with special meaning during checking
pub const JAVA_LANG_OBJECT: &str = "java.lang.Object";
pub const JAVA_LANG_ENUM: &str = "java.lang.Enum";
pub const JAVA_LANG_ANNOTATION: &str = "java.lang.annotation.Annotation";
