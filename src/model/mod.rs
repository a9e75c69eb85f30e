//! In-memory descriptors for a declared API surface
//!
//! These are populated incrementally by the loader and consumed by the
//! checker; they never outlive a single class comparison.

pub mod description;

pub use description::{
    ClassDescription, ClassKind, ConstructorDescription, FieldDescription, MethodDescription,
    scrub_jdiff_type,
};
