//! Generic type tree and its JDiff-compatible string rendering
//!
//! The declared API arrives as strings, so comparison is string equality.
//! That only works if this renderer produces exactly what the JDiff tool
//! produces for the same type; the rendering rules here are deliberately
//! byte-for-byte aligned with that format.

use crate::check::CheckError;
use crate::consts::JAVA_LANG_OBJECT;

/// A generic Java type as reflection models it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JavaType {
    /// A raw class or primitive, by canonical name.
    Class(String),
    /// A type variable, by name.
    Variable(String),
    /// A parameterized type: raw type plus actual type arguments.
    Parameterized {
        raw: Box<JavaType>,
        args: Vec<JavaType>,
    },
    /// An array of some component type.
    Array(Box<JavaType>),
    /// A wildcard with upper and lower bounds.
    Wildcard {
        upper: Vec<JavaType>,
        lower: Vec<JavaType>,
    },
}

impl JavaType {
    pub fn class(name: &str) -> Self {
        JavaType::Class(name.to_string())
    }

    pub fn variable(name: &str) -> Self {
        JavaType::Variable(name.to_string())
    }

    pub fn parameterized(raw: JavaType, args: Vec<JavaType>) -> Self {
        JavaType::Parameterized {
            raw: Box::new(raw),
            args,
        }
    }

    pub fn array(component: JavaType) -> Self {
        JavaType::Array(Box::new(component))
    }

    /// `? extends bound`
    pub fn extends_wildcard(bound: JavaType) -> Self {
        JavaType::Wildcard {
            upper: vec![bound],
            lower: Vec::new(),
        }
    }

    /// `? super bound` (upper bound is Object, as reflection reports it)
    pub fn super_wildcard(bound: JavaType) -> Self {
        JavaType::Wildcard {
            upper: vec![JavaType::class(JAVA_LANG_OBJECT)],
            lower: vec![bound],
        }
    }

    /// Render to the JDiff string form.
    ///
    /// `? extends java.lang.Object` collapses to `?`; in lower-bounded
    /// wildcards every `java.lang.Object` is likewise replaced by `?`.
    pub fn render(&self) -> Result<String, CheckError> {
        match self {
            JavaType::Class(name) => Ok(name.clone()),
            JavaType::Variable(name) => Ok(name.clone()),
            JavaType::Parameterized { raw, args } => {
                let mut out = raw.render()?;
                out.push('<');
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    out.push_str(&arg.render()?);
                }
                out.push('>');
                Ok(out)
            }
            JavaType::Array(component) => Ok(format!("{}[]", component.render()?)),
            JavaType::Wildcard { upper, lower } => {
                if upper.is_empty() && lower.is_empty() {
                    return Err(CheckError::UnrenderableType(
                        "wildcard with no bounds".to_string(),
                    ));
                }
                if lower.is_empty() {
                    let name = format!("? extends {}", render_bounds(upper)?);
                    if name == format!("? extends {}", JAVA_LANG_OBJECT) {
                        Ok("?".to_string())
                    } else {
                        Ok(name)
                    }
                } else {
                    let name = format!("{} super {}", render_bounds(upper)?, render_bounds(lower)?);
                    Ok(name.replace(JAVA_LANG_OBJECT, "?"))
                }
            }
        }
    }
}

/// Multiple wildcard bounds join with ` & `.
fn render_bounds(bounds: &[JavaType]) -> Result<String, CheckError> {
    let mut out = String::new();
    for (i, bound) in bounds.iter().enumerate() {
        if i > 0 {
            out.push_str(" & ");
        }
        out.push_str(&bound.render()?);
    }
    Ok(out)
}
