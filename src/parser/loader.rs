//! Streaming JDiff XML loader
//!
//! Pull-parses the description with one reused [`ClassDescription`]: each
//! `<class>`/`<interface>` start tag resets it, the matching end tag hands
//! it to the sink, and the member lists are cleared before the next class.

use std::collections::HashSet;
use std::io::Read;

use once_cell::sync::Lazy;
use xml::attribute::OwnedAttribute;
use xml::reader::{EventReader, XmlEvent};

use crate::check;
use crate::config::Config;
use crate::consts::*;
use crate::model::{
    ClassDescription, ClassKind, ConstructorDescription, FieldDescription, MethodDescription,
};
use crate::parser::ParseError;
use crate::report::ResultObserver;
use crate::runtime::RuntimeApi;

const TAG_ROOT: &str = "api";
const TAG_PACKAGE: &str = "package";
const TAG_CLASS: &str = "class";
const TAG_INTERFACE: &str = "interface";
const TAG_IMPLEMENTS: &str = "implements";
const TAG_CONSTRUCTOR: &str = "constructor";
const TAG_METHOD: &str = "method";
const TAG_PARAM: &str = "parameter";
const TAG_EXCEPTION: &str = "exception";
const TAG_FIELD: &str = "field";

const ATTRIBUTE_NAME: &str = "name";
const ATTRIBUTE_EXTENDS: &str = "extends";
const ATTRIBUTE_TYPE: &str = "type";
const ATTRIBUTE_RETURN: &str = "return";

const MODIFIER_VISIBILITY: &str = "visibility";

/// Tags the loader acts on; anything else in the document is skipped.
static KEY_TAG_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        TAG_PACKAGE,
        TAG_CLASS,
        TAG_INTERFACE,
        TAG_IMPLEMENTS,
        TAG_CONSTRUCTOR,
        TAG_METHOD,
        TAG_PARAM,
        TAG_EXCEPTION,
        TAG_FIELD,
    ])
});

/// Receives each completed class description.
pub(crate) trait ClassSink {
    fn class_complete(&mut self, desc: &ClassDescription);
}

/// Sink that checks every class against a runtime as it completes.
pub(crate) struct CheckingSink<'a> {
    pub runtime: &'a dyn RuntimeApi,
    pub config: &'a Config,
    pub observer: &'a mut dyn ResultObserver,
}

impl ClassSink for CheckingSink<'_> {
    fn class_complete(&mut self, desc: &ClassDescription) {
        check::check_signature_compliance(desc, self.runtime, self.config, self.observer);
    }
}

/// Sink that materializes every class description.
#[derive(Default)]
pub(crate) struct CollectingSink {
    pub classes: Vec<ClassDescription>,
}

impl ClassSink for CollectingSink {
    fn class_complete(&mut self, desc: &ClassDescription) {
        self.classes.push(desc.clone());
    }
}

/// Which member the next `<parameter>`/`<exception>` tag belongs to.
enum CurrentMember {
    None,
    Method,
    Constructor,
}

pub(crate) struct ApiLoader<R: Read> {
    reader: EventReader<R>,
}

impl<R: Read> ApiLoader<R> {
    pub fn new(source: R) -> Self {
        Self {
            reader: EventReader::new(source),
        }
    }

    /// Drive the document through the sink.
    pub fn run(mut self, sink: &mut dyn ClassSink) -> Result<(), ParseError> {
        self.begin_document()?;

        let mut current_package = String::new();
        // single description reused across the whole document
        let mut desc = ClassDescription::new("", "", ClassKind::Class);
        let mut in_class = false;
        let mut current_member = CurrentMember::None;

        loop {
            match self.reader.next()? {
                XmlEvent::EndDocument => break,
                XmlEvent::EndElement { name } => match name.local_name.as_str() {
                    TAG_CLASS | TAG_INTERFACE => {
                        if in_class {
                            sink.class_complete(&desc);
                            desc.clear_members();
                            in_class = false;
                            current_member = CurrentMember::None;
                        }
                    }
                    TAG_PACKAGE => current_package.clear(),
                    _ => {}
                },
                XmlEvent::StartElement {
                    name, attributes, ..
                } => {
                    let tag = name.local_name.as_str();
                    if !KEY_TAG_SET.contains(tag) {
                        continue;
                    }
                    match tag {
                        TAG_PACKAGE => {
                            current_package = required_attr(&attributes, TAG_PACKAGE, ATTRIBUTE_NAME)?;
                            log::debug!("saw package: {}", current_package);
                        }
                        TAG_CLASS => {
                            load_class_info(
                                &mut desc,
                                &attributes,
                                ClassKind::Class,
                                &current_package,
                            )?;
                            in_class = true;
                            current_member = CurrentMember::None;
                        }
                        TAG_INTERFACE => {
                            load_class_info(
                                &mut desc,
                                &attributes,
                                ClassKind::Interface,
                                &current_package,
                            )?;
                            in_class = true;
                            current_member = CurrentMember::None;
                        }
                        TAG_IMPLEMENTS => {
                            require_class(in_class, TAG_IMPLEMENTS)?;
                            let iface = required_attr(&attributes, TAG_IMPLEMENTS, ATTRIBUTE_NAME)?;
                            desc.add_impl_interface(&iface);
                        }
                        TAG_CONSTRUCTOR => {
                            require_class(in_class, TAG_CONSTRUCTOR)?;
                            let modifiers = parse_modifiers(&attributes)?;
                            let short_name = desc.short_name.clone();
                            desc.add_constructor(ConstructorDescription::new(&short_name, modifiers));
                            current_member = CurrentMember::Constructor;
                        }
                        TAG_METHOD => {
                            require_class(in_class, TAG_METHOD)?;
                            desc.add_method(load_method_info(&attributes)?);
                            current_member = CurrentMember::Method;
                        }
                        TAG_PARAM => {
                            let param = required_attr(&attributes, TAG_PARAM, ATTRIBUTE_TYPE)?;
                            match current_member {
                                CurrentMember::Method => match desc.methods.last_mut() {
                                    Some(method) => method.add_param(&param),
                                    None => return Err(misplaced(TAG_PARAM)),
                                },
                                CurrentMember::Constructor => match desc.constructors.last_mut() {
                                    Some(ctor) => ctor.add_param(&param),
                                    None => return Err(misplaced(TAG_PARAM)),
                                },
                                CurrentMember::None => return Err(misplaced(TAG_PARAM)),
                            }
                        }
                        TAG_EXCEPTION => {
                            let exception =
                                required_attr(&attributes, TAG_EXCEPTION, ATTRIBUTE_TYPE)?;
                            match current_member {
                                CurrentMember::Method => match desc.methods.last_mut() {
                                    Some(method) => method.add_exception(&exception),
                                    None => return Err(misplaced(TAG_EXCEPTION)),
                                },
                                CurrentMember::Constructor => match desc.constructors.last_mut() {
                                    Some(ctor) => ctor.add_exception(&exception),
                                    None => return Err(misplaced(TAG_EXCEPTION)),
                                },
                                CurrentMember::None => return Err(misplaced(TAG_EXCEPTION)),
                            }
                        }
                        TAG_FIELD => {
                            require_class(in_class, TAG_FIELD)?;
                            desc.add_field(load_field_info(&attributes)?);
                        }
                        // key-tag membership and this dispatch must stay in
                        // sync; reaching here means the format moved under us
                        other => return Err(ParseError::UnknownTag(other.to_string())),
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Advance to the first element and require it to be the `<api>` root.
    fn begin_document(&mut self) -> Result<(), ParseError> {
        loop {
            match self.reader.next()? {
                XmlEvent::StartElement { name, .. } => {
                    if name.local_name == TAG_ROOT {
                        return Ok(());
                    }
                    return Err(ParseError::MissingDocumentRoot {
                        found: name.local_name,
                    });
                }
                XmlEvent::EndDocument => return Err(ParseError::EmptyDocument),
                _ => {}
            }
        }
    }
}

fn misplaced(tag: &str) -> ParseError {
    ParseError::MisplacedTag {
        tag: tag.to_string(),
        context: "no enclosing class, method or constructor",
    }
}

fn require_class(in_class: bool, tag: &str) -> Result<(), ParseError> {
    if in_class {
        Ok(())
    } else {
        Err(ParseError::MisplacedTag {
            tag: tag.to_string(),
            context: "outside <class>/<interface>",
        })
    }
}

fn attr_value<'a>(attributes: &'a [OwnedAttribute], name: &str) -> Option<&'a str> {
    attributes
        .iter()
        .find(|attr| attr.name.local_name == name)
        .map(|attr| attr.value.as_str())
}

fn required_attr(
    attributes: &[OwnedAttribute],
    tag: &'static str,
    attribute: &'static str,
) -> Result<String, ParseError> {
    attr_value(attributes, attribute)
        .map(str::to_string)
        .ok_or(ParseError::MissingAttribute { tag, attribute })
}

fn load_class_info(
    desc: &mut ClassDescription,
    attributes: &[OwnedAttribute],
    kind: ClassKind,
    package: &str,
) -> Result<(), ParseError> {
    let name = required_attr(
        attributes,
        if kind == ClassKind::Interface {
            TAG_INTERFACE
        } else {
            TAG_CLASS
        },
        ATTRIBUTE_NAME,
    )?;
    desc.reset(package, &name, kind);
    desc.modifiers = parse_modifiers(attributes)?;
    desc.extends = attr_value(attributes, ATTRIBUTE_EXTENDS).map(str::to_string);
    Ok(())
}

fn load_method_info(attributes: &[OwnedAttribute]) -> Result<MethodDescription, ParseError> {
    let name = required_attr(attributes, TAG_METHOD, ATTRIBUTE_NAME)?;
    let return_type = attr_value(attributes, ATTRIBUTE_RETURN);
    let modifiers = parse_modifiers(attributes)?;
    Ok(MethodDescription::new(&name, modifiers, return_type))
}

fn load_field_info(attributes: &[OwnedAttribute]) -> Result<FieldDescription, ParseError> {
    let name = required_attr(attributes, TAG_FIELD, ATTRIBUTE_NAME)?;
    let field_type = required_attr(attributes, TAG_FIELD, ATTRIBUTE_TYPE)?;
    let modifiers = parse_modifiers(attributes)?;
    Ok(FieldDescription::new(&name, &field_type, modifiers))
}

/// Fold all modifier attributes on an element into reflection bits.
fn parse_modifiers(attributes: &[OwnedAttribute]) -> Result<u32, ParseError> {
    let mut modifiers = 0;
    for attr in attributes {
        modifiers |= modifier_to_reflected_bit(&attr.name.local_name, &attr.value)?;
    }
    Ok(modifiers)
}

fn modifier_to_reflected_bit(key: &str, value: &str) -> Result<u32, ParseError> {
    let boolean_bit = |bit| if value == "true" { bit } else { 0 };
    match key {
        "abstract" => Ok(boolean_bit(ACC_ABSTRACT)),
        "final" => Ok(boolean_bit(ACC_FINAL)),
        "native" => Ok(boolean_bit(ACC_NATIVE)),
        "static" => Ok(boolean_bit(ACC_STATIC)),
        "synchronized" => Ok(boolean_bit(ACC_SYNCHRONIZED)),
        "transient" => Ok(boolean_bit(ACC_TRANSIENT)),
        "volatile" => Ok(boolean_bit(ACC_VOLATILE)),
        MODIFIER_VISIBILITY => match value {
            "public" => Ok(ACC_PUBLIC),
            "protected" => Ok(ACC_PROTECTED),
            // empty visibility is package-private: no bits
            "" => Ok(0),
            "private" => Err(ParseError::PrivateVisibility),
            other => Err(ParseError::UnknownVisibility(other.to_string())),
        },
        // names, extends/return types and anything else carry no bits
        _ => Ok(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_mapping() {
        assert_eq!(
            modifier_to_reflected_bit("visibility", "public").unwrap(),
            ACC_PUBLIC
        );
        assert_eq!(
            modifier_to_reflected_bit("visibility", "protected").unwrap(),
            ACC_PROTECTED
        );
        assert_eq!(modifier_to_reflected_bit("visibility", "").unwrap(), 0);
        assert!(modifier_to_reflected_bit("visibility", "private").is_err());
        assert!(modifier_to_reflected_bit("visibility", "bogus").is_err());
    }

    #[test]
    fn test_boolean_modifier_mapping() {
        assert_eq!(modifier_to_reflected_bit("final", "true").unwrap(), ACC_FINAL);
        assert_eq!(modifier_to_reflected_bit("final", "false").unwrap(), 0);
        assert_eq!(
            modifier_to_reflected_bit("static", "true").unwrap(),
            ACC_STATIC
        );
        // non-modifier attributes contribute nothing
        assert_eq!(modifier_to_reflected_bit("name", "Foo").unwrap(), 0);
    }
}
