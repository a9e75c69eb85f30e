//! Loader module for JDiff API descriptions
//!
//! This module stream-parses JDiff-format XML into class descriptions,
//! either checking each class as its end tag arrives or collecting all
//! descriptions for inspection.

pub mod error;
pub mod loader;

pub use error::ParseError;

use std::io::Read;

use crate::config::Config;
use crate::error::Result;
use crate::model::ClassDescription;
use crate::report::ResultObserver;
use crate::runtime::RuntimeApi;

/// Parse an API description, checking each class against `runtime` as its
/// closing tag is reached.
pub fn check_stream<R: Read>(
    source: R,
    runtime: &dyn RuntimeApi,
    config: &Config,
    observer: &mut dyn ResultObserver,
) -> Result<()> {
    loader::ApiLoader::new(source).run(&mut loader::CheckingSink {
        runtime,
        config,
        observer,
    })?;
    Ok(())
}

/// Parse an API description into a list of completed class descriptions.
pub fn collect_stream<R: Read>(source: R) -> Result<Vec<ClassDescription>> {
    let mut sink = loader::CollectingSink::default();
    loader::ApiLoader::new(source).run(&mut sink)?;
    Ok(sink.classes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ClassKind;

    #[test]
    fn test_collect_simple_class() {
        let xml = r#"
<api>
 <package name="pkg">
  <class name="Foo" extends="java.lang.Object" abstract="false" static="false" final="false" visibility="public">
   <field name="x" type="int" transient="false" volatile="false" static="false" final="true" visibility="public"/>
  </class>
 </package>
</api>
"#;
        let classes = collect_stream(xml.as_bytes()).expect("Failed to parse");
        assert_eq!(classes.len(), 1);
        assert_eq!(classes[0].absolute_name(), "pkg.Foo");
        assert_eq!(classes[0].kind, ClassKind::Class);
        assert_eq!(classes[0].fields.len(), 1);
    }

    #[test]
    fn test_collect_interface_with_method() {
        let xml = r#"
<api>
 <package name="pkg">
  <interface name="Runner" abstract="true" static="false" final="false" visibility="public">
   <method name="run" return="void" abstract="false" native="false" synchronized="false" static="false" final="false" visibility="public"/>
  </interface>
 </package>
</api>
"#;
        let classes = collect_stream(xml.as_bytes()).expect("Failed to parse");
        assert_eq!(classes.len(), 1);
        assert_eq!(classes[0].kind, ClassKind::Interface);
        assert_eq!(classes[0].methods.len(), 1);
        assert_eq!(classes[0].methods[0].return_type, "void");
    }
}
