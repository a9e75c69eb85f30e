// Loader tests for the JDiff XML format
use sigcheck::load_api;
use sigcheck::model::ClassKind;

fn load_ok(xml: &str) -> Vec<sigcheck::model::ClassDescription> {
    load_api(xml.as_bytes()).expect("expected parse ok")
}

fn load_err(xml: &str) -> String {
    match load_api(xml.as_bytes()) {
        Ok(_) => panic!("expected parse error"),
        Err(e) => e.to_string(),
    }
}

#[test]
fn root_must_be_api() {
    let msg = load_err(r#"<apis><package name="pkg"/></apis>"#);
    assert!(msg.contains("document root"));
}

#[test]
fn empty_document_is_an_error() {
    let msg = load_err("");
    assert!(msg.contains("XML error") || msg.contains("root"));
}

#[test]
fn unknown_tags_are_skipped() {
    let classes = load_ok(
        r#"
<api>
 <comment>not part of the format</comment>
 <package name="pkg">
  <class name="Foo" visibility="public">
   <doc>ignored</doc>
   <field name="x" type="int" final="true" visibility="public"/>
  </class>
 </package>
</api>
"#,
    );
    assert_eq!(classes.len(), 1);
    assert_eq!(classes[0].fields.len(), 1);
}

#[test]
fn private_visibility_is_fatal() {
    let msg = load_err(
        r#"
<api>
 <package name="pkg">
  <class name="Foo" visibility="private"/>
 </package>
</api>
"#,
    );
    assert!(msg.contains("Private visibility"));
}

#[test]
fn unknown_visibility_is_fatal() {
    let msg = load_err(
        r#"
<api>
 <package name="pkg">
  <class name="Foo" visibility="friendly"/>
 </package>
</api>
"#,
    );
    assert!(msg.contains("Unknown visibility"));
}

#[test]
fn empty_visibility_is_package_private() {
    let classes = load_ok(
        r#"
<api>
 <package name="pkg">
  <class name="Foo" visibility=""/>
 </package>
</api>
"#,
    );
    assert_eq!(classes[0].modifiers, 0);
}

#[test]
fn parameter_outside_member_is_fatal() {
    let msg = load_err(
        r#"
<api>
 <package name="pkg">
  <class name="Foo" visibility="public">
   <parameter type="int"/>
  </class>
 </package>
</api>
"#,
    );
    assert!(msg.contains("not valid here"));
}

#[test]
fn field_outside_class_is_fatal() {
    let msg = load_err(
        r#"
<api>
 <package name="pkg">
  <field name="x" type="int" visibility="public"/>
 </package>
</api>
"#,
    );
    assert!(msg.contains("not valid here"));
}

#[test]
fn package_name_scopes_classes() {
    let classes = load_ok(
        r#"
<api>
 <package name="a">
  <class name="Foo" visibility="public"/>
 </package>
 <package name="b">
  <interface name="Bar" visibility="public"/>
 </package>
</api>
"#,
    );
    assert_eq!(classes.len(), 2);
    assert_eq!(classes[0].absolute_name(), "a.Foo");
    assert_eq!(classes[1].absolute_name(), "b.Bar");
    assert_eq!(classes[1].kind, ClassKind::Interface);
}

#[test]
fn constructor_and_method_parameters_are_routed() {
    let classes = load_ok(
        r#"
<api>
 <package name="pkg">
  <class name="Foo" visibility="public">
   <constructor visibility="public">
    <parameter type="int"/>
    <parameter type="java.lang.String"/>
   </constructor>
   <method name="m" return="void" visibility="public">
    <parameter type="long"/>
    <exception type="java.io.IOException"/>
   </method>
  </class>
 </package>
</api>
"#,
    );
    let foo = &classes[0];
    assert_eq!(foo.constructors.len(), 1);
    assert_eq!(foo.constructors[0].method.name, "Foo");
    assert_eq!(
        foo.constructors[0].method.parameters,
        vec!["int".to_string(), "java.lang.String".to_string()]
    );
    assert_eq!(foo.methods.len(), 1);
    assert_eq!(foo.methods[0].parameters, vec!["long".to_string()]);
    assert_eq!(
        foo.methods[0].exceptions,
        vec!["java.io.IOException".to_string()]
    );
}

#[test]
fn declared_wildcard_types_are_scrubbed() {
    let classes = load_ok(
        r#"
<api>
 <package name="pkg">
  <class name="Foo" visibility="public">
   <method name="m" return="java.util.List&lt;? extends java.lang.Object&gt;" visibility="public">
    <parameter type="java.util.List&lt;? extends java.lang.Object&gt;"/>
   </method>
  </class>
 </package>
</api>
"#,
    );
    let method = &classes[0].methods[0];
    assert_eq!(method.return_type, "java.util.List<?>");
    assert_eq!(method.parameters, vec!["java.util.List<?>".to_string()]);
}
