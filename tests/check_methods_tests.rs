// Method compliance tests: matching, varargs, injected modifier bits
use sigcheck::consts::*;
use sigcheck::report::{CollectingObserver, Failure, FailureType};
use sigcheck::runtime::{JavaType, RuntimeClass, RuntimeMethod, RuntimeModel};
use sigcheck::Config;

fn run_check(xml: &str, runtime: &RuntimeModel) -> Vec<Failure> {
    let mut observer = CollectingObserver::new();
    sigcheck::check(xml, runtime, &Config::new(), &mut observer).expect("expected parse ok");
    observer.failures
}

fn void() -> JavaType {
    JavaType::class("void")
}

#[test]
fn exact_method_match_is_clean() {
    let xml = r#"
<api>
 <package name="pkg">
  <class name="Foo" visibility="public">
   <method name="m" return="int" final="true" visibility="public">
    <parameter type="java.lang.String"/>
   </method>
  </class>
 </package>
</api>
"#;
    let mut model = RuntimeModel::new();
    model.add_class(
        RuntimeClass::new("pkg.Foo", ACC_PUBLIC).with_method(
            RuntimeMethod::new("m", ACC_PUBLIC | ACC_FINAL, JavaType::class("int"))
                .with_param(JavaType::class("java.lang.String")),
        ),
    );
    assert!(run_check(xml, &model).is_empty());
}

#[test]
fn missing_method_message_lists_parameters() {
    let xml = r#"
<api>
 <package name="pkg">
  <class name="Foo" visibility="public">
   <method name="m" return="void" visibility="public">
    <parameter type="int"/>
    <parameter type="long"/>
   </method>
  </class>
 </package>
</api>
"#;
    let mut model = RuntimeModel::new();
    model.add_class(RuntimeClass::new("pkg.Foo", ACC_PUBLIC));
    let failures = run_check(xml, &model);
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].failure_type, FailureType::MissingMethod);
    assert_eq!(failures[0].description, "pkg.Foo#m(int, long)");
}

#[test]
fn declared_varargs_matches_reflected_array() {
    let xml = r#"
<api>
 <package name="pkg">
  <class name="Foo" visibility="public">
   <method name="m" return="void" visibility="public">
    <parameter type="int..."/>
   </method>
  </class>
 </package>
</api>
"#;
    // reflection reports int[] plus the VARARGS bit
    let mut model = RuntimeModel::new();
    model.add_class(
        RuntimeClass::new("pkg.Foo", ACC_PUBLIC).with_method(
            RuntimeMethod::new("m", ACC_PUBLIC | METHOD_MODIFIER_VAR_ARGS, void())
                .with_param(JavaType::array(JavaType::class("int"))),
        ),
    );
    assert!(run_check(xml, &model).is_empty());
}

#[test]
fn wrong_return_type_is_missing_not_mismatch() {
    let xml = r#"
<api>
 <package name="pkg">
  <class name="Foo" visibility="public">
   <method name="m" return="int" visibility="public"/>
  </class>
 </package>
</api>
"#;
    let mut model = RuntimeModel::new();
    model.add_class(
        RuntimeClass::new("pkg.Foo", ACC_PUBLIC)
            .with_method(RuntimeMethod::new("m", ACC_PUBLIC, JavaType::class("long"))),
    );
    let failures = run_check(xml, &model);
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].failure_type, FailureType::MissingMethod);
}

#[test]
fn interface_methods_get_abstract_injected() {
    // JDiff omits abstract on interface methods; the live one carries it
    let xml = r#"
<api>
 <package name="pkg">
  <interface name="Runner" abstract="true" visibility="public">
   <method name="run" return="void" visibility="public"/>
  </interface>
 </package>
</api>
"#;
    let mut model = RuntimeModel::new();
    model.add_class(
        RuntimeClass::new("pkg.Runner", ACC_PUBLIC | ACC_ABSTRACT | ACC_INTERFACE)
            .with_method(RuntimeMethod::new("run", ACC_PUBLIC | ACC_ABSTRACT, void())),
    );
    assert!(run_check(xml, &model).is_empty());
}

#[test]
fn bridge_and_synthetic_bits_are_injected() {
    let xml = r#"
<api>
 <package name="pkg">
  <class name="Foo" visibility="public">
   <method name="compareTo" return="int" visibility="public">
    <parameter type="java.lang.Object"/>
   </method>
  </class>
 </package>
</api>
"#;
    let mut model = RuntimeModel::new();
    model.add_class(
        RuntimeClass::new("pkg.Foo", ACC_PUBLIC).with_method(
            RuntimeMethod::new(
                "compareTo",
                ACC_PUBLIC | METHOD_MODIFIER_BRIDGE | METHOD_MODIFIER_SYNTHETIC,
                JavaType::class("int"),
            )
            .with_param(JavaType::class("java.lang.Object")),
        ),
    );
    assert!(run_check(xml, &model).is_empty());
}

#[test]
fn enum_values_never_reports_modifier_mismatch() {
    let xml = r#"
<api>
 <package name="pkg">
  <class name="Color" extends="java.lang.Enum" final="true" visibility="public">
   <method name="values" return="pkg.Color[]" static="true" visibility="public"/>
  </class>
 </package>
</api>
"#;
    // live values() carries extra modifiers the description cannot know
    let mut model = RuntimeModel::new();
    model.add_class(
        RuntimeClass::new("pkg.Color", ACC_PUBLIC | ACC_FINAL | CLASS_MODIFIER_ENUM)
            .with_superclass("java.lang.Enum")
            .with_method(RuntimeMethod::new(
                "values",
                ACC_PUBLIC | ACC_STATIC | ACC_FINAL | ACC_NATIVE,
                JavaType::array(JavaType::class("pkg.Color")),
            )),
    );
    assert!(run_check(xml, &model).is_empty());
}

#[test]
fn modifier_mismatch_on_regular_method() {
    let xml = r#"
<api>
 <package name="pkg">
  <class name="Foo" visibility="public">
   <method name="m" return="void" visibility="public"/>
  </class>
 </package>
</api>
"#;
    let mut model = RuntimeModel::new();
    model.add_class(
        RuntimeClass::new("pkg.Foo", ACC_PUBLIC)
            .with_method(RuntimeMethod::new("m", ACC_PUBLIC | ACC_FINAL, void())),
    );
    let failures = run_check(xml, &model);
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].failure_type, FailureType::MismatchMethod);
    assert_eq!(failures[0].description, "pkg.Foo#m()");
}

#[test]
fn generic_parameter_matches_by_rendered_string() {
    let xml = r#"
<api>
 <package name="pkg">
  <class name="Foo" visibility="public">
   <method name="m" return="void" visibility="public">
    <parameter type="java.util.List&lt;? extends java.lang.Object&gt;"/>
   </method>
  </class>
 </package>
</api>
"#;
    // the declared form scrubs to List<?> and the live wildcard renders
    // to the same string
    let mut model = RuntimeModel::new();
    model.add_class(
        RuntimeClass::new("pkg.Foo", ACC_PUBLIC).with_method(
            RuntimeMethod::new("m", ACC_PUBLIC, void()).with_param(JavaType::parameterized(
                JavaType::class("java.util.List"),
                vec![JavaType::extends_wildcard(JavaType::class(
                    "java.lang.Object",
                ))],
            )),
        ),
    );
    assert!(run_check(xml, &model).is_empty());
}

#[test]
fn unrenderable_live_type_is_reported_as_caught_exception() {
    let xml = r#"
<api>
 <package name="pkg">
  <class name="Foo" visibility="public">
   <method name="m" return="void" visibility="public">
    <parameter type="java.lang.String"/>
   </method>
  </class>
 </package>
</api>
"#;
    let malformed = JavaType::Wildcard {
        upper: Vec::new(),
        lower: Vec::new(),
    };
    let mut model = RuntimeModel::new();
    model.add_class(
        RuntimeClass::new("pkg.Foo", ACC_PUBLIC)
            .with_method(RuntimeMethod::new("m", ACC_PUBLIC, void()).with_param(malformed)),
    );
    let failures = run_check(xml, &model);
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].failure_type, FailureType::CaughtException);
    assert_eq!(failures[0].description, "pkg.Foo#m(java.lang.String)");
}
