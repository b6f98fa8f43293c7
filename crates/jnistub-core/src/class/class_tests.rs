#![allow(non_snake_case)]

use super::*;
use crate::jni_type::JniType;

fn test_class() -> RawClass {
    RawClass::new("jnistub.test.TestJniClass")
        .with_method(RawMethod::new("getInt", "int"))
        .with_method(
            RawMethod::new("doNothing", "void")
                .with_param("name", "java.lang.String")
                .with_param("x", "int")
                .as_static(),
        )
        .with_method(RawMethod::new("toString", "java.lang.String").not_native())
}

#[test]
fn ClassName___delimited_with___replaces_dots() {
    let name = ClassName::new("jnistub.test.TestJniClass");

    assert_eq!(name.delimited_with("_"), "jnistub_test_TestJniClass");
    assert_eq!(name.simple(), "TestJniClass");
}

#[test]
fn ClassName___mangled___escapes_underscores() {
    let name = ClassName::new("pkg.With_Underscore");

    assert_eq!(name.mangled(), "pkg_With_1Underscore");
}

#[test]
fn ClassDescriptor___build___keeps_only_native_methods_sorted() {
    let class = ClassDescriptor::build(&test_class()).unwrap();

    let names: Vec<&str> = class.methods().iter().map(|m| m.name()).collect();

    assert_eq!(names, vec!["doNothing", "getInt"]);
    assert_eq!(class.simple_name(), "TestJniClass");
    assert_eq!(class.qualified_name(), "jnistub.test.TestJniClass");
}

#[test]
fn ClassDescriptor___build___is_deterministic() {
    let raw = test_class();

    let first = ClassDescriptor::build(&raw).unwrap();
    let second = ClassDescriptor::build(&raw).unwrap();

    assert_eq!(first, second);
}

#[test]
fn ClassDescriptor___build___ties_keep_declaration_order() {
    let raw = RawClass::new("a.Over")
        .with_method(RawMethod::new("run", "void").with_param("a", "long"))
        .with_method(RawMethod::new("alpha", "void"))
        .with_method(RawMethod::new("run", "void").with_param("b", "int"));

    let class = ClassDescriptor::build(&raw).unwrap();

    let order: Vec<(&str, usize)> = class
        .methods()
        .iter()
        .map(|m| (m.name(), m.declaration_index()))
        .collect();
    assert_eq!(order, vec![("alpha", 1), ("run", 0), ("run", 2)]);
}

#[test]
fn ClassDescriptor___build___marks_shared_names_overloaded() {
    let raw = RawClass::new("pkg.With_Underscore")
        .with_method(RawMethod::new("with_underscore", "void").with_param("x", "int"))
        .with_method(
            RawMethod::new("with_underscore", "void")
                .with_param("x", "int")
                .with_param("names", "java.lang.String[]"),
        )
        .with_method(RawMethod::new("single", "int"));

    let class = ClassDescriptor::build(&raw).unwrap();

    let symbols: Vec<&str> = class.methods().iter().map(|m| m.jni_symbol()).collect();
    assert_eq!(
        symbols,
        vec![
            "Java_pkg_With_1Underscore_single",
            "Java_pkg_With_1Underscore_with_1underscore__I",
            "Java_pkg_With_1Underscore_with_1underscore__I_3Ljava_lang_String_2",
        ]
    );
}

#[test]
fn ClassDescriptor___build___non_native_overload_does_not_count() {
    let raw = RawClass::new("a.b.Foo")
        .with_method(RawMethod::new("getInt", "int"))
        .with_method(RawMethod::new("getInt", "int").with_param("x", "int").not_native());

    let class = ClassDescriptor::build(&raw).unwrap();

    assert_eq!(class.methods()[0].jni_symbol(), "Java_a_b_Foo_getInt");
    assert!(!class.methods()[0].is_overloaded());
}

#[test]
fn ClassDescriptor___build___empty_class_is_valid() {
    let class = ClassDescriptor::build(&RawClass::new("a.Empty")).unwrap();

    assert!(class.methods().is_empty());
}

#[test]
fn ClassDescriptor___build___resolves_parameter_types() {
    let class = ClassDescriptor::build(&test_class()).unwrap();

    let do_nothing = &class.methods()[0];
    let types: Vec<JniType> = do_nothing
        .original_params()
        .iter()
        .map(|p| p.ty.jni_type())
        .collect();

    assert_eq!(types, vec![JniType::String, JniType::Int]);
}

#[test]
fn ClassDescriptor___build___unnamed_params_get_placeholders() {
    let raw = RawClass::new("a.Foo").with_method(
        RawMethod::new("run", "void")
            .with_param("", "int")
            .with_param("", "long"),
    );

    let class = ClassDescriptor::build(&raw).unwrap();

    let names: Vec<&str> = class.methods()[0]
        .original_params()
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(names, vec!["arg0", "arg1"]);
}

#[test]
fn ClassDescriptor___unresolvable_param___fails_with_class_and_method() {
    let raw = RawClass::new("a.Foo")
        .with_method(RawMethod::new("ok", "void"))
        .with_method(RawMethod::new("broken", "void").with_param("x", "in t"));

    let err = ClassDescriptor::build(&raw).unwrap_err();

    match err {
        StubError::Resolution { class, method, .. } => {
            assert_eq!(class, "a.Foo");
            assert_eq!(method.as_deref(), Some("broken"));
        }
        other => panic!("expected resolution error, got {other:?}"),
    }
}

#[test]
fn ClassDescriptor___unresolvable_return___fails() {
    let raw = RawClass::new("a.Foo").with_method(RawMethod::new("broken", "void[]"));

    assert!(matches!(
        ClassDescriptor::build(&raw),
        Err(StubError::Resolution { .. })
    ));
}

#[test]
fn ClassDescriptor___invalid_class_name___fails_without_method() {
    let err = ClassDescriptor::build(&RawClass::new("int")).unwrap_err();

    assert!(matches!(err, StubError::Resolution { method: None, .. }));
}

#[test]
fn ClassDescriptor___invalid_method_name___fails() {
    let raw = RawClass::new("a.Foo").with_method(RawMethod::new("not-valid", "void"));

    assert!(matches!(
        ClassDescriptor::build(&raw),
        Err(StubError::Resolution { method: Some(_), .. })
    ));
}
