#![allow(non_snake_case)]

use super::*;

#[test]
fn StubError___resolution_with_method___names_class_and_method() {
    let err = StubError::Resolution {
        class: "a.b.Foo".into(),
        method: Some("bar".into()),
        reason: "invalid type name `in t`".into(),
    };

    let display = err.to_string();

    assert_eq!(
        display,
        "cannot resolve type in a.b.Foo.bar: invalid type name `in t`"
    );
}

#[test]
fn StubError___resolution_without_method___names_class_only() {
    let err = StubError::Resolution {
        class: "a.b.Foo".into(),
        method: None,
        reason: "bad".into(),
    };

    assert_eq!(err.to_string(), "cannot resolve type in a.b.Foo: bad");
}

#[test]
fn StubError___unsupported_type___displays_location() {
    let err = StubError::UnsupportedType {
        class: "a.Foo".into(),
        method: Some("run".into()),
        detail: "parameter `x` has type void".into(),
    };

    assert_eq!(
        err.to_string(),
        "unsupported type in a.Foo.run: parameter `x` has type void"
    );
}

#[test]
fn StubError___class_level_unsupported_type___omits_method() {
    let err = StubError::UnsupportedType {
        class: "a.Outer$Inner".into(),
        method: None,
        detail: "`$` in class name".into(),
    };

    assert_eq!(err.to_string(), "unsupported type in a.Outer$Inner: `$` in class name");
    assert_eq!(err.class_name(), Some("a.Outer$Inner"));
}

#[test]
fn StubError___io___keeps_source() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");

    let err = StubError::io("writing a_Foo/mod.rs", io_err);

    assert!(err.to_string().contains("writing a_Foo/mod.rs"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn StubError___class_name___reported_for_class_errors() {
    assert_eq!(
        StubError::ClassNotFound("x.Y".into()).class_name(),
        Some("x.Y")
    );
    assert_eq!(StubError::Config("bad".into()).class_name(), None);
}

#[test]
fn StubError___from_toml_error___converts_to_config() {
    let toml_err = toml::from_str::<toml::Value>("= broken").unwrap_err();

    let err: StubError = toml_err.into();

    assert!(matches!(err, StubError::Config(_)));
}

#[test]
fn ToolInvocationWarning___not_found___mentions_tool() {
    let warning = ToolInvocationWarning::NotFound {
        tool: "rustfmt".into(),
    };

    assert_eq!(warning.to_string(), "rustfmt isn't available in PATH, skipping");
}
