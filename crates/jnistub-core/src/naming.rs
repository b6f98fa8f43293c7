//! Naming convention utilities for code generation.
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `camelCase` | [`to_snake_case`] | `camel_case` |
//! | `a.b.Outer$Inner` | [`simple_name`] | `Inner` |

/// Convert camelCase to snake_case.
///
/// Every uppercase letter after the first character becomes `_` plus its
/// lowercase form; acronyms are not grouped.
///
/// # Examples
///
/// ```
/// use jnistub_core::naming::to_snake_case;
///
/// assert_eq!(to_snake_case("getInt"), "get_int");
/// assert_eq!(to_snake_case("doNothing"), "do_nothing");
/// assert_eq!(to_snake_case("with_underscore"), "with_underscore");
/// ```
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);

    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.extend(c.to_lowercase());
        } else {
            result.push(c);
        }
    }

    result
}

/// The simple name of a class given its binary name.
///
/// # Examples
///
/// ```
/// use jnistub_core::naming::simple_name;
///
/// assert_eq!(simple_name("com.example.Foo"), "Foo");
/// assert_eq!(simple_name("com.example.Outer$Inner"), "Inner");
/// assert_eq!(simple_name("Foo"), "Foo");
/// ```
pub fn simple_name(qualified: &str) -> &str {
    let tail = qualified.rsplit('.').next().unwrap_or(qualified);
    tail.rsplit('$').next().unwrap_or(tail)
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn to_snake_case___converts_camel_case() {
        assert_eq!(to_snake_case("getInt"), "get_int");
        assert_eq!(to_snake_case("doNothing"), "do_nothing");
        assert_eq!(to_snake_case("fooBarBaz"), "foo_bar_baz");
    }

    #[test]
    fn to_snake_case___handles_simple_words() {
        assert_eq!(to_snake_case("simple"), "simple");
        assert_eq!(to_snake_case(""), "");
    }

    #[test]
    fn to_snake_case___leading_capital___has_no_leading_underscore() {
        assert_eq!(to_snake_case("Run"), "run");
        assert_eq!(to_snake_case("GetInt"), "get_int");
    }

    #[test]
    fn to_snake_case___splits_every_capital() {
        assert_eq!(to_snake_case("getURL"), "get_u_r_l");
    }

    #[test]
    fn to_snake_case___keeps_existing_underscores() {
        assert_eq!(to_snake_case("with_underscore"), "with_underscore");
        assert_eq!(to_snake_case("with_Under"), "with__under");
    }

    #[test]
    fn simple_name___strips_package_and_outer_class() {
        assert_eq!(simple_name("a.b.C"), "C");
        assert_eq!(simple_name("a.b.Outer$Inner"), "Inner");
        assert_eq!(simple_name("Plain"), "Plain");
    }
}
