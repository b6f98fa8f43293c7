//! The native-call type vocabulary.
//!
//! How each variant is spelled in generated code is up to the backend; this
//! module only fixes the closed set.

use std::fmt;

/// JNI types as seen by a native function implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JniType {
    /// The `JNIEnv*` pseudo-parameter every native function receives first.
    JniEnv,
    Void,
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
    BooleanArray,
    ByteArray,
    CharArray,
    ShortArray,
    IntArray,
    LongArray,
    FloatArray,
    DoubleArray,
    /// Any array whose elements are not primitive scalars.
    ObjectArray,
    Class,
    String,
    Object,
}

impl JniType {
    /// Every variant, in declaration order.
    pub const ALL: [JniType; 22] = [
        JniType::JniEnv,
        JniType::Void,
        JniType::Boolean,
        JniType::Byte,
        JniType::Char,
        JniType::Short,
        JniType::Int,
        JniType::Long,
        JniType::Float,
        JniType::Double,
        JniType::BooleanArray,
        JniType::ByteArray,
        JniType::CharArray,
        JniType::ShortArray,
        JniType::IntArray,
        JniType::LongArray,
        JniType::FloatArray,
        JniType::DoubleArray,
        JniType::ObjectArray,
        JniType::Class,
        JniType::String,
        JniType::Object,
    ];

    /// Whether values of this type are passed by value rather than as a reference.
    ///
    /// `Void` counts as scalar so that it shares the zero-value default.
    pub fn is_scalar(self) -> bool {
        matches!(
            self,
            JniType::Void
                | JniType::Boolean
                | JniType::Byte
                | JniType::Char
                | JniType::Short
                | JniType::Int
                | JniType::Long
                | JniType::Float
                | JniType::Double
        )
    }

    /// Whether values of this type are local references (`jobject` and friends).
    pub fn is_reference(self) -> bool {
        !self.is_scalar() && self != JniType::JniEnv
    }
}

impl fmt::Display for JniType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JniType::JniEnv => "JNIEnv",
            JniType::Void => "void",
            JniType::Boolean => "jboolean",
            JniType::Byte => "jbyte",
            JniType::Char => "jchar",
            JniType::Short => "jshort",
            JniType::Int => "jint",
            JniType::Long => "jlong",
            JniType::Float => "jfloat",
            JniType::Double => "jdouble",
            JniType::BooleanArray => "jbooleanArray",
            JniType::ByteArray => "jbyteArray",
            JniType::CharArray => "jcharArray",
            JniType::ShortArray => "jshortArray",
            JniType::IntArray => "jintArray",
            JniType::LongArray => "jlongArray",
            JniType::FloatArray => "jfloatArray",
            JniType::DoubleArray => "jdoubleArray",
            JniType::ObjectArray => "jobjectArray",
            JniType::Class => "jclass",
            JniType::String => "jstring",
            JniType::Object => "jobject",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn JniType___scalars___are_not_references() {
        for ty in JniType::ALL {
            assert!(
                !(ty.is_scalar() && ty.is_reference()),
                "{ty} is both scalar and reference"
            );
        }
    }

    #[test]
    fn JniType___env___is_neither_scalar_nor_reference() {
        assert!(!JniType::JniEnv.is_scalar());
        assert!(!JniType::JniEnv.is_reference());
    }

    #[test]
    fn JniType___counts___match_vocabulary() {
        let scalars = JniType::ALL.iter().filter(|t| t.is_scalar()).count();
        let references = JniType::ALL.iter().filter(|t| t.is_reference()).count();

        assert_eq!(scalars, 9);
        assert_eq!(references, 12);
    }
}
