//! Generic boxed values
//!
//! A [`Value`] carries any of the nine native property kinds in a single
//! tagged representation, the role a boxed `Object` plays in dynamically
//! reflective platforms. The `to_*` family converts between kinds:
//! pass-through when the value already has the requested kind, text parsing
//! when it is a string, and range-checked numeric conversion otherwise.
//!
//! The dispatch policy deciding *which* conversion a `set` call needs lives
//! with the instance wrapper; this module only provides the conversions.

use crate::error::CoercionError;
use std::fmt;

/// Type tag identifying a property's or parameter's native kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// Void return of setters and plain methods
    Unit,
    /// `bool`
    Bool,
    /// `i8`
    I8,
    /// `i16`
    I16,
    /// `i32`
    I32,
    /// `i64`
    I64,
    /// `f32`
    F32,
    /// `f64`
    F64,
    /// `char`
    Char,
    /// `String`
    Str,
}

impl TypeTag {
    /// Lower-case name of the tagged type.
    pub const fn name(&self) -> &'static str {
        match self {
            TypeTag::Unit => "unit",
            TypeTag::Bool => "bool",
            TypeTag::I8 => "i8",
            TypeTag::I16 => "i16",
            TypeTag::I32 => "i32",
            TypeTag::I64 => "i64",
            TypeTag::F32 => "f32",
            TypeTag::F64 => "f64",
            TypeTag::Char => "char",
            TypeTag::Str => "string",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Generic boxed value crossing the get/set boundary
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),
    /// 8-bit signed integer
    I8(i8),
    /// 16-bit signed integer
    I16(i16),
    /// 32-bit signed integer
    I32(i32),
    /// 64-bit signed integer
    I64(i64),
    /// 32-bit floating point number
    F32(f32),
    /// 64-bit floating point number
    F64(f64),
    /// Single character
    Char(char),
    /// Text value
    Str(String),
}

impl Value {
    /// Tag of the kind currently held.
    pub fn type_tag(&self) -> TypeTag {
        match self {
            Value::Bool(_) => TypeTag::Bool,
            Value::I8(_) => TypeTag::I8,
            Value::I16(_) => TypeTag::I16,
            Value::I32(_) => TypeTag::I32,
            Value::I64(_) => TypeTag::I64,
            Value::F32(_) => TypeTag::F32,
            Value::F64(_) => TypeTag::F64,
            Value::Char(_) => TypeTag::Char,
            Value::Str(_) => TypeTag::Str,
        }
    }

    /// Widen any integer kind to `i64`.
    fn integral(&self) -> Option<i64> {
        match self {
            Value::I8(v) => Some(i64::from(*v)),
            Value::I16(v) => Some(i64::from(*v)),
            Value::I32(v) => Some(i64::from(*v)),
            Value::I64(v) => Some(*v),
            _ => None,
        }
    }

    /// Widen any numeric kind to `f64`.
    fn numeric(&self) -> Option<f64> {
        match self {
            Value::F32(v) => Some(f64::from(*v)),
            Value::F64(v) => Some(*v),
            _ => self.integral().map(|v| v as f64),
        }
    }

    fn failure(&self, target: TypeTag) -> CoercionError {
        CoercionError {
            target,
            input: self.to_text(),
        }
    }

    /// Convert to `bool`: pass-through, or parse `"true"`/`"false"`
    /// case-insensitively.
    pub fn to_bool(&self) -> Result<bool, CoercionError> {
        match self {
            Value::Bool(v) => Ok(*v),
            Value::Str(s) if s.eq_ignore_ascii_case("true") => Ok(true),
            Value::Str(s) if s.eq_ignore_ascii_case("false") => Ok(false),
            _ => Err(self.failure(TypeTag::Bool)),
        }
    }

    /// Convert to `i8`: parse integer text or range-check a numeric kind.
    pub fn to_i8(&self) -> Result<i8, CoercionError> {
        match self {
            Value::Str(s) => s.trim().parse().map_err(|_| self.failure(TypeTag::I8)),
            _ => self
                .integral()
                .and_then(|wide| i8::try_from(wide).ok())
                .ok_or_else(|| self.failure(TypeTag::I8)),
        }
    }

    /// Convert to `i16`: parse integer text or range-check a numeric kind.
    pub fn to_i16(&self) -> Result<i16, CoercionError> {
        match self {
            Value::Str(s) => s.trim().parse().map_err(|_| self.failure(TypeTag::I16)),
            _ => self
                .integral()
                .and_then(|wide| i16::try_from(wide).ok())
                .ok_or_else(|| self.failure(TypeTag::I16)),
        }
    }

    /// Convert to `i32`: parse integer text or range-check a numeric kind.
    pub fn to_i32(&self) -> Result<i32, CoercionError> {
        match self {
            Value::Str(s) => s.trim().parse().map_err(|_| self.failure(TypeTag::I32)),
            _ => self
                .integral()
                .and_then(|wide| i32::try_from(wide).ok())
                .ok_or_else(|| self.failure(TypeTag::I32)),
        }
    }

    /// Convert to `i64`: parse integer text or widen any integer kind.
    pub fn to_i64(&self) -> Result<i64, CoercionError> {
        match self {
            Value::Str(s) => s.trim().parse().map_err(|_| self.failure(TypeTag::I64)),
            _ => self.integral().ok_or_else(|| self.failure(TypeTag::I64)),
        }
    }

    /// Convert to `f32`: parse decimal text or pass through any numeric kind.
    pub fn to_f32(&self) -> Result<f32, CoercionError> {
        match self {
            Value::Str(s) => s.trim().parse().map_err(|_| self.failure(TypeTag::F32)),
            _ => self
                .numeric()
                .map(|wide| wide as f32)
                .ok_or_else(|| self.failure(TypeTag::F32)),
        }
    }

    /// Convert to `f64`: parse decimal text or pass through any numeric kind.
    pub fn to_f64(&self) -> Result<f64, CoercionError> {
        match self {
            Value::Str(s) => s.trim().parse().map_err(|_| self.failure(TypeTag::F64)),
            _ => self.numeric().ok_or_else(|| self.failure(TypeTag::F64)),
        }
    }

    /// Convert to `char`: pass-through, or the first character of non-empty
    /// text.
    pub fn to_char(&self) -> Result<char, CoercionError> {
        match self {
            Value::Char(c) => Ok(*c),
            Value::Str(s) => s.chars().next().ok_or_else(|| self.failure(TypeTag::Char)),
            _ => Err(self.failure(TypeTag::Char)),
        }
    }

    /// Render as plain text. Never fails; every kind stringifies.
    pub fn to_text(&self) -> String {
        match self {
            Value::Bool(v) => v.to_string(),
            Value::I8(v) => v.to_string(),
            Value::I16(v) => v.to_string(),
            Value::I32(v) => v.to_string(),
            Value::I64(v) => v.to_string(),
            Value::F32(v) => v.to_string(),
            Value::F64(v) => v.to_string(),
            Value::Char(v) => v.to_string(),
            Value::Str(v) => v.clone(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "\"{}\"", s),
            Value::Char(c) => write!(f, "'{}'", c),
            other => f.write_str(&other.to_text()),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i8> for Value {
    fn from(v: i8) -> Self {
        Value::I8(v)
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Value::I16(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::I32(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::I64(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::F32(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::F64(v)
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Value::Char(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

/// Bridge between native Rust accessor types and the boxed representation
///
/// Implemented for the nine kinds a property may have. The `bean!` macro
/// relies on `TAG` to build method descriptors and on the conversions to
/// dispatch real accessor invocations.
pub trait NativeType: Sized {
    /// Tag describing this type in descriptors.
    const TAG: TypeTag;

    /// Box a native value.
    fn into_value(self) -> Value;

    /// Extract a native value, coercing where the boxed kind allows it.
    fn from_value(value: &Value) -> Result<Self, CoercionError>;
}

macro_rules! native_type {
    ($ty:ty, $variant:ident, $to:ident) => {
        impl NativeType for $ty {
            const TAG: TypeTag = TypeTag::$variant;

            fn into_value(self) -> Value {
                Value::$variant(self)
            }

            fn from_value(value: &Value) -> Result<Self, CoercionError> {
                value.$to()
            }
        }
    };
}

native_type!(bool, Bool, to_bool);
native_type!(i8, I8, to_i8);
native_type!(i16, I16, to_i16);
native_type!(i32, I32, to_i32);
native_type!(i64, I64, to_i64);
native_type!(f32, F32, to_f32);
native_type!(f64, F64, to_f64);
native_type!(char, Char, to_char);

impl NativeType for String {
    const TAG: TypeTag = TypeTag::Str;

    fn into_value(self) -> Value {
        Value::Str(self)
    }

    fn from_value(value: &Value) -> Result<Self, CoercionError> {
        Ok(value.to_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_parse_and_pass_through() {
        assert_eq!(Value::from("true").to_bool().unwrap(), true);
        assert_eq!(Value::from("FALSE").to_bool().unwrap(), false);
        assert_eq!(Value::Bool(true).to_bool().unwrap(), true);
        assert!(Value::from("yes").to_bool().is_err());
        assert!(Value::I32(1).to_bool().is_err());
    }

    #[test]
    fn test_integer_parse() {
        assert_eq!(Value::from("10").to_i8().unwrap(), 10);
        assert_eq!(Value::from(" 3 ").to_i16().unwrap(), 3);
        assert_eq!(Value::from("1").to_i32().unwrap(), 1);
        assert_eq!(Value::from("2").to_i64().unwrap(), 2);
    }

    #[test]
    fn test_integer_pass_through_is_range_checked() {
        assert_eq!(Value::I32(10).to_i8().unwrap(), 10);
        let err = Value::I32(300).to_i8().unwrap_err();
        assert_eq!(err.target, TypeTag::I8);
        assert_eq!(err.input, "300");
        assert_eq!(Value::I8(7).to_i64().unwrap(), 7);
    }

    #[test]
    fn test_float_parse_and_widen() {
        assert_eq!(Value::from("1.0").to_f64().unwrap(), 1.0);
        assert_eq!(Value::from("2.0").to_f32().unwrap(), 2.0);
        assert_eq!(Value::I32(4).to_f64().unwrap(), 4.0);
        assert_eq!(Value::F32(1.5).to_f64().unwrap(), 1.5);
    }

    #[test]
    fn test_float_does_not_narrow_to_integer() {
        assert!(Value::F64(1.0).to_i32().is_err());
    }

    #[test]
    fn test_char_takes_first_character() {
        assert_eq!(Value::from("c").to_char().unwrap(), 'c');
        assert_eq!(Value::from("chain").to_char().unwrap(), 'c');
        assert_eq!(Value::Char('x').to_char().unwrap(), 'x');
        assert!(Value::from("").to_char().is_err());
    }

    #[test]
    fn test_to_text_stringifies_every_kind() {
        assert_eq!(Value::Bool(true).to_text(), "true");
        assert_eq!(Value::I64(2).to_text(), "2");
        assert_eq!(Value::Char('c').to_text(), "c");
        assert_eq!(Value::from("string").to_text(), "string");
    }

    #[test]
    fn test_display_quotes_text_kinds() {
        assert_eq!(Value::from("hello").to_string(), "\"hello\"");
        assert_eq!(Value::Char('c').to_string(), "'c'");
        assert_eq!(Value::I32(42).to_string(), "42");
    }

    #[test]
    fn test_native_type_round_trip() {
        assert_eq!(NativeType::into_value(true), Value::Bool(true));
        assert_eq!(i32::from_value(&Value::from("1")).unwrap(), 1);
        assert_eq!(
            String::from_value(&Value::I32(9)).unwrap(),
            "9".to_string()
        );
        assert_eq!(<i64 as NativeType>::TAG, TypeTag::I64);
    }
}
