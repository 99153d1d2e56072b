//! Wrapped-instance access
//!
//! A [`Wrapped`] binds an outline to one borrowed instance and performs real
//! accessor invocation: `get` runs the property's getter, `set` coerces the
//! supplied value to the property's native type and then runs the setter.
//! Coercion happens strictly before invocation, so a failed `set` leaves the
//! instance untouched.

use std::fmt;

use crate::bean::Bean;
use crate::error::{CoercionError, OutlineError};
use crate::members::Member;
use crate::outline::Outline;
use crate::value::{TypeTag, Value};

/// Coerce a boxed value into the target native kind.
///
/// This is the dispatch-by-target-type policy of the set path; the
/// conversions themselves live with [`Value`].
fn coerce(value: Value, target: TypeTag) -> Result<Value, CoercionError> {
    match target {
        TypeTag::Bool => value.to_bool().map(Value::Bool),
        TypeTag::I8 => value.to_i8().map(Value::I8),
        TypeTag::I16 => value.to_i16().map(Value::I16),
        TypeTag::I32 => value.to_i32().map(Value::I32),
        TypeTag::I64 => value.to_i64().map(Value::I64),
        TypeTag::F32 => value.to_f32().map(Value::F32),
        TypeTag::F64 => value.to_f64().map(Value::F64),
        TypeTag::Char => value.to_char().map(Value::Char),
        TypeTag::Str => Ok(Value::Str(value.to_text())),
        TypeTag::Unit => Err(CoercionError {
            target: TypeTag::Unit,
            input: value.to_text(),
        }),
    }
}

/// An outline bound to one concrete instance
///
/// Borrows the instance for its lifetime and never takes ownership; mutation
/// is visible through any other path to the instance once the borrow ends.
/// Not thread-safe by contract, exactly like ordinary aliasing on the
/// underlying object.
pub struct Wrapped<'a, T: Bean> {
    outline: Outline<T>,
    instance: &'a mut T,
}

impl<'a, T: Bean> fmt::Debug for Wrapped<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wrapped")
            .field("outline", &self.outline)
            .finish_non_exhaustive()
    }
}

impl<'a, T: Bean> Wrapped<'a, T> {
    pub(crate) fn new(outline: Outline<T>, instance: &'a mut T) -> Self {
        Self { outline, instance }
    }

    /// Outline this wrapper was spawned from.
    pub fn outline(&self) -> &Outline<T> {
        &self.outline
    }

    /// Read the referenced property by running its real getter.
    ///
    /// Fails with [`OutlineError::NoGetter`] on a write-only property.
    pub fn get(&self, member: Member) -> Result<Value, OutlineError> {
        let getter_name = {
            let property = self.outline.property(member)?;
            property
                .getter()
                .ok_or_else(|| OutlineError::NoGetter {
                    property: property.name().to_string(),
                })?
                .name
        };
        self.instance.invoke_getter(getter_name)
    }

    /// Write the referenced property by running its real setter, coercing
    /// the supplied value to the property's native type first.
    ///
    /// Consumes and returns the wrapper so writes can be chained. Fails with
    /// [`OutlineError::NoSetter`] on a read-only property and with a
    /// coercion error when the value does not fit; the instance is untouched
    /// on failure.
    pub fn set(self, member: Member, value: impl Into<Value>) -> Result<Self, OutlineError> {
        let (setter_name, target) = {
            let property = self.outline.property(member)?;
            let setter = property.setter().ok_or_else(|| OutlineError::NoSetter {
                property: property.name().to_string(),
            })?;
            (setter.name, property.type_tag())
        };

        let coerced = coerce(value.into(), target)?;
        self.instance.invoke_setter(setter_name, coerced)?;
        Ok(self)
    }

    /// Release the wrapper and hand back the borrowed instance.
    pub fn into_inner(self) -> &'a mut T {
        self.instance
    }
}
