//! Introspection errors
//!
//! All failures are deterministic and caller-visible: they reflect either a
//! malformed bean definition or a caller mistake. Nothing is retried and no
//! partial mutation survives a failed operation.

use crate::value::TypeTag;
use thiserror::Error;

/// Errors produced while building or using an outline
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OutlineError {
    /// A getter/setter pair disagrees on the property's native type
    #[error("conflicting accessor types for property '{property}': getter returns {getter}, setter takes {setter}")]
    ModelConflict {
        /// Raw fragment of the conflicting property
        property: String,
        /// Return type of the getter
        getter: TypeTag,
        /// Sole parameter type of the setter
        setter: TypeTag,
    },

    /// A member handle or capture does not resolve against this outline
    #[error("no member named '{name}' is known to this outline")]
    UnknownMember {
        /// Method name carried by the unresolved handle
        name: String,
    },

    /// The property exists but cannot be read
    #[error("property '{property}' has no getter")]
    NoGetter {
        /// Display name of the property
        property: String,
    },

    /// The property exists but cannot be written
    #[error("property '{property}' has no setter")]
    NoSetter {
        /// Display name of the property
        property: String,
    },

    /// A supplied value cannot be converted to the property's native type
    #[error(transparent)]
    Coercion(#[from] CoercionError),
}

/// A value could not be converted into a target native type
#[derive(Debug, Clone, Error, PartialEq)]
#[error("cannot coerce {input:?} into {target}")]
pub struct CoercionError {
    /// The native type the value was being converted into
    pub target: TypeTag,
    /// Textual rendering of the offending input
    pub input: String,
}
