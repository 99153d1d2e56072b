//! Immutable method and property descriptors

use crate::naming::NamingStyle;
use crate::value::TypeTag;

/// Structural description of a single public method
///
/// Captured once from the bean's reflection surface and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodDescriptor {
    /// Method name as declared on the bean
    pub name: &'static str,
    /// Parameter type tags, in declaration order
    pub param_types: &'static [TypeTag],
    /// Return type tag (`Unit` for void methods)
    pub return_type: TypeTag,
}

/// A logical property reconciled from a getter/setter pair
///
/// A property may have only a getter (read-only), only a setter, or both.
/// When both exist their types agree; disagreement fails the build.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDescriptor {
    pub(crate) raw: &'static str,
    pub(crate) name: String,
    pub(crate) type_tag: TypeTag,
    pub(crate) getter: Option<MethodDescriptor>,
    pub(crate) setter: Option<MethodDescriptor>,
}

impl PropertyDescriptor {
    /// Descriptor with accessors still unresolved, filled in during
    /// reconciliation.
    pub(crate) fn partial(raw: &'static str) -> Self {
        Self {
            raw,
            name: String::new(),
            type_tag: TypeTag::Unit,
            getter: None,
            setter: None,
        }
    }

    /// Display name under the owning outline's naming convention.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Convention-independent accessor fragment the property derives from.
    pub fn raw_name(&self) -> &str {
        self.raw
    }

    /// Native type of the property.
    pub fn type_tag(&self) -> TypeTag {
        self.type_tag
    }

    /// Getter descriptor, when the property is readable.
    pub fn getter(&self) -> Option<&MethodDescriptor> {
        self.getter.as_ref()
    }

    /// Setter descriptor, when the property is writable.
    pub fn setter(&self) -> Option<&MethodDescriptor> {
        self.setter.as_ref()
    }

    /// True when the property has a getter but no setter.
    pub fn is_read_only(&self) -> bool {
        self.getter.is_some() && self.setter.is_none()
    }

    /// camelCase projection of the property name, independent of the
    /// convention the owning outline was built with.
    pub fn camel_cased_name(&self) -> String {
        NamingStyle::CamelCase.property_name(self.raw)
    }

    /// snake_case projection of the property name, independent of the
    /// convention the owning outline was built with.
    pub fn snake_cased_name(&self) -> String {
        NamingStyle::SnakeCase.property_name(self.raw)
    }
}
