//! Method catalog and accessor classification
//!
//! One-shot enumeration of a bean's public methods with getter/setter
//! classification. Reserved platform accessors are denied before pattern
//! matching so they never surface as properties.

use crate::bean::Bean;
use crate::descriptor::MethodDescriptor;
use crate::value::TypeTag;

/// Zero-argument reflective accessors every catalog carries but no property
/// model may claim.
pub(crate) const RESERVED_ACCESSORS: &[&str] = &["get_type_name"];

/// Outcome of classifying one catalogued method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Classified {
    /// Zero-argument accessor returning the property's type
    Getter {
        /// Accessor fragment naming the property
        fragment: &'static str,
    },
    /// Single-argument void accessor
    Setter {
        /// Accessor fragment naming the property
        fragment: &'static str,
    },
    /// Catalogued but not property-shaped
    Plain,
}

/// Snapshot of a bean type's public methods
pub(crate) struct MethodCatalog {
    methods: &'static [MethodDescriptor],
}

impl MethodCatalog {
    /// Capture the catalog of a bean type.
    pub(crate) fn of<T: Bean>() -> Self {
        Self::from_methods(T::methods())
    }

    pub(crate) fn from_methods(methods: &'static [MethodDescriptor]) -> Self {
        Self { methods }
    }

    /// All catalogued methods, in declaration order.
    pub(crate) fn methods(&self) -> &'static [MethodDescriptor] {
        self.methods
    }

    /// Classify a method as getter-candidate, setter-candidate, or plain.
    ///
    /// `get_*` must take nothing and return a value; `is_*` additionally
    /// must return `bool`; `set_*` must take exactly one argument and
    /// return nothing. Reserved accessors are plain regardless of shape.
    pub(crate) fn classify(method: &MethodDescriptor) -> Classified {
        if RESERVED_ACCESSORS.contains(&method.name) {
            return Classified::Plain;
        }

        if let Some(fragment) = method.name.strip_prefix("get_") {
            if !fragment.is_empty()
                && method.param_types.is_empty()
                && method.return_type != TypeTag::Unit
            {
                return Classified::Getter { fragment };
            }
        }

        if let Some(fragment) = method.name.strip_prefix("is_") {
            if !fragment.is_empty()
                && method.param_types.is_empty()
                && method.return_type == TypeTag::Bool
            {
                return Classified::Getter { fragment };
            }
        }

        if let Some(fragment) = method.name.strip_prefix("set_") {
            if !fragment.is_empty()
                && method.param_types.len() == 1
                && method.return_type == TypeTag::Unit
            {
                return Classified::Setter { fragment };
            }
        }

        Classified::Plain
    }
}
