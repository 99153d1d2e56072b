//! Property model reconciliation
//!
//! Folds a method catalog into named properties under a naming convention:
//! getter/setter candidates are grouped by their accessor fragment, type
//! agreement is enforced, and name indices are built for handle resolution.
//! Insertion order follows discovery order.

use crate::catalog::{Classified, MethodCatalog};
use crate::descriptor::PropertyDescriptor;
use crate::error::OutlineError;
use crate::naming::NamingStyle;
use rustc_hash::FxHashMap;

/// Reconciled properties of one bean type under one convention
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PropertyModel {
    /// Properties in discovery order
    pub(crate) properties: Vec<PropertyDescriptor>,
    /// Display name → property index
    pub(crate) by_display: FxHashMap<String, usize>,
    /// Accessor method name → property index
    pub(crate) by_accessor: FxHashMap<&'static str, usize>,
}

impl PropertyModel {
    /// Reconcile a catalog into a property model.
    ///
    /// The first-seen accessor of each kind wins within a fragment group; a
    /// group whose getter and setter disagree on type fails the build.
    pub(crate) fn reconcile(
        catalog: &MethodCatalog,
        style: NamingStyle,
    ) -> Result<Self, OutlineError> {
        let mut properties: Vec<PropertyDescriptor> = Vec::new();
        let mut by_fragment: FxHashMap<&'static str, usize> = FxHashMap::default();

        for method in catalog.methods() {
            let (fragment, is_getter) = match MethodCatalog::classify(method) {
                Classified::Getter { fragment } => (fragment, true),
                Classified::Setter { fragment } => (fragment, false),
                Classified::Plain => continue,
            };

            let index = *by_fragment.entry(fragment).or_insert_with(|| {
                properties.push(PropertyDescriptor::partial(fragment));
                properties.len() - 1
            });

            let property = &mut properties[index];
            if is_getter {
                if property.getter.is_none() {
                    property.getter = Some(*method);
                }
            } else if property.setter.is_none() {
                property.setter = Some(*method);
            }
        }

        for property in &mut properties {
            let getter_tag = property.getter.map(|getter| getter.return_type);
            let setter_tag = property.setter.map(|setter| setter.param_types[0]);

            property.type_tag = match (getter_tag, setter_tag) {
                (Some(getter), Some(setter)) if getter != setter => {
                    return Err(OutlineError::ModelConflict {
                        property: property.raw.to_string(),
                        getter,
                        setter,
                    });
                }
                (Some(tag), _) | (None, Some(tag)) => tag,
                // A group is only created from a classified accessor.
                (None, None) => unreachable!("property without accessors"),
            };
            property.name = style.property_name(property.raw);
        }

        let mut by_display = FxHashMap::default();
        let mut by_accessor = FxHashMap::default();
        for (index, property) in properties.iter().enumerate() {
            by_display.insert(property.name.clone(), index);
            if let Some(getter) = &property.getter {
                by_accessor.insert(getter.name, index);
            }
            if let Some(setter) = &property.setter {
                by_accessor.insert(setter.name, index);
            }
        }

        Ok(Self {
            properties,
            by_display,
            by_accessor,
        })
    }
}
