//! Naming conventions
//!
//! Pure projections from raw identifier fragments to display names, plus
//! default-English pluralization. A property's raw fragment is stored
//! convention-independently, so either projection can be computed on demand
//! regardless of the convention an outline was built with.

use heck::{ToLowerCamelCase, ToSnakeCase};
use std::sync::Arc;

/// Display-name derivation policy bound to an outline at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamingStyle {
    /// `read_write_property` renders as `readWriteProperty`
    CamelCase,
    /// `ReadWriteProperty` renders as `read_write_property`
    SnakeCase,
}

impl NamingStyle {
    /// Project a property's raw accessor fragment into a display name.
    pub fn property_name(&self, fragment: &str) -> String {
        match self {
            NamingStyle::CamelCase => fragment.to_lower_camel_case(),
            NamingStyle::SnakeCase => fragment.to_snake_case(),
        }
    }

    /// Project a type's raw name into a display name.
    ///
    /// Type names keep their original casing under `CamelCase`
    /// (`TestBeanClass` stays `TestBeanClass`).
    pub fn type_name(&self, raw: &str) -> String {
        match self {
            NamingStyle::CamelCase => raw.to_string(),
            NamingStyle::SnakeCase => raw.to_snake_case(),
        }
    }
}

/// Custom pluralization hook installed through the builder
pub type Pluralizer = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Derive a plural display name with the default English rule.
///
/// Appends `s`, or `es` when the name ends in a sibilant (`s`, `x`, `z`,
/// `ch`, `sh`).
pub fn pluralize(name: &str) -> String {
    let lower = name.to_ascii_lowercase();
    let sibilant = lower.ends_with('s')
        || lower.ends_with('x')
        || lower.ends_with('z')
        || lower.ends_with("ch")
        || lower.ends_with("sh");

    let mut plural = String::with_capacity(name.len() + 2);
    plural.push_str(name);
    plural.push_str(if sibilant { "es" } else { "s" });
    plural
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_name_camel_cased() {
        assert_eq!(
            NamingStyle::CamelCase.property_name("read_write_property"),
            "readWriteProperty"
        );
        assert_eq!(NamingStyle::CamelCase.property_name("name"), "name");
    }

    #[test]
    fn test_property_name_snake_cased() {
        assert_eq!(
            NamingStyle::SnakeCase.property_name("read_write_property"),
            "read_write_property"
        );
        // Fragments written in camel case project to the same property.
        assert_eq!(
            NamingStyle::SnakeCase.property_name("readWriteProperty"),
            "read_write_property"
        );
    }

    #[test]
    fn test_projections_agree_on_identity() {
        // Both projections of the same fragment name the same property.
        let camel = NamingStyle::CamelCase.property_name("boolean_property");
        let snake = NamingStyle::SnakeCase.property_name(&camel);
        assert_eq!(snake, "boolean_property");
    }

    #[test]
    fn test_type_name() {
        assert_eq!(
            NamingStyle::CamelCase.type_name("TestBeanClass"),
            "TestBeanClass"
        );
        assert_eq!(
            NamingStyle::SnakeCase.type_name("TestBeanClass"),
            "test_bean_class"
        );
    }

    #[test]
    fn test_pluralize_default_rule() {
        assert_eq!(pluralize("property"), "propertys");
        assert_eq!(pluralize("TestBeanClass"), "TestBeanClasses");
        assert_eq!(pluralize("test_bean_class"), "test_bean_classes");
        assert_eq!(pluralize("box"), "boxes");
        assert_eq!(pluralize("quiz"), "quizes");
        assert_eq!(pluralize("branch"), "branches");
        assert_eq!(pluralize("hash"), "hashes");
        assert_eq!(pluralize("outline"), "outlines");
    }
}
