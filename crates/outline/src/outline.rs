//! The outline facade
//!
//! An [`Outline`] is an immutable, thread-shareable view of one bean type's
//! property model under one naming convention. It answers name queries,
//! resolves member handles, and spawns the two access paths: the
//! member-reference proxy (`members`, `member_of`) and the wrapped-instance
//! accessor (`wrap`).

use crate::bean::Bean;
use crate::descriptor::{MethodDescriptor, PropertyDescriptor};
use crate::error::OutlineError;
use crate::members::{CallRecorder, Member};
use crate::model::PropertyModel;
use crate::naming::NamingStyle;
use crate::wrapped::Wrapped;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// Type-erased outline metadata, shared through the build cache.
#[derive(Debug, PartialEq)]
pub(crate) struct OutlineData {
    pub(crate) style: NamingStyle,
    pub(crate) camel_type: &'static str,
    pub(crate) snake_type: String,
    pub(crate) camel_plural: String,
    pub(crate) snake_plural: String,
    pub(crate) model: PropertyModel,
    pub(crate) methods: &'static [MethodDescriptor],
}

impl OutlineData {
    /// Reflect over `T` and reconcile its property model.
    pub(crate) fn build<T: Bean>(
        style: NamingStyle,
        pluralizer: &(dyn Fn(&str) -> String),
    ) -> Result<Self, OutlineError> {
        use crate::catalog::MethodCatalog;

        let catalog = MethodCatalog::of::<T>();
        let model = PropertyModel::reconcile(&catalog, style)?;

        let camel_type = T::TYPE_NAME;
        let snake_type = NamingStyle::SnakeCase.type_name(camel_type);
        let camel_plural = pluralizer(camel_type);
        let snake_plural = pluralizer(&snake_type);

        Ok(Self {
            style,
            camel_type,
            snake_type,
            camel_plural,
            snake_plural,
            model,
            methods: catalog.methods(),
        })
    }
}

/// Immutable structural view of a bean type under one naming convention
///
/// Cheap to clone (shared metadata) and safe to share across threads.
pub struct Outline<T: Bean> {
    pub(crate) data: Arc<OutlineData>,
    bean: PhantomData<fn() -> T>,
}

impl<T: Bean> Clone for Outline<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            bean: PhantomData,
        }
    }
}

impl<T: Bean> PartialEq for Outline<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.data, &other.data) || *self.data == *other.data
    }
}

impl<T: Bean> fmt::Debug for Outline<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Outline")
            .field("type_name", &self.type_name())
            .field("style", &self.data.style)
            .field("properties", &self.data.model.properties.len())
            .finish()
    }
}

impl<T: Bean> Outline<T> {
    pub(crate) fn from_data(data: Arc<OutlineData>) -> Self {
        Self {
            data,
            bean: PhantomData,
        }
    }

    /// Display names of all properties, in discovery order.
    pub fn property_names(&self) -> Vec<&str> {
        self.data
            .model
            .properties
            .iter()
            .map(|property| property.name())
            .collect()
    }

    /// All properties, in discovery order.
    pub fn properties(&self) -> &[PropertyDescriptor] {
        &self.data.model.properties
    }

    /// All catalogued methods: accessors, plain methods, and the universal
    /// reflective accessor.
    pub fn methods(&self) -> &[MethodDescriptor] {
        self.data.methods
    }

    /// Resolve a member handle to its property.
    ///
    /// Resolution is by method identity (name plus signature); handles
    /// minted by another type's proxy, or references to non-property
    /// methods, fail with [`OutlineError::UnknownMember`].
    pub fn property(&self, member: Member) -> Result<&PropertyDescriptor, OutlineError> {
        let method = member.method();
        let index = match self.data.model.by_accessor.get(method.name).copied() {
            Some(index) => index,
            None => {
                return Err(OutlineError::UnknownMember {
                    name: method.name.to_string(),
                });
            }
        };
        let property = &self.data.model.properties[index];

        let identity_matches = property.getter.map_or(false, |getter| getter == method)
            || property.setter.map_or(false, |setter| setter == method);
        if !identity_matches {
            return Err(OutlineError::UnknownMember {
                name: method.name.to_string(),
            });
        }
        Ok(property)
    }

    /// Resolve the property referenced inside a capture closure.
    pub fn property_of<F, R>(&self, capture: F) -> Result<&PropertyDescriptor, OutlineError>
    where
        F: FnOnce(&T::Members) -> R,
    {
        let member = self.member_of(capture)?;
        self.property(member)
    }

    /// Fresh member-reference proxy for this bean type.
    ///
    /// Accessor stubs on the proxy return [`Member`] handles and never run
    /// the real accessors.
    pub fn members(&self) -> T::Members {
        T::members(CallRecorder::new())
    }

    /// Run a capture closure against a fresh proxy and return the member it
    /// referenced.
    ///
    /// The last accessor invoked inside the closure wins; any value passed
    /// to a setter stub is discarded. A closure that invokes nothing fails
    /// with [`OutlineError::UnknownMember`].
    pub fn member_of<F, R>(&self, capture: F) -> Result<Member, OutlineError>
    where
        F: FnOnce(&T::Members) -> R,
    {
        let recorder = CallRecorder::new();
        let proxy = T::members(recorder.clone());
        capture(&proxy);
        recorder.take().ok_or_else(|| OutlineError::UnknownMember {
            name: "<no member referenced>".to_string(),
        })
    }

    /// camelCase name of the referenced property, independent of this
    /// outline's own convention.
    pub fn camel_cased_name(&self, member: Member) -> Result<String, OutlineError> {
        Ok(self.property(member)?.camel_cased_name())
    }

    /// snake_case name of the referenced property, independent of this
    /// outline's own convention.
    pub fn snake_cased_name(&self, member: Member) -> Result<String, OutlineError> {
        Ok(self.property(member)?.snake_cased_name())
    }

    /// camelCase name of the property referenced inside a capture closure.
    pub fn camel_cased_name_of<F, R>(&self, capture: F) -> Result<String, OutlineError>
    where
        F: FnOnce(&T::Members) -> R,
    {
        let member = self.member_of(capture)?;
        self.camel_cased_name(member)
    }

    /// snake_case name of the property referenced inside a capture closure.
    pub fn snake_cased_name_of<F, R>(&self, capture: F) -> Result<String, OutlineError>
    where
        F: FnOnce(&T::Members) -> R,
    {
        let member = self.member_of(capture)?;
        self.snake_cased_name(member)
    }

    /// Convention this outline was built with.
    pub fn naming_style(&self) -> NamingStyle {
        self.data.style
    }

    /// Type display name under this outline's convention.
    pub fn type_name(&self) -> &str {
        match self.data.style {
            NamingStyle::CamelCase => self.data.camel_type,
            NamingStyle::SnakeCase => &self.data.snake_type,
        }
    }

    /// Plural type display name under this outline's convention.
    pub fn plural_type_name(&self) -> &str {
        match self.data.style {
            NamingStyle::CamelCase => &self.data.camel_plural,
            NamingStyle::SnakeCase => &self.data.snake_plural,
        }
    }

    /// camelCase type name, independent of this outline's convention.
    pub fn camel_cased_type_name(&self) -> &str {
        self.data.camel_type
    }

    /// Plural camelCase type name, independent of this outline's convention.
    pub fn camel_cased_plural_name(&self) -> &str {
        &self.data.camel_plural
    }

    /// snake_case type name, independent of this outline's convention.
    pub fn snake_cased_type_name(&self) -> &str {
        &self.data.snake_type
    }

    /// Plural snake_case type name, independent of this outline's convention.
    pub fn snake_cased_plural_name(&self) -> &str {
        &self.data.snake_plural
    }

    /// Bind this outline to a concrete instance for real get/set access.
    ///
    /// The wrapper borrows the instance; it never takes ownership.
    pub fn wrap<'a>(&self, instance: &'a mut T) -> Wrapped<'a, T> {
        Wrapped::new(self.clone(), instance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::OutlineBuilder;

    struct Widget {
        width: i32,
    }

    impl Widget {
        fn get_width(&self) -> i32 {
            self.width
        }

        fn set_width(&mut self, width: i32) {
            self.width = width;
        }

        fn is_visible(&self) -> bool {
            true
        }

        fn redraw(&mut self) {}
    }

    crate::bean! {
        impl Widget {
            fn get_width(&self) -> i32;
            fn set_width(&mut self, width: i32);
            fn is_visible(&self) -> bool;
            fn redraw(&mut self);
        }
    }

    struct Gadget;

    impl Gadget {
        fn get_serial(&self) -> i64 {
            0
        }
    }

    crate::bean! {
        impl Gadget {
            fn get_serial(&self) -> i64;
        }
    }

    fn snake_outline() -> Outline<Widget> {
        OutlineBuilder::new().snake_cased().build::<Widget>().unwrap()
    }

    #[test]
    fn test_getter_and_setter_handles_resolve_to_same_property() {
        let outline = snake_outline();
        let members = outline.members();

        let via_getter = outline.property(members.get_width()).unwrap().clone();
        let via_setter = outline.property(members.set_width(0)).unwrap().clone();
        assert_eq!(via_getter, via_setter);
        assert_eq!(via_getter.name(), "width");
    }

    #[test]
    fn test_capture_closure_identifies_setter() {
        let outline = snake_outline();
        let property = outline
            .property_of(|members| members.set_width(42))
            .unwrap();
        assert_eq!(property.name(), "width");

        // The value argument is discarded; only the accessor identity counts.
        let name = outline
            .camel_cased_name_of(|members| members.set_width("ignored"))
            .unwrap();
        assert_eq!(name, "width");
    }

    #[test]
    fn test_capture_closure_keeps_last_invocation() {
        let outline = snake_outline();
        let member = outline
            .member_of(|members| {
                members.get_width();
                members.is_visible()
            })
            .unwrap();
        assert_eq!(member.name(), "is_visible");
    }

    #[test]
    fn test_empty_capture_fails() {
        let outline = snake_outline();
        let err = outline.member_of(|_| {}).unwrap_err();
        assert!(matches!(err, OutlineError::UnknownMember { .. }));
    }

    #[test]
    fn test_foreign_handle_fails() {
        let outline = snake_outline();
        let gadget_outline = OutlineBuilder::new().snake_cased().build::<Gadget>().unwrap();
        let foreign = gadget_outline.members().get_serial();

        assert_eq!(
            outline.property(foreign).unwrap_err(),
            OutlineError::UnknownMember {
                name: "get_serial".to_string(),
            }
        );
    }

    #[test]
    fn test_plain_method_resolves_to_no_property() {
        let outline = snake_outline();
        let member = outline.members().redraw();
        assert!(matches!(
            outline.property(member),
            Err(OutlineError::UnknownMember { .. })
        ));

        // Still catalogued as a method.
        assert!(outline.methods().iter().any(|m| m.name == "redraw"));
    }

    #[test]
    fn test_name_projections_are_convention_independent() {
        let snake = snake_outline();
        let camel = OutlineBuilder::new().camel_cased().build::<Widget>().unwrap();

        for outline in [&snake, &camel] {
            let member = outline.members().get_width();
            assert_eq!(outline.camel_cased_name(member).unwrap(), "width");
            assert_eq!(outline.snake_cased_name(member).unwrap(), "width");
            assert_eq!(outline.camel_cased_type_name(), "Widget");
            assert_eq!(outline.snake_cased_type_name(), "widget");
            assert_eq!(outline.camel_cased_plural_name(), "Widgets");
            assert_eq!(outline.snake_cased_plural_name(), "widgets");
        }

        assert_eq!(snake.type_name(), "widget");
        assert_eq!(camel.type_name(), "Widget");
    }

    #[test]
    fn test_universal_accessor_is_a_method_but_not_a_property() {
        let outline = snake_outline();
        assert!(outline.methods().iter().any(|m| m.name == "get_type_name"));
        assert!(!outline
            .property_names()
            .contains(&"type_name"));

        let member = outline.members().get_type_name();
        assert!(matches!(
            outline.property(member),
            Err(OutlineError::UnknownMember { .. })
        ));
    }
}
