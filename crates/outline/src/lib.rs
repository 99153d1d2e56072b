//! Outline: structural introspection for bean-shaped types
//!
//! This crate discovers the accessor methods of a bean-shaped type, derives
//! a canonical property model from its getter/setter pairs, and exposes that
//! model through two decoupled access paths:
//! - a member-reference proxy that identifies a property by syntactically
//!   invoking its accessor, without ever running the accessor's real logic;
//! - a wrapped-instance accessor that performs real get/set against a
//!   concrete object, coercing generic boxed or textual values into the
//!   property's native type.
//!
//! Outlines are built once per (type, naming convention) pair and cached for
//! the lifetime of the process; the built metadata is immutable and freely
//! shareable across threads.
//!
//! ```
//! use outline::{bean, OutlineBuilder, Value};
//!
//! struct Account {
//!     name: String,
//!     active: bool,
//! }
//!
//! impl Account {
//!     fn get_name(&self) -> String {
//!         self.name.clone()
//!     }
//!
//!     fn set_name(&mut self, name: String) {
//!         self.name = name;
//!     }
//!
//!     fn is_active(&self) -> bool {
//!         self.active
//!     }
//! }
//!
//! bean! {
//!     impl Account {
//!         fn get_name(&self) -> String;
//!         fn set_name(&mut self, name: String);
//!         fn is_active(&self) -> bool;
//!     }
//! }
//!
//! # fn main() -> Result<(), outline::OutlineError> {
//! let outline = OutlineBuilder::new().snake_cased().build::<Account>()?;
//! assert_eq!(outline.property_names(), ["name", "active"]);
//!
//! // Reference a property without running its accessor.
//! let handle = outline.members().get_name();
//! assert_eq!(outline.camel_cased_name(handle)?, "name");
//!
//! // Real access against a concrete instance, with text coercion.
//! let mut account = Account { name: String::new(), active: false };
//! outline.wrap(&mut account).set(handle, "alice")?;
//! assert_eq!(outline.wrap(&mut account).get(handle)?, Value::from("alice"));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod bean;
pub mod builder;
mod catalog;
pub mod descriptor;
pub mod error;
pub mod members;
mod model;
pub mod naming;
pub mod outline;
pub mod value;
pub mod wrapped;

mod macros;

pub use bean::Bean;
pub use builder::OutlineBuilder;
pub use descriptor::{MethodDescriptor, PropertyDescriptor};
pub use error::{CoercionError, OutlineError};
pub use members::{CallRecorder, Member};
pub use naming::{pluralize, NamingStyle, Pluralizer};
pub use outline::Outline;
pub use value::{NativeType, TypeTag, Value};
pub use wrapped::Wrapped;

#[doc(hidden)]
pub use paste::paste as __paste;
