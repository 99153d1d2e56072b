//! The bean reflection boundary
//!
//! Rust has no runtime reflection, so the structural description of a bean
//! type enters through this trait instead. Implementations are generated by
//! the [`bean!`](macro@crate::bean) macro from the bean's accessor signatures: a
//! static method catalog, a member-reference proxy type, and dynamic
//! dispatch onto the real accessors.

use crate::descriptor::MethodDescriptor;
use crate::error::OutlineError;
use crate::members::CallRecorder;
use crate::value::Value;

/// Structural reflection surface of a bean-shaped type
///
/// Everything an outline needs to know about `Self`: the catalog of public
/// methods, a proxy type whose accessor stubs identify members without
/// running them, and name-dispatched invocation of the real accessors.
pub trait Bean: Sized + 'static {
    /// Member-reference proxy generated alongside the bean.
    type Members;

    /// Raw type name, as declared.
    const TYPE_NAME: &'static str;

    /// Catalog of public methods, in declaration order.
    ///
    /// Always ends with the universal reflective accessor every bean
    /// carries (`get_type_name`).
    fn methods() -> &'static [MethodDescriptor];

    /// Construct the member-reference proxy around a recorder.
    fn members(recorder: CallRecorder) -> Self::Members;

    /// Run the real getter named `method` and box its result.
    ///
    /// Fails with [`OutlineError::UnknownMember`] when no such getter is
    /// catalogued.
    fn invoke_getter(&self, method: &str) -> Result<Value, OutlineError>;

    /// Run the real setter named `method` with an already-coerced value.
    ///
    /// Fails with [`OutlineError::UnknownMember`] when no such setter is
    /// catalogued, or with a coercion error when the value does not fit the
    /// setter's parameter type.
    fn invoke_setter(&mut self, method: &str, value: Value) -> Result<(), OutlineError>;
}
