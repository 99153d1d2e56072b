//! Member handles and call recording
//!
//! The member-reference proxy generated by [`bean!`](macro@crate::bean) identifies
//! accessors without running them: every stub writes the descriptor of the
//! method it stands for into a [`CallRecorder`] and hands back a [`Member`]
//! handle. The recorder keeps only the last invocation, which is exactly
//! what scoped capture (`member_of`) reads back after running a closure
//! against a fresh proxy.

use crate::descriptor::MethodDescriptor;
use std::cell::Cell;
use std::rc::Rc;

/// Opaque handle to a referenced bean member
///
/// Minted only by proxy stubs; resolved against an outline by method
/// identity (name plus signature), never by executing anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Member {
    method: MethodDescriptor,
}

impl Member {
    /// Wrap the descriptor of the referenced method.
    pub const fn new(method: MethodDescriptor) -> Self {
        Self { method }
    }

    /// Descriptor of the referenced method.
    pub fn method(&self) -> MethodDescriptor {
        self.method
    }

    /// Name of the referenced method.
    pub fn name(&self) -> &'static str {
        self.method.name
    }
}

/// Records the last accessor invoked on a member-reference proxy
///
/// Deliberately single-threaded and short-lived; a fresh recorder is created
/// per capture, so concurrent captures never observe each other.
#[derive(Debug, Clone, Default)]
pub struct CallRecorder {
    last: Rc<Cell<Option<Member>>>,
}

impl CallRecorder {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Note an invocation and hand the handle back to the stub's caller.
    pub fn record(&self, member: Member) -> Member {
        self.last.set(Some(member));
        member
    }

    /// Consume the last recorded invocation, if any.
    pub(crate) fn take(&self) -> Option<Member> {
        self.last.take()
    }
}
