mod variants;

use std::fmt::Debug;

pub use variants::*;

use crate::handler::{Handle, Handler};
use crate::transcript::Transcript;

/// Explicit upcast of any concrete subject to the base capability.
pub trait AsSubject {
    fn as_subject(&self) -> &dyn Subject;
}

impl<T: Subject> AsSubject for T {
    fn as_subject(&self) -> &dyn Subject {
        self
    }
}

/// The base capability every subject variant shares.
///
/// Calling a [`Handler`] directly picks its entry point from the static type
/// of the argument. [`Subject::dispatch_self_to`] is the first, dynamic half
/// of double dispatch: the override that runs belongs to the real type of
/// `self`, and inside it `self` has that type statically, so the second call
/// into the handler lands on the matching entry point.
pub trait Subject: AsSubject + Debug {
    fn identify(&self) -> &'static str {
        "Base"
    }

    /// Without an override the handler sees `self` as the base capability.
    fn dispatch_self_to(&self, handler: &Handler, out: &mut Transcript) {
        handler.handle(self.as_subject(), out)
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
