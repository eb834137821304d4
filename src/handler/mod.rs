use std::fmt::{self, Display};

use log::debug;

use crate::{
    subject::{AsSubject, Base, Subject, VariantA, VariantB},
    transcript::Transcript,
};

/// The entry point of a [`Handler`] that ran for a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryPoint {
    Base,
    VariantA,
    VariantB,
}

impl Display for EntryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryPoint::Base => write!(f, "got a base object"),
            EntryPoint::VariantA => write!(f, "got a variantA object"),
            EntryPoint::VariantB => write!(f, "got a variantB object"),
        }
    }
}

/// The overload set of a handler, one implementation per static argument
/// type. `handler.handle(&x, out)` picks the implementation from the type of
/// `x` at the call site and nothing else.
///
/// There is no entry point for [`VariantC`](crate::subject::VariantC); a
/// statically typed one is rejected:
///
/// ```compile_fail
/// use dispatch::{handler::{Handle, Handler}, subject::VariantC, transcript::Transcript};
///
/// let mut out = Transcript::new();
/// Handler.handle(&VariantC, &mut out);
/// ```
///
/// Widening it first resolves to the base entry point:
///
/// ```
/// use dispatch::{handler::{Handle, Handler}, subject::{AsSubject, VariantC}, transcript::Transcript};
///
/// let mut out = Transcript::new();
/// Handler.handle(VariantC.as_subject(), &mut out);
/// assert_eq!(out.render(), vec!["got a base object", "C myFunction called"]);
/// ```
pub trait Handle<S: ?Sized> {
    fn handle(&self, subject: &S, out: &mut Transcript);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Handler;

impl Handler {
    fn report(&self, entry: EntryPoint, subject: &dyn Subject, out: &mut Transcript) {
        debug!("{:?} entry point for {}", entry, subject.type_name());
        out.acknowledge(entry);
        // dynamic, whatever entry point was picked
        out.identify(subject.identify());
    }
}

impl<'s> Handle<dyn Subject + 's> for Handler {
    fn handle(&self, subject: &(dyn Subject + 's), out: &mut Transcript) {
        self.report(EntryPoint::Base, subject, out)
    }
}

impl Handle<Base> for Handler {
    fn handle(&self, subject: &Base, out: &mut Transcript) {
        self.report(EntryPoint::Base, subject.as_subject(), out)
    }
}

impl Handle<VariantA> for Handler {
    fn handle(&self, subject: &VariantA, out: &mut Transcript) {
        self.report(EntryPoint::VariantA, subject, out)
    }
}

impl Handle<VariantB> for Handler {
    fn handle(&self, subject: &VariantB, out: &mut Transcript) {
        self.report(EntryPoint::VariantB, subject, out)
    }
}
