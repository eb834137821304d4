use crate::{
    handler::{Handle, Handler},
    transcript::Transcript,
};

use super::{AsSubject, Subject};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Base;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VariantA;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VariantB;

/// A variant the [`Handler`] has no entry point for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VariantC;

impl Subject for Base {
    fn identify(&self) -> &'static str {
        "Base"
    }

    fn dispatch_self_to(&self, handler: &Handler, out: &mut Transcript) {
        handler.handle(self, out)
    }
}

impl Subject for VariantA {
    fn identify(&self) -> &'static str {
        "A"
    }

    fn dispatch_self_to(&self, handler: &Handler, out: &mut Transcript) {
        handler.handle(self, out)
    }
}

impl Subject for VariantB {
    fn identify(&self) -> &'static str {
        "B"
    }

    fn dispatch_self_to(&self, handler: &Handler, out: &mut Transcript) {
        handler.handle(self, out)
    }
}

impl Subject for VariantC {
    fn identify(&self) -> &'static str {
        "C"
    }

    // `Handler` does not implement `Handle<VariantC>`, so `self` has to be
    // widened before it can be handed over.
    fn dispatch_self_to(&self, handler: &Handler, out: &mut Transcript) {
        handler.handle(self.as_subject(), out)
    }
}
