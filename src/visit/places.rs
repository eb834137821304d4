use crate::transcript::Transcript;

use super::{Visitable, Visitor};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Apartment;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroceryStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Office;

impl Visitable for Apartment {
    fn accept(&self, visitor: &mut dyn Visitor, out: &mut Transcript) {
        visitor.visit_apartment(self, out)
    }
}

impl Visitable for GroceryStore {
    fn accept(&self, visitor: &mut dyn Visitor, out: &mut Transcript) {
        visitor.visit_grocery_store(self, out)
    }
}

impl Visitable for Office {
    fn accept(&self, visitor: &mut dyn Visitor, out: &mut Transcript) {
        visitor.visit_office(self, out)
    }
}
