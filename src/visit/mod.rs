mod places;

pub use places::*;

use derive_new::new;

use crate::transcript::Transcript;

/// One method per kind of place. Which method runs depends on the place,
/// what it does depends on the visitor, so both are picked at run time.
pub trait Visitor {
    fn visit_apartment(&mut self, place: &Apartment, out: &mut Transcript);
    fn visit_grocery_store(&mut self, place: &GroceryStore, out: &mut Transcript);
    fn visit_office(&mut self, place: &Office, out: &mut Transcript);

    fn visits(&self) -> usize;
}

pub trait Visitable: std::fmt::Debug {
    fn accept(&self, visitor: &mut dyn Visitor, out: &mut Transcript);
}

#[derive(Debug, Clone, Default, new)]
pub struct Person {
    #[new(default)]
    visits: usize,
}

impl Visitor for Person {
    fn visit_apartment(&mut self, _place: &Apartment, out: &mut Transcript) {
        self.visits += 1;
        out.text("visiting apartment");
    }

    fn visit_grocery_store(&mut self, _place: &GroceryStore, out: &mut Transcript) {
        self.visits += 1;
        out.text("visiting grocery store");
    }

    fn visit_office(&mut self, _place: &Office, out: &mut Transcript) {
        self.visits += 1;
        out.text("visiting office");
    }

    fn visits(&self) -> usize {
        self.visits
    }
}

/// Same places as a [`Person`], its own wording for each.
#[derive(Debug, Clone, Default, new)]
pub struct Developer {
    #[new(default)]
    visits: usize,
}

impl Visitor for Developer {
    fn visit_apartment(&mut self, _place: &Apartment, out: &mut Transcript) {
        self.visits += 1;
        out.text("developer visiting apartment");
    }

    fn visit_grocery_store(&mut self, _place: &GroceryStore, out: &mut Transcript) {
        self.visits += 1;
        out.text("developer visiting grocery store");
    }

    fn visit_office(&mut self, _place: &Office, out: &mut Transcript) {
        self.visits += 1;
        out.text("developer visiting office");
    }

    fn visits(&self) -> usize {
        self.visits
    }
}

/// Every place is accepted by every visitor, in order.
pub fn tour(
    places: &[Box<dyn Visitable>],
    visitors: &mut [&mut dyn Visitor],
    out: &mut Transcript,
) {
    for place in places {
        for visitor in visitors.iter_mut() {
            place.accept(&mut **visitor, out);
        }
    }
}
