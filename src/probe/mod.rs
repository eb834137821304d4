//! Compile-time type versus run-time type of the same value.
//!
//! Through a reference to the concrete type both names agree. Through a
//! `&dyn Subject` the static type collapses to the trait object while the
//! run-time type still names the variant.

use std::any::type_name;
use std::fmt::{self, Display};

use derive_new::new;

use crate::subject::Subject;

pub fn static_type_of<T: ?Sized>(_value: &T) -> &'static str {
    type_name::<T>()
}

pub fn runtime_type_of<S: Subject + ?Sized>(subject: &S) -> &'static str {
    subject.type_name()
}

/// Last path segment of a type name, `dyn` kept.
pub fn short_name(name: &str) -> String {
    let (prefix, path) = match name.strip_prefix("dyn ") {
        Some(path) => ("dyn ", path),
        None => ("", name),
    };
    let last = path.rsplit("::").next().unwrap_or(path);
    format!("{prefix}{last}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct TypeProbe {
    pub static_type: &'static str,
    pub runtime_type: &'static str,
}

impl TypeProbe {
    pub fn of<S: Subject + ?Sized>(subject: &S) -> Self {
        Self::new(static_type_of(subject), runtime_type_of(subject))
    }

    pub fn agrees(&self) -> bool {
        self.static_type == self.runtime_type
    }
}

impl Display for TypeProbe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CT: {}, RT: {}",
            short_name(self.static_type),
            short_name(self.runtime_type)
        )
    }
}
