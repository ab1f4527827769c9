//! Icon slot sum type.
//!
//! Icon-bearing components accept either a pre-built element (rendered
//! untouched) or a builder invoked with the class the component resolved for
//! its icon size. A closed enum decides this at the call site, so there is no
//! runtime guessing about what kind of value landed in the slot.

use dioxus::prelude::*;

#[derive(Clone, PartialEq)]
pub enum IconSlot {
    /// A finished element; the component's icon class is not applied.
    Node(Element),
    /// Invoked with the resolved icon class to build the element.
    Builder(Callback<String, Element>),
}

impl IconSlot {
    pub fn node(element: Element) -> Self {
        IconSlot::Node(element)
    }

    pub fn builder(build: impl FnMut(String) -> Element + 'static) -> Self {
        IconSlot::Builder(Callback::new(build))
    }

    pub fn render(&self, class: &str) -> Element {
        match self {
            IconSlot::Node(element) => element.clone(),
            IconSlot::Builder(build) => build.call(class.to_string()),
        }
    }
}
