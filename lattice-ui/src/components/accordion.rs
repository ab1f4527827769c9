//! Accordion. Items register their open state with the enclosing
//! `Accordion`, which enforces the single-expanded rule when multiple
//! expansion is off.

use std::sync::LazyLock;

use dioxus::prelude::*;
use lattice_style::{cx, StyleResolver, StyleTable};

use crate::components::icons::ChevronDownIcon;
use crate::context::use_scope;

static TRIGGER: LazyLock<StyleTable> = LazyLock::new(|| {
    StyleTable::builder()
        .base(concat!(
            "flex w-full cursor-pointer items-center justify-between gap-16 px-16 py-12 ",
            "text-left text-md font-semibold text-gray-900 ",
            "outline-none focus-visible:ring-4 focus-visible:ring-brand-100 focus-visible:ring-inset ",
            "disabled:cursor-not-allowed disabled:text-gray-400",
        ))
        .build()
});

static ICON: LazyLock<StyleTable> = LazyLock::new(|| {
    StyleTable::builder()
        .base("size-[24px] shrink-0 text-gray-500 transition-transform duration-200")
        .bool_axis("expanded", "rotate-180", "")
        .build()
});

#[derive(Clone, Copy)]
pub(crate) struct AccordionContext {
    pub(crate) open: Signal<Vec<String>>,
    pub(crate) allows_multiple: bool,
}

impl AccordionContext {
    pub(crate) fn is_open(&self, id: &str) -> bool {
        self.open.read().iter().any(|open| open == id)
    }

    pub(crate) fn toggle(mut self, id: &str) {
        let mut open = self.open.write();
        if let Some(at) = open.iter().position(|entry| entry == id) {
            open.remove(at);
        } else {
            if !self.allows_multiple {
                open.clear();
            }
            open.push(id.to_string());
        }
    }
}

#[component]
pub fn Accordion(
    /// Multiple items may be expanded at once.
    #[props(default = true)]
    allows_multiple: bool,
    /// Item ids expanded on first render.
    #[props(default)]
    default_expanded: Vec<String>,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let open = use_signal(|| {
        if allows_multiple {
            default_expanded.clone()
        } else {
            default_expanded.first().cloned().into_iter().collect()
        }
    });
    use_context_provider(|| AccordionContext { open, allows_multiple });

    let root = cx!("flex flex-col", class);

    rsx! {
        div { class: "{root}", {children} }
    }
}

#[component]
pub fn AccordionItem(
    /// Stable identifier within the accordion.
    #[props(into)]
    id: String,
    #[props(into)] title: String,
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
    #[props(default = VNode::empty())] children: Element,
) -> Element {
    let accordion = use_scope::<AccordionContext>("AccordionItem", "Accordion");
    let expanded = accordion.is_open(&id);

    let root = cx!("group flex flex-col border-b border-gray-200", class);
    let trigger = StyleResolver::new(&TRIGGER).base().resolve();
    let icon = StyleResolver::new(&ICON)
        .base()
        .flag("expanded", expanded)
        .resolve();

    let panel = expanded.then(|| {
        rsx! {
            div { class: "pb-24", {children} }
        }
    });

    rsx! {
        div { class: "{root}",
            h3 {
                button {
                    r#type: "button",
                    class: "{trigger}",
                    disabled,
                    aria_expanded: "{expanded}",
                    onclick: move |_| {
                        if !disabled {
                            accordion.toggle(&id);
                        }
                    },
                    span { "{title}" }
                    ChevronDownIcon { class: icon }
                }
            }
            {panel}
        }
    }
}
