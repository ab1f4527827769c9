//! Pill-shaped on/off toggle button.

use std::sync::LazyLock;

use dioxus::prelude::*;
use lattice_style::{BoolKey, StyleResolver, StyleTable};

static ROOT: LazyLock<StyleTable> = LazyLock::new(|| {
    StyleTable::builder()
        .base(concat!(
            "inline-flex cursor-pointer items-center justify-between gap-10 ",
            "rounded-9999 px-16 py-8 text-base font-medium transition-colors",
        ))
        .bool_axis(
            "selected",
            "bg-brand-600 text-base-white ring-1 ring-brand-700 ring-inset hover:bg-brand-700",
            "bg-base-white text-gray-900 ring-1 ring-gray-300 ring-inset hover:bg-gray-50",
        )
        .build()
});

#[component]
pub fn PillToggle(
    #[props(default)] selected: bool,
    /// Called with the next selected value.
    #[props(default)]
    on_change: Option<EventHandler<bool>>,
    #[props(default)] class: Option<String>,
    #[props(default = VNode::empty())] children: Element,
) -> Element {
    let resolved = StyleResolver::new(&ROOT)
        .base()
        .axis("selected", &BoolKey::from(selected))
        .class(class.as_deref())
        .resolve();

    rsx! {
        button {
            r#type: "button",
            role: "switch",
            aria_checked: "{selected}",
            class: "{resolved}",
            onclick: move |_| {
                if let Some(handler) = &on_change {
                    handler.call(!selected);
                }
            },
            {children}
        }
    }
}
