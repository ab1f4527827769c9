//! Radio group. `Radio` reads its selection from the enclosing
//! `RadioGroup` context and panics when used outside one.

use std::sync::LazyLock;

use dioxus::prelude::*;
use lattice_style::{cx, StyleResolver, StyleTable};

use crate::context::{use_scope, use_synced_signal};

static INDICATOR: LazyLock<StyleTable> = LazyLock::new(|| {
    StyleTable::builder()
        .base(concat!(
            "flex size-[20px] shrink-0 items-center justify-center rounded-9999 ",
            "group-focus-visible:outline group-focus-visible:outline-2 ",
            "group-focus-visible:outline-offset-2 group-focus-visible:outline-brand-600",
        ))
        .bool_axis(
            "selected",
            "bg-base-white ring-[6px] ring-brand-600",
            "bg-base-white ring-1 ring-gray-300 ring-inset",
        )
        .bool_axis("disabled", "cursor-not-allowed bg-gray-100 ring-gray-200", "")
        .build()
});

static LABEL: LazyLock<StyleTable> = LazyLock::new(|| {
    StyleTable::builder()
        .base("text-md text-gray-900")
        .bool_axis("disabled", "text-gray-400", "")
        .build()
});

#[derive(Clone, Copy)]
pub(crate) struct RadioGroupContext {
    pub(crate) value: Signal<Option<String>>,
    pub(crate) disabled: Signal<bool>,
    pub(crate) on_change: EventHandler<String>,
}

#[component]
pub fn RadioGroup(
    /// Selected radio value.
    #[props(default)]
    value: Option<String>,
    #[props(default)] disabled: bool,
    #[props(default)] on_change: Option<EventHandler<String>>,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let value = use_synced_signal(value);
    let disabled = use_synced_signal(disabled);
    let on_change = EventHandler::new(move |next: String| {
        if let Some(handler) = &on_change {
            handler.call(next);
        }
    });
    use_context_provider(|| RadioGroupContext { value, disabled, on_change });

    let root = cx!("flex flex-col gap-12", class);

    rsx! {
        div { role: "radiogroup", class: "{root}", {children} }
    }
}

#[component]
pub fn Radio(
    /// Value reported to the group when this radio is chosen.
    #[props(into)]
    value: String,
    #[props(default = true)] show_label: bool,
    /// Disables this radio even when the group is enabled.
    #[props(default)]
    disabled: bool,
    #[props(default)] class: Option<String>,
    #[props(default = VNode::empty())] children: Element,
) -> Element {
    let group = use_scope::<RadioGroupContext>("Radio", "RadioGroup");

    let selected = group.value.read().as_deref() == Some(value.as_str());
    let disabled = disabled || *group.disabled.read();

    let root = cx!("group flex cursor-pointer items-center gap-12 outline-none", class);
    let indicator = StyleResolver::new(&INDICATOR)
        .base()
        .flag("selected", selected)
        .flag("disabled", disabled)
        .resolve();

    let label = (show_label).then(|| {
        let label_class = StyleResolver::new(&LABEL)
            .base()
            .flag("disabled", disabled)
            .resolve();
        rsx! {
            span { class: "{label_class}", {children} }
        }
    });

    rsx! {
        button {
            r#type: "button",
            role: "radio",
            aria_checked: "{selected}",
            class: "{root}",
            disabled,
            onclick: move |_| {
                if !disabled {
                    group.on_change.call(value.clone());
                }
            },
            span { class: "{indicator}" }
            {label}
        }
    }
}
