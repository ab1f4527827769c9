//! Chip for filters and selections, optionally dismissible.

use std::sync::LazyLock;

use dioxus::prelude::*;
use lattice_style::{StyleResolver, StyleTable, VariantKey};

use crate::components::icons::XIcon;
use crate::slot::IconSlot;

static ROOT: LazyLock<StyleTable> = LazyLock::new(|| {
    StyleTable::builder()
        .base(concat!(
            "inline-flex cursor-pointer items-center font-medium ",
            "transition-colors outline-none focus-visible:ring-2 focus-visible:ring-brand-100",
        ))
        .axis(
            "size",
            [
                ("default", "gap-8 px-12 py-6 text-sm"),
                ("compact", "gap-6 px-10 py-4 text-xs"),
            ],
        )
        .bool_axis("rounded", "rounded-9999", "rounded-6")
        .bool_axis(
            "selected",
            "bg-brand-600 text-base-white hover:bg-brand-700",
            "bg-base-white text-gray-700 ring-1 ring-gray-300 ring-inset hover:bg-gray-50",
        )
        .build()
});

static ICON: LazyLock<StyleTable> = LazyLock::new(|| {
    StyleTable::builder()
        .base("pointer-events-none shrink-0")
        .axis("size", [("default", "size-16"), ("compact", "size-14")])
        .build()
});

static DISMISS: LazyLock<StyleTable> = LazyLock::new(|| {
    StyleTable::builder()
        .base("shrink-0 cursor-pointer rounded-9999 transition-colors")
        .bool_axis(
            "selected",
            "text-base-white/70 hover:text-base-white",
            "text-gray-400 hover:text-gray-600",
        )
        .build()
});

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ChipSize {
    #[default]
    Default,
    Compact,
}

impl VariantKey for ChipSize {
    fn variant_key(&self) -> &'static str {
        match self {
            ChipSize::Default => "default",
            ChipSize::Compact => "compact",
        }
    }
}

#[component]
pub fn Chip(
    #[props(default)] size: ChipSize,
    #[props(default)] selected: bool,
    /// Pill-shaped corners instead of the default small radius.
    #[props(default)]
    rounded: bool,
    /// Shows a dismiss affordance after the label.
    #[props(default)]
    dismissible: bool,
    #[props(default)] icon: Option<IconSlot>,
    #[props(default)] on_press: Option<EventHandler<MouseEvent>>,
    #[props(default)] on_dismiss: Option<EventHandler<MouseEvent>>,
    #[props(default)] class: Option<String>,
    #[props(default = VNode::empty())] children: Element,
) -> Element {
    let resolved = StyleResolver::new(&ROOT)
        .base()
        .axis("size", &size)
        .flag("rounded", rounded)
        .flag("selected", selected)
        .class(class.as_deref())
        .resolve();

    let icon_class = StyleResolver::new(&ICON).base().axis("size", &size).resolve();
    let leading = icon.as_ref().map(|slot| slot.render(&icon_class));

    let press = move |event: MouseEvent| {
        if let Some(handler) = &on_press {
            handler.call(event);
        }
    };

    // A dismissible chip nests a real dismiss button, so its own root must
    // not be a button element.
    if dismissible {
        let dismiss_class = StyleResolver::new(&DISMISS)
            .base()
            .flag("selected", selected)
            .resolve();
        rsx! {
            div {
                role: "button",
                tabindex: 0,
                class: "{resolved}",
                aria_pressed: "{selected}",
                onclick: press,
                {leading}
                span { {children} }
                button {
                    r#type: "button",
                    class: "{dismiss_class}",
                    aria_label: "Dismiss",
                    onclick: move |event| {
                        event.stop_propagation();
                        if let Some(handler) = &on_dismiss {
                            handler.call(event);
                        }
                    },
                    XIcon { class: "size-14" }
                }
            }
        }
    } else {
        rsx! {
            button {
                r#type: "button",
                class: "{resolved}",
                aria_pressed: "{selected}",
                onclick: press,
                {leading}
                span { {children} }
            }
        }
    }
}
