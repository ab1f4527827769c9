//! Dropdown trigger button.

use std::sync::LazyLock;

use dioxus::prelude::*;
use lattice_style::{StyleResolver, StyleTable, VariantKey};

use crate::components::icons::CaretDownIcon;

static ROOT: LazyLock<StyleTable> = LazyLock::new(|| {
    StyleTable::builder()
        .base(concat!(
            "group inline-flex w-full cursor-pointer items-center justify-between ",
            "font-regular transition duration-100 ease-linear ",
            "bg-gray-50 text-gray-900 ring-1 ring-gray-300 ring-inset outline-none ",
            "disabled:cursor-not-allowed disabled:bg-gray-200 disabled:text-gray-400",
        ))
        .axis(
            "size",
            [
                ("default", "gap-4 rounded-4 px-16 py-10 text-md"),
                ("condensed", "gap-4 rounded-4 px-14 py-8 text-sm"),
            ],
        )
        .axis(
            "state",
            [
                ("default", "focus:ring-4 focus:ring-brand-100"),
                ("error", "text-error-600 ring-error-300 focus:ring-4 focus:ring-error-100"),
            ],
        )
        .build()
});

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum DropdownSize {
    #[default]
    Default,
    Condensed,
}

impl VariantKey for DropdownSize {
    fn variant_key(&self) -> &'static str {
        match self {
            DropdownSize::Default => "default",
            DropdownSize::Condensed => "condensed",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum DropdownState {
    #[default]
    Default,
    Error,
}

impl VariantKey for DropdownState {
    fn variant_key(&self) -> &'static str {
        match self {
            DropdownState::Default => "default",
            DropdownState::Error => "error",
        }
    }
}

#[component]
pub fn Dropdown(
    #[props(default)] size: DropdownSize,
    #[props(default)] state: DropdownState,
    /// Selected value text; the placeholder shows when absent.
    #[props(default)]
    label: Option<String>,
    #[props(default = String::from("Select an option"))] placeholder: String,
    #[props(default)] disabled: bool,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    #[props(default)] class: Option<String>,
) -> Element {
    let resolved = StyleResolver::new(&ROOT)
        .base()
        .axis("size", &size)
        .axis("state", &state)
        .class(class.as_deref())
        .resolve();

    let shown = label.as_deref().unwrap_or(&placeholder);

    rsx! {
        button {
            r#type: "button",
            class: "{resolved}",
            disabled,
            aria_haspopup: "listbox",
            onclick: move |event| {
                if !disabled {
                    if let Some(handler) = &onclick {
                        handler.call(event);
                    }
                }
            },
            span { class: "truncate", "{shown}" }
            CaretDownIcon { class: "pointer-events-none size-[20px] shrink-0 text-gray-500" }
        }
    }
}
