//! Switch toggle with an optional indeterminate state.

use std::sync::LazyLock;

use dioxus::prelude::*;
use lattice_style::{StyleResolver, StyleTable, VariantKey};

static ROOT: LazyLock<StyleTable> = LazyLock::new(|| {
    StyleTable::builder()
        .base("group inline-flex cursor-pointer items-center outline-none")
        .build()
});

static TRACK: LazyLock<StyleTable> = LazyLock::new(|| {
    StyleTable::builder()
        .base(concat!(
            "relative flex items-center rounded-9999 transition-colors duration-150 ",
            "group-focus-visible:ring-2 group-focus-visible:ring-brand-600 group-focus-visible:ring-offset-2 ",
            "group-disabled:cursor-not-allowed group-disabled:opacity-50",
        ))
        .axis(
            "size",
            [
                ("default", "h-[32px] w-[52px] px-[2px]"),
                ("compact", "h-[20px] w-[36px] px-[2px]"),
            ],
        )
        .axis(
            "state",
            [
                ("inactive", "bg-gray-400"),
                ("active", "bg-brand-600"),
                ("indeterminate", "bg-brand-600 justify-center"),
            ],
        )
        .build()
});

static KNOB: LazyLock<StyleTable> = LazyLock::new(|| {
    StyleTable::builder()
        .base("block rounded-9999 bg-base-white shadow-sm transition-transform duration-150")
        .axis(
            "size",
            [("default", "h-[28px] w-[28px]"), ("compact", "h-[16px] w-[16px]")],
        )
        .axis(
            "translate",
            [
                ("default", "translate-x-[20px]"),
                ("compact", "translate-x-[16px]"),
            ],
        )
        .build()
});

static INDETERMINATE_KNOB: LazyLock<StyleTable> = LazyLock::new(|| {
    StyleTable::builder()
        .base("block rounded-9999 bg-base-white")
        .axis(
            "size",
            [
                ("default", "h-[6px] w-[20px] mx-auto"),
                ("compact", "h-[4px] w-[12px] mx-auto"),
            ],
        )
        .build()
});

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ToggleSize {
    #[default]
    Default,
    Compact,
}

impl VariantKey for ToggleSize {
    fn variant_key(&self) -> &'static str {
        match self {
            ToggleSize::Default => "default",
            ToggleSize::Compact => "compact",
        }
    }
}

/// Visual state of the track. Indeterminate overrides selected.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToggleState {
    Inactive,
    Active,
    Indeterminate,
}

impl VariantKey for ToggleState {
    fn variant_key(&self) -> &'static str {
        match self {
            ToggleState::Inactive => "inactive",
            ToggleState::Active => "active",
            ToggleState::Indeterminate => "indeterminate",
        }
    }
}

pub(crate) fn toggle_state(selected: bool, indeterminate: bool) -> ToggleState {
    if indeterminate {
        ToggleState::Indeterminate
    } else if selected {
        ToggleState::Active
    } else {
        ToggleState::Inactive
    }
}

#[component]
pub fn Toggle(
    #[props(default)] size: ToggleSize,
    #[props(default)] selected: bool,
    /// Indeterminate visual state; wins over `selected`.
    #[props(default)]
    indeterminate: bool,
    #[props(default)] disabled: bool,
    /// Called with the next selected value.
    #[props(default)]
    on_change: Option<EventHandler<bool>>,
    #[props(default)] class: Option<String>,
) -> Element {
    let state = toggle_state(selected, indeterminate);

    let root = StyleResolver::new(&ROOT)
        .base()
        .class(class.as_deref())
        .resolve();
    let track = StyleResolver::new(&TRACK)
        .base()
        .axis("size", &size)
        .axis("state", &state)
        .resolve();

    let knob = if state == ToggleState::Indeterminate {
        StyleResolver::new(&INDETERMINATE_KNOB)
            .base()
            .axis("size", &size)
            .resolve()
    } else {
        let resolver = StyleResolver::new(&KNOB).base().axis("size", &size);
        if selected {
            resolver.axis("translate", &size).resolve()
        } else {
            resolver.resolve()
        }
    };

    rsx! {
        button {
            r#type: "button",
            role: "switch",
            class: "{root}",
            aria_checked: if indeterminate { "mixed" } else if selected { "true" } else { "false" },
            disabled,
            onclick: move |_| {
                if !disabled {
                    if let Some(handler) = &on_change {
                        handler.call(!selected);
                    }
                }
            },
            span { class: "{track}",
                span { class: "{knob}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indeterminate_overrides_selected() {
        assert_eq!(toggle_state(true, true), ToggleState::Indeterminate);
        assert_eq!(toggle_state(false, true), ToggleState::Indeterminate);
    }

    #[test]
    fn selected_maps_to_active() {
        assert_eq!(toggle_state(true, false), ToggleState::Active);
        assert_eq!(toggle_state(false, false), ToggleState::Inactive);
    }
}
