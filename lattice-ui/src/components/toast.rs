//! Toast notification card.

use std::sync::LazyLock;

use dioxus::prelude::*;
use lattice_style::{StyleResolver, StyleTable, VariantKey};

use crate::components::avatar::Avatar;
use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::dot_status::{DotStatus, DotStatusAppearance};
use crate::components::icons::{CheckCircleIcon, CloseIcon};
use crate::slot::IconSlot;

static ROOT: LazyLock<StyleTable> = LazyLock::new(|| {
    StyleTable::builder()
        .base("flex items-start rounded-8 border border-gray-200 bg-base-white shadow-lg")
        .axis(
            "size",
            [
                ("default", "gap-16 p-24"),
                ("condensed", "items-center gap-12 p-16"),
            ],
        )
        .build()
});

static ACTIONS: LazyLock<StyleTable> = LazyLock::new(|| {
    StyleTable::builder()
        .axis("subtle", [("default", "flex gap-24 pt-16"), ("condensed", "flex gap-24 pl-16")])
        .axis("buttons", [("default", "flex gap-12 pt-16"), ("condensed", "flex gap-12 pl-16")])
        .build()
});

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ToastSize {
    #[default]
    Default,
    Condensed,
}

impl VariantKey for ToastSize {
    fn variant_key(&self) -> &'static str {
        match self {
            ToastSize::Default => "default",
            ToastSize::Condensed => "condensed",
        }
    }
}

/// What occupies the toast's leading slot.
#[derive(Clone, PartialEq, Default)]
pub enum ToastAppearance {
    /// An icon; the default check circle unless one is supplied.
    #[default]
    Icon,
    Dot(DotStatusAppearance),
    Avatar {
        name: String,
        src: Option<String>,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ToastActions {
    #[default]
    None,
    Close,
    Subtle,
    Buttons,
}

#[component]
pub fn Toast(
    #[props(into)] title: String,
    /// Shown under the title in the default size only.
    #[props(default)]
    description: Option<String>,
    #[props(default)] appearance: ToastAppearance,
    #[props(default)] actions: ToastActions,
    #[props(default)] size: ToastSize,
    /// Custom icon when `appearance` is `Icon`.
    #[props(default)]
    icon: Option<IconSlot>,
    #[props(default = String::from("Undo"))] primary_action_label: String,
    #[props(default = String::from("Dismiss"))] secondary_action_label: String,
    #[props(default)] on_primary_action: Option<EventHandler<()>>,
    #[props(default)] on_secondary_action: Option<EventHandler<()>>,
    #[props(default)] on_close: Option<EventHandler<()>>,
    #[props(default)] class: Option<String>,
) -> Element {
    let root = StyleResolver::new(&ROOT)
        .base()
        .axis("size", &size)
        .class(class.as_deref())
        .resolve();

    let leading = match &appearance {
        ToastAppearance::Icon => match &icon {
            Some(slot) => slot.render("size-[36px] shrink-0 text-brand-600"),
            None => rsx! {
                CheckCircleIcon { class: "size-[36px] shrink-0 text-brand-600" }
            },
        },
        ToastAppearance::Dot(dot) => rsx! {
            div { class: "flex shrink-0 items-center p-8",
                DotStatus { appearance: *dot }
            }
        },
        ToastAppearance::Avatar { name, src } => rsx! {
            Avatar { name: name.clone(), src: src.clone() }
        },
    };

    let action_row = match actions {
        ToastActions::Subtle => {
            let row = StyleResolver::new(&ACTIONS).axis("subtle", &size).resolve();
            Some(rsx! {
                div { class: "{row}",
                    button {
                        r#type: "button",
                        class: "cursor-pointer text-md font-medium text-brand-600 transition-colors hover:text-brand-700",
                        onclick: move |_| {
                            if let Some(handler) = &on_primary_action {
                                handler.call(());
                            }
                        },
                        "{primary_action_label}"
                    }
                    button {
                        r#type: "button",
                        class: "cursor-pointer text-md font-medium text-gray-900 transition-colors hover:text-gray-700",
                        onclick: move |_| {
                            if let Some(handler) = &on_secondary_action {
                                handler.call(());
                            }
                        },
                        "{secondary_action_label}"
                    }
                }
            })
        }
        ToastActions::Buttons => {
            let row = StyleResolver::new(&ACTIONS).axis("buttons", &size).resolve();
            let button_size = match size {
                ToastSize::Default => ButtonSize::Md,
                ToastSize::Condensed => ButtonSize::Sm,
            };
            Some(rsx! {
                div { class: "{row}",
                    Button {
                        size: button_size,
                        variant: ButtonVariant::Primary,
                        onclick: move |_| {
                            if let Some(handler) = &on_primary_action {
                                handler.call(());
                            }
                        },
                        "{primary_action_label}"
                    }
                    Button {
                        size: button_size,
                        variant: ButtonVariant::Outline,
                        onclick: move |_| {
                            if let Some(handler) = &on_secondary_action {
                                handler.call(());
                            }
                        },
                        "{secondary_action_label}"
                    }
                }
            })
        }
        ToastActions::None | ToastActions::Close => None,
    };

    let close = (actions == ToastActions::Close).then(|| {
        rsx! {
            button {
                r#type: "button",
                class: concat!(
                    "shrink-0 cursor-pointer rounded-4 p-4 text-gray-400 transition-colors ",
                    "hover:bg-gray-100 hover:text-gray-600 ",
                    "focus:outline-none focus-visible:ring-2 focus-visible:ring-brand-600",
                ),
                aria_label: "Close",
                onclick: move |_| {
                    if let Some(handler) = &on_close {
                        handler.call(());
                    }
                },
                CloseIcon {}
            }
        }
    });

    if size == ToastSize::Condensed {
        return rsx! {
            div { role: "alert", class: "{root}",
                {leading}
                span { class: "flex-1 text-md font-semibold text-gray-900", "{title}" }
                {action_row}
                {close}
            }
        };
    }

    let detail = description.as_ref().map(|description| {
        rsx! {
            span { class: "text-md text-gray-500", "{description}" }
        }
    });

    rsx! {
        div { role: "alert", class: "{root}",
            {leading}
            div { class: "flex min-w-0 flex-1 flex-col justify-center",
                span { class: "text-md font-semibold text-gray-900", "{title}" }
                {detail}
                {action_row}
            }
            {close}
        }
    }
}
