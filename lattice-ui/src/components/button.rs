//! Button component with size and visual-variant axes.

use std::sync::LazyLock;

use dioxus::prelude::*;
use lattice_style::{StyleResolver, StyleTable, VariantKey};

use crate::slot::IconSlot;

static ROOT: LazyLock<StyleTable> = LazyLock::new(|| {
    StyleTable::builder()
        .base(concat!(
            "group relative inline-flex cursor-pointer items-center justify-center ",
            "whitespace-nowrap font-semibold transition duration-100 ease-linear ",
            "outline-none focus-visible:ring-4 focus-visible:ring-brand-100 ",
            "disabled:cursor-not-allowed",
        ))
        .axis(
            "size",
            [
                ("xs", "gap-4 rounded-6 px-8 py-4 text-xs"),
                ("sm", "gap-6 rounded-8 px-12 py-8 text-sm"),
                ("md", "gap-8 rounded-8 px-14 py-10 text-sm"),
                ("lg", "gap-8 rounded-8 px-18 py-12 text-md"),
            ],
        )
        .axis(
            "variant",
            [
                (
                    "primary",
                    "bg-brand-600 text-base-white shadow-sm hover:bg-brand-700 disabled:bg-gray-100 disabled:text-gray-400",
                ),
                (
                    "soft",
                    "bg-brand-100 text-brand-700 hover:bg-brand-200 disabled:bg-gray-100 disabled:text-gray-400",
                ),
                (
                    "outline",
                    "bg-base-white text-brand-600 ring-1 ring-brand-600 ring-inset hover:bg-brand-50 disabled:text-gray-400 disabled:ring-gray-200",
                ),
                (
                    "text",
                    "text-brand-600 hover:text-brand-700 disabled:text-gray-400 [&>[data-text]]:underline [&>[data-text]]:decoration-transparent [&>[data-text]]:underline-offset-2 hover:[&>[data-text]]:decoration-current",
                ),
                ("ghost", "text-gray-700 hover:bg-gray-100 disabled:text-gray-400"),
                (
                    "destructive",
                    "bg-error-600 text-base-white shadow-sm hover:bg-error-700 disabled:bg-gray-100 disabled:text-gray-400",
                ),
            ],
        )
        .build()
});

static ICON: LazyLock<StyleTable> = LazyLock::new(|| {
    StyleTable::builder()
        .base("pointer-events-none shrink-0")
        .axis(
            "size",
            [
                ("xs", "size-[14px]"),
                ("sm", "size-[16px]"),
                ("md", "size-[18px]"),
                ("lg", "size-[20px]"),
            ],
        )
        .build()
});

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonSize {
    Xs,
    Sm,
    #[default]
    Md,
    Lg,
}

impl VariantKey for ButtonSize {
    fn variant_key(&self) -> &'static str {
        match self {
            ButtonSize::Xs => "xs",
            ButtonSize::Sm => "sm",
            ButtonSize::Md => "md",
            ButtonSize::Lg => "lg",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Soft,
    Outline,
    Text,
    Ghost,
    Destructive,
}

impl VariantKey for ButtonVariant {
    fn variant_key(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Soft => "soft",
            ButtonVariant::Outline => "outline",
            ButtonVariant::Text => "text",
            ButtonVariant::Ghost => "ghost",
            ButtonVariant::Destructive => "destructive",
        }
    }
}

/// Button, or a link styled as one when `href` is set.
#[component]
pub fn Button(
    #[props(default)] size: ButtonSize,
    #[props(default)] variant: ButtonVariant,
    #[props(default)] disabled: bool,
    /// Icon before the label.
    #[props(default)]
    icon_leading: Option<IconSlot>,
    /// Icon after the label.
    #[props(default)]
    icon_trailing: Option<IconSlot>,
    /// Square icon-only rendering; set when no label content is given.
    #[props(default)]
    icon_only: bool,
    /// Renders an anchor instead of a button.
    #[props(default)]
    href: Option<String>,
    #[props(default)] target: Option<String>,
    #[props(default)] rel: Option<String>,
    #[props(default)] class: Option<String>,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    #[props(default = VNode::empty())] children: Element,
) -> Element {
    let resolved = StyleResolver::new(&ROOT)
        .base()
        .axis("size", &size)
        .axis("variant", &variant)
        .raw_if(icon_only, "aspect-square p-0")
        .class(class.as_deref())
        .resolve();

    let icon_class = StyleResolver::new(&ICON).base().axis("size", &size).resolve();

    let leading = icon_leading.as_ref().map(|slot| slot.render(&icon_class));
    let trailing = icon_trailing.as_ref().map(|slot| slot.render(&icon_class));

    let content = rsx! {
        {leading}
        if !icon_only {
            span { "data-text": "true", {children} }
        }
        {trailing}
    };

    if let Some(href) = href {
        return rsx! {
            a {
                href: if disabled { None } else { Some(href) },
                target: target.as_deref(),
                rel: rel.as_deref(),
                class: "{resolved}",
                aria_disabled: if disabled { Some("true") } else { None },
                {content}
            }
        };
    }

    rsx! {
        button {
            r#type: "button",
            class: "{resolved}",
            disabled,
            onclick: move |event| {
                if !disabled {
                    if let Some(handler) = &onclick {
                        handler.call(event);
                    }
                }
            },
            {content}
        }
    }
}
