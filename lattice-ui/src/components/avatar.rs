//! Avatar with image or initials fallback and an optional presence dot.

use std::sync::LazyLock;

use dioxus::prelude::*;
use lattice_style::{StyleResolver, StyleTable, VariantKey};

use crate::components::dot_status::{DotStatus, DotStatusAppearance, DotStatusSize};

static ROOT: LazyLock<StyleTable> =
    LazyLock::new(|| StyleTable::builder().base("relative inline-block").build());

static FRAME: LazyLock<StyleTable> = LazyLock::new(|| {
    StyleTable::builder()
        .axis(
            "size",
            [
                ("sm", "size-[32px]"),
                ("md", "size-[48px]"),
                ("lg", "size-[64px]"),
            ],
        )
        .build()
});

static FALLBACK: LazyLock<StyleTable> = LazyLock::new(|| {
    StyleTable::builder()
        .base("flex items-center justify-center rounded-9999 bg-brand-700 font-bold text-base-white")
        .axis(
            "size",
            [("sm", "text-xs"), ("md", "text-sm"), ("lg", "text-md")],
        )
        .build()
});

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum AvatarSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl VariantKey for AvatarSize {
    fn variant_key(&self) -> &'static str {
        match self {
            AvatarSize::Sm => "sm",
            AvatarSize::Md => "md",
            AvatarSize::Lg => "lg",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AvatarStatus {
    Online,
    Busy,
    Away,
    Offline,
}

impl AvatarStatus {
    fn appearance(self) -> DotStatusAppearance {
        match self {
            AvatarStatus::Online => DotStatusAppearance::Green,
            AvatarStatus::Busy => DotStatusAppearance::Red,
            AvatarStatus::Away => DotStatusAppearance::Orange,
            AvatarStatus::Offline => DotStatusAppearance::Neutral,
        }
    }
}

fn dot_size(size: AvatarSize) -> DotStatusSize {
    match size {
        AvatarSize::Sm => DotStatusSize::Compact,
        AvatarSize::Md => DotStatusSize::Default,
        AvatarSize::Lg => DotStatusSize::Lg,
    }
}

/// First letter of the first and last name parts, uppercased.
pub(crate) fn initials(name: &str) -> String {
    let parts: Vec<&str> = name.split_whitespace().collect();
    match parts.as_slice() {
        [] => String::new(),
        [single] => single.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default(),
        [first, .., last] => {
            let mut out = String::new();
            if let Some(c) = first.chars().next() {
                out.extend(c.to_uppercase());
            }
            if let Some(c) = last.chars().next() {
                out.extend(c.to_uppercase());
            }
            out
        }
    }
}

#[component]
pub fn Avatar(
    /// Full name; used for alt text and computed initials.
    #[props(into)]
    name: String,
    /// Image URL; falls back to initials when absent.
    #[props(default)]
    src: Option<String>,
    /// Overrides computed initials.
    #[props(default)]
    initials: Option<String>,
    #[props(default)] status: Option<AvatarStatus>,
    #[props(default)] size: AvatarSize,
    #[props(default)] class: Option<String>,
) -> Element {
    let root = StyleResolver::new(&ROOT)
        .base()
        .class(class.as_deref())
        .resolve();
    let frame = StyleResolver::new(&FRAME).axis("size", &size).resolve();

    let face = match &src {
        Some(src) => rsx! {
            img {
                src: "{src}",
                alt: "{name}",
                class: "rounded-9999 object-cover {frame}",
            }
        },
        None => {
            let shown = initials.clone().unwrap_or_else(|| self::initials(&name));
            let fallback = StyleResolver::new(&FALLBACK).base().axis("size", &size).resolve();
            rsx! {
                div {
                    class: "{fallback} {frame}",
                    role: "img",
                    aria_label: "{name}",
                    "{shown}"
                }
            }
        }
    };

    let dot = status.map(|status| {
        rsx! {
            DotStatus {
                appearance: status.appearance(),
                size: dot_size(size),
                border: true,
                class: "absolute bottom-0 right-0 ring-base-white",
            }
        }
    });

    rsx! {
        div { class: "{root}",
            {face}
            {dot}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::initials;

    #[test]
    fn two_part_names_use_first_and_last() {
        assert_eq!(initials("John Doe"), "JD");
        assert_eq!(initials("Mary Jane Watson"), "MW");
    }

    #[test]
    fn single_part_names_use_one_letter() {
        assert_eq!(initials("jane"), "J");
    }

    #[test]
    fn whitespace_only_is_empty() {
        assert_eq!(initials("   "), "");
        assert_eq!(initials(""), "");
    }
}
