//! Colored status dot.

use std::sync::LazyLock;

use dioxus::prelude::*;
use lattice_style::{StyleResolver, StyleTable, VariantKey};

static DOT: LazyLock<StyleTable> = LazyLock::new(|| {
    StyleTable::builder()
        .base("inline-block shrink-0 rounded-9999")
        .axis(
            "size",
            [
                ("compact", "size-8"),
                ("default", "size-12"),
                ("lg", "size-16"),
            ],
        )
        .axis(
            "appearance",
            [
                ("neutral", "bg-gray-200"),
                ("red", "bg-error-600"),
                ("orange", "bg-warning-500"),
                ("yellow", "bg-yellow-300"),
                ("celery", "bg-lime-400"),
                ("green", "bg-success-600"),
                ("sky", "bg-sky-600"),
                ("cyan", "bg-cyan-600"),
                ("blue", "bg-blue-700"),
                ("indigo", "bg-indigo-600"),
                ("purple", "bg-purple-700"),
                ("fuchsia", "bg-fuchsia-600"),
                ("magenta", "bg-rose-600"),
                ("inverse", "bg-gray-800"),
            ],
        )
        .bool_axis("border", "ring-2 ring-gray-200", "")
        .build()
});

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum DotStatusSize {
    Compact,
    #[default]
    Default,
    Lg,
}

impl VariantKey for DotStatusSize {
    fn variant_key(&self) -> &'static str {
        match self {
            DotStatusSize::Compact => "compact",
            DotStatusSize::Default => "default",
            DotStatusSize::Lg => "lg",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum DotStatusAppearance {
    #[default]
    Neutral,
    Red,
    Orange,
    Yellow,
    Celery,
    Green,
    Sky,
    Cyan,
    Blue,
    Indigo,
    Purple,
    Fuchsia,
    Magenta,
    Inverse,
}

impl VariantKey for DotStatusAppearance {
    fn variant_key(&self) -> &'static str {
        match self {
            DotStatusAppearance::Neutral => "neutral",
            DotStatusAppearance::Red => "red",
            DotStatusAppearance::Orange => "orange",
            DotStatusAppearance::Yellow => "yellow",
            DotStatusAppearance::Celery => "celery",
            DotStatusAppearance::Green => "green",
            DotStatusAppearance::Sky => "sky",
            DotStatusAppearance::Cyan => "cyan",
            DotStatusAppearance::Blue => "blue",
            DotStatusAppearance::Indigo => "indigo",
            DotStatusAppearance::Purple => "purple",
            DotStatusAppearance::Fuchsia => "fuchsia",
            DotStatusAppearance::Magenta => "magenta",
            DotStatusAppearance::Inverse => "inverse",
        }
    }
}

#[component]
pub fn DotStatus(
    #[props(default)] appearance: DotStatusAppearance,
    #[props(default)] size: DotStatusSize,
    #[props(default)] border: bool,
    #[props(default)] class: Option<String>,
) -> Element {
    let resolved = StyleResolver::new(&DOT)
        .base()
        .axis("size", &size)
        .axis("appearance", &appearance)
        .flag("border", border)
        .class(class.as_deref())
        .resolve();

    rsx! {
        span {
            class: "{resolved}",
            role: "status",
            aria_label: "{appearance.variant_key()} status",
        }
    }
}
