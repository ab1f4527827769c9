//! Tab strip with three appearances and a single visible panel.

use std::sync::LazyLock;

use dioxus::prelude::*;
use lattice_style::{cx, StyleResolver, StyleTable, VariantKey};

static TAB_LIST: LazyLock<StyleTable> = LazyLock::new(|| {
    StyleTable::builder()
        .base("flex")
        .axis(
            "appearance",
            [
                ("underline", "gap-0 border-b border-gray-300"),
                ("block", "gap-0 border-b border-gray-300 pb-8"),
                ("block_inverted", "gap-4 rounded-8 bg-gray-800 p-4"),
            ],
        )
        .build()
});

static TAB: LazyLock<StyleTable> = LazyLock::new(|| {
    StyleTable::builder()
        .base(concat!(
            "cursor-pointer px-16 py-8 text-base font-medium outline-none transition-colors ",
            "focus-visible:outline focus-visible:outline-2 focus-visible:outline-offset-2 focus-visible:outline-brand-600",
        ))
        // One axis per appearance so the selected and resting looks stay
        // side by side in the table.
        .axis(
            "underline",
            [
                ("default", "border-b-2 border-transparent text-gray-600 hover:text-gray-900"),
                ("selected", "border-b-2 border-brand-600 text-brand-600"),
            ],
        )
        .axis(
            "block",
            [
                ("default", "rounded-6 text-gray-600 hover:text-gray-900"),
                ("selected", "rounded-6 bg-brand-600 text-base-white shadow-sm"),
            ],
        )
        .axis(
            "block_inverted",
            [
                ("default", "rounded-6 text-gray-300 hover:text-base-white"),
                ("selected", "rounded-6 bg-base-white text-gray-900"),
            ],
        )
        .bool_axis("fill", "flex-1 text-center", "")
        .build()
});

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TabsAppearance {
    #[default]
    Underline,
    Block,
    BlockInverted,
}

impl VariantKey for TabsAppearance {
    fn variant_key(&self) -> &'static str {
        match self {
            TabsAppearance::Underline => "underline",
            TabsAppearance::Block => "block",
            TabsAppearance::BlockInverted => "block_inverted",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum TabState {
    Default,
    Selected,
}

impl VariantKey for TabState {
    fn variant_key(&self) -> &'static str {
        match self {
            TabState::Default => "default",
            TabState::Selected => "selected",
        }
    }
}

/// One tab with its panel content.
#[derive(Clone, PartialEq)]
pub struct TabItem {
    pub id: String,
    pub label: String,
    pub content: Element,
}

impl TabItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>, content: Element) -> Self {
        TabItem { id: id.into(), label: label.into(), content }
    }
}

#[component]
pub fn Tabs(
    items: Vec<TabItem>,
    #[props(default)] appearance: TabsAppearance,
    /// Tabs stretch to fill the container width.
    #[props(default)]
    fill: bool,
    /// Controlled selection; internal state follows it when set.
    #[props(default)]
    selected: Option<String>,
    #[props(default)] on_change: Option<EventHandler<String>>,
    #[props(default)] class: Option<String>,
) -> Element {
    let first_id = items.first().map(|item| item.id.clone()).unwrap_or_default();
    let mut active = use_signal(|| selected.clone().unwrap_or(first_id));
    if let Some(selected) = &selected {
        if *selected != *active.peek() {
            active.set(selected.clone());
        }
    }

    let list = StyleResolver::new(&TAB_LIST)
        .base()
        .axis("appearance", &appearance)
        .resolve();
    let root = cx!("w-full", class);

    let active_id = active.read().clone();
    let panel = items
        .iter()
        .find(|item| item.id == active_id)
        .map(|item| item.content.clone());

    let tabs = items.iter().map(|item| {
        let state = if item.id == active_id { TabState::Selected } else { TabState::Default };
        let tab = StyleResolver::new(&TAB)
            .base()
            .axis(appearance.variant_key(), &state)
            .flag("fill", fill)
            .resolve();
        let id = item.id.clone();
        let selected = state == TabState::Selected;
        rsx! {
            button {
                key: "{item.id}",
                r#type: "button",
                role: "tab",
                aria_selected: "{selected}",
                class: "{tab}",
                onclick: move |_| {
                    active.set(id.clone());
                    if let Some(handler) = &on_change {
                        handler.call(id.clone());
                    }
                },
                "{item.label}"
            }
        }
    });

    rsx! {
        div { class: "{root}",
            div { role: "tablist", class: "{list}", {tabs} }
            div { role: "tabpanel", class: "mt-16 outline-none", {panel} }
        }
    }
}
