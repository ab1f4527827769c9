//! Sidebar navigation pattern with expanded and collapsed states.
//!
//! `SideNavigation` provides a shared scope its children read for the
//! expanded state. Children rendered outside a `SideNavigation` panic.

use std::sync::LazyLock;

use dioxus::prelude::*;
use lattice_style::{cx, StyleResolver, StyleTable};

use crate::components::avatar::Avatar;
use crate::components::branding::{Branding, BrandingBrand, BrandingSize};
use crate::components::icons::{ChevronDownIcon, DotsVerticalIcon, MenuIcon, SearchIcon};
use crate::components::text_input::{TextInput, TextInputSize, TextInputVariant};
use crate::context::{use_scope, use_synced_signal};
use crate::slot::IconSlot;

static NAV: LazyLock<StyleTable> = LazyLock::new(|| {
    StyleTable::builder()
        .base("flex h-full flex-col bg-brand-900 transition-all duration-200")
        .bool_axis("expanded", "w-[240px]", "w-[64px]")
        .build()
});

static ITEM: LazyLock<StyleTable> = LazyLock::new(|| {
    StyleTable::builder()
        .base(concat!(
            "flex cursor-pointer items-center gap-12 rounded-4 text-base-white/70 transition-colors ",
            "hover:bg-base-white/10 hover:text-base-white",
        ))
        .bool_axis("active", "bg-brand-700 text-base-white", "")
        .bool_axis("expanded", "px-12 py-10", "justify-center p-12")
        .build()
});

static SUB_ITEM: LazyLock<StyleTable> = LazyLock::new(|| {
    StyleTable::builder()
        .base(concat!(
            "flex cursor-pointer items-center rounded-4 py-8 pl-44 pr-12 text-sm text-base-white/70 ",
            "transition-colors hover:bg-base-white/10 hover:text-base-white",
        ))
        .bool_axis("active", "text-base-white", "")
        .build()
});

#[derive(Clone, Copy)]
pub(crate) struct SideNavigationContext {
    pub(crate) expanded: Signal<bool>,
    pub(crate) toggle: EventHandler<()>,
}

#[component]
pub fn SideNavigation(
    #[props(default = BrandingBrand::DesignSystem)] brand: BrandingBrand,
    /// Expanded state; the component owns it but follows this prop when set.
    #[props(default)]
    expanded: Option<bool>,
    #[props(default)] on_expanded_change: Option<EventHandler<bool>>,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let expanded = use_synced_signal(expanded.unwrap_or(true));
    let toggle = EventHandler::new(move |_| {
        let mut expanded = expanded;
        let next = !*expanded.peek();
        expanded.set(next);
        if let Some(handler) = &on_expanded_change {
            handler.call(next);
        }
    });
    use_context_provider(|| SideNavigationContext { expanded, toggle });

    let is_expanded = *expanded.read();
    let nav = StyleResolver::new(&NAV)
        .base()
        .flag("expanded", is_expanded)
        .class(class.as_deref())
        .resolve();
    let branding_row = if is_expanded {
        "flex items-center justify-start px-16 py-16"
    } else {
        "flex items-center justify-center px-16 py-16"
    };

    let lockup = if is_expanded {
        rsx! {
            Branding { brand, size: BrandingSize::Sm }
        }
    } else {
        rsx! {
            button {
                r#type: "button",
                class: "text-base-white",
                aria_label: "Expand navigation",
                onclick: move |_| toggle.call(()),
                MenuIcon { class: "size-24" }
            }
        }
    };

    rsx! {
        nav { class: "{nav}",
            div { class: "{branding_row}", {lockup} }
            {children}
        }
    }
}

#[component]
pub fn SideNavigationSearch(
    #[props(default = String::from("Search..."))] placeholder: String,
    #[props(default)] value: Option<String>,
    #[props(default)] on_change: Option<EventHandler<String>>,
    #[props(default)] class: Option<String>,
) -> Element {
    let scope = use_scope::<SideNavigationContext>("SideNavigationSearch", "SideNavigation");

    if !*scope.expanded.read() {
        let root = cx!("flex justify-center px-12 py-8", class);
        // Collapsed rail swaps the field for a button that expands the nav.
        return rsx! {
            div { class: "{root}",
                button {
                    r#type: "button",
                    class: concat!(
                        "flex size-[40px] items-center justify-center rounded-4 text-base-white/70 ",
                        "transition-colors hover:bg-base-white/10 hover:text-base-white",
                    ),
                    aria_label: "Open search",
                    onclick: move |_| scope.toggle.call(()),
                    SearchIcon { class: "size-20" }
                }
            }
        };
    }

    let root = cx!("px-12 py-8", class);

    rsx! {
        div { class: "{root}",
            TextInput {
                variant: TextInputVariant::Search,
                size: TextInputSize::Compact,
                placeholder,
                value,
                icon: IconSlot::builder(|class| rsx! {
                    SearchIcon { class }
                }),
                oninput: move |event: FormEvent| {
                    if let Some(handler) = &on_change {
                        handler.call(event.value());
                    }
                },
                input_class: "bg-base-white/10 text-base-white ring-transparent placeholder:text-base-white/50",
            }
        }
    }
}

#[component]
pub fn SideNavigationSection(
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let root = cx!("flex flex-1 flex-col gap-4 overflow-y-auto px-12 py-8", class);
    rsx! {
        div { class: "{root}", {children} }
    }
}

#[component]
pub fn SideNavigationItem(
    #[props(into)] label: String,
    #[props(default)] icon: Option<IconSlot>,
    #[props(default)] active: bool,
    /// Submenu visibility, when the item has children.
    #[props(default)]
    open: bool,
    #[props(default)] on_press: Option<EventHandler<MouseEvent>>,
    #[props(default)] on_toggle: Option<EventHandler<()>>,
    #[props(default)] class: Option<String>,
    #[props(default)] children: Option<Element>,
) -> Element {
    let scope = use_scope::<SideNavigationContext>("SideNavigationItem", "SideNavigation");
    let expanded = *scope.expanded.read();
    let has_children = children.is_some();

    let item = StyleResolver::new(&ITEM)
        .base()
        .flag("active", active)
        .flag("expanded", expanded)
        .class(class.as_deref())
        .resolve();

    let glyph = icon.as_ref().map(|slot| {
        let icon = slot.render("size-20 shrink-0");
        rsx! {
            span { class: "size-20 shrink-0", {icon} }
        }
    });

    let expanded_content = expanded.then(|| {
        let chevron = has_children.then(|| {
            let chevron_class = if open {
                "ml-auto size-16 shrink-0 transition-transform rotate-180"
            } else {
                "ml-auto size-16 shrink-0 transition-transform"
            };
            rsx! {
                ChevronDownIcon { class: chevron_class }
            }
        });
        rsx! {
            span { class: "text-md font-medium", "{label}" }
            {chevron}
        }
    });

    let submenu = (expanded && open).then(|| {
        let items = children.clone();
        rsx! {
            div { class: "flex flex-col gap-2", {items} }
        }
    });

    rsx! {
        div {
            button {
                r#type: "button",
                class: "{item}",
                title: if expanded { None } else { Some(label.clone()) },
                onclick: move |event| {
                    if let Some(handler) = &on_press {
                        handler.call(event);
                    }
                    if has_children {
                        if let Some(handler) = &on_toggle {
                            handler.call(());
                        }
                    }
                },
                {glyph}
                {expanded_content}
            }
            {submenu}
        }
    }
}

#[component]
pub fn SideNavigationSubItem(
    #[props(into)] label: String,
    #[props(default)] active: bool,
    #[props(default)] on_press: Option<EventHandler<MouseEvent>>,
    #[props(default)] class: Option<String>,
) -> Element {
    // Scope check only; sub items do not read the expanded state themselves.
    use_scope::<SideNavigationContext>("SideNavigationSubItem", "SideNavigation");

    let item = StyleResolver::new(&SUB_ITEM)
        .base()
        .flag("active", active)
        .class(class.as_deref())
        .resolve();

    rsx! {
        button {
            r#type: "button",
            class: "{item}",
            onclick: move |event| {
                if let Some(handler) = &on_press {
                    handler.call(event);
                }
            },
            "{label}"
        }
    }
}

#[component]
pub fn SideNavigationAccount(
    #[props(into)] name: String,
    #[props(default)] avatar_src: Option<String>,
    #[props(default)] initials: Option<String>,
    #[props(default)] on_settings: Option<EventHandler<MouseEvent>>,
    #[props(default)] class: Option<String>,
) -> Element {
    let scope = use_scope::<SideNavigationContext>("SideNavigationAccount", "SideNavigation");
    let expanded = *scope.expanded.read();

    let root = cx!(
        "flex items-center gap-12 border-t border-base-white/10 px-12 py-12",
        (!expanded).then_some("justify-center"),
        class,
    );

    let details = expanded.then(|| {
        rsx! {
            div { class: "flex flex-1 flex-col overflow-hidden",
                span { class: "truncate text-sm font-medium text-base-white", "{name}" }
            }
            button {
                r#type: "button",
                class: concat!(
                    "flex size-[32px] shrink-0 items-center justify-center rounded-4 text-base-white/70 ",
                    "transition-colors hover:bg-base-white/10 hover:text-base-white",
                ),
                aria_label: "Settings",
                onclick: move |event| {
                    if let Some(handler) = &on_settings {
                        handler.call(event);
                    }
                },
                DotsVerticalIcon { class: "size-16" }
            }
        }
    });

    rsx! {
        div { class: "{root}",
            Avatar {
                name: name.clone(),
                src: avatar_src,
                initials,
                size: crate::components::avatar::AvatarSize::Sm,
            }
            {details}
        }
    }
}
