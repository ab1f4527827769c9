//! Multi-step progress indicator.
//!
//! Items register with the enclosing `StepIndicator` when they mount and
//! derive their ordinal from their position in the registration order.
//! Position within the sequence (only, start, middle, end) follows from the
//! ordinal and the live registration count, so items added or removed later
//! renumber and reclassify their neighbors.

use std::sync::LazyLock;

use dioxus::prelude::*;
use lattice_style::{cx, StyleResolver, StyleTable, VariantKey};

use crate::components::icons::{CheckIcon, XIcon};
use crate::context::use_scope;

static INDICATOR: LazyLock<StyleTable> = LazyLock::new(|| {
    StyleTable::builder()
        .base("flex items-center justify-center rounded-9999 shrink-0")
        .axis("size", [("default", "size-32"), ("compact", "size-24")])
        .axis(
            "status",
            [
                ("complete", "bg-success-600 text-base-white"),
                ("active", "bg-brand-600 text-base-white"),
                ("incomplete", "bg-base-white text-gray-500 ring-2 ring-gray-300 ring-inset"),
                ("disabled", "bg-gray-100 text-gray-400"),
                ("error", "bg-error-600 text-base-white"),
            ],
        )
        .build()
});

static LABEL: LazyLock<StyleTable> = LazyLock::new(|| {
    StyleTable::builder()
        .base("text-base font-medium")
        .axis(
            "status",
            [
                ("complete", "text-gray-900"),
                ("active", "text-gray-900"),
                ("incomplete", "text-gray-500"),
                ("disabled", "text-gray-400"),
                ("error", "text-error-600"),
            ],
        )
        .build()
});

static DESCRIPTION: LazyLock<StyleTable> = LazyLock::new(|| {
    StyleTable::builder()
        .base("text-xs")
        .axis(
            "status",
            [
                ("complete", "text-gray-500"),
                ("active", "text-gray-500"),
                ("incomplete", "text-gray-400"),
                ("disabled", "text-gray-300"),
                ("error", "text-gray-500"),
            ],
        )
        .build()
});

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum StepStatus {
    Complete,
    Active,
    #[default]
    Incomplete,
    Disabled,
    Error,
}

impl VariantKey for StepStatus {
    fn variant_key(&self) -> &'static str {
        match self {
            StepStatus::Complete => "complete",
            StepStatus::Active => "active",
            StepStatus::Incomplete => "incomplete",
            StepStatus::Disabled => "disabled",
            StepStatus::Error => "error",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum StepSize {
    #[default]
    Default,
    Compact,
}

impl VariantKey for StepSize {
    fn variant_key(&self) -> &'static str {
        match self {
            StepSize::Default => "default",
            StepSize::Compact => "compact",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum StepOrientation {
    #[default]
    Horizontal,
    Vertical,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StepPosition {
    Only,
    Start,
    Middle,
    End,
}

pub(crate) fn step_position(index: usize, total: usize) -> StepPosition {
    if total <= 1 {
        StepPosition::Only
    } else if index == 0 {
        StepPosition::Start
    } else if index + 1 >= total {
        StepPosition::End
    } else {
        StepPosition::Middle
    }
}

/// Connector color. The line before a step turns green once the step is
/// reached; the line after only once the step is complete.
pub(crate) fn line_classes(status: StepStatus) -> (&'static str, &'static str) {
    let reached = matches!(status, StepStatus::Complete | StepStatus::Active | StepStatus::Error);
    let before = if reached { "bg-success-600" } else { "bg-gray-200" };
    let after = if status == StepStatus::Complete { "bg-success-600" } else { "bg-gray-200" };
    (before, after)
}

/// Mounted items in registration order. Indices are positions in `order`,
/// so removing an entry renumbers everything after it.
#[derive(Default)]
pub(crate) struct StepRegistry {
    next_id: u64,
    order: Vec<u64>,
}

impl StepRegistry {
    pub(crate) fn register(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.order.push(id);
        id
    }

    pub(crate) fn release(&mut self, id: u64) {
        self.order.retain(|entry| *entry != id);
    }

    pub(crate) fn index_of(&self, id: u64) -> usize {
        self.order.iter().position(|entry| *entry == id).unwrap_or(0)
    }

    pub(crate) fn len(&self) -> usize {
        self.order.len()
    }
}

#[derive(Clone, Copy)]
pub(crate) struct StepIndicatorContext {
    pub(crate) steps: Signal<StepRegistry>,
    pub(crate) orientation: StepOrientation,
    pub(crate) size: StepSize,
    pub(crate) show_labels: bool,
}

#[component]
pub fn StepIndicator(
    #[props(default)] orientation: StepOrientation,
    #[props(default)] size: StepSize,
    #[props(default = true)] show_labels: bool,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let steps = use_signal(StepRegistry::default);
    use_context_provider(|| StepIndicatorContext { steps, orientation, size, show_labels });

    let layout = match orientation {
        StepOrientation::Horizontal => "flex flex-row items-start",
        StepOrientation::Vertical => "flex flex-col",
    };
    let root = cx!(layout, class);

    rsx! {
        div { class: "{root}", {children} }
    }
}

#[component]
pub fn StepIndicatorItem(
    #[props(default)] status: StepStatus,
    #[props(default)] label: Option<String>,
    #[props(default)] description: Option<String>,
    #[props(default)] class: Option<String>,
    #[props(default = VNode::empty())] children: Element,
) -> Element {
    let indicator = use_scope::<StepIndicatorContext>("StepIndicatorItem", "StepIndicator");

    // Registered once per mount, released on drop. The ordinal is the item's
    // current position in the registry, not the id claimed at mount.
    let id = use_hook(|| {
        let mut steps = indicator.steps;
        let id = steps.write().register();
        id
    });
    use_drop(move || {
        let mut steps = indicator.steps;
        steps.write().release(id);
    });

    let (index, total) = {
        let steps = indicator.steps.read();
        (steps.index_of(id), steps.len())
    };
    let position = step_position(index, total);
    let line_before = matches!(position, StepPosition::Middle | StepPosition::End);
    let line_after = matches!(position, StepPosition::Middle | StepPosition::Start);
    let (before_color, after_color) = line_classes(status);

    let badge = StyleResolver::new(&INDICATOR)
        .base()
        .axis("size", &indicator.size)
        .axis("status", &status)
        .resolve();

    let glyph_size = match indicator.size {
        StepSize::Default => "size-16",
        StepSize::Compact => "size-12",
    };
    let ordinal_text = match indicator.size {
        StepSize::Default => "text-xs font-semibold",
        StepSize::Compact => "text-[10px] font-semibold",
    };
    let badge_content = match status {
        StepStatus::Complete => rsx! {
            CheckIcon { class: glyph_size }
        },
        StepStatus::Error => rsx! {
            XIcon { class: glyph_size }
        },
        _ => rsx! {
            span { class: "{ordinal_text}", "{index + 1}" }
        },
    };

    let labels = (indicator.show_labels && (label.is_some() || description.is_some())).then(|| {
        let container = match indicator.orientation {
            StepOrientation::Horizontal => "flex flex-col items-center mt-8 text-center",
            StepOrientation::Vertical => "flex flex-col ml-12 self-center",
        };
        let title = label.as_ref().map(|label| {
            let class = StyleResolver::new(&LABEL).base().axis("status", &status).resolve();
            rsx! {
                span { class: "{class}", "{label}" }
            }
        });
        let detail = description.as_ref().map(|description| {
            let class = StyleResolver::new(&DESCRIPTION).base().axis("status", &status).resolve();
            rsx! {
                span { class: "{class}", "{description}" }
            }
        });
        rsx! {
            div { class: "{container}",
                {title}
                {detail}
                {children}
            }
        }
    });

    match indicator.orientation {
        StepOrientation::Horizontal => {
            let root = cx!("flex flex-col items-center flex-1", class);
            let before = if line_before { format!("h-2 flex-1 {before_color}") } else { String::from("h-2 flex-1 bg-transparent") };
            let after = if line_after { format!("h-2 flex-1 {after_color}") } else { String::from("h-2 flex-1 bg-transparent") };
            rsx! {
                div { class: "{root}",
                    div { class: "flex w-full items-center",
                        div { class: "{before}" }
                        div { class: "{badge}", {badge_content} }
                        div { class: "{after}" }
                    }
                    {labels}
                }
            }
        }
        StepOrientation::Vertical => {
            let root = cx!("flex flex-row", class);
            let before = if line_before { format!("w-2 flex-1 min-h-24 {before_color}") } else { String::from("w-2 h-0") };
            let after = if line_after { format!("w-2 flex-1 min-h-24 {after_color}") } else { String::from("w-2 h-0") };
            rsx! {
                div { class: "{root}",
                    div { class: "flex flex-col items-center",
                        div { class: "{before}" }
                        div { class: "{badge}", {badge_content} }
                        div { class: "{after}" }
                    }
                    {labels}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_renumbers_after_release() {
        let mut steps = StepRegistry::default();
        let first = steps.register();
        let second = steps.register();
        let third = steps.register();
        assert_eq!(steps.index_of(second), 1);

        steps.release(first);
        assert_eq!(steps.len(), 2);
        assert_eq!(steps.index_of(second), 0);
        assert_eq!(steps.index_of(third), 1);
    }

    #[test]
    fn registry_ids_are_not_reused() {
        let mut steps = StepRegistry::default();
        let first = steps.register();
        steps.release(first);
        let next = steps.register();
        assert_ne!(first, next);
        assert_eq!(steps.index_of(next), 0);
    }

    #[test]
    fn single_step_is_only() {
        assert_eq!(step_position(0, 1), StepPosition::Only);
        assert_eq!(step_position(0, 0), StepPosition::Only);
    }

    #[test]
    fn two_steps_are_start_and_end() {
        assert_eq!(step_position(0, 2), StepPosition::Start);
        assert_eq!(step_position(1, 2), StepPosition::End);
    }

    #[test]
    fn interior_steps_are_middle() {
        assert_eq!(step_position(0, 3), StepPosition::Start);
        assert_eq!(step_position(1, 3), StepPosition::Middle);
        assert_eq!(step_position(2, 3), StepPosition::End);
    }

    #[test]
    fn reached_steps_color_the_line_before() {
        assert_eq!(line_classes(StepStatus::Active).0, "bg-success-600");
        assert_eq!(line_classes(StepStatus::Error).0, "bg-success-600");
        assert_eq!(line_classes(StepStatus::Incomplete).0, "bg-gray-200");
    }

    #[test]
    fn only_complete_steps_color_the_line_after() {
        assert_eq!(line_classes(StepStatus::Complete).1, "bg-success-600");
        assert_eq!(line_classes(StepStatus::Active).1, "bg-gray-200");
    }
}
