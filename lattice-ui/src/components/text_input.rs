//! Single-line text input with variant-driven prefix and icon padding.

use std::sync::LazyLock;

use dioxus::prelude::*;
use lattice_style::{cx, StyleResolver, StyleTable, VariantKey};

use crate::slot::IconSlot;

static INPUT: LazyLock<StyleTable> = LazyLock::new(|| {
    StyleTable::builder()
        .base(concat!(
            "w-full font-regular transition duration-100 ease-linear ",
            "bg-gray-50 text-gray-900 ring-1 ring-gray-300 ring-inset ",
            "placeholder:text-gray-400 outline-none ",
            "disabled:cursor-not-allowed disabled:bg-gray-200 disabled:text-gray-400",
        ))
        .axis(
            "size",
            [
                ("default", "h-[40px] rounded-4 text-md"),
                ("compact", "h-[32px] rounded-4 text-sm"),
            ],
        )
        // Horizontal padding depends on whether an icon or prefix occupies
        // the leading edge, at a per-size offset.
        .axis(
            "pad_default",
            [
                ("with_icon", "pl-36 pr-12"),
                ("with_prefix", "pl-36 pr-12"),
                ("plain", "px-12"),
            ],
        )
        .axis(
            "pad_compact",
            [
                ("with_icon", "pl-32 pr-12"),
                ("with_prefix", "pl-32 pr-12"),
                ("plain", "px-12"),
            ],
        )
        .axis(
            "state",
            [
                ("default", "focus:ring-4 focus:ring-brand-100"),
                ("error", "ring-error-300 focus:ring-4 focus:ring-error-100"),
            ],
        )
        .build()
});

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TextInputVariant {
    #[default]
    Text,
    Search,
    Url,
    Action,
    Time,
    Currency,
}

impl TextInputVariant {
    /// Static prefix rendered inside the field's leading edge.
    pub fn prefix(self) -> Option<&'static str> {
        match self {
            TextInputVariant::Url => Some("https://"),
            TextInputVariant::Currency => Some("$"),
            _ => None,
        }
    }

    fn input_type(self) -> &'static str {
        match self {
            TextInputVariant::Search => "search",
            TextInputVariant::Url => "url",
            _ => "text",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TextInputSize {
    #[default]
    Default,
    Compact,
}

impl VariantKey for TextInputSize {
    fn variant_key(&self) -> &'static str {
        match self {
            TextInputSize::Default => "default",
            TextInputSize::Compact => "compact",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TextInputState {
    #[default]
    Default,
    Error,
}

impl VariantKey for TextInputState {
    fn variant_key(&self) -> &'static str {
        match self {
            TextInputState::Default => "default",
            TextInputState::Error => "error",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
struct Padding(&'static str);

impl VariantKey for Padding {
    fn variant_key(&self) -> &'static str {
        self.0
    }
}

#[component]
pub fn TextInput(
    #[props(default)] variant: TextInputVariant,
    #[props(default)] size: TextInputSize,
    #[props(default)] state: TextInputState,
    /// Leading icon; suppresses the variant prefix.
    #[props(default)]
    icon: Option<IconSlot>,
    #[props(default)] disabled: bool,
    #[props(default)] value: Option<String>,
    #[props(default)] placeholder: Option<String>,
    #[props(default)] oninput: Option<EventHandler<FormEvent>>,
    #[props(default)] class: Option<String>,
    #[props(default)] input_class: Option<String>,
) -> Element {
    let has_icon = icon.is_some();
    let prefix = if has_icon { None } else { variant.prefix() };

    let padding = Padding(if has_icon {
        "with_icon"
    } else if prefix.is_some() {
        "with_prefix"
    } else {
        "plain"
    });
    let pad_axis = match size {
        TextInputSize::Default => "pad_default",
        TextInputSize::Compact => "pad_compact",
    };

    let input = StyleResolver::new(&INPUT)
        .base()
        .axis("size", &size)
        .axis(pad_axis, &padding)
        .axis("state", &state)
        .class(input_class.as_deref())
        .resolve();

    let wrapper = cx!("relative flex items-center", class);

    let leading = icon.as_ref().map(|slot| {
        let glyph = slot.render("size-16 shrink-0 text-gray-500");
        rsx! {
            span { class: "pointer-events-none absolute left-12 flex items-center", {glyph} }
        }
    });

    let prefix_node = prefix.map(|prefix| {
        rsx! {
            span { class: "pointer-events-none absolute left-12 flex items-center",
                span { class: "text-gray-500", "{prefix}" }
            }
        }
    });

    rsx! {
        div { class: "{wrapper}",
            {leading}
            {prefix_node}
            input {
                r#type: variant.input_type(),
                class: "{input}",
                disabled,
                value: value.as_deref(),
                placeholder: placeholder.as_deref(),
                oninput: move |event| {
                    if let Some(handler) = &oninput {
                        handler.call(event);
                    }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TextInputVariant;

    #[test]
    fn prefixes_follow_variant() {
        assert_eq!(TextInputVariant::Url.prefix(), Some("https://"));
        assert_eq!(TextInputVariant::Currency.prefix(), Some("$"));
        assert_eq!(TextInputVariant::Text.prefix(), None);
        assert_eq!(TextInputVariant::Search.prefix(), None);
    }
}
