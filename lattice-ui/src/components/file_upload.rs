//! File-upload dropzone.

use std::sync::LazyLock;

use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;
use lattice_style::{StyleResolver, StyleTable, VariantKey};

use crate::components::icons::UploadIcon;
use crate::slot::IconSlot;

static ROOT: LazyLock<StyleTable> = LazyLock::new(|| {
    StyleTable::builder()
        .base(concat!(
            "flex cursor-pointer flex-col items-center gap-4 rounded-6 border-2 border-dashed p-24 transition-colors ",
            "focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-brand-600 focus-visible:ring-offset-2",
        ))
        .axis(
            "state",
            [
                ("default", "border-gray-300 bg-base-white hover:border-gray-400 hover:bg-gray-50"),
                ("drag_active", "border-brand-500 bg-brand-50"),
                ("disabled", "cursor-not-allowed border-gray-200 bg-gray-50 opacity-60"),
                ("error", "border-error-500 bg-error-50"),
            ],
        )
        .build()
});

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FileUploadState {
    Default,
    DragActive,
    Disabled,
    Error,
}

impl VariantKey for FileUploadState {
    fn variant_key(&self) -> &'static str {
        match self {
            FileUploadState::Default => "default",
            FileUploadState::DragActive => "drag_active",
            FileUploadState::Disabled => "disabled",
            FileUploadState::Error => "error",
        }
    }
}

/// Disabled beats error beats an active drag.
pub(crate) fn upload_state(disabled: bool, error: bool, drag_active: bool) -> FileUploadState {
    if disabled {
        FileUploadState::Disabled
    } else if error {
        FileUploadState::Error
    } else if drag_active {
        FileUploadState::DragActive
    } else {
        FileUploadState::Default
    }
}

#[component]
pub fn FileUpload(
    #[props(default = String::from("Drop files here or click to upload"))] instructions: String,
    #[props(default = String::from("PNG, JPG up to 10MB"))] file_types_hint: String,
    #[props(default)] icon: Option<IconSlot>,
    /// Accept attribute for the hidden input, e.g. "image/*,.pdf".
    #[props(default)]
    accept: Option<String>,
    #[props(default)] multiple: bool,
    #[props(default)] disabled: bool,
    #[props(default)] error: bool,
    /// Called with the dropped or picked files. Empty drops are ignored.
    #[props(default)]
    on_files: Option<EventHandler<Vec<FileData>>>,
    #[props(default)] class: Option<String>,
) -> Element {
    let mut drag_active = use_signal(|| false);

    let state = upload_state(disabled, error, *drag_active.read());
    let resolved = StyleResolver::new(&ROOT)
        .base()
        .axis("state", &state)
        .class(class.as_deref())
        .resolve();

    let emit = move |files: Vec<FileData>| {
        if !files.is_empty() {
            if let Some(handler) = &on_files {
                handler.call(files);
            }
        }
    };

    let glyph = match &icon {
        Some(slot) => slot.render("size-[17px] text-gray-500"),
        None => rsx! {
            UploadIcon { class: "size-[17px] text-gray-500" }
        },
    };

    let hint = (!file_types_hint.is_empty()).then(|| {
        rsx! {
            div { class: "text-center text-xs text-gray-500", "{file_types_hint}" }
        }
    });

    rsx! {
        label {
            role: "button",
            tabindex: if disabled { -1 } else { 0 },
            aria_disabled: "{disabled}",
            class: "{resolved}",
            ondragover: move |event| {
                event.prevent_default();
                if !disabled {
                    drag_active.set(true);
                }
            },
            ondragleave: move |event| {
                event.prevent_default();
                drag_active.set(false);
            },
            ondrop: move |event| {
                event.prevent_default();
                drag_active.set(false);
                if !disabled {
                    emit(event.data().files());
                }
            },
            input {
                r#type: "file",
                accept: accept.as_deref(),
                multiple,
                disabled,
                class: "sr-only",
                aria_hidden: "true",
                onchange: move |event| {
                    emit(event.data().files());
                },
            }
            {glyph}
            div { class: "text-center text-sm font-medium text-gray-900", "{instructions}" }
            {hint}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_wins_over_everything() {
        assert_eq!(upload_state(true, true, true), FileUploadState::Disabled);
    }

    #[test]
    fn error_wins_over_drag() {
        assert_eq!(upload_state(false, true, true), FileUploadState::Error);
        assert_eq!(upload_state(false, false, true), FileUploadState::DragActive);
        assert_eq!(upload_state(false, false, false), FileUploadState::Default);
    }
}
