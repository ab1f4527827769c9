//! Icon components used by the catalog's own chrome (dismiss buttons,
//! chevrons, status glyphs).
//!
//! All icons use `currentColor` so they inherit text color from utility
//! classes. Sizes default to each icon's natural usage; override with the
//! `class` prop.

use dioxus::prelude::*;

/// Check mark (step complete, selected option).
#[component]
pub fn CheckIcon(#[props(into, default = String::from("size-16"))] class: String) -> Element {
    rsx! {
        svg {
            class: "{class}",
            view_box: "0 0 16 16",
            fill: "currentColor",
            path {
                fill_rule: "evenodd",
                clip_rule: "evenodd",
                d: "M12.416 3.376a.75.75 0 0 1 .208 1.04l-5 7.5a.75.75 0 0 1-1.154.114l-3-3a.75.75 0 0 1 1.06-1.06l2.353 2.353 4.493-6.74a.75.75 0 0 1 1.04-.207Z",
            }
        }
    }
}

/// X mark (dismiss, step error).
#[component]
pub fn XIcon(#[props(into, default = String::from("size-16"))] class: String) -> Element {
    rsx! {
        svg {
            class: "{class}",
            view_box: "0 0 16 16",
            fill: "currentColor",
            path { d: "M5.28 4.22a.75.75 0 0 0-1.06 1.06L6.94 8l-2.72 2.72a.75.75 0 1 0 1.06 1.06L8 9.06l2.72 2.72a.75.75 0 1 0 1.06-1.06L9.06 8l2.72-2.72a.75.75 0 0 0-1.06-1.06L8 6.94 5.28 4.22Z" }
        }
    }
}

/// Stroked close glyph for toast dismiss buttons.
#[component]
pub fn CloseIcon(#[props(into, default = String::from("size-24"))] class: String) -> Element {
    rsx! {
        svg {
            class: "{class}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M18 6L6 18M6 6l12 12" }
        }
    }
}

/// Chevron pointing down (accordion, expandable nav items).
#[component]
pub fn ChevronDownIcon(#[props(into, default = String::from("size-16"))] class: String) -> Element {
    rsx! {
        svg {
            class: "{class}",
            view_box: "0 0 16 16",
            fill: "currentColor",
            path {
                fill_rule: "evenodd",
                clip_rule: "evenodd",
                d: "M4.22 6.22a.75.75 0 011.06 0L8 8.94l2.72-2.72a.75.75 0 111.06 1.06l-3.25 3.25a.75.75 0 01-1.06 0L4.22 7.28a.75.75 0 010-1.06z",
            }
        }
    }
}

/// Caret for dropdown triggers.
#[component]
pub fn CaretDownIcon(#[props(into, default = String::from("size-[20px]"))] class: String) -> Element {
    rsx! {
        svg {
            class: "{class}",
            view_box: "0 0 20 20",
            fill: "currentColor",
            path {
                fill_rule: "evenodd",
                clip_rule: "evenodd",
                d: "M5.23 7.21a.75.75 0 011.06.02L10 11.168l3.71-3.938a.75.75 0 111.08 1.04l-4.25 4.5a.75.75 0 01-1.08 0l-4.25-4.5a.75.75 0 01.02-1.06z",
            }
        }
    }
}

/// Magnifying glass for search affordances.
#[component]
pub fn SearchIcon(#[props(into, default = String::from("size-20"))] class: String) -> Element {
    rsx! {
        svg {
            class: "{class}",
            view_box: "0 0 20 20",
            fill: "currentColor",
            path {
                fill_rule: "evenodd",
                clip_rule: "evenodd",
                d: "M9 3.5a5.5 5.5 0 100 11 5.5 5.5 0 000-11zM2 9a7 7 0 1112.452 4.391l3.328 3.329a.75.75 0 11-1.06 1.06l-3.329-3.328A7 7 0 012 9z",
            }
        }
    }
}

/// Hamburger menu (collapsed navigation).
#[component]
pub fn MenuIcon(#[props(into, default = String::from("size-24"))] class: String) -> Element {
    rsx! {
        svg {
            class: "{class}",
            view_box: "0 0 24 24",
            fill: "currentColor",
            path {
                fill_rule: "evenodd",
                clip_rule: "evenodd",
                d: "M3 6.75A.75.75 0 013.75 6h16.5a.75.75 0 010 1.5H3.75A.75.75 0 013 6.75zM3 12a.75.75 0 01.75-.75h16.5a.75.75 0 010 1.5H3.75A.75.75 0 013 12zm0 5.25a.75.75 0 01.75-.75h16.5a.75.75 0 010 1.5H3.75a.75.75 0 01-.75-.75z",
            }
        }
    }
}

/// Vertical dots (account settings button).
#[component]
pub fn DotsVerticalIcon(#[props(into, default = String::from("size-16"))] class: String) -> Element {
    rsx! {
        svg {
            class: "{class}",
            view_box: "0 0 16 16",
            fill: "currentColor",
            path { d: "M8 2a1.5 1.5 0 110 3 1.5 1.5 0 010-3zM8 6.5a1.5 1.5 0 110 3 1.5 1.5 0 010-3zM9.5 12.5a1.5 1.5 0 11-3 0 1.5 1.5 0 013 0z" }
        }
    }
}

/// Upload arrow for the file dropzone.
#[component]
pub fn UploadIcon(#[props(into, default = String::from("size-[17px]"))] class: String) -> Element {
    rsx! {
        svg {
            class: "{class}",
            view_box: "0 0 17 16",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "1.5",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M14.5 10v2.667A1.334 1.334 0 0 1 13.167 14H3.833A1.334 1.334 0 0 1 2.5 12.667V10" }
            path { d: "M11.833 5.333 8.5 2l-3.333 3.333" }
            path { d: "M8.5 2v8" }
        }
    }
}

/// Filled check circle, the default toast icon.
#[component]
pub fn CheckCircleIcon(#[props(into, default = String::from("size-[36px]"))] class: String) -> Element {
    rsx! {
        svg {
            class: "{class}",
            view_box: "0 0 36 36",
            fill: "currentColor",
            path {
                fill_rule: "evenodd",
                clip_rule: "evenodd",
                d: "M18 33C26.2843 33 33 26.2843 33 18C33 9.71573 26.2843 3 18 3C9.71573 3 3 9.71573 3 18C3 26.2843 9.71573 33 18 33ZM25.2803 14.7803C25.5732 14.4874 25.5732 14.0126 25.2803 13.7197C24.9874 13.4268 24.5126 13.4268 24.2197 13.7197L15.75 22.1893L11.7803 18.2197C11.4874 17.9268 11.0126 17.9268 10.7197 18.2197C10.4268 18.5126 10.4268 18.9874 10.7197 19.2803L15.2197 23.7803C15.5126 24.0732 15.9874 24.0732 16.2803 23.7803L25.2803 14.7803Z",
            }
        }
    }
}
