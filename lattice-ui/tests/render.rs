//! Server-side render checks for the component catalog.

use dioxus::prelude::*;
use lattice_ui::*;

fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    // Flush scopes dirtied during the first pass, e.g. registration counters.
    dom.render_immediate(&mut dioxus::dioxus_core::NoOpMutations);
    dioxus_ssr::render(&dom)
}

#[test]
fn button_resolves_size_and_variant_classes() {
    fn app() -> Element {
        rsx! {
            Button { size: ButtonSize::Lg, variant: ButtonVariant::Destructive, "Delete" }
        }
    }
    let html = render(app);
    assert!(html.contains("px-18"));
    assert!(html.contains("bg-error-600"));
    assert!(html.contains("Delete"));
}

#[test]
fn icon_only_button_clears_label_padding() {
    fn app() -> Element {
        rsx! {
            Button {
                icon_only: true,
                icon_leading: IconSlot::builder(|class| rsx! {
                    CheckIcon { class }
                }),
            }
        }
    }
    let html = render(app);
    assert!(html.contains("aspect-square"));
    assert!(html.contains("p-0"));
    assert!(!html.contains("px-14"));
    assert!(!html.contains("py-10"));
}

#[test]
fn caller_class_wins_over_table_fragments() {
    fn app() -> Element {
        rsx! {
            Button { class: "bg-[#A259FF]", "Brand" }
        }
    }
    let html = render(app);
    assert!(html.contains("bg-[#A259FF]"));
    assert!(!html.contains("bg-brand-600"));
}

#[test]
fn indeterminate_toggle_renders_mixed() {
    fn app() -> Element {
        rsx! {
            Toggle { selected: true, indeterminate: true }
        }
    }
    let html = render(app);
    assert!(html.contains(r#"aria-checked="mixed""#));
    assert!(html.contains("justify-center"));
}

#[test]
fn radio_group_marks_the_selected_item() {
    fn app() -> Element {
        rsx! {
            RadioGroup { value: String::from("b"),
                Radio { value: "a", "First" }
                Radio { value: "b", "Second" }
            }
        }
    }
    let html = render(app);
    assert!(html.contains(r#"aria-checked="true""#));
    assert!(html.contains(r#"aria-checked="false""#));
    assert!(html.contains("ring-[6px]"));
}

#[test]
fn step_items_take_sequential_ordinals() {
    fn app() -> Element {
        rsx! {
            StepIndicator {
                StepIndicatorItem { status: StepStatus::Complete, label: "One" }
                StepIndicatorItem { status: StepStatus::Active, label: "Two" }
                StepIndicatorItem { label: "Three" }
            }
        }
    }
    let html = render(app);
    assert!(html.contains(">2<"));
    assert!(html.contains(">3<"));
    assert!(html.contains("Three"));
}

#[test]
fn steps_renumber_after_an_item_unmounts() {
    static SHOW_FIRST: GlobalSignal<bool> = Signal::global(|| true);

    fn app() -> Element {
        let first = SHOW_FIRST().then(|| {
            rsx! {
                StepIndicatorItem { status: StepStatus::Active, label: "One" }
            }
        });
        rsx! {
            StepIndicator {
                {first}
                StepIndicatorItem { label: "Two" }
                StepIndicatorItem { label: "Three" }
            }
        }
    }

    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dom.render_immediate(&mut dioxus::dioxus_core::NoOpMutations);
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains(">1<"));
    assert!(html.contains(">3<"));

    dom.in_runtime(|| *SHOW_FIRST.write() = false);
    dom.render_immediate(&mut dioxus::dioxus_core::NoOpMutations);
    dom.render_immediate(&mut dioxus::dioxus_core::NoOpMutations);
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains(">1<"));
    assert!(html.contains(">2<"));
    assert!(!html.contains(">3<"));
}

#[test]
fn wrapper_class_override_wins_conflicts() {
    fn app() -> Element {
        rsx! {
            RadioGroup { class: "flex-row",
                Radio { value: "a", "First" }
            }
        }
    }
    let html = render(app);
    assert!(html.contains("flex-row"));
    assert!(!html.contains("flex-col"));
}

#[test]
fn dismissible_chip_root_is_not_a_button() {
    fn app() -> Element {
        rsx! {
            Chip { dismissible: true, "Filter" }
        }
    }
    let html = render(app);
    assert_eq!(html.matches("<button").count(), 1);
    assert!(html.contains(r#"aria-label="Dismiss""#));
    assert!(html.contains(r#"role="button""#));
}

#[test]
fn file_upload_reflects_the_error_state() {
    fn app() -> Element {
        rsx! {
            FileUpload { error: true }
        }
    }
    let html = render(app);
    assert!(html.contains("border-error-500"));
    assert!(html.contains("Drop files here"));
}

#[test]
fn lone_step_has_no_connectors() {
    fn app() -> Element {
        rsx! {
            StepIndicator {
                StepIndicatorItem { status: StepStatus::Active, label: "Solo" }
            }
        }
    }
    let html = render(app);
    assert!(!html.contains("bg-success-600"));
}

#[test]
#[should_panic(expected = "must be used within")]
fn compound_child_outside_its_root_panics() {
    fn app() -> Element {
        rsx! {
            StepIndicatorItem { label: "Orphan" }
        }
    }
    render(app);
}

#[test]
fn tabs_render_only_the_active_panel() {
    fn app() -> Element {
        rsx! {
            Tabs {
                items: vec![
                    TabItem::new("one", "One", rsx! {
                        p { "first panel" }
                    }),
                    TabItem::new("two", "Two", rsx! {
                        p { "second panel" }
                    }),
                ],
            }
        }
    }
    let html = render(app);
    assert!(html.contains("first panel"));
    assert!(!html.contains("second panel"));
    assert!(html.contains(r#"aria-selected="true""#));
}

#[test]
fn accordion_expands_only_listed_items() {
    fn app() -> Element {
        rsx! {
            Accordion { default_expanded: vec![String::from("b")],
                AccordionItem { id: "a", title: "First", p { "first body" } }
                AccordionItem { id: "b", title: "Second", p { "second body" } }
            }
        }
    }
    let html = render(app);
    assert!(!html.contains("first body"));
    assert!(html.contains("second body"));
    assert!(html.contains("rotate-180"));
}

#[test]
fn condensed_toast_skips_the_description() {
    fn app() -> Element {
        rsx! {
            Toast {
                title: "Saved",
                description: Some(String::from("All changes synced")),
                size: ToastSize::Condensed,
            }
        }
    }
    let html = render(app);
    assert!(html.contains("Saved"));
    assert!(!html.contains("All changes synced"));
}

#[test]
fn collapsed_side_navigation_swaps_search_for_a_button() {
    fn app() -> Element {
        rsx! {
            SideNavigation { expanded: false,
                SideNavigationSearch {}
                SideNavigationSection {
                    SideNavigationItem { label: "Dashboard" }
                }
            }
        }
    }
    let html = render(app);
    assert!(html.contains(r#"aria-label="Open search""#));
    assert!(!html.contains("<input"));
    assert!(html.contains("w-[64px]"));
    // Collapsed items keep their label as a tooltip.
    assert!(html.contains(r#"title="Dashboard""#));
}

#[test]
fn avatar_without_image_shows_initials() {
    fn app() -> Element {
        rsx! {
            Avatar { name: "Mary Jane Watson", status: AvatarStatus::Online }
        }
    }
    let html = render(app);
    assert!(html.contains("MW"));
    assert!(html.contains("bg-success-600"));
}

#[test]
fn dropdown_prefers_label_over_placeholder() {
    fn app() -> Element {
        rsx! {
            Dropdown { label: String::from("Oranges") }
        }
    }
    let html = render(app);
    assert!(html.contains("Oranges"));
    assert!(!html.contains("Select an option"));
}
