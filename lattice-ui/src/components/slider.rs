//! Dual-thumb range slider.

use std::sync::LazyLock;

use dioxus::prelude::*;
use lattice_style::{cx, StyleResolver, StyleTable};

static THUMB: LazyLock<StyleTable> = LazyLock::new(|| {
    StyleTable::builder()
        .base(concat!(
            "absolute top-1/2 size-24 -translate-x-1/2 -translate-y-1/2 rounded-full ",
            "border border-gray-300 bg-gray-50 shadow-sm ",
            "focus:outline-none focus-visible:ring-4 focus-visible:ring-brand-100",
        ))
        .bool_axis("dragging", "cursor-grabbing", "cursor-grab")
        .bool_axis("disabled", "cursor-not-allowed opacity-50", "")
        .build()
});

/// Maps a 0..=1 track fraction onto the slider's range, snapped to `step`.
pub(crate) fn fraction_to_value(fraction: f64, min: f64, max: f64, step: f64) -> f64 {
    let raw = min + fraction.clamp(0.0, 1.0) * (max - min);
    let snapped = if step > 0.0 { min + ((raw - min) / step).round() * step } else { raw };
    snapped.clamp(min, max)
}

/// Which thumb a press closest targets. Ties go to the upper thumb so a
/// collapsed range can still be widened.
pub(crate) fn nearest_thumb(value: f64, low: f64, high: f64) -> usize {
    if (value - low).abs() < (value - high).abs() {
        0
    } else {
        1
    }
}

#[component]
pub fn Slider(
    /// Low and high thumb values.
    value: (f64, f64),
    #[props(default = 0.0)] min: f64,
    #[props(default = 100.0)] max: f64,
    #[props(default = 1.0)] step: f64,
    #[props(default)] disabled: bool,
    /// Value labels below the thumbs.
    #[props(default)]
    show_labels: bool,
    /// Formats the thumb labels; percent by default.
    #[props(default)]
    format_value: Option<Callback<f64, String>>,
    #[props(default)] on_change: Option<EventHandler<(f64, f64)>>,
    #[props(default)] class: Option<String>,
) -> Element {
    let mut track_rect: Signal<Option<(f64, f64)>> = use_signal(|| None);
    // Index of the thumb being dragged, while a pointer is down on the track.
    let mut dragging: Signal<Option<usize>> = use_signal(|| None);

    let (low, high) = value;
    let span = (max - min).max(f64::EPSILON);
    let low_pct = ((low - min) / span * 100.0).clamp(0.0, 100.0);
    let high_pct = ((high - min) / span * 100.0).clamp(0.0, 100.0);

    let move_thumb = move |thumb: usize, client_x: f64| {
        let Some((left, width)) = *track_rect.peek() else {
            return;
        };
        if width <= 0.0 {
            return;
        }
        let next = fraction_to_value((client_x - left) / width, min, max, step);
        let next_pair = if thumb == 0 {
            (next.min(high), high)
        } else {
            (low, next.max(low))
        };
        if next_pair != value {
            if let Some(handler) = &on_change {
                handler.call(next_pair);
            }
        }
    };

    let root = cx!("flex w-full flex-col gap-4", class);

    let format = move |value: f64| match &format_value {
        Some(format) => format.call(value),
        None => format!("{value}%"),
    };

    let thumbs = [(0usize, low, low_pct, "Minimum value"), (1, high, high_pct, "Maximum value")]
        .into_iter()
        .map(|(index, value, pct, label)| {
            let thumb = StyleResolver::new(&THUMB)
                .base()
                .flag("dragging", *dragging.read() == Some(index))
                .flag("disabled", disabled)
                .resolve();
            let output = (show_labels).then(|| {
                let text = format(value);
                rsx! {
                    span {
                        class: "absolute top-28 left-1/2 -translate-x-1/2 text-center text-xs font-semibold text-gray-500",
                        "{text}"
                    }
                }
            });
            rsx! {
                div {
                    key: "{index}",
                    class: "absolute top-0 h-8",
                    style: "left: {pct}%",
                    span {
                        role: "slider",
                        tabindex: if disabled { -1 } else { 0 },
                        aria_label: label,
                        aria_valuemin: min,
                        aria_valuemax: max,
                        aria_valuenow: value,
                        class: "{thumb}",
                    }
                    {output}
                }
            }
        });

    rsx! {
        div { class: "{root}",
            div {
                class: "relative h-8 w-full touch-none",
                onmounted: move |event: Event<MountedData>| async move {
                    if let Ok(rect) = event.data().get_client_rect().await {
                        track_rect.set(Some((rect.origin.x, rect.size.width)));
                    }
                },
                onpointerdown: move |event| {
                    if disabled {
                        return;
                    }
                    let x = event.data().client_coordinates().x;
                    let Some((left, width)) = *track_rect.peek() else {
                        return;
                    };
                    if width <= 0.0 {
                        return;
                    }
                    let pressed = fraction_to_value((x - left) / width, min, max, step);
                    let thumb = nearest_thumb(pressed, low, high);
                    dragging.set(Some(thumb));
                    move_thumb(thumb, x);
                },
                onpointermove: move |event| {
                    if let Some(thumb) = *dragging.peek() {
                        move_thumb(thumb, event.data().client_coordinates().x);
                    }
                },
                onpointerup: move |_| dragging.set(None),
                div { class: "absolute top-0 h-8 w-full rounded-full bg-gray-200" }
                div {
                    class: "absolute top-0 h-8 rounded-full bg-brand-600",
                    style: "left: {low_pct}%; width: {high_pct - low_pct}%",
                }
                {thumbs}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractions_snap_to_step() {
        assert_eq!(fraction_to_value(0.0, 0.0, 100.0, 1.0), 0.0);
        assert_eq!(fraction_to_value(0.504, 0.0, 100.0, 1.0), 50.0);
        assert_eq!(fraction_to_value(0.33, 0.0, 100.0, 25.0), 25.0);
    }

    #[test]
    fn fractions_clamp_to_range() {
        assert_eq!(fraction_to_value(-0.5, 0.0, 100.0, 1.0), 0.0);
        assert_eq!(fraction_to_value(1.5, 0.0, 100.0, 1.0), 100.0);
    }

    #[test]
    fn press_targets_the_nearest_thumb() {
        assert_eq!(nearest_thumb(10.0, 20.0, 80.0), 0);
        assert_eq!(nearest_thumb(90.0, 20.0, 80.0), 1);
        assert_eq!(nearest_thumb(50.0, 50.0, 50.0), 1);
    }
}
