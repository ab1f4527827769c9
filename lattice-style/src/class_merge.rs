//! Utility-class merging with conflict resolution.
//!
//! Components build their class attribute from several fragments: common
//! styles, one fragment per variant axis, and a caller override. Fragments
//! routinely disagree on the same CSS property ("px-16 py-10" vs a caller's
//! "px-8"), so plain concatenation is not enough: the later token must win.
//!
//! Tokens are grouped by a *conflict key*: the token's variant modifiers
//! (`hover:`, `disabled:`, `group-data-[selected]:` ...) plus a utility group
//! derived from a longest-prefix stem table. Within one key the last
//! occurrence wins; everything else keeps its relative order. Tokens that
//! match no stem are opaque (the key is the token itself), so exact
//! duplicates collapse and unrelated tokens never collide. No CSS semantics
//! are parsed beyond this key extraction.

use indexmap::IndexMap;

/// A single argument to [`merge_classes`]. `None` fragments are skipped,
/// mirroring falsy-conditional class expressions at call sites.
pub trait ClassFragment {
    fn as_fragment(&self) -> Option<&str>;
}

impl ClassFragment for str {
    fn as_fragment(&self) -> Option<&str> {
        Some(self)
    }
}

impl ClassFragment for String {
    fn as_fragment(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl ClassFragment for Option<&str> {
    fn as_fragment(&self) -> Option<&str> {
        *self
    }
}

impl ClassFragment for Option<String> {
    fn as_fragment(&self) -> Option<&str> {
        self.as_deref()
    }
}

impl<T: ClassFragment + ?Sized> ClassFragment for &T {
    fn as_fragment(&self) -> Option<&str> {
        (**self).as_fragment()
    }
}

/// Merge class fragments into one deduplicated, conflict-resolved string.
///
/// Later conflicting tokens win; surviving tokens keep the relative order of
/// their last occurrence. Idempotent under re-concatenation.
pub fn merge_classes(fragments: &[&dyn ClassFragment]) -> String {
    let mut survivors: IndexMap<String, &str> = IndexMap::new();

    for fragment in fragments {
        let Some(fragment) = fragment.as_fragment() else {
            continue;
        };
        for token in fragment.split_ascii_whitespace() {
            let (modifiers, group) = token_key_parts(token);
            let key = join_key(&modifiers, &group);
            // A shorthand clears the groups it covers (p clears px/py, size
            // clears w/h) under the same modifiers.
            for covered in covered_groups(&group) {
                survivors.shift_remove(&join_key(&modifiers, covered));
            }
            // Move the key to the end so ordering follows last occurrence.
            survivors.shift_remove(&key);
            survivors.insert(key, token);
        }
    }

    let mut out = String::new();
    for token in survivors.values() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(token);
    }
    out
}

/// Variadic front end for [`merge_classes`]. Accepts any mix of `&str`,
/// `String`, and their `Option`s.
#[macro_export]
macro_rules! cx {
    ($($fragment:expr),* $(,)?) => {
        $crate::class_merge::merge_classes(&[$(&$fragment as &dyn $crate::class_merge::ClassFragment),*])
    };
}

fn token_key_parts(token: &str) -> (String, String) {
    let (modifiers, base) = split_modifiers(token);
    (modifiers.to_string(), utility_group(base))
}

fn join_key(modifiers: &str, group: &str) -> String {
    if modifiers.is_empty() {
        group.to_string()
    } else {
        format!("{modifiers}|{group}")
    }
}

/// Groups cleared by a shorthand token on top of its own group.
fn covered_groups(group: &str) -> &'static [&'static str] {
    match group {
        "p" => &["px", "py", "pl", "pr", "pt", "pb"],
        "px" => &["pl", "pr"],
        "py" => &["pt", "pb"],
        "m" => &["mx", "my", "ml", "mr", "mt", "mb"],
        "mx" => &["ml", "mr"],
        "my" => &["mt", "mb"],
        "inset" => &["top", "right", "bottom", "left"],
        "size" => &["w", "h"],
        "gap" => &["gap-x", "gap-y"],
        "overflow" => &["overflow-x", "overflow-y"],
        "border-w" => &[
            "border-w-x",
            "border-w-y",
            "border-w-t",
            "border-w-b",
            "border-w-l",
            "border-w-r",
        ],
        _ => &[],
    }
}

/// Splits variant modifiers from the base utility. Colons inside arbitrary
/// value brackets (`group-data-[a:b]:x`) do not split.
fn split_modifiers(token: &str) -> (&str, &str) {
    let mut depth = 0usize;
    let mut last_colon = None;
    for (i, c) in token.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => last_colon = Some(i),
            _ => {}
        }
    }
    match last_colon {
        Some(i) => (&token[..i], &token[i + 1..]),
        None => ("", token),
    }
}

const DISPLAY: &[&str] = &[
    "block", "inline-block", "inline", "flex", "inline-flex", "grid", "inline-grid", "contents",
    "table", "hidden",
];

const POSITION: &[&str] = &["static", "fixed", "absolute", "relative", "sticky"];

const FONT_SIZES: &[&str] = &[
    "xs", "sm", "base", "md", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];

const TEXT_ALIGN: &[&str] = &["left", "center", "right", "justify", "start", "end"];

const FONT_WEIGHTS: &[&str] = &[
    "thin", "extralight", "light", "normal", "regular", "medium", "semibold", "bold", "extrabold",
    "black",
];

const FONT_FAMILIES: &[&str] = &["sans", "serif", "mono"];

const BORDER_STYLES: &[&str] = &["solid", "dashed", "dotted", "double", "none"];

const FLEX_DIRECTION: &[&str] = &["row", "row-reverse", "col", "col-reverse"];

const FLEX_WRAP: &[&str] = &["wrap", "wrap-reverse", "nowrap"];

/// Stems whose value never needs further inspection. Longest stem wins, and a
/// stem only matches when followed by `-` (so `p` matches `p-24` but not
/// `pointer-events-none`).
const SIMPLE_STEMS: &[&str] = &[
    "pointer-events",
    "underline-offset",
    "translate-x",
    "translate-y",
    "transition",
    "whitespace",
    "overflow-x",
    "overflow-y",
    "decoration",
    "placeholder",
    "duration",
    "tracking",
    "overflow",
    "leading",
    "justify",
    "content",
    "rounded",
    "opacity",
    "cursor",
    "object",
    "aspect",
    "shrink",
    "rotate",
    "bottom",
    "select",
    "shadow",
    "place",
    "items",
    "gap-x",
    "gap-y",
    "min-w",
    "min-h",
    "max-w",
    "max-h",
    "scale",
    "right",
    "inset",
    "delay",
    "grow",
    "ease",
    "self",
    "size",
    "left",
    "gap",
    "top",
    "bg",
    "px",
    "py",
    "pl",
    "pr",
    "pt",
    "pb",
    "mx",
    "my",
    "ml",
    "mr",
    "mt",
    "mb",
    "z",
    "p",
    "m",
    "w",
    "h",
];

fn utility_group(base: &str) -> String {
    // Arbitrary properties stay opaque.
    if base.starts_with('[') {
        return base.to_string();
    }

    let positive = base.strip_prefix('-').unwrap_or(base);

    if DISPLAY.contains(&positive) {
        return "display".to_string();
    }
    if POSITION.contains(&positive) {
        return "position".to_string();
    }

    if let Some(value) = positive.strip_prefix("text-") {
        let value = strip_opacity(value);
        if FONT_SIZES.contains(&value) || is_numeric_like(value) {
            return "text-size".to_string();
        }
        if TEXT_ALIGN.contains(&value) {
            return "text-align".to_string();
        }
        return "text-color".to_string();
    }

    if let Some(value) = positive.strip_prefix("font-") {
        if FONT_WEIGHTS.contains(&value) {
            return "font-weight".to_string();
        }
        if FONT_FAMILIES.contains(&value) {
            return "font-family".to_string();
        }
        return base.to_string();
    }

    if positive == "border" || positive.starts_with("border-") {
        return border_group(positive.strip_prefix("border").unwrap_or(""));
    }

    if positive == "ring" || positive.starts_with("ring-") {
        let value = positive.strip_prefix("ring-").unwrap_or("");
        if value.starts_with("offset") {
            return "ring-offset".to_string();
        }
        if value == "inset" {
            return "ring-inset".to_string();
        }
        if value.is_empty() || is_numeric_like(strip_opacity(value)) {
            return "ring-w".to_string();
        }
        return "ring-color".to_string();
    }

    if positive == "outline" || positive.starts_with("outline-") {
        let value = positive.strip_prefix("outline-").unwrap_or("");
        if value.starts_with("offset") {
            return "outline-offset".to_string();
        }
        if value.is_empty() || value == "none" {
            return "outline-style".to_string();
        }
        if is_numeric_like(value) {
            return "outline-w".to_string();
        }
        return "outline-color".to_string();
    }

    if let Some(value) = positive.strip_prefix("flex-") {
        if FLEX_DIRECTION.contains(&value) {
            return "flex-direction".to_string();
        }
        if FLEX_WRAP.contains(&value) {
            return "flex-wrap".to_string();
        }
        return "flex".to_string();
    }

    for stem in SIMPLE_STEMS {
        if let Some(rest) = positive.strip_prefix(stem) {
            if rest.starts_with('-') {
                return (*stem).to_string();
            }
        }
    }

    // Unrecognized: opaque token, conflicts only with itself.
    base.to_string()
}

/// Border utilities share one prefix but target three properties. The value
/// decides: style keywords -> style, numeric or bare -> width (per side when
/// a side letter is present), anything else -> color.
fn border_group(rest: &str) -> String {
    let value = rest.strip_prefix('-').unwrap_or(rest);
    if value.is_empty() {
        return "border-w".to_string();
    }
    if BORDER_STYLES.contains(&value) {
        return "border-style".to_string();
    }
    for side in ["x", "y", "t", "b", "l", "r"] {
        if value == side {
            return format!("border-w-{side}");
        }
        if let Some(side_value) = value.strip_prefix(&format!("{side}-")) {
            if is_numeric_like(side_value) {
                return format!("border-w-{side}");
            }
            return format!("border-color-{side}");
        }
    }
    if is_numeric_like(value) {
        return "border-w".to_string();
    }
    "border-color".to_string()
}

fn strip_opacity(value: &str) -> &str {
    match value.split_once('/') {
        Some((v, _)) => v,
        None => value,
    }
}

fn is_numeric_like(value: &str) -> bool {
    if value.starts_with('[') && value.ends_with(']') {
        let inner = &value[1..value.len() - 1];
        return inner
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_digit() || c == '.');
    }
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit() || c == '.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_conflicting_token_wins() {
        assert_eq!(cx!("px-16 py-10", "px-8"), "py-10 px-8");
    }

    #[test]
    fn non_conflicting_tokens_keep_order() {
        assert_eq!(
            cx!("inline-flex items-center gap-8"),
            "inline-flex items-center gap-8"
        );
    }

    #[test]
    fn none_fragments_are_skipped() {
        let extra: Option<&str> = None;
        assert_eq!(cx!("flex", extra, "gap-4"), "flex gap-4");
    }

    #[test]
    fn conditional_fragment_applies() {
        let selected = true;
        assert_eq!(
            cx!("bg-gray-400", selected.then_some("bg-brand-600")),
            "bg-brand-600"
        );
    }

    #[test]
    fn exact_duplicates_collapse() {
        assert_eq!(cx!("flex shrink-0", "shrink-0"), "flex shrink-0");
    }

    #[test]
    fn idempotent_under_reconcatenation() {
        let once = cx!(
            "group relative inline-flex gap-8 rounded-8 px-14 py-10 text-sm",
            "bg-brand-600 text-base-white shadow-sm hover:bg-brand-700"
        );
        let twice = cx!(once.clone(), once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn modifiers_scope_conflicts() {
        // hover:bg does not conflict with plain bg.
        assert_eq!(
            cx!("bg-brand-600 hover:bg-brand-700", "hover:bg-brand-800"),
            "bg-brand-600 hover:bg-brand-800"
        );
    }

    #[test]
    fn font_size_and_text_color_do_not_conflict() {
        assert_eq!(cx!("text-sm text-gray-900"), "text-sm text-gray-900");
        assert_eq!(cx!("text-sm", "text-md"), "text-md");
        assert_eq!(cx!("text-gray-900", "text-base-white"), "text-base-white");
    }

    #[test]
    fn text_alignment_is_its_own_group() {
        assert_eq!(
            cx!("text-left text-sm text-gray-500", "text-center"),
            "text-sm text-gray-500 text-center"
        );
    }

    #[test]
    fn ring_width_color_and_inset_are_distinct() {
        assert_eq!(
            cx!("ring-1 ring-gray-300 ring-inset", "ring-[6px] ring-brand-600"),
            "ring-inset ring-[6px] ring-brand-600"
        );
    }

    #[test]
    fn border_width_style_and_color_are_distinct() {
        assert_eq!(
            cx!("border-2 border-dashed border-gray-300", "border-brand-500"),
            "border-2 border-dashed border-brand-500"
        );
        assert_eq!(cx!("border", "border-2"), "border-2");
        // Side-specific widths stay independent of the shorthand.
        assert_eq!(cx!("border-b border-t-2"), "border-b border-t-2");
    }

    #[test]
    fn display_keywords_conflict() {
        assert_eq!(cx!("flex", "hidden"), "hidden");
        assert_eq!(cx!("inline-flex", "flex"), "flex");
    }

    #[test]
    fn flex_direction_and_growth_are_distinct() {
        assert_eq!(cx!("flex flex-col flex-1"), "flex flex-col flex-1");
        assert_eq!(cx!("flex-col", "flex-row"), "flex-row");
    }

    #[test]
    fn opacity_suffix_keeps_color_grouping() {
        assert_eq!(cx!("bg-base-white/10", "bg-brand-700"), "bg-brand-700");
    }

    #[test]
    fn malformed_tokens_pass_through_opaquely() {
        assert_eq!(
            cx!("??weird?? [mask:luminance]", "??weird??"),
            "[mask:luminance] ??weird??"
        );
    }

    #[test]
    fn bracketed_modifier_colons_do_not_split() {
        // The colon inside the data selector is part of the modifier.
        let merged = cx!(
            "group-data-[state:open]:rotate-180",
            "group-data-[state:open]:rotate-90"
        );
        assert_eq!(merged, "group-data-[state:open]:rotate-90");
    }

    #[test]
    fn shorthand_clears_covered_groups() {
        assert_eq!(cx!("px-14 py-10 gap-8", "p-0"), "gap-8 p-0");
        assert_eq!(cx!("w-[40px] h-[40px]", "size-[32px]"), "size-[32px]");
        // The refinement direction leaves the shorthand in place.
        assert_eq!(cx!("p-24", "px-16"), "p-24 px-16");
    }

    #[test]
    fn empty_input_yields_empty_string() {
        assert_eq!(cx!(), "");
        assert_eq!(cx!(""), "");
    }
}
