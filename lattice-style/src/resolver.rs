//! Variant resolution: prop values -> resolved class string.
//!
//! One resolver serves every component; each component supplies its own
//! [`StyleTable`] and prop enums. Resolution fails open: a missing axis or
//! variant key contributes no class (the component still renders, just
//! without that treatment), and the miss is logged since a table/prop
//! mismatch is worth surfacing during development. The caller override always
//! composes last so a consumer's class wins any utility conflict.

use crate::class_merge::{merge_classes, ClassFragment};
use crate::style_table::StyleTable;

/// Lookup key for one value of a variant axis. Implemented by each
/// component's prop enums.
pub trait VariantKey {
    fn variant_key(&self) -> &'static str;
}

/// Tagged key for boolean axes. Tables store the two branches under
/// `"true"`/`"false"`; call sites never spell those strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoolKey {
    True,
    False,
}

impl From<bool> for BoolKey {
    fn from(value: bool) -> Self {
        if value {
            BoolKey::True
        } else {
            BoolKey::False
        }
    }
}

impl VariantKey for BoolKey {
    fn variant_key(&self) -> &'static str {
        match self {
            BoolKey::True => "true",
            BoolKey::False => "false",
        }
    }
}

/// Builder that accumulates fragments in composition order: base, then axes
/// in call order, then raw conditionals, then the caller override.
pub struct StyleResolver<'a> {
    table: &'a StyleTable,
    parts: Vec<&'a str>,
    override_class: Option<&'a str>,
}

impl<'a> StyleResolver<'a> {
    pub fn new(table: &'a StyleTable) -> Self {
        StyleResolver {
            table,
            parts: Vec::new(),
            override_class: None,
        }
    }

    /// Composes the table's base fragment. Tables without one are fine.
    pub fn base(mut self) -> Self {
        if let Some(base) = self.table.base() {
            self.parts.push(base);
        }
        self
    }

    /// Composes the fragment registered for `key` on `axis`. Unknown axes or
    /// keys contribute nothing.
    pub fn axis(mut self, axis: &str, key: &dyn VariantKey) -> Self {
        match self.table.fragment(axis, key.variant_key()) {
            Some(fragment) => self.parts.push(fragment),
            None => {
                tracing::warn!(
                    axis,
                    key = key.variant_key(),
                    "no style fragment registered; axis contributes no class"
                );
            }
        }
        self
    }

    /// Boolean axis sugar over [`StyleResolver::axis`].
    pub fn flag(self, axis: &str, value: bool) -> Self {
        self.axis(axis, &BoolKey::from(value))
    }

    /// Composes a literal fragment outside the table (layout glue that is not
    /// variant-dependent).
    pub fn raw(mut self, fragment: &'a str) -> Self {
        self.parts.push(fragment);
        self
    }

    /// Composes `fragment` only when `condition` holds.
    pub fn raw_if(self, condition: bool, fragment: &'a str) -> Self {
        if condition {
            self.raw(fragment)
        } else {
            self
        }
    }

    /// Caller-supplied override; always merged last regardless of when it was
    /// attached, so consumer classes win conflicts end to end.
    pub fn class(mut self, class: Option<&'a str>) -> Self {
        self.override_class = class;
        self
    }

    pub fn resolve(self) -> String {
        let mut fragments: Vec<&dyn ClassFragment> = Vec::with_capacity(self.parts.len() + 1);
        for part in &self.parts {
            fragments.push(part);
        }
        if let Some(class) = &self.override_class {
            fragments.push(class);
        }
        merge_classes(&fragments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy)]
    enum Size {
        Sm,
        Lg,
    }

    impl VariantKey for Size {
        fn variant_key(&self) -> &'static str {
            match self {
                Size::Sm => "sm",
                Size::Lg => "lg",
            }
        }
    }

    #[derive(Clone, Copy)]
    enum Variant {
        Primary,
        Ghost,
    }

    impl VariantKey for Variant {
        fn variant_key(&self) -> &'static str {
            match self {
                Variant::Primary => "primary",
                Variant::Ghost => "ghost",
            }
        }
    }

    fn table() -> StyleTable {
        StyleTable::builder()
            .base("inline-flex items-center font-semibold")
            .axis("size", [("sm", "px-12 py-8 text-sm"), ("lg", "px-18 py-12 text-md")])
            .axis(
                "variant",
                [("primary", "bg-brand-600 text-base-white"), ("ghost", "text-gray-700")],
            )
            .bool_axis("selected", "bg-brand-700", "bg-gray-100")
            .build()
    }

    #[test]
    fn resolves_registered_fragments_per_axis() {
        let table = table();
        let resolved = StyleResolver::new(&table)
            .base()
            .axis("size", &Size::Sm)
            .axis("variant", &Variant::Ghost)
            .resolve();
        assert!(resolved.contains("px-12"));
        assert!(resolved.contains("text-gray-700"));
        assert!(resolved.contains("inline-flex"));
    }

    #[test]
    fn axis_call_order_sets_precedence() {
        let table = table();
        // variant's text color lands after size's text size; both survive
        // because they are different conflict groups.
        let resolved = StyleResolver::new(&table)
            .base()
            .axis("size", &Size::Lg)
            .axis("variant", &Variant::Primary)
            .resolve();
        assert!(resolved.contains("text-md"));
        assert!(resolved.contains("text-base-white"));
    }

    #[test]
    fn unknown_axis_fails_open() {
        let table = table();
        let resolved = StyleResolver::new(&table)
            .base()
            .axis("appearance", &Variant::Primary)
            .resolve();
        assert_eq!(resolved, "inline-flex items-center font-semibold");
    }

    #[test]
    fn boolean_axis_picks_matching_branch() {
        let table = table();
        let selected = StyleResolver::new(&table).flag("selected", true).resolve();
        let unselected = StyleResolver::new(&table).flag("selected", false).resolve();
        assert_eq!(selected, "bg-brand-700");
        assert_eq!(unselected, "bg-gray-100");
    }

    #[test]
    fn caller_override_wins_conflicts() {
        let table = table();
        let resolved = StyleResolver::new(&table)
            .base()
            .axis("variant", &Variant::Primary)
            .class(Some("bg-error-600"))
            .resolve();
        assert!(resolved.contains("bg-error-600"));
        assert!(!resolved.contains("bg-brand-600"));
    }

    #[test]
    fn override_composes_last_even_if_attached_first() {
        let table = table();
        let resolved = StyleResolver::new(&table)
            .class(Some("px-4"))
            .base()
            .axis("size", &Size::Sm)
            .resolve();
        assert!(resolved.contains("px-4"));
        assert!(!resolved.contains("px-12"));
    }

    #[test]
    fn raw_if_composes_conditionally() {
        let table = table();
        let icon_only = StyleResolver::new(&table)
            .axis("size", &Size::Sm)
            .raw_if(true, "aspect-square p-0")
            .resolve();
        assert!(icon_only.contains("aspect-square"));
        // p-0 replaces the size padding pair.
        assert!(icon_only.contains("p-0"));
        assert!(!icon_only.contains("px-12"));

        let labeled = StyleResolver::new(&table)
            .axis("size", &Size::Sm)
            .raw_if(false, "aspect-square p-0")
            .resolve();
        assert!(!labeled.contains("aspect-square"));
    }
}
