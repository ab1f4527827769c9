//! Declaration-ordered style tables and their diff-stable normalized form.
//!
//! A [`StyleTable`] maps a variant axis ("size", "variant", "state", ...) to
//! variant keys to class fragments, plus an optional base fragment shared by
//! every rendering of the component. Tables preserve declaration order so
//! call sites read like the component's visual spec; [`StyleTable::normalized`]
//! produces the sorted form used when emitting style artifacts, so generated
//! output diffs stably regardless of how a table was declared.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::resolver::{BoolKey, VariantKey};

/// Nested style mapping as emitted into artifacts: either a class fragment
/// leaf or a group of named children (axes, variant keys).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleNode {
    Fragment(String),
    Group(IndexMap<String, StyleNode>),
}

impl StyleNode {
    /// Returns an equal node with keys sorted lexicographically at every
    /// level. Values are never altered; idempotent.
    pub fn normalized(&self) -> StyleNode {
        match self {
            StyleNode::Fragment(fragment) => StyleNode::Fragment(fragment.clone()),
            StyleNode::Group(children) => {
                let mut keys: Vec<&String> = children.keys().collect();
                keys.sort();
                let sorted = keys
                    .into_iter()
                    .map(|k| (k.clone(), children[k].normalized()))
                    .collect();
                StyleNode::Group(sorted)
            }
        }
    }
}

/// Per-component style lookup table: axis -> variant key -> class fragment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleTable {
    #[serde(skip_serializing_if = "Option::is_none")]
    base: Option<String>,
    axes: IndexMap<String, IndexMap<String, String>>,
}

impl StyleTable {
    pub fn builder() -> StyleTableBuilder {
        StyleTableBuilder {
            base: None,
            axes: IndexMap::new(),
        }
    }

    /// Base fragment composed before any axis contribution.
    pub fn base(&self) -> Option<&str> {
        self.base.as_deref()
    }

    /// Fragment registered for `key` on `axis`, if both exist.
    pub fn fragment(&self, axis: &str, key: &str) -> Option<&str> {
        self.axes.get(axis)?.get(key).map(String::as_str)
    }

    /// Whether the table declares the given axis at all.
    pub fn has_axis(&self, axis: &str) -> bool {
        self.axes.contains_key(axis)
    }

    /// Sorted copy: axes and variant keys ordered lexicographically.
    /// Idempotent; the set of (axis, key) -> fragment associations is
    /// unchanged.
    pub fn normalized(&self) -> StyleTable {
        let mut axis_names: Vec<&String> = self.axes.keys().collect();
        axis_names.sort();
        let axes = axis_names
            .into_iter()
            .map(|axis| {
                let entries = &self.axes[axis];
                let mut keys: Vec<&String> = entries.keys().collect();
                keys.sort();
                let sorted = keys
                    .into_iter()
                    .map(|k| (k.clone(), entries[k].clone()))
                    .collect();
                (axis.clone(), sorted)
            })
            .collect();
        StyleTable {
            base: self.base.clone(),
            axes,
        }
    }

    /// Artifact form of the table: a nested [`StyleNode`] group with the base
    /// fragment (when present) under `"base"` and one group per axis.
    pub fn to_artifact_node(&self) -> StyleNode {
        let mut root = IndexMap::new();
        if let Some(base) = &self.base {
            root.insert("base".to_string(), StyleNode::Fragment(base.clone()));
        }
        for (axis, entries) in &self.axes {
            let group = entries
                .iter()
                .map(|(k, v)| (k.clone(), StyleNode::Fragment(v.clone())))
                .collect();
            root.insert(axis.clone(), StyleNode::Group(group));
        }
        StyleNode::Group(root)
    }

    /// Diff-stable JSON rendering of the normalized table.
    pub fn to_artifact_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.to_artifact_node().normalized())
    }
}

/// Builder so tables read top-to-bottom like the component's visual spec.
pub struct StyleTableBuilder {
    base: Option<String>,
    axes: IndexMap<String, IndexMap<String, String>>,
}

impl StyleTableBuilder {
    pub fn base(mut self, fragment: &str) -> Self {
        self.base = Some(fragment.to_string());
        self
    }

    /// Declares an axis with its variant keys in declaration order. Redeclaring
    /// an axis replaces it.
    pub fn axis<'a, I>(mut self, name: &str, entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let entries = entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self.axes.insert(name.to_string(), entries);
        self
    }

    /// Declares a boolean axis keyed by [`BoolKey`].
    pub fn bool_axis(mut self, name: &str, when_true: &str, when_false: &str) -> Self {
        let mut entries = IndexMap::new();
        entries.insert(
            BoolKey::True.variant_key().to_string(),
            when_true.to_string(),
        );
        entries.insert(
            BoolKey::False.variant_key().to_string(),
            when_false.to_string(),
        );
        self.axes.insert(name.to_string(), entries);
        self
    }

    pub fn build(self) -> StyleTable {
        StyleTable {
            base: self.base,
            axes: self.axes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> StyleTable {
        StyleTable::builder()
            .base("inline-flex items-center")
            .axis("variant", [("primary", "bg-brand-600"), ("ghost", "text-gray-700")])
            .axis("size", [("sm", "px-12 py-8"), ("lg", "px-18 py-12")])
            .bool_axis("selected", "bg-brand-600", "bg-gray-400")
            .build()
    }

    #[test]
    fn lookup_returns_registered_fragment() {
        let table = sample();
        assert_eq!(table.fragment("size", "sm"), Some("px-12 py-8"));
        assert_eq!(table.fragment("variant", "ghost"), Some("text-gray-700"));
    }

    #[test]
    fn unknown_axis_or_key_is_none() {
        let table = sample();
        assert_eq!(table.fragment("size", "xl"), None);
        assert_eq!(table.fragment("appearance", "primary"), None);
    }

    #[test]
    fn bool_axis_uses_tagged_keys() {
        let table = sample();
        assert_eq!(
            table.fragment("selected", BoolKey::True.variant_key()),
            Some("bg-brand-600")
        );
        assert_eq!(
            table.fragment("selected", BoolKey::from(false).variant_key()),
            Some("bg-gray-400")
        );
    }

    #[test]
    fn normalized_sorts_every_level() {
        let StyleNode::Group(root) = sample().to_artifact_node().normalized() else {
            panic!("artifact root must be a group");
        };
        let keys: Vec<&str> = root.keys().map(String::as_str).collect();
        assert_eq!(keys, ["base", "selected", "size", "variant"]);

        let StyleNode::Group(size) = &root["size"] else {
            panic!("axis must be a group");
        };
        let keys: Vec<&str> = size.keys().map(String::as_str).collect();
        assert_eq!(keys, ["lg", "sm"]);
    }

    #[test]
    fn normalized_is_idempotent() {
        let table = sample();
        assert_eq!(table.normalized(), table.normalized().normalized());
    }

    #[test]
    fn normalization_preserves_associations() {
        let table = sample();
        let normalized = table.normalized();
        for (axis, key) in [
            ("variant", "primary"),
            ("variant", "ghost"),
            ("size", "sm"),
            ("size", "lg"),
            ("selected", "true"),
            ("selected", "false"),
        ] {
            assert_eq!(table.fragment(axis, key), normalized.fragment(axis, key));
        }
        assert_eq!(table.base(), normalized.base());
    }

    #[test]
    fn artifact_json_is_stable_across_declaration_order() {
        let a = StyleTable::builder()
            .axis("size", [("sm", "px-12"), ("lg", "px-18")])
            .axis("variant", [("primary", "bg-brand-600")])
            .build();
        let b = StyleTable::builder()
            .axis("variant", [("primary", "bg-brand-600")])
            .axis("size", [("lg", "px-18"), ("sm", "px-12")])
            .build();
        assert_eq!(a.to_artifact_json().unwrap(), b.to_artifact_json().unwrap());
    }

    #[test]
    fn node_normalization_is_idempotent_and_value_preserving() {
        let mut inner = IndexMap::new();
        inner.insert("z".to_string(), StyleNode::Fragment("last".into()));
        inner.insert("a".to_string(), StyleNode::Fragment("first".into()));
        let mut root = IndexMap::new();
        root.insert("outer".to_string(), StyleNode::Group(inner));
        let node = StyleNode::Group(root);

        let normalized = node.normalized();
        assert_eq!(normalized, normalized.normalized());

        let StyleNode::Group(root) = &normalized else {
            panic!("expected group");
        };
        let StyleNode::Group(inner) = &root["outer"] else {
            panic!("expected inner group");
        };
        let keys: Vec<&String> = inner.keys().collect();
        assert_eq!(keys, ["a", "z"]);
        assert_eq!(inner["a"], StyleNode::Fragment("first".into()));
        assert_eq!(inner["z"], StyleNode::Fragment("last".into()));
    }
}
