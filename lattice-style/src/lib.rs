//! lattice-style - Styling machinery for the lattice component catalog
//!
//! Pure, renderer-free utilities shared by every visual component:
//! utility-class merging with conflict resolution, declaration-ordered style
//! tables with a diff-stable normalized form, and the variant resolver that
//! turns prop values into a final class string.

pub mod class_merge;
pub mod resolver;
pub mod style_table;

pub use class_merge::{merge_classes, ClassFragment};
pub use resolver::{BoolKey, StyleResolver, VariantKey};
pub use style_table::{StyleNode, StyleTable, StyleTableBuilder};
