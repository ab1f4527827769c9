//! lattice-ui - Utility-class styled component catalog for Dioxus
//!
//! Presentational primitives (buttons, inputs, toasts, step indicators, ...)
//! whose visual variants resolve through `lattice-style` tables, plus the
//! compound side-navigation pattern. Components share state with their
//! children through render-scoped context, never prop drilling.

pub mod components;
pub mod context;
pub mod patterns;
pub mod slot;

pub use components::*;
pub use patterns::*;
pub use slot::IconSlot;
