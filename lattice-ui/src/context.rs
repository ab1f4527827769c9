//! Shared-context plumbing for compound components.

use dioxus::prelude::*;

/// Reads the context a compound root provided for its subtree.
///
/// Rendering a compound child outside its root is structural misuse, not a
/// runtime condition, so a missing provider panics with a message naming both
/// sides instead of falling back to a silent default.
pub fn use_scope<T: Clone + 'static>(child: &str, root: &str) -> T {
    match try_use_context::<T>() {
        Some(scope) => scope,
        None => panic!("{}", scope_error(child, root)),
    }
}

pub(crate) fn scope_error(child: &str, root: &str) -> String {
    format!("{child} must be used within {root}")
}

/// A signal kept in sync with a prop, so context values created at mount keep
/// propagating prop updates to consuming children on later renders.
pub fn use_synced_signal<T: PartialEq + Clone + 'static>(value: T) -> Signal<T> {
    let mut signal = use_signal(|| value.clone());
    if *signal.peek() != value {
        signal.set(value);
    }
    signal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_error_names_both_sides() {
        assert_eq!(
            scope_error("StepIndicatorItem", "StepIndicator"),
            "StepIndicatorItem must be used within StepIndicator"
        );
    }
}
