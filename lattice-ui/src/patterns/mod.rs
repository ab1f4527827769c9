//! Multi-component patterns composed from the catalog.

pub mod side_navigation;

pub use side_navigation::{
    SideNavigation, SideNavigationAccount, SideNavigationItem, SideNavigationSearch,
    SideNavigationSection, SideNavigationSubItem,
};
