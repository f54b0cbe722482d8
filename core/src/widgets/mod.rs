//! Click-driven page widgets
//!
//! Every widget splits into a pure state type (`TabGroupState`,
//! `PanelNavigator`, `ViewMode`) and an `init_*` function that scans the
//! document for its markers and registers click handlers applying that state.

pub mod navigator;
pub mod switcher;
pub mod tabs;


pub use navigator::{PanelNavigator, init_navigator};
pub use switcher::{SwitcherSet, ViewMode, ViewSwitcher, init_switchers};
pub use tabs::{Pairing, TabGroup, TabGroupState, TabSetupError, init_tab_group, init_tab_groups};
