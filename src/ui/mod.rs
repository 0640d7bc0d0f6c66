//! View model layer for the host shell.
//!
//! The discovery core stops at view models: rendering (HTML, canvas, native
//! widgets) is the host's concern. This module re-exports the display-ready
//! types computed by [`crate::app::AppState`].
//!
//! ```text
//! AppState → sidebar_viewmodel / overlay_viewmodel → host rendering
//! ```

pub mod viewmodel;

pub use viewmodel::{
    EateryListItem, EmptyState, OverlayViewModel, ReviewItem, ReviewsSection, SidebarViewModel,
};
