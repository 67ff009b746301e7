/// State management module
///
/// This module holds the whole core of the app, kept free of UI types:
/// - Shared data structures (data.rs)
/// - Page collection and hotspot list operations (pages.rs)
/// - Interactive move/resize geometry (geometry.rs)
/// - Link resolution and edit/preview navigation (nav.rs)
/// - JSON persistence and picture file management (store.rs)

pub mod data;
pub mod geometry;
pub mod nav;
pub mod pages;
pub mod store;
