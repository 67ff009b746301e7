/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the persistence layer and the UI layer. They serialize to the
/// pages.json document, so field names and types are part of the
/// on-disk format.

use serde::{Deserialize, Serialize};

/// A single photographed prototype page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Unique id within the collection; link targets refer to this.
    /// Assigned once at creation and never reused in a session.
    pub id: u32,
    /// Display name (e.g., "Page 3"); not guaranteed unique
    pub name: String,
    /// Path to the imported photo file
    pub picture: String,
    /// Hotspots in z-order: later entries render (and hit-test) on top.
    /// Serialized as "hotSpots"; absent in older documents.
    #[serde(default)]
    pub hot_spots: Vec<HotSpot>,
}

/// A rectangular tap target drawn over a page
///
/// Coordinates are in the page image's pixel space. x/y are signed:
/// a hotspot may be dragged partially or fully outside the image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotSpot {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// Empty, or the decimal string of a target page id.
    /// Dangling links are legal; they resolve to a no-op at click time.
    pub link: String,
}

impl HotSpot {
    /// Default geometry for a freshly added hotspot
    pub fn new_default() -> Self {
        HotSpot {
            x: 10,
            y: 10,
            width: 100,
            height: 100,
            link: String::new(),
        }
    }

    /// Whether this hotspot navigates anywhere in preview mode
    pub fn is_linked(&self) -> bool {
        !self.link.is_empty()
    }
}
