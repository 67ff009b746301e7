/// Page collection and hotspot list operations
///
/// All operations here are functional updates: they build a new Page
/// (or return a value for the caller to insert) instead of mutating
/// in place. The shell replaces the old Page in its collection and
/// persists the whole collection afterwards, so what is on screen is
/// always exactly what gets written to disk.

use super::data::{HotSpot, Page};

/// Compute the id for the next page: max of existing ids plus one.
/// Ids are never reused, even after deletes.
pub fn next_page_id(pages: &[Page]) -> u32 {
    pages.iter().map(|p| p.id).max().unwrap_or(0) + 1
}

/// Build a new page for a freshly imported photo.
/// The caller appends it to the collection and persists.
pub fn create_page(pages: &[Page], picture: String) -> Page {
    let id = next_page_id(pages);
    Page {
        id,
        name: format!("Page {}", id),
        picture,
        hot_spots: Vec::new(),
    }
}

/// Look up a page by id
pub fn find_page(pages: &[Page], id: u32) -> Option<&Page> {
    pages.iter().find(|p| p.id == id)
}

/// Remove a page by id, returning it so the caller can clean up its
/// picture file. Remaining pages keep their ids and order.
pub fn remove_page(pages: &mut Vec<Page>, id: u32) -> Option<Page> {
    let index = pages.iter().position(|p| p.id == id)?;
    Some(pages.remove(index))
}

/// Swap in an updated page over the stored one with the same id.
/// Returns false if the page is no longer in the collection.
pub fn replace_page(pages: &mut [Page], updated: Page) -> bool {
    match pages.iter_mut().find(|p| p.id == updated.id) {
        Some(slot) => {
            *slot = updated;
            true
        }
        None => false,
    }
}

impl Page {
    /// Copy of this page with a default hotspot appended
    pub fn with_new_hotspot(&self) -> Page {
        let mut page = self.clone();
        page.hot_spots.push(HotSpot::new_default());
        page
    }

    /// Copy of this page with the hotspot at `index` replaced.
    /// Order and the other entries are untouched; an out-of-range
    /// index returns the page unchanged.
    pub fn with_hotspot(&self, index: usize, hotspot: HotSpot) -> Page {
        let mut page = self.clone();
        if let Some(slot) = page.hot_spots.get_mut(index) {
            *slot = hotspot;
        }
        page
    }

    /// Copy of this page with the hotspot at `index` removed;
    /// later hotspots shift down by one
    pub fn without_hotspot(&self, index: usize) -> Page {
        let mut page = self.clone();
        if index < page.hot_spots.len() {
            page.hot_spots.remove(index);
        }
        page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(id: u32) -> Page {
        Page {
            id,
            name: format!("Page {}", id),
            picture: format!("/pictures/IMG_{}.jpg", id),
            hot_spots: Vec::new(),
        }
    }

    #[test]
    fn test_first_page_gets_id_one() {
        let pages = Vec::new();
        let new = create_page(&pages, "/pictures/IMG_1.jpg".into());
        assert_eq!(new.id, 1);
        assert_eq!(new.name, "Page 1");
        assert!(new.hot_spots.is_empty());
    }

    #[test]
    fn test_new_id_exceeds_every_existing_id() {
        let pages = vec![page(1), page(7), page(3)];
        let new = create_page(&pages, "/pictures/IMG_8.jpg".into());
        assert!(pages.iter().all(|p| new.id > p.id));
        assert_eq!(new.id, 8);
    }

    #[test]
    fn test_deleted_ids_are_not_reused_after_gaps() {
        // deleting page 2 must not make the next page reuse id 2
        let pages = vec![page(1), page(3)];
        assert_eq!(next_page_id(&pages), 4);
    }

    #[test]
    fn test_with_new_hotspot_appends_default_geometry() {
        let p = page(1);
        let updated = p.with_new_hotspot();
        assert_eq!(p.hot_spots.len(), 0);
        assert_eq!(updated.hot_spots.len(), 1);
        let h = &updated.hot_spots[0];
        assert_eq!((h.x, h.y, h.width, h.height), (10, 10, 100, 100));
        assert_eq!(h.link, "");
    }

    #[test]
    fn test_with_hotspot_replaces_only_the_indexed_entry() {
        let mut p = page(1).with_new_hotspot().with_new_hotspot();
        p.hot_spots[0].link = "2".into();
        let moved = HotSpot {
            x: 40,
            y: 50,
            ..p.hot_spots[1].clone()
        };
        let updated = p.with_hotspot(1, moved.clone());
        assert_eq!(updated.hot_spots[0], p.hot_spots[0]);
        assert_eq!(updated.hot_spots[1], moved);
    }

    #[test]
    fn test_with_hotspot_out_of_range_is_a_no_op() {
        let p = page(1).with_new_hotspot();
        let updated = p.with_hotspot(5, HotSpot::new_default());
        assert_eq!(updated, p);
    }

    #[test]
    fn test_without_hotspot_shifts_later_entries_down() {
        let mut p = page(1);
        for i in 0..3 {
            p = p.with_new_hotspot();
            p.hot_spots.last_mut().unwrap().x = i;
        }
        let updated = p.without_hotspot(1);
        assert_eq!(updated.hot_spots.len(), 2);
        assert_eq!(updated.hot_spots[0].x, 0);
        assert_eq!(updated.hot_spots[1].x, 2);
    }

    #[test]
    fn test_remove_page_leaves_other_pages_untouched() {
        let mut pages = vec![page(1), page(2).with_new_hotspot(), page(3)];
        let before = vec![pages[0].clone(), pages[2].clone()];
        let removed = remove_page(&mut pages, 2).unwrap();
        assert_eq!(removed.id, 2);
        assert_eq!(pages, before);
    }

    #[test]
    fn test_remove_page_unknown_id_returns_none() {
        let mut pages = vec![page(1)];
        assert!(remove_page(&mut pages, 9).is_none());
        assert_eq!(pages.len(), 1);
    }

    #[test]
    fn test_replace_page_swaps_by_id() {
        let mut pages = vec![page(1), page(2)];
        let updated = pages[1].with_new_hotspot();
        assert!(replace_page(&mut pages, updated.clone()));
        assert_eq!(pages[1], updated);
        assert!(!replace_page(&mut pages, page(9)));
    }
}
