/// Link resolution and edit/preview navigation
///
/// A hotspot's link is the decimal string of a target page id (or empty
/// for "no target"). Resolution failures are silent: an empty,
/// unparsable, or dangling link simply does not navigate.

use super::data::Page;
use super::pages::find_page;

/// Global interaction mode: hotspots are either editable boxes or
/// transparent tap targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Edit,
    Preview,
}

impl Mode {
    pub fn toggled(self) -> Mode {
        match self {
            Mode::Edit => Mode::Preview,
            Mode::Preview => Mode::Edit,
        }
    }

    pub fn is_edit(self) -> bool {
        self == Mode::Edit
    }
}

/// Resolve a stored link against the current collection.
/// Returns the target page id only if a page with that id exists.
pub fn resolve_link(pages: &[Page], link: &str) -> Option<u32> {
    let id = link.parse::<u32>().ok()?;
    find_page(pages, id).map(|p| p.id)
}

/// Mode-dependent click behavior: clicking a hotspot never navigates in
/// edit mode; in preview mode it navigates iff the link resolves.
pub fn click_target(mode: Mode, pages: &[Page], link: &str) -> Option<u32> {
    match mode {
        Mode::Edit => None,
        Mode::Preview => resolve_link(pages, link),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages() -> Vec<Page> {
        [1, 3, 4]
            .into_iter()
            .map(|id| Page {
                id,
                name: format!("Page {}", id),
                picture: String::new(),
                hot_spots: Vec::new(),
            })
            .collect()
    }

    #[test]
    fn test_preview_click_navigates_to_existing_page() {
        assert_eq!(click_target(Mode::Preview, &pages(), "3"), Some(3));
    }

    #[test]
    fn test_empty_link_is_a_no_op() {
        assert_eq!(click_target(Mode::Preview, &pages(), ""), None);
    }

    #[test]
    fn test_dangling_link_is_a_no_op() {
        assert_eq!(click_target(Mode::Preview, &pages(), "999"), None);
    }

    #[test]
    fn test_garbage_link_is_a_no_op() {
        assert_eq!(click_target(Mode::Preview, &pages(), "page three"), None);
        assert_eq!(click_target(Mode::Preview, &pages(), "-1"), None);
    }

    #[test]
    fn test_edit_mode_suppresses_navigation() {
        // even a perfectly valid link must not navigate while editing
        assert_eq!(click_target(Mode::Edit, &pages(), "3"), None);
        assert_eq!(click_target(Mode::Edit, &pages(), "1"), None);
    }

    #[test]
    fn test_self_links_are_permitted() {
        assert_eq!(resolve_link(&pages(), "1"), Some(1));
    }

    #[test]
    fn test_mode_toggle_round_trips() {
        assert_eq!(Mode::Edit.toggled(), Mode::Preview);
        assert_eq!(Mode::Edit.toggled().toggled(), Mode::Edit);
    }
}
