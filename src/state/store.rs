use std::path::{Path, PathBuf};

use chrono::Local;
use thiserror::Error;

use super::data::Page;

/// Errors from loading or saving the page collection
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("pages file {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// The PageStore manages the on-disk side of the page collection:
/// the pages.json document and the imported picture files.
///
/// The document is a JSON array of Page objects and is always written
/// as a whole; there is no incremental update. The caller guarantees
/// single-writer access (everything runs on the UI thread).
pub struct PageStore {
    data_dir: PathBuf,
}

impl PageStore {
    /// Create a PageStore rooted in the user's data directory:
    /// - Linux: ~/.local/share/paper-proto
    /// - macOS: ~/Library/Application Support/paper-proto
    /// - Windows: %APPDATA%\paper-proto
    ///
    /// If the directories cannot be created we panic, because the app
    /// cannot function without its storage.
    pub fn new() -> Self {
        let mut data_dir = dirs::data_dir()
            .or_else(dirs::home_dir)
            .expect("Could not determine user data directory");
        data_dir.push("paper-proto");
        Self::at(data_dir)
    }

    /// Create a PageStore rooted at an explicit directory
    pub fn at(data_dir: PathBuf) -> Self {
        std::fs::create_dir_all(data_dir.join("pictures"))
            .expect("Failed to create application data directory");
        PageStore { data_dir }
    }

    /// Path of the pages.json document
    pub fn pages_path(&self) -> PathBuf {
        self.data_dir.join("pages.json")
    }

    /// Directory holding the imported photos
    pub fn pictures_dir(&self) -> PathBuf {
        self.data_dir.join("pictures")
    }

    /// Load the full page collection.
    ///
    /// A missing file is not an error: it just means no pages yet.
    /// A present-but-unreadable or malformed file is reported to the
    /// caller instead of being silently discarded, since discarding
    /// would destroy the user's prototype on the next save.
    pub fn load(&self) -> Result<Vec<Page>, StoreError> {
        let path = self.pages_path();
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::Io { path, source: e }),
        };
        serde_json::from_str(&text).map_err(|e| StoreError::Corrupt { path, source: e })
    }

    /// Persist the full page collection, overwriting the document
    pub fn save(&self, pages: &[Page]) -> Result<(), StoreError> {
        let path = self.pages_path();
        let json = serde_json::to_string(pages).map_err(|e| StoreError::Corrupt {
            path: path.clone(),
            source: e,
        })?;
        std::fs::write(&path, json).map_err(|e| StoreError::Io { path, source: e })
    }

    /// Pick a destination path for a newly imported photo.
    /// The filename is derived from the capture timestamp, keeping the
    /// source file's extension.
    pub fn new_picture_path(&self, source: &Path) -> PathBuf {
        let stamp = Local::now().format("%Y%m%d_%H%M%S%3f");
        let ext = source
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("jpg");
        self.pictures_dir().join(format!("IMG_{}.{}", stamp, ext))
    }

    /// Best-effort removal of a page's picture file. A failure to
    /// delete is ignored; only the existence check guards the attempt.
    pub fn delete_picture(&self, page: &Page) {
        let path = Path::new(&page.picture);
        if path.exists() {
            let _ = std::fs::remove_file(path);
        }
    }
}

impl std::fmt::Debug for PageStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageStore")
            .field("data_dir", &self.data_dir)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::HotSpot;

    fn store() -> (tempfile::TempDir, PageStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = PageStore::at(dir.path().join("paper-proto"));
        (dir, store)
    }

    fn sample_pages() -> Vec<Page> {
        vec![
            Page {
                id: 1,
                name: "Page 1".into(),
                picture: "/pictures/IMG_a.jpg".into(),
                hot_spots: vec![
                    HotSpot {
                        x: 10,
                        y: 10,
                        width: 100,
                        height: 100,
                        link: "2".into(),
                    },
                    HotSpot {
                        x: -5,
                        y: 300,
                        width: 50,
                        height: 75,
                        link: String::new(),
                    },
                ],
            },
            Page {
                id: 2,
                name: "Page 2".into(),
                picture: "/pictures/IMG_b.jpg".into(),
                hot_spots: Vec::new(),
            },
        ]
    }

    #[test]
    fn test_missing_file_loads_as_empty_collection() {
        let (_dir, store) = store();
        assert_eq!(store.load().unwrap(), Vec::new());
    }

    #[test]
    fn test_save_load_round_trip_preserves_everything() {
        let (_dir, store) = store();
        let pages = sample_pages();
        store.save(&pages).unwrap();
        assert_eq!(store.load().unwrap(), pages);
    }

    #[test]
    fn test_save_overwrites_the_previous_document() {
        let (_dir, store) = store();
        store.save(&sample_pages()).unwrap();
        store.save(&[]).unwrap();
        assert_eq!(store.load().unwrap(), Vec::new());
    }

    #[test]
    fn test_document_uses_the_exact_wire_field_names() {
        let (_dir, store) = store();
        store.save(&sample_pages()).unwrap();
        let text = std::fs::read_to_string(store.pages_path()).unwrap();
        assert!(text.contains("\"hotSpots\""));
        assert!(text.contains("\"picture\""));
        assert!(text.contains("\"link\""));
        assert!(!text.contains("hot_spots"));
    }

    #[test]
    fn test_absent_hotspots_field_defaults_to_empty() {
        let (_dir, store) = store();
        std::fs::write(
            store.pages_path(),
            r#"[{"id":1,"name":"Page 1","picture":"a.jpg"}]"#,
        )
        .unwrap();
        let pages = store.load().unwrap();
        assert_eq!(pages.len(), 1);
        assert!(pages[0].hot_spots.is_empty());
    }

    #[test]
    fn test_corrupt_document_is_reported_not_discarded() {
        let (_dir, store) = store();
        std::fs::write(store.pages_path(), "{ this is not json").unwrap();
        match store.load() {
            Err(StoreError::Corrupt { .. }) => {}
            other => panic!("expected Corrupt error, got {:?}", other.map(|p| p.len())),
        }
    }

    #[test]
    fn test_picture_paths_land_in_the_pictures_dir() {
        let (_dir, store) = store();
        let path = store.new_picture_path(Path::new("/tmp/photo.PNG"));
        assert_eq!(path.parent().unwrap(), store.pictures_dir());
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("IMG_"));
        assert!(name.ends_with(".PNG"));
    }

    #[test]
    fn test_delete_picture_is_best_effort() {
        let (_dir, store) = store();
        let picture = store.pictures_dir().join("IMG_x.jpg");
        std::fs::write(&picture, b"jpeg").unwrap();
        let mut page = sample_pages().remove(0);
        page.picture = picture.to_string_lossy().into_owned();
        store.delete_picture(&page);
        assert!(!picture.exists());

        // deleting again (file gone) must not panic
        store.delete_picture(&page);
    }
}
