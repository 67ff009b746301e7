use iced::{Element, Task, Theme};
use iced::widget::{button, canvas, column, container, image, row, scrollable, stack, text};
use iced::{Alignment, Length};
use rfd::FileDialog;
use std::path::PathBuf;
use thiserror::Error;

// Declare the state and ui modules
mod state;
mod ui;

use state::data::{HotSpot, Page};
use state::nav::{self, Mode};
use state::pages;
use state::store::PageStore;

/// A photo that was copied into the pictures directory
#[derive(Debug, Clone)]
struct CapturedPhoto {
    picture: String,
    width: u32,
    height: u32,
}

/// Failures from the photo import handoff
#[derive(Debug, Clone, Error)]
enum CaptureError {
    #[error("permission denied reading {0}")]
    PermissionDenied(String),
    #[error("capture failed: {0}")]
    Failed(String),
}

/// Cached rendering info for the displayed page's photo
#[derive(Debug, Clone)]
struct PageImage {
    page_id: u32,
    picture: String,
    handle: image::Handle,
    width: f32,
    height: f32,
}

impl PageImage {
    /// Probe the photo's pixel dimensions so the hotspot overlay can be
    /// laid out in image coordinates. An unreadable file falls back to
    /// a placeholder size.
    fn load(page_id: u32, picture: String) -> Self {
        let (width, height) = ::image::image_dimensions(&picture)
            .map(|(w, h)| (w as f32, h as f32))
            .unwrap_or((800.0, 600.0));
        PageImage {
            page_id,
            handle: image::Handle::from_path(&picture),
            picture,
            width,
            height,
        }
    }
}

/// Main application state
///
/// Owns all global mutable UI state: the page collection (the single
/// in-memory source of truth for the session), which page is shown
/// (by id, so navigation always reflects the latest edits), the
/// edit/preview mode, and the drawer/chooser chrome.
struct PaperProto {
    store: PageStore,
    pages: Vec<Page>,
    current_page_id: Option<u32>,
    mode: Mode,
    drawer_open: bool,
    /// Index of the hotspot whose link chooser is open
    link_chooser: Option<usize>,
    page_image: Option<PageImage>,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    ToggleDrawer,
    /// Flip between edit and preview mode
    ToggleMode,
    /// User asked to capture a new page photo
    TakePicture,
    /// Background photo import completed
    CaptureComplete(Result<CapturedPhoto, CaptureError>),
    ShowPage(u32),
    DeletePage(u32),
    /// Append a default hotspot to the current page
    AddHotspot,
    /// A gesture step moved or resized a hotspot of the current page
    HotspotChanged { index: usize, hotspot: HotSpot },
    HotspotDeleted(usize),
    /// Preview-mode tap on a hotspot, carrying its stored link
    HotspotClicked(String),
    OpenLinkChooser(usize),
    LinkSelected { index: usize, target: u32 },
    CloseLinkChooser,
}

impl PaperProto {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let store = PageStore::new();

        // A corrupt pages.json is not silently discarded: the next save
        // would overwrite the user's whole prototype. Fail fast instead.
        let pages = store.load().unwrap_or_else(|e| {
            panic!("Failed to load pages: {e}. Repair or remove the file to continue.")
        });

        println!("📋 PaperProto initialized with {} pages", pages.len());
        let status = format!("Ready. {} pages loaded.", pages.len());

        let mut app = PaperProto {
            store,
            current_page_id: pages.first().map(|p| p.id),
            pages,
            mode: Mode::Edit,
            drawer_open: false,
            link_chooser: None,
            page_image: None,
            status,
        };
        app.sync_page_image();
        (app, Task::none())
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        let task = self.apply(message);
        self.sync_page_image();
        task
    }

    fn apply(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ToggleDrawer => {
                self.drawer_open = !self.drawer_open;
            }
            Message::ToggleMode => {
                self.mode = self.mode.toggled();
                self.link_chooser = None;
                self.drawer_open = false;
            }
            Message::TakePicture => {
                // Show the native photo picker dialog
                let picked = FileDialog::new()
                    .set_title("Select a Photo of Your Paper Prototype")
                    .add_filter("Images", &["png", "jpg", "jpeg", "bmp", "webp"])
                    .pick_file();

                if let Some(source) = picked {
                    self.drawer_open = false;
                    self.status = format!("Importing {}...", source.display());
                    let dest = self.store.new_picture_path(&source);

                    // Launch the async import task
                    return Task::perform(
                        capture_photo(source, dest),
                        Message::CaptureComplete,
                    );
                }
            }
            Message::CaptureComplete(Ok(photo)) => {
                let page = pages::create_page(&self.pages, photo.picture);
                self.status = format!(
                    "✅ Added {} ({}×{})",
                    page.name, photo.width, photo.height
                );
                self.current_page_id = Some(page.id);
                self.pages.push(page);
                self.persist();
            }
            Message::CaptureComplete(Err(e)) => {
                self.status = format!("⚠️ {}", e);
            }
            Message::ShowPage(id) => {
                self.current_page_id = Some(id);
                self.drawer_open = false;
            }
            Message::DeletePage(id) => {
                if let Some(removed) = pages::remove_page(&mut self.pages, id) {
                    // Best-effort removal of the backing photo
                    self.store.delete_picture(&removed);
                    self.persist();
                    if self.current_page_id == Some(id) {
                        self.current_page_id = self.pages.first().map(|p| p.id);
                    }
                    self.status = format!("Deleted {}", removed.name);
                }
            }
            Message::AddHotspot => {
                self.drawer_open = false;
                if let Some(page) = self.current_page() {
                    let updated = page.with_new_hotspot();
                    self.commit_page(updated);
                }
            }
            Message::HotspotChanged { index, hotspot } => {
                if let Some(page) = self.current_page() {
                    let updated = page.with_hotspot(index, hotspot);
                    self.commit_page(updated);
                }
            }
            Message::HotspotDeleted(index) => {
                if let Some(page) = self.current_page() {
                    let updated = page.without_hotspot(index);
                    self.commit_page(updated);
                }
            }
            Message::HotspotClicked(link) => {
                if let Some(target) = nav::click_target(self.mode, &self.pages, &link) {
                    self.current_page_id = Some(target);
                }
            }
            Message::OpenLinkChooser(index) => {
                self.link_chooser = Some(index);
            }
            Message::LinkSelected { index, target } => {
                if let Some(page) = self.current_page() {
                    if let Some(hotspot) = page.hot_spots.get(index) {
                        let mut hotspot = hotspot.clone();
                        hotspot.link = target.to_string();
                        let updated = page.with_hotspot(index, hotspot);
                        self.commit_page(updated);
                    }
                }
                self.link_chooser = None;
            }
            Message::CloseLinkChooser => {
                self.link_chooser = None;
            }
        }

        Task::none()
    }

    fn current_page(&self) -> Option<&Page> {
        self.current_page_id
            .and_then(|id| pages::find_page(&self.pages, id))
    }

    /// Commit a functional page update: replace the stored page and
    /// persist the whole collection
    fn commit_page(&mut self, updated: Page) {
        if pages::replace_page(&mut self.pages, updated) {
            self.persist();
        }
    }

    /// Write the collection to disk. Failures are reported in the
    /// status line but are never fatal.
    fn persist(&mut self) {
        if let Err(e) = self.store.save(&self.pages) {
            eprintln!("⚠️ {}", e);
            self.status = format!("⚠️ Failed to save pages: {}", e);
        }
    }

    /// Keep the cached photo handle in step with the displayed page
    fn sync_page_image(&mut self) {
        let wanted = self.current_page().map(|p| (p.id, p.picture.clone()));
        let cached = self
            .page_image
            .as_ref()
            .map(|img| (img.page_id, img.picture.clone()));
        if wanted != cached {
            self.page_image = wanted.map(|(id, picture)| PageImage::load(id, picture));
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let mode_label = match self.mode {
            Mode::Edit => "Edit mode",
            Mode::Preview => "Preview mode",
        };
        let top_bar = row![
            button("☰ Pages").on_press(Message::ToggleDrawer),
            text(mode_label).size(14),
            text(&self.status).size(14),
        ]
        .spacing(16)
        .padding(8)
        .align_y(Alignment::Center);

        let content: Element<Message> = match (self.current_page(), &self.page_image) {
            (Some(page), Some(img)) => self.page_view(page, img),
            _ => welcome(),
        };

        let main_col = column![
            top_bar,
            container(content).width(Length::Fill).height(Length::Fill),
        ];

        let body: Element<Message> = if self.drawer_open {
            row![
                ui::drawer::drawer(&self.pages, self.mode, self.current_page_id),
                main_col,
            ]
            .into()
        } else {
            main_col.into()
        };

        match (self.link_chooser, self.current_page()) {
            (Some(index), Some(page)) => {
                stack![body, self.link_chooser_view(page, index)].into()
            }
            _ => body,
        }
    }

    /// The displayed page: its photo at native size with the hotspot
    /// overlay canvas laid exactly on top, so overlay coordinates are
    /// image coordinates
    fn page_view<'a>(&'a self, page: &'a Page, img: &'a PageImage) -> Element<'a, Message> {
        let photo = image(img.handle.clone())
            .width(Length::Fixed(img.width))
            .height(Length::Fixed(img.height));
        let overlay = canvas(ui::hotspots::HotspotOverlay {
            page,
            mode: self.mode,
        })
        .width(Length::Fixed(img.width))
        .height(Length::Fixed(img.height));

        scrollable(stack![photo, overlay]).into()
    }

    /// Target-page chooser for a hotspot, centered over everything.
    /// The currently selected target is visually distinguished;
    /// self-links are permitted.
    fn link_chooser_view<'a>(&'a self, page: &'a Page, index: usize) -> Element<'a, Message> {
        let current_link = page
            .hot_spots
            .get(index)
            .map(|h| h.link.as_str())
            .unwrap_or("");

        let mut list = column![].spacing(4);
        for target in &self.pages {
            let selected = target.id.to_string() == current_link;
            let label = if selected {
                format!("{} (selected)", target.name)
            } else {
                target.name.clone()
            };
            list = list.push(
                button(text(label))
                    .style(if selected {
                        button::primary
                    } else {
                        button::text
                    })
                    .on_press(Message::LinkSelected {
                        index,
                        target: target.id,
                    })
                    .width(Length::Fill),
            );
        }

        let dialog = container(
            column![
                text("Select Target Page").size(20),
                text("Select the page this hotspot should link to:").size(13),
                scrollable(list).height(Length::Fixed(300.0)),
                button("Close").on_press(Message::CloseLinkChooser),
            ]
            .spacing(12),
        )
        .padding(20)
        .max_width(360)
        .style(container::rounded_box);

        container(dialog)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Onboarding screen shown while no page is selected
fn welcome<'a>() -> Element<'a, Message> {
    let content = column![
        text("Welcome to PaperProto").size(32),
        text(
            "Take pictures of your paper prototypes and use them as an \
             interactive mockup. Mark a hotspot to simulate a button: in \
             preview mode, clicking it opens another picture.",
        )
        .size(16),
        text(
            "First, open the drawer with the ☰ Pages button and click \
             'Take Picture'. Then 'Add Hotspot' puts an editable box on \
             the page: drag it into place, resize it by its corners, and \
             use the + button to pick the page it should link to.",
        )
        .size(16),
        text(
            "When the hotspots are linked, click 'Switch to Preview' and \
             try your prototype.",
        )
        .size(16),
    ]
    .spacing(12)
    .max_width(640);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

fn main() -> iced::Result {
    iced::application("PaperProto", PaperProto::update, PaperProto::view)
        .theme(PaperProto::theme)
        .centered()
        .run_with(PaperProto::new)
}

/// Async function to copy a picked photo into the app's pictures
/// directory and probe its dimensions.
/// Runs in a background thread to avoid blocking the UI; its result is
/// marshaled back onto the UI thread as a `CaptureComplete` message.
async fn capture_photo(source: PathBuf, dest: PathBuf) -> Result<CapturedPhoto, CaptureError> {
    tokio::fs::copy(&source, &dest).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::PermissionDenied {
            CaptureError::PermissionDenied(source.display().to_string())
        } else {
            CaptureError::Failed(format!("could not store {}: {}", source.display(), e))
        }
    })?;

    match ::image::image_dimensions(&dest) {
        Ok((width, height)) => Ok(CapturedPhoto {
            picture: dest.to_string_lossy().into_owned(),
            width,
            height,
        }),
        Err(e) => {
            // Don't leave an unusable copy behind
            let _ = tokio::fs::remove_file(&dest).await;
            Err(CaptureError::Failed(format!(
                "unreadable image {}: {}",
                dest.display(),
                e
            )))
        }
    }
}
