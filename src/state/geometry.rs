/// Interactive hotspot geometry editing
///
/// A drag gesture edits a transient float rectangle (`DragRect`) that is
/// seeded from the persisted `HotSpot` when the gesture starts and
/// committed (rounded) back into the model on every gesture step. There
/// is no draft/commit staging beyond that: each step the shell replaces
/// the hotspot and persists the collection.

use super::data::HotSpot;

/// Minimum hotspot edge length after any resize step
pub const MIN_HOTSPOT_SIZE: f32 = 50.0;

/// Edge length of the square hit zone around each corner handle
pub const HANDLE_HIT_SIZE: f32 = 16.0;

/// Which corner of a hotspot a resize gesture grabbed.
/// Each handle anchors the geometrically opposite corner: that corner's
/// position must not move during the gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handle {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Handle {
    pub const ALL: [Handle; 4] = [
        Handle::TopLeft,
        Handle::TopRight,
        Handle::BottomLeft,
        Handle::BottomRight,
    ];
}

/// Transient working geometry for one hotspot while it is being dragged
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl DragRect {
    /// Seed the working geometry from the persisted hotspot
    pub fn from_hotspot(hotspot: &HotSpot) -> Self {
        DragRect {
            x: hotspot.x as f32,
            y: hotspot.y as f32,
            width: hotspot.width as f32,
            height: hotspot.height as f32,
        }
    }

    /// Round the working geometry back into a hotspot, keeping `original`'s link
    pub fn commit(&self, original: &HotSpot) -> HotSpot {
        HotSpot {
            x: self.x.round() as i32,
            y: self.y.round() as i32,
            width: self.width.round() as i32,
            height: self.height.round() as i32,
            link: original.link.clone(),
        }
    }

    /// Accumulate a move delta. There is no clamping to the image
    /// bounds: a hotspot may be dragged outside the picture.
    pub fn moved(self, dx: f32, dy: f32) -> Self {
        DragRect {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// Apply one resize step from the given handle.
    ///
    /// Handles on the left edge move `x` with the finger and recompute
    /// `width` against the fixed right edge; top-edge handles do the
    /// same for `y`/`height` against the fixed bottom edge. A step that
    /// would shrink either side below `MIN_HOTSPOT_SIZE` is discarded
    /// wholesale: the rectangle keeps its pre-step geometry.
    pub fn resized(self, handle: Handle, dx: f32, dy: f32) -> Self {
        let right = self.x + self.width;
        let bottom = self.y + self.height;

        let (x, width) = match handle {
            Handle::TopLeft | Handle::BottomLeft => {
                let x = self.x + dx;
                (x, right - x)
            }
            Handle::TopRight | Handle::BottomRight => (self.x, self.width + dx),
        };
        let (y, height) = match handle {
            Handle::TopLeft | Handle::TopRight => {
                let y = self.y + dy;
                (y, bottom - y)
            }
            Handle::BottomLeft | Handle::BottomRight => (self.y, self.height + dy),
        };

        if width >= MIN_HOTSPOT_SIZE && height >= MIN_HOTSPOT_SIZE {
            DragRect {
                x,
                y,
                width,
                height,
            }
        } else {
            self
        }
    }

    /// Position of a corner handle's center
    pub fn handle_center(&self, handle: Handle) -> (f32, f32) {
        match handle {
            Handle::TopLeft => (self.x, self.y),
            Handle::TopRight => (self.x + self.width, self.y),
            Handle::BottomLeft => (self.x, self.y + self.height),
            Handle::BottomRight => (self.x + self.width, self.y + self.height),
        }
    }

    /// Corner handle whose hit zone contains the point, if any
    pub fn handle_at(&self, px: f32, py: f32) -> Option<Handle> {
        let half = HANDLE_HIT_SIZE / 2.0;
        Handle::ALL.into_iter().find(|&handle| {
            let (cx, cy) = self.handle_center(handle);
            (px - cx).abs() <= half && (py - cy).abs() <= half
        })
    }

    /// Whether the point falls inside the rectangle
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px <= self.x + self.width && py >= self.y && py <= self.y + self.height
    }
}
