use iced::alignment::{Horizontal, Vertical};
use iced::mouse::{self, Cursor};
use iced::widget::canvas::{self, Path, Program, Stroke};
use iced::{Color, Point, Rectangle, Renderer, Size, Theme};

use crate::state::data::Page;
use crate::state::geometry::{DragRect, Handle};
use crate::state::nav::Mode;
use crate::Message;

/// Radius of the circular delete/link buttons on an editable hotspot
const BUTTON_RADIUS: f32 = 10.0;
/// How far the button centers sit inside the hotspot corners, so the
/// buttons do not cover the resize handles
const BUTTON_INSET: f32 = 26.0;
/// Drawn radius of a corner resize handle
const HANDLE_RADIUS: f32 = 6.0;

/// Canvas overlay laid exactly over the page photo, so canvas
/// coordinates are image coordinates.
///
/// In edit mode hotspots render as red-bordered boxes with corner
/// resize handles plus delete and link buttons; drags are translated
/// into `HotspotChanged` messages on every gesture step. In preview
/// mode hotspots render as translucent tap targets and a click emits
/// `HotspotClicked` with the stored link.
pub struct HotspotOverlay<'a> {
    pub page: &'a Page,
    pub mode: Mode,
}

/// Transient gesture state for the overlay
#[derive(Debug, Clone, Default)]
pub struct Interaction {
    drag: Option<Drag>,
}

#[derive(Debug, Clone)]
struct Drag {
    /// Index of the grabbed hotspot in the page's list
    index: usize,
    kind: DragKind,
    /// Cursor position at the previous gesture step
    last: Point,
    /// Working geometry, seeded from the hotspot at drag start
    rect: DragRect,
}

#[derive(Debug, Clone, Copy)]
enum DragKind {
    Move,
    Resize(Handle),
}

impl Program<Message> for HotspotOverlay<'_> {
    type State = Interaction;

    fn update(
        &self,
        state: &mut Self::State,
        event: canvas::Event,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> (canvas::event::Status, Option<Message>) {
        match event {
            canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let Some(pos) = cursor.position_in(bounds) else {
                    return (canvas::event::Status::Ignored, None);
                };
                match self.mode {
                    Mode::Edit => self.press_edit(state, pos),
                    Mode::Preview => self.press_preview(pos),
                }
            }

            canvas::Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                // Keep tracking even when the cursor leaves the canvas:
                // hotspots may be dragged outside the image
                let Some(pos) = cursor
                    .position()
                    .map(|p| Point::new(p.x - bounds.x, p.y - bounds.y))
                else {
                    return (canvas::event::Status::Ignored, None);
                };
                if let Some(drag) = &mut state.drag {
                    let dx = pos.x - drag.last.x;
                    let dy = pos.y - drag.last.y;
                    drag.last = pos;
                    drag.rect = match drag.kind {
                        DragKind::Move => drag.rect.moved(dx, dy),
                        DragKind::Resize(handle) => drag.rect.resized(handle, dx, dy),
                    };
                    // Commit every gesture step straight into the model
                    if let Some(original) = self.page.hot_spots.get(drag.index) {
                        return (
                            canvas::event::Status::Captured,
                            Some(Message::HotspotChanged {
                                index: drag.index,
                                hotspot: drag.rect.commit(original),
                            }),
                        );
                    }
                }
                (canvas::event::Status::Ignored, None)
            }

            canvas::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                if state.drag.take().is_some() {
                    return (canvas::event::Status::Captured, None);
                }
                (canvas::event::Status::Ignored, None)
            }

            _ => (canvas::event::Status::Ignored, None),
        }
    }

    fn draw(
        &self,
        state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        for (index, hotspot) in self.page.hot_spots.iter().enumerate() {
            // Show the un-rounded working geometry for the grabbed hotspot
            let rect = match &state.drag {
                Some(drag) if drag.index == index => drag.rect,
                _ => DragRect::from_hotspot(hotspot),
            };
            match self.mode {
                Mode::Edit => draw_editable(&mut frame, &rect, hotspot.is_linked()),
                Mode::Preview => draw_tap_target(&mut frame, &rect, hotspot.is_linked()),
            }
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> mouse::Interaction {
        if state.drag.is_some() {
            return mouse::Interaction::Grabbing;
        }
        let Some(pos) = cursor.position_in(bounds) else {
            return mouse::Interaction::Idle;
        };
        for hotspot in self.page.hot_spots.iter().rev() {
            let rect = DragRect::from_hotspot(hotspot);
            match self.mode {
                Mode::Edit => {
                    if rect.handle_at(pos.x, pos.y).is_some() {
                        return mouse::Interaction::Crosshair;
                    }
                    if in_circle(delete_center(&rect), pos) || in_circle(link_center(&rect), pos) {
                        return mouse::Interaction::Pointer;
                    }
                    if rect.contains(pos.x, pos.y) {
                        return mouse::Interaction::Grab;
                    }
                }
                Mode::Preview => {
                    if rect.contains(pos.x, pos.y) && hotspot.is_linked() {
                        return mouse::Interaction::Pointer;
                    }
                }
            }
        }
        mouse::Interaction::Idle
    }
}

impl HotspotOverlay<'_> {
    /// Edit-mode press: walk the hotspots topmost-first and grab the
    /// first hit, checking handles and buttons before the interior
    fn press_edit(
        &self,
        state: &mut Interaction,
        pos: Point,
    ) -> (canvas::event::Status, Option<Message>) {
        for (index, hotspot) in self.page.hot_spots.iter().enumerate().rev() {
            let rect = DragRect::from_hotspot(hotspot);

            if let Some(handle) = rect.handle_at(pos.x, pos.y) {
                state.drag = Some(Drag {
                    index,
                    kind: DragKind::Resize(handle),
                    last: pos,
                    rect,
                });
                return (canvas::event::Status::Captured, None);
            }
            if in_circle(delete_center(&rect), pos) {
                return (
                    canvas::event::Status::Captured,
                    Some(Message::HotspotDeleted(index)),
                );
            }
            if in_circle(link_center(&rect), pos) {
                return (
                    canvas::event::Status::Captured,
                    Some(Message::OpenLinkChooser(index)),
                );
            }
            if rect.contains(pos.x, pos.y) {
                state.drag = Some(Drag {
                    index,
                    kind: DragKind::Move,
                    last: pos,
                    rect,
                });
                return (canvas::event::Status::Captured, None);
            }
        }
        (canvas::event::Status::Ignored, None)
    }

    /// Preview-mode press: the topmost hotspot under the cursor wins
    fn press_preview(&self, pos: Point) -> (canvas::event::Status, Option<Message>) {
        for hotspot in self.page.hot_spots.iter().rev() {
            let rect = DragRect::from_hotspot(hotspot);
            if rect.contains(pos.x, pos.y) {
                return (
                    canvas::event::Status::Captured,
                    Some(Message::HotspotClicked(hotspot.link.clone())),
                );
            }
        }
        (canvas::event::Status::Ignored, None)
    }
}

fn delete_center(rect: &DragRect) -> Point {
    Point::new(rect.x + rect.width - BUTTON_INSET, rect.y + BUTTON_INSET)
}

fn link_center(rect: &DragRect) -> Point {
    Point::new(rect.x + BUTTON_INSET, rect.y + BUTTON_INSET)
}

fn in_circle(center: Point, pos: Point) -> bool {
    let dx = pos.x - center.x;
    let dy = pos.y - center.y;
    dx * dx + dy * dy <= BUTTON_RADIUS * BUTTON_RADIUS
}

fn draw_editable(frame: &mut canvas::Frame, rect: &DragRect, linked: bool) {
    let top_left = Point::new(rect.x, rect.y);
    let size = Size::new(rect.width, rect.height);

    frame.stroke(
        &Path::rectangle(top_left, size),
        Stroke::default()
            .with_color(Color::from_rgb8(229, 57, 53))
            .with_width(2.0),
    );

    // Corner resize handles
    for handle in Handle::ALL {
        let (cx, cy) = rect.handle_center(handle);
        frame.fill(
            &Path::circle(Point::new(cx, cy), HANDLE_RADIUS),
            Color::from_rgba8(33, 150, 243, 0.8),
        );
    }

    // Delete button, top-right
    button(frame, delete_center(rect), Color::from_rgb8(229, 57, 53), "×");

    // Link button, top-left: green once a target is set
    let link_color = if linked {
        Color::from_rgb8(67, 160, 71)
    } else {
        Color::from_rgb8(117, 117, 117)
    };
    button(frame, link_center(rect), link_color, "+");
}

fn draw_tap_target(frame: &mut canvas::Frame, rect: &DragRect, linked: bool) {
    // Semi-transparent blue for linked hotspots, red for unlinked
    let fill = if linked {
        Color::from_rgba8(0, 122, 255, 0.2)
    } else {
        Color::from_rgba8(255, 0, 0, 0.2)
    };
    frame.fill_rectangle(
        Point::new(rect.x, rect.y),
        Size::new(rect.width, rect.height),
        fill,
    );
}

fn button(frame: &mut canvas::Frame, center: Point, color: Color, glyph: &str) {
    frame.fill(&Path::circle(center, BUTTON_RADIUS), color);
    frame.fill_text(canvas::Text {
        content: glyph.to_string(),
        position: center,
        color: Color::WHITE,
        size: 14.0.into(),
        horizontal_alignment: Horizontal::Center,
        vertical_alignment: Vertical::Center,
        ..canvas::Text::default()
    });
}
