use iced::widget::{button, column, container, row, scrollable, text, Column};
use iced::{Alignment, Element, Length};

use crate::state::data::Page;
use crate::state::nav::Mode;
use crate::Message;

/// The sliding drawer: page list plus the main actions.
///
/// Selecting a page shows it; in edit mode each page also gets a
/// delete button and the capture/hotspot actions are available.
pub fn drawer(pages: &[Page], mode: Mode, current: Option<u32>) -> Element<'_, Message> {
    let mut list = Column::new().spacing(8);
    for page in pages {
        let style = if current == Some(page.id) {
            button::primary
        } else {
            button::secondary
        };
        let mut card = row![button(text(&page.name))
            .style(style)
            .on_press(Message::ShowPage(page.id))
            .width(Length::Fill)]
        .spacing(8)
        .align_y(Alignment::Center);
        if mode.is_edit() {
            card = card.push(
                button(text("Delete").size(13))
                    .style(button::danger)
                    .on_press(Message::DeletePage(page.id)),
            );
        }
        list = list.push(card);
    }

    let mut content = column![
        text("PaperProto").size(24),
        text("Turn photos of paper prototypes into a clickable mockup").size(12),
        scrollable(list).height(Length::Fill),
    ]
    .spacing(12);

    if mode.is_edit() {
        content = content.push(
            button("Take Picture")
                .on_press(Message::TakePicture)
                .width(Length::Fill),
        );
        content = content.push(
            button("Add Hotspot")
                .on_press(Message::AddHotspot)
                .width(Length::Fill),
        );
    }
    let toggle_label = if mode.is_edit() {
        "Switch to Preview"
    } else {
        "Switch to Edit"
    };
    content = content.push(
        button(text(toggle_label))
            .on_press(Message::ToggleMode)
            .width(Length::Fill),
    );

    container(content)
        .width(280)
        .height(Length::Fill)
        .padding(16)
        .style(container::rounded_box)
        .into()
}
