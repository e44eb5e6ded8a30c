/// User interface module
///
/// - Folder tree gallery (gallery.rs)
/// - Code popup and lightbox (detail.rs)
/// - Clipboard copy with manual fallback (clipboard.rs)

pub mod clipboard;
pub mod detail;
pub mod gallery;

use iced::widget::{button, center, column, container, mouse_area, opaque, row, stack, text, text_editor};
use iced::{Alignment, Color, Element, Length};

use crate::{EditorSlot, Message};

/// A dismissible message shown on top of the gallery
pub enum Notice {
    /// Plain information or error text
    Info(String),
    /// Clipboard refused the text; offer it for manual copying
    ManualCopy(text_editor::Content),
}

/// Layer `content` over `base`, dimming the base; clicking outside sends `on_blur`
pub fn modal<'a>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_blur: Message,
) -> Element<'a, Message> {
    stack![
        base.into(),
        opaque(
            mouse_area(center(opaque(content)).style(|_theme| {
                container::Style {
                    background: Some(
                        Color {
                            a: 0.8,
                            ..Color::BLACK
                        }
                        .into(),
                    ),
                    ..container::Style::default()
                }
            }))
            .on_press(on_blur)
        )
    ]
    .into()
}

/// Draw a notice dialog
pub fn notice_view(notice: &Notice) -> Element<'_, Message> {
    let body: Element<'_, Message> = match notice {
        Notice::Info(message) => text(message.as_str()).into(),
        Notice::ManualCopy(content) => column![
            text("Unable to copy to clipboard. Please copy manually:"),
            text_editor(content)
                .on_action(|action| Message::EditorAction(EditorSlot::ManualCopy, action))
                .height(Length::Fixed(220.0)),
        ]
        .spacing(10)
        .into(),
    };

    container(
        column![
            body,
            row![button(text("OK")).on_press(Message::DismissNotice)]
                .align_y(Alignment::Center),
        ]
        .spacing(16)
        .align_x(Alignment::End),
    )
    .width(Length::Fixed(460.0))
    .padding(20)
    .style(container::rounded_box)
    .into()
}
