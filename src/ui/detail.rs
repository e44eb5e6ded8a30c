/// Code popup and full-size lightbox
///
/// The lightbox steps through every loaded icon in gallery order (groups in
/// display order, load order inside a group), wrapping at both ends.

use iced::widget::{button, column, container, row, svg, text, text_editor, Space};
use iced::{Alignment, ContentFit, Element, Length};

use crate::snippet::{self, SnippetStyle};
use crate::state::catalog::IconCatalog;
use crate::state::data::{CatalogEntry, IconId};
use crate::ui::clipboard::CopyTarget;
use crate::ui::gallery::preview_style;
use crate::{EditorSlot, Message};

/// Index after `index`, wrapping to 0; `None` when there is nothing to show
pub fn wrap_next(index: usize, total: usize) -> Option<usize> {
    (total > 0).then(|| (index + 1) % total)
}

/// Index before `index`, wrapping to the last; `None` when there is nothing to show
pub fn wrap_previous(index: usize, total: usize) -> Option<usize> {
    (total > 0).then(|| (index % total + total - 1) % total)
}

/// Full-size viewer state, tracking the shown icon by id so newly loaded
/// icons do not shift it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lightbox {
    pub current: IconId,
}

impl Lightbox {
    pub fn open(id: IconId) -> Self {
        Self { current: id }
    }

    pub fn show_next(&mut self, catalog: &IconCatalog) {
        self.step(catalog, wrap_next);
    }

    pub fn show_previous(&mut self, catalog: &IconCatalog) {
        self.step(catalog, wrap_previous);
    }

    fn step(&mut self, catalog: &IconCatalog, advance: fn(usize, usize) -> Option<usize>) {
        let icons = catalog.flattened();
        let index = icons
            .iter()
            .position(|entry| entry.id == self.current)
            .unwrap_or(0);
        if let Some(next) = advance(index, icons.len()) {
            self.current = icons[next].id;
        }
    }

    /// "3 / 12"
    pub fn position_label(&self, catalog: &IconCatalog) -> String {
        let index = catalog.position_of(self.current).unwrap_or(0);
        format!("{} / {}", index + 1, catalog.len())
    }
}

/// Snippets and preview flags for one icon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailModel {
    pub id: IconId,
    pub name: String,
    pub markup: String,
    pub stylesheet: String,
    pub needs_dark_background: bool,
}

impl DetailModel {
    pub fn new(entry: &CatalogEntry, style: &SnippetStyle, dark_keyword: &str) -> Self {
        Self {
            id: entry.id,
            name: entry.icon.name.clone(),
            markup: snippet::markup(&entry.icon, style),
            stylesheet: snippet::single_stylesheet(&entry.icon, style),
            needs_dark_background: entry.icon.needs_dark_background(dark_keyword),
        }
    }
}

/// Open code popup: the model plus editor buffers used for highlighting
pub struct CodePopup {
    pub detail: DetailModel,
    pub markup: text_editor::Content,
    pub stylesheet: text_editor::Content,
}

impl CodePopup {
    pub fn new(detail: DetailModel) -> Self {
        let markup = text_editor::Content::with_text(&detail.markup);
        let stylesheet = text_editor::Content::with_text(&detail.stylesheet);
        Self {
            detail,
            markup,
            stylesheet,
        }
    }

    pub fn editor_mut(&mut self, slot: EditorSlot) -> Option<&mut text_editor::Content> {
        match slot {
            EditorSlot::Markup => Some(&mut self.markup),
            EditorSlot::Stylesheet => Some(&mut self.stylesheet),
            EditorSlot::ManualCopy => None,
        }
    }
}

/// Draw the code popup
pub fn code_popup_view<'a>(
    popup: &'a CodePopup,
    catalog: &'a IconCatalog,
    copied: Option<&CopyTarget>,
    theme: iced::highlighter::Theme,
) -> Element<'a, Message> {
    let detail = &popup.detail;
    let dark = detail.needs_dark_background;

    let icon_preview: Element<'a, Message> = match catalog.get(detail.id) {
        Some(entry) => container(
            svg(entry.icon.display_content.clone())
                .width(Length::Fixed(48.0))
                .height(Length::Fixed(48.0)),
        )
        .padding(8)
        .style(move |t| preview_style(t, dark))
        .into(),
        None => Space::with_width(Length::Fixed(48.0)).into(),
    };

    let header = row![
        icon_preview,
        text(detail.name.as_str()).size(18).width(Length::Fill),
        button(text("🔍 Full Size")).on_press(Message::OpenLightbox(detail.id)),
        button(text("✕"))
            .style(button::secondary)
            .on_press(Message::CloseCodePopup),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    let body = column![
        header,
        snippet_section(
            "HTML",
            &popup.markup,
            "html",
            EditorSlot::Markup,
            CopyTarget::Markup,
            copied,
            theme
        ),
        snippet_section(
            "SCSS",
            &popup.stylesheet,
            "css",
            EditorSlot::Stylesheet,
            CopyTarget::Stylesheet,
            copied,
            theme
        ),
    ]
    .spacing(16);

    container(body)
        .width(Length::Fixed(560.0))
        .padding(20)
        .style(container::rounded_box)
        .into()
}

fn snippet_section<'a>(
    title: &'a str,
    content: &'a text_editor::Content,
    syntax: &str,
    slot: EditorSlot,
    target: CopyTarget,
    copied: Option<&CopyTarget>,
    theme: iced::highlighter::Theme,
) -> Element<'a, Message> {
    let label = if copied == Some(&target) {
        "✓ Copied!"
    } else {
        "📋 Copy"
    };

    let editor = text_editor(content)
        .on_action(move |action| Message::EditorAction(slot, action))
        .highlight(syntax, theme);

    column![
        row![
            text(title).size(14).width(Length::Fill),
            button(text(label).size(13))
                .style(if copied == Some(&target) {
                    button::success
                } else {
                    button::primary
                })
                .on_press(Message::CopySnippet(target)),
        ]
        .align_y(Alignment::Center),
        editor,
    ]
    .spacing(6)
    .into()
}

/// Draw the full-size lightbox
pub fn lightbox_view<'a>(lightbox: &Lightbox, catalog: &'a IconCatalog) -> Element<'a, Message> {
    let Some(entry) = catalog.get(lightbox.current) else {
        return text("Icon no longer available").into();
    };

    let image = svg(entry.icon.display_content.clone())
        .width(Length::Fill)
        .height(Length::Fill)
        .content_fit(ContentFit::Contain);

    let controls = row![
        button(text("◀")).on_press(Message::ShowPrevious),
        column![
            text(entry.icon.name.as_str()).size(16),
            text(lightbox.position_label(catalog)).size(13),
        ]
        .align_x(Alignment::Center)
        .width(Length::Fill),
        button(text("▶")).on_press(Message::ShowNext),
        button(text("✕"))
            .style(button::secondary)
            .on_press(Message::CloseLightbox),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    container(column![image, controls].spacing(16))
        .width(Length::Fixed(720.0))
        .height(Length::Fixed(600.0))
        .padding(20)
        .style(container::rounded_box)
        .into()
}
