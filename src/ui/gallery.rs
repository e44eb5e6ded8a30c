/// Folder tree gallery
///
/// `project` turns the catalog into a plain display model (what the tree
/// shows, in which order); `view` only draws that model.

use iced::widget::{button, column, container, row, scrollable, svg, text, Column, Space};
use iced::{Alignment, Color, Element, Length};
use iced_aw::Wrap;

use crate::folder::FolderKey;
use crate::state::catalog::IconCatalog;
use crate::state::data::{Icon, IconId};
use crate::state::settings::{ViewMode, ViewerConfig};
use crate::ui::clipboard::CopyTarget;
use crate::Message;

/// Tile edge in grid mode
const TILE_SIZE: f32 = 140.0;
/// Preview edge inside a tile
const PREVIEW_SIZE: f32 = 64.0;
const GRID_SPACING: f32 = 12.0;

/// Everything the gallery shows for the current catalog state
#[derive(Debug)]
pub struct GalleryModel<'a> {
    pub file_count: usize,
    pub groups: Vec<GroupModel<'a>>,
}

/// One folder header plus its icons
#[derive(Debug)]
pub struct GroupModel<'a> {
    pub key: &'a FolderKey,
    pub label: String,
    pub count: usize,
    pub expanded: bool,
    /// Folder-wide SCSS makes no sense for unrelated standalone files
    pub can_copy_stylesheet: bool,
    pub items: Vec<ItemModel<'a>>,
}

#[derive(Debug)]
pub struct ItemModel<'a> {
    pub id: IconId,
    pub icon: &'a Icon,
    pub dark_background: bool,
}

impl GalleryModel<'_> {
    pub fn is_empty(&self) -> bool {
        self.file_count == 0
    }
}

/// Project the catalog into the display model
pub fn project<'a>(catalog: &'a IconCatalog, config: &ViewerConfig) -> GalleryModel<'a> {
    let groups = catalog
        .groups_in_display_order()
        .into_iter()
        .map(|key| {
            let entries = catalog.group(key);
            GroupModel {
                key,
                label: key.display_label(&config.mount_segment),
                count: entries.len(),
                expanded: catalog.is_expanded(key),
                can_copy_stylesheet: *key != FolderKey::Standalone,
                items: entries
                    .iter()
                    .map(|entry| ItemModel {
                        id: entry.id,
                        icon: &entry.icon,
                        dark_background: entry
                            .icon
                            .needs_dark_background(&config.dark_preview_keyword),
                    })
                    .collect(),
            }
        })
        .collect();

    GalleryModel {
        file_count: catalog.len(),
        groups,
    }
}

/// "1 file selected", "3 files selected"
pub fn file_count_label(count: usize) -> String {
    format!("{} file{} selected", count, plural(count))
}

/// "(1 file)", "(12 files)"
pub fn group_count_label(count: usize) -> String {
    format!("({} file{})", count, plural(count))
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Draw the gallery
pub fn view<'a>(
    model: GalleryModel<'a>,
    mode: ViewMode,
    copied: Option<&CopyTarget>,
) -> Element<'a, Message> {
    if model.is_empty() {
        return empty_state();
    }

    let groups: Column<Message> = model
        .groups
        .into_iter()
        .fold(Column::new().spacing(16), |col, group| {
            col.push(group_view(group, mode, copied))
        });

    scrollable(groups.padding(20))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn empty_state<'a>() -> Element<'a, Message> {
    container(
        column![
            text("🖼").size(64),
            text("No SVG files selected").size(20),
            text("Use \"Select SVG Files\" or \"Select Folder\" above to get started").size(14),
        ]
        .spacing(12)
        .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}

fn group_view<'a>(
    group: GroupModel<'a>,
    mode: ViewMode,
    copied: Option<&CopyTarget>,
) -> Element<'a, Message> {
    let (folder_icon, toggle_icon) = if group.expanded {
        ("📂", "▼")
    } else {
        ("📁", "▶")
    };

    let toggle = button(
        row![
            text(folder_icon),
            text(group.label).size(16),
            text(group_count_label(group.count)).size(14),
            Space::with_width(Length::Fill),
            text(toggle_icon),
        ]
        .spacing(10)
        .align_y(Alignment::Center),
    )
    .style(button::text)
    .width(Length::Fill)
    .on_press(Message::ToggleGroup(group.key.clone()));

    let mut header = row![toggle].spacing(10).align_y(Alignment::Center);
    if group.can_copy_stylesheet {
        let target = CopyTarget::Group(group.key.clone());
        let just_copied = copied == Some(&target);
        header = header.push(
            button(text(if just_copied { "✓ Copied!" } else { "📋 Copy SCSS" }).size(14))
                .style(if just_copied {
                    button::success
                } else {
                    button::secondary
                })
                .on_press(Message::CopySnippet(target)),
        );
    }

    let mut section = column![container(header).style(container::rounded_box).padding(6)]
        .spacing(10);

    if group.expanded {
        let items: Vec<Element<'a, Message>> = group
            .items
            .into_iter()
            .map(|item| match mode {
                ViewMode::Grid => grid_tile(item),
                ViewMode::List => list_row(item),
            })
            .collect();

        let body: Element<'a, Message> = match mode {
            ViewMode::Grid => Wrap::with_elements(items)
                .spacing(GRID_SPACING)
                .line_spacing(GRID_SPACING)
                .into(),
            ViewMode::List => Column::with_children(items).spacing(4).into(),
        };
        section = section.push(body);
    }

    section.into()
}

fn preview<'a>(item: &ItemModel<'a>, size: f32) -> Element<'a, Message> {
    let dark = item.dark_background;
    container(
        svg(item.icon.display_content.clone())
            .width(Length::Fixed(size))
            .height(Length::Fixed(size)),
    )
    .padding(6)
    .style(move |theme| preview_style(theme, dark))
    .into()
}

/// Light icons get a dark backdrop so they stay visible
pub fn preview_style(theme: &iced::Theme, dark: bool) -> container::Style {
    if dark {
        container::Style {
            background: Some(Color::from_rgb8(0x33, 0x33, 0x33).into()),
            ..container::rounded_box(theme)
        }
    } else {
        container::Style {
            background: Some(Color::from_rgb8(0xf5, 0xf5, 0xf5).into()),
            ..container::rounded_box(theme)
        }
    }
}

fn grid_tile<'a>(item: ItemModel<'a>) -> Element<'a, Message> {
    let content = column![
        preview(&item, PREVIEW_SIZE),
        text(item.icon.name.as_str()).size(13),
        text(item.icon.size_label.as_str()).size(11),
    ]
    .spacing(6)
    .align_x(Alignment::Center)
    .width(Length::Fixed(TILE_SIZE));

    button(content)
        .style(button::text)
        .on_press(Message::OpenCodePopup(item.id))
        .into()
}

fn list_row<'a>(item: ItemModel<'a>) -> Element<'a, Message> {
    let dims = item.icon.dimensions;
    let content = row![
        preview(&item, 32.0),
        text(item.icon.name.as_str()).size(14).width(Length::Fill),
        text(format!("{}×{}", dims.width, dims.height)).size(12),
        text(item.icon.size_label.as_str()).size(12),
    ]
    .spacing(16)
    .align_y(Alignment::Center);

    button(content)
        .style(button::text)
        .width(Length::Fill)
        .on_press(Message::OpenCodePopup(item.id))
        .into()
}
