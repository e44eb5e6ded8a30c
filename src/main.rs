use iced::keyboard::{self, key, Key, Modifiers};
use iced::widget::{button, column, row, text, text_editor, Space};
use iced::{Alignment, Element, Length, Subscription, Task, Theme};
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod error;
mod folder;
mod snippet;
mod state;
mod svg;
mod ui;

use folder::FolderKey;
use state::catalog::IconCatalog;
use state::data::{Icon, IconId};
use state::settings::{ViewMode, ViewerConfig};
use svg::loader::{self, SelectedFile};
use ui::clipboard::{self, CopyOutcome, CopyTarget};
use ui::detail::{CodePopup, DetailModel, Lightbox};
use ui::{gallery, Notice};

/// Log filter used when RUST_LOG is not set; keeps renderer crates quiet
const DEFAULT_LOG_FILTER: &str = "info,wgpu_core=warn,wgpu_hal=warn,naga=warn,iced_wgpu=warn";

/// How long a "Copied!" confirmation stays on a button
const COPY_FEEDBACK: Duration = Duration::from_secs(2);

/// Read-only text editors that accept selection actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorSlot {
    Markup,
    Stylesheet,
    ManualCopy,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked "Select SVG Files"
    SelectFiles,
    /// User clicked "Select Folder"
    SelectFolder,
    /// Background folder walk finished
    FolderScanned(Result<Vec<SelectedFile>, error::LoadError>),
    /// One file finished loading (in completion order, not selection order)
    IconLoaded(Result<Icon, error::LoadError>),
    /// User clicked "Clear All"
    ClearAll,
    SetViewMode(ViewMode),
    ToggleGroup(FolderKey),
    OpenCodePopup(IconId),
    CloseCodePopup,
    CopySnippet(CopyTarget),
    CopyFinished(CopyOutcome),
    /// Carries the copy generation it was scheduled for
    CopyFeedbackExpired(u64),
    OpenLightbox(IconId),
    CloseLightbox,
    ShowNext,
    ShowPrevious,
    /// Escape: close whatever overlay is on top
    CloseOverlay,
    DismissNotice,
    EditorAction(EditorSlot, text_editor::Action),
}

/// Main application state
struct SvgIconViewer {
    /// Every icon loaded this session
    catalog: IconCatalog,
    config: ViewerConfig,
    view_mode: ViewMode,
    /// Files still being read
    pending: usize,
    /// Status message to display to the user
    status: String,
    code_popup: Option<CodePopup>,
    lightbox: Option<Lightbox>,
    notice: Option<Notice>,
    /// Snippet that was just copied, for button feedback
    copied: Option<CopyTarget>,
    copy_generation: u64,
}

impl SvgIconViewer {
    /// Create a new instance of the application
    fn new(config: ViewerConfig) -> (Self, Task<Message>) {
        let view_mode = config.default_view;
        (
            SvgIconViewer {
                catalog: IconCatalog::new(),
                config,
                view_mode,
                pending: 0,
                status: "Ready. Select SVG files or a folder to begin.".to_string(),
                code_popup: None,
                lightbox: None,
                notice: None,
                copied: None,
                copy_generation: 0,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SelectFiles => {
                // Show the native file picker dialog
                let picked = FileDialog::new()
                    .set_title("Select SVG Files")
                    .add_filter("SVG images", &["svg", "SVG"])
                    .pick_files();

                match picked {
                    Some(paths) => self.start_loading(loader::select_files(paths)),
                    None => Task::none(),
                }
            }
            Message::SelectFolder => {
                let folder = FileDialog::new()
                    .set_title("Select Folder with SVG Icons")
                    .pick_folder();

                if let Some(folder_path) = folder {
                    self.status = format!("Scanning {}...", folder_path.display());
                    return Task::perform(loader::select_folder(folder_path), Message::FolderScanned);
                }

                Task::none()
            }
            Message::FolderScanned(Ok(files)) => self.start_loading(files),
            Message::FolderScanned(Err(e)) => {
                warn!("⚠️  Folder scan failed: {}", e);
                self.status = "Folder scan failed.".to_string();
                self.notice = Some(Notice::Info(e.to_string()));
                Task::none()
            }
            Message::IconLoaded(result) => {
                self.pending = self.pending.saturating_sub(1);

                match result {
                    Ok(icon) => {
                        self.catalog.add_icon(icon);
                    }
                    Err(e) => {
                        warn!("⚠️  {}", e);
                        self.notice = Some(Notice::Info(e.to_string()));
                    }
                }

                if self.pending == 0 {
                    info!("✅ Loading complete: {} icons in catalog", self.catalog.len());
                    self.status = format!(
                        "✅ {} icons in {} folders.",
                        self.catalog.len(),
                        self.catalog.groups_in_display_order().len()
                    );
                } else {
                    self.status = format!("Loading... {} files remaining.", self.pending);
                }

                Task::none()
            }
            Message::ClearAll => {
                if self.catalog.is_empty() {
                    return Task::none();
                }

                let answer = MessageDialog::new()
                    .set_level(MessageLevel::Warning)
                    .set_title("Clear All")
                    .set_description(format!(
                        "Are you sure you want to delete all {} files?",
                        self.catalog.len()
                    ))
                    .set_buttons(MessageButtons::YesNo)
                    .show();

                if matches!(answer, MessageDialogResult::Yes) {
                    self.clear();
                }

                Task::none()
            }
            Message::SetViewMode(mode) => {
                self.view_mode = mode;
                Task::none()
            }
            Message::ToggleGroup(key) => {
                self.catalog.toggle_group(&key);
                Task::none()
            }
            Message::OpenCodePopup(id) => {
                if let Some(entry) = self.catalog.get(id) {
                    let detail = DetailModel::new(
                        entry,
                        &self.config.snippet_style(),
                        &self.config.dark_preview_keyword,
                    );
                    self.code_popup = Some(CodePopup::new(detail));
                }
                Task::none()
            }
            Message::CloseCodePopup => {
                self.code_popup = None;
                Task::none()
            }
            Message::CopySnippet(target) => match self.snippet_for(&target) {
                Some(code) => clipboard::copy(target, code),
                None => Task::none(),
            },
            Message::CopyFinished(CopyOutcome::Copied(target)) => {
                self.copied = Some(target);
                self.copy_generation += 1;
                let generation = self.copy_generation;
                Task::perform(
                    async move { tokio::time::sleep(COPY_FEEDBACK).await },
                    move |_| Message::CopyFeedbackExpired(generation),
                )
            }
            Message::CopyFinished(CopyOutcome::ManualCopy { text, .. }) => {
                self.notice = Some(Notice::ManualCopy(text_editor::Content::with_text(&text)));
                Task::none()
            }
            Message::CopyFeedbackExpired(generation) => {
                if generation == self.copy_generation {
                    self.copied = None;
                }
                Task::none()
            }
            Message::OpenLightbox(id) => {
                self.code_popup = None;
                self.lightbox = Some(Lightbox::open(id));
                Task::none()
            }
            Message::CloseLightbox => {
                self.lightbox = None;
                Task::none()
            }
            Message::ShowNext => {
                if let Some(lightbox) = &mut self.lightbox {
                    lightbox.show_next(&self.catalog);
                }
                Task::none()
            }
            Message::ShowPrevious => {
                if let Some(lightbox) = &mut self.lightbox {
                    lightbox.show_previous(&self.catalog);
                }
                Task::none()
            }
            Message::CloseOverlay => {
                if self.notice.is_some() {
                    self.notice = None;
                } else if self.lightbox.is_some() {
                    self.lightbox = None;
                } else {
                    self.code_popup = None;
                }
                Task::none()
            }
            Message::DismissNotice => {
                self.notice = None;
                Task::none()
            }
            Message::EditorAction(slot, action) => {
                // Snippet views are read-only; only selection and scrolling apply
                if action.is_edit() {
                    return Task::none();
                }
                let content = match slot {
                    EditorSlot::ManualCopy => match &mut self.notice {
                        Some(Notice::ManualCopy(content)) => Some(content),
                        _ => None,
                    },
                    slot => self.code_popup.as_mut().and_then(|p| p.editor_mut(slot)),
                };
                if let Some(content) = content {
                    content.perform(action);
                }
                Task::none()
            }
        }
    }

    /// Queue every SVG in `files` for loading; each file completes on its own
    fn start_loading(&mut self, files: Vec<SelectedFile>) -> Task<Message> {
        let svgs = loader::filter_svgs(files);

        if svgs.is_empty() {
            self.notice = Some(Notice::Info("No SVG files found!".to_string()));
            return Task::none();
        }

        info!("📁 Loading {} SVG files", svgs.len());
        self.pending += svgs.len();
        self.status = format!("Loading {} SVG files...", svgs.len());

        Task::batch(
            svgs.into_iter()
                .map(|file| Task::perform(loader::load_icon(file), Message::IconLoaded)),
        )
    }

    /// Discard every icon and close anything that shows one
    fn clear(&mut self) {
        let removed = self.catalog.len();
        self.catalog.clear();
        self.code_popup = None;
        self.lightbox = None;
        self.copied = None;
        self.status = "Cleared. Select SVG files or a folder to begin.".to_string();
        info!("🗑️  Cleared {} icons", removed);
    }

    /// Text for a copy action, or None if its source is gone
    fn snippet_for(&self, target: &CopyTarget) -> Option<String> {
        match target {
            CopyTarget::Markup => self.code_popup.as_ref().map(|p| p.detail.markup.clone()),
            CopyTarget::Stylesheet => self.code_popup.as_ref().map(|p| p.detail.stylesheet.clone()),
            CopyTarget::Group(key) => {
                let icons = self.catalog.group(key).iter().map(|entry| &entry.icon);
                let scss = snippet::group_stylesheet(icons, &self.config.snippet_style());
                (!scss.is_empty()).then_some(scss)
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let mode_button = |label: &'static str, mode: ViewMode| {
            button(text(label))
                .style(if self.view_mode == mode {
                    button::primary
                } else {
                    button::secondary
                })
                .on_press(Message::SetViewMode(mode))
        };

        let toolbar = row![
            button(text("📄 Select SVG Files"))
                .on_press(Message::SelectFiles)
                .padding(10),
            button(text("📁 Select Folder"))
                .on_press(Message::SelectFolder)
                .padding(10),
            button(text("🗑 Clear All"))
                .style(button::danger)
                .on_press_maybe((!self.catalog.is_empty()).then_some(Message::ClearAll))
                .padding(10),
            Space::with_width(Length::Fill),
            mode_button("▦ Grid", ViewMode::Grid),
            mode_button("☰ List", ViewMode::List),
            text(gallery::file_count_label(self.catalog.len())).size(14),
        ]
        .spacing(10)
        .align_y(Alignment::Center);

        let model = gallery::project(&self.catalog, &self.config);

        let mut content: Element<Message> = column![
            toolbar,
            text(&self.status).size(14),
            gallery::view(model, self.view_mode, self.copied.as_ref()),
        ]
        .spacing(12)
        .padding(20)
        .into();

        if let Some(lightbox) = &self.lightbox {
            content = ui::modal(
                content,
                ui::detail::lightbox_view(lightbox, &self.catalog),
                Message::CloseLightbox,
            );
        } else if let Some(popup) = &self.code_popup {
            content = ui::modal(
                content,
                ui::detail::code_popup_view(
                    popup,
                    &self.catalog,
                    self.copied.as_ref(),
                    self.config.highlighter_theme(),
                ),
                Message::CloseCodePopup,
            );
        }

        if let Some(notice) = &self.notice {
            content = ui::modal(content, ui::notice_view(notice), Message::DismissNotice);
        }

        content
    }

    fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(handle_key)
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Escape closes overlays; arrows step through the lightbox
fn handle_key(key: Key, _modifiers: Modifiers) -> Option<Message> {
    match key.as_ref() {
        Key::Named(key::Named::Escape) => Some(Message::CloseOverlay),
        Key::Named(key::Named::ArrowLeft) => Some(Message::ShowPrevious),
        Key::Named(key::Named::ArrowRight) => Some(Message::ShowNext),
        _ => None,
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn main() -> iced::Result {
    init_tracing();

    let config = ViewerConfig::load();
    info!("🎨 SVG Icon Viewer starting (mount: /{}/)", config.mount_segment);

    iced::application("SVG Icon Viewer", SvgIconViewer::update, SvgIconViewer::view)
        .subscription(SvgIconViewer::subscription)
        .theme(SvgIconViewer::theme)
        .window_size((1200.0, 800.0))
        .centered()
        .run_with(move || SvgIconViewer::new(config))
}
