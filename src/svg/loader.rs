/// SVG file selection and loading
///
/// Selection turns picker results into `SelectedFile`s:
/// - Individually picked files carry no relative path
/// - Files found by walking a picked folder carry "<folder>/<sub/path>/<file>"
///
/// Loading is two steps per file: read the bytes, then build the display
/// content and measure the document. Every file loads independently so the
/// caller receives results in completion order.

use std::path::{Path, PathBuf};
use tokio::task;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::error::LoadError;
use crate::folder::FolderKey;
use crate::state::data::Icon;
use crate::svg::dimensions::{self, Dimensions};

/// A file chosen by the user, before it is read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// Filename only (e.g., "close.svg")
    pub name: String,
    /// Size on disk in bytes
    pub byte_size: u64,
    /// Slash-separated path relative to the picked folder's parent
    pub relative_path: Option<String>,
    /// Where to read the file from
    pub path: PathBuf,
}

impl SelectedFile {
    pub fn is_svg(&self) -> bool {
        is_svg_name(&self.name)
    }

    pub fn folder_key(&self) -> FolderKey {
        FolderKey::classify(self.relative_path.as_deref())
    }
}

/// Whether a file name has the `.svg` extension (any case)
pub fn is_svg_name(name: &str) -> bool {
    name.to_lowercase().ends_with(".svg")
}

/// Describe individually picked files
///
/// Files whose metadata cannot be read are skipped with a warning.
pub fn select_files(paths: Vec<PathBuf>) -> Vec<SelectedFile> {
    paths
        .into_iter()
        .filter_map(|path| describe(path, None))
        .collect()
}

/// Build a `SelectedFile` from its on-disk metadata
///
/// Returns `None` (with a warning) when the size cannot be read, so a file
/// never shows up as "0 Bytes" by accident.
fn describe(path: PathBuf, relative_path: Option<String>) -> Option<SelectedFile> {
    let byte_size = match std::fs::metadata(&path) {
        Ok(metadata) => metadata.len(),
        Err(e) => {
            warn!("⚠️  Skipping {}: {}", path.display(), e);
            return None;
        }
    };
    let name = file_name_of(&path)?;
    Some(SelectedFile {
        name,
        byte_size,
        relative_path,
        path,
    })
}

/// Walk a picked folder off the UI thread
pub async fn select_folder(folder: PathBuf) -> Result<Vec<SelectedFile>, LoadError> {
    task::spawn_blocking(move || select_folder_blocking(&folder))
        .await
        .map_err(|e| LoadError::Task(e.to_string()))?
}

/// Walk the folder tree recursively, collecting every regular file
///
/// Relative paths start with the picked folder's own name, so a file at
/// `<picked>/ui/close.svg` becomes `"<picked>/ui/close.svg"`.
pub fn select_folder_blocking(folder: &Path) -> Result<Vec<SelectedFile>, LoadError> {
    if !folder.is_dir() {
        return Err(LoadError::NotAFolder(folder.to_path_buf()));
    }

    info!("🔍 Scanning folder: {}", folder.display());

    let folder_name = file_name_of(folder).unwrap_or_default();
    let mut files = Vec::new();

    for entry in WalkDir::new(folder)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| match e {
            Ok(entry) => Some(entry),
            Err(err) => {
                warn!("⚠️  Skipping unreadable entry: {}", err);
                None
            }
        })
    {
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let Ok(inner) = path.strip_prefix(folder) else {
            continue;
        };

        let mut segments: Vec<String> = Vec::new();
        if !folder_name.is_empty() {
            segments.push(folder_name.clone());
        }
        segments.extend(inner.components().map(|c| c.as_os_str().to_string_lossy().into_owned()));

        if let Some(file) = describe(path.to_path_buf(), Some(segments.join("/"))) {
            files.push(file);
        }
    }

    debug!("Found {} files under {}", files.len(), folder.display());
    Ok(files)
}

/// Keep only SVG files from a selection
pub fn filter_svgs(files: Vec<SelectedFile>) -> Vec<SelectedFile> {
    files.into_iter().filter(SelectedFile::is_svg).collect()
}

/// Load one SVG file into an icon record
pub async fn load_icon(file: SelectedFile) -> Result<Icon, LoadError> {
    // Step 1: read the raw bytes
    let bytes = tokio::fs::read(&file.path)
        .await
        .map_err(|e| LoadError::Read {
            path: file.path.clone(),
            reason: e.to_string(),
        })?;

    // Step 2: measure and wrap as display content
    let dimensions = measure(&bytes);
    let folder_key = file.folder_key();

    debug!(
        "📐 {} → {}x{} in {}",
        file.name, dimensions.width, dimensions.height, folder_key
    );

    Ok(Icon::new(file.name, file.byte_size, folder_key, dimensions, bytes))
}

/// Measure SVG bytes, decoding them leniently as text
fn measure(bytes: &[u8]) -> Dimensions {
    let text = String::from_utf8_lossy(bytes);
    dimensions::extract(&text)
}

fn file_name_of(path: &Path) -> Option<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
}
