/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the loader, the catalog and the UI layer.

use iced::widget::svg;

use crate::folder::FolderKey;
use crate::svg::dimensions::Dimensions;

/// Catalog-unique identifier assigned when an icon is added
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IconId(pub u64);

/// Represents a single loaded SVG file
#[derive(Debug, Clone)]
pub struct Icon {
    /// Filename only (e.g., "close.svg")
    pub name: String,
    /// Human-readable size (e.g., "1.5 KB")
    pub size_label: String,
    /// Renderable image source built from the file bytes
    pub display_content: svg::Handle,
    /// Group this icon belongs to; never changes after creation
    pub folder_key: FolderKey,
    /// Intrinsic pixel size (24x24 when it could not be determined)
    pub dimensions: Dimensions,
}

impl Icon {
    /// Build an icon record from a loaded file
    pub fn new(
        name: impl Into<String>,
        byte_size: u64,
        folder_key: FolderKey,
        dimensions: Dimensions,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            name: name.into(),
            size_label: format_file_size(byte_size),
            display_content: svg::Handle::from_memory(bytes),
            folder_key,
            dimensions,
        }
    }

    /// Whether the icon is likely light-on-transparent and needs a dark backdrop
    pub fn needs_dark_background(&self, keyword: &str) -> bool {
        !keyword.is_empty() && self.name.to_lowercase().contains(&keyword.to_lowercase())
    }
}

/// An icon together with the id the catalog assigned to it
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub id: IconId,
    pub icon: Icon,
}

/// Format a byte count the way file browsers do: "0 Bytes", "512 Bytes", "1.5 KB"
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut exponent = 0;
    while exponent < UNITS.len() - 1 && bytes >= 1024u64.pow(exponent as u32 + 1) {
        exponent += 1;
    }
    let value = bytes as f64 / 1024f64.powi(exponent as i32);
    let rounded = (value * 100.0).round() / 100.0;

    format!("{} {}", rounded, UNITS[exponent])
}
