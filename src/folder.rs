/// Folder classification for loaded icons
///
/// Every icon is grouped under a folder key derived from the relative path
/// it was selected with:
/// - Files picked individually have no relative path → `Standalone Files`
/// - Files sitting directly in the picked folder's top level → `Root`
/// - Everything else → the slash-delimited folder path

use std::fmt;

/// Grouping identifier for icons in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FolderKey {
    /// Relative path with a single segment (no folder component)
    Root,
    /// File selected on its own, outside any folder selection
    Standalone,
    /// Slash-delimited folder path, e.g. "icons/ui"
    Path(String),
}

impl FolderKey {
    /// Classify a file by its optional relative path
    ///
    /// The relative path always uses `/` as separator and includes the
    /// file name as its last segment.
    pub fn classify(relative_path: Option<&str>) -> Self {
        let Some(relative_path) = relative_path else {
            return FolderKey::Standalone;
        };

        match relative_path.rsplit_once('/') {
            Some((folder, _file)) if !folder.is_empty() => FolderKey::Path(folder.to_string()),
            _ => FolderKey::Root,
        }
    }

    /// Whether this is one of the reserved keys
    pub fn is_sentinel(&self) -> bool {
        matches!(self, FolderKey::Root | FolderKey::Standalone)
    }

    /// Raw key text as used for grouping
    pub fn as_str(&self) -> &str {
        match self {
            FolderKey::Root => "Root",
            FolderKey::Standalone => "Standalone Files",
            FolderKey::Path(path) => path,
        }
    }

    /// Human-facing label shown in the gallery header
    ///
    /// Folder paths are shown under the virtual mount, e.g. `icons/ui` with
    /// mount segment `assets` becomes `/assets/icons/ui`, while
    /// `assets/icons` stays `/assets/icons`.
    pub fn display_label(&self, mount_segment: &str) -> String {
        match self {
            FolderKey::Root => "Root Folder".to_string(),
            FolderKey::Standalone => "Standalone Files".to_string(),
            FolderKey::Path(path) => {
                if starts_with_segment(path, mount_segment) {
                    format!("/{}", path)
                } else {
                    format!("/{}/{}", mount_segment, path)
                }
            }
        }
    }
}

impl fmt::Display for FolderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// True when `path` begins with `segment` as a whole path segment
fn starts_with_segment(path: &str, segment: &str) -> bool {
    path.strip_prefix(segment)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_path_keeps_folders() {
        let key = FolderKey::classify(Some("icons/ui/close.svg"));
        assert_eq!(key, FolderKey::Path("icons/ui".to_string()));
    }

    #[test]
    fn test_single_segment_is_root() {
        assert_eq!(FolderKey::classify(Some("close.svg")), FolderKey::Root);
        assert_eq!(FolderKey::classify(Some("/close.svg")), FolderKey::Root);
    }

    #[test]
    fn test_missing_path_is_standalone() {
        assert_eq!(FolderKey::classify(None), FolderKey::Standalone);
    }

    #[test]
    fn test_folder_named_root_is_not_sentinel() {
        let key = FolderKey::classify(Some("Root/close.svg"));
        assert_eq!(key, FolderKey::Path("Root".to_string()));
        assert!(!key.is_sentinel());
        assert_ne!(key, FolderKey::Root);
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(FolderKey::Root.display_label("assets"), "Root Folder");
        assert_eq!(FolderKey::Standalone.display_label("assets"), "Standalone Files");
        assert_eq!(
            FolderKey::Path("icons/ui".to_string()).display_label("assets"),
            "/assets/icons/ui"
        );
    }

    #[test]
    fn test_display_label_avoids_double_mount() {
        assert_eq!(
            FolderKey::Path("assets/icons".to_string()).display_label("assets"),
            "/assets/icons"
        );
        assert_eq!(
            FolderKey::Path("assets".to_string()).display_label("assets"),
            "/assets"
        );
        // Only a whole leading segment counts
        assert_eq!(
            FolderKey::Path("assets-old/icons".to_string()).display_label("assets"),
            "/assets/assets-old/icons"
        );
    }

    #[test]
    fn test_as_str_matches_sentinel_names() {
        assert_eq!(FolderKey::Root.as_str(), "Root");
        assert_eq!(FolderKey::Standalone.to_string(), "Standalone Files");
    }
}
