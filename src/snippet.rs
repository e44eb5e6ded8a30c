/// Markup and SCSS snippet generation
///
/// Each icon is referenced by a class name derived from its file name and a
/// background image under the virtual asset mount. Two class names may
/// collide (e.g. `close.svg` and `Close!.svg`); that is accepted.

use crate::folder::FolderKey;
use crate::state::data::Icon;

/// Settings that shape generated snippets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetStyle {
    /// Base class shared by every icon (e.g. "icon")
    pub base_class: String,
    /// Virtual mount segment for asset URLs (e.g. "assets")
    pub mount_segment: String,
}

impl Default for SnippetStyle {
    fn default() -> Self {
        Self {
            base_class: "icon".to_string(),
            mount_segment: "assets".to_string(),
        }
    }
}

/// Derive a CSS class name from a file name
///
/// `"Arrow Left.SVG"` → `"arrow-left"`. Runs of anything outside `[a-z0-9]`
/// collapse to one hyphen; leading and trailing hyphens are trimmed.
pub fn class_name(file_name: &str) -> String {
    let lower = file_name.to_lowercase();
    let stem = strip_svg_extension(&lower);

    let mut class = String::with_capacity(stem.len());
    let mut pending_hyphen = false;
    for c in stem.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !class.is_empty() {
                class.push('-');
            }
            pending_hyphen = false;
            class.push(c);
        } else {
            pending_hyphen = true;
        }
    }
    class
}

/// Strip a trailing ".svg" from an already lower-cased name
fn strip_svg_extension(lower: &str) -> &str {
    lower.strip_suffix(".svg").unwrap_or(lower)
}

/// Virtual URL path used in `background-image` rules
pub fn asset_path(folder_key: &FolderKey, file_name: &str, mount_segment: &str) -> String {
    match folder_key {
        FolderKey::Root | FolderKey::Standalone => format!("/{}/{}", mount_segment, file_name),
        FolderKey::Path(path) => {
            // A trailing slash lets a key that *is* the mount ("assets") match too
            let needle = format!("{}/", mount_segment);
            let padded = format!("{}/", path);
            match padded.find(&needle) {
                Some(index) => format!("/{}/{}", &path[index..], file_name),
                None => format!("/{}/{}/{}", mount_segment, path, file_name),
            }
        }
    }
}

/// Inline markup for one icon
pub fn markup(icon: &Icon, style: &SnippetStyle) -> String {
    format!(
        r#"<span class="{} {}"></span>"#,
        style.base_class,
        class_name(&icon.name)
    )
}

/// Stylesheet rule for a single icon
pub fn single_stylesheet(icon: &Icon, style: &SnippetStyle) -> String {
    let mut scss = String::new();
    push_rule(&mut scss, ".", icon, style);
    // The single-icon form has no trailing newline after the closing brace
    scss.pop();
    scss
}

/// Complete stylesheet block for every icon of one folder
///
/// Returns an empty string for an empty group.
pub fn group_stylesheet<'a, I>(icons: I, style: &SnippetStyle) -> String
where
    I: IntoIterator<Item = &'a Icon>,
{
    let mut icons = icons.into_iter().peekable();
    if icons.peek().is_none() {
        return String::new();
    }

    let mut scss = format!(".{} {{\n", style.base_class);
    for icon in icons {
        push_rule(&mut scss, "&.", icon, style);
    }
    scss.push('}');
    scss
}

fn push_rule(scss: &mut String, selector_prefix: &str, icon: &Icon, style: &SnippetStyle) {
    let path = asset_path(&icon.folder_key, &icon.name, &style.mount_segment);
    scss.push_str(&format!("  {}{} {{\n", selector_prefix, class_name(&icon.name)));
    scss.push_str(&format!("    background-image: url({});\n", path));
    scss.push_str(&format!("    width: {}px;\n", icon.dimensions.width));
    scss.push_str(&format!("    height: {}px;\n", icon.dimensions.height));
    scss.push_str("  }\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::svg::dimensions::Dimensions;
    use pretty_assertions::assert_eq;

    fn icon(name: &str, folder_key: FolderKey, width: u32, height: u32) -> Icon {
        Icon::new(name, 512, folder_key, Dimensions { width, height }, Vec::new())
    }

    fn is_valid_class(class: &str) -> bool {
        !class.is_empty()
            && class.split('-').all(|part| {
                !part.is_empty()
                    && part.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
            })
    }

    #[test]
    fn test_class_name_basic() {
        assert_eq!(class_name("close.svg"), "close");
        assert_eq!(class_name("Arrow Left.SVG"), "arrow-left");
        assert_eq!(class_name("__icon--24__.svg"), "icon-24");
        assert_eq!(class_name("ic_home_white_24dp.svg"), "ic-home-white-24dp");
    }

    #[test]
    fn test_class_name_only_strips_trailing_extension() {
        assert_eq!(class_name("logo.svg.bak"), "logo-svg-bak");
        assert_eq!(class_name("logo.png"), "logo-png");
    }

    #[test]
    fn test_class_name_without_alphanumerics_is_empty() {
        assert_eq!(class_name("___.svg"), "");
        assert_eq!(class_name("éàü.svg"), "");
    }

    #[test]
    fn test_class_name_is_idempotent_and_well_formed() {
        let names = [
            "close.svg",
            "  Spaced   Out  .svg",
            "UPPER_case-Mixed.Svg",
            "déjà vu 2.svg",
            "a.b.c.svg",
            "--x--.svg",
        ];
        for name in names {
            let first = class_name(name);
            assert_eq!(first, class_name(name));
            assert!(is_valid_class(&first), "{name:?} produced {first:?}");
            // Re-deriving from a derived class keeps it unchanged
            assert_eq!(class_name(&first), first);
        }
    }

    #[test]
    fn test_class_name_collisions_are_accepted() {
        assert_eq!(class_name("close.svg"), class_name("Close!.svg"));
    }

    #[test]
    fn test_asset_path_for_sentinels() {
        assert_eq!(asset_path(&FolderKey::Standalone, "x.svg", "assets"), "/assets/x.svg");
        assert_eq!(asset_path(&FolderKey::Root, "x.svg", "assets"), "/assets/x.svg");
    }

    #[test]
    fn test_asset_path_prefixes_mount() {
        let key = FolderKey::Path("icons/ui".to_string());
        assert_eq!(asset_path(&key, "close.svg", "assets"), "/assets/icons/ui/close.svg");
    }

    #[test]
    fn test_asset_path_avoids_double_mount() {
        let key = FolderKey::Path("assets/icons".to_string());
        assert_eq!(asset_path(&key, "close.svg", "assets"), "/assets/icons/close.svg");

        let nested = FolderKey::Path("project/src/assets/icons".to_string());
        assert_eq!(asset_path(&nested, "close.svg", "assets"), "/assets/icons/close.svg");

        let exact = FolderKey::Path("assets".to_string());
        assert_eq!(asset_path(&exact, "close.svg", "assets"), "/assets/close.svg");
    }

    #[test]
    fn test_asset_path_custom_mount() {
        let key = FolderKey::Path("static/img".to_string());
        assert_eq!(asset_path(&key, "a.svg", "static"), "/static/img/a.svg");
        assert_eq!(asset_path(&FolderKey::Root, "a.svg", "static"), "/static/a.svg");
    }

    #[test]
    fn test_markup() {
        let icon = icon("Arrow Left.svg", FolderKey::Root, 24, 24);
        assert_eq!(
            markup(&icon, &SnippetStyle::default()),
            r#"<span class="icon arrow-left"></span>"#
        );
    }

    #[test]
    fn test_single_stylesheet() {
        let icon = icon("close.svg", FolderKey::Path("icons/ui".to_string()), 16, 20);
        let expected = "  .close {\n    background-image: url(/assets/icons/ui/close.svg);\n    width: 16px;\n    height: 20px;\n  }";
        assert_eq!(single_stylesheet(&icon, &SnippetStyle::default()), expected);
    }

    #[test]
    fn test_group_stylesheet() {
        let key = FolderKey::Path("assets/icons".to_string());
        let icons = vec![
            icon("close.svg", key.clone(), 24, 24),
            icon("Menu Open.svg", key, 32, 16),
        ];
        let expected = "\
.icon {
  &.close {
    background-image: url(/assets/icons/close.svg);
    width: 24px;
    height: 24px;
  }
  &.menu-open {
    background-image: url(/assets/icons/Menu Open.svg);
    width: 32px;
    height: 16px;
  }
}";
        assert_eq!(group_stylesheet(&icons, &SnippetStyle::default()), expected);
    }

    #[test]
    fn test_group_stylesheet_empty() {
        let icons: Vec<Icon> = Vec::new();
        assert_eq!(group_stylesheet(&icons, &SnippetStyle::default()), "");
    }

    #[test]
    fn test_custom_base_class() {
        let style = SnippetStyle {
            base_class: "ico".to_string(),
            mount_segment: "assets".to_string(),
        };
        let icons = vec![icon("a.svg", FolderKey::Root, 8, 8)];
        assert!(group_stylesheet(&icons, &style).starts_with(".ico {\n  &.a {"));
        assert_eq!(markup(&icons[0], &style), r#"<span class="ico a"></span>"#);
    }
}
