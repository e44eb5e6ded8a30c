use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use super::data::{CatalogEntry, Icon, IconId};
use crate::folder::FolderKey;

/// The IconCatalog holds every icon loaded this session.
/// Icons are grouped by folder key, keeping the order in which they finished
/// loading, and each group can be expanded or collapsed.
#[derive(Debug, Default)]
pub struct IconCatalog {
    groups: HashMap<FolderKey, Vec<CatalogEntry>>,
    expanded: HashSet<FolderKey>,
    next_id: u64,
}

impl IconCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an icon to its folder group, creating the group (expanded) if new.
    /// Returns the id assigned to the icon.
    pub fn add_icon(&mut self, icon: Icon) -> IconId {
        let id = IconId(self.next_id);
        self.next_id += 1;

        let key = icon.folder_key.clone();
        if !self.groups.contains_key(&key) {
            self.expanded.insert(key.clone());
        }
        self.groups
            .entry(key)
            .or_default()
            .push(CatalogEntry { id, icon });

        id
    }

    /// Drop every icon, group and expansion flag
    pub fn clear(&mut self) {
        self.groups.clear();
        self.expanded.clear();
    }

    /// Flip a group between expanded and collapsed
    pub fn toggle_group(&mut self, key: &FolderKey) {
        if !self.expanded.remove(key) {
            self.expanded.insert(key.clone());
        }
    }

    pub fn is_expanded(&self, key: &FolderKey) -> bool {
        self.expanded.contains(key)
    }

    /// Group keys with "Root" first, then "Standalone Files", then the rest
    /// in lexicographic order
    pub fn groups_in_display_order(&self) -> Vec<&FolderKey> {
        let mut keys: Vec<&FolderKey> = self.groups.keys().collect();
        keys.sort_by(|a, b| compare_keys(a, b));
        keys
    }

    /// Icons of one group in insertion order (empty if the group is unknown)
    pub fn group(&self, key: &FolderKey) -> &[CatalogEntry] {
        self.groups.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of icons
    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.values().all(Vec::is_empty)
    }

    /// Every icon, groups in display order, insertion order within a group
    pub fn flattened(&self) -> Vec<&CatalogEntry> {
        self.groups_in_display_order()
            .into_iter()
            .flat_map(|key| self.group(key))
            .collect()
    }

    /// Position of an icon within `flattened()`
    pub fn position_of(&self, id: IconId) -> Option<usize> {
        self.flattened().iter().position(|entry| entry.id == id)
    }

    /// Look up an icon by id
    pub fn get(&self, id: IconId) -> Option<&CatalogEntry> {
        self.groups
            .values()
            .flat_map(|entries| entries.iter())
            .find(|entry| entry.id == id)
    }
}

fn sentinel_rank(key: &FolderKey) -> u8 {
    match key {
        FolderKey::Root => 0,
        FolderKey::Standalone => 1,
        FolderKey::Path(_) => 2,
    }
}

/// Sentinels first, then folder paths alphabetically; keys differing only
/// in case put the lowercase form first
fn compare_keys(a: &FolderKey, b: &FolderKey) -> Ordering {
    sentinel_rank(a).cmp(&sentinel_rank(b)).then_with(|| {
        let (a, b) = (a.as_str(), b.as_str());
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| b.cmp(a))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::svg::dimensions::Dimensions;

    fn icon(name: &str, key: FolderKey) -> Icon {
        Icon::new(name, 100, key, Dimensions::default(), Vec::new())
    }

    fn path(p: &str) -> FolderKey {
        FolderKey::Path(p.to_string())
    }

    #[test]
    fn test_add_creates_expanded_group() {
        let mut catalog = IconCatalog::new();
        catalog.add_icon(icon("a.svg", path("icons")));

        assert_eq!(catalog.len(), 1);
        assert!(catalog.is_expanded(&path("icons")));
        assert_eq!(catalog.group(&path("icons"))[0].icon.name, "a.svg");
    }

    #[test]
    fn test_insertion_order_and_duplicates() {
        let mut catalog = IconCatalog::new();
        let first = catalog.add_icon(icon("same.svg", FolderKey::Root));
        let second = catalog.add_icon(icon("same.svg", FolderKey::Root));
        catalog.add_icon(icon("other.svg", FolderKey::Root));

        assert_ne!(first, second);
        let names: Vec<_> = catalog
            .group(&FolderKey::Root)
            .iter()
            .map(|e| e.icon.name.as_str())
            .collect();
        assert_eq!(names, vec!["same.svg", "same.svg", "other.svg"]);
    }

    #[test]
    fn test_display_order() {
        let mut catalog = IconCatalog::new();
        catalog.add_icon(icon("a.svg", FolderKey::Standalone));
        catalog.add_icon(icon("b.svg", path("zeta")));
        catalog.add_icon(icon("c.svg", FolderKey::Root));
        catalog.add_icon(icon("d.svg", path("alpha")));

        let order: Vec<_> = catalog
            .groups_in_display_order()
            .into_iter()
            .map(FolderKey::as_str)
            .collect();
        assert_eq!(order, vec!["Root", "Standalone Files", "alpha", "zeta"]);
    }

    #[test]
    fn test_display_order_ignores_case_then_puts_lowercase_first() {
        let mut catalog = IconCatalog::new();
        catalog.add_icon(icon("a.svg", path("beta")));
        catalog.add_icon(icon("b.svg", path("Zulu")));
        catalog.add_icon(icon("c.svg", path("alpha")));
        catalog.add_icon(icon("d.svg", path("Beta")));

        let order: Vec<_> = catalog
            .groups_in_display_order()
            .into_iter()
            .map(FolderKey::as_str)
            .collect();
        assert_eq!(order, vec!["alpha", "beta", "Beta", "Zulu"]);
    }

    #[test]
    fn test_toggle_group() {
        let mut catalog = IconCatalog::new();
        catalog.add_icon(icon("a.svg", path("icons")));

        catalog.toggle_group(&path("icons"));
        assert!(!catalog.is_expanded(&path("icons")));

        // Adding to an existing collapsed group keeps it collapsed
        catalog.add_icon(icon("b.svg", path("icons")));
        assert!(!catalog.is_expanded(&path("icons")));

        catalog.toggle_group(&path("icons"));
        assert!(catalog.is_expanded(&path("icons")));
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut catalog = IconCatalog::new();
        catalog.add_icon(icon("a.svg", path("icons")));
        catalog.add_icon(icon("b.svg", FolderKey::Standalone));
        catalog.toggle_group(&path("icons"));

        catalog.clear();

        assert_eq!(catalog.len(), 0);
        assert!(catalog.is_empty());
        assert!(catalog.groups_in_display_order().is_empty());
        assert!(!catalog.is_expanded(&FolderKey::Standalone));

        // A group re-created after clearing starts expanded again
        catalog.add_icon(icon("c.svg", path("icons")));
        assert!(catalog.is_expanded(&path("icons")));
    }

    #[test]
    fn test_flattened_follows_display_order() {
        let mut catalog = IconCatalog::new();
        let z = catalog.add_icon(icon("z.svg", path("zeta")));
        let s = catalog.add_icon(icon("s.svg", FolderKey::Standalone));
        let r1 = catalog.add_icon(icon("r1.svg", FolderKey::Root));
        let r2 = catalog.add_icon(icon("r2.svg", FolderKey::Root));

        let ids: Vec<_> = catalog.flattened().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![r1, r2, s, z]);
        assert_eq!(catalog.position_of(z), Some(3));
        assert_eq!(catalog.get(s).map(|e| e.icon.name.as_str()), Some("s.svg"));
        assert!(catalog.get(IconId(999)).is_none());
    }
}
