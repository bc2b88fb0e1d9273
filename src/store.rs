//! Item storage and date formatting
//!
//! `DataProvider` is the seam between the view layer and the data layer:
//! the view reads the ordered item sequence, requests mutations by id,
//! and asks the provider to format dates. It never constructs or frees
//! items itself. The trait is injected explicitly into the root
//! component so tests can substitute a fake.

use crate::model::item::{Item, ItemId};
use chrono::{Local, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// The view layer's data boundary.
///
/// All writes are fire-and-forget from the view's perspective: the view
/// does not await results or handle provider failures.
pub trait DataProvider {
    /// Ordered item sequence. The view applies no sort of its own.
    fn items(&self) -> &[Item];

    /// Change counter, bumped on every mutation. The view reads it after
    /// issuing a mutation to know the sequence it rendered is stale.
    fn revision(&self) -> u64;

    /// Create an item from a title and an already-formatted date string.
    fn create_item(&mut self, title: &str, date: &str) -> Item;

    /// Flip an item's completion state. Unknown ids are ignored.
    fn toggle_is_done(&mut self, id: ItemId);

    /// Remove an item. Unknown ids are ignored.
    fn delete_item(&mut self, id: ItemId);

    /// Format a due time for display on an item row.
    fn formatted_date_for_user_data(&self, time: NaiveTime) -> String;

    /// Format today's date for the header banner.
    fn formatted_date_for_header(&self) -> String;
}

/// On-disk shape of the store file.
#[derive(Debug, Serialize, Deserialize)]
struct StoreFile {
    items: Vec<Item>,
    next_id: ItemId,
}

/// JSON-file-backed `DataProvider`.
///
/// Saves are best-effort: a failed write never interrupts the UI. With
/// no path the store is purely in-memory, which is what tests use.
pub struct JsonStore {
    items: Vec<Item>,
    next_id: ItemId,
    revision: u64,
    path: Option<PathBuf>,
    use_12_hour_clock: bool,
}

impl JsonStore {
    /// In-memory store with no persistence.
    pub fn in_memory() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
            revision: 0,
            path: None,
            use_12_hour_clock: false,
        }
    }

    /// Open a store at `path`, loading any existing file. A missing or
    /// unreadable file starts an empty store rather than failing.
    pub fn open(path: PathBuf, use_12_hour_clock: bool) -> Self {
        let mut store = Self::in_memory().with_12_hour_clock(use_12_hour_clock);

        if let Some(file) = fs::read_to_string(&path)
            .ok()
            .and_then(|contents| serde_json::from_str::<StoreFile>(&contents).ok())
        {
            store.items = file.items;
            store.next_id = file.next_id;
        }

        store.path = Some(path);
        store
    }

    pub fn with_12_hour_clock(mut self, enabled: bool) -> Self {
        self.use_12_hour_clock = enabled;
        self
    }

    fn save(&self) -> anyhow::Result<()> {
        let path = match &self.path {
            Some(p) => p,
            None => return Ok(()),
        };

        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }

        let file = StoreFile {
            items: self.items.clone(),
            next_id: self.next_id,
        };
        let json = serde_json::to_string_pretty(&file)?;
        fs::write(path, json)?;

        Ok(())
    }

    fn touch(&mut self) {
        self.revision += 1;
        // Best effort; the UI must not stall on a bad disk.
        let _ = self.save();
    }
}

impl DataProvider for JsonStore {
    fn items(&self) -> &[Item] {
        &self.items
    }

    fn revision(&self) -> u64 {
        self.revision
    }

    fn create_item(&mut self, title: &str, date: &str) -> Item {
        let item = Item::new(self.next_id, title, date);
        self.next_id += 1;
        self.items.push(item.clone());
        self.touch();
        item
    }

    fn toggle_is_done(&mut self, id: ItemId) {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            item.is_done = !item.is_done;
            self.touch();
        }
    }

    fn delete_item(&mut self, id: ItemId) {
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        if self.items.len() != before {
            self.touch();
        }
    }

    fn formatted_date_for_user_data(&self, time: NaiveTime) -> String {
        if self.use_12_hour_clock {
            time.format("%I:%M %p").to_string()
        } else {
            time.format("%H:%M").to_string()
        }
    }

    fn formatted_date_for_header(&self) -> String {
        Local::now().format("%b %d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_assigns_sequential_ids() {
        let mut store = JsonStore::in_memory();
        let a = store.create_item("Buy milk", "09:00");
        let b = store.create_item("Call Alice", "14:30");

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(store.items().len(), 2);
        assert_eq!(store.items()[0].title, "Buy milk");
        assert_eq!(store.items()[1].title, "Call Alice");
    }

    #[test]
    fn test_toggle_flips_only_the_target() {
        let mut store = JsonStore::in_memory();
        let a = store.create_item("Buy milk", "09:00");
        let b = store.create_item("Call Alice", "14:30");

        store.toggle_is_done(a.id);
        assert!(store.items()[0].is_done);
        assert!(!store.items()[1].is_done);

        store.toggle_is_done(a.id);
        assert!(!store.items()[0].is_done);

        // Unknown id is a no-op
        let rev = store.revision();
        store.toggle_is_done(b.id + 100);
        assert_eq!(store.revision(), rev);
    }

    #[test]
    fn test_delete_preserves_order_of_the_rest() {
        let mut store = JsonStore::in_memory();
        store.create_item("a", "08:00");
        let b = store.create_item("b", "09:00");
        store.create_item("c", "10:00");

        store.delete_item(b.id);

        let titles: Vec<&str> = store.items().iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "c"]);
    }

    #[test]
    fn test_revision_bumps_on_every_mutation() {
        let mut store = JsonStore::in_memory();
        assert_eq!(store.revision(), 0);

        let item = store.create_item("a", "08:00");
        assert_eq!(store.revision(), 1);

        store.toggle_is_done(item.id);
        assert_eq!(store.revision(), 2);

        store.delete_item(item.id);
        assert_eq!(store.revision(), 3);

        // Deleting an id that no longer exists changes nothing
        store.delete_item(item.id);
        assert_eq!(store.revision(), 3);
    }

    #[test]
    fn test_user_data_time_formats() {
        let store = JsonStore::in_memory();
        let time = NaiveTime::from_hms_opt(14, 30, 0).unwrap();
        assert_eq!(store.formatted_date_for_user_data(time), "14:30");

        let store = JsonStore::in_memory().with_12_hour_clock(true);
        assert_eq!(store.formatted_date_for_user_data(time), "02:30 PM");
    }

    #[test]
    fn test_persistence_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.json");

        {
            let mut store = JsonStore::open(path.clone(), false);
            store.create_item("Buy milk", "09:00");
            let b = store.create_item("Call Alice", "14:30");
            store.toggle_is_done(b.id);
        }

        let store = JsonStore::open(path, false);
        assert_eq!(store.items().len(), 2);
        assert_eq!(store.items()[0].title, "Buy milk");
        assert!(store.items()[1].is_done);

        // Ids keep advancing across reloads
        let mut store = store;
        let c = store.create_item("c", "10:00");
        assert_eq!(c.id, 3);
    }

    #[test]
    fn test_open_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path().join("nope.json"), false);
        assert!(store.items().is_empty());
    }
}
