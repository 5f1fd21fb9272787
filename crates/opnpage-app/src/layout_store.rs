//! Layout Store - ordered widget collection with write-through persistence
//!
//! The store owns the dashboard's widget descriptors and mirrors them to the
//! injected [`KeyValueStore`] after every mutation that changes something.
//! Persistence is best-effort: failures are logged and the in-memory layout
//! stays authoritative for the session.

use std::collections::HashSet;

use opnpage_core::prelude::*;
use opnpage_core::{DataSourceId, WidgetDescriptor, WidgetDraft, WidgetId, WidgetPatch};

use crate::storage::KeyValueStore;

/// Versioned key for the persisted layout
pub const LAYOUT_KEY: &str = "opnpage.layout.v2";

/// The six pills shown on first run
pub fn default_layout() -> Vec<WidgetDescriptor> {
    [
        DataSourceId::Running,
        DataSourceId::Reading,
        DataSourceId::Gaming,
        DataSourceId::Caffeine,
        DataSourceId::Studying,
        DataSourceId::Walking,
    ]
    .into_iter()
    .enumerate()
    .map(|(i, source)| {
        WidgetDescriptor::from_draft(
            WidgetId::new(format!("widget-{}", i + 1)),
            WidgetDraft::new(opnpage_core::VisualizationType::Pill, source),
        )
    })
    .collect()
}

/// Parse a persisted layout, rejecting structurally invalid collections
pub fn parse_layout(raw: &str) -> Result<Vec<WidgetDescriptor>> {
    let widgets: Vec<WidgetDescriptor> = serde_json::from_str(raw)?;

    let mut seen = HashSet::with_capacity(widgets.len());
    for widget in &widgets {
        if !seen.insert(widget.id.as_str()) {
            return Err(Error::invalid_layout(format!(
                "duplicate widget id {}",
                widget.id
            )));
        }
    }

    Ok(widgets)
}

// ─────────────────────────────────────────────────────────────────────────────
// Id Generation
// ─────────────────────────────────────────────────────────────────────────────

/// Monotonic `widget-<n>` id source
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    /// Seed from the wall clock in milliseconds
    pub fn from_clock() -> Self {
        let millis = chrono::Utc::now().timestamp_millis();
        Self::starting_at(u64::try_from(millis).unwrap_or_default())
    }

    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }

    /// Produce the next id not rejected by `taken`
    pub fn next_id(&mut self, taken: impl Fn(&WidgetId) -> bool) -> WidgetId {
        loop {
            let id = WidgetId::new(format!("widget-{}", self.next));
            self.next += 1;
            if !taken(&id) {
                return id;
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Layout Store
// ─────────────────────────────────────────────────────────────────────────────

pub struct LayoutStore {
    widgets: Vec<WidgetDescriptor>,
    backend: Box<dyn KeyValueStore>,
    ids: IdGenerator,
}

impl std::fmt::Debug for LayoutStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutStore")
            .field("widgets", &self.widgets)
            .field("ids", &self.ids)
            .finish_non_exhaustive()
    }
}

impl LayoutStore {
    /// Hydrate from `backend`, falling back to [`default_layout`]
    pub fn load(backend: Box<dyn KeyValueStore>) -> Self {
        Self::load_with_ids(backend, IdGenerator::from_clock())
    }

    pub fn load_with_ids(backend: Box<dyn KeyValueStore>, ids: IdGenerator) -> Self {
        let mut store = Self {
            widgets: Vec::new(),
            backend,
            ids,
        };
        store.widgets = store.read_persisted().unwrap_or_else(default_layout);
        store
    }

    fn read_persisted(&self) -> Option<Vec<WidgetDescriptor>> {
        let raw = match self.backend.get(LAYOUT_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No saved layout, using defaults");
                return None;
            }
            Err(e) => {
                warn!("Failed to read saved layout: {}", e);
                return None;
            }
        };

        match parse_layout(&raw) {
            Ok(widgets) => {
                for widget in &widgets {
                    if !widget.visualization_type.is_known() {
                        warn!("Widget {} has unknown visualization {}", widget.id, widget.visualization_type);
                    }
                    if let DataSourceId::Other(tag) = &widget.data_source {
                        warn!("Widget {} has unknown data source {}", widget.id, tag);
                    }
                }
                info!("Loaded layout with {} widgets", widgets.len());
                Some(widgets)
            }
            Err(e) => {
                warn!("Discarding saved layout: {}", e);
                None
            }
        }
    }

    /// Write the current layout; failures are logged, never returned
    pub fn save(&mut self) {
        let json = match serde_json::to_string(&self.widgets) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to serialize layout: {}", e);
                return;
            }
        };

        match self.backend.set(LAYOUT_KEY, &json) {
            Ok(()) => {}
            Err(e) if e.is_recoverable() => warn!("Failed to save layout: {}", e),
            Err(e) => error!("Failed to save layout: {}", e),
        }
    }

    pub fn widgets(&self) -> &[WidgetDescriptor] {
        &self.widgets
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    pub fn get(&self, id: &WidgetId) -> Option<&WidgetDescriptor> {
        self.widgets.iter().find(|w| &w.id == id)
    }

    pub fn index_of(&self, id: &WidgetId) -> Option<usize> {
        self.widgets.iter().position(|w| &w.id == id)
    }

    /// Backend shared with other persisted preferences
    pub fn backend(&self) -> &dyn KeyValueStore {
        self.backend.as_ref()
    }

    pub fn backend_mut(&mut self) -> &mut dyn KeyValueStore {
        self.backend.as_mut()
    }

    // ─────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────

    /// Append a widget under a freshly generated id
    pub fn add(&mut self, draft: WidgetDraft) -> WidgetId {
        let widgets = &self.widgets;
        let id = self.ids.next_id(|id| widgets.iter().any(|w| &w.id == id));

        debug!("Adding widget {} ({})", id, draft.visualization_type);
        self.widgets
            .push(WidgetDescriptor::from_draft(id.clone(), draft));
        self.save();
        id
    }

    /// Merge `patch` into the widget with `id`
    ///
    /// Returns whether anything changed. An absent id is a no-op.
    pub fn update(&mut self, id: &WidgetId, patch: &WidgetPatch) -> bool {
        let Some(widget) = self.widgets.iter_mut().find(|w| &w.id == id) else {
            debug!("Ignoring update for unknown widget {}", id);
            return false;
        };

        let merged = widget.merged(patch);
        if *widget == merged {
            return false;
        }
        *widget = merged;
        self.save();
        true
    }

    /// Remove the widget with `id`, if present
    pub fn remove(&mut self, id: &WidgetId) -> Option<WidgetDescriptor> {
        let index = self.index_of(id)?;
        let removed = self.widgets.remove(index);
        debug!("Removed widget {}", removed.id);
        self.save();
        Some(removed)
    }

    /// Move the element at `from` to `to`, shifting the ones in between
    ///
    /// Returns false (and changes nothing) when either index is out of range
    /// or both are equal.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        let len = self.widgets.len();
        if from >= len || to >= len {
            warn!("Rejected reorder {} -> {} on {} widgets", from, to, len);
            return false;
        }
        if from == to {
            return false;
        }

        let widget = self.widgets.remove(from);
        self.widgets.insert(to, widget);
        debug!("Reordered widget {} -> {}", from, to);
        self.save();
        true
    }

    /// Restore the default layout and persist it
    pub fn reset(&mut self) {
        info!("Resetting layout to defaults");
        self.widgets = default_layout();
        self.save();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, MockKeyValueStore};
    use opnpage_core::VisualizationType;

    fn store() -> LayoutStore {
        LayoutStore::load_with_ids(Box::new(MemoryStore::new()), IdGenerator::starting_at(100))
    }

    fn ids(store: &LayoutStore) -> Vec<String> {
        store.widgets().iter().map(|w| w.id.to_string()).collect()
    }

    fn persisted(store: &LayoutStore) -> Option<String> {
        store.backend().get(LAYOUT_KEY).unwrap()
    }

    #[test]
    fn test_load_empty_store_gives_defaults() {
        let store = store();
        assert_eq!(store.len(), 6);
        assert!(store
            .widgets()
            .iter()
            .all(|w| w.visualization_type == VisualizationType::Pill && w.width == 4));
        assert_eq!(store.widgets()[1].data_source, DataSourceId::Reading);
        assert_eq!(persisted(&store), None);
    }

    #[test]
    fn test_load_malformed_gives_defaults() {
        let backend = MemoryStore::with_entry(LAYOUT_KEY, "{ nope");
        let store = LayoutStore::load(Box::new(backend));
        assert_eq!(store.widgets(), default_layout().as_slice());
    }

    #[test]
    fn test_load_wrong_shape_gives_defaults() {
        let backend = MemoryStore::with_entry(LAYOUT_KEY, r#"{"widgets":[]}"#);
        let store = LayoutStore::load(Box::new(backend));
        assert_eq!(store.len(), 6);
    }

    #[test]
    fn test_load_duplicate_ids_gives_defaults() {
        let raw = r#"[
            {"id":"a","visualizationType":"pill","dataSource":"running","w":4,"h":1},
            {"id":"a","visualizationType":"pill","dataSource":"gaming","w":4,"h":1}
        ]"#;
        let store = LayoutStore::load(Box::new(MemoryStore::with_entry(LAYOUT_KEY, raw)));
        assert_eq!(store.widgets(), default_layout().as_slice());
    }

    #[test]
    fn test_load_valid_layout_exactly() {
        let raw = r#"[{"id":"widget-42","visualizationType":"calendar","dataSource":"activeDays","w":6,"h":2}]"#;
        let store = LayoutStore::load(Box::new(MemoryStore::with_entry(LAYOUT_KEY, raw)));
        assert_eq!(store.len(), 1);
        assert_eq!(store.widgets()[0].visualization_type, VisualizationType::Calendar);
        assert_eq!(store.widgets()[0].height, 2);
    }

    #[test]
    fn test_save_then_load_reproduces_layout() {
        let mut first = store();
        first.add(WidgetDraft::new(VisualizationType::BigNumber, DataSourceId::Alcohol));
        first.reorder(6, 0);
        let raw = persisted(&first).unwrap();

        let second = LayoutStore::load(Box::new(MemoryStore::with_entry(LAYOUT_KEY, &raw)));
        assert_eq!(second.widgets(), first.widgets());
    }

    #[test]
    fn test_save_on_empty_store_then_load_gives_defaults() {
        let mut first = store();
        first.save();
        let raw = persisted(&first).unwrap();

        let second = LayoutStore::load(Box::new(MemoryStore::with_entry(LAYOUT_KEY, &raw)));
        assert_eq!(second.widgets(), default_layout().as_slice());
    }

    #[test]
    fn test_reorder_first_to_fourth() {
        let mut store = store();
        assert!(store.reorder(0, 3));
        insta::assert_debug_snapshot!(ids(&store), @r#"
        [
            "widget-2",
            "widget-3",
            "widget-4",
            "widget-1",
            "widget-5",
            "widget-6",
        ]
        "#);
        assert!(persisted(&store).is_some());
    }

    #[test]
    fn test_reorder_last_to_first() {
        let mut store = store();
        assert!(store.reorder(5, 0));
        insta::assert_debug_snapshot!(ids(&store), @r#"
        [
            "widget-6",
            "widget-1",
            "widget-2",
            "widget-3",
            "widget-4",
            "widget-5",
        ]
        "#);
    }

    #[test]
    fn test_reorder_is_permutation() {
        let mut store = store();
        let mut before = ids(&store);
        store.reorder(4, 1);
        let mut after = ids(&store);
        before.sort();
        after.sort();
        assert_eq!(before, after);
    }

    #[test]
    fn test_reorder_noops_do_not_write() {
        let mut store = store();
        assert!(!store.reorder(2, 2));
        assert!(!store.reorder(0, 6));
        assert!(!store.reorder(9, 0));
        assert_eq!(ids(&store), ids(&self::store()));
        assert_eq!(persisted(&store), None);
    }

    #[test]
    fn test_add_assigns_fresh_id() {
        let mut store = store();
        let id = store.add(WidgetDraft::default());

        assert_eq!(id.as_str(), "widget-100");
        assert_eq!(store.len(), 7);
        assert_eq!(store.widgets()[6].id, id);
        assert_eq!(store.widgets()[6].data_source, DataSourceId::Running);
        assert!(persisted(&store).unwrap().contains("widget-100"));
    }

    #[test]
    fn test_add_skips_taken_ids() {
        let mut store =
            LayoutStore::load_with_ids(Box::new(MemoryStore::new()), IdGenerator::starting_at(5));
        let id = store.add(WidgetDraft::default());
        assert_eq!(id.as_str(), "widget-7");
        let next = store.add(WidgetDraft::default());
        assert_eq!(next.as_str(), "widget-8");
    }

    #[test]
    fn test_add_then_remove_restores_layout() {
        let mut store = store();
        let before = store.widgets().to_vec();

        let id = store.add(WidgetDraft::new(VisualizationType::StatChip, DataSourceId::Gaming));
        let removed = store.remove(&id).unwrap();

        assert_eq!(removed.id, id);
        assert_eq!(store.widgets(), before.as_slice());
    }

    #[test]
    fn test_remove_missing_id_is_noop() {
        let mut store = store();
        assert!(store.remove(&WidgetId::new("nonexistent-id")).is_none());
        assert_eq!(store.len(), 6);
        assert_eq!(persisted(&store), None);
    }

    #[test]
    fn test_update_merges_patch() {
        let mut store = store();
        let id = WidgetId::new("widget-3");
        let changed = store.update(&id, &WidgetPatch::visualization(VisualizationType::LineGraph));

        assert!(changed);
        let widget = store.get(&id).unwrap();
        assert_eq!(widget.visualization_type, VisualizationType::LineGraph);
        assert_eq!(widget.data_source, DataSourceId::Gaming);
        assert_eq!(store.index_of(&id), Some(2));
    }

    #[test]
    fn test_update_missing_or_identical_is_noop() {
        let mut store = store();
        assert!(!store.update(
            &WidgetId::new("missing"),
            &WidgetPatch::data_source(DataSourceId::Alcohol)
        ));
        assert!(!store.update(
            &WidgetId::new("widget-1"),
            &WidgetPatch::data_source(DataSourceId::Running)
        ));
        assert_eq!(persisted(&store), None);
    }

    #[test]
    fn test_reset_restores_defaults_and_saves() {
        let mut store = store();
        store.remove(&WidgetId::new("widget-1"));
        store.reset();

        assert_eq!(store.widgets(), default_layout().as_slice());
        let saved = parse_layout(&persisted(&store).unwrap()).unwrap();
        assert_eq!(saved, default_layout());
    }

    #[test]
    fn test_save_failure_keeps_memory_state() {
        let mut backend = MockKeyValueStore::new();
        backend.expect_get().returning(|_| Ok(None));
        backend
            .expect_set()
            .times(1)
            .returning(|_, _| Err(Error::storage("disk full")));

        let mut store = LayoutStore::load_with_ids(Box::new(backend), IdGenerator::starting_at(1));
        assert!(store.reorder(0, 1));
        assert_eq!(store.widgets()[0].id.as_str(), "widget-2");
    }

    #[test]
    fn test_unrecoverable_write_failure_keeps_session_layout() {
        let mut backend = MockKeyValueStore::new();
        backend.expect_get().returning(|_| Ok(None));
        backend.expect_set().times(2).returning(|_, _| {
            Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only filesystem",
            )))
        });

        let mut store = LayoutStore::load_with_ids(Box::new(backend), IdGenerator::starting_at(1));
        assert!(store.reorder(0, 1));
        let id = store.add(WidgetDraft::default());
        assert_eq!(store.len(), 7);
        assert_eq!(store.index_of(&id), Some(6));
    }

    #[test]
    fn test_read_failure_gives_defaults() {
        let mut backend = MockKeyValueStore::new();
        backend
            .expect_get()
            .returning(|_| Err(Error::storage_locked("/tmp/.storage.lock")));

        let store = LayoutStore::load(Box::new(backend));
        assert_eq!(store.len(), 6);
    }

    #[test]
    fn test_parse_layout_keeps_unknown_tags() {
        let raw = r#"[{"id":"x","visualizationType":"radar","dataSource":"sleep","w":4,"h":1}]"#;
        let widgets = parse_layout(raw).unwrap();
        assert_eq!(
            widgets[0].visualization_type,
            VisualizationType::Unknown("radar".into())
        );
        assert_eq!(widgets[0].data_source, DataSourceId::Other("sleep".into()));
    }
}
