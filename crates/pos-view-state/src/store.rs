//! # Store Handle
//!
//! The typed interface to the external store that owns all durable state,
//! plus an in-memory implementation.
//!
//! ## Read / Dispatch Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Store Interaction                               │
//! │                                                                         │
//! │  View layer                         External store                      │
//! │  ──────────                         ──────────────                      │
//! │                                                                         │
//! │  categories() ─────────────────────► snapshot (Vec, owned)              │
//! │  shop_settings() ──────────────────► snapshot                           │
//! │                                                                         │
//! │  dispatch(StoreAction::AddCategory) ─► single serialized mutation       │
//! │                                         │                               │
//! │  subscribe() ◄──── revision += 1 ◄──────┘                               │
//! │  (watch::Receiver<u64>)                                                 │
//! │                                                                         │
//! │  Each selector call is one atomic read. The view layer never assumes    │
//! │  two selector reads observe the same revision.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Mutex, PoisonError, RwLock};

use pos_view_core::{ShopSettings, Theme, FAVORITES_CATEGORY};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{debug, info};

// =============================================================================
// Actions
// =============================================================================

/// Commands the view layer dispatches to the store. Fire-and-forget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum StoreAction {
    SetActiveCategory { name: String },
    AddCategory { name: String },
    DeleteCategory { name: String },
    SetPinnedCategories { names: Vec<String> },
    SetTheme { theme: Theme },
    ToggleAdminMode { reason: String },
    FetchMenuData { force: bool },
}

// =============================================================================
// Store Trait
// =============================================================================

/// Handle to the external store.
///
/// Selectors return owned snapshots; actions are single dispatches.
/// `pinned_categories` is a set carried as a list.
pub trait PosStore: Send + Sync {
    fn categories(&self) -> Vec<String>;

    fn active_category(&self) -> String;

    fn pinned_categories(&self) -> Vec<String>;

    fn category_order(&self) -> Vec<String>;

    fn shop_settings(&self) -> ShopSettings;

    fn is_admin_mode(&self) -> bool;

    fn total_items(&self) -> u32;

    /// Change notifications; the value is a revision that increases on every
    /// mutation.
    fn subscribe(&self) -> watch::Receiver<u64>;

    fn dispatch(&self, action: StoreAction);
}

// =============================================================================
// In-Memory Store
// =============================================================================

/// Durable state held by [`MemoryStore`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreData {
    pub categories: Vec<String>,
    pub active_category: String,
    pub pinned_categories: Vec<String>,
    pub category_order: Vec<String>,
    pub shop_settings: ShopSettings,
    pub is_admin_mode: bool,
    pub total_items: u32,
}

impl Default for StoreData {
    fn default() -> Self {
        StoreData {
            categories: vec![FAVORITES_CATEGORY.to_string()],
            active_category: FAVORITES_CATEGORY.to_string(),
            pinned_categories: Vec::new(),
            category_order: Vec::new(),
            shop_settings: ShopSettings::default(),
            is_admin_mode: false,
            total_items: 0,
        }
    }
}

impl StoreData {
    fn apply(&mut self, action: &StoreAction) {
        match action {
            StoreAction::SetActiveCategory { name } => {
                self.active_category = name.clone();
            }
            StoreAction::AddCategory { name } => {
                if !self.categories.contains(name) {
                    self.categories.push(name.clone());
                }
            }
            StoreAction::DeleteCategory { name } => {
                self.categories.retain(|c| c != name);
                self.pinned_categories.retain(|c| c != name);
                self.category_order.retain(|c| c != name);
                if &self.active_category == name {
                    self.active_category = self.categories.first().cloned().unwrap_or_default();
                }
            }
            StoreAction::SetPinnedCategories { names } => {
                self.pinned_categories = names.clone();
            }
            StoreAction::SetTheme { theme } => {
                self.shop_settings.theme = Some(*theme);
            }
            StoreAction::ToggleAdminMode { .. } => {
                self.is_admin_mode = !self.is_admin_mode;
            }
            StoreAction::FetchMenuData { .. } => {}
        }
    }
}

/// Single-writer in-memory store.
///
/// Used by the terminal app for standalone sessions and by tests, which can
/// inspect every dispatched action through [`MemoryStore::dispatched`].
#[derive(Debug)]
pub struct MemoryStore {
    data: RwLock<StoreData>,
    revision: watch::Sender<u64>,
    dispatched: Mutex<Vec<StoreAction>>,
}

impl MemoryStore {
    pub fn new(data: StoreData) -> Self {
        let (revision, _) = watch::channel(0);
        MemoryStore {
            data: RwLock::new(data),
            revision,
            dispatched: Mutex::new(Vec::new()),
        }
    }

    /// Mutates the data directly (e.g. cart changes owned by other screens)
    /// and notifies subscribers.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut StoreData),
    {
        {
            let mut data = self.data.write().unwrap_or_else(PoisonError::into_inner);
            f(&mut data);
        }
        self.bump();
    }

    /// Current data snapshot.
    pub fn data(&self) -> StoreData {
        self.read(Clone::clone)
    }

    /// Every action dispatched so far, in order.
    pub fn dispatched(&self) -> Vec<StoreAction> {
        self.dispatched
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Current revision.
    pub fn revision(&self) -> u64 {
        *self.revision.borrow()
    }

    fn read<R>(&self, f: impl FnOnce(&StoreData) -> R) -> R {
        let data = self.data.read().unwrap_or_else(PoisonError::into_inner);
        f(&data)
    }

    fn bump(&self) {
        self.revision.send_modify(|r| *r += 1);
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(StoreData::default())
    }
}

impl PosStore for MemoryStore {
    fn categories(&self) -> Vec<String> {
        self.read(|d| d.categories.clone())
    }

    fn active_category(&self) -> String {
        self.read(|d| d.active_category.clone())
    }

    fn pinned_categories(&self) -> Vec<String> {
        self.read(|d| d.pinned_categories.clone())
    }

    fn category_order(&self) -> Vec<String> {
        self.read(|d| d.category_order.clone())
    }

    fn shop_settings(&self) -> ShopSettings {
        self.read(|d| d.shop_settings)
    }

    fn is_admin_mode(&self) -> bool {
        self.read(|d| d.is_admin_mode)
    }

    fn total_items(&self) -> u32 {
        self.read(|d| d.total_items)
    }

    fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    fn dispatch(&self, action: StoreAction) {
        debug!(?action, "Dispatching store action");
        {
            let mut data = self.data.write().unwrap_or_else(PoisonError::into_inner);
            data.apply(&action);
        }
        if let StoreAction::FetchMenuData { force } = &action {
            info!(force, "Menu data refresh requested");
        }
        self.dispatched
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(action);
        self.bump();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_records_and_applies() {
        let store = MemoryStore::default();
        store.dispatch(StoreAction::AddCategory {
            name: "Drinks".into(),
        });
        store.dispatch(StoreAction::AddCategory {
            name: "Drinks".into(),
        });

        assert_eq!(store.categories(), vec!["favorites", "Drinks"]);
        assert_eq!(store.dispatched().len(), 2);
        assert_eq!(store.revision(), 2);
    }

    #[test]
    fn test_delete_cleans_pins_order_and_active() {
        let store = MemoryStore::new(StoreData {
            categories: vec!["favorites".into(), "Drinks".into(), "Rice".into()],
            active_category: "Drinks".into(),
            pinned_categories: vec!["Drinks".into()],
            category_order: vec!["Drinks".into(), "Rice".into()],
            ..StoreData::default()
        });

        store.dispatch(StoreAction::DeleteCategory {
            name: "Drinks".into(),
        });

        let data = store.data();
        assert_eq!(data.categories, vec!["favorites", "Rice"]);
        assert!(data.pinned_categories.is_empty());
        assert_eq!(data.category_order, vec!["Rice"]);
        assert_eq!(data.active_category, "favorites");
    }

    #[test]
    fn test_subscribers_see_revisions() {
        let store = MemoryStore::default();
        let mut rx = store.subscribe();
        assert!(!rx.has_changed().unwrap());

        store.update(|d| d.total_items = 3);
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), 1);
        assert_eq!(store.total_items(), 3);
    }

    #[test]
    fn test_toggle_admin_and_theme() {
        let store = MemoryStore::default();
        store.dispatch(StoreAction::ToggleAdminMode {
            reason: "test".into(),
        });
        assert!(store.is_admin_mode());

        store.dispatch(StoreAction::SetTheme { theme: Theme::Dark });
        assert_eq!(store.shop_settings().theme, Some(Theme::Dark));
    }
}
