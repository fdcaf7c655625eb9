//! # Category Navigation List
//!
//! The category column: the derived display order, row view models, and the
//! commands an operator issues from it (select, pin, add, delete).
//!
//! ## Display Order
//! ```text
//! categories      [A, B, favorites, C]
//! categoryOrder   [C, A]
//! pinned          {B}
//!
//!   1. favorites out          [A, B, C]          + favorites
//!   2. rank by categoryOrder  [C, A, B]          (absent keep input order)
//!   3. pinned first           [B] ++ [C, A]
//!   4. result                 [favorites, B, C, A]
//! ```
//!
//! Add and delete are admin-only and go through the operator dialogs. Pin
//! toggling is available to every operator.

use std::sync::{Arc, Mutex, PoisonError};

use pos_view_core::{
    apply_nav_key, resolve_icon, CategoryIcon, CommandOutcome, DisplayOrderCache, FocusMove,
    FocusState, NavKey, Pane, PaneLengths,
};
use serde::Serialize;
use tracing::{debug, info, warn};
use ts_rs::TS;

use crate::dialog::{ConfirmRequest, Confirmer, PromptRequest, Prompter};
use crate::host::RowEvent;
use crate::manager::ViewStateManager;
use crate::store::{PosStore, StoreAction};

/// View model of one row in the category column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CategoryRow {
    pub name: String,
    pub icon: CategoryIcon,
    pub is_pinned: bool,
    pub is_active: bool,
    pub can_pin: bool,
}

/// Category column controller.
pub struct CategoryNavigation {
    store: Arc<dyn PosStore>,
    manager: Arc<ViewStateManager>,
    confirmer: Arc<dyn Confirmer>,
    prompter: Arc<dyn Prompter>,
    favorites: String,
    order: Mutex<DisplayOrderCache>,
}

impl CategoryNavigation {
    pub(crate) fn new(
        store: Arc<dyn PosStore>,
        manager: Arc<ViewStateManager>,
        confirmer: Arc<dyn Confirmer>,
        prompter: Arc<dyn Prompter>,
    ) -> Self {
        let favorites = manager.config().favorites().to_string();
        CategoryNavigation {
            store,
            manager,
            confirmer,
            prompter,
            favorites,
            order: Mutex::new(DisplayOrderCache::new()),
        }
    }

    // =========================================================================
    // Derived State
    // =========================================================================

    /// Categories in display order: favorites, pinned, then the rest ranked
    /// by the saved order.
    pub fn display_order(&self) -> Vec<String> {
        let categories = self.store.categories();
        let pinned = self.store.pinned_categories();
        let category_order = self.store.category_order();

        let mut cache = self.order.lock().unwrap_or_else(PoisonError::into_inner);
        cache
            .get(&categories, &pinned, &category_order, &self.favorites)
            .to_vec()
    }

    /// How many times the display order was actually derived.
    pub fn order_recomputations(&self) -> u64 {
        self.order
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .recomputations()
    }

    pub fn rows(&self) -> Vec<CategoryRow> {
        let pinned = self.store.pinned_categories();
        let active = self.store.active_category();
        let searching = !self.manager.search_query().is_empty();

        self.display_order()
            .into_iter()
            .map(|name| {
                let is_favorites = name == self.favorites;
                CategoryRow {
                    icon: resolve_icon(&name, &self.favorites),
                    is_pinned: pinned.contains(&name),
                    is_active: !searching && name == active,
                    can_pin: !is_favorites,
                    name,
                }
            })
            .collect()
    }

    /// Whether the column takes keyboard focus at all.
    pub fn is_focusable(&self) -> bool {
        self.store.shop_settings().is_keyboard_nav_enabled
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Makes `name` the active category and leaves search.
    pub fn select_category(&self, name: &str) {
        self.manager.clear_search();
        self.store.dispatch(StoreAction::SetActiveCategory {
            name: name.to_string(),
        });
        debug!(category = name, "Category selected");
    }

    /// Pins or unpins `name`. Admin only. The row's own selection must not
    /// fire, so the event's propagation is stopped first in every case.
    pub fn toggle_pin(&self, name: &str, event: &mut RowEvent) -> CommandOutcome {
        event.stop_propagation();

        if !self.store.is_admin_mode() {
            warn!(category = name, "Pinning a category requires admin mode");
            return CommandOutcome::DeniedNoPermission;
        }

        if name == self.favorites {
            return CommandOutcome::NotEligible;
        }

        let mut pinned = self.store.pinned_categories();
        let now_pinned = if let Some(pos) = pinned.iter().position(|p| p == name) {
            pinned.remove(pos);
            false
        } else {
            pinned.push(name.to_string());
            true
        };

        self.store
            .dispatch(StoreAction::SetPinnedCategories { names: pinned });
        debug!(category = name, pinned = now_pinned, "Pin toggled");
        CommandOutcome::Applied
    }

    /// Asks for a name and adds the category. Admin only.
    pub async fn add_category(&self) -> CommandOutcome {
        if !self.store.is_admin_mode() {
            warn!("Adding a category requires admin mode");
            return CommandOutcome::DeniedNoPermission;
        }

        let answer = self
            .prompter
            .prompt(PromptRequest {
                message: "New category name".to_string(),
            })
            .await;

        let Some(answer) = answer else {
            debug!("Add category dismissed");
            return CommandOutcome::Cancelled;
        };

        let name = answer.trim();
        if name.is_empty() {
            warn!("Refusing to add a category with a blank name");
            return CommandOutcome::DeniedEmptyInput;
        }

        self.store.dispatch(StoreAction::AddCategory {
            name: name.to_string(),
        });
        info!(category = name, "Category added");
        CommandOutcome::Applied
    }

    /// Deletes `name` after the operator confirms. Admin only.
    pub async fn delete_category(&self, name: &str) -> CommandOutcome {
        if !self.store.is_admin_mode() {
            warn!(category = name, "Deleting a category requires admin mode");
            return CommandOutcome::DeniedNoPermission;
        }

        if name == self.favorites {
            return CommandOutcome::NotEligible;
        }

        let confirmed = self
            .confirmer
            .confirm(ConfirmRequest {
                title: "Delete category".to_string(),
                message: format!("Delete category \"{name}\"?"),
            })
            .await;

        if !confirmed {
            debug!(category = name, "Delete category declined");
            return CommandOutcome::Cancelled;
        }

        self.store.dispatch(StoreAction::DeleteCategory {
            name: name.to_string(),
        });
        info!(category = name, "Category deleted");
        CommandOutcome::Applied
    }

    // =========================================================================
    // Keyboard
    // =========================================================================

    /// Native focus entered the column. Seeds the focus at the active
    /// category when the column has no recorded focus yet.
    pub fn handle_focus(&self) -> bool {
        if !self.is_focusable() {
            return false;
        }

        let already = self
            .manager
            .focus()
            .is_some_and(|f| f.pane == Pane::Categories);
        if already {
            return false;
        }

        let active = self.store.active_category();
        let index = self
            .display_order()
            .iter()
            .position(|c| *c == active)
            .unwrap_or(0);

        self.manager
            .set_focus(Some(FocusState::new(Pane::Categories, index)));
        true
    }

    /// Applies a navigation key. `menu_len` is the number of items the menu
    /// pane currently shows.
    pub fn handle_nav_key(&self, key: NavKey, menu_len: usize) -> FocusMove {
        if !self.is_focusable() {
            return FocusMove::Ignored;
        }

        let order = self.display_order();
        let lengths = PaneLengths {
            categories: order.len(),
            menu: menu_len,
        };

        let movement = apply_nav_key(self.manager.focus(), key, lengths);
        match movement {
            FocusMove::Moved(focus) => self.manager.set_focus(focus),
            FocusMove::Activate(focus) if focus.pane == Pane::Categories => {
                if let Some(name) = order.get(focus.index) {
                    self.select_category(name);
                }
            }
            FocusMove::Activate(_) | FocusMove::Ignored => {}
        }
        movement
    }
}

impl std::fmt::Debug for CategoryNavigation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CategoryNavigation")
            .field("favorites", &self.favorites)
            .finish_non_exhaustive()
    }
}
