//! # Top Navigation
//!
//! Header bar composition: view tabs, cart badge, theme selector, admin
//! toggle and menu refresh.
//!
//! ## Cart Badge Animation
//! ```text
//!   total_items   0 ──► 3 ──────────────► 5 ──────► 0
//!   animating     F     T ── 800 ms ──┐   T ─┐      F (pending reset cancelled)
//!                                     ▼      │
//!                                     F      └─ re-armed, old reset cancelled
//! ```
//!
//! Every re-arm bumps a generation counter; a reset task only clears the
//! flag if its generation is still current.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use pos_view_core::{ModalKind, Theme, ViewState};
use serde::Serialize;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info, trace, warn};
use ts_rs::TS;

use crate::error::{UiError, UiResult};
use crate::host::{HostWindow, ListenerId, ListenerKind};
use crate::manager::ViewStateManager;
use crate::store::{PosStore, StoreAction};

/// Reason recorded with the store when admin mode is left from the header.
const ADMIN_EXIT_REASON: &str = "Exited admin mode from navigation";

/// What the admin button did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum AdminToggle {
    /// Admin mode was on and has been turned off.
    Exited,
    /// Admin mode was off; the login modal is now open.
    LoginRequested,
}

/// One view switch in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ViewTab {
    pub view: ViewState,
    pub is_active: bool,
}

/// Everything the header renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TopNavModel {
    pub tabs: Vec<ViewTab>,
    pub cart_badge: Option<String>,
    pub is_cart_animating: bool,
    pub is_theme_dropdown_open: bool,
    pub current_theme: Theme,
    pub themes: Vec<Theme>,
    pub is_admin_mode: bool,
    pub current_date: String,
}

#[derive(Debug, Default)]
struct NavState {
    /// Set by `start()`, cleared by `stop()`. Timers are only armed while set.
    active: bool,
    last_total: u32,
    cart_animating: bool,
    generation: u64,
    dropdown_open: bool,
}

struct NavShared {
    store: Arc<dyn PosStore>,
    animation: Duration,
    state: Mutex<NavState>,
    reset: Mutex<Option<JoinHandle<()>>>,
}

impl NavShared {
    fn lock(&self) -> std::sync::MutexGuard<'_, NavState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn cancel_reset(&self) {
        let pending = self
            .reset
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(task) = pending {
            task.abort();
        }
    }

    /// Re-reads the cart count and arms or clears the badge animation.
    ///
    /// The state lock is held until the reset task is registered, so a
    /// concurrent `deactivate()` either sees the new task or prevents it.
    fn observe_cart(self: &Arc<Self>) {
        let total = self.store.total_items();

        let mut state = self.lock();
        if !state.active || state.last_total == total {
            return;
        }
        state.last_total = total;
        state.generation += 1;
        state.cart_animating = total > 0;
        let generation = state.generation;

        self.cancel_reset();

        if !state.cart_animating {
            trace!("Cart emptied, animation cleared");
            return;
        }

        let Ok(runtime) = Handle::try_current() else {
            warn!("No runtime for the cart animation reset, clearing at once");
            state.cart_animating = false;
            return;
        };

        let deadline = Instant::now() + self.animation;
        let shared = Arc::clone(self);
        let task = runtime.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            shared.finish_animation(generation);
        });

        *self.reset.lock().unwrap_or_else(PoisonError::into_inner) = Some(task);
        debug!(total, generation, "Cart animation armed");
    }

    fn activate(&self) {
        self.lock().active = true;
    }

    /// Stops arming timers and cancels the pending reset.
    fn deactivate(&self) {
        self.lock().active = false;
        self.cancel_reset();
    }

    fn finish_animation(&self, generation: u64) {
        let mut state = self.lock();
        if state.generation == generation {
            state.cart_animating = false;
        }
    }
}

async fn cart_watch_loop(shared: Arc<NavShared>, mut changes: watch::Receiver<u64>) {
    while changes.changed().await.is_ok() {
        changes.borrow_and_update();
        shared.observe_cart();
    }
}

struct NavEffects {
    pointer_listener: ListenerId,
    watcher: JoinHandle<()>,
}

/// Header bar controller.
pub struct TopNavigation {
    shared: Arc<NavShared>,
    manager: Arc<ViewStateManager>,
    host: Arc<dyn HostWindow>,
    effects: Mutex<Option<NavEffects>>,
}

impl TopNavigation {
    pub(crate) fn new(
        store: Arc<dyn PosStore>,
        manager: Arc<ViewStateManager>,
        host: Arc<dyn HostWindow>,
    ) -> Self {
        let animation = manager.config().cart_animation();
        TopNavigation {
            shared: Arc::new(NavShared {
                store,
                animation,
                state: Mutex::new(NavState::default()),
                reset: Mutex::new(None),
            }),
            manager,
            host,
            effects: Mutex::new(None),
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Installs the outside-press listener and the cart watcher.
    pub fn start(&self) -> UiResult<()> {
        let mut effects = self.effects.lock().unwrap_or_else(PoisonError::into_inner);
        if effects.is_some() {
            return Err(UiError::AlreadyStarted("TopNavigation"));
        }

        let runtime = Handle::try_current().map_err(|e| UiError::NoRuntime(e.to_string()))?;

        let pointer_listener = self.host.add_listener(ListenerKind::PointerDown);
        let changes = self.shared.store.subscribe();
        let watcher = runtime.spawn(cart_watch_loop(Arc::clone(&self.shared), changes));

        *effects = Some(NavEffects {
            pointer_listener,
            watcher,
        });
        drop(effects);

        self.shared.activate();
        self.shared.observe_cart();
        info!("Top navigation started");
        Ok(())
    }

    /// Removes the listener and cancels the watcher and any pending reset.
    pub fn stop(&self) {
        let effects = self
            .effects
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        if let Some(effects) = &effects {
            effects.watcher.abort();
        }
        self.shared.deactivate();

        if let Some(effects) = effects {
            self.host.remove_listener(effects.pointer_listener);
            info!("Top navigation stopped");
        }
    }

    pub fn is_started(&self) -> bool {
        self.effects
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Re-reads the store. The watcher does this while started; when
    /// stopped this is a no-op.
    pub fn on_store_changed(&self) {
        self.shared.observe_cart();
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Badge text, `None` for an empty cart.
    pub fn cart_badge(&self) -> Option<String> {
        match self.shared.store.total_items() {
            0 => None,
            n => Some(n.to_string()),
        }
    }

    pub fn is_cart_animating(&self) -> bool {
        self.shared.lock().cart_animating
    }

    // =========================================================================
    // Theme
    // =========================================================================

    pub fn current_theme(&self) -> Theme {
        self.shared
            .store
            .shop_settings()
            .theme
            .unwrap_or_else(|| self.manager.config().default_theme())
    }

    pub fn is_theme_dropdown_open(&self) -> bool {
        self.shared.lock().dropdown_open
    }

    pub fn toggle_theme_dropdown(&self) -> bool {
        let mut state = self.shared.lock();
        state.dropdown_open = !state.dropdown_open;
        state.dropdown_open
    }

    pub fn select_theme(&self, theme: Theme) {
        self.shared.store.dispatch(StoreAction::SetTheme { theme });
        self.shared.lock().dropdown_open = false;
        info!(%theme, "Theme selected");
    }

    /// Pointer pressed somewhere in the document. A press outside the
    /// selector closes the dropdown.
    pub fn handle_pointer_down(&self, inside_selector: bool) -> bool {
        if !self.is_started() {
            return false;
        }
        if inside_selector {
            return false;
        }

        let mut state = self.shared.lock();
        let was_open = std::mem::replace(&mut state.dropdown_open, false);
        if was_open {
            trace!("Theme dropdown closed by outside press");
        }
        was_open
    }

    // =========================================================================
    // Admin & Views
    // =========================================================================

    /// Leaves admin mode, or asks for a login when it is off.
    pub fn toggle_admin(&self) -> AdminToggle {
        if !self.shared.store.is_admin_mode() {
            self.manager.set_modal_open(ModalKind::AdminLogin, true);
            return AdminToggle::LoginRequested;
        }

        if self.manager.view().requires_admin() {
            self.manager.set_view(ViewState::Sales);
        }

        self.shared.store.dispatch(StoreAction::ToggleAdminMode {
            reason: ADMIN_EXIT_REASON.to_string(),
        });
        info!("Admin mode exited");
        AdminToggle::Exited
    }

    /// Tabs available to the operator; ai-dashboard only in admin mode.
    pub fn view_tabs(&self) -> Vec<ViewTab> {
        let admin = self.shared.store.is_admin_mode();
        let current = self.manager.view();

        ViewState::ALL
            .into_iter()
            .filter(|v| admin || !v.requires_admin())
            .map(|view| ViewTab {
                view,
                is_active: view == current,
            })
            .collect()
    }

    /// Switches view through the header. Refuses admin-only views while
    /// admin mode is off.
    pub fn switch_view(&self, view: ViewState) -> bool {
        if view.requires_admin() && !self.shared.store.is_admin_mode() {
            warn!(%view, "View requires admin mode");
            return false;
        }
        self.manager.set_view(view);
        true
    }

    /// Asks the store to reload menu data.
    pub fn refresh_menu(&self) {
        self.shared
            .store
            .dispatch(StoreAction::FetchMenuData { force: true });
    }

    pub fn model(&self) -> TopNavModel {
        let (is_cart_animating, is_theme_dropdown_open) = {
            let state = self.shared.lock();
            (state.cart_animating, state.dropdown_open)
        };

        TopNavModel {
            tabs: self.view_tabs(),
            cart_badge: self.cart_badge(),
            is_cart_animating,
            is_theme_dropdown_open,
            current_theme: self.current_theme(),
            themes: Theme::ALL.to_vec(),
            is_admin_mode: self.shared.store.is_admin_mode(),
            current_date: self.manager.current_date(),
        }
    }
}

impl Drop for TopNavigation {
    fn drop(&mut self) {
        self.stop();
    }
}

impl std::fmt::Debug for TopNavigation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TopNavigation")
            .field("state", &*self.shared.lock())
            .field("started", &self.is_started())
            .finish()
    }
}
