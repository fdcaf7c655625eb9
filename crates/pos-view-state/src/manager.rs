//! # View State Manager
//!
//! Owns the terminal's ephemeral UI state and the side effects that keep it
//! consistent with the host and the store.
//!
//! ## Manager Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      ViewStateManager                                   │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  UiState (RwLock)                                                │  │
//! │  │  view • modals • editing target • panels • focus • zoom          │  │
//! │  │  search query • mount date • applied theme class                 │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  start() installs                          stop() releases             │
//! │  ─────────────────                         ──────────────               │
//! │  • Resize listener  ──► handle_resize()    • remove_listener            │
//! │  • Clock task (10 s interval) ──► now      • abort                      │
//! │  • Store watcher ──► theme + admin guard   • abort                      │
//! │                                                                         │
//! │  Theme effect: store theme (or default) ──► host.set_theme_class()     │
//! │  Admin guard:  admin off && view == ai-dashboard ──► view = sales      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The manager is built once at the composition root
//! ([`crate::session::SessionBuilder`]) with every collaborator it needs and
//! shared by reference with the other components.

use std::sync::{Arc, Mutex, PoisonError, RwLock};
use std::time::Duration;

use chrono::{DateTime, Local};
use pos_view_core::date::format_thai_long_date;
use pos_view_core::{
    CommandOutcome, EditingItemTarget, FocusState, MenuItem, ModalFlags, ModalKind, PanelState,
    Theme, ViewState, ZoomDirection, ZoomLevel,
};
use serde::Serialize;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info, trace, warn};
use ts_rs::TS;

use crate::action_log::{ActionLog, ActionLogEntry};
use crate::config::UiConfig;
use crate::error::{UiError, UiResult};
use crate::host::{HostWindow, ListenerId, ListenerKind};
use crate::store::PosStore;

// =============================================================================
// State
// =============================================================================

#[derive(Debug, Clone)]
struct UiState {
    view: ViewState,
    modals: ModalFlags,
    editing: Option<EditingItemTarget>,
    panels: PanelState,
    focus: Option<FocusState>,
    zoom: ZoomLevel,
    search_query: String,
    current_date: String,
    applied_theme: Option<&'static str>,
}

/// Serializable copy of every piece of ephemeral state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ViewSnapshot {
    pub view: ViewState,
    pub modals: ModalFlags,
    pub editing: Option<EditingItemTarget>,
    pub panels: PanelState,
    pub focus: Option<FocusState>,
    pub zoom_px: u32,
    pub search_query: String,
    pub current_date: String,
    pub theme_class: Option<String>,
}

impl From<&UiState> for ViewSnapshot {
    fn from(state: &UiState) -> Self {
        ViewSnapshot {
            view: state.view,
            modals: state.modals,
            editing: state.editing.clone(),
            panels: state.panels,
            focus: state.focus,
            zoom_px: state.zoom.px(),
            search_query: state.search_query.clone(),
            current_date: state.current_date.clone(),
            theme_class: state.applied_theme.map(str::to_string),
        }
    }
}

// =============================================================================
// Shared Internals
// =============================================================================

/// Everything the background tasks need, shared with the manager.
struct Shared {
    store: Arc<dyn PosStore>,
    host: Arc<dyn HostWindow>,
    action_log: Arc<dyn ActionLog>,
    config: Arc<UiConfig>,
    state: RwLock<UiState>,
    now: watch::Sender<DateTime<Local>>,
}

impl Shared {
    fn read<R>(&self, f: impl FnOnce(&UiState) -> R) -> R {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        f(&state)
    }

    fn write<R>(&self, f: impl FnOnce(&mut UiState) -> R) -> R {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut state)
    }

    /// Applies the store's theme to the host. Without `force`, only a
    /// changed class is re-applied.
    fn apply_theme(&self, force: bool) {
        let theme = self.store.shop_settings().theme;
        let class = Theme::class_for(theme, self.config.default_theme());

        let changed = self.write(|s| {
            if !force && s.applied_theme == Some(class) {
                return false;
            }
            s.applied_theme = Some(class);
            true
        });

        if changed {
            self.host.set_theme_class(class);
            debug!(class, "Theme class applied");
        }
    }

    /// Leaves ai-dashboard once admin mode is off.
    fn enforce_admin_view(&self) {
        if self.store.is_admin_mode() {
            return;
        }

        let forced = self.write(|s| {
            if s.view.requires_admin() {
                s.view = ViewState::Sales;
                true
            } else {
                false
            }
        });

        if forced {
            info!("Admin mode is off, leaving ai-dashboard for sales");
        }
    }

    fn sync_with_store(&self) {
        self.apply_theme(false);
        self.enforce_admin_view();
    }

    fn apply_resize(&self, width: u32) {
        let breakpoints = self.config.breakpoints();
        let open = self.write(|s| {
            s.panels.on_resize(width, &breakpoints);
            s.panels.is_order_panel_open
        });
        debug!(width, order_panel_open = open, "Viewport resized");
    }
}

// =============================================================================
// Effects
// =============================================================================

/// Resources installed by `start()`.
struct Effects {
    resize_listener: ListenerId,
    tasks: Vec<JoinHandle<()>>,
}

impl Effects {
    fn release(self, host: &dyn HostWindow) {
        for task in &self.tasks {
            task.abort();
        }
        host.remove_listener(self.resize_listener);
    }
}

/// Ticks at `first_tick` and every `period` after it. `first_tick` is fixed
/// when the effect is installed, not when the task is first polled.
async fn clock_loop(shared: Arc<Shared>, first_tick: Instant, period: Duration) {
    let mut ticker = interval_at(first_tick, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        let now = Local::now();
        shared.now.send_replace(now);
        trace!(%now, "Clock tick");
    }
}

async fn store_watch_loop(shared: Arc<Shared>, mut changes: watch::Receiver<u64>) {
    while changes.changed().await.is_ok() {
        let revision = *changes.borrow_and_update();
        trace!(revision, "Store changed");
        shared.sync_with_store();
    }
    debug!("Store change stream closed");
}

// =============================================================================
// View State Manager
// =============================================================================

/// Holder of the terminal's ephemeral UI state.
pub struct ViewStateManager {
    shared: Arc<Shared>,
    effects: Mutex<Option<Effects>>,
}

impl ViewStateManager {
    /// Creates the manager. This is the mount point: the header date and
    /// the initial panel collapse state are taken from this moment and the
    /// host's current width.
    pub(crate) fn new(
        store: Arc<dyn PosStore>,
        host: Arc<dyn HostWindow>,
        action_log: Arc<dyn ActionLog>,
        config: Arc<UiConfig>,
    ) -> Self {
        let mounted_at = Local::now();
        let width = host.inner_width();

        let state = UiState {
            view: ViewState::Sales,
            modals: ModalFlags::default(),
            editing: None,
            panels: PanelState::at_mount(width, &config.breakpoints()),
            focus: None,
            zoom: config.zoom_bounds().initial(),
            search_query: String::new(),
            current_date: format_thai_long_date(&mounted_at),
            applied_theme: None,
        };

        let (now, _) = watch::channel(mounted_at);

        debug!(width, date = %state.current_date, "View state mounted");

        ViewStateManager {
            shared: Arc::new(Shared {
                store,
                host,
                action_log,
                config,
                state: RwLock::new(state),
                now,
            }),
            effects: Mutex::new(None),
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Installs the responsive, theme, clock and store-watch effects.
    ///
    /// Must run inside a tokio runtime.
    pub fn start(&self) -> UiResult<()> {
        let mut effects = self.effects.lock().unwrap_or_else(PoisonError::into_inner);
        if effects.is_some() {
            return Err(UiError::AlreadyStarted("ViewStateManager"));
        }

        let runtime = Handle::try_current().map_err(|e| UiError::NoRuntime(e.to_string()))?;
        let shared = &self.shared;

        let width = shared.host.inner_width();
        shared.apply_resize(width);
        let resize_listener = shared.host.add_listener(ListenerKind::Resize);

        shared.apply_theme(true);
        shared.enforce_admin_view();

        let period = shared.config.clock_tick();
        let first_tick = Instant::now() + period;
        let changes = shared.store.subscribe();
        let tasks = vec![
            runtime.spawn(clock_loop(Arc::clone(shared), first_tick, period)),
            runtime.spawn(store_watch_loop(Arc::clone(shared), changes)),
        ];

        *effects = Some(Effects {
            resize_listener,
            tasks,
        });

        info!(width, "View state manager started");
        Ok(())
    }

    /// Cancels timers and removes listeners. Safe to call when not started.
    pub fn stop(&self) {
        let effects = self
            .effects
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        if let Some(effects) = effects {
            effects.release(self.shared.host.as_ref());
            info!("View state manager stopped");
        }
    }

    pub fn is_started(&self) -> bool {
        self.effects
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Re-reads the store after a change notification. The store watcher
    /// does this automatically while started.
    pub fn on_store_changed(&self) {
        self.shared.sync_with_store();
    }

    /// Resize event from the host. Ignored unless the resize listener is
    /// installed.
    ///
    /// Always overwrites the order panel's open flag, including one the
    /// operator toggled by hand.
    pub fn handle_resize(&self, width: u32) -> bool {
        if !self.is_started() {
            debug!(width, "Resize ignored, manager not started");
            return false;
        }
        self.shared.apply_resize(width);
        true
    }

    // =========================================================================
    // View
    // =========================================================================

    /// Replaces the current view. Admin gating of ai-dashboard is the
    /// caller's job.
    pub fn set_view(&self, view: ViewState) {
        let previous = self.shared.write(|s| std::mem::replace(&mut s.view, view));
        if previous != view {
            debug!(%previous, %view, "View changed");
        }
    }

    pub fn view(&self) -> ViewState {
        self.shared.read(|s| s.view)
    }

    // =========================================================================
    // Modals
    // =========================================================================

    pub fn set_modal_open(&self, kind: ModalKind, open: bool) {
        self.shared.write(|s| s.modals.set(kind, open));
        debug!(modal = %kind, open, "Modal visibility changed");
    }

    pub fn is_modal_open(&self, kind: ModalKind) -> bool {
        self.shared.read(|s| s.modals.is_open(kind))
    }

    pub fn modals(&self) -> ModalFlags {
        self.shared.read(|s| s.modals)
    }

    /// Opens the menu-item editor on `item`, or on a new item in
    /// `category` (empty when `None`). Requires admin mode.
    pub fn open_menu_item_editor(
        &self,
        item: Option<MenuItem>,
        category: Option<&str>,
    ) -> CommandOutcome {
        if !self.shared.store.is_admin_mode() {
            warn!("Menu item editor requires admin mode");
            return CommandOutcome::DeniedNoPermission;
        }

        let target = EditingItemTarget::from_request(item, category);
        info!(category = target.category(), "Opening menu item editor");

        self.shared.write(|s| {
            s.editing = Some(target);
            s.modals.set(ModalKind::MenuItemEdit, true);
        });

        CommandOutcome::Applied
    }

    /// Closes the editor and forgets its target.
    pub fn close_menu_item_editor(&self) {
        self.shared.write(|s| {
            s.editing = None;
            s.modals.set(ModalKind::MenuItemEdit, false);
        });
    }

    pub fn editing_target(&self) -> Option<EditingItemTarget> {
        self.shared.read(|s| s.editing.clone())
    }

    // =========================================================================
    // Zoom
    // =========================================================================

    /// One step larger. Returns false (and changes nothing) at the maximum.
    pub fn zoom_in(&self) -> bool {
        self.zoom(ZoomDirection::In)
    }

    /// One step smaller. Returns false (and changes nothing) at the minimum.
    pub fn zoom_out(&self) -> bool {
        self.zoom(ZoomDirection::Out)
    }

    fn zoom(&self, direction: ZoomDirection) -> bool {
        let shared = &self.shared;
        let bounds = shared.config.zoom_bounds();
        let current = shared.host.root_font_size().unwrap_or(bounds.default_px);

        let Some(level) = bounds.step(current, direction) else {
            return false;
        };

        shared.host.set_root_font_size(level.px());
        shared.write(|s| s.zoom = level);
        shared.action_log.record(ActionLogEntry::Zoom {
            direction,
            new_size: level.px(),
        });

        debug!(%direction, size = level.px(), "Zoom applied");
        true
    }

    pub fn zoom_level(&self) -> ZoomLevel {
        self.shared.read(|s| s.zoom)
    }

    // =========================================================================
    // Time
    // =========================================================================

    /// Thai long date computed at mount.
    pub fn current_date(&self) -> String {
        self.shared.read(|s| s.current_date.clone())
    }

    /// Coarse "now", refreshed by the clock tick.
    pub fn now(&self) -> DateTime<Local> {
        *self.shared.now.borrow()
    }

    /// Notified on every clock tick.
    pub fn subscribe_clock(&self) -> watch::Receiver<DateTime<Local>> {
        self.shared.now.subscribe()
    }

    // =========================================================================
    // Panels
    // =========================================================================

    pub fn panels(&self) -> PanelState {
        self.shared.read(|s| s.panels)
    }

    pub fn set_order_panel_open(&self, open: bool) {
        self.shared.write(|s| s.panels.is_order_panel_open = open);
    }

    pub fn toggle_order_panel(&self) -> bool {
        self.shared.write(|s| {
            s.panels.is_order_panel_open = !s.panels.is_order_panel_open;
            s.panels.is_order_panel_open
        })
    }

    pub fn toggle_category_panel(&self) -> bool {
        self.shared.write(|s| {
            s.panels.is_category_panel_collapsed = !s.panels.is_category_panel_collapsed;
            s.panels.is_category_panel_collapsed
        })
    }

    pub fn toggle_order_panel_collapsed(&self) -> bool {
        self.shared.write(|s| {
            s.panels.is_order_panel_collapsed = !s.panels.is_order_panel_collapsed;
            s.panels.is_order_panel_collapsed
        })
    }

    // =========================================================================
    // Search & Focus
    // =========================================================================

    pub fn search_query(&self) -> String {
        self.shared.read(|s| s.search_query.clone())
    }

    pub fn set_search_query(&self, query: impl Into<String>) {
        let query = query.into();
        self.shared.write(|s| s.search_query = query);
    }

    pub fn clear_search(&self) {
        self.shared.write(|s| s.search_query.clear());
    }

    pub fn focus(&self) -> Option<FocusState> {
        self.shared.read(|s| s.focus)
    }

    pub fn set_focus(&self, focus: Option<FocusState>) {
        self.shared.write(|s| s.focus = focus);
        trace!(?focus, "Focus moved");
    }

    // =========================================================================
    // Snapshot
    // =========================================================================

    pub fn snapshot(&self) -> ViewSnapshot {
        self.shared.read(|s| ViewSnapshot::from(s))
    }

    pub fn config(&self) -> &UiConfig {
        &self.shared.config
    }
}

impl Drop for ViewStateManager {
    fn drop(&mut self) {
        self.stop();
    }
}

impl std::fmt::Debug for ViewStateManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewStateManager")
            .field("state", &self.shared.read(|s| s.clone()))
            .field("started", &self.is_started())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::action_log::MemoryActionLog;
    use crate::host::HeadlessWindow;
    use crate::store::{MemoryStore, StoreAction, StoreData};

    struct Fixture {
        store: Arc<MemoryStore>,
        host: Arc<HeadlessWindow>,
        log: Arc<MemoryActionLog>,
        manager: ViewStateManager,
    }

    fn fixture(width: u32, data: StoreData) -> Fixture {
        let store = Arc::new(MemoryStore::new(data));
        let host = Arc::new(HeadlessWindow::new(width));
        let log = Arc::new(MemoryActionLog::new());
        let manager = ViewStateManager::new(
            store.clone(),
            host.clone(),
            log.clone(),
            Arc::new(UiConfig::default()),
        );
        Fixture {
            store,
            host,
            log,
            manager,
        }
    }

    fn admin() -> StoreData {
        StoreData {
            is_admin_mode: true,
            ..StoreData::default()
        }
    }

    #[test]
    fn test_collapse_flags_follow_mount_width() {
        for width in [360, 768, 992, 993, 1440] {
            let f = fixture(width, StoreData::default());
            let panels = f.manager.panels();
            assert_eq!(panels.is_category_panel_collapsed, width <= 992);
            assert_eq!(panels.is_order_panel_collapsed, width <= 992);
        }
    }

    #[test]
    fn test_zoom_in_clamps_at_max() {
        let f = fixture(1280, StoreData::default());
        let applied: Vec<bool> = (0..6).map(|_| f.manager.zoom_in()).collect();

        assert_eq!(applied, vec![true, true, true, true, false, false]);
        assert_eq!(f.manager.zoom_level().px(), 20);
        assert_eq!(f.host.root_font_size(), Some(20));
        assert_eq!(f.log.entries().len(), 4);
        assert_eq!(
            f.log.entries().last(),
            Some(&ActionLogEntry::Zoom {
                direction: ZoomDirection::In,
                new_size: 20
            })
        );
    }

    #[test]
    fn test_zoom_out_clamps_at_min() {
        let f = fixture(1280, StoreData::default());
        for _ in 0..6 {
            f.manager.zoom_out();
        }
        assert_eq!(f.manager.zoom_level().px(), 12);
        assert_eq!(f.host.root_font_size(), Some(12));
        assert_eq!(f.log.entries().len(), 4);
    }

    #[test]
    fn test_menu_item_editor_requires_admin() {
        let f = fixture(1280, StoreData::default());
        let outcome = f.manager.open_menu_item_editor(None, Some("Drinks"));
        assert_eq!(outcome, CommandOutcome::DeniedNoPermission);
        assert!(!f.manager.is_modal_open(ModalKind::MenuItemEdit));
        assert_eq!(f.manager.editing_target(), None);
    }

    #[test]
    fn test_menu_item_editor_category_wrapper() {
        let f = fixture(1280, admin());
        let outcome = f.manager.open_menu_item_editor(None, Some("Drinks"));
        assert_eq!(outcome, CommandOutcome::Applied);
        assert!(f.manager.is_modal_open(ModalKind::MenuItemEdit));
        assert_eq!(
            f.manager.editing_target(),
            Some(EditingItemTarget::NewInCategory {
                category: "Drinks".into()
            })
        );

        f.manager.close_menu_item_editor();
        assert!(!f.manager.is_modal_open(ModalKind::MenuItemEdit));
        assert_eq!(f.manager.editing_target(), None);
    }

    #[test]
    fn test_set_view_is_unconditional() {
        let f = fixture(1280, StoreData::default());
        f.manager.set_view(ViewState::AiDashboard);
        assert_eq!(f.manager.view(), ViewState::AiDashboard);
    }

    #[test]
    fn test_start_outside_runtime_fails() {
        let f = fixture(1280, StoreData::default());
        assert!(matches!(f.manager.start(), Err(UiError::NoRuntime(_))));
        assert_eq!(f.host.total_listeners(), 0);
    }

    #[tokio::test]
    async fn test_resize_overrides_manual_toggle() {
        let f = fixture(1280, StoreData::default());
        f.manager.start().unwrap();
        assert!(f.manager.panels().is_order_panel_open);

        f.manager.set_order_panel_open(false);
        f.manager.set_order_panel_open(true);
        assert!(f.manager.handle_resize(500));
        assert!(!f.manager.panels().is_order_panel_open);

        f.manager.set_order_panel_open(true);
        f.manager.handle_resize(600);
        assert!(!f.manager.panels().is_order_panel_open);

        f.manager.handle_resize(1024);
        assert!(f.manager.panels().is_order_panel_open);
    }

    #[tokio::test]
    async fn test_resize_does_not_touch_collapse_flags() {
        let f = fixture(1280, StoreData::default());
        f.manager.start().unwrap();
        f.manager.handle_resize(400);

        let panels = f.manager.panels();
        assert!(!panels.is_category_panel_collapsed);
        assert!(!panels.is_order_panel_collapsed);
    }

    #[tokio::test]
    async fn test_start_applies_width_and_default_theme() {
        let f = fixture(700, StoreData::default());
        f.manager.start().unwrap();
        assert!(!f.manager.panels().is_order_panel_open);
        assert_eq!(f.host.theme_class().as_deref(), Some("light"));
        assert_eq!(f.host.listener_count(ListenerKind::Resize), 1);
    }

    #[tokio::test]
    async fn test_start_twice_and_stop_releases() {
        let f = fixture(1280, StoreData::default());
        f.manager.start().unwrap();
        assert!(matches!(f.manager.start(), Err(UiError::AlreadyStarted(_))));

        f.manager.stop();
        assert!(!f.manager.is_started());
        assert_eq!(f.host.total_listeners(), 0);
        assert!(!f.manager.handle_resize(400));
        assert!(f.manager.panels().is_order_panel_open);

        f.manager.start().unwrap();
        assert_eq!(f.host.listener_count(ListenerKind::Resize), 1);
    }

    #[tokio::test]
    async fn test_drop_releases_listeners() {
        let f = fixture(1280, StoreData::default());
        f.manager.start().unwrap();
        let host = f.host.clone();
        drop(f);
        assert_eq!(host.total_listeners(), 0);
    }

    #[tokio::test]
    async fn test_theme_follows_store() {
        let f = fixture(1280, StoreData::default());
        f.manager.start().unwrap();

        f.store.dispatch(StoreAction::SetTheme { theme: Theme::Dark });
        f.manager.on_store_changed();
        assert_eq!(f.host.theme_class().as_deref(), Some("dark"));
        assert_eq!(f.manager.snapshot().theme_class.as_deref(), Some("dark"));
    }

    #[tokio::test]
    async fn test_store_watcher_applies_theme() {
        let f = fixture(1280, StoreData::default());
        f.manager.start().unwrap();

        f.store.dispatch(StoreAction::SetTheme {
            theme: Theme::Forest,
        });
        for _ in 0..10 {
            if f.host.theme_class().as_deref() == Some("forest") {
                break;
            }
            tokio::task::yield_now().await;
        }
        assert_eq!(f.host.theme_class().as_deref(), Some("forest"));
    }

    #[tokio::test]
    async fn test_leaving_admin_mode_exits_dashboard() {
        let f = fixture(1280, admin());
        f.manager.start().unwrap();
        f.manager.set_view(ViewState::AiDashboard);

        f.store.dispatch(StoreAction::ToggleAdminMode {
            reason: "test".into(),
        });
        f.manager.on_store_changed();
        assert_eq!(f.manager.view(), ViewState::Sales);
    }

    #[tokio::test(start_paused = true)]
    async fn test_clock_ticks_until_stopped() {
        let f = fixture(1280, StoreData::default());
        let mut ticks = f.manager.subscribe_clock();
        f.manager.start().unwrap();

        tokio::time::advance(Duration::from_secs(10)).await;
        tokio::time::timeout(Duration::from_millis(50), ticks.changed())
            .await
            .expect("clock should tick after 10 s")
            .unwrap();
        ticks.borrow_and_update();

        f.manager.stop();
        tokio::time::advance(Duration::from_secs(30)).await;
        tokio::task::yield_now().await;
        assert!(!ticks.has_changed().unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_tick_counts_from_start() {
        let f = fixture(1280, StoreData::default());
        let ticks = f.manager.subscribe_clock();
        f.manager.start().unwrap();

        // The clock task is first polled only after this jump.
        tokio::time::advance(Duration::from_secs(10)).await;
        for _ in 0..5 {
            tokio::task::yield_now().await;
        }
        assert!(ticks.has_changed().unwrap());
    }

    #[test]
    fn test_current_date_is_buddhist_era() {
        let f = fixture(1280, StoreData::default());
        let year = chrono::Datelike::year(&Local::now()) + 543;
        assert!(f.manager.current_date().ends_with(&year.to_string()));
    }
}
