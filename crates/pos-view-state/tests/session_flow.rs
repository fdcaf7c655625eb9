//! End-to-end behavior of a view session driven through the in-memory store,
//! the headless host and scripted dialogs.

use std::sync::Arc;
use std::time::Duration;

use pos_view_core::{CommandOutcome, ShopSettings, Theme, ViewState, ZoomDirection};
use pos_view_state::{
    ActionLogEntry, HeadlessWindow, ListenerKind, MemoryActionLog, MemoryStore, PosStore,
    ScriptedDialogs, Session, SessionBuilder, StoreAction, StoreData, UiConfig, UiError,
};

struct Harness {
    store: Arc<MemoryStore>,
    host: Arc<HeadlessWindow>,
    dialogs: Arc<ScriptedDialogs>,
    log: Arc<MemoryActionLog>,
    session: Session,
}

fn harness(width: u32, data: StoreData) -> Harness {
    let store = Arc::new(MemoryStore::new(data));
    let host = Arc::new(HeadlessWindow::new(width));
    let dialogs = Arc::new(ScriptedDialogs::new());
    let log = Arc::new(MemoryActionLog::new());

    let session = SessionBuilder::new(UiConfig::default())
        .with_store(store.clone())
        .with_host(host.clone())
        .with_confirmer(dialogs.clone())
        .with_prompter(dialogs.clone())
        .with_action_log(log.clone())
        .build()
        .expect("complete builder");

    Harness {
        store,
        host,
        dialogs,
        log,
        session,
    }
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn admin() -> StoreData {
    StoreData {
        is_admin_mode: true,
        ..StoreData::default()
    }
}

async fn settle() {
    for _ in 0..5 {
        tokio::task::yield_now().await;
    }
}

#[test]
fn collapse_flags_at_mount_follow_width() {
    for width in [320, 800, 992, 993, 1920] {
        let h = harness(width, StoreData::default());
        let panels = h.session.manager.panels();
        let expected = width <= 992;
        assert_eq!(panels.is_category_panel_collapsed, expected, "width {width}");
        assert_eq!(panels.is_order_panel_collapsed, expected, "width {width}");
    }
}

#[test]
fn zoom_stops_at_both_ends() {
    let h = harness(1280, StoreData::default());
    let manager = &h.session.manager;

    for _ in 0..6 {
        manager.zoom_in();
    }
    assert_eq!(h.host.effective_font_size(), 20);

    for _ in 0..10 {
        manager.zoom_out();
    }
    assert_eq!(h.host.effective_font_size(), 12);

    let entries = h.log.entries();
    assert_eq!(entries.len(), 4 + 8);
    assert_eq!(
        entries.last(),
        Some(&ActionLogEntry::Zoom {
            direction: ZoomDirection::Out,
            new_size: 12
        })
    );
}

#[test]
fn display_order_reference_case() {
    let h = harness(
        1280,
        StoreData {
            categories: names(&["A", "B", "favorites", "C"]),
            pinned_categories: names(&["B"]),
            category_order: names(&["C", "A"]),
            ..StoreData::default()
        },
    );
    assert_eq!(
        h.session.categories.display_order(),
        names(&["favorites", "B", "C", "A"])
    );
}

#[tokio::test]
async fn add_category_blank_then_named() {
    let h = harness(1280, admin());
    h.dialogs.push_prompt(Some("   "));
    h.dialogs.push_prompt(Some("Drinks"));

    assert_eq!(
        h.session.categories.add_category().await,
        CommandOutcome::DeniedEmptyInput
    );
    assert!(h.store.dispatched().is_empty());

    assert_eq!(
        h.session.categories.add_category().await,
        CommandOutcome::Applied
    );
    assert_eq!(
        h.store.dispatched(),
        vec![StoreAction::AddCategory {
            name: "Drinks".into()
        }]
    );
    assert!(h.store.categories().contains(&"Drinks".to_string()));
}

#[tokio::test]
async fn delete_category_only_on_yes() {
    let h = harness(
        1280,
        StoreData {
            categories: names(&["favorites", "Drinks"]),
            is_admin_mode: true,
            ..StoreData::default()
        },
    );

    h.dialogs.push_confirm(false);
    assert_eq!(
        h.session.categories.delete_category("Drinks").await,
        CommandOutcome::Cancelled
    );
    assert!(h.store.dispatched().is_empty());

    h.dialogs.push_confirm(true);
    assert_eq!(
        h.session.categories.delete_category("Drinks").await,
        CommandOutcome::Applied
    );
    assert_eq!(h.store.categories(), names(&["favorites"]));
    assert!(h.dialogs.asked()[0].contains("Drinks"));
}

#[tokio::test(start_paused = true)]
async fn cart_badge_and_animation() {
    let h = harness(1280, StoreData::default());
    h.session.start().unwrap();
    let nav = &h.session.top_nav;

    assert_eq!(nav.cart_badge(), None);
    assert!(!nav.is_cart_animating());

    h.store.update(|d| d.total_items = 3);
    settle().await;
    assert_eq!(nav.cart_badge().as_deref(), Some("3"));
    assert!(nav.is_cart_animating());

    tokio::time::advance(Duration::from_millis(800)).await;
    settle().await;
    assert!(!nav.is_cart_animating());
    assert!(!nav.model().is_cart_animating);
}

#[tokio::test]
async fn resize_overrides_manual_open() {
    let h = harness(1280, StoreData::default());
    h.session.start().unwrap();

    h.session.manager.set_order_panel_open(true);
    h.host.set_width(500);
    assert!(h.session.handle_resize(500));
    assert!(!h.session.manager.panels().is_order_panel_open);
}

#[tokio::test(start_paused = true)]
async fn stop_releases_listeners_and_timers() {
    let h = harness(1280, StoreData::default());
    h.session.start().unwrap();
    assert_eq!(h.host.listener_count(ListenerKind::Resize), 1);
    assert_eq!(h.host.listener_count(ListenerKind::PointerDown), 1);

    let clock = h.session.manager.subscribe_clock();
    h.store.update(|d| d.total_items = 2);
    settle().await;
    assert!(h.session.top_nav.is_cart_animating());

    h.session.stop();
    assert_eq!(h.host.total_listeners(), 0);

    tokio::time::advance(Duration::from_secs(60)).await;
    settle().await;
    assert!(!clock.has_changed().unwrap());
    assert!(h.session.top_nav.is_cart_animating());

    assert!(!h.session.handle_resize(400));
    assert!(!h.session.handle_pointer_down(false));
}

#[tokio::test(start_paused = true)]
async fn clock_ticks_every_ten_seconds() {
    let h = harness(1280, StoreData::default());
    let clock = h.session.manager.subscribe_clock();
    h.session.start().unwrap();

    tokio::time::advance(Duration::from_secs(9)).await;
    settle().await;
    assert!(!clock.has_changed().unwrap());

    tokio::time::advance(Duration::from_secs(1)).await;
    settle().await;
    assert!(clock.has_changed().unwrap());
}

#[tokio::test]
async fn theme_class_follows_store() {
    let h = harness(
        1280,
        StoreData {
            shop_settings: ShopSettings {
                theme: Some(Theme::Ocean),
                is_keyboard_nav_enabled: false,
            },
            ..StoreData::default()
        },
    );
    assert_eq!(h.host.theme_class(), None);

    h.session.start().unwrap();
    assert_eq!(h.host.theme_class().as_deref(), Some("ocean"));

    h.session.top_nav.select_theme(Theme::HighContrast);
    settle().await;
    assert_eq!(h.host.theme_class().as_deref(), Some("high-contrast"));
}

#[tokio::test]
async fn leaving_admin_mode_returns_to_sales() {
    let h = harness(1280, admin());
    h.session.start().unwrap();
    assert!(h.session.top_nav.switch_view(ViewState::AiDashboard));

    h.store.update(|d| d.is_admin_mode = false);
    settle().await;
    assert_eq!(h.session.manager.view(), ViewState::Sales);
}

#[test]
fn builder_requires_prompter() {
    let dialogs = Arc::new(ScriptedDialogs::new());
    let result = SessionBuilder::new(UiConfig::default())
        .with_store(Arc::new(MemoryStore::default()))
        .with_host(Arc::new(HeadlessWindow::new(1024)))
        .with_confirmer(dialogs)
        .build();

    assert!(matches!(
        result.err(),
        Some(UiError::MissingCollaborator("prompter"))
    ));
}

#[test]
fn snapshot_serializes_camel_case() {
    let h = harness(700, StoreData::default());
    h.session.manager.set_search_query("tea");

    let json = serde_json::to_value(h.session.manager.snapshot()).unwrap();
    assert_eq!(json["view"], "sales");
    assert_eq!(json["searchQuery"], "tea");
    assert_eq!(json["zoomPx"], 16);
    assert_eq!(json["panels"]["isOrderPanelOpen"], false);
    assert_eq!(json["modals"]["adminLogin"], false);
}
