//! # Host Window
//!
//! The rendering host the view layer runs inside: viewport width, the
//! document root's font size and style-scope class, and registration of
//! global listeners.
//!
//! ## Listener Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Listener Lifecycle                               │
//! │                                                                         │
//! │  start()                                       stop()                   │
//! │    │                                             │                      │
//! │    ├── add_listener(Resize) ──► ListenerId ──────┼──► remove_listener   │
//! │    └── add_listener(PointerDown) ──► ListenerId ─┴──► remove_listener   │
//! │                                                                         │
//! │  Events are delivered by the host calling handle_resize /               │
//! │  handle_pointer_down. A component ignores events it is not              │
//! │  registered for.                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use pos_view_core::DEFAULT_ZOOM_PX;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// Global event a component can listen to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ListenerKind {
    /// Viewport resize.
    Resize,
    /// Pointer pressed anywhere in the document.
    PointerDown,
}

/// Handle returned by [`HostWindow::add_listener`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListenerId(Uuid);

impl ListenerId {
    pub fn new() -> Self {
        ListenerId(Uuid::new_v4())
    }
}

impl Default for ListenerId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ListenerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rendering host.
pub trait HostWindow: Send + Sync {
    /// Current viewport width in CSS pixels.
    fn inner_width(&self) -> u32;

    /// Root font size, `None` when never set.
    fn root_font_size(&self) -> Option<u32>;

    fn set_root_font_size(&self, px: u32);

    /// Replaces the single global style-scope class.
    fn set_theme_class(&self, class: &str);

    fn add_listener(&self, kind: ListenerKind) -> ListenerId;

    fn remove_listener(&self, id: ListenerId);
}

// =============================================================================
// Row Events
// =============================================================================

/// A click on a list row, carrying the propagation flag the row's own
/// selection handler checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowEvent {
    propagation_stopped: bool,
}

impl RowEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

// =============================================================================
// Headless Window
// =============================================================================

#[derive(Debug, Default)]
struct HeadlessState {
    width: u32,
    font_size: Option<u32>,
    theme_class: Option<String>,
    listeners: HashMap<ListenerId, ListenerKind>,
}

/// Host without a renderer. Used by the terminal app and by tests to
/// observe what the view layer applied.
#[derive(Debug, Default)]
pub struct HeadlessWindow {
    state: RwLock<HeadlessState>,
}

impl HeadlessWindow {
    pub fn new(width: u32) -> Self {
        HeadlessWindow {
            state: RwLock::new(HeadlessState {
                width,
                ..HeadlessState::default()
            }),
        }
    }

    /// Changes the reported width. The caller forwards the resize event.
    pub fn set_width(&self, width: u32) {
        self.write(|s| s.width = width);
    }

    pub fn theme_class(&self) -> Option<String> {
        self.read(|s| s.theme_class.clone())
    }

    /// Font size as a renderer would compute it.
    pub fn effective_font_size(&self) -> u32 {
        self.read(|s| s.font_size.unwrap_or(DEFAULT_ZOOM_PX))
    }

    pub fn listener_count(&self, kind: ListenerKind) -> usize {
        self.read(|s| s.listeners.values().filter(|k| **k == kind).count())
    }

    pub fn total_listeners(&self) -> usize {
        self.read(|s| s.listeners.len())
    }

    fn read<R>(&self, f: impl FnOnce(&HeadlessState) -> R) -> R {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        f(&state)
    }

    fn write<R>(&self, f: impl FnOnce(&mut HeadlessState) -> R) -> R {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut state)
    }
}

impl HostWindow for HeadlessWindow {
    fn inner_width(&self) -> u32 {
        self.read(|s| s.width)
    }

    fn root_font_size(&self) -> Option<u32> {
        self.read(|s| s.font_size)
    }

    fn set_root_font_size(&self, px: u32) {
        self.write(|s| s.font_size = Some(px));
    }

    fn set_theme_class(&self, class: &str) {
        debug!(class, "Applying theme class");
        self.write(|s| s.theme_class = Some(class.to_string()));
    }

    fn add_listener(&self, kind: ListenerKind) -> ListenerId {
        let id = ListenerId::new();
        self.write(|s| s.listeners.insert(id, kind));
        id
    }

    fn remove_listener(&self, id: ListenerId) {
        self.write(|s| s.listeners.remove(&id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listener_registration() {
        let host = HeadlessWindow::new(1024);
        let resize = host.add_listener(ListenerKind::Resize);
        host.add_listener(ListenerKind::PointerDown);
        assert_eq!(host.listener_count(ListenerKind::Resize), 1);
        assert_eq!(host.total_listeners(), 2);

        host.remove_listener(resize);
        assert_eq!(host.listener_count(ListenerKind::Resize), 0);
        assert_eq!(host.total_listeners(), 1);
    }

    #[test]
    fn test_font_size_defaults() {
        let host = HeadlessWindow::new(1024);
        assert_eq!(host.root_font_size(), None);
        assert_eq!(host.effective_font_size(), 16);
        host.set_root_font_size(18);
        assert_eq!(host.root_font_size(), Some(18));
    }

    #[test]
    fn test_row_event_propagation() {
        let mut event = RowEvent::new();
        assert!(!event.is_propagation_stopped());
        event.stop_propagation();
        assert!(event.is_propagation_stopped());
    }
}
