//! # pos-view-core: Pure View-State Logic for the POS Terminal
//!
//! This crate holds every derivation of the terminal's view layer that can
//! be expressed without timers, listeners or a store: the types the screens
//! share, the category display ordering, zoom arithmetic, focus movement,
//! responsive panel rules and the header date format.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     POS Terminal View Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                Rendering layer (markup / styling)               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ view models (serde / ts-rs)            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │   pos-view-state: ViewStateManager, CategoryNavigation, TopNav  │   │
//! │  │   timers • listeners • store dispatch • dialogs                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ pos-view-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐          │   │
//! │  │   │  types   │ │ ordering │ │   zoom   │ │  focus   │          │   │
//! │  │   │ View,    │ │ favorites│ │ [12, 20] │ │ pane +   │          │   │
//! │  │   │ Theme .. │ │ pin/rank │ │ steps    │ │ index    │          │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────┘          │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO TIMERS • NO STORE • PURE FUNCTIONS               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - View, theme, modal, focus and editing types
//! - [`ordering`] - Category display order derivation and its cache
//! - [`zoom`] - Base font size domain
//! - [`layout`] - Responsive panel rules
//! - [`focus`] - Keyboard focus transitions
//! - [`icons`] - Category icon lookup
//! - [`date`] - Thai long date format
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use pos_view_core::ordering::derive_display_order;
//!
//! let categories = vec!["A".to_string(), "B".to_string(), "favorites".to_string(), "C".to_string()];
//! let pinned = vec!["B".to_string()];
//! let order = vec!["C".to_string(), "A".to_string()];
//!
//! let display = derive_display_order(&categories, &pinned, &order, "favorites");
//! assert_eq!(display, vec!["favorites", "B", "C", "A"]);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod date;
pub mod error;
pub mod focus;
pub mod icons;
pub mod layout;
pub mod ordering;
pub mod types;
pub mod zoom;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult};
pub use focus::{apply_nav_key, FocusMove, NavKey, PaneLengths};
pub use icons::{resolve_icon, CategoryIcon};
pub use layout::{Breakpoints, PanelState};
pub use ordering::{derive_display_order, DisplayOrderCache};
pub use types::*;
pub use zoom::{ZoomBounds, ZoomDirection, ZoomLevel};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Reserved name of the favorites pseudo-category.
///
/// Always shown first and never pinnable.
pub const FAVORITES_CATEGORY: &str = "favorites";

/// Viewport width (px) at or below which the order panel is closed.
pub const ORDER_PANEL_BREAKPOINT_PX: u32 = 768;

/// Viewport width (px) at or below which both side panels start collapsed.
pub const COLLAPSE_BREAKPOINT_PX: u32 = 992;

/// Smallest base font size (px).
pub const MIN_ZOOM_PX: u32 = 12;

/// Largest base font size (px).
pub const MAX_ZOOM_PX: u32 = 20;

/// Base font size at mount and when the host reports none (px).
pub const DEFAULT_ZOOM_PX: u32 = 16;

/// Interval of the coarse "now" clock.
pub const CLOCK_TICK_SECS: u64 = 10;

/// Duration of the cart-updated badge animation.
pub const CART_ANIMATION_MS: u64 = 800;
