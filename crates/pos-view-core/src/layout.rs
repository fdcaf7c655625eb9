//! # Responsive Layout
//!
//! Panel visibility rules driven by viewport width.
//!
//! ## Breakpoints
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Panel Visibility Rules                             │
//! │                                                                         │
//! │  width:   0 ──────────── 768 ──────────── 992 ──────────────► ∞         │
//! │                                                                         │
//! │  isOrderPanelOpen          closed │ open                               │
//! │  (every resize, overrides manual toggles)                              │
//! │                                                                         │
//! │  isCategoryPanelCollapsed  collapsed         │ expanded                │
//! │  isOrderPanelCollapsed     collapsed         │ expanded                │
//! │  (once at mount, afterwards only explicit toggles)                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::{COLLAPSE_BREAKPOINT_PX, ORDER_PANEL_BREAKPOINT_PX};

/// Width thresholds (inclusive upper bound of the "narrow" side).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoints {
    /// At or below this width the order panel is closed.
    pub order_panel_px: u32,

    /// At or below this width both side panels start collapsed.
    pub collapse_px: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Breakpoints {
            order_panel_px: ORDER_PANEL_BREAKPOINT_PX,
            collapse_px: COLLAPSE_BREAKPOINT_PX,
        }
    }
}

impl Breakpoints {
    /// Order panel visibility for a viewport width.
    pub fn order_panel_open(&self, width: u32) -> bool {
        width > self.order_panel_px
    }

    /// Initial collapse state for a viewport width.
    pub fn starts_collapsed(&self, width: u32) -> bool {
        width <= self.collapse_px
    }
}

/// Visibility of the side panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PanelState {
    pub is_order_panel_open: bool,
    pub is_category_panel_collapsed: bool,
    pub is_order_panel_collapsed: bool,
}

impl PanelState {
    /// Panel state at mount for the initial viewport width.
    pub fn at_mount(width: u32, breakpoints: &Breakpoints) -> Self {
        let collapsed = breakpoints.starts_collapsed(width);
        PanelState {
            is_order_panel_open: breakpoints.order_panel_open(width),
            is_category_panel_collapsed: collapsed,
            is_order_panel_collapsed: collapsed,
        }
    }

    /// Applies a resize. Only the order panel's open flag follows the width.
    pub fn on_resize(&mut self, width: u32, breakpoints: &Breakpoints) {
        self.is_order_panel_open = breakpoints.order_panel_open(width);
    }
}
