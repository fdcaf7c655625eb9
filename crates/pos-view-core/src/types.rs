//! # Domain Types
//!
//! Core view-state types shared by every screen of the terminal.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         View-State Types                                │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   ViewState     │   │     Theme       │   │   ModalKind     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Sales          │   │  Light (dflt)   │   │  Payment        │       │
//! │  │  Orders         │   │  Dark           │   │  Receipt        │       │
//! │  │  Reports        │   │  Ocean          │   │  AdminLogin     │       │
//! │  │  Settings       │   │  Forest         │   │  MenuItemEdit   │       │
//! │  │  AiDashboard ★  │   │  Sunset         │   │  StartShift     │       │
//! │  └─────────────────┘   │  HighContrast   │   │  EndShift       │       │
//! │   ★ admin only         └─────────────────┘   │  PaidInOut      │       │
//! │                                               └─────────────────┘       │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   FocusState    │   │EditingItemTarget│   │ CommandOutcome  │       │
//! │  │  pane + index   │   │ item | category │   │ Applied/Denied  │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything here derives `TS` so the rendering layer sees the same shapes.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

// =============================================================================
// View State
// =============================================================================

/// The top-level screen currently shown. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum ViewState {
    /// Selling screen (menu grid + order panel).
    #[default]
    Sales,
    /// Open and completed orders.
    Orders,
    /// Sales reports.
    Reports,
    /// Shop settings.
    Settings,
    /// Analytics dashboard, only reachable in admin mode.
    AiDashboard,
}

impl ViewState {
    /// All views in tab order.
    pub const ALL: [ViewState; 5] = [
        ViewState::Sales,
        ViewState::Orders,
        ViewState::Reports,
        ViewState::Settings,
        ViewState::AiDashboard,
    ];

    /// Returns true if the view may only be shown while admin mode is on.
    pub const fn requires_admin(&self) -> bool {
        matches!(self, ViewState::AiDashboard)
    }

    /// Stable identifier, identical to the serialized form.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ViewState::Sales => "sales",
            ViewState::Orders => "orders",
            ViewState::Reports => "reports",
            ViewState::Settings => "settings",
            ViewState::AiDashboard => "ai-dashboard",
        }
    }
}

impl std::fmt::Display for ViewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ViewState {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sales" => Ok(ViewState::Sales),
            "orders" => Ok(ViewState::Orders),
            "reports" => Ok(ViewState::Reports),
            "settings" => Ok(ViewState::Settings),
            "ai-dashboard" | "ai_dashboard" | "dashboard" => Ok(ViewState::AiDashboard),
            other => Err(CoreError::UnknownView(other.to_string())),
        }
    }
}

// =============================================================================
// Theme
// =============================================================================

/// One of the six fixed themes. The identifier doubles as the global
/// style-scope class applied to the document root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Ocean,
    Forest,
    Sunset,
    HighContrast,
}

impl Theme {
    /// All themes in selector order.
    pub const ALL: [Theme; 6] = [
        Theme::Light,
        Theme::Dark,
        Theme::Ocean,
        Theme::Forest,
        Theme::Sunset,
        Theme::HighContrast,
    ];

    /// Theme identifier, also used as the style-scope class name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Ocean => "ocean",
            Theme::Forest => "forest",
            Theme::Sunset => "sunset",
            Theme::HighContrast => "high-contrast",
        }
    }

    /// Resolves the class to apply for a possibly-unset store value.
    pub fn class_for(theme: Option<Theme>, fallback: Theme) -> &'static str {
        theme.unwrap_or(fallback).as_str()
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Theme {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        Theme::ALL
            .into_iter()
            .find(|t| t.as_str() == normalized)
            .ok_or(CoreError::UnknownTheme(normalized))
    }
}

// =============================================================================
// Modals
// =============================================================================

/// Identifies one modal dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum ModalKind {
    Payment,
    Receipt,
    AdminLogin,
    MenuItemEdit,
    StartShift,
    EndShift,
    PaidInOut,
}

impl ModalKind {
    pub const ALL: [ModalKind; 7] = [
        ModalKind::Payment,
        ModalKind::Receipt,
        ModalKind::AdminLogin,
        ModalKind::MenuItemEdit,
        ModalKind::StartShift,
        ModalKind::EndShift,
        ModalKind::PaidInOut,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            ModalKind::Payment => "payment",
            ModalKind::Receipt => "receipt",
            ModalKind::AdminLogin => "admin-login",
            ModalKind::MenuItemEdit => "menu-item-edit",
            ModalKind::StartShift => "start-shift",
            ModalKind::EndShift => "end-shift",
            ModalKind::PaidInOut => "paid-in-out",
        }
    }
}

impl std::fmt::Display for ModalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ModalKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        ModalKind::ALL
            .into_iter()
            .find(|m| m.as_str() == normalized)
            .ok_or(CoreError::UnknownModal(normalized))
    }
}

/// Visibility of every modal. Flags are independent: opening one never
/// closes another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ModalFlags {
    pub payment: bool,
    pub receipt: bool,
    pub admin_login: bool,
    pub menu_item_edit: bool,
    pub start_shift: bool,
    pub end_shift: bool,
    pub paid_in_out: bool,
}

impl ModalFlags {
    /// Returns whether the given modal is open.
    pub fn is_open(&self, kind: ModalKind) -> bool {
        match kind {
            ModalKind::Payment => self.payment,
            ModalKind::Receipt => self.receipt,
            ModalKind::AdminLogin => self.admin_login,
            ModalKind::MenuItemEdit => self.menu_item_edit,
            ModalKind::StartShift => self.start_shift,
            ModalKind::EndShift => self.end_shift,
            ModalKind::PaidInOut => self.paid_in_out,
        }
    }

    /// Sets one flag, leaving all others untouched.
    pub fn set(&mut self, kind: ModalKind, open: bool) {
        let flag = match kind {
            ModalKind::Payment => &mut self.payment,
            ModalKind::Receipt => &mut self.receipt,
            ModalKind::AdminLogin => &mut self.admin_login,
            ModalKind::MenuItemEdit => &mut self.menu_item_edit,
            ModalKind::StartShift => &mut self.start_shift,
            ModalKind::EndShift => &mut self.end_shift,
            ModalKind::PaidInOut => &mut self.paid_in_out,
        };
        *flag = open;
    }

    /// Modals currently open, in declaration order.
    pub fn open_modals(&self) -> Vec<ModalKind> {
        ModalKind::ALL
            .into_iter()
            .filter(|k| self.is_open(*k))
            .collect()
    }
}

// =============================================================================
// Menu Item Editing
// =============================================================================

/// A menu item as held by the external store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MenuItem {
    /// Store identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Price in satang (smallest currency unit).
    pub price_cents: i64,

    /// Category the item is listed under.
    pub category: String,
}

/// What the menu-item editor is editing.
///
/// `NewInCategory` is used when the operator creates a fresh item from
/// inside a category; the name may be empty when no category was given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "camelCase")]
#[ts(export)]
pub enum EditingItemTarget {
    Existing { item: MenuItem },
    NewInCategory { category: String },
}

impl EditingItemTarget {
    /// Builds the target from the editor's call arguments.
    pub fn from_request(item: Option<MenuItem>, category: Option<&str>) -> Self {
        match item {
            Some(item) => EditingItemTarget::Existing { item },
            None => EditingItemTarget::NewInCategory {
                category: category.unwrap_or_default().to_string(),
            },
        }
    }

    /// Category the edited item belongs to.
    pub fn category(&self) -> &str {
        match self {
            EditingItemTarget::Existing { item } => &item.category,
            EditingItemTarget::NewInCategory { category } => category,
        }
    }
}

// =============================================================================
// Keyboard Focus
// =============================================================================

/// Keyboard-navigable pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum Pane {
    Categories,
    Menu,
}

/// The single focus position of the whole terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FocusState {
    pub pane: Pane,
    pub index: usize,
}

impl FocusState {
    pub const fn new(pane: Pane, index: usize) -> Self {
        FocusState { pane, index }
    }
}

// =============================================================================
// Shop Settings (store-owned)
// =============================================================================

/// The subset of shop settings this layer reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ShopSettings {
    /// Selected theme; `None` means "never chosen".
    pub theme: Option<Theme>,

    /// Whether category/menu panes take keyboard focus.
    pub is_keyboard_nav_enabled: bool,
}

// =============================================================================
// Command Outcome
// =============================================================================

/// Result of an operator command.
///
/// Gated commands never fail loudly; they report what happened so the
/// caller (and tests) can observe refusals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum CommandOutcome {
    /// The command was carried out.
    Applied,

    /// Admin mode is off.
    DeniedNoPermission,

    /// The operator supplied a blank value.
    DeniedEmptyInput,

    /// The operator dismissed the prompt or declined the confirmation.
    Cancelled,

    /// The target cannot take this command (e.g. pinning favorites).
    NotEligible,
}

impl CommandOutcome {
    pub const fn is_applied(&self) -> bool {
        matches!(self, CommandOutcome::Applied)
    }
}
