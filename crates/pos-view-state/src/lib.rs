//! # pos-view-state: Runtime View State for the POS Terminal
//!
//! Holds the terminal's ephemeral UI state and runs the effects that keep it
//! in step with the host window and the external store.
//!
//! ## Architecture Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         View Session                                    │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                 ViewStateManager (shared state holder)           │  │
//! │  │                                                                  │  │
//! │  │  Built once by SessionBuilder, shared through Arc                │  │
//! │  │  Resize listener • 10 s clock • theme effect • admin guard      │  │
//! │  └────────────────────────────┬─────────────────────────────────────┘  │
//! │                               │                                         │
//! │              ┌────────────────┴───────────────┐                         │
//! │              ▼                                ▼                         │
//! │  ┌──────────────────────────┐    ┌──────────────────────────────┐      │
//! │  │   CategoryNavigation     │    │       TopNavigation          │      │
//! │  │                          │    │                              │      │
//! │  │ Cached display order     │    │ View tabs • cart badge       │      │
//! │  │ Pin / add / delete       │    │ 800 ms animation • theme     │      │
//! │  │ Keyboard focus           │    │ dropdown • admin toggle      │      │
//! │  └──────────────────────────┘    └──────────────────────────────┘      │
//! │                                                                         │
//! │  COLLABORATORS (injected):                                             │
//! │  • PosStore     - selectors + single-action dispatch + revisions       │
//! │  • HostWindow   - width, root font size, theme class, listeners        │
//! │  • Confirmer    - async yes/no                                         │
//! │  • Prompter     - async free text                                      │
//! │  • ActionLog    - audited operator actions                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`session`] - `SessionBuilder` composition root and `Session`
//! - [`manager`] - `ViewStateManager` state holder and its effects
//! - [`categories`] - Category column controller
//! - [`top_nav`] - Header bar controller
//! - [`store`] - Store trait and in-memory store
//! - [`host`] - Host window trait and headless host
//! - [`dialog`] - Confirmation and prompt collaborators
//! - [`action_log`] - Action log sink
//! - [`config`] - UI configuration (TOML + environment)
//! - [`error`] - Error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use pos_view_state::{HeadlessWindow, MemoryStore, ScriptedDialogs, SessionBuilder, UiConfig};
//!
//! let dialogs = Arc::new(ScriptedDialogs::new());
//! let session = SessionBuilder::new(UiConfig::load_or_default(None))
//!     .with_store(Arc::new(MemoryStore::default()))
//!     .with_host(Arc::new(HeadlessWindow::new(1280)))
//!     .with_confirmer(dialogs.clone())
//!     .with_prompter(dialogs)
//!     .build()?;
//!
//! session.start()?;
//! session.manager.zoom_in();
//! let order = session.categories.display_order();
//! session.stop();
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod action_log;
pub mod categories;
pub mod config;
pub mod dialog;
pub mod error;
pub mod host;
pub mod manager;
pub mod session;
pub mod store;
pub mod top_nav;

// =============================================================================
// Re-exports
// =============================================================================

pub use action_log::{ActionLog, ActionLogEntry, MemoryActionLog, TracingActionLog};
pub use categories::{CategoryNavigation, CategoryRow};
pub use config::UiConfig;
pub use dialog::{ConfirmRequest, Confirmer, PromptRequest, Prompter, ScriptedDialogs};
pub use error::{ConfigError, ConfigResult, UiError, UiResult};
pub use host::{HeadlessWindow, HostWindow, ListenerId, ListenerKind, RowEvent};
pub use manager::{ViewSnapshot, ViewStateManager};
pub use session::{Session, SessionBuilder};
pub use store::{MemoryStore, PosStore, StoreAction, StoreData};
pub use top_nav::{AdminToggle, TopNavModel, TopNavigation, ViewTab};
