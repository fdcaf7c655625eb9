//! # Session Composition
//!
//! The composition root: collects every collaborator, refuses to build
//! without them, and wires the three view components to one shared
//! [`ViewStateManager`].
//!
//! ```text
//! SessionBuilder::new(config)
//!     .with_store(..)        required
//!     .with_host(..)         required
//!     .with_confirmer(..)    required
//!     .with_prompter(..)     required
//!     .with_action_log(..)   optional, defaults to TracingActionLog
//!     .build()?  ──►  Session { manager, categories, top_nav }
//! ```

use std::sync::Arc;

use tracing::info;

use crate::action_log::{ActionLog, TracingActionLog};
use crate::categories::CategoryNavigation;
use crate::config::UiConfig;
use crate::dialog::{Confirmer, Prompter};
use crate::error::{UiError, UiResult};
use crate::host::HostWindow;
use crate::manager::ViewStateManager;
use crate::store::PosStore;
use crate::top_nav::TopNavigation;

/// Builder for a [`Session`].
pub struct SessionBuilder {
    config: UiConfig,
    store: Option<Arc<dyn PosStore>>,
    host: Option<Arc<dyn HostWindow>>,
    confirmer: Option<Arc<dyn Confirmer>>,
    prompter: Option<Arc<dyn Prompter>>,
    action_log: Option<Arc<dyn ActionLog>>,
}

impl SessionBuilder {
    pub fn new(config: UiConfig) -> Self {
        SessionBuilder {
            config,
            store: None,
            host: None,
            confirmer: None,
            prompter: None,
            action_log: None,
        }
    }

    pub fn with_store(mut self, store: Arc<dyn PosStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn with_host(mut self, host: Arc<dyn HostWindow>) -> Self {
        self.host = Some(host);
        self
    }

    pub fn with_confirmer(mut self, confirmer: Arc<dyn Confirmer>) -> Self {
        self.confirmer = Some(confirmer);
        self
    }

    pub fn with_prompter(mut self, prompter: Arc<dyn Prompter>) -> Self {
        self.prompter = Some(prompter);
        self
    }

    pub fn with_action_log(mut self, action_log: Arc<dyn ActionLog>) -> Self {
        self.action_log = Some(action_log);
        self
    }

    /// Validates the config and builds the session. Nothing is started.
    pub fn build(self) -> UiResult<Session> {
        self.config.validate()?;

        let store = self.store.ok_or(UiError::MissingCollaborator("store"))?;
        let host = self
            .host
            .ok_or(UiError::MissingCollaborator("host window"))?;
        let confirmer = self
            .confirmer
            .ok_or(UiError::MissingCollaborator("confirmer"))?;
        let prompter = self
            .prompter
            .ok_or(UiError::MissingCollaborator("prompter"))?;
        let action_log: Arc<dyn ActionLog> = match self.action_log {
            Some(log) => log,
            None => Arc::new(TracingActionLog),
        };

        let manager = Arc::new(ViewStateManager::new(
            Arc::clone(&store),
            Arc::clone(&host),
            action_log,
            Arc::new(self.config),
        ));

        let categories = CategoryNavigation::new(
            Arc::clone(&store),
            Arc::clone(&manager),
            confirmer,
            prompter,
        );
        let top_nav = TopNavigation::new(store, Arc::clone(&manager), host);

        info!(
            order_panel_open = manager.panels().is_order_panel_open,
            "View session built"
        );

        Ok(Session {
            manager,
            categories,
            top_nav,
        })
    }
}

/// A mounted terminal view: the state holder and the two components that
/// read and drive it.
pub struct Session {
    pub manager: Arc<ViewStateManager>,
    pub categories: CategoryNavigation,
    pub top_nav: TopNavigation,
}

impl Session {
    /// Starts every component. On failure nothing stays installed.
    pub fn start(&self) -> UiResult<()> {
        self.manager.start()?;
        if let Err(e) = self.top_nav.start() {
            self.manager.stop();
            return Err(e);
        }
        Ok(())
    }

    pub fn stop(&self) {
        self.top_nav.stop();
        self.manager.stop();
    }

    pub fn is_started(&self) -> bool {
        self.manager.is_started()
    }

    /// Host resize event.
    pub fn handle_resize(&self, width: u32) -> bool {
        self.manager.handle_resize(width)
    }

    /// Host pointer-down event.
    pub fn handle_pointer_down(&self, inside_theme_selector: bool) -> bool {
        self.top_nav.handle_pointer_down(inside_theme_selector)
    }

    /// Re-reads the store in every component. The watchers do this on their
    /// own while started.
    pub fn on_store_changed(&self) {
        self.manager.on_store_changed();
        self.top_nav.on_store_changed();
    }
}
