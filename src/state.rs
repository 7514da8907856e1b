use std::sync::Arc;
use std::time::Duration;

use crate::app_config::Config;
use crate::app_controller::Controller;
use crate::session::SessionManager;

/// Shared state handed to every request handler
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub controller: Arc<Controller>,
    pub sessions: Arc<SessionManager>,
}

impl AppState {
    /// Build the state for the configured provider
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let controller = Arc::new(Controller::with_config(config.clone())?);
        Ok(Self::with_controller(controller, config))
    }

    /// Build the state around an existing controller
    ///
    /// Used by tests to run the pipeline against a substitute translator.
    pub fn with_controller(controller: Arc<Controller>, config: Config) -> Self {
        let sessions = Arc::new(SessionManager::new(Duration::from_secs(
            config.server.session_ttl_secs,
        )));

        Self {
            config,
            controller,
            sessions,
        }
    }
}
