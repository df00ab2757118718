//! The dashboard controller.
//!
//! [`App`] owns the [`DashboardState`] and runs the [`Command`]s its
//! transitions produce: fetches and exports are spawned as tokio tasks that
//! report back over an unbounded channel as [`AppMessage`]s.

mod handlers;
mod messages;

pub use handlers::run_headless_export;
pub use messages::AppMessage;

use std::path::PathBuf;
use std::sync::Arc;

use chrono::Local;
use tokio::sync::mpsc;

use crate::adapters::ReqwestHttpClient;
use crate::config::DashboardConfig;
use crate::gateway::DashboardGateway;
use crate::input::ActionRegistry;
use crate::state::{Command, DashboardState, Event};
use crate::traits::{HttpClient, HttpError};

/// Main application state
pub struct App<C: HttpClient + 'static = ReqwestHttpClient> {
    /// The view-state store
    pub state: DashboardState,
    gateway: Arc<DashboardGateway<C>>,
    registry: ActionRegistry,
    export_dir: PathBuf,
    /// Sender handed to background tasks
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Redraw on the next loop iteration
    pub needs_redraw: bool,
}

impl App<ReqwestHttpClient> {
    /// Build the app against the configured API using reqwest.
    pub fn from_config(config: &DashboardConfig) -> Result<Self, HttpError> {
        let client = match config.request_timeout {
            Some(timeout) => ReqwestHttpClient::with_timeout(timeout)?,
            None => ReqwestHttpClient::new(),
        };
        Ok(Self::new(
            DashboardGateway::new(config.api_base_url.clone(), client),
            config,
        ))
    }
}

impl<C: HttpClient + 'static> App<C> {
    pub fn new(gateway: DashboardGateway<C>, config: &DashboardConfig) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            state: DashboardState::new(Local::now())
                .with_aggregate_policy(config.aggregate_policy),
            gateway: Arc::new(gateway),
            registry: ActionRegistry::new(),
            export_dir: config.export_dir.clone(),
            message_tx,
            message_rx: Some(message_rx),
            needs_redraw: true,
        }
    }

    pub fn gateway(&self) -> &DashboardGateway<C> {
        &self.gateway
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Feed one event through the store and run its commands.
    pub fn send(&mut self, event: Event) {
        let commands = self.state.apply(event);
        self.mark_dirty();
        for command in commands {
            self.dispatch(command);
        }
    }

    /// Initial load.
    pub fn mount(&mut self) {
        self.send(Event::Mount);
    }

    /// Clock timer fired.
    pub fn tick_clock(&mut self) {
        self.send(Event::ClockTick { now: Local::now() });
    }

    /// Refresh timer fired, or the user asked for one.
    pub fn refresh(&mut self) {
        self.send(Event::Refresh { now: Local::now() });
    }

    fn dispatch(&self, command: Command) {
        match command {
            Command::FetchResearchers { seq } => self.spawn_fetch_researchers(seq),
            Command::FetchStats { seq } => self.spawn_fetch_stats(seq),
            Command::ExportCsv { records } => self.spawn_export(records),
        }
    }
}
