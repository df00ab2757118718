//! Input, message and command handling for the App.

use std::path::Path;

use chrono::Local;
use crossterm::event::KeyEvent;

use super::{App, AppMessage};
use crate::export;
use crate::gateway::DashboardGateway;
use crate::models::Researcher;
use crate::state::ExportSummary;
use crate::traits::HttpClient;

impl<C: HttpClient + 'static> App<C> {
    /// Translate a key press and apply it.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(action) = self.registry.dispatch(key, self.state.searching) {
            tracing::debug!(?action, "key action");
            self.send(action.into_event(Local::now()));
        }
    }

    /// Handle a result sent back by a background task.
    pub fn handle_message(&mut self, msg: AppMessage) {
        match &msg {
            AppMessage::ResearchersFetched {
                seq,
                result: Err(e),
            } => {
                tracing::warn!(seq, error = %e, logical = e.is_logical(), "researchers fetch failed");
            }
            AppMessage::StatsFetched {
                seq,
                result: Err(e),
            } => {
                tracing::warn!(seq, error = %e, logical = e.is_logical(), "stats fetch failed");
            }
            AppMessage::ExportFinished(Err(e)) => {
                tracing::warn!(error = %e, "csv export failed");
            }
            _ => {}
        }
        self.send(msg.into());
    }

    pub(super) fn spawn_fetch_researchers(&self, seq: u64) {
        let gateway = self.gateway.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = gateway.fetch_researchers().await;
            let _ = tx.send(AppMessage::ResearchersFetched { seq, result });
        });
    }

    pub(super) fn spawn_fetch_stats(&self, seq: u64) {
        let gateway = self.gateway.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = gateway.fetch_dashboard_stats().await;
            let _ = tx.send(AppMessage::StatsFetched { seq, result });
        });
    }

    pub(super) fn spawn_export(&self, records: Vec<Researcher>) {
        let dir = self.export_dir.clone();
        let tx = self.message_tx.clone();
        tokio::task::spawn_blocking(move || {
            let result = export::write_csv(&records, &dir)
                .map(|path| ExportSummary {
                    path,
                    rows: records.len(),
                })
                .map_err(|e| e.to_string());
            let _ = tx.send(AppMessage::ExportFinished(result));
        });
    }
}

/// Fetch the roster once and write the unfiltered CSV into `dir`.
pub async fn run_headless_export<C: HttpClient>(
    gateway: &DashboardGateway<C>,
    dir: &Path,
) -> color_eyre::Result<ExportSummary> {
    let researchers = gateway.fetch_researchers().await?;
    let path = export::write_csv(&researchers, dir)?;
    Ok(ExportSummary {
        path,
        rows: researchers.len(),
    })
}
