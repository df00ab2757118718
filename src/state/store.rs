//! The view-state store.
//!
//! [`DashboardState`] owns everything the screen shows. Input, timers and
//! fetch results arrive as [`Event`]s; [`DashboardState::update`] applies one
//! and returns the side effects to run as [`Command`]s. Nothing in here
//! touches the network, the filesystem or the clock.

use std::path::PathBuf;

use chrono::{DateTime, Local};

use super::Page;
use crate::filter::ResearcherFilter;
use crate::gateway::GatewayError;
use crate::metrics::{AggregatePolicy, DerivedStats};
use crate::models::{DashboardStats, Researcher};

/// Rows moved by PageUp/PageDown.
pub const PAGE_SCROLL: usize = 10;

/// Request sequence token.
pub type Seq = u64;

/// Issued/applied counters for one kind of fetch.
///
/// Only the most recently issued request may change the store; anything
/// older that comes back later is dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestSeq {
    issued: Seq,
    applied: Seq,
}

impl RequestSeq {
    /// Allocate the next token.
    pub fn issue(&mut self) -> Seq {
        self.issued += 1;
        self.issued
    }

    /// Record `seq` as applied if it is the latest issued token.
    pub fn accept(&mut self, seq: Seq) -> bool {
        if seq == self.issued {
            self.applied = seq;
            true
        } else {
            false
        }
    }

    pub fn issued(&self) -> Seq {
        self.issued
    }

    pub fn applied(&self) -> Seq {
        self.applied
    }

    /// The latest issued request has not come back yet.
    pub fn pending(&self) -> bool {
        self.issued != self.applied
    }
}

/// Outcome of a finished CSV export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub rows: usize,
}

/// Everything that can change the store.
#[derive(Debug)]
pub enum Event {
    /// First render; loads both datasets
    Mount,
    SelectPage(Page),
    NextPage,
    PrevPage,
    /// Manual refresh at `now`
    Refresh { now: DateTime<Local> },
    ResearchersLoaded {
        seq: Seq,
        result: Result<Vec<Researcher>, GatewayError>,
    },
    StatsLoaded {
        seq: Seq,
        result: Result<DashboardStats, GatewayError>,
    },
    /// Clock timer fired
    ClockTick { now: DateTime<Local> },
    StartSearch,
    SearchInput(char),
    SearchBackspace,
    EndSearch,
    CycleModeFilter,
    CycleStatusFilter,
    ToggleSidebar,
    ToggleDarkMode,
    ScrollDown(usize),
    ScrollUp(usize),
    /// Export the filtered view
    Export,
    ExportFinished(Result<ExportSummary, String>),
    Quit,
}

/// Side effects requested by a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    FetchResearchers { seq: Seq },
    FetchStats { seq: Seq },
    ExportCsv { records: Vec<Researcher> },
}

/// Result of [`DashboardState::update`].
#[derive(Debug)]
pub struct Transition {
    pub state: DashboardState,
    pub commands: Vec<Command>,
}

/// All UI-visible state.
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub page: Page,
    pub filter: ResearcherFilter,
    pub last_updated: DateTime<Local>,
    /// True until the latest researchers request settles
    pub loading: bool,
    pub dark_mode: bool,
    pub sidebar_open: bool,
    /// Keystrokes go to the search box
    pub searching: bool,
    /// First visible row of the page's table
    pub scroll: usize,
    /// One-line status message, e.g. an export result
    pub notice: Option<String>,
    pub researchers: Vec<Researcher>,
    /// Last good stats snapshot
    pub stats: Option<DashboardStats>,
    pub aggregate_policy: AggregatePolicy,
    pub should_quit: bool,
    researchers_seq: RequestSeq,
    stats_seq: RequestSeq,
}

impl DashboardState {
    pub fn new(now: DateTime<Local>) -> Self {
        Self {
            page: Page::default(),
            filter: ResearcherFilter::default(),
            last_updated: now,
            loading: true,
            dark_mode: false,
            sidebar_open: true,
            searching: false,
            scroll: 0,
            notice: None,
            researchers: Vec::new(),
            stats: None,
            aggregate_policy: AggregatePolicy::default(),
            should_quit: false,
            researchers_seq: RequestSeq::default(),
            stats_seq: RequestSeq::default(),
        }
    }

    pub fn with_aggregate_policy(mut self, policy: AggregatePolicy) -> Self {
        self.aggregate_policy = policy;
        self
    }

    /// Apply one event, returning the new state and its side effects.
    pub fn update(mut self, event: Event) -> Transition {
        let commands = self.apply(event);
        Transition {
            state: self,
            commands,
        }
    }

    /// In-place form of [`DashboardState::update`].
    pub fn apply(&mut self, event: Event) -> Vec<Command> {
        match event {
            Event::Mount => self.fetch_all(),
            Event::SelectPage(page) => self.select_page(page),
            Event::NextPage => self.select_page(self.page.next()),
            Event::PrevPage => self.select_page(self.page.prev()),
            Event::Refresh { now } => {
                tracing::info!("manual refresh");
                self.loading = true;
                self.last_updated = now;
                self.fetch_all()
            }
            Event::ResearchersLoaded { seq, result } => {
                self.researchers_loaded(seq, result);
                Vec::new()
            }
            Event::StatsLoaded { seq, result } => {
                self.stats_loaded(seq, result);
                Vec::new()
            }
            Event::ClockTick { now } => {
                self.last_updated = now;
                Vec::new()
            }
            Event::StartSearch => {
                self.searching = true;
                Vec::new()
            }
            Event::SearchInput(c) => {
                self.filter.search.push(c);
                self.scroll = 0;
                Vec::new()
            }
            Event::SearchBackspace => {
                if self.filter.search.pop().is_some() {
                    self.scroll = 0;
                }
                Vec::new()
            }
            Event::EndSearch => {
                self.searching = false;
                Vec::new()
            }
            Event::CycleModeFilter => {
                self.filter.mode = self.filter.mode.next();
                self.scroll = 0;
                Vec::new()
            }
            Event::CycleStatusFilter => {
                self.filter.status = self.filter.status.next();
                self.scroll = 0;
                Vec::new()
            }
            Event::ToggleSidebar => {
                self.sidebar_open = !self.sidebar_open;
                Vec::new()
            }
            Event::ToggleDarkMode => {
                self.dark_mode = !self.dark_mode;
                Vec::new()
            }
            Event::ScrollDown(n) => {
                self.scroll = self.scroll.saturating_add(n);
                self.clamp_scroll();
                Vec::new()
            }
            Event::ScrollUp(n) => {
                self.scroll = self.scroll.saturating_sub(n);
                Vec::new()
            }
            Event::Export => {
                let records: Vec<Researcher> = self.filtered().into_iter().cloned().collect();
                vec![Command::ExportCsv { records }]
            }
            Event::ExportFinished(result) => {
                self.notice = Some(match result {
                    Ok(summary) => format!(
                        "Exported {} rows to {}",
                        summary.rows,
                        summary.path.display()
                    ),
                    Err(e) => format!("Export failed: {}", e),
                });
                Vec::new()
            }
            Event::Quit => {
                self.should_quit = true;
                Vec::new()
            }
        }
    }

    fn select_page(&mut self, page: Page) -> Vec<Command> {
        tracing::debug!(from = %self.page, to = %page, "select page");
        self.page = page;
        self.scroll = 0;
        self.notice = None;
        self.fetch_all()
    }

    fn fetch_all(&mut self) -> Vec<Command> {
        vec![
            Command::FetchResearchers {
                seq: self.researchers_seq.issue(),
            },
            Command::FetchStats {
                seq: self.stats_seq.issue(),
            },
        ]
    }

    fn researchers_loaded(&mut self, seq: Seq, result: Result<Vec<Researcher>, GatewayError>) {
        if !self.researchers_seq.accept(seq) {
            tracing::debug!(seq, latest = self.researchers_seq.issued(), "stale researchers response dropped");
            return;
        }
        if let Ok(researchers) = result {
            self.researchers = researchers;
            self.clamp_scroll();
        }
        self.loading = false;
    }

    fn stats_loaded(&mut self, seq: Seq, result: Result<DashboardStats, GatewayError>) {
        if !self.stats_seq.accept(seq) {
            tracing::debug!(seq, latest = self.stats_seq.issued(), "stale stats response dropped");
            return;
        }
        if let Ok(stats) = result {
            self.stats = Some(stats);
        }
    }

    fn clamp_scroll(&mut self) {
        self.scroll = self.scroll.min(self.row_count().saturating_sub(1));
    }

    /// Rows in the scrollable table of the current page.
    pub fn row_count(&self) -> usize {
        match self.page {
            Page::Dashboard => self.filtered().len(),
            Page::Researchers | Page::SurveyStatus => self.researchers.len(),
            _ => 0,
        }
    }

    /// Roster narrowed by the search box and both dropdowns.
    pub fn filtered(&self) -> Vec<&Researcher> {
        self.filter.apply(&self.researchers)
    }

    pub fn derived(&self) -> DerivedStats {
        DerivedStats::compute(self.stats.as_ref(), &self.researchers, self.aggregate_policy)
    }

    pub fn researchers_seq(&self) -> RequestSeq {
        self.researchers_seq
    }

    pub fn stats_seq(&self) -> RequestSeq {
        self.stats_seq
    }
}
