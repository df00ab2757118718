//! Application state
//!
//! - [`Page`]: the seven sidebar pages
//! - [`DashboardState`]: the view-state store and its pure transition function

pub mod page;
pub mod store;

pub use page::Page;
pub use store::{
    Command, DashboardState, Event, ExportSummary, RequestSeq, Seq, Transition, PAGE_SCROLL,
};
