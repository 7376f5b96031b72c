//! Background tasks feeding the terminal UI
//!
//! Data loading and insight generation run off the UI loop and report back
//! over one update channel, so the interface never blocks on the network.

use crate::charts::ChartSpec;
use crate::dashboard::TargetId;
use crate::events::Event;
use tokio::sync::mpsc;

pub mod loader;

pub use loader::{start_insight_worker, start_view_loader};

/// One message from a background task to the UI loop.
#[derive(Debug, Clone)]
pub enum UiUpdate {
    /// A chart arrived for a target.
    ChartBound(TargetId, ChartSpec),
    /// Text arrived for a target.
    TextSet(TargetId, String),
    /// Something happened that belongs in the activity strip.
    Activity(Event),
}

/// Sender half used by every background task.
pub type UpdateSender = mpsc::Sender<UiUpdate>;
