//! Session export
//!
//! Serializes the event log and statistics to JSON for external
//! consumption.

use serde::{Deserialize, Serialize};
use types::numeric::Price;

use crate::events::SessionEvent;
use crate::session::TradingSession;
use crate::stats::SessionStats;

/// Combined export of one session's outputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionExport {
    pub version: String,
    pub stats: SessionStats,
    pub last_trade_price: Price,
    pub event_count: usize,
    pub events: Vec<SessionEvent>,
}

/// Build a complete session export.
pub fn build_export(session: &TradingSession) -> SessionExport {
    SessionExport {
        version: crate::VERSION.to_string(),
        stats: session.stats().clone(),
        last_trade_price: session.last_trade_price(),
        event_count: session.events().len(),
        events: session.events().to_vec(),
    }
}

/// Export session data as JSON.
pub fn export_json(export: &SessionExport) -> String {
    serde_json::to_string_pretty(export).unwrap_or_default()
}

/// Write an export to a file path.
pub fn write_to_file(export: &SessionExport, path: &str) -> std::io::Result<()> {
    std::fs::write(path, export_json(export))
}
