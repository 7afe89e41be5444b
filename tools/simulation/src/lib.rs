//! Simulation layer for the matching engine
//!
//! Wraps one [`matching_engine::MatchingEngine`] in a trading session
//! that records events, tracks statistics, and feeds the engine from
//! scripted and randomized submitters. Everything here drives the engine
//! through its public `submit_*` interface; the session is the single
//! writer.
//!
//! # Modules
//! - `session` — Trading session owning engine, event log, and stats
//! - `events` — Typed submit/resolve/trade event taxonomy
//! - `stats` — Session counters and brokerage accounting
//! - `bots` — Randomized bot submitter with deterministic seeding
//! - `scenarios` — Sample book and scripted demo playback
//! - `replay` — Snapshot capture and deterministic replay validation
//! - `export` — JSON export of events and statistics

pub mod bots;
pub mod events;
pub mod export;
pub mod replay;
pub mod scenarios;
pub mod session;
pub mod stats;

/// Crate version constant
pub const VERSION: &str = "1.0.0";
