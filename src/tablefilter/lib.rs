//! # Tablefilter Architecture
//!
//! Tablefilter is the **search and filter engine behind the dashboard list
//! screens** (orders, completed orders, tasks, transactions, sites,
//! notifications). It is a library first; the `tablefilter` binary is one
//! client of it.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders tables and the filter bar      │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Resolves screens, loads records, dispatches commands     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Builds a FilterState per screen, returns CmdResult       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Engine (filter/, status.rs, screens.rs)                    │
//! │  - FilterState, FilterBar, matching, status normalization   │
//! │  - Pure, synchronous, never fails                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Source Layer (source/)                                     │
//! │  - RecordSource trait: FileSource, InMemorySource           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: The Engine Owns No I/O
//!
//! Records arrive already fetched. The engine takes them (or `None` while a
//! screen is still loading), derives a filtered view and hands it back. It
//! never reads files, talks to the network or touches credentials, so the
//! same engine serves a CLI, a server-rendered page or a test.
//!
//! ## Module Overview
//!
//! - [`filter`]: FilterState, FilterBar, matching rules
//! - [`model`]: `Record` and match-string coercion
//! - [`status`]: status code normalization tables
//! - [`screens`]: per-screen facets, defaults and columns
//! - [`source`]: record loading
//! - [`commands`]: business logic per command
//! - [`api`]: the facade
//! - [`config`]: configuration management
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod screens;
pub mod source;
pub mod status;
