//! # Core Application Logic
//!
//! This module contains podview's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • filters (engine)     │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │  catalog   │      │  storage   │
//!     │  Adapter   │      │  fetches   │      │  (filters) │
//!     │ (ratatui)  │      │ (spawned)  │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`filters`]: the filter/sort/paginate engine, the app's one stateful core
//! - [`state`]: the `App` struct, all application state in one place
//! - [`action`]: the `Action` enum, everything that can happen in the app
//! - [`genres`]: the fixed genre reference set
//! - [`config`]: config file loading and resolution
//! - [`storage`]: persisted filter selections

pub mod action;
pub mod config;
pub mod filters;
pub mod genres;
pub mod state;
pub mod storage;
