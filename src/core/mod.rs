//! # Core Application Logic
//!
//! This module contains Lectern's business logic. It knows nothing about
//! any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Navigator + cache    │
//!                    │                         │
//!                    │  No terminal I/O here.  │
//!                    └───────────┬─────────────┘
//!                                │
//!                  ┌─────────────┴─────────────┐
//!                  ▼                           ▼
//!           ┌────────────┐              ┌────────────┐
//!           │    TUI     │              │  resource  │
//!           │  Adapter   │              │  backends  │
//!           │ (ratatui)  │              │   (USFM)   │
//!           └────────────┘              └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct — all application state in one place
//! - [`action`]: The `Action` enum — everything that can happen in the app
//! - [`navigation`]: The `Navigator` — moving through books/chapters/verses
//! - [`cache`]: Bounded recency-ordered verse cache
//! - [`section`]: Marker-driven section boundary scanning
//! - [`display`]: Context view modes and display-verse assembly

pub mod action;
pub mod cache;
pub mod config;
pub mod display;
pub mod navigation;
pub mod section;
pub mod session;
pub mod state;
pub mod verse_data;
pub mod verse_key;
pub mod versification;
