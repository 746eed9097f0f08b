//! # Core Routing Logic
//!
//! This module contains helmdeck's business logic.
//! It knows nothing about any specific UI technology or hardware bus.
//!
//! ```text
//!                    ┌─────────────────────────────┐
//!                    │          CORE               │
//!                    │  (this module)              │
//!                    │                             │
//!                    │  • Context (screen enum)    │
//!                    │  • Binding (action + label) │
//!                    │  • ContextRouter (dispatch, │
//!                    │    nav stack, observers)    │
//!                    │                             │
//!                    │  No I/O. No UI. Sync.       │
//!                    └────────────┬────────────────┘
//!                                 │
//!             ┌───────────────────┼───────────────────┐
//!             ▼                   ▼                   ▼
//!      ┌────────────┐      ┌────────────┐      ┌────────────┐
//!      │  Simulator │      │   GPIO     │      │    BLE     │
//!      │  (ratatui) │      │  (future)  │      │  (future)  │
//!      └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`context`]: The `Context` enum — the closed set of console screens
//! - [`binding`]: Action closures plus display metadata for one input
//! - [`router`]: The `ContextRouter` — routing tables, navigation stack,
//!   transition observers
//! - [`config`]: TOML config for the simulated hardware surface

pub mod binding;
pub mod config;
pub mod context;
pub mod router;
