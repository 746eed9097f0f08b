//! # TUI Components
//!
//! Display components for the deck simulator. All of them are stateless,
//! props-based renderers: each frame the event loop rebuilds them from
//! router introspection ([`crate::core::router::ContextRouter`]) and
//! [`crate::tui::deck::SimState`], then calls
//! [`Component::render`](crate::tui::component::Component::render).
//!
//! - `StatusBar`: current context plus the navigation breadcrumb
//! - `ButtonGrid`: per-button legend (description + icon, or "Unassigned")
//! - `PotGauge`: pot position and its bound duty
//! - `ActivityLog`: recent actions and transitions
//!
//! Components never reach into global state; whoever builds them decides
//! what they show. That keeps each one testable against a `TestBackend`
//! with hand-made props.

mod activity_log;
mod button_grid;
mod pot_gauge;
mod status_bar;

pub use activity_log::ActivityLog;
pub use button_grid::{ButtonEntry, ButtonGrid};
pub use pot_gauge::PotGauge;
pub use status_bar::StatusBar;
