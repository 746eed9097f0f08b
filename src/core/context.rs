//! # Contexts
//!
//! The closed set of screens the companion console can show. Every hardware
//! input is interpreted relative to the active context, so this enum is the
//! key of both routing tables in [`crate::core::router::ContextRouter`].
//!
//! The set is fixed at compile time on purpose: an invalid context is
//! unrepresentable, so the router never needs a runtime "unknown context"
//! error path. Config files and CLI flags parse straight into this enum
//! (serde / clap `ValueEnum`), which pushes validation out to the edges.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named operating context (screen) of the console.
///
/// Determines which button and pot bindings are live. Compared by value;
/// `Copy` so it can be passed around freely and stored on the navigation
/// stack without cloning ceremony.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Context {
    /// Top-level launcher; buttons open the other screens.
    MainMenu,
    /// HUD color matrix adjustment.
    HudTuning,
    /// Ship gallery and 3D viewer.
    ShipViewer,
    /// Music / media transport controls.
    MediaControl,
    /// Live game data panels (journal feed, system map, market).
    EliteData,
    /// Console settings.
    Settings,
}

impl Context {
    /// All contexts in menu order. Used by the simulator's setup wiring
    /// and by tests that want to sweep every context.
    pub const ALL: [Context; 6] = [
        Context::MainMenu,
        Context::HudTuning,
        Context::ShipViewer,
        Context::MediaControl,
        Context::EliteData,
        Context::Settings,
    ];

    /// Human-readable label for status bars and legends.
    pub fn label(&self) -> &'static str {
        match self {
            Context::MainMenu => "Main Menu",
            Context::HudTuning => "HUD Tuning",
            Context::ShipViewer => "Ship Viewer",
            Context::MediaControl => "Media Control",
            Context::EliteData => "Elite Data",
            Context::Settings => "Settings",
        }
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
