//! # StatusBar Component
//!
//! Single-line bar showing where the console is: the active context and
//! the navigation stack as a breadcrumb trail. The breadcrumb makes the
//! push/pop behavior of the router directly visible, which is most of the
//! point of the simulator.

use crate::core::context::Context;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

/// Top status bar. Props are rebuilt from the router every frame.
pub struct StatusBar {
    /// Navigation stack snapshot, bottom first; the last entry is the
    /// active context.
    pub stack: Vec<Context>,
}

impl StatusBar {
    pub fn new(stack: Vec<Context>) -> Self {
        Self { stack }
    }

    fn breadcrumb(&self) -> String {
        self.stack
            .iter()
            .map(|c| c.label())
            .collect::<Vec<_>>()
            .join(" › ")
    }
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let text = format!("Helmdeck Console | {}", self.breadcrumb());
        frame.render_widget(Span::raw(text), area);
    }
}
