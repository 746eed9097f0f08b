//! # ActivityLog Component
//!
//! Rolling feed of what the console just did: fired actions and context
//! transitions, newest at the bottom. Purely presentational; the feed
//! itself lives in [`crate::tui::deck::SimState`].

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

/// Recent activity lines, oldest first.
pub struct ActivityLog {
    pub lines: Vec<String>,
}

impl ActivityLog {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }
}

impl Component for ActivityLog {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // Keep the newest lines visible when the feed outgrows the area.
        let visible = area.height.saturating_sub(2) as usize;
        let start = self.lines.len().saturating_sub(visible);
        let lines: Vec<Line> = self.lines[start..]
            .iter()
            .map(|l| Line::raw(l.clone()))
            .collect();
        let feed = Paragraph::new(lines).block(Block::bordered().title("Activity"));
        frame.render_widget(feed, area);
    }
}
