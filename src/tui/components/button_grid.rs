//! # ButtonGrid Component
//!
//! The button legend: one row per physical button showing what it does in
//! the current context. Rows come straight from the router's description
//! queries, so an unbound button shows the router's "Unassigned" fallback
//! rather than being hidden — an inert button is still a physical button.

use crate::core::router::UNASSIGNED;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

/// Legend entry for one button, as reported by router introspection.
pub struct ButtonEntry {
    pub id: u8,
    pub description: String,
    pub icon: Option<String>,
}

/// Per-button legend for the current context.
pub struct ButtonGrid {
    pub entries: Vec<ButtonEntry>,
}

impl ButtonGrid {
    pub fn new(entries: Vec<ButtonEntry>) -> Self {
        Self { entries }
    }

    fn entry_line(entry: &ButtonEntry) -> Line<'_> {
        let id = Span::styled(
            format!(" B{} ", entry.id),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        );
        if entry.description == UNASSIGNED {
            return Line::from(vec![
                id,
                Span::styled(
                    UNASSIGNED,
                    Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
                ),
            ]);
        }
        let mut spans = vec![id, Span::raw(entry.description.clone())];
        if let Some(icon) = &entry.icon {
            spans.push(Span::styled(
                format!("  [{icon}]"),
                Style::default().fg(Color::DarkGray),
            ));
        }
        Line::from(spans)
    }
}

impl Component for ButtonGrid {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = self.entries.iter().map(Self::entry_line).collect();
        let legend = Paragraph::new(lines).block(Block::bordered().title("Buttons"));
        frame.render_widget(legend, area);
    }
}
