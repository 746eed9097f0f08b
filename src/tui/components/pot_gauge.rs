//! # PotGauge Component
//!
//! Shows where the simulated pot sits and what turning it does in the
//! current context (the router's pot description query).

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Gauge};

/// Pot position plus its current duty.
pub struct PotGauge {
    /// Normalized pot position in `[0.0, 1.0]`.
    pub value: f64,
    /// Description of the bound action, or "Unassigned".
    pub description: String,
}

impl PotGauge {
    pub fn new(value: f64, description: String) -> Self {
        Self { value, description }
    }
}

impl Component for PotGauge {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let percent = (self.value.clamp(0.0, 1.0) * 100.0).round() as u16;
        let gauge = Gauge::default()
            .block(Block::bordered().title("Pot"))
            .gauge_style(Style::default().fg(Color::Yellow))
            .ratio(self.value.clamp(0.0, 1.0))
            .label(format!("{}: {}%", self.description, percent));
        frame.render_widget(gauge, area);
    }
}
