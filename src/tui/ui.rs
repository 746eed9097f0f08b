use crate::core::router::ContextRouter;
use crate::tui::component::Component;
use crate::tui::components::{ActivityLog, ButtonEntry, ButtonGrid, PotGauge, StatusBar};
use crate::tui::deck::SimState;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

/// Compose the whole frame from router introspection and simulator state.
///
/// Everything the frame shows about the routing table goes through the
/// router's public description queries, the same way a real presentation
/// layer labels physical controls.
pub fn draw(frame: &mut Frame, router: &ContextRouter, sim: &SimState, pot_value: f64, buttons: u8) {
    use Constraint::{Length, Min, Percentage};
    let layout = Layout::vertical([Length(1), Min(0), Length(3)]);
    let [status_area, main_area, pot_area] = layout.areas(frame.area());

    let columns = Layout::horizontal([Percentage(55), Percentage(45)]);
    let [grid_area, activity_area] = columns.areas(main_area);

    StatusBar::new(router.stack()).render(frame, status_area);

    let entries = (1..=buttons)
        .map(|id| ButtonEntry {
            id,
            description: router.button_description(id),
            icon: router.button_icon(id),
        })
        .collect();
    ButtonGrid::new(entries).render(frame, grid_area);

    ActivityLog::new(sim.activity().map(str::to_string).collect()).render(frame, activity_area);

    PotGauge::new(pot_value, router.pot_description()).render(frame, pot_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::context::Context;
    use crate::tui::deck::{self, SimState};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn rendered_frame(router: &ContextRouter, sim: &SimState) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| draw(f, router, sim, 0.5, 9))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draw_empty_router_shows_unassigned_surface() {
        let router = ContextRouter::new(Context::MainMenu);
        let sim = SimState::new();
        let text = rendered_frame(&router, &sim);
        assert!(text.contains("Helmdeck Console"));
        assert!(text.contains("Main Menu"));
        assert!(text.contains("Unassigned"));
    }

    #[test]
    fn test_draw_wired_console_shows_bindings() {
        let router = Rc::new(ContextRouter::new(Context::MainMenu));
        let sim = Rc::new(RefCell::new(SimState::new()));
        deck::wire_bindings(&router, &sim);

        let text = rendered_frame(&router, &sim.borrow());
        assert!(text.contains("Ship Viewer"));
        assert!(text.contains("UI Brightness"));

        router.set_context(Context::MediaControl, true);
        let text = rendered_frame(&router, &sim.borrow());
        assert!(text.contains("Play / Pause"));
        assert!(text.contains("Volume"));
        assert!(text.contains("Main Menu › Media Control"));
    }
}
