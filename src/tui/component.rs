use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components follow a props pattern: they receive all data as struct
/// fields, rebuilt from router/simulator state each frame, and render into
/// a `Rect`. None of them hold cross-frame state, which keeps them trivial
/// to test against a `TestBackend`.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
