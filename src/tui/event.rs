use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseEventKind};

/// Simulated hardware events produced by the keyboard/mouse input layer.
///
/// This is the inbound half of the router's boundary: the simulator decodes
/// terminal input into button ids and pot movement the same way a GPIO
/// layer would decode real hardware signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckEvent {
    /// A numbered deck button was pressed (digit keys).
    Button(u8),
    /// The pot was turned clockwise (right arrow, scroll up).
    PotUp,
    /// The pot was turned counter-clockwise (left arrow, scroll down).
    PotDown,
    /// Host-side back navigation (Backspace).
    Back,
    /// Leave the simulator (q, Esc, Ctrl+C).
    Quit,
    /// Terminal resize; just triggers a redraw.
    Resize,
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event(timeout: std::time::Duration) -> Option<DeckEvent> {
    if event::poll(timeout).unwrap_or(false) {
        match event::read().unwrap() {
            Event::Key(key_event) => map_key(key_event),
            Event::Mouse(mouse_event) => match mouse_event.kind {
                MouseEventKind::ScrollUp => Some(DeckEvent::PotUp),
                MouseEventKind::ScrollDown => Some(DeckEvent::PotDown),
                _ => None,
            },
            Event::Resize(_, _) => Some(DeckEvent::Resize),
            _ => None,
        }
    } else {
        None
    }
}

/// Map a key press to a deck event. Unbound keys are ignored.
fn map_key(key_event: KeyEvent) -> Option<DeckEvent> {
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(DeckEvent::Quit),
        (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => Some(DeckEvent::Quit),
        (_, KeyCode::Char(c)) if c.is_ascii_digit() => {
            // to_digit cannot fail here; is_ascii_digit guards it.
            Some(DeckEvent::Button(c.to_digit(10)? as u8))
        }
        (_, KeyCode::Right) | (_, KeyCode::Up) => Some(DeckEvent::PotUp),
        (_, KeyCode::Left) | (_, KeyCode::Down) => Some(DeckEvent::PotDown),
        (_, KeyCode::Backspace) => Some(DeckEvent::Back),
        _ => None,
    }
}
