//! # TUI Simulator
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the console
//! surface, and translates keyboard/mouse input into the hardware events
//! the router understands (digit keys are buttons, arrow keys and the
//! scroll wheel are the pot).
//!
//! This is the only module that knows about ratatui and crossterm. The
//! core router never sees a terminal; it receives the same
//! `dispatch_button` / `dispatch_pot` calls a GPIO layer would make.
//!
//! The loop is synchronous on purpose: the router's contract is
//! single-threaded, and every dispatched action (including re-entrant
//! navigation) completes before the next frame is drawn.

pub mod component;
pub mod components;
pub mod deck;
mod event;
mod ui;

use log::info;
use rand::Rng;
use std::cell::RefCell;
use std::io::stdout;
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::config::ResolvedConfig;
use crate::core::router::ContextRouter;
use crate::tui::deck::SimState;
use crate::tui::event::{DeckEvent, poll_event};

/// Presentation-only state: the position of the simulated pot knob.
///
/// The knob position belongs to the input layer, not the router; the
/// router only ever sees the samples. Clamping to `[0.0, 1.0]` happens
/// here, per the input layer's side of the contract.
struct TuiState {
    pot_value: f64,
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse capture)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

pub fn run(config: ResolvedConfig, demo: bool) -> std::io::Result<()> {
    let router = Rc::new(ContextRouter::new(config.start_context));
    let sim = Rc::new(RefCell::new(SimState::new()));
    deck::wire_bindings(&router, &sim);

    // Transitions land in the activity feed; the redraw each loop pass
    // picks up the new labels, which is exactly what a widget observer
    // would do in the real console.
    {
        let feed = sim.clone();
        router.on_context_change(move |old, new| {
            feed.borrow_mut()
                .note(format!("{} → {}", old.label(), new.label()));
        });
    }

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    let mut tui = TuiState { pot_value: 0.5 };
    let mut rng = rand::rng();

    loop {
        {
            let sim_view = sim.borrow();
            terminal.draw(|f| ui::draw(f, &router, &sim_view, tui.pot_value, config.buttons))?;
        }

        let timeout = if demo {
            Duration::from_millis(700)
        } else {
            Duration::from_millis(250)
        };

        match poll_event(timeout) {
            Some(DeckEvent::Quit) => break,
            Some(DeckEvent::Button(id)) if (1..=config.buttons).contains(&id) => {
                router.dispatch_button(id);
            }
            // Digits past the simulated surface stay inert.
            Some(DeckEvent::Button(_)) => {}
            Some(DeckEvent::PotUp) => {
                tui.pot_value = (tui.pot_value + config.pot_step).clamp(0.0, 1.0);
                router.dispatch_pot(tui.pot_value);
            }
            Some(DeckEvent::PotDown) => {
                tui.pot_value = (tui.pot_value - config.pot_step).clamp(0.0, 1.0);
                router.dispatch_pot(tui.pot_value);
            }
            Some(DeckEvent::Back) => router.pop_context(),
            Some(DeckEvent::Resize) => {}
            None if demo => {
                // Unattended mode: poke the deck like flaky hardware would.
                let id = rng.random_range(1..=config.buttons);
                router.dispatch_button(id);
                tui.pot_value = rng.random();
                router.dispatch_pot(tui.pot_value);
            }
            None => {}
        }
    }

    ratatui::restore();
    Ok(())
}
