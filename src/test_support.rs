//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::core::binding::ButtonBinding;
use crate::core::context::Context;
use crate::core::router::ContextRouter;

/// Creates a router starting in `MainMenu` with an empty routing table.
pub fn test_router() -> Rc<ContextRouter> {
    Rc::new(ContextRouter::new(Context::MainMenu))
}

/// Registers a counting binding for (context, button) and returns the
/// counter it increments.
pub fn press_counter(router: &ContextRouter, context: Context, button: u8) -> Rc<Cell<u32>> {
    let hits = Rc::new(Cell::new(0u32));
    let counter = hits.clone();
    router.register_button(
        context,
        button,
        ButtonBinding::new("count", move || counter.set(counter.get() + 1)),
    );
    hits
}

/// Registers an observer that records every (old, new) transition pair.
pub fn transition_recorder(router: &ContextRouter) -> Rc<RefCell<Vec<(Context, Context)>>> {
    let transitions = Rc::new(RefCell::new(Vec::new()));
    let sink = transitions.clone();
    router.on_context_change(move |old, new| sink.borrow_mut().push((old, new)));
    transitions
}
