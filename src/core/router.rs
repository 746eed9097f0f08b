//! # Context Router
//!
//! The routing/state engine of the console. One physical surface (a handful
//! of buttons, one potentiometer) produces different effects depending on
//! the active [`Context`]; the router owns that decision.
//!
//! ```text
//! input layer ──▶ dispatch_button / dispatch_pot ──▶ bound action
//!                                                          │
//! presentation ◀── (old, new) notifications ◀── set_context / pop_context
//! ```
//!
//! ## Navigation model
//!
//! Contexts live on a stack so a button can both do something and move the
//! app somewhere else (and "Back" pops). The stack is never empty: the
//! bottom context is a floor that `pop_context` cannot remove. That
//! invariant is structural here — the top of the stack is stored separately
//! from the entries below it, so there is no empty-stack state to defend
//! against.
//!
//! ## Re-entrancy
//!
//! Actions and observers run synchronously, and they are allowed to call
//! back into the router (the common pattern is a button whose action pushes
//! a different context). All methods therefore take `&self` with interior
//! mutability, and every internal borrow is dropped before user code runs:
//! dispatch clones the `Rc` binding out of the table before invoking it,
//! and notification iterates a clone of the observer list. A nested
//! transition completes, including its notifications, before the outer
//! dispatch returns.
//!
//! ## Threading
//!
//! Single-threaded by construction (`Rc`/`RefCell` make the router `!Send`).
//! A host that decodes hardware events on another thread must marshal them
//! onto the router's owning thread.

use log::{debug, trace};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::core::binding::{ButtonBinding, PotBinding};
use crate::core::context::Context;

/// Label returned for inputs with no binding in the current context.
///
/// An unmapped input is normal, expected behavior, not an error; the
/// presentation layer renders this literal instead of special-casing
/// missing bindings.
pub const UNASSIGNED: &str = "Unassigned";

/// Callback invoked on every context transition with `(old, new)`.
pub type ContextObserver = dyn Fn(Context, Context);

/// The navigation stack, with the non-empty invariant built into the type:
/// the current context sits in `top`, everything beneath it in `below`.
struct NavStack {
    below: Vec<Context>,
    top: Context,
}

/// Context-sensitive input router.
///
/// Owns the current context, the navigation stack, the per-context routing
/// tables for buttons and the pot, and the transition observer list.
/// Constructed once at startup and shared via `Rc` with whatever needs to
/// register bindings, observe transitions, or navigate.
pub struct ContextRouter {
    stack: RefCell<NavStack>,
    buttons: RefCell<HashMap<Context, HashMap<u8, Rc<ButtonBinding>>>>,
    pots: RefCell<HashMap<Context, Rc<PotBinding>>>,
    observers: RefCell<Vec<Rc<ContextObserver>>>,
}

impl ContextRouter {
    /// Create a router with an empty routing table, starting in `initial`.
    pub fn new(initial: Context) -> Self {
        Self {
            stack: RefCell::new(NavStack {
                below: Vec::new(),
                top: initial,
            }),
            buttons: RefCell::new(HashMap::new()),
            pots: RefCell::new(HashMap::new()),
            observers: RefCell::new(Vec::new()),
        }
    }

    /// The active context (top of the navigation stack).
    pub fn current(&self) -> Context {
        self.stack.borrow().top
    }

    /// Navigation stack depth, including the floor.
    pub fn depth(&self) -> usize {
        self.stack.borrow().below.len() + 1
    }

    /// Snapshot of the navigation stack, bottom first, current context last.
    pub fn stack(&self) -> Vec<Context> {
        let stack = self.stack.borrow();
        let mut out = stack.below.clone();
        out.push(stack.top);
        out
    }

    /// Change the active context.
    ///
    /// With `push` the previous context stays on the stack (a later
    /// [`pop_context`](Self::pop_context) returns to it); without, the
    /// stack is reset so `context` becomes the new floor.
    ///
    /// Observers fire on every call, in registration order, even when the
    /// context does not actually change — navigation is explicit and
    /// caller-driven, not state-diffed, and callers rely on transitions
    /// always refreshing the presentation layer.
    pub fn set_context(&self, context: Context, push: bool) {
        let old = {
            let mut stack = self.stack.borrow_mut();
            let old = stack.top;
            if push {
                stack.below.push(old);
            } else {
                stack.below.clear();
            }
            stack.top = context;
            old
        };
        debug!("Context change: {:?} -> {:?} (push={})", old, context, push);
        self.notify(old, context);
    }

    /// Return to the previous context.
    ///
    /// A no-op at the floor (depth 1): the base context can never be popped
    /// past, and no observer fires for the non-transition.
    pub fn pop_context(&self) {
        let popped = {
            let mut stack = self.stack.borrow_mut();
            stack.below.pop().map(|previous| {
                let old = stack.top;
                stack.top = previous;
                (old, previous)
            })
        };
        match popped {
            Some((old, new)) => {
                debug!("Context pop: {:?} -> {:?}", old, new);
                self.notify(old, new);
            }
            None => trace!("Context pop ignored at stack floor"),
        }
    }

    /// Register what `button` does in `context`. Last registration for a
    /// (context, button) pair wins; there is no removal.
    pub fn register_button(&self, context: Context, button: u8, binding: ButtonBinding) {
        self.buttons
            .borrow_mut()
            .entry(context)
            .or_default()
            .insert(button, Rc::new(binding));
    }

    /// Register what the pot does in `context`. Last registration wins.
    pub fn register_pot(&self, context: Context, binding: PotBinding) {
        self.pots.borrow_mut().insert(context, Rc::new(binding));
    }

    /// Route a button press through the current context's table.
    ///
    /// Unmapped buttons are a silent no-op.
    pub fn dispatch_button(&self, button: u8) {
        let context = self.current();
        let binding = self
            .buttons
            .borrow()
            .get(&context)
            .and_then(|table| table.get(&button))
            .cloned();
        match binding {
            Some(binding) => {
                trace!("Button {} in {:?}: {}", button, context, binding.description());
                binding.invoke();
            }
            None => trace!("Button {} unmapped in {:?}", button, context),
        }
    }

    /// Route a pot sample through the current context's table.
    ///
    /// `value` is passed through unvalidated; clamping to `[0.0, 1.0]` is
    /// the input layer's responsibility. Unmapped contexts are a silent
    /// no-op.
    pub fn dispatch_pot(&self, value: f64) {
        let context = self.current();
        let binding = self.pots.borrow().get(&context).cloned();
        match binding {
            Some(binding) => binding.invoke(value),
            None => trace!("Pot unmapped in {:?}", context),
        }
    }

    /// Description of what `button` does right now, or [`UNASSIGNED`].
    pub fn button_description(&self, button: u8) -> String {
        self.buttons
            .borrow()
            .get(&self.current())
            .and_then(|table| table.get(&button))
            .map(|binding| binding.description().to_string())
            .unwrap_or_else(|| UNASSIGNED.to_string())
    }

    /// Icon for `button` in the current context, if the binding has one.
    pub fn button_icon(&self, button: u8) -> Option<String> {
        self.buttons
            .borrow()
            .get(&self.current())
            .and_then(|table| table.get(&button))
            .and_then(|binding| binding.icon().map(str::to_string))
    }

    /// Description of what the pot does right now, or [`UNASSIGNED`].
    pub fn pot_description(&self) -> String {
        self.pots
            .borrow()
            .get(&self.current())
            .map(|binding| binding.description().to_string())
            .unwrap_or_else(|| UNASSIGNED.to_string())
    }

    /// Icon for the pot in the current context, if the binding has one.
    pub fn pot_icon(&self) -> Option<String> {
        self.pots
            .borrow()
            .get(&self.current())
            .and_then(|binding| binding.icon().map(str::to_string))
    }

    /// Register a transition observer. Observers are never removed and fire
    /// in registration order.
    pub fn on_context_change(&self, observer: impl Fn(Context, Context) + 'static) {
        self.observers.borrow_mut().push(Rc::new(observer));
    }

    /// Fan a transition out to every observer.
    ///
    /// Iterates a clone of the list so observers may register further
    /// observers or navigate without hitting a nested borrow.
    fn notify(&self, old: Context, new: Context) {
        let observers: Vec<Rc<ContextObserver>> = self.observers.borrow().clone();
        for observer in observers {
            observer(old, new);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{press_counter, test_router, transition_recorder};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[test]
    fn test_new_router_starts_at_initial_context() {
        let router = ContextRouter::new(Context::HudTuning);
        assert_eq!(router.current(), Context::HudTuning);
        assert_eq!(router.depth(), 1);
        assert_eq!(router.stack(), vec![Context::HudTuning]);
    }

    #[test]
    fn test_unmapped_button_is_silent_noop() {
        let router = test_router();
        // No table at all for any context yet.
        for context in Context::ALL {
            router.set_context(context, false);
            router.dispatch_button(3);
        }
    }

    #[test]
    fn test_unmapped_pot_is_silent_noop() {
        let router = test_router();
        assert_eq!(router.pot_description(), UNASSIGNED);
        router.dispatch_pot(0.5);
    }

    #[test]
    fn test_registered_button_fires_exactly_once_per_press() {
        let router = test_router();
        let hits = press_counter(&router, Context::MainMenu, 1);

        router.dispatch_button(1);
        assert_eq!(hits.get(), 1);
        router.dispatch_button(1);
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn test_dispatch_only_consults_current_context() {
        let router = test_router();
        let hits = press_counter(&router, Context::ShipViewer, 2);

        // MainMenu is current; the ShipViewer binding must stay inert.
        router.dispatch_button(2);
        assert_eq!(hits.get(), 0);

        router.set_context(Context::ShipViewer, false);
        router.dispatch_button(2);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_pot_binding_receives_value() {
        let router = test_router();
        let seen = Rc::new(Cell::new(-1.0f64));
        let sink = seen.clone();
        router.register_pot(
            Context::MainMenu,
            PotBinding::new("Brightness", move |v| sink.set(v)),
        );

        router.dispatch_pot(0.25);
        assert_eq!(seen.get(), 0.25);
    }

    #[test]
    fn test_reregistration_replaces_binding() {
        let router = test_router();
        let first = press_counter(&router, Context::MainMenu, 7);
        let second = press_counter(&router, Context::MainMenu, 7);

        router.dispatch_button(7);
        assert_eq!(first.get(), 0, "replaced binding must not fire");
        assert_eq!(second.get(), 1);
    }

    #[test]
    fn test_pot_reregistration_replaces_binding() {
        let router = test_router();
        router.register_pot(Context::MainMenu, PotBinding::new("Old", |_| {}));
        router.register_pot(Context::MainMenu, PotBinding::new("New", |_| {}));
        assert_eq!(router.pot_description(), "New");
    }

    #[test]
    fn test_descriptions_fall_back_to_unassigned() {
        let router = test_router();
        assert_eq!(router.button_description(4), UNASSIGNED);
        assert_eq!(router.pot_description(), UNASSIGNED);
        assert_eq!(router.button_icon(4), None);
        assert_eq!(router.pot_icon(), None);
    }

    #[test]
    fn test_description_tracks_current_context() {
        let router = test_router();
        router.register_button(
            Context::MainMenu,
            1,
            ButtonBinding::new("Open Ship Viewer", || {}).with_icon("ship"),
        );
        router.register_button(
            Context::MediaControl,
            1,
            ButtonBinding::new("Previous Track", || {}),
        );

        assert_eq!(router.button_description(1), "Open Ship Viewer");
        assert_eq!(router.button_icon(1).as_deref(), Some("ship"));

        router.set_context(Context::MediaControl, false);
        assert_eq!(router.button_description(1), "Previous Track");
        assert_eq!(router.button_icon(1), None);

        router.set_context(Context::Settings, false);
        assert_eq!(router.button_description(1), UNASSIGNED);
    }

    #[test]
    fn test_set_context_without_push_resets_stack() {
        let router = test_router();
        router.set_context(Context::ShipViewer, true);
        router.set_context(Context::Settings, true);
        assert_eq!(router.depth(), 3);

        router.set_context(Context::EliteData, false);
        assert_eq!(router.stack(), vec![Context::EliteData]);
        assert_eq!(router.current(), Context::EliteData);
    }

    #[test]
    fn test_set_context_with_push_grows_stack_by_one() {
        let router = test_router();
        router.set_context(Context::HudTuning, true);
        assert_eq!(router.depth(), 2);
        assert_eq!(router.current(), Context::HudTuning);
        assert_eq!(router.stack(), vec![Context::MainMenu, Context::HudTuning]);
    }

    #[test]
    fn test_pop_returns_to_previous_context() {
        let router = test_router();
        router.set_context(Context::MediaControl, true);
        router.set_context(Context::Settings, true);

        router.pop_context();
        assert_eq!(router.current(), Context::MediaControl);
        assert_eq!(router.depth(), 2);

        router.pop_context();
        assert_eq!(router.current(), Context::MainMenu);
        assert_eq!(router.depth(), 1);
    }

    #[test]
    fn test_pop_at_floor_is_noop_without_notification() {
        let router = test_router();
        let transitions = transition_recorder(&router);

        router.pop_context();
        assert_eq!(router.current(), Context::MainMenu);
        assert_eq!(router.depth(), 1);
        assert!(transitions.borrow().is_empty());
    }

    #[test]
    fn test_observers_fire_in_registration_order() {
        let router = test_router();
        let order = Rc::new(RefCell::new(Vec::new()));
        for tag in ["first", "second", "third"] {
            let sink = order.clone();
            router.on_context_change(move |_, _| sink.borrow_mut().push(tag));
        }

        router.set_context(Context::Settings, false);
        assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_observer_fires_even_when_context_unchanged() {
        let router = test_router();
        let transitions = transition_recorder(&router);

        router.set_context(Context::MainMenu, false);
        assert_eq!(
            *transitions.borrow(),
            vec![(Context::MainMenu, Context::MainMenu)]
        );
    }

    #[test]
    fn test_every_transition_carries_old_and_new_pair() {
        let router = test_router();
        let transitions = transition_recorder(&router);

        router.set_context(Context::ShipViewer, true);
        router.set_context(Context::Settings, true);
        router.pop_context();

        assert_eq!(
            *transitions.borrow(),
            vec![
                (Context::MainMenu, Context::ShipViewer),
                (Context::ShipViewer, Context::Settings),
                (Context::Settings, Context::ShipViewer),
            ]
        );
    }

    #[test]
    fn test_action_navigates_reentrantly() {
        // Button 3 in HudTuning opens Settings; the nested transition and
        // its notifications finish before dispatch_button returns.
        let router = Rc::new(ContextRouter::new(Context::HudTuning));
        let transitions = transition_recorder(&router);

        let nav = Rc::downgrade(&router);
        router.register_button(
            Context::HudTuning,
            3,
            ButtonBinding::new("Open Settings", move || {
                if let Some(router) = nav.upgrade() {
                    router.set_context(Context::Settings, true);
                }
            }),
        );

        router.dispatch_button(3);
        assert_eq!(router.current(), Context::Settings);
        assert_eq!(router.stack(), vec![Context::HudTuning, Context::Settings]);
        assert_eq!(
            *transitions.borrow(),
            vec![(Context::HudTuning, Context::Settings)]
        );

        router.pop_context();
        assert_eq!(router.current(), Context::HudTuning);
        assert_eq!(router.stack(), vec![Context::HudTuning]);
    }

    #[test]
    fn test_action_registered_during_dispatch_is_live_afterwards() {
        let router = Rc::new(ContextRouter::new(Context::MainMenu));
        let weak = Rc::downgrade(&router);
        let hits = Rc::new(Cell::new(0u32));
        let counter = hits.clone();

        router.register_button(
            Context::MainMenu,
            1,
            ButtonBinding::new("Install", move || {
                if let Some(router) = weak.upgrade() {
                    let counter = counter.clone();
                    router.register_button(
                        Context::MainMenu,
                        2,
                        ButtonBinding::new("Installed", move || counter.set(counter.get() + 1)),
                    );
                }
            }),
        );

        router.dispatch_button(1);
        router.dispatch_button(2);
        assert_eq!(hits.get(), 1);
    }
}
