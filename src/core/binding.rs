//! # Bindings
//!
//! A binding is what a hardware input *does* in one context: a type-erased
//! action closure plus the metadata the presentation layer needs to label
//! the control (description text, optional icon name).
//!
//! Bindings are immutable once constructed. Re-registering the same
//! (context, input) pair in the router replaces the whole binding rather
//! than mutating it in place.

/// What one button does in one context.
///
/// The action takes no arguments; anything it needs it captures at
/// construction time (shared demo state, a handle back to the router for
/// navigation, a channel, ...).
pub struct ButtonBinding {
    action: Box<dyn Fn()>,
    description: String,
    icon: Option<String>,
}

impl ButtonBinding {
    /// Create a binding with a description and an action closure.
    pub fn new(description: impl Into<String>, action: impl Fn() + 'static) -> Self {
        Self {
            action: Box::new(action),
            description: description.into(),
            icon: None,
        }
    }

    /// Attach an icon identifier for display layers that render glyphs.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// The human-readable label for this binding.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Icon identifier, if one was attached.
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub(crate) fn invoke(&self) {
        (self.action)();
    }
}

/// What the potentiometer does in one context.
///
/// The action receives the normalized dial position in `[0.0, 1.0]`. The
/// router passes the sample through untouched; clamping is the input
/// layer's job.
pub struct PotBinding {
    action: Box<dyn Fn(f64)>,
    description: String,
    icon: Option<String>,
}

impl PotBinding {
    /// Create a binding with a description and a one-argument action.
    pub fn new(description: impl Into<String>, action: impl Fn(f64) + 'static) -> Self {
        Self {
            action: Box::new(action),
            description: description.into(),
            icon: None,
        }
    }

    /// Attach an icon identifier for display layers that render glyphs.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// The human-readable label for this binding.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Icon identifier, if one was attached.
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub(crate) fn invoke(&self, value: f64) {
        (self.action)(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_button_binding_metadata() {
        let binding = ButtonBinding::new("Next Ship", || {}).with_icon("arrow-right");
        assert_eq!(binding.description(), "Next Ship");
        assert_eq!(binding.icon(), Some("arrow-right"));
    }

    #[test]
    fn test_button_binding_icon_defaults_to_none() {
        let binding = ButtonBinding::new("Back", || {});
        assert_eq!(binding.icon(), None);
    }

    #[test]
    fn test_button_invoke_runs_action() {
        let hits = Rc::new(Cell::new(0u32));
        let counter = hits.clone();
        let binding = ButtonBinding::new("count", move || counter.set(counter.get() + 1));

        binding.invoke();
        binding.invoke();
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn test_pot_invoke_passes_value_through() {
        let seen = Rc::new(Cell::new(0.0f64));
        let sink = seen.clone();
        let binding = PotBinding::new("Volume", move |v| sink.set(v)).with_icon("dial");

        binding.invoke(0.75);
        assert_eq!(seen.get(), 0.75);
        assert_eq!(binding.description(), "Volume");
        assert_eq!(binding.icon(), Some("dial"));

        // Out-of-range samples are the input layer's problem, not ours.
        binding.invoke(1.5);
        assert_eq!(seen.get(), 1.5);
    }
}
