//! # Deck Wiring
//!
//! The demo application layer: the state the simulated console mutates and
//! the default binding set registered at startup.
//!
//! This is what a real host would do during initialization — build the
//! complete routing table before steady-state dispatch begins. Actions
//! capture two things: the shared [`SimState`] they mutate, and (for
//! navigation buttons) a `Weak` handle back to the router so a press can
//! push or pop a context re-entrantly without creating an `Rc` cycle.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::core::binding::{ButtonBinding, PotBinding};
use crate::core::context::Context;
use crate::core::router::ContextRouter;

/// Ships available in the viewer, gallery order.
pub const SHIPS: [&str; 5] = [
    "Sidewinder",
    "Vulture",
    "Asp Explorer",
    "Anaconda",
    "Federal Corvette",
];

/// Data panels cycled on the Elite Data screen.
pub const DATA_PANELS: [&str; 4] = ["Journal Feed", "System Map", "Market Data", "Exploration"];

/// Display themes cycled on the Settings screen.
pub const THEMES: [&str; 4] = ["Elite Orange", "Ice Blue", "Matrix Green", "Deep Purple"];

const ACTIVITY_CAP: usize = 40;

/// Mutable console state the demo bindings act on.
///
/// Everything a bound action touches lives here, behind one
/// `Rc<RefCell<..>>` shared by all closures. The TUI reads it each frame.
pub struct SimState {
    pub brightness: f64,
    pub hud_hue: f64,
    pub zoom: f64,
    pub rotating: bool,
    pub ship_index: usize,
    pub volume: f64,
    pub playing: bool,
    pub feed_scroll: f64,
    pub data_panel: usize,
    pub contrast: f64,
    pub theme_index: usize,
    activity: VecDeque<String>,
}

impl SimState {
    pub fn new() -> Self {
        Self {
            brightness: 0.8,
            hud_hue: 0.5,
            zoom: 0.3,
            rotating: false,
            ship_index: 0,
            volume: 0.6,
            playing: false,
            feed_scroll: 0.0,
            data_panel: 0,
            contrast: 0.5,
            theme_index: 0,
            activity: VecDeque::new(),
        }
    }

    /// Append a line to the activity feed, dropping the oldest past the cap.
    pub fn note(&mut self, line: impl Into<String>) {
        self.activity.push_back(line.into());
        if self.activity.len() > ACTIVITY_CAP {
            self.activity.pop_front();
        }
    }

    /// Activity feed lines, oldest first.
    pub fn activity(&self) -> impl Iterator<Item = &str> {
        self.activity.iter().map(String::as_str)
    }

    pub fn ship_name(&self) -> &'static str {
        SHIPS[self.ship_index % SHIPS.len()]
    }

    pub fn data_panel_name(&self) -> &'static str {
        DATA_PANELS[self.data_panel % DATA_PANELS.len()]
    }

    pub fn theme_name(&self) -> &'static str {
        THEMES[self.theme_index % THEMES.len()]
    }
}

impl Default for SimState {
    fn default() -> Self {
        Self::new()
    }
}

/// A button action that pushes `target` onto the navigation stack.
fn open_screen(
    router: &Rc<ContextRouter>,
    sim: &Rc<RefCell<SimState>>,
    target: Context,
) -> impl Fn() + 'static {
    let nav = Rc::downgrade(router);
    let sim = sim.clone();
    move || {
        sim.borrow_mut().note(format!("Opening {}", target.label()));
        if let Some(router) = nav.upgrade() {
            router.set_context(target, true);
        }
    }
}

/// A button action that pops back to the previous context.
fn go_back(router: &Rc<ContextRouter>) -> impl Fn() + 'static {
    let nav = Rc::downgrade(router);
    move || {
        if let Some(router) = nav.upgrade() {
            router.pop_context();
        }
    }
}

/// Register the default per-context binding set.
///
/// Main menu buttons push their screen so the universal "Back" button
/// (button 9) can pop home again; the pot gets a different continuous
/// duty on every screen.
pub fn wire_bindings(router: &Rc<ContextRouter>, sim: &Rc<RefCell<SimState>>) {
    // Main menu: buttons 1-5 open the five screens.
    router.register_button(
        Context::MainMenu,
        1,
        ButtonBinding::new("HUD Tuning", open_screen(router, sim, Context::HudTuning))
            .with_icon("hud"),
    );
    router.register_button(
        Context::MainMenu,
        2,
        ButtonBinding::new("Ship Viewer", open_screen(router, sim, Context::ShipViewer))
            .with_icon("ship"),
    );
    router.register_button(
        Context::MainMenu,
        3,
        ButtonBinding::new("Media Control", open_screen(router, sim, Context::MediaControl))
            .with_icon("media"),
    );
    router.register_button(
        Context::MainMenu,
        4,
        ButtonBinding::new("Elite Data", open_screen(router, sim, Context::EliteData))
            .with_icon("data"),
    );
    router.register_button(
        Context::MainMenu,
        5,
        ButtonBinding::new("Settings", open_screen(router, sim, Context::Settings))
            .with_icon("gear"),
    );
    {
        let sim = sim.clone();
        router.register_pot(
            Context::MainMenu,
            PotBinding::new("UI Brightness", move |v| sim.borrow_mut().brightness = v)
                .with_icon("sun"),
        );
    }

    // HUD tuning: pot drives the hue matrix, button 1 resets it.
    {
        let sim = sim.clone();
        router.register_button(
            Context::HudTuning,
            1,
            ButtonBinding::new("Reset Hue", move || {
                let mut sim = sim.borrow_mut();
                sim.hud_hue = 0.5;
                sim.note("HUD hue reset");
            }),
        );
    }
    {
        let sim = sim.clone();
        router.register_pot(
            Context::HudTuning,
            PotBinding::new("HUD Hue", move |v| sim.borrow_mut().hud_hue = v),
        );
    }

    // Ship viewer: gallery prev/next, rotation toggle, pot zooms.
    {
        let sim = sim.clone();
        router.register_button(
            Context::ShipViewer,
            1,
            ButtonBinding::new("Prev Ship", move || {
                let mut sim = sim.borrow_mut();
                sim.ship_index = (sim.ship_index + SHIPS.len() - 1) % SHIPS.len();
                let line = format!("Viewing {}", sim.ship_name());
                sim.note(line);
            })
            .with_icon("arrow-left"),
        );
    }
    {
        let sim = sim.clone();
        router.register_button(
            Context::ShipViewer,
            2,
            ButtonBinding::new("Toggle Rotation", move || {
                let mut sim = sim.borrow_mut();
                sim.rotating = !sim.rotating;
                let line = if sim.rotating {
                    "Rotation on"
                } else {
                    "Rotation off"
                };
                sim.note(line);
            })
            .with_icon("rotate"),
        );
    }
    {
        let sim = sim.clone();
        router.register_button(
            Context::ShipViewer,
            3,
            ButtonBinding::new("Next Ship", move || {
                let mut sim = sim.borrow_mut();
                sim.ship_index = (sim.ship_index + 1) % SHIPS.len();
                let line = format!("Viewing {}", sim.ship_name());
                sim.note(line);
            })
            .with_icon("arrow-right"),
        );
    }
    {
        let sim = sim.clone();
        router.register_pot(
            Context::ShipViewer,
            PotBinding::new("Viewer Zoom", move |v| sim.borrow_mut().zoom = v).with_icon("zoom"),
        );
    }

    // Media control: transport on 1-3, pot is the volume knob.
    {
        let sim = sim.clone();
        router.register_button(
            Context::MediaControl,
            1,
            ButtonBinding::new("Previous Track", move || {
                sim.borrow_mut().note("Previous track");
            })
            .with_icon("prev"),
        );
    }
    {
        let sim = sim.clone();
        router.register_button(
            Context::MediaControl,
            2,
            ButtonBinding::new("Play / Pause", move || {
                let mut sim = sim.borrow_mut();
                sim.playing = !sim.playing;
                let line = if sim.playing { "Playing" } else { "Paused" };
                sim.note(line);
            })
            .with_icon("play"),
        );
    }
    {
        let sim = sim.clone();
        router.register_button(
            Context::MediaControl,
            3,
            ButtonBinding::new("Next Track", move || {
                sim.borrow_mut().note("Next track");
            })
            .with_icon("next"),
        );
    }
    {
        let sim = sim.clone();
        router.register_pot(
            Context::MediaControl,
            PotBinding::new("Volume", move |v| sim.borrow_mut().volume = v).with_icon("speaker"),
        );
    }

    // Elite data: cycle panels, pot scrubs the feed.
    {
        let sim = sim.clone();
        router.register_button(
            Context::EliteData,
            1,
            ButtonBinding::new("Prev Panel", move || {
                let mut sim = sim.borrow_mut();
                sim.data_panel = (sim.data_panel + DATA_PANELS.len() - 1) % DATA_PANELS.len();
                let line = format!("Panel: {}", sim.data_panel_name());
                sim.note(line);
            }),
        );
    }
    {
        let sim = sim.clone();
        router.register_button(
            Context::EliteData,
            3,
            ButtonBinding::new("Next Panel", move || {
                let mut sim = sim.borrow_mut();
                sim.data_panel = (sim.data_panel + 1) % DATA_PANELS.len();
                let line = format!("Panel: {}", sim.data_panel_name());
                sim.note(line);
            }),
        );
    }
    {
        let sim = sim.clone();
        router.register_pot(
            Context::EliteData,
            PotBinding::new("Feed Scroll", move |v| sim.borrow_mut().feed_scroll = v),
        );
    }

    // Settings: theme cycling, pot sets contrast.
    {
        let sim = sim.clone();
        router.register_button(
            Context::Settings,
            1,
            ButtonBinding::new("Cycle Theme", move || {
                let mut sim = sim.borrow_mut();
                sim.theme_index = (sim.theme_index + 1) % THEMES.len();
                let line = format!("Theme: {}", sim.theme_name());
                sim.note(line);
            })
            .with_icon("palette"),
        );
    }
    {
        let sim = sim.clone();
        router.register_pot(
            Context::Settings,
            PotBinding::new("Display Contrast", move |v| sim.borrow_mut().contrast = v),
        );
    }

    // Every screen except the menu floor gets the universal Back button.
    for context in Context::ALL {
        if context != Context::MainMenu {
            router.register_button(
                context,
                9,
                ButtonBinding::new("Back", go_back(router)).with_icon("back"),
            );
        }
    }
}
