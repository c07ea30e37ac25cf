use egui_kittest::Harness;
use roster_business::TableConfig;
use roster_ui::RosterApp;
use roster_ui::state::{Intent, State};
use roster_ui::widgets::roster_table;

/// Frames to run so that an applied intent shows up on screen.
pub const UI_PROPAGATION_FRAMES: usize = 3;

pub fn state_with(config: &TableConfig) -> State {
    State::new(config).expect("table graph is acyclic")
}

#[allow(unused)]
pub fn table_harness<'a>() -> Harness<'a, State> {
    let mut harness = Harness::new_ui_state(roster_table, state_with(&TableConfig::default()));
    harness.step();
    harness
}

#[allow(unused)]
pub fn app_harness<'a>() -> Harness<'a, RosterApp> {
    let app = RosterApp::new(state_with(&TableConfig::default()));
    let mut harness = Harness::new_eframe(|_| app);
    harness.step();
    harness
}

/// Applies intents as if the widgets had pushed them, then redraws.
#[allow(unused)]
pub fn apply(harness: &mut Harness<'_, State>, intents: impl IntoIterator<Item = Intent>) {
    harness.state_mut().apply(intents);
    settle(harness);
}

pub fn settle<T>(harness: &mut Harness<'_, T>) {
    for _ in 0..UI_PROPAGATION_FRAMES {
        harness.step();
    }
}
