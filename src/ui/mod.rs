//! User interface module
//!
//! Control panel buttons, status readouts and the info overlay, built from
//! plain UI nodes and themed with the feathers palette.

use bevy::prelude::*;

use crate::core::AppState;
use crate::orbital::SimulationSet;

pub mod panels;
pub mod state;
pub mod systems;

/// Plugin for user interface management
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, panels::setup_ui)
            .add_systems(OnEnter(AppState::Running), systems::reveal_control_panel)
            .add_systems(
                Update,
                (
                    systems::handle_ui_actions.before(SimulationSet::Clock),
                    (
                        systems::refresh_button_styles,
                        systems::update_focus_readout,
                        systems::update_info_overlay,
                    )
                        .after(SimulationSet::Camera),
                    systems::update_loading_text.run_if(in_state(AppState::Loading)),
                    systems::log_window_resize,
                ),
            );
    }
}
