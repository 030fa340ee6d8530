//! UI markers and the text each readout shows

use bevy::prelude::*;

use crate::bodies::{BodyCatalog, BodyId, display_name};
use crate::camera::CameraState;
use crate::orbital::TimeControl;
use crate::scene::VisibilitySettings;

/// What a control panel button does when pressed.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub enum UiAction {
    /// Focus a body, or release it if already focused.
    Focus(BodyId),
    FreeCamera,
    /// Index into `TimeControl::presets`.
    Speed(usize),
    ToggleOrbits,
    ToggleMoons,
}

impl UiAction {
    /// Whether the button should be drawn highlighted for the current state.
    pub fn is_active(
        &self,
        camera: &CameraState,
        time: &TimeControl,
        visibility: &VisibilitySettings,
    ) -> bool {
        match *self {
            UiAction::Focus(id) => camera.focused() == Some(id),
            UiAction::FreeCamera => camera.focused().is_none(),
            UiAction::Speed(index) => time.active == index,
            UiAction::ToggleOrbits => visibility.show_orbits,
            UiAction::ToggleMoons => visibility.show_moons,
        }
    }
}

/// Root node of the button panel, hidden until textures settle.
#[derive(Component)]
pub struct ControlPanel;

#[derive(Component)]
pub struct LoadingText;

#[derive(Component)]
pub struct FocusReadout;

/// Top-right fact card for the focused body.
#[derive(Component)]
pub struct InfoOverlay;

#[derive(Component)]
pub struct InfoTitle;

#[derive(Component)]
pub struct InfoBody;

/// Label for a time preset button, e.g. "0.5x".
pub fn speed_label(multiplier: f32) -> String {
    format!("{multiplier}x")
}

pub fn toggle_label(name: &str, shown: bool) -> String {
    let mark = if shown { "[x]" } else { "[ ]" };
    format!("{mark} {name}")
}

pub fn focus_label(camera: &CameraState) -> String {
    match camera.focused() {
        Some(id) => format!("Focus: {}", display_name(id.0)),
        None => "Focus: Free Camera".to_string(),
    }
}

pub fn loading_label((settled, total): (usize, usize)) -> String {
    format!("Loading textures... {settled}/{total}")
}

/// Title and fact lines for the overlay, or `None` when nothing is focused
/// or the body has no facts.
pub fn info_card(camera: &CameraState, catalog: &BodyCatalog) -> Option<(String, String)> {
    let id = camera.focused()?;
    let facts = catalog.facts(id.0)?;
    let body = facts
        .iter()
        .map(|(label, value)| format!("{label}: {value}"))
        .collect::<Vec<_>>()
        .join("\n");
    Some((display_name(id.0), body))
}
