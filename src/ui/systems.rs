//! UI systems: button handling and readout refresh
use bevy::prelude::*;
use bevy::window::WindowResized;

use crate::bodies::BodyCatalog;
use crate::camera::CameraState;
use crate::orbital::{SimulationClock, TimeControl};
use crate::scene::VisibilitySettings;
use crate::textures::TextureLibrary;
use crate::ui::panels::{BUTTON_BG, BUTTON_BG_ACTIVE, BUTTON_BG_HOVER};
use crate::ui::state::{
    ControlPanel, FocusReadout, InfoBody, InfoOverlay, InfoTitle, LoadingText, UiAction,
    focus_label, info_card, loading_label, toggle_label,
};

/// Apply the action of every button pressed this frame.
pub fn handle_ui_actions(
    buttons: Query<(&Interaction, &UiAction), (Changed<Interaction>, With<Button>)>,
    mut camera: ResMut<CameraState>,
    mut time: ResMut<TimeControl>,
    mut clock: ResMut<SimulationClock>,
    mut visibility: ResMut<VisibilitySettings>,
) {
    for (interaction, action) in &buttons {
        if *interaction != Interaction::Pressed {
            continue;
        }
        match *action {
            UiAction::Focus(id) => {
                camera.toggle_focus(id);
                info!("Camera focus: {:?}", camera.mode);
            }
            UiAction::FreeCamera => {
                camera.release();
                info!("Camera released to free flight");
            }
            UiAction::Speed(index) => {
                if let Some(multiplier) = time.select(index) {
                    clock.time_scale = multiplier;
                    info!("Time speed set to {multiplier}x");
                }
            }
            UiAction::ToggleOrbits => {
                visibility.show_orbits = !visibility.show_orbits;
                debug!("Show orbits: {}", visibility.show_orbits);
            }
            UiAction::ToggleMoons => {
                visibility.show_moons = !visibility.show_moons;
                debug!("Show moons: {}", visibility.show_moons);
            }
        }
    }
}

/// Highlight buttons from the current state and refresh toggle labels.
pub fn refresh_button_styles(
    camera: Res<CameraState>,
    time: Res<TimeControl>,
    visibility: Res<VisibilitySettings>,
    mut buttons: Query<(&UiAction, &Interaction, &mut BackgroundColor, &Children)>,
    mut labels: Query<&mut Text>,
) {
    for (action, interaction, mut background, children) in &mut buttons {
        let color = if action.is_active(&camera, &time, &visibility) {
            BUTTON_BG_ACTIVE
        } else if *interaction == Interaction::Hovered {
            BUTTON_BG_HOVER
        } else {
            BUTTON_BG
        };
        if background.0 != color {
            background.0 = color;
        }

        let label = match action {
            UiAction::ToggleOrbits => toggle_label("Show Orbits", visibility.show_orbits),
            UiAction::ToggleMoons => toggle_label("Show Moons", visibility.show_moons),
            _ => continue,
        };
        for child in children.iter() {
            if let Ok(mut text) = labels.get_mut(child)
                && text.0 != label
            {
                text.0 = label.clone();
            }
        }
    }
}

pub fn update_focus_readout(
    camera: Res<CameraState>,
    mut readouts: Query<&mut Text, With<FocusReadout>>,
) {
    let label = focus_label(&camera);
    for mut text in &mut readouts {
        if text.0 != label {
            text.0 = label.clone();
        }
    }
}

pub fn update_loading_text(
    library: Res<TextureLibrary>,
    mut loading: Query<&mut Text, With<LoadingText>>,
) {
    let label = loading_label(library.tracker.progress());
    for mut text in &mut loading {
        if text.0 != label {
            text.0 = label.clone();
        }
    }
}

/// Show the fact card for the focused body, hide it otherwise.
pub fn update_info_overlay(
    camera: Res<CameraState>,
    catalog: Res<BodyCatalog>,
    mut overlay: Query<&mut Node, With<InfoOverlay>>,
    mut titles: Query<&mut Text, (With<InfoTitle>, Without<InfoBody>)>,
    mut bodies: Query<&mut Text, (With<InfoBody>, Without<InfoTitle>)>,
) {
    let Ok(mut node) = overlay.single_mut() else {
        return;
    };

    let Some((title, body)) = info_card(&camera, &catalog) else {
        node.display = Display::None;
        return;
    };
    node.display = Display::Flex;
    if let Ok(mut text) = titles.single_mut() {
        text.0 = title;
    }
    if let Ok(mut text) = bodies.single_mut() {
        text.0 = body;
    }
}

/// Swap the loading readout for the control panel once the scene exists.
pub fn reveal_control_panel(
    mut panels: Query<&mut Node, (With<ControlPanel>, Without<LoadingText>)>,
    mut loading: Query<&mut Node, (With<LoadingText>, Without<ControlPanel>)>,
) {
    for mut node in &mut panels {
        node.display = Display::Flex;
    }
    for mut node in &mut loading {
        node.display = Display::None;
    }
}

/// Projection aspect is handled by the camera; this only traces the change.
pub fn log_window_resize(mut resized: MessageReader<WindowResized>) {
    for message in resized.read() {
        debug!("Window resized to {}x{}", message.width, message.height);
    }
}
