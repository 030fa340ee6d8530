//! UI layout: control panel, readouts and the info overlay
use bevy::prelude::*;
use bevy_feathers::palette;

use crate::bodies::{BodyCatalog, BodyId, display_name};
use crate::orbital::TimeControl;
use crate::scene::VisibilitySettings;
use crate::ui::state::{
    ControlPanel, FocusReadout, InfoBody, InfoOverlay, InfoTitle, LoadingText, UiAction,
    speed_label, toggle_label,
};

pub const PANEL_BG: Color = Color::srgba(0.02, 0.04, 0.06, 0.8);
pub const BUTTON_BG: Color = Color::srgba(0.06, 0.12, 0.16, 0.9);
pub const BUTTON_BG_HOVER: Color = Color::srgba(0.08, 0.2, 0.26, 0.95);
pub const BUTTON_BG_ACTIVE: Color = Color::srgba(0.1, 0.32, 0.4, 0.98);
const INFO_TITLE_COLOR: Color = Color::srgb(1.0, 0.84, 0.0);

const HEADING_SIZE: f32 = 15.0;
const LABEL_SIZE: f32 = 13.0;

pub fn setup_ui(
    mut commands: Commands,
    catalog: Res<BodyCatalog>,
    time: Res<TimeControl>,
    visibility: Res<VisibilitySettings>,
) {
    commands.spawn((
        LoadingText,
        Text::new("Loading textures..."),
        TextFont {
            font_size: 20.0,
            ..default()
        },
        TextColor(palette::LIGHT_GRAY_1),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Percent(48.0),
            left: Val::Percent(42.0),
            ..default()
        },
    ));

    commands
        .spawn((
            ControlPanel,
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(10.0),
                left: Val::Px(10.0),
                display: Display::None,
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(6.0),
                padding: UiRect::all(Val::Px(10.0)),
                ..default()
            },
            BackgroundColor(PANEL_BG),
        ))
        .with_children(|panel| {
            heading(panel, "Planets");
            button_row(panel, |row| {
                for id in catalog.focusable_ids() {
                    action_button(row, UiAction::Focus(BodyId(id)), display_name(id));
                }
            });
            button_row(panel, |row| {
                action_button(row, UiAction::FreeCamera, "Free Camera".to_string());
            });

            heading(panel, "Time Speed");
            button_row(panel, |row| {
                for (index, multiplier) in time.presets.iter().enumerate() {
                    action_button(row, UiAction::Speed(index), speed_label(*multiplier));
                }
            });

            heading(panel, "Display");
            button_row(panel, |row| {
                action_button(
                    row,
                    UiAction::ToggleOrbits,
                    toggle_label("Show Orbits", visibility.show_orbits),
                );
                action_button(
                    row,
                    UiAction::ToggleMoons,
                    toggle_label("Show Moons", visibility.show_moons),
                );
            });

            panel.spawn((
                FocusReadout,
                Text::new("Focus: Free Camera"),
                TextFont {
                    font_size: HEADING_SIZE,
                    ..default()
                },
                TextColor(palette::ACCENT),
            ));
            panel.spawn((
                Text::new("WASD / Space / Ctrl to fly, drag to orbit, wheel to zoom"),
                TextFont {
                    font_size: LABEL_SIZE - 2.0,
                    ..default()
                },
                TextColor(palette::LIGHT_GRAY_2),
            ));
        });

    commands
        .spawn((
            InfoOverlay,
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(10.0),
                right: Val::Px(10.0),
                display: Display::None,
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(6.0),
                padding: UiRect::all(Val::Px(12.0)),
                min_width: Val::Px(220.0),
                ..default()
            },
            BackgroundColor(PANEL_BG),
        ))
        .with_children(|overlay| {
            overlay.spawn((
                InfoTitle,
                Text::new(""),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(INFO_TITLE_COLOR),
            ));
            overlay.spawn((
                InfoBody,
                Text::new(""),
                TextFont {
                    font_size: LABEL_SIZE,
                    ..default()
                },
                TextColor(palette::LIGHT_GRAY_1),
            ));
        });
}

fn heading(parent: &mut ChildSpawnerCommands, label: &str) {
    parent.spawn((
        Text::new(label),
        TextFont {
            font_size: HEADING_SIZE,
            ..default()
        },
        TextColor(palette::LIGHT_GRAY_2),
    ));
}

fn button_row(parent: &mut ChildSpawnerCommands, build: impl FnOnce(&mut ChildSpawnerCommands)) {
    parent
        .spawn(Node {
            flex_direction: FlexDirection::Row,
            flex_wrap: FlexWrap::Wrap,
            max_width: Val::Px(420.0),
            column_gap: Val::Px(4.0),
            row_gap: Val::Px(4.0),
            ..default()
        })
        .with_children(build);
}

fn action_button(parent: &mut ChildSpawnerCommands, action: UiAction, label: String) {
    parent
        .spawn((
            Button,
            action,
            Node {
                padding: UiRect::axes(Val::Px(8.0), Val::Px(4.0)),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(BUTTON_BG),
        ))
        .with_children(|button| {
            button.spawn((
                Text::new(label),
                TextFont {
                    font_size: LABEL_SIZE,
                    ..default()
                },
                TextColor(palette::LIGHT_GRAY_1),
            ));
        });
}
