use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::light::GlobalAmbientLight;
use bevy::prelude::*;
use bevy::render::RenderPlugin;
use bevy::render::settings::{RenderCreation, WgpuSettings};
use bevy::window::{PresentMode, Window, WindowPlugin};

use bevy_feathers::FeathersPlugins;
use bevy_feathers::dark_theme::create_dark_theme;
use bevy_feathers::palette;
use bevy_feathers::theme::UiTheme;

#[cfg(feature = "dev")]
use bevy::dev_tools::fps_overlay::FpsOverlayPlugin;

mod bodies;
mod camera;
mod core;
mod orbital;
mod scene;
mod textures;
mod ui;

// Import plugins
use bodies::BodiesPlugin;
use camera::{CameraPlugin, MainCamera, default_camera_transform};
use crate::core::CorePlugin;
use orbital::OrbitalPlugin;
use scene::ScenePlugin;
use textures::TexturePlugin;
use ui::UiPlugin;

/// Vertical field of view of the main camera, in degrees.
const CAMERA_FOV_DEGREES: f32 = 75.0;

// Setup camera and ambient light; bodies are spawned once textures settle.
pub fn setup(mut commands: Commands) {
    // Keeps the night side of each planet faintly visible.
    commands.insert_resource(GlobalAmbientLight {
        color: Color::srgb_u8(0x40, 0x40, 0x40),
        brightness: 80.0,
        ..default()
    });

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: 0.1,
            far: 10_000.0,
            ..default()
        }),
        Camera {
            order: 0,
            clear_color: ClearColorConfig::Custom(Color::BLACK),
            ..default()
        },
        MainCamera,
        Tonemapping::TonyMcMapface,
        default_camera_transform(),
        Name::new("Main Camera"),
    ));
}

fn main() {
    let mut app = App::new();

    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Bevy Solar System".to_string(),
                    present_mode: PresentMode::AutoVsync,
                    ..default()
                }),
                ..default()
            })
            .set(RenderPlugin {
                render_creation: RenderCreation::Automatic(WgpuSettings { ..default() }),
                ..default()
            }),
    );

    #[cfg(feature = "dev")]
    app.add_plugins(FpsOverlayPlugin::default());

    // Feathers initializes `UiTheme` but does not populate it by default.
    let mut theme = UiTheme(create_dark_theme());
    theme.set_color("feathers.text.main", palette::LIGHT_GRAY_1);
    theme.set_color("feathers.text.dim", palette::LIGHT_GRAY_2);
    theme.set_color("feathers.focus", palette::ACCENT);
    app.insert_resource(theme);
    app.add_plugins(FeathersPlugins);

    // CorePlugin first: the others read SolarConfig while building.
    app.add_plugins(CorePlugin);
    app.add_plugins(BodiesPlugin);
    app.add_plugins(TexturePlugin);
    app.add_plugins(OrbitalPlugin);
    app.add_plugins(ScenePlugin);
    app.add_plugins(CameraPlugin);
    app.add_plugins(UiPlugin);
    app.add_systems(Startup, setup);

    app.run();
}
